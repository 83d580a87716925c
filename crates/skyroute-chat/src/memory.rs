//! Session memory: the flight cache behind follow-up references.
//!
//! Holds the offers of the most recent search so later turns can say
//! "the cheapest one", "the Lufthansa flight" or quote a flight id.

use skyroute_core::{FlightOffer, FlightRecord, SearchContext};

/// Lower-case and drop spaces, so "British Airways" becomes "britishairways".
fn normalize_carrier(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

/// Working memory of one conversation.
///
/// Only ever reflects the latest search; every [`replace_cache`] call
/// discards the previous records wholesale.
///
/// [`replace_cache`]: SessionMemory::replace_cache
#[derive(Debug, Default)]
pub struct SessionMemory {
    flights: Vec<FlightRecord>,
    last_search: Option<SearchContext>,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cache with records built from `offers`, preserving order.
    ///
    /// Prices that cannot be parsed become the sentinel price. Offers without
    /// a flight id cannot be referenced later and are skipped. Returns the
    /// number of cached records.
    pub fn replace_cache(
        &mut self,
        offers: &[FlightOffer],
        origin: &str,
        destination: &str,
    ) -> usize {
        let mut flights = Vec::with_capacity(offers.len());
        for offer in offers {
            match FlightRecord::from_offer(offer, origin, destination) {
                Ok(record) => flights.push(record),
                Err(e) => tracing::warn!(error = %e, "Skipping offer"),
            }
        }
        self.flights = flights;

        tracing::info!(count = self.flights.len(), "Memory updated with flight options");
        self.flights.len()
    }

    /// Remember the route and date of the search that filled the cache.
    pub fn record_search(&mut self, context: SearchContext) {
        self.last_search = Some(context);
    }

    /// First cached flight whose carrier contains `query`, ignoring case and spaces.
    pub fn find_by_carrier_fuzzy(&self, query: &str) -> Option<&FlightRecord> {
        let needle = normalize_carrier(query);
        self.flights
            .iter()
            .find(|f| normalize_carrier(f.airline()).contains(&needle))
    }

    /// Lowest-priced cached flight; the earliest one wins a tie.
    pub fn find_cheapest(&self) -> Option<&FlightRecord> {
        // min_by_key returns the first of several equal minima.
        self.flights.iter().min_by_key(|f| f.price())
    }

    /// Cached flight with exactly this id.
    pub fn find_by_id(&self, flight_id: &str) -> Option<&FlightRecord> {
        self.flights.iter().find(|f| f.flight_id() == flight_id)
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn last_search(&self) -> Option<&SearchContext> {
        self.last_search.as_ref()
    }
}
