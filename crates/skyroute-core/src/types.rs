use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SkyrouteError};

/// Price assigned when a display price carries no usable digits.
pub const UNPARSEABLE_PRICE: u64 = 999_999;

/// Parse a display price such as `"$420"` into whole units.
///
/// Every non-digit character is dropped and the remaining digits are read in
/// order. A string with no digits (or a numeral too large for `u64`) yields
/// [`UNPARSEABLE_PRICE`].
pub fn parse_price(display: &str) -> u64 {
    let digits: String = display.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(UNPARSEABLE_PRICE)
}

// =============================================================================
// Flights
// =============================================================================

/// One raw offer as returned by the inventory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub flight_id: String,
    pub airline: String,
    pub departure_time: String,
    pub price: String,
}

/// A cached, validated flight offer from the most recent search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    flight_id: String,
    airline: String,
    price: u64,
    raw_price: String,
    departure: String,
    origin: String,
    destination: String,
}

impl FlightRecord {
    /// Build a record from a raw offer and the route it was searched on.
    ///
    /// Fails only when the offer has a blank identifier; an unparseable price
    /// falls back to [`UNPARSEABLE_PRICE`].
    pub fn from_offer(offer: &FlightOffer, origin: &str, destination: &str) -> Result<Self> {
        if offer.flight_id.trim().is_empty() {
            return Err(SkyrouteError::InvalidOffer(format!(
                "offer from '{}' has no flight id",
                offer.airline
            )));
        }

        Ok(Self {
            flight_id: offer.flight_id.clone(),
            airline: offer.airline.clone(),
            price: parse_price(&offer.price),
            raw_price: offer.price.clone(),
            departure: offer.departure_time.clone(),
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }

    pub fn flight_id(&self) -> &str {
        &self.flight_id
    }

    pub fn airline(&self) -> &str {
        &self.airline
    }

    /// Parsed price in whole units.
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Price exactly as the inventory displayed it.
    pub fn raw_price(&self) -> &str {
        &self.raw_price
    }

    pub fn departure(&self) -> &str {
        &self.departure
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

/// Route and date of the last completed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchContext {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

// =============================================================================
// Bookings
// =============================================================================

/// Reservation status reported by the commit service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Confirmed => write!(f, "CONFIRMED"),
        }
    }
}

/// Outcome of a committed reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResult {
    pub status: BookingStatus,
    /// Confirmation code (PNR).
    pub pnr: String,
    pub flight_id: String,
    pub passenger: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(id: &str, airline: &str, price: &str) -> FlightOffer {
        FlightOffer {
            flight_id: id.to_string(),
            airline: airline.to_string(),
            departure_time: "09:00 AM".to_string(),
            price: price.to_string(),
        }
    }

    // ---- parse_price ----

    #[test]
    fn test_parse_price_currency_prefix() {
        assert_eq!(parse_price("$420"), 420);
        assert_eq!(parse_price("EUR 300"), 300);
    }

    #[test]
    fn test_parse_price_joins_digits_in_order() {
        assert_eq!(parse_price("$1,250.99"), 125_099);
        assert_eq!(parse_price("1 2 3"), 123);
    }

    #[test]
    fn test_parse_price_leading_zeros() {
        assert_eq!(parse_price("$007"), 7);
    }

    #[test]
    fn test_parse_price_no_digits_is_sentinel() {
        assert_eq!(parse_price("N/A"), UNPARSEABLE_PRICE);
        assert_eq!(parse_price(""), UNPARSEABLE_PRICE);
        assert_eq!(parse_price("$"), UNPARSEABLE_PRICE);
    }

    #[test]
    fn test_parse_price_overflow_is_sentinel() {
        assert_eq!(parse_price(&"9".repeat(40)), UNPARSEABLE_PRICE);
    }

    // ---- FlightRecord ----

    #[test]
    fn test_record_from_offer() {
        let raw = offer("BA-2847", "British Airways", "$420");
        let record = FlightRecord::from_offer(&raw, "London", "Paris").unwrap();
        assert_eq!(record.flight_id(), "BA-2847");
        assert_eq!(record.airline(), "British Airways");
        assert_eq!(record.price(), 420);
        assert_eq!(record.raw_price(), "$420");
        assert_eq!(record.departure(), "09:00 AM");
        assert_eq!(record.origin(), "London");
        assert_eq!(record.destination(), "Paris");
    }

    #[test]
    fn test_record_unparseable_price_keeps_raw() {
        let record =
            FlightRecord::from_offer(&offer("XX-1", "Mystery Air", "call us"), "A", "B").unwrap();
        assert_eq!(record.price(), UNPARSEABLE_PRICE);
        assert_eq!(record.raw_price(), "call us");
    }

    #[test]
    fn test_record_blank_id_rejected() {
        let err = FlightRecord::from_offer(&offer("  ", "Ghost Air", "$10"), "A", "B").unwrap_err();
        assert!(matches!(err, SkyrouteError::InvalidOffer(_)));
        assert!(err.to_string().contains("Ghost Air"));
    }

    // ---- BookingStatus ----

    #[test]
    fn test_booking_status_display_and_serde() {
        assert_eq!(BookingStatus::Confirmed.to_string(), "CONFIRMED");
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"CONFIRMED\"");
    }
}
