//! Flight inventory lookup.
//!
//! Defines the `FlightInventory` async trait and a deterministic mock that
//! always offers the same three flights.

use async_trait::async_trait;
use chrono::NaiveDate;

use skyroute_core::FlightOffer;

use crate::error::ToolError;

/// Searches available flights for a route and date.
#[async_trait]
pub trait FlightInventory: Send + Sync {
    /// Return offers in the order the backend ranks them.
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<Vec<FlightOffer>, ToolError>;
}

/// Inventory that ignores the route and returns a fixed set of offers.
pub struct MockFlightInventory;

impl MockFlightInventory {
    fn offer(flight_id: &str, airline: &str, departure_time: &str, price: &str) -> FlightOffer {
        FlightOffer {
            flight_id: flight_id.to_string(),
            airline: airline.to_string(),
            departure_time: departure_time.to_string(),
            price: price.to_string(),
        }
    }
}

#[async_trait]
impl FlightInventory for MockFlightInventory {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<Vec<FlightOffer>, ToolError> {
        tracing::info!(origin, destination, %date, "Tool call: inventory search");

        Ok(vec![
            Self::offer("BA-2847", "British Airways", "09:00 AM", "$420"),
            Self::offer("AF-1923", "Air France", "02:00 PM", "$300"),
            Self::offer("LH-5614", "Lufthansa", "08:00 PM", "$600"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()
    }

    #[tokio::test]
    async fn test_mock_inventory_returns_three_offers_in_order() {
        let offers = MockFlightInventory
            .search("London", "Paris", date())
            .await
            .unwrap();
        let ids: Vec<&str> = offers.iter().map(|o| o.flight_id.as_str()).collect();
        assert_eq!(ids, vec!["BA-2847", "AF-1923", "LH-5614"]);
    }

    #[tokio::test]
    async fn test_mock_inventory_prices_are_display_strings() {
        let offers = MockFlightInventory
            .search("London", "Paris", date())
            .await
            .unwrap();
        assert_eq!(offers[1].airline, "Air France");
        assert_eq!(offers[1].price, "$300");
        assert_eq!(offers[1].departure_time, "02:00 PM");
    }

    #[tokio::test]
    async fn test_mock_inventory_is_deterministic() {
        let first = MockFlightInventory.search("A", "B", date()).await.unwrap();
        let second = MockFlightInventory.search("C", "D", date()).await.unwrap();
        assert_eq!(first, second);
    }
}
