//! Reservation commit.
//!
//! Defines the `ReservationService` async trait and a mock that confirms
//! every request with a freshly generated PNR.

use async_trait::async_trait;
use uuid::Uuid;

use skyroute_core::{BookingResult, BookingStatus};

use crate::error::ToolError;

/// Commits a seat on a flight for a passenger.
#[async_trait]
pub trait ReservationService: Send + Sync {
    async fn commit(&self, flight_id: &str, passenger: &str) -> Result<BookingResult, ToolError>;
}

/// Reservation service that confirms every well-formed request.
pub struct MockReservationService;

/// Generate a confirmation code: `PNR` followed by six upper-case hex digits.
fn generate_pnr() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("PNR{}", id[..6].to_uppercase())
}

#[async_trait]
impl ReservationService for MockReservationService {
    async fn commit(&self, flight_id: &str, passenger: &str) -> Result<BookingResult, ToolError> {
        if flight_id.trim().is_empty() {
            return Err(ToolError::InvalidRequest(
                "flight id must not be empty".to_string(),
            ));
        }
        if passenger.trim().is_empty() {
            return Err(ToolError::InvalidRequest(
                "passenger name must not be empty".to_string(),
            ));
        }

        tracing::info!(flight_id, passenger, "Tool call: commit reservation");

        Ok(BookingResult {
            status: BookingStatus::Confirmed,
            pnr: generate_pnr(),
            flight_id: flight_id.to_string(),
            passenger: passenger.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_pnr_format() {
        let pnr = generate_pnr();
        assert_eq!(pnr.len(), 9);
        assert!(pnr.starts_with("PNR"));
        assert!(pnr[3..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[tokio::test]
    async fn test_commit_echoes_request() {
        let result = MockReservationService
            .commit("LH-5614", "Robin")
            .await
            .unwrap();
        assert_eq!(result.status, BookingStatus::Confirmed);
        assert_eq!(result.flight_id, "LH-5614");
        assert_eq!(result.passenger, "Robin");
        assert!(result.pnr.starts_with("PNR"));
    }

    #[tokio::test]
    async fn test_commit_generates_fresh_codes() {
        let a = MockReservationService.commit("AF-1923", "Robin").await.unwrap();
        let b = MockReservationService.commit("AF-1923", "Robin").await.unwrap();
        assert_ne!(a.pnr, b.pnr);
    }

    #[tokio::test]
    async fn test_commit_empty_flight_id() {
        let err = MockReservationService.commit("", "Robin").await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_commit_blank_passenger() {
        let err = MockReservationService
            .commit("AF-1923", "  ")
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidRequest(_)));
    }
}
