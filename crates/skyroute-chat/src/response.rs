//! Reply generation.
//!
//! Builds the plain-text fact sheets handed to the generation service and
//! holds the fixed replies that never go through the model.

use std::sync::Arc;

use chrono::NaiveDate;

use skyroute_core::{BookingResult, FlightRecord};

use crate::date::DATE_FORMAT;
use crate::llm::{LlmClient, LlmError, LlmRequest};

/// Reply for turns that are neither searches nor bookings.
pub const GENERAL_REPLY: &str =
    "I am a Travel Agent system. I can help you search for and book flights. How may I assist?";

/// Reply when a booking target matches nothing in the current results.
pub const CLARIFICATION_REPLY: &str = "I could not identify the flight you wish to book. \
Please specify the airline name or flight ID from the search results.";

const GENERATION_INSTRUCTION: &str = "You are a professional corporate travel assistant. \
Based on the SYSTEM CONTEXT below, generate a concise, professional response to the user. \
Do not make up new facts. Use the provided context.";

/// Fact sheet for a completed search.
pub fn search_context(
    records: &[FlightRecord],
    origin: &str,
    destination: &str,
    date: NaiveDate,
) -> String {
    let mut lines = vec![format!(
        "Search completed for {} to {} on {}. Found {} options:",
        origin,
        destination,
        date.format(DATE_FORMAT),
        records.len()
    )];
    for r in records {
        lines.push(format!(
            "- {} ({}): {} at {}",
            r.airline(),
            r.flight_id(),
            r.raw_price(),
            r.departure()
        ));
    }
    lines.join("\n")
}

/// Fact sheet for a committed booking.
pub fn booking_context(record: &FlightRecord, booking: &BookingResult) -> String {
    [
        "Booking successful.".to_string(),
        format!("Airline: {}", record.airline()),
        format!("Flight ID: {}", booking.flight_id),
        format!("Passenger: {}", booking.passenger),
        format!("PNR: {}", booking.pnr),
        format!("Status: {}", booking.status),
    ]
    .join("\n")
}

/// Front end of the generation service.
pub struct ResponseComposer {
    client: Arc<dyn LlmClient>,
}

impl ResponseComposer {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Phrase `context` as a reply to the user.
    pub async fn compose(&self, context: &str) -> Result<String, LlmError> {
        let request = LlmRequest::new(
            GENERATION_INSTRUCTION,
            format!("SYSTEM CONTEXT:\n{}", context),
        );
        let text = self.client.complete(request).await?;
        Ok(text.trim().to_string())
    }
}
