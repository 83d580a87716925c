//! Intent interpretation.
//!
//! Asks the language model to turn a user turn into a JSON payload, then
//! validates that payload into a typed [`Intent`]. Slot defaults are applied
//! here so the router never sees a half-filled request.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::{Map, Value};

use skyroute_core::AgentConfig;

use crate::llm::{LlmClient, LlmError, LlmRequest};

/// Markdown code fences the model likes to wrap JSON in.
static CODE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:json)?").expect("Invalid code fence regex"));

const INTERPRETATION_INSTRUCTION: &str = r#"Analyze the user input and extract structured data.

Output valid JSON with these keys:
- "intent": "SEARCH", "BOOK", or "GENERAL"
- "origin": City name or null
- "destination": City name or null
- "date_reference": "tomorrow", "next monday", "specific date", or null
- "booking_target": If booking, the airline name (e.g., "Air France") or "cheapest", or null
- "passenger": Passenger name or "Guest"

Return ONLY JSON."#;

// =============================================================================
// Types
// =============================================================================

/// Slots of a flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    /// Coarse date reference such as "tomorrow"; resolved later.
    pub date_reference: Option<String>,
}

/// Slots of a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// Carrier name, "cheapest", or a flight id. Empty when the user named nothing.
    pub target: String,
    pub passenger: String,
}

/// What the user wants from this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Search(SearchRequest),
    Book(BookingRequest),
    General,
}

impl Intent {
    /// Tag used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Search(_) => "SEARCH",
            Intent::Book(_) => "BOOK",
            Intent::General => "GENERAL",
        }
    }
}

/// Why a turn could not be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum InterpretError {
    #[error("interpretation service failed: {0}")]
    Service(#[from] LlmError),
    #[error("malformed interpretation: {0}")]
    Malformed(String),
}

// =============================================================================
// Parsing
// =============================================================================

/// Remove markdown code fences and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE_RE.replace_all(text, "").trim().to_string()
}

/// Non-blank string slot, trimmed. Nulls and non-strings count as absent.
fn slot(payload: &Map<String, Value>, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Validate a raw model answer into an [`Intent`].
///
/// A missing or unknown intent tag is a general turn, not an error; only
/// text that is not a JSON object is rejected.
pub fn parse_intent(raw: &str, defaults: &AgentConfig) -> Result<Intent, InterpretError> {
    let cleaned = strip_code_fences(raw);
    let value: Value =
        serde_json::from_str(&cleaned).map_err(|e| InterpretError::Malformed(e.to_string()))?;
    let Value::Object(payload) = value else {
        return Err(InterpretError::Malformed(
            "expected a JSON object".to_string(),
        ));
    };

    let tag = slot(&payload, "intent")
        .unwrap_or_default()
        .to_uppercase();

    let intent = match tag.as_str() {
        "SEARCH" => Intent::Search(SearchRequest {
            origin: slot(&payload, "origin").unwrap_or_else(|| defaults.default_origin.clone()),
            destination: slot(&payload, "destination")
                .unwrap_or_else(|| defaults.default_destination.clone()),
            date_reference: slot(&payload, "date_reference"),
        }),
        "BOOK" => Intent::Book(BookingRequest {
            target: slot(&payload, "booking_target").unwrap_or_default(),
            passenger: slot(&payload, "passenger")
                .unwrap_or_else(|| defaults.default_passenger.clone()),
        }),
        _ => Intent::General,
    };
    Ok(intent)
}

// =============================================================================
// IntentInterpreter
// =============================================================================

/// Front end of the interpretation service.
pub struct IntentInterpreter {
    client: Arc<dyn LlmClient>,
    defaults: AgentConfig,
}

impl IntentInterpreter {
    pub fn new(client: Arc<dyn LlmClient>, defaults: AgentConfig) -> Self {
        Self { client, defaults }
    }

    fn build_request(&self, user_input: &str) -> LlmRequest {
        LlmRequest::new(
            INTERPRETATION_INSTRUCTION,
            format!("User Input: \"{}\"", user_input),
        )
    }

    /// Ask the model for the intent of `user_input`.
    pub async fn interpret(&self, user_input: &str) -> Result<Intent, InterpretError> {
        let raw = self.client.complete(self.build_request(user_input)).await?;
        tracing::debug!(raw = %raw, "Interpretation received");
        parse_intent(&raw, &self.defaults)
    }
}
