//! Travel orchestrator: routes each user turn to a search or a booking.
//!
//! One orchestrator owns one conversation. Searches refill its
//! [`SessionMemory`]; bookings resolve their target against it.

use std::sync::Arc;

use skyroute_core::{FlightRecord, SearchContext, SkyrouteConfig};
use skyroute_tools::{FlightInventory, ReservationService};

use crate::date::DateResolver;
use crate::error::ChatError;
use crate::gemini::GeminiClient;
use crate::intent::{BookingRequest, Intent, IntentInterpreter, SearchRequest};
use crate::llm::LlmClient;
use crate::memory::SessionMemory;
use crate::response::{
    booking_context, search_context, ResponseComposer, CLARIFICATION_REPLY, GENERAL_REPLY,
};

/// Booking targets containing this word pick the lowest fare.
const CHEAPEST_KEYWORD: &str = "cheapest";

/// Per-conversation coordinator of interpretation, tools and replies.
pub struct TravelOrchestrator {
    interpreter: IntentInterpreter,
    composer: ResponseComposer,
    inventory: Arc<dyn FlightInventory>,
    reservations: Arc<dyn ReservationService>,
    dates: DateResolver,
    memory: SessionMemory,
}

impl TravelOrchestrator {
    /// Create an orchestrator that uses `llm` for both interpretation and replies.
    pub fn new(
        llm: Arc<dyn LlmClient>,
        inventory: Arc<dyn FlightInventory>,
        reservations: Arc<dyn ReservationService>,
        config: &SkyrouteConfig,
    ) -> Self {
        Self {
            interpreter: IntentInterpreter::new(Arc::clone(&llm), config.agent.clone()),
            composer: ResponseComposer::new(llm),
            inventory,
            reservations,
            dates: DateResolver::system(),
            memory: SessionMemory::new(),
        }
    }

    /// Create an orchestrator backed by Gemini.
    ///
    /// Fails with [`ChatError::MissingCredential`] when no API key is
    /// configured, before any turn can be handled.
    pub fn from_config(
        config: &SkyrouteConfig,
        inventory: Arc<dyn FlightInventory>,
        reservations: Arc<dyn ReservationService>,
    ) -> Result<Self, ChatError> {
        let api_key = config
            .llm
            .resolve_api_key()
            .ok_or_else(|| ChatError::MissingCredential(config.llm.api_key_env.clone()))?;
        let client = GeminiClient::new(api_key, &config.llm)?;
        tracing::info!(model = %config.llm.model, "Gemini client initialised");
        Ok(Self::new(Arc::new(client), inventory, reservations, config))
    }

    /// Replace the date source, e.g. to pin "today" in tests.
    pub fn with_date_resolver(mut self, dates: DateResolver) -> Self {
        self.dates = dates;
        self
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    /// Handle one user turn and return the reply text.
    ///
    /// Interpretation problems degrade to the general reply. Tool and
    /// generation failures are returned to the caller.
    pub async fn handle_request(&mut self, user_input: &str) -> Result<String, ChatError> {
        let intent = match self.interpreter.interpret(user_input).await {
            Ok(intent) => intent,
            Err(e) => {
                tracing::error!(error = %e, "Intent extraction failed");
                Intent::General
            }
        };
        tracing::info!(intent = intent.label(), data = ?intent, "Intent detected");

        match intent {
            Intent::Search(request) => self.handle_search(request).await,
            Intent::Book(request) => self.handle_booking(request).await,
            Intent::General => Ok(GENERAL_REPLY.to_string()),
        }
    }

    async fn handle_search(&mut self, request: SearchRequest) -> Result<String, ChatError> {
        let date = self.dates.resolve(request.date_reference.as_deref());

        let offers = self
            .inventory
            .search(&request.origin, &request.destination, date)
            .await?;

        self.memory
            .replace_cache(&offers, &request.origin, &request.destination);
        self.memory.record_search(SearchContext {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            date,
        });

        let context = search_context(
            self.memory.records(),
            &request.origin,
            &request.destination,
            date,
        );
        self.composer
            .compose(&context)
            .await
            .map_err(ChatError::Generation)
    }

    async fn handle_booking(&self, request: BookingRequest) -> Result<String, ChatError> {
        let Some(record) = self.resolve_booking_target(&request.target) else {
            tracing::info!(booking_target = %request.target, "Entity resolution found no flight");
            return Ok(CLARIFICATION_REPLY.to_string());
        };
        tracing::info!(
            booking_target = %request.target,
            flight_id = record.flight_id(),
            "Entity resolution matched flight"
        );

        let booking = self
            .reservations
            .commit(record.flight_id(), &request.passenger)
            .await?;

        let context = booking_context(record, &booking);
        self.composer
            .compose(&context)
            .await
            .map_err(ChatError::Generation)
    }

    /// Map a booking target onto a cached flight.
    ///
    /// "cheapest" anywhere in the target picks the lowest fare. Otherwise the
    /// target is tried as a carrier fragment and then as a flight id. A blank
    /// target resolves to nothing.
    pub fn resolve_booking_target(&self, target: &str) -> Option<&FlightRecord> {
        let target = target.trim().to_lowercase();
        if target.is_empty() {
            return None;
        }

        if target.contains(CHEAPEST_KEYWORD) {
            return self.memory.find_cheapest();
        }

        self.memory
            .find_by_carrier_fuzzy(&target)
            .or_else(|| self.memory.find_by_id(&target.to_uppercase()))
    }
}
