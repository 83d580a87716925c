//! Conversational travel orchestration for SkyRoute.
//!
//! Interprets user turns through a language model, routes them to flight
//! search or booking, resolves references like "the cheapest one" against
//! the last search, and phrases the outcome as a reply.

pub mod date;
pub mod error;
pub mod gemini;
pub mod intent;
pub mod llm;
pub mod memory;
pub mod orchestrator;
pub mod response;

pub use date::DateResolver;
pub use error::ChatError;
pub use gemini::GeminiClient;
pub use intent::{BookingRequest, Intent, IntentInterpreter, InterpretError, SearchRequest};
pub use llm::{LlmClient, LlmError, LlmRequest};
pub use memory::SessionMemory;
pub use orchestrator::TravelOrchestrator;
pub use response::{ResponseComposer, CLARIFICATION_REPLY, GENERAL_REPLY};
