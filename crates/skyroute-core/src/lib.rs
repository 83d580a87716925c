pub mod config;
pub mod error;
pub mod types;

pub use config::{AgentConfig, GeneralConfig, LlmConfig, SkyrouteConfig};
pub use error::{Result, SkyrouteError};
pub use types::*;
