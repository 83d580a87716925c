//! Error types for the travel orchestrator.

use skyroute_tools::ToolError;

use crate::llm::LlmError;

/// Errors surfaced by the orchestrator to its caller.
///
/// Interpretation failures and unresolved booking targets never show up
/// here: the first downgrade to a general reply, the second is answered with
/// a clarification.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("missing credential: set {0}")]
    MissingCredential(String),
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("reply generation failed: {0}")]
    Generation(#[source] LlmError),
    #[error("tool error: {0}")]
    Tool(#[from] ToolError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::MissingCredential("GEMINI_API_KEY".to_string());
        assert_eq!(err.to_string(), "missing credential: set GEMINI_API_KEY");

        let err = ChatError::Generation(LlmError::Http("timeout".to_string()));
        assert_eq!(err.to_string(), "reply generation failed: http error: timeout");
    }

    #[test]
    fn test_chat_error_from_tool_error() {
        let err: ChatError = ToolError::Unavailable("down".to_string()).into();
        assert!(matches!(err, ChatError::Tool(_)));
        assert!(err.to_string().contains("down"));
    }

    #[test]
    fn test_chat_error_from_llm_error() {
        let err: ChatError = LlmError::Config("bad".to_string()).into();
        assert!(matches!(err, ChatError::Llm(_)));
    }

    #[test]
    fn test_generation_error_keeps_source() {
        use std::error::Error;
        let err = ChatError::Generation(LlmError::Response("HTTP 500".to_string()));
        let source = err.source().expect("source should be set");
        assert_eq!(source.to_string(), "response error: HTTP 500");
    }
}
