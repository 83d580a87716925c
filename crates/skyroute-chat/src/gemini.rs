//! Gemini-backed `LlmClient`.
//!
//! Calls the `generateContent` endpoint of Google's Generative Language API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use skyroute_core::LlmConfig;

use crate::llm::{LlmClient, LlmError, LlmRequest};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini LLM client.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
    temperature: f32,
}

impl GeminiClient {
    /// Create a client for `config.model` authenticated with `api_key`.
    pub fn new(api_key: String, config: &LlmConfig) -> Result<Self, LlmError> {
        if api_key.trim().is_empty() {
            return Err(LlmError::Config("api key must not be empty".to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Http(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            temperature: config.temperature,
        })
    }

    fn build_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn build_body(&self, request: LlmRequest) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: request.user }],
            }],
            system_instruction: if request.system.trim().is_empty() {
                None
            } else {
                Some(SystemInstruction {
                    parts: vec![Part {
                        text: request.system,
                    }],
                })
            },
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        }
    }
}

// Wire format

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// Concatenate the text parts of the first candidate.
fn extract_text(body: &str) -> Result<String, LlmError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| LlmError::Serialization(e.to_string()))?;

    if let Some(error) = parsed.error {
        return Err(LlmError::Response(format!(
            "Gemini API error: {}",
            error.message
        )));
    }

    let text: String = parsed
        .candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(LlmError::Response("No content in response".to_string()));
    }
    Ok(text)
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: LlmRequest) -> Result<String, LlmError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|e| LlmError::Config(format!("invalid api key: {}", e)))?;
        headers.insert(API_KEY_HEADER, key);

        let body = self.build_body(request);
        tracing::debug!(model = %self.model, "Sending Gemini request");

        let response = self
            .client
            .post(self.build_url())
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(LlmError::Response(format!("HTTP {}: {}", status, text)));
        }

        extract_text(&text)
    }
}
