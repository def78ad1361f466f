//! Gemini `generateContent` client.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::settings::Settings;

use super::{TaskError, TaskExecutor};

const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const OCR_PROMPT: &str = "Extract all readable text from this image. \
    Return the text only, with no commentary.";

/// Sampling parameters sent with every request.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
    response_mime_type: &'static str,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
            response_mime_type: "text/plain",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    fn inline(mime_type: &str, bytes: &[u8]) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.to_owned(),
                data: BASE64.encode(bytes),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// The text of the first candidate, parts joined in order.
fn collect_text(response: GenerateResponse) -> Option<String> {
    let candidate = response.candidates.into_iter().next()?;
    let parts = candidate.content?.parts;
    let text: String = parts.into_iter().filter_map(|part| part.text).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Blocking Gemini API client.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
    generation: GenerationConfig,
}

impl GeminiClient {
    /// Build a client from application settings.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            generation: GenerationConfig::default(),
        }
    }

    /// Send one `generateContent` request and return the response text.
    fn generate(&self, parts: Vec<Part>) -> Result<String, TaskError> {
        let url = format!("{ENDPOINT}/{}:generateContent", self.model);
        debug!(model = %self.model, parts = parts.len(), "calling generateContent");

        let response: GenerateResponse = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateRequest {
                contents: vec![Content { parts }],
                generation_config: self.generation.clone(),
            })
            .send()?
            .error_for_status()?
            .json()?;

        collect_text(response).ok_or(TaskError::EmptyResponse)
    }

    /// Read the text out of an image via the vision model.
    pub fn ocr(&self, bytes: &[u8], mime_type: &str) -> Result<String, TaskError> {
        self.generate(vec![Part::text(OCR_PROMPT), Part::inline(mime_type, bytes)])
    }
}

impl TaskExecutor for GeminiClient {
    fn execute(&self, prompt: &str, content: &str) -> Result<String, TaskError> {
        self.generate(vec![Part::text(format!("{prompt}\n{content}"))])
    }
}
