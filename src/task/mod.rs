//! Remote model execution.
//!
//! One capability: an instruction plus extracted content in, response text
//! out. A single blocking request per call; no retry, no streaming, no
//! conversation history.

mod gemini;

use thiserror::Error;

pub use gemini::GeminiClient;

/// Why a task failed.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("request to model endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model returned no usable text")]
    EmptyResponse,
}

/// Prompt plus content in, result text out.
pub trait TaskExecutor {
    fn execute(&self, prompt: &str, content: &str) -> Result<String, TaskError>;
}
