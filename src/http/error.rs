use thiserror::Error;

/// Message shown to the user for every generation failure.
pub const GENERATION_FAILED: &str = "Content generation failed. Please try again.";

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// The opaque message surfaced to the UI. Causes only go to the log.
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED
    }
}
