pub mod error;
pub mod prompt;
pub mod schema;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info};

use crate::{config::GeneratorConfig, mood::Mood};

pub use error::{GENERATION_FAILED, GenerationError};
pub use schema::GenerationResult;

use schema::{GenerateContentRequest, GenerateContentResponse};

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, mood: Mood) -> Result<GenerationResult, GenerationError>;
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    config: GeneratorConfig,
}

impl GeminiClient {
    pub fn new(config: GeneratorConfig) -> color_eyre::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("mood2music/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    async fn request(&self, mood: Mood) -> Result<GenerationResult, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        let body = GenerateContentRequest::new(prompt::SYSTEM_INSTRUCTION, prompt::user_instruction(mood));

        let response = self
            .client
            .post(self.config.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let envelope: GenerateContentResponse = serde_json::from_slice(&bytes)
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        schema::parse_generation(envelope.text().as_deref())
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, mood: Mood) -> Result<GenerationResult, GenerationError> {
        info!(mood = mood.as_str(), model = self.config.model.as_str(), "generation_started");

        let result = self.request(mood).await;
        match &result {
            Ok(_) => info!(mood = mood.as_str(), "generation_finished"),
            Err(e) => error!(mood = mood.as_str(), error = %e, "generation_failed"),
        }
        result
    }
}
