use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::http::error::GenerationError;

pub const PROMPT_PLACEHOLDER: &str = "Prompt could not be generated.";
pub const LYRICS_PLACEHOLDER: &str = "Lyrics could not be generated.";

/// A generated music prompt and the lyrics that go with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub prompt: String,
    pub lyrics: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl Content {
    pub fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_owned),
            parts: vec![Part {
                text: Some(text.into()),
                thought: None,
            }],
        }
    }
}

impl GenerateContentRequest {
    pub fn new(system_instruction: &str, user_instruction: String) -> Self {
        Self {
            contents: vec![Content::text(Some("user"), user_instruction)],
            system_instruction: Content::text(None, system_instruction),
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        }
    }
}

/// Output schema: an object with two required string fields.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "prompt": {
                "type": "STRING",
                "description": "The technical music prompt for the AI generator."
            },
            "lyrics": {
                "type": "STRING",
                "description": "The song lyrics with stanzas (Verse, Chorus, etc.)."
            }
        },
        "required": ["prompt", "lyrics"]
    })
}

impl GenerateContentResponse {
    /// Concatenated non-thought text of the first candidate.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter(|p| !p.thought.unwrap_or(false))
            .filter_map(|p| p.text.as_deref())
            .collect();

        (!text.is_empty()).then_some(text)
    }
}

/// Parses the structured text returned by the model.
///
/// A missing text counts as an empty object. Fields that are absent, empty or
/// not strings are replaced with placeholders, so any JSON value other than
/// `null` yields a result. Text that is not JSON, or a bare `null`, is an error.
pub fn parse_generation(text: Option<&str>) -> Result<GenerationResult, GenerationError> {
    let raw = text.unwrap_or("{}");
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    if value.is_null() {
        return Err(GenerationError::MalformedResponse(
            "expected a JSON value, got `null`".to_string(),
        ));
    }

    Ok(GenerationResult {
        prompt: string_field(&value, "prompt").unwrap_or_else(|| PROMPT_PLACEHOLDER.to_string()),
        lyrics: string_field(&value, "lyrics").unwrap_or_else(|| LYRICS_PLACEHOLDER.to_string()),
    })
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
