//! Gemini-backed draft generator.
//!
//! Sends one `generateContent` request in JSON response mode with a fixed
//! schema and turns the returned text into a [`PostDraft`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;

use fourrap_core::domain::{GeneratedPost, GeneratorParams, PostDraft};
use fourrap_core::error::GenerateError;
use fourrap_core::ports::PostGenerator;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const SYSTEM_INSTRUCTION: &str = "\
You are a veteran hip-hop journalist and editor for a high-energy rap culture blog called 4RAP.CZ.
Your style is authentic, knowledgeable, and engaging. You use slang appropriately but keep it readable.
You strictly adhere to facts.

You are generating a blog post structure.
The 'content' field must be formatted in clean Markdown.
Use H2 (##) for section headers.
Include a list of key tracks or albums if relevant.
Language: Czech (Čeština).";

/// Gemini client settings.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(config: GeminiConfig) -> Result<Self, GenerateError> {
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| GenerateError::Transport(format!("invalid API key: {}", e)))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("x-goog-api-key", api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let endpoint = format!(
            "{}/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            endpoint,
            model: config.model,
        })
    }
}

fn prompt(params: &GeneratorParams) -> String {
    format!(
        "Topic: {}\nCategory: {}\nTone: {}\n\nWrite a complete blog post.",
        params.topic, params.category, params.tone
    )
}

/// Request payload: system instruction, prompt and the fixed response schema.
fn request_body(params: &GeneratorParams) -> serde_json::Value {
    json!({
        "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
        "contents": [{ "role": "user", "parts": [{ "text": prompt(params) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING", "description": "Catchy, uppercase headline" },
                    "excerpt": { "type": "STRING", "description": "Short, punchy summary (max 2 sentences)" },
                    "content": { "type": "STRING", "description": "Full blog post in Markdown format" },
                    "tags": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "5 relevant tags"
                    },
                    "suggestedImageQuery": {
                        "type": "STRING",
                        "description": "A search query to find a relevant image for this post"
                    }
                },
                "required": ["title", "excerpt", "content", "tags", "suggestedImageQuery"]
            }
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Extract the schema payload from a raw `generateContent` response body.
fn parse_generated(body: &str) -> Result<GeneratedPost, GenerateError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GenerateError::MalformedResponse(format!("response envelope: {}", e)))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerateError::EmptyResponse);
    }

    serde_json::from_str(&text).map_err(|e| GenerateError::MalformedResponse(e.to_string()))
}

#[async_trait]
impl PostGenerator for GeminiGenerator {
    async fn generate(&self, params: &GeneratorParams) -> Result<PostDraft, GenerateError> {
        tracing::info!(
            model = %self.model,
            topic = %params.topic,
            category = %params.category,
            "Generating draft"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body(params))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Gemini request failed");
                GenerateError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(status = %status, "Gemini returned an error status");
            return Err(GenerateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let generated = parse_generated(&body)
            .inspect_err(|e| tracing::error!(error = %e, "Gemini response rejected"))?;

        Ok(PostDraft::from_generated(
            generated,
            params.category,
            Utc::now().date_naive(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use fourrap_core::domain::Category;

    use super::*;

    fn params() -> GeneratorParams {
        GeneratorParams {
            topic: "Historie českého rapu".to_string(),
            category: Category::Rappers,
            tone: "hype".to_string(),
        }
    }

    fn envelope(text: &str) -> String {
        json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
        })
        .to_string()
    }

    #[test]
    fn test_request_body_carries_prompt_and_schema() {
        let body = request_body(&params());

        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Topic: Historie českého rapu"));
        assert!(prompt.contains("Category: RAPPERS"));
        assert!(prompt.contains("Tone: hype"));

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["required"].as_array().unwrap().len(), 5);
        assert!(
            body["systemInstruction"]["parts"][0]["text"]
                .as_str()
                .unwrap()
                .contains("4RAP.CZ")
        );
    }

    #[test]
    fn test_parse_generated_payload() {
        let payload = json!({
            "title": "LEGENDY",
            "excerpt": "Krátce.",
            "content": "## Start",
            "tags": ["a", "b", "c", "d", "e"],
            "suggestedImageQuery": "prague graffiti"
        })
        .to_string();

        let generated = parse_generated(&envelope(&payload)).unwrap();
        assert_eq!(generated.title, "LEGENDY");
        assert_eq!(generated.suggested_image_query, "prague graffiti");
    }

    #[test]
    fn test_parse_joins_split_parts() {
        let body = json!({
            "candidates": [{ "content": { "parts": [
                { "text": "{\"title\":\"T\",\"excerpt\":\"E\"," },
                { "text": "\"content\":\"C\",\"tags\":[],\"suggestedImageQuery\":\"q\"}" }
            ] } }]
        })
        .to_string();
        assert_eq!(parse_generated(&body).unwrap().title, "T");
    }

    #[test]
    fn test_parse_without_text_is_empty_response() {
        assert!(matches!(
            parse_generated(r#"{"candidates": []}"#),
            Err(GenerateError::EmptyResponse)
        ));
        assert!(matches!(
            parse_generated(r#"{"candidates": [{"content": {"parts": []}}]}"#),
            Err(GenerateError::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_payloads() {
        assert!(matches!(
            parse_generated("not json"),
            Err(GenerateError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_generated(&envelope("{\"title\": \"only a title\"}")),
            Err(GenerateError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_endpoint_includes_model() {
        let generator = GeminiGenerator::new(
            GeminiConfig::new("key")
                .with_model("gemini-test")
                .with_base_url("http://localhost:1234/v1beta/"),
        )
        .unwrap();
        assert_eq!(
            generator.endpoint,
            "http://localhost:1234/v1beta/models/gemini-test:generateContent"
        );
    }

    #[tokio::test]
    async fn test_unreachable_api_is_transport_error() {
        let generator = GeminiGenerator::new(
            GeminiConfig::new("key").with_base_url("http://127.0.0.1:1/v1beta"),
        )
        .unwrap();

        let result = generator.generate(&params()).await;
        assert!(matches!(result, Err(GenerateError::Transport(_))));
    }
}
