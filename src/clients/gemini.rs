use async_trait::async_trait;
use base64::Engine as _;
use secrecy::ExposeSecret as _;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// A binary document attached to a generation request (syllabus upload).
#[derive(Clone, Debug)]
pub struct DocumentPart {
    pub mime_type: String,
    pub data: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Model,
}

/// One prior exchange in a conversation, oldest first.
#[derive(Clone, Debug)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
}

/// A single request to the generative collaborator. The system instruction
/// is always carried out-of-band, never as a visible message.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub history: Vec<ChatTurn>,
    pub prompt: String,
    pub document: Option<DocumentPart>,
    pub response_schema: Option<serde_json::Value>,
    pub temperature: f32,
}

impl GenerationRequest {
    pub fn new(system_instruction: &str, prompt: &str) -> Self {
        Self {
            system_instruction: system_instruction.to_string(),
            history: Vec::new(),
            prompt: prompt.to_string(),
            document: None,
            response_schema: None,
            temperature: 0.7,
        }
    }

    pub fn with_history(mut self, history: Vec<ChatTurn>) -> Self {
        self.history = history;
        self
    }

    pub fn with_document(mut self, document: DocumentPart) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_response_schema(mut self, schema: serde_json::Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// The generative collaborator behind the quiz, syllabus, and tutoring
/// flows. One implementation talks to Gemini; tests substitute their own.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Issues one generation request and returns the raw response text.
    /// No retries are performed here; callers decide whether to re-invoke.
    async fn generate(&self, request: GenerationRequest) -> AppResult<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: secrecy::SecretString,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: UpstreamErrorDetail,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.collaborator_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        })
    }

    fn build_body(&self, request: &GenerationRequest) -> serde_json::Value {
        let mut contents: Vec<serde_json::Value> = request
            .history
            .iter()
            .map(|turn| {
                json!({
                    "role": match turn.role {
                        TurnRole::User => "user",
                        TurnRole::Model => "model",
                    },
                    "parts": [{ "text": turn.text }],
                })
            })
            .collect();

        let mut parts: Vec<serde_json::Value> = Vec::new();
        if let Some(document) = &request.document {
            let encoded = base64::engine::general_purpose::STANDARD.encode(&document.data);
            parts.push(json!({
                "inlineData": { "mimeType": document.mime_type, "data": encoded }
            }));
        }
        parts.push(json!({ "text": request.prompt }));
        contents.push(json!({ "role": "user", "parts": parts }));

        let mut generation_config = json!({
            "temperature": request.temperature,
            "topP": 0.95,
            "topK": 40,
            "maxOutputTokens": 8192,
        });
        if let Some(schema) = &request.response_schema {
            generation_config["responseMimeType"] = json!("application/json");
            generation_config["responseSchema"] = schema.clone();
        }

        json!({
            "systemInstruction": { "parts": [{ "text": request.system_instruction }] },
            "contents": contents,
            "generationConfig": generation_config,
        })
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> AppResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = self.build_body(&request);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<UpstreamErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => format!("collaborator returned status {}", status),
            };
            log::warn!("Collaborator request failed ({}): {}", status, message);
            return Err(AppError::UpstreamFailure(message));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            AppError::InvalidResponseShape(format!("unreadable collaborator response: {}", e))
        })?;

        let text: String = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::InvalidResponseShape(
                "collaborator returned no candidates".to_string(),
            ));
        }

        Ok(text)
    }
}
