use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info};
use ollama_rs::generation::completion::request::GenerationRequest;
use ollama_rs::Ollama;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;
use crate::config::{AppConfig, Backend};

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Request to model service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Model service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Model service returned no text")]
    EmptyResponse,

    #[error("Invalid model endpoint: {0}")]
    Endpoint(String),

    #[error("Ollama error: {0}")]
    Ollama(String),
}

/// One-shot text generation from a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
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
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate.
    pub fn into_text(self) -> Result<String, GenerationError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();
        if text.is_empty() {
            Err(GenerationError::EmptyResponse)
        } else {
            Ok(text)
        }
    }
}

/// Client for the Gemini `generateContent` REST endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_base: &str, model: &str, api_key: String) -> Result<Self, GenerationError> {
        let base = Url::parse(api_base).map_err(|e| GenerationError::Endpoint(e.to_string()))?;
        let endpoint = base
            .join(&format!("models/{}:generateContent", model))
            .map_err(|e| GenerationError::Endpoint(e.to_string()))?;
        Ok(GeminiClient {
            client: Client::new(),
            endpoint,
            api_key,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("Sending {} char prompt to {}", prompt.len(), self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status: status.as_u16(), body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.into_text()
    }
}

/// Local model served by Ollama.
#[derive(Clone)]
pub struct OllamaGenerator {
    ollama: Ollama,
    model: String,
}

impl OllamaGenerator {
    pub fn new(host: String, port: u16, model: String) -> Self {
        OllamaGenerator {
            ollama: Ollama::new(host, port),
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerationRequest::new(self.model.clone(), prompt.to_string());
        let response = self
            .ollama
            .generate(request)
            .await
            .map_err(|e| GenerationError::Ollama(e.to_string()))?;
        if response.response.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(response.response)
    }
}

pub fn create_generator(config: &AppConfig) -> Result<Arc<dyn TextGenerator>, GenerationError> {
    match &config.backend {
        Backend::Gemini => {
            let client = GeminiClient::new(&config.api_base, &config.model, config.api_key.clone())?;
            info!("Using Gemini model {} at {}", config.model, config.api_base);
            Ok(Arc::new(client))
        }
        Backend::Ollama { host, port } => {
            info!("Using Ollama model {} at {}:{}", config.model, host, port);
            Ok(Arc::new(OllamaGenerator::new(host.clone(), *port, config.model.clone())))
        }
    }
}
