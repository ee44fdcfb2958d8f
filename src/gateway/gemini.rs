//! Gemini `generateContent` client with Google Search grounding.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    class_analysis, class_analysis_prompt, extract_json, vessel_candidate, vessel_search_prompt,
    AnalysisGateway, GatewayError,
};
use crate::config::RegistryConfig;
use crate::models::{ClassAnalysis, VesselCandidate};

const USER_AGENT: &str = concat!("vessel-registry/", env!("CARGO_PKG_VERSION"));

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    tools: [Tool; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, with all its text parts joined.
    fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// `AnalysisGateway` backed by the Gemini REST API.
#[derive(Clone, Debug)]
pub struct GeminiGateway {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiGateway {
    /// Build a client for `model` at `endpoint`. No timeout is applied unless
    /// one is given; the transport default applies otherwise.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GatewayError::MissingApiKey);
        }

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        })
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self, GatewayError> {
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or(GatewayError::MissingApiKey)?;
        Self::new(
            api_key,
            config.gemini_model.clone(),
            config.gemini_endpoint.clone(),
            config.request_timeout(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Send one prompt with web search enabled. Returns None when the
    /// response carries no text.
    pub async fn generate(&self, prompt: &str) -> Result<Option<String>, GatewayError> {
        let request = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
            tools: [Tool {
                google_search: GoogleSearch {},
            }],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "sending gateway request");

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        let text = body.text();
        debug!(
            status = status.as_u16(),
            text_len = text.as_ref().map(|t| t.len()).unwrap_or(0),
            "gateway response received"
        );
        Ok(text)
    }
}

impl AnalysisGateway for GeminiGateway {
    async fn search_vessel(
        &self,
        name: &str,
        imo: &str,
    ) -> Result<Option<VesselCandidate>, GatewayError> {
        let Some(text) = self.generate(&vessel_search_prompt(name, imo)).await? else {
            return Ok(None);
        };
        let candidate = extract_json(&text).and_then(|value| vessel_candidate(&value));
        if candidate.is_some() {
            info!(name, imo, "vessel search returned data");
        }
        Ok(candidate)
    }

    async fn analyze_class(&self, name: &str) -> Result<Option<ClassAnalysis>, GatewayError> {
        let Some(text) = self.generate(&class_analysis_prompt(name)).await? else {
            return Ok(None);
        };
        let analysis = extract_json(&text).and_then(|value| class_analysis(&value));
        if analysis.is_some() {
            info!(name, "class analysis returned data");
        }
        Ok(analysis)
    }
}
