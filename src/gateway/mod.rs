//! External analysis gateway - vessel lookup and class PSC analysis.
//!
//! Both entry points send a natural-language prompt to a text-generation
//! endpoint with web search enabled, pull the first JSON object out of the
//! reply and coerce it into a typed record. `Ok(None)` means "no usable
//! data"; `Err` means the request itself failed.

mod coerce;
mod extract;
#[cfg(feature = "gemini")]
mod gemini;
mod prompt;

use std::future::Future;

use thiserror::Error;

use crate::models::{ClassAnalysis, VesselCandidate};

/// Vessel search and classification-society analysis backed by an external
/// generative service.
pub trait AnalysisGateway {
    /// Look up registry data for a vessel by name and IMO number.
    fn search_vessel(
        &self,
        name: &str,
        imo: &str,
    ) -> impl Future<Output = Result<Option<VesselCandidate>, GatewayError>> + Send;

    /// Fetch the current PSC performance of a classification society.
    fn analyze_class(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<ClassAnalysis>, GatewayError>> + Send;
}

/// Transport or authentication failure talking to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("gateway API key is missing; set GEMINI_API_KEY or gemini_api_key in the config file")]
    MissingApiKey,

    #[error("gateway network error: {0}")]
    Network(String),

    #[error("gateway API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("gateway response could not be decoded: {0}")]
    Decode(String),
}

pub use coerce::{class_analysis, vessel_candidate};
pub use extract::extract_json;
#[cfg(feature = "gemini")]
pub use gemini::GeminiGateway;
pub use prompt::{class_analysis_prompt, vessel_search_prompt};
