use serde::{Deserialize, Serialize};
use crate::models::domain::{RankedCandidate, SemanticNeighbor};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub results: Vec<RankedCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    /// Whether the embedding backend is available in this process.
    #[serde(rename = "semanticEnabled")]
    pub semantic_enabled: bool,
    /// Supplementary nearest-neighbor list; present only when requested.
    #[serde(rename = "semanticMatches", skip_serializing_if = "Option::is_none")]
    pub semantic_matches: Option<Vec<SemanticNeighbor>>,
}

/// Response for the semantic search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticSearchResponse {
    pub matches: Vec<SemanticNeighbor>,
    #[serde(rename = "totalIndexed")]
    pub total_indexed: usize,
    #[serde(rename = "semanticEnabled")]
    pub semantic_enabled: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "semanticSearch")]
    pub semantic_search: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
