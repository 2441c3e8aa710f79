use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to rank a set of candidates against a job description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(length(min = 1, message = "job description must not be empty"))]
    #[serde(alias = "job_description", rename = "jobDescription")]
    pub job_description: String,
    #[validate(length(min = 1, message = "at least one candidate is required"))]
    #[serde(default)]
    pub candidates: Vec<CandidateInput>,
    /// Top-K for the supplementary semantic neighbor list.
    #[validate(range(min = 1))]
    #[serde(alias = "top_k", rename = "topK", default = "default_top_k")]
    pub top_k: u16,
    #[serde(alias = "include_semantic", rename = "includeSemantic", default)]
    pub include_semantic: bool,
}

fn default_top_k() -> u16 {
    5
}

/// One candidate as supplied by the upload/extraction collaborator.
///
/// Every attribute except the text may be omitted; missing attributes are
/// derived from the text (or fall back to degradation defaults) before
/// scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(alias = "years_experience", rename = "yearsExperience", default)]
    pub years_experience: Option<u32>,
    #[serde(alias = "source_file", rename = "sourceFile", default)]
    pub source_file: Option<String>,
}

/// Request to query the similarity index directly
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SemanticSearchRequest {
    #[validate(length(min = 1, message = "query must not be empty"))]
    pub query: String,
    #[validate(range(min = 1))]
    #[serde(alias = "top_k", rename = "topK", default = "default_top_k")]
    pub top_k: u16,
}
