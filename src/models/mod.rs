// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, JobDescription, RankedCandidate, ScoreBreakdown, ScoringWeights, SemanticNeighbor};
pub use requests::{CandidateInput, RankRequest, SemanticSearchRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse, SemanticSearchResponse};
