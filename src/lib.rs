//! Shortlist - resume ranking service
//!
//! This library scores parsed resumes against a job description with a
//! weighted, explainable composite score (skills, experience, bulk text
//! similarity) and keeps an in-memory embedding index for supplementary
//! nearest-neighbor lookups.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{build_profile, brief_summary, extract_skills, partial_ratio, RankError, RankOutcome, Ranker, SkillMatchStrategy};
pub use models::{CandidateInput, CandidateProfile, JobDescription, RankedCandidate, ScoreBreakdown, ScoringWeights, SemanticNeighbor};
pub use services::{EmbeddingError, IndexDocument, SemanticError, SemanticIndex, TextEncoder};
