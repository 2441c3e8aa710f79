use thiserror::Error;

use crate::core::keywords::{extract_skills, SkillMatchStrategy};
use crate::core::scoring::score_candidate;
use crate::models::{CandidateProfile, JobDescription, ScoreBreakdown, ScoringWeights};

/// Default partial-ratio threshold for job-description skill extraction.
pub const DEFAULT_FUZZY_THRESHOLD: u32 = 70;

/// Default experience-years normalization ceiling.
pub const DEFAULT_EXPERIENCE_CEILING: u32 = 10;

/// Tolerance when validating that the weight triple sums to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Errors reported before any scoring work begins
#[derive(Debug, Error)]
pub enum RankError {
    #[error("job description text is empty")]
    EmptyJobDescription,

    #[error("candidate list is empty")]
    NoCandidates,

    #[error("scoring weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },
}

/// Result of one ranking run
#[derive(Debug)]
pub struct RankOutcome {
    /// Candidates with their score breakdowns, best composite first.
    /// Ties keep their original input order.
    pub ranked: Vec<(CandidateProfile, ScoreBreakdown)>,
    pub total_candidates: usize,
}

/// Ranking pipeline orchestrator
///
/// Owns the scoring configuration (weights, vocabulary, thresholds) and
/// runs the scoring engine over every candidate. Scoring is pure and a
/// single degraded candidate never aborts the run.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
    vocabulary: Vec<String>,
    fuzzy_threshold: u32,
    experience_ceiling: u32,
}

impl Ranker {
    pub fn new(
        weights: ScoringWeights,
        vocabulary: Vec<String>,
        fuzzy_threshold: u32,
        experience_ceiling: u32,
    ) -> Result<Self, RankError> {
        let sum = weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RankError::InvalidWeights { sum });
        }

        Ok(Self {
            weights,
            vocabulary,
            fuzzy_threshold,
            experience_ceiling,
        })
    }

    pub fn with_default_weights(vocabulary: Vec<String>) -> Self {
        Self {
            weights: ScoringWeights::default(),
            vocabulary,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            experience_ceiling: DEFAULT_EXPERIENCE_CEILING,
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Build the query document, deriving its skill set with the fuzzy
    /// extraction strategy. Empty text is a precondition violation.
    pub fn parse_job_description(&self, text: &str) -> Result<JobDescription, RankError> {
        if text.trim().is_empty() {
            return Err(RankError::EmptyJobDescription);
        }

        let skills = extract_skills(
            text,
            &self.vocabulary,
            SkillMatchStrategy::Fuzzy { threshold: self.fuzzy_threshold },
        );

        Ok(JobDescription {
            text: text.to_string(),
            skills,
        })
    }

    /// Score every candidate and sort by composite score, descending.
    ///
    /// The sort is stable and runs on full-precision values; rounding is
    /// left to the presentation layer so near-ties cannot reorder.
    pub fn rank(
        &self,
        jd: &JobDescription,
        candidates: Vec<CandidateProfile>,
    ) -> Result<RankOutcome, RankError> {
        if candidates.is_empty() {
            return Err(RankError::NoCandidates);
        }

        let total_candidates = candidates.len();

        let mut ranked: Vec<(CandidateProfile, ScoreBreakdown)> = candidates
            .into_iter()
            .map(|candidate| {
                let breakdown =
                    score_candidate(jd, &candidate, &self.weights, self.experience_ceiling);
                (candidate, breakdown)
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.1.composite
                .partial_cmp(&a.1.composite)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(RankOutcome {
            ranked,
            total_candidates,
        })
    }
}
