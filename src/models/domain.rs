use serde::{Deserialize, Serialize};

/// Parsed resume record, one per candidate document.
///
/// Produced by the extraction collaborator (or completed from raw text by
/// `core::extraction`); immutable for the duration of one ranking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    #[serde(default)]
    pub text: String,
    /// Lowercase skill tags drawn from the canonical vocabulary.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "yearsExperience", default)]
    pub years_experience: u32,
    #[serde(rename = "sourceFile", default)]
    pub source_file: String,
}

/// The query document candidates are ranked against.
///
/// `skills` is derived once per run by the fuzzy extraction strategy over
/// the configured vocabulary.
#[derive(Debug, Clone)]
pub struct JobDescription {
    pub text: String,
    pub skills: Vec<String>,
}

/// Scoring weights
///
/// The composite score is `skills * skill_score + experience *
/// experience_score + text * text_score`; the triple must sum to 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub text: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.text
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.50,
            experience: 0.30,
            text: 0.20,
        }
    }
}

/// Sub-scores and composite for one (job description, candidate) pair.
///
/// All four values are in [0, 1]. Full precision is kept here; rounding
/// happens only when building a `RankedCandidate` row for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skill_score: f64,
    pub experience_score: f64,
    pub text_score: f64,
    pub composite: f64,
}

impl ScoreBreakdown {
    /// Display copy with every component rounded to three decimals.
    pub fn rounded(&self) -> Self {
        Self {
            skill_score: round3(self.skill_score),
            experience_score: round3(self.experience_score),
            text_score: round3(self.text_score),
            composite: round3(self.composite),
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// One output row of the ranking pipeline, presentation-ready.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub rank: usize,
    pub name: String,
    pub skills: Vec<String>,
    #[serde(rename = "yearsExperience")]
    pub years_experience: u32,
    pub summary: String,
    #[serde(rename = "skillScore")]
    pub skill_score: f64,
    #[serde(rename = "experienceScore")]
    pub experience_score: f64,
    #[serde(rename = "textSimilarityScore")]
    pub text_similarity_score: f64,
    #[serde(rename = "compositeScore")]
    pub composite_score: f64,
}

/// A nearest-neighbor hit from the similarity index, supplementary to the
/// composite ranking (never blended into it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticNeighbor {
    pub identifier: String,
    #[serde(rename = "sourceFile")]
    pub source_file: String,
    /// Squared Euclidean distance; smaller is closer.
    pub distance: f32,
}
