use std::collections::HashSet;

use crate::core::fuzzy::partial_ratio;
use crate::models::{CandidateProfile, JobDescription, ScoreBreakdown, ScoringWeights};

/// Score one candidate against the job description.
///
/// Scoring formula:
/// composite = (
///     skill_score * 0.50 +        # share of required skills present
///     experience_score * 0.30 +   # years, capped at the ceiling
///     text_score * 0.20           # bulk partial-ratio text similarity
/// )
///
/// Every component is clamped to [0, 1] before weighting, so the composite
/// is bounded by the weight sum. Pure computation; degenerate inputs
/// (no required skills, empty text) resolve to zero-valued components.
pub fn score_candidate(
    jd: &JobDescription,
    candidate: &CandidateProfile,
    weights: &ScoringWeights,
    experience_ceiling: u32,
) -> ScoreBreakdown {
    let skill_score = calculate_skill_score(&jd.skills, &candidate.skills);
    let experience_score = calculate_experience_score(candidate.years_experience, experience_ceiling);
    let text_score = calculate_text_score(&jd.text, &candidate.text);

    let composite = weights.skills * clamp01(skill_score)
        + weights.experience * clamp01(experience_score)
        + weights.text * clamp01(text_score);

    ScoreBreakdown {
        skill_score,
        experience_score,
        text_score,
        composite: clamp01(composite),
    }
}

/// Share of required skills the candidate offers (0-1).
///
/// No extracted requirements means no credit, not a vacuous full score.
#[inline]
fn calculate_skill_score(required: &[String], offered: &[String]) -> f64 {
    if required.is_empty() {
        return 0.0;
    }

    let offered: HashSet<&str> = offered.iter().map(String::as_str).collect();
    let matched = required.iter().filter(|s| offered.contains(s.as_str())).count();

    (matched as f64 / required.len() as f64).min(1.0)
}

/// Years of experience normalized against a fixed ceiling (0-1).
#[inline]
fn calculate_experience_score(years: u32, ceiling: u32) -> f64 {
    if ceiling == 0 {
        return 0.0;
    }
    (years as f64 / ceiling as f64).min(1.0)
}

/// Coarse lexical overlap between the two full texts (0-1). Catches
/// titles and domain phrases outside the skill vocabulary.
#[inline]
fn calculate_text_score(jd_text: &str, resume_text: &str) -> f64 {
    partial_ratio(&jd_text.to_lowercase(), &resume_text.to_lowercase()) / 100.0
}

#[inline]
fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_jd(skills: &[&str]) -> JobDescription {
        JobDescription {
            text: "python developer with cloud experience".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn create_candidate(skills: &[&str], years: u32, text: &str) -> CandidateProfile {
        CandidateProfile {
            name: "Test Candidate".to_string(),
            text: text.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            years_experience: years,
            source_file: String::new(),
        }
    }

    #[test]
    fn test_score_within_valid_range() {
        let jd = create_jd(&["python", "cloud", "aws"]);
        let candidate = create_candidate(&["python"], 4, "python engineer");
        let breakdown = score_candidate(&jd, &candidate, &ScoringWeights::default(), 10);

        assert!(breakdown.skill_score >= 0.0 && breakdown.skill_score <= 1.0);
        assert!(breakdown.experience_score >= 0.0 && breakdown.experience_score <= 1.0);
        assert!(breakdown.text_score >= 0.0 && breakdown.text_score <= 1.0);
        assert!(breakdown.composite >= 0.0 && breakdown.composite <= 1.0);
    }

    #[test]
    fn test_full_skill_match() {
        let jd = create_jd(&["python", "cloud", "aws"]);
        let candidate = create_candidate(&["python", "cloud", "aws", "sql"], 0, "");
        let breakdown = score_candidate(&jd, &candidate, &ScoringWeights::default(), 10);

        assert_eq!(breakdown.skill_score, 1.0);
    }

    #[test]
    fn test_partial_skill_match() {
        let jd = create_jd(&["python", "cloud", "aws", "sql"]);
        let candidate = create_candidate(&["python", "aws"], 0, "");
        let breakdown = score_candidate(&jd, &candidate, &ScoringWeights::default(), 10);

        assert_eq!(breakdown.skill_score, 0.5);
    }

    #[test]
    fn test_no_required_skills_scores_zero() {
        // No claimed requirements means no credit, never a vacuous 1.0.
        let jd = create_jd(&[]);
        let candidate = create_candidate(&["python", "cloud"], 8, "python everywhere");
        let breakdown = score_candidate(&jd, &candidate, &ScoringWeights::default(), 10);

        assert_eq!(breakdown.skill_score, 0.0);
    }

    #[test]
    fn test_experience_capped_at_ceiling() {
        let jd = create_jd(&["python"]);
        let weights = ScoringWeights::default();

        let junior = score_candidate(&jd, &create_candidate(&[], 5, ""), &weights, 10);
        assert_eq!(junior.experience_score, 0.5);

        let senior = score_candidate(&jd, &create_candidate(&[], 10, ""), &weights, 10);
        assert_eq!(senior.experience_score, 1.0);

        let veteran = score_candidate(&jd, &create_candidate(&[], 25, ""), &weights, 10);
        assert_eq!(veteran.experience_score, 1.0);
    }

    #[test]
    fn test_experience_monotonic_below_ceiling() {
        let jd = create_jd(&["python"]);
        let weights = ScoringWeights::default();

        let mut previous = -1.0;
        for years in 0..=10 {
            let breakdown = score_candidate(&jd, &create_candidate(&[], years, ""), &weights, 10);
            assert!(
                breakdown.experience_score > previous,
                "experience score should strictly increase up to the cap"
            );
            previous = breakdown.experience_score;
        }
    }

    #[test]
    fn test_empty_candidate_text_scores_zero_similarity() {
        let jd = create_jd(&["python"]);
        let candidate = create_candidate(&["python"], 3, "");
        let breakdown = score_candidate(&jd, &candidate, &ScoringWeights::default(), 10);

        assert_eq!(breakdown.text_score, 0.0);
    }

    #[test]
    fn test_composite_matches_weighted_sum() {
        let jd = create_jd(&["python", "cloud"]);
        let candidate = create_candidate(&["python"], 6, "python developer with cloud experience");
        let weights = ScoringWeights::default();
        let breakdown = score_candidate(&jd, &candidate, &weights, 10);

        let expected = weights.skills * breakdown.skill_score
            + weights.experience * breakdown.experience_score
            + weights.text * breakdown.text_score;
        assert!((breakdown.composite - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zero_ceiling_guard() {
        let jd = create_jd(&["python"]);
        let candidate = create_candidate(&[], 5, "");
        let breakdown = score_candidate(&jd, &candidate, &ScoringWeights::default(), 0);

        assert_eq!(breakdown.experience_score, 0.0);
    }
}
