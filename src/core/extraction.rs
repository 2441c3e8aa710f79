use regex::Regex;
use std::sync::OnceLock;

use crate::core::keywords::{extract_skills, SkillMatchStrategy};
use crate::models::{CandidateInput, CandidateProfile};

/// Fallback identifier when no name can be derived.
pub const UNKNOWN_NAME: &str = "Unknown";

fn years_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d{1,2})\+?\s+years").expect("invalid years pattern"))
}

/// Candidate name heuristic: the first line with at most five words and
/// more than one character. Resumes almost always lead with the name.
pub fn extract_name(text: &str) -> String {
    for line in text.lines() {
        let line = line.trim();
        if line.len() > 1 && line.split_whitespace().count() <= 5 {
            return line.to_string();
        }
    }
    UNKNOWN_NAME.to_string()
}

/// First "N years" / "N+ years" figure found in the text, else 0.
pub fn extract_years_experience(text: &str) -> u32 {
    let text = text.to_lowercase();
    years_pattern()
        .captures(&text)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Complete a candidate input into a scoreable profile.
///
/// Attributes the collaborator did not supply are derived from the text;
/// when the text gives nothing either, degradation defaults apply
/// ("Unknown", zero years, no skills) so the candidate still flows through
/// ranking instead of being dropped.
pub fn build_profile(input: CandidateInput, vocabulary: &[String]) -> CandidateProfile {
    let name = match input.name {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => extract_name(&input.text),
    };

    let skills = match input.skills {
        Some(skills) => normalize_skills(skills),
        // Resume-side extraction is the strict substring pass.
        None => extract_skills(&input.text, vocabulary, SkillMatchStrategy::ExactContains),
    };

    let years_experience = input
        .years_experience
        .unwrap_or_else(|| extract_years_experience(&input.text));

    if input.text.trim().is_empty() {
        tracing::debug!("candidate '{}' has no text, scoring with defaults", name);
    }

    CandidateProfile {
        name,
        text: input.text,
        skills,
        years_experience,
        source_file: input.source_file.unwrap_or_default(),
    }
}

fn normalize_skills(skills: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim().to_lowercase();
        if !skill.is_empty() && !normalized.contains(&skill) {
            normalized.push(skill);
        }
    }
    normalized
}
