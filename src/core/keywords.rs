use crate::core::fuzzy::partial_ratio;

/// How a vocabulary term is matched against a text blob.
///
/// Job descriptions use `Fuzzy` so phrasing variance ("machine-learning")
/// still registers the canonical term; resume-side extraction uses the
/// stricter `ExactContains` pass. The two policies are intentional and are
/// selected explicitly at each call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillMatchStrategy {
    /// Partial-ratio fuzzy matching; a term counts when its score reaches
    /// the threshold (0-100 scale).
    Fuzzy { threshold: u32 },
    /// Plain substring containment on lowercased text.
    ExactContains,
}

/// Extract the subset of the vocabulary present in `text`.
///
/// Output is deduplicated and deterministic: terms appear in vocabulary
/// order, lowercased. Empty text yields an empty set.
pub fn extract_skills(text: &str, vocabulary: &[String], strategy: SkillMatchStrategy) -> Vec<String> {
    let text = text.to_lowercase();
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut found: Vec<String> = Vec::new();
    for term in vocabulary {
        let term = term.trim().to_lowercase();
        if term.is_empty() || found.contains(&term) {
            continue;
        }

        let matched = match strategy {
            SkillMatchStrategy::Fuzzy { threshold } => {
                partial_ratio(&term, &text) >= threshold as f64
            }
            SkillMatchStrategy::ExactContains => text.contains(&term),
        };

        if matched {
            found.push(term);
        }
    }

    found
}
