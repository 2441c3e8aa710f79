use crate::models::CandidateProfile;

/// Skills shown before the summary truncates the list.
const MAX_SUMMARY_SKILLS: usize = 6;

/// One-line candidate summary for display alongside the score row.
pub fn brief_summary(candidate: &CandidateProfile) -> String {
    let shown: Vec<&str> = candidate
        .skills
        .iter()
        .take(MAX_SUMMARY_SKILLS)
        .map(String::as_str)
        .collect();

    let mut summary = if shown.is_empty() {
        format!("{} has no recognized skills on file.", candidate.name)
    } else {
        format!("{} has experience in {}.", candidate.name, shown.join(", "))
    };

    if candidate.years_experience > 0 {
        summary.push_str(&format!(
            " They have around {} years of experience.",
            candidate.years_experience
        ));
    }

    summary
}
