// Core algorithm exports
pub mod extraction;
pub mod fuzzy;
pub mod keywords;
pub mod ranker;
pub mod scoring;
pub mod summary;

pub use extraction::build_profile;
pub use fuzzy::partial_ratio;
pub use keywords::{extract_skills, SkillMatchStrategy};
pub use ranker::{RankError, RankOutcome, Ranker};
pub use scoring::score_candidate;
pub use summary::brief_summary;
