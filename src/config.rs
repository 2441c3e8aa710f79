use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub vocabulary: VocabularySettings,
    #[serde(default)]
    pub embedding: EmbeddingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Minimum partial-ratio score for a vocabulary term to count as
    /// present in a job description.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: u32,
    /// Years of experience that map to a full experience score.
    #[serde(default = "default_experience_ceiling")]
    pub experience_ceiling_years: u32,
    #[serde(default = "default_top_k")]
    pub default_top_k: u16,
    #[serde(default = "default_max_top_k")]
    pub max_top_k: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            experience_ceiling_years: default_experience_ceiling(),
            default_top_k: default_top_k(),
            max_top_k: default_max_top_k(),
        }
    }
}

fn default_fuzzy_threshold() -> u32 { 70 }
fn default_experience_ceiling() -> u32 { 10 }
fn default_top_k() -> u16 { 5 }
fn default_max_top_k() -> u16 { 20 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_text_weight")]
    pub text: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            experience: default_experience_weight(),
            text: default_text_weight(),
        }
    }
}

fn default_skills_weight() -> f64 { 0.50 }
fn default_experience_weight() -> f64 { 0.30 }
fn default_text_weight() -> f64 { 0.20 }

#[derive(Debug, Clone, Deserialize)]
pub struct VocabularySettings {
    /// Canonical skill terms, lowercase, possibly multi-word. Both skill
    /// extraction call sites share this list.
    #[serde(default = "default_vocabulary")]
    pub skills: Vec<String>,
}

impl Default for VocabularySettings {
    fn default() -> Self {
        Self { skills: default_vocabulary() }
    }
}

fn default_vocabulary() -> Vec<String> {
    [
        "python", "java", "sql", "javascript", "html", "css",
        "machine learning", "deep learning", "ai", "ml",
        "data analysis", "communication", "django", "flask",
        "react", "node", "cloud", "aws", "apis",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingSettings {
    /// Output dimension of the sentence encoder. Fixed by the model.
    #[serde(default = "default_dimension")]
    pub dimension: usize,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self { dimension: default_dimension() }
    }
}

fn default_dimension() -> usize { 384 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SHORTLIST_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with SHORTLIST_)
            // e.g., SHORTLIST__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SHORTLIST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SHORTLIST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.skills, 0.50);
        assert_eq!(weights.experience, 0.30);
        assert_eq!(weights.text, 0.20);
    }

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.fuzzy_threshold, 70);
        assert_eq!(matching.experience_ceiling_years, 10);
        assert_eq!(matching.default_top_k, 5);
        assert_eq!(matching.max_top_k, 20);
    }

    #[test]
    fn test_default_vocabulary_is_lowercase() {
        let vocabulary = default_vocabulary();
        assert_eq!(vocabulary.len(), 19);
        assert!(vocabulary.contains(&"python".to_string()));
        assert!(vocabulary.contains(&"machine learning".to_string()));
        assert!(vocabulary.iter().all(|s| s == &s.to_lowercase()));
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }
}
