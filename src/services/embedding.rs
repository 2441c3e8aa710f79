use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use thiserror::Error;

/// Output dimension of the all-MiniLM-L6-v2 sentence encoder.
pub const MINILM_DIMENSION: usize = 384;

/// Errors from the embedding backend
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding backend unavailable: {0}")]
    Backend(String),

    #[error("encoding failed: {0}")]
    Encode(String),
}

/// Text-to-vector boundary.
///
/// Implementations must be deterministic for identical input and always
/// return vectors of `dimension()` length. Failures are typed — callers
/// check the result instead of assuming success.
pub trait TextEncoder: Send + Sync {
    fn dimension(&self) -> usize;

    /// Encode a batch in one backend call.
    fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Encode a single text.
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vectors = self.encode_batch(std::slice::from_ref(&text.to_string()))?;
        match vectors.pop() {
            Some(vector) => Ok(vector),
            None => Err(EmbeddingError::Encode("backend returned no vectors".to_string())),
        }
    }
}

/// Sentence encoder backed by fastembed's local MiniLM model.
///
/// Model files are fetched on first construction; a failure here is the
/// capability probe failing, after which the host runs with semantic
/// search disabled for the process lifetime.
pub struct FastEmbedEncoder {
    model: TextEmbedding,
    dimension: usize,
}

impl FastEmbedEncoder {
    pub fn try_new(dimension: usize) -> Result<Self, EmbeddingError> {
        let options = InitOptions::new(EmbeddingModel::AllMiniLML6V2)
            .with_show_download_progress(false);

        let model = TextEmbedding::try_new(options)
            .map_err(|e| EmbeddingError::Backend(e.to_string()))?;

        Ok(Self { model, dimension })
    }
}

impl TextEncoder for FastEmbedEncoder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        self.model
            .embed(texts.to_vec(), None)
            .map_err(|e| EmbeddingError::Encode(e.to_string()))
    }
}
