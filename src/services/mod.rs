// Service exports
pub mod embedding;
pub mod semantic;

pub use embedding::{EmbeddingError, FastEmbedEncoder, TextEncoder, MINILM_DIMENSION};
pub use semantic::{IndexDocument, SemanticError, SemanticIndex};
