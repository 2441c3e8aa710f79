use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

use crate::models::SemanticNeighbor;
use crate::services::embedding::{EmbeddingError, TextEncoder};

/// Errors that can occur with similarity index operations
#[derive(Debug, Error)]
pub enum SemanticError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error("encoder returned a {actual}-dimensional vector, index expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// One document to index: identifier, text to embed, source filename.
#[derive(Debug, Clone)]
pub struct IndexDocument {
    pub identifier: String,
    pub text: String,
    pub source_file: String,
}

/// Metadata stored positionally alongside each vector.
#[derive(Debug, Clone)]
struct EntryMeta {
    identifier: String,
    source_file: String,
}

/// Vectors and metadata live in one struct behind one lock, so their
/// lengths can never diverge — positional lookup from query results
/// depends on it.
#[derive(Default)]
struct IndexState {
    vectors: Vec<Vec<f32>>,
    metadata: Vec<EntryMeta>,
}

/// In-memory similarity index over sentence embeddings
///
/// Entries are appended for the lifetime of the process session and never
/// mutated or removed. Queries run an exact nearest-neighbor scan under
/// squared Euclidean distance. All operations serialize on the internal
/// lock, so the index can sit behind concurrent request handlers.
pub struct SemanticIndex {
    encoder: Box<dyn TextEncoder>,
    dimension: usize,
    state: Mutex<IndexState>,
}

impl SemanticIndex {
    pub fn new(encoder: Box<dyn TextEncoder>) -> Self {
        let dimension = encoder.dimension();
        Self {
            encoder,
            dimension,
            state: Mutex::new(IndexState::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Embed and append one entry.
    ///
    /// On any failure nothing is appended to either collection; on success
    /// vector and metadata are pushed under one critical section.
    pub fn add_entry(
        &self,
        identifier: &str,
        text: &str,
        source_file: &str,
    ) -> Result<(), SemanticError> {
        let vector = self.encoder.encode(text)?;
        self.check_dimension(&vector)?;

        let mut state = self.lock();
        state.vectors.push(vector);
        state.metadata.push(EntryMeta {
            identifier: identifier.to_string(),
            source_file: source_file.to_string(),
        });

        tracing::trace!("indexed '{}' ({} entries)", identifier, state.vectors.len());
        Ok(())
    }

    /// Batch variant of `add_entry`: one backend call for the whole run,
    /// identical per-entry semantics. Returns the number of entries added.
    pub fn add_batch(&self, documents: &[IndexDocument]) -> Result<usize, SemanticError> {
        if documents.is_empty() {
            return Ok(0);
        }

        let texts: Vec<String> = documents.iter().map(|d| d.text.clone()).collect();
        let vectors = self.encoder.encode_batch(&texts)?;

        if vectors.len() != documents.len() {
            return Err(SemanticError::Embedding(EmbeddingError::Encode(format!(
                "expected {} vectors, backend returned {}",
                documents.len(),
                vectors.len()
            ))));
        }
        for vector in &vectors {
            self.check_dimension(vector)?;
        }

        let mut state = self.lock();
        for (vector, document) in vectors.into_iter().zip(documents) {
            state.vectors.push(vector);
            state.metadata.push(EntryMeta {
                identifier: document.identifier.clone(),
                source_file: document.source_file.clone(),
            });
        }

        tracing::debug!("indexed {} documents ({} entries)", documents.len(), state.vectors.len());
        Ok(documents.len())
    }

    /// Exact top-k nearest neighbors, closest first.
    ///
    /// An empty index yields an empty list. An encoder failure yields an
    /// error, so callers can tell "no matches" from "backend down".
    pub fn query_top_k(&self, text: &str, k: usize) -> Result<Vec<SemanticNeighbor>, SemanticError> {
        if k == 0 || self.is_empty() {
            return Ok(Vec::new());
        }

        let query = self.encoder.encode(text)?;
        self.check_dimension(&query)?;

        let state = self.lock();
        let mut scored: Vec<(usize, f32)> = state
            .vectors
            .iter()
            .enumerate()
            .map(|(position, vector)| (position, squared_euclidean(&query, vector)))
            .collect();

        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k.min(state.metadata.len()));

        Ok(scored
            .into_iter()
            .map(|(position, distance)| {
                let meta = &state.metadata[position];
                SemanticNeighbor {
                    identifier: meta.identifier.clone(),
                    source_file: meta.source_file.clone(),
                    distance,
                }
            })
            .collect())
    }

    fn check_dimension(&self, vector: &[f32]) -> Result<(), SemanticError> {
        if vector.len() != self.dimension {
            return Err(SemanticError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.len(),
            });
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, IndexState> {
        self.state.lock().expect("similarity index lock poisoned")
    }

    #[cfg(test)]
    fn store_lengths(&self) -> (usize, usize) {
        let state = self.lock();
        (state.vectors.len(), state.metadata.len())
    }
}

#[inline]
fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
