//! Embeds queries and searches the corpus index.

use std::sync::Arc;

use tracing::debug;

use crate::corpus::ScoredChunk;
use crate::corpus::VectorIndex;
use crate::embeddings::EmbeddingService;
use crate::errors::Result;

/// Query-time entry point into the vector index
pub struct Retriever {
    embedding_service: Arc<EmbeddingService>,
    index: Arc<VectorIndex>,
}

impl Retriever {
    pub fn new(embedding_service: Arc<EmbeddingService>, index: Arc<VectorIndex>) -> Self {
        Self {
            embedding_service,
            index,
        }
    }

    /// Number of chunks available for retrieval
    pub fn index_size(&self) -> usize {
        self.index.len()
    }

    /// Semantic search using vector embeddings.
    ///
    /// An empty index short-circuits to no results without calling the
    /// embedding API, so the advisor keeps working with no corpus at all.
    pub async fn retrieve(&self, query: &str, limit: usize) -> Result<Vec<ScoredChunk>> {
        if self.index.is_empty() {
            debug!("Corpus index is empty, skipping retrieval");
            return Ok(Vec::new());
        }

        debug!("Performing semantic search, limit {limit}");

        let query_embedding = self.embedding_service.generate(query).await?;

        // Rank against the in-memory index
        let results = self.index.search(&query_embedding, limit);
        debug!("Retrieved {} chunk(s)", results.len());

        Ok(results)
    }
}
