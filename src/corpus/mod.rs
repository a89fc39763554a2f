//! Advisory document corpus
//!
//! Career-advice source material lives as plain files under a docs
//! directory. The loader walks that directory, splits each document into
//! bounded chunks, and the in-memory vector index makes those chunks
//! searchable by embedding similarity. The corpus is rebuilt on startup;
//! there is no on-disk index format.

pub mod index;
pub mod loader;

pub use index::build_index;
pub use index::VectorIndex;
pub use loader::CorpusLoader;

use serde::Deserialize;
use serde::Serialize;

/// One retrievable piece of an advisory document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// Path of the source file, relative to the docs directory where possible
    pub source: String,
    pub text: String,
}

/// A chunk with its similarity score against a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: DocumentChunk,
    pub score: f32,
}
