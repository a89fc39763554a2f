//! In-memory vector index over document chunks

use tracing::info;

use super::CorpusLoader;
use super::DocumentChunk;
use super::ScoredChunk;
use crate::embeddings::EmbeddingService;

/// Chunks paired with their embeddings, searchable by cosine similarity.
///
/// The corpus is small enough that a linear scan per query is fine; there
/// is no approximate-nearest-neighbor structure behind this.
#[derive(Debug, Clone, Default)]
pub struct VectorIndex {
    entries: Vec<IndexEntry>,
}

#[derive(Debug, Clone)]
struct IndexEntry {
    chunk: DocumentChunk,
    embedding: Vec<f32>,
}

impl VectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, chunk: DocumentChunk, embedding: Vec<f32>) {
        self.entries.push(IndexEntry { chunk, embedding });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `limit` most similar chunks, best first.
    ///
    /// Ties keep insertion order. An empty index returns an empty list.
    pub fn search(&self, query: &[f32], limit: usize) -> Vec<ScoredChunk> {
        let mut scored: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|entry| ScoredChunk {
                chunk: entry.chunk.clone(),
                score: cosine_similarity(query, &entry.embedding),
            })
            .collect();

        // Stable sort preserves insertion order among equal scores
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);
        scored
    }
}

/// Cosine similarity of two vectors.
///
/// Mismatched dimensions or a zero-magnitude vector score 0.0 rather than
/// poisoning the ranking with NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Load the corpus and embed every chunk into a fresh index
pub async fn build_index(
    loader: &CorpusLoader,
    embeddings: &EmbeddingService,
) -> crate::Result<VectorIndex> {
    let chunks = loader.load()?;
    if chunks.is_empty() {
        info!("Corpus is empty, advisor will answer without citations");
        return Ok(VectorIndex::new());
    }

    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    let vectors = embeddings.generate_batch(texts).await?;

    let mut index = VectorIndex::new();
    for (chunk, embedding) in chunks.into_iter().zip(vectors) {
        index.insert(chunk, embedding);
    }
    info!("Indexed {} chunk(s)", index.len());
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(source: &str, text: &str) -> DocumentChunk {
        DocumentChunk {
            source: source.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_cosine_similarity_basics() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[0.0, 1.0])).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_search_ranks_by_similarity() {
        let mut index = VectorIndex::new();
        index.insert(chunk("a.txt", "far"), vec![0.0, 1.0]);
        index.insert(chunk("b.txt", "near"), vec![1.0, 0.1]);
        index.insert(chunk("c.txt", "middle"), vec![0.7, 0.7]);

        let results = index.search(&[1.0, 0.0], 3);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].chunk.source, "b.txt");
        assert_eq!(results[1].chunk.source, "c.txt");
        assert_eq!(results[2].chunk.source, "a.txt");
        assert!(results[0].score > results[1].score);
    }

    #[test]
    fn test_search_respects_limit() {
        let mut index = VectorIndex::new();
        for i in 0..10 {
            index.insert(chunk(&format!("{i}.txt"), "text"), vec![1.0, i as f32]);
        }
        assert_eq!(index.search(&[1.0, 1.0], 4).len(), 4);
        assert_eq!(index.search(&[1.0, 1.0], 0).len(), 0);
    }

    #[test]
    fn test_search_on_empty_index() {
        let index = VectorIndex::new();
        assert!(index.search(&[1.0, 0.0], 5).is_empty());
        assert!(index.is_empty());
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut index = VectorIndex::new();
        index.insert(chunk("first.txt", "same"), vec![1.0, 0.0]);
        index.insert(chunk("second.txt", "same"), vec![1.0, 0.0]);

        let results = index.search(&[1.0, 0.0], 2);
        assert_eq!(results[0].chunk.source, "first.txt");
        assert_eq!(results[1].chunk.source, "second.txt");
    }
}
