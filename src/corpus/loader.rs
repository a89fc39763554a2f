//! Loading and chunking of advisory documents

use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::info;
use tracing::warn;
use walkdir::WalkDir;

use super::DocumentChunk;

/// File extensions treated as advisory content
const CORPUS_EXTENSIONS: [&str; 3] = ["txt", "md", "csv"];

/// Walks a docs directory and turns its files into chunks.
///
/// Only plain-text formats are read. The persisted score sheet is
/// assessment state rather than advice, so it can be excluded even though
/// it lives under the same directory.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    docs_dir: PathBuf,
    chunk_chars: usize,
    excluded: Vec<PathBuf>,
}

impl CorpusLoader {
    pub fn new<P: Into<PathBuf>>(docs_dir: P, chunk_chars: usize) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            chunk_chars,
            excluded: Vec::new(),
        }
    }

    /// Skip a specific file when loading
    pub fn exclude<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.excluded.push(path.into());
        self
    }

    /// Load every corpus file under the docs directory.
    ///
    /// A missing directory yields an empty corpus, not an error; the chat
    /// advisor still works, it just has nothing to cite.
    pub fn load(&self) -> crate::Result<Vec<DocumentChunk>> {
        if !self.docs_dir.exists() {
            warn!(
                "Docs directory {} does not exist, corpus is empty",
                self.docs_dir.display()
            );
            return Ok(Vec::new());
        }

        let mut chunks = Vec::new();
        let mut files = 0usize;

        for entry in WalkDir::new(&self.docs_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_corpus_file(path) {
                continue;
            }

            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    // Binary or unreadable files are skipped, not fatal
                    warn!("Skipping {}: {e}", path.display());
                    continue;
                }
            };

            let source = self.display_source(path);
            let file_chunks = split_into_chunks(&text, self.chunk_chars);
            debug!("Loaded {} chunk(s) from {source}", file_chunks.len());

            files += 1;
            chunks.extend(file_chunks.into_iter().map(|text| DocumentChunk {
                source: source.clone(),
                text,
            }));
        }

        info!(
            "Loaded {} chunk(s) from {} file(s) under {}",
            chunks.len(),
            files,
            self.docs_dir.display()
        );
        Ok(chunks)
    }

    fn is_corpus_file(&self, path: &Path) -> bool {
        if self.excluded.iter().any(|e| same_file(e, path)) {
            debug!("Excluding {}", path.display());
            return false;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                CORPUS_EXTENSIONS.iter().any(|known| *known == ext)
            })
    }

    fn display_source(&self, path: &Path) -> String {
        path.strip_prefix(&self.docs_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Split text into chunks of at most `max_chars` characters.
///
/// Paragraphs are kept together while they fit; a single paragraph longer
/// than the budget is hard-split on character boundaries. Whitespace-only
/// input produces no chunks.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }

        for piece in split_long_paragraph(paragraph, max_chars) {
            let needed = if current.is_empty() {
                piece.chars().count()
            } else {
                current.chars().count() + 2 + piece.chars().count()
            };
            if !current.is_empty() && needed > max_chars {
                chunks.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push_str("\n\n");
            }
            current.push_str(&piece);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn split_long_paragraph(paragraph: &str, max_chars: usize) -> Vec<String> {
    let total = paragraph.chars().count();
    if total <= max_chars {
        return vec![paragraph.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut count = 0usize;
    for c in paragraph.chars() {
        piece.push(c);
        count += 1;
        if count == max_chars {
            pieces.push(std::mem::take(&mut piece));
            count = 0;
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        let chunks = split_into_chunks("Careers in engineering.", 100);
        assert_eq!(chunks, vec!["Careers in engineering.".to_string()]);
    }

    #[test]
    fn test_whitespace_only_text_has_no_chunks() {
        assert!(split_into_chunks("", 100).is_empty());
        assert!(split_into_chunks("  \n\n  \n", 100).is_empty());
    }

    #[test]
    fn test_paragraphs_merge_while_they_fit() {
        let text = "First paragraph.\n\nSecond paragraph.\n\nThird one.";
        let chunks = split_into_chunks(text, 60);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].contains("First paragraph."));
        assert!(chunks[0].contains("Second paragraph."));
        assert_eq!(chunks[1], "Third one.");
    }

    #[test]
    fn test_long_paragraph_is_hard_split() {
        let text = "x".repeat(250);
        let chunks = split_into_chunks(&text, 100);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 100);
        assert_eq!(chunks[2].chars().count(), 50);
    }

    #[test]
    fn test_hard_split_respects_char_boundaries() {
        // Multibyte characters must never be cut mid-codepoint
        let text = "é".repeat(150);
        let chunks = split_into_chunks(&text, 100);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chars().count(), 100);
        assert_eq!(chunks[1].chars().count(), 50);
    }

    #[test]
    fn test_loader_reads_nested_corpus_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("careers.txt"), "Engineering careers.").unwrap();
        std::fs::write(dir.path().join("nested/guide.md"), "# Social careers").unwrap();
        std::fs::write(dir.path().join("data.csv"), "career,type\nnurse,Social").unwrap();
        std::fs::write(dir.path().join("photo.png"), [0u8, 159, 146, 150]).unwrap();

        let chunks = CorpusLoader::new(dir.path(), 1200).load().unwrap();
        assert_eq!(chunks.len(), 3);
        let sources: Vec<&str> = chunks.iter().map(|c| c.source.as_str()).collect();
        assert!(sources.contains(&"careers.txt"));
        assert!(!sources.contains(&"photo.png"));
    }

    #[test]
    fn test_loader_skips_excluded_score_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let scores = dir.path().join("riasec_scores.csv");
        std::fs::write(&scores, "Type,Score\nRealistic,10\n").unwrap();
        std::fs::write(dir.path().join("advice.txt"), "Advice text.").unwrap();

        let chunks = CorpusLoader::new(dir.path(), 1200)
            .exclude(&scores)
            .load()
            .unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].source, "advice.txt");
    }

    #[test]
    fn test_missing_directory_is_an_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CorpusLoader::new(dir.path().join("absent"), 1200);
        assert!(loader.load().unwrap().is_empty());
    }
}
