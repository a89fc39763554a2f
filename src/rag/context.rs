//! Builds the prompt context block out of retrieved chunks.

use crate::cli::output::truncate_str;
use crate::corpus::ScoredChunk;

/// Packs scored chunks into a character-bounded context block
pub struct ContextAssembler {
    max_chars: usize,
}

impl ContextAssembler {
    /// The budget is counted in characters, not tokens
    #[must_use]
    pub const fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Assemble context from retrieved chunks.
    ///
    /// Chunks are appended best-first as labeled source blocks until the
    /// next one would exceed the character budget.
    #[must_use]
    pub fn assemble(&self, results: &[ScoredChunk]) -> String {
        let mut context = String::new();

        for (idx, result) in results.iter().enumerate() {
            let entry = format!(
                "\n[Source {}: {}]\n{}\n",
                idx + 1,
                result.chunk.source,
                result.chunk.text
            );

            if context.len() + entry.len() > self.max_chars {
                break;
            }

            context.push_str(&entry);
        }

        context
    }

    /// Short preview list of the retrieved chunks, for terminal display
    #[must_use]
    pub fn create_summary(&self, results: &[ScoredChunk]) -> String {
        if results.is_empty() {
            return "No sources found.".to_string();
        }

        let mut summary = format!("Found {} relevant source(s):\n\n", results.len());

        for (idx, result) in results.iter().enumerate().take(5) {
            let text_preview = truncate_str(&result.chunk.text, 100);

            summary.push_str(&format!(
                "{}. {} - Score: {:.2}\n   {}\n\n",
                idx + 1,
                result.chunk.source,
                result.score,
                text_preview
            ));
        }

        summary
    }
}

impl Default for ContextAssembler {
    fn default() -> Self {
        // same budget as the chat.max_context_chars default
        Self::new(4000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::DocumentChunk;

    fn scored(source: &str, text: &str, score: f32) -> ScoredChunk {
        ScoredChunk {
            chunk: DocumentChunk {
                source: source.to_string(),
                text: text.to_string(),
            },
            score,
        }
    }

    #[test]
    fn test_assemble_labels_sources_in_order() {
        let assembler = ContextAssembler::new(4000);
        let results = vec![
            scored("careers.txt", "Engineers build things.", 0.9),
            scored("guide.md", "Nurses help people.", 0.8),
        ];

        let context = assembler.assemble(&results);
        assert!(context.contains("[Source 1: careers.txt]\nEngineers build things."));
        assert!(context.contains("[Source 2: guide.md]\nNurses help people."));
        let first = context.find("[Source 1").unwrap();
        let second = context.find("[Source 2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_assemble_stops_at_budget() {
        let assembler = ContextAssembler::new(60);
        let results = vec![
            scored("a.txt", &"x".repeat(30), 0.9),
            scored("b.txt", &"y".repeat(30), 0.8),
        ];

        let context = assembler.assemble(&results);
        assert!(context.contains("[Source 1: a.txt]"));
        assert!(!context.contains("[Source 2"));
    }

    #[test]
    fn test_assemble_empty_results() {
        let assembler = ContextAssembler::default();
        assert_eq!(assembler.assemble(&[]), "");
    }

    #[test]
    fn test_summary_mentions_count_and_sources() {
        let assembler = ContextAssembler::default();
        let results = vec![scored("careers.txt", "Engineers build things.", 0.91)];

        let summary = assembler.create_summary(&results);
        assert!(summary.starts_with("Found 1 relevant source(s):"));
        assert!(summary.contains("careers.txt"));

        assert_eq!(assembler.create_summary(&[]), "No sources found.");
    }
}
