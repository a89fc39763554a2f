//! Terminal formatting shared across the CLI handlers.

use crate::assessment::ScoreSheet;
use crate::corpus::ScoredChunk;
use crate::AppConfig;

/// Truncate to `max_chars` characters, appending "..." when anything
/// was cut. Counts characters rather than bytes so multi-byte input
/// never splits mid-codepoint.
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

/// Background spinner shown while the advisor is thinking
pub struct Spinner {
    message: String,
    running: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

impl Spinner {
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            running: std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false)),
        }
    }

    pub fn start(&self) {
        let message = self.message.clone();
        let running = self.running.clone();
        running.store(true, std::sync::atomic::Ordering::Relaxed);

        std::thread::spawn(move || {
            let frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
            let mut idx = 0;

            while running.load(std::sync::atomic::Ordering::Relaxed) {
                let frame = frames[idx];
                print!("\r  {frame} {message}...");
                std::io::Write::flush(&mut std::io::stdout()).ok();
                idx = (idx + 1) % frames.len();
                std::thread::sleep(std::time::Duration::from_millis(80));
            }

            // Wipe the spinner line
            print!("\r{}\r", " ".repeat(80));
            std::io::Write::flush(&mut std::io::stdout()).ok();
        });
    }

    pub fn stop(&self) {
        self.running
            .store(false, std::sync::atomic::Ordering::Relaxed);
        std::thread::sleep(std::time::Duration::from_millis(100)); // Give time to clear
    }
}

/// Print a score sheet as a labelled bar chart with the dominant type highlighted
pub fn print_score_sheet(sheet: &ScoreSheet) {
    println!("📊 RIASEC Scores");
    println!("================");
    println!();

    let max = sheet
        .entries()
        .map(|(_, score)| score)
        .max()
        .unwrap_or(0)
        .max(1);
    let dominant = sheet.dominant();

    for (riasec_type, score) in sheet.entries() {
        let width = (score as usize * 30) / max as usize;
        let bar: String = "█".repeat(width);
        let marker = if riasec_type == dominant { " ⭐" } else { "" };
        println!(
            "  {:<13} {:>3}  {}{}",
            riasec_type.label(),
            score,
            bar,
            marker
        );
    }

    println!();
    println!("🎯 Dominant type: {}", dominant.label());
}

/// Print text with word wrapping
pub fn print_wrapped(text: &str, max_width: usize) {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut current_line = String::new();

    for word in words {
        if current_line.len() + word.len() + 1 > max_width {
            println!("{current_line}");
            current_line = word.to_string();
        } else {
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
    }
    if !current_line.is_empty() {
        println!("{current_line}");
    }
}

/// Print retrieved sources with similarity scores and a short preview
pub fn print_sources(sources: &[ScoredChunk]) {
    if sources.is_empty() {
        println!("  (no sources retrieved)");
        return;
    }
    println!("📚 Sources:");
    for (i, scored) in sources.iter().enumerate() {
        println!(
            "  {}. {} (score: {:.3})",
            i + 1,
            scored.chunk.source,
            scored.score
        );
        println!("     {}", truncate_str(&scored.chunk.text, 120));
    }
}

/// Section-by-section dump of the loaded configuration
pub fn print_config(config: &AppConfig) {
    println!("📋 CareerRAG Configuration:");
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Backtrace: {}", config.logging.backtrace);
    println!();

    println!("🧠 Embeddings:");
    println!("  Dimension: {}", config.embedding_dimension());
    println!("  Model: {}", config.embedding_model());
    println!();

    println!("🤖 LLM:");
    println!("  Endpoint: {}", config.llm_endpoint());
    println!("  Model: {}", config.llm_model());
    println!("  Key: {}", mask_llm_key(config.llm_key()));
    println!();

    println!("📂 Corpus:");
    println!("  Docs dir: {}", config.docs_dir());
    println!("  Chunk size: {} chars", config.chunk_chars());
    println!();

    println!("💬 Chat:");
    println!("  Retrieval limit: {}", config.retrieval_limit());
    println!("  Max context: {} chars", config.max_context_chars());
    println!("  Memory limit: {} tokens", config.memory_token_limit());
    println!("  Temperature: {}", config.temperature());
    println!("  Max tokens: {}", config.max_tokens());
    println!("  Session timeout: {}s", config.session_timeout_secs());
    println!();

    println!("🧪 Assessment:");
    println!("  Results path: {}", config.results_path());
}

/// Mask an LLM API key for display (keep a short prefix)
fn mask_llm_key(key: &str) -> String {
    if key == "ollama" || key.is_empty() {
        key.to_string()
    } else if key.chars().count() <= 8 {
        "***".to_string()
    } else {
        let prefix: String = key.chars().take(4).collect();
        format!("{prefix}***")
    }
}

// Status line helpers, one emoji per severity

pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}

pub fn print_error(msg: &str) {
    println!("❌ {msg}");
}

/// Print without a newline and flush, for inline input prompts
pub fn print_prompt(msg: &str) {
    print!("{msg}");
    std::io::Write::flush(&mut std::io::stdout()).ok();
}
