//! Corpus inspection handler
//!
//! Loads and chunks the advisory corpus exactly the way the chat engine
//! does, without calling the embedding endpoint, so the output shows what
//! would be embedded at startup.

use std::collections::BTreeMap;

use crate::cli::output::print_success;
use crate::cli::output::print_warning;
use crate::cli::output::truncate_str;
use crate::corpus::CorpusLoader;
use crate::AppConfig;
use crate::Result;

/// Handle index command: report corpus files, chunk counts and sizes
pub async fn handle_index_command(config: &AppConfig, detailed: bool) -> Result<()> {
    println!("📂 Advisory Corpus ({})", config.docs_dir());
    println!("===================================\n");

    let loader =
        CorpusLoader::new(config.docs_dir(), config.chunk_chars()).exclude(config.results_path());
    let chunks = loader.load()?;

    if chunks.is_empty() {
        print_warning(&format!(
            "No documents found under {}. Add .txt, .md or .csv files to give the advisor something to cite.",
            config.docs_dir()
        ));
        return Ok(());
    }

    let mut per_file: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for chunk in &chunks {
        let entry = per_file.entry(chunk.source.as_str()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += chunk.text.chars().count();
    }

    for (source, (count, chars)) in &per_file {
        println!("  {source}: {count} chunks, {chars} chars");
    }

    println!();
    print_success(&format!(
        "{} chunks from {} files (max {} chars per chunk)",
        chunks.len(),
        per_file.len(),
        config.chunk_chars()
    ));

    if detailed {
        println!();
        for (i, chunk) in chunks.iter().enumerate() {
            println!("[{}] {}", i + 1, chunk.source);
            println!("    {}", truncate_str(&chunk.text, 160));
        }
    }

    Ok(())
}
