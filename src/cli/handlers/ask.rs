//! Ask command handler - one-shot questions to the career advisor

use crate::chat::ChatEngine;
use crate::cli::output::print_sources;
use crate::cli::output::print_wrapped;
use crate::cli::output::Spinner;
use crate::AppConfig;
use crate::Result;

/// Handle ask command: answer a single question with a fresh conversation
pub async fn handle_ask_command(
    config: &AppConfig,
    question: &str,
    show_sources: bool,
    temperature: Option<f32>,
    max_tokens: Option<usize>,
) -> Result<()> {
    // Flag overrides beat the configured defaults
    let mut config = config.clone();
    if let Some(t) = temperature {
        config.chat.temperature = t;
    }
    if let Some(m) = max_tokens {
        config.chat.max_tokens = m;
    }

    let spinner = Spinner::new("Loading corpus");
    spinner.start();
    let engine = ChatEngine::from_config(&config).await?;
    spinner.stop();

    let mut memory = engine.new_memory();

    let spinner = Spinner::new("Thinking");
    spinner.start();
    let reply = engine.respond(&mut memory, question).await;
    spinner.stop();
    let reply = reply?;

    println!("╔{}╗", "═".repeat(58));
    println!("║ {:<56} ║", "💼 Career Advisor");
    println!("╚{}╝", "═".repeat(58));
    println!();

    print_wrapped(&reply.answer, 70);

    println!();
    println!("{}", "─".repeat(60));
    println!(
        "📚 Corpus: {} chunks  |  🎯 Context: {} retrieved",
        engine.index_size(),
        reply.sources.len()
    );
    println!("{}", "─".repeat(60));

    if show_sources {
        println!();
        print_sources(&reply.sources);
    }

    Ok(())
}
