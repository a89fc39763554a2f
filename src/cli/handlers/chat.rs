//! Interactive career advisor chat handler

use std::io;

use crate::chat::ChatEngine;
use crate::cli::output::print_error;
use crate::cli::output::print_info;
use crate::cli::output::print_prompt;
use crate::cli::output::print_score_sheet;
use crate::cli::output::print_success;
use crate::cli::output::print_wrapped;
use crate::cli::output::Spinner;
use crate::AppConfig;
use crate::Result;

/// Handle chat command: an interactive REPL against the career advisor
pub async fn handle_chat_command(config: &AppConfig) -> Result<()> {
    print_info("Loading advisory corpus and warming up the advisor...");
    let engine = ChatEngine::from_config(config).await?;
    let mut memory = engine.new_memory();

    println!();
    println!("╔{}╗", "═".repeat(58));
    println!("║ {:<56} ║", "💬 Career Advisor Chat");
    println!("║ {:<56} ║", "Commands: 'scores', 'clear', 'exit', 'quit', Ctrl+C");
    println!("╚{}╝", "═".repeat(58));
    println!();

    print_wrapped(engine.greeting(), 70);
    println!();

    loop {
        print_prompt("You: ");

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // EOF on stdin, e.g. piped input ran out
            break;
        }
        let message = input.trim();

        // Control words never reach the model
        if message.is_empty() {
            continue;
        }
        if message.eq_ignore_ascii_case("exit")
            || message.eq_ignore_ascii_case("quit")
            || message.eq_ignore_ascii_case("q")
        {
            println!();
            print_success("👋 Thanks for chatting. Good luck out there!");
            break;
        }
        if message.eq_ignore_ascii_case("clear") {
            memory.clear();
            print_info("Conversation history cleared.");
            continue;
        }
        if message.eq_ignore_ascii_case("scores") {
            match engine.result_store().load()? {
                Some(sheet) => print_score_sheet(&sheet),
                None => print_info("No saved assessment result yet."),
            }
            println!();
            continue;
        }

        println!();

        let spinner = Spinner::new("Thinking");
        spinner.start();
        let reply = engine.respond(&mut memory, message).await;
        spinner.stop();

        // Keep the REPL alive through transient LLM failures
        match reply {
            Ok(reply) => {
                println!("Advisor:");
                println!();
                print_wrapped(&reply.answer, 70);
                println!();
                println!("{}", "─".repeat(60));
                println!();
            }
            Err(e) => {
                print_error(&format!("Advisor failed to answer: {e}"));
                println!();
            }
        }
    }

    Ok(())
}
