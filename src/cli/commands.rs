//! The clap command tree

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "careerrag")]
#[command(about = "RIASEC career assessment with a RAG-backed career advisor")]
#[command(version)]
pub struct Cli {
    /// Debug-level logging regardless of the configured level
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Take the RIASEC assessment interactively
    Assess {
        /// Question bank to use: "full" (42 statements) or "short" (12 statements)
        #[arg(short, long, default_value = "full")]
        bank: String,
        /// Compute and display scores without saving them
        #[arg(long)]
        no_save: bool,
    },
    /// Show the saved assessment result
    Results,
    /// Chat with the career advisor interactively
    Chat,
    /// Ask the career advisor a single question
    Ask {
        /// Question to answer in one shot
        question: String,
        /// Show the retrieved sources alongside the answer
        #[arg(short, long)]
        sources: bool,
        /// Sampling temperature (overrides the configured value)
        #[arg(long)]
        temperature: Option<f32>,
        /// Maximum tokens to generate (overrides the configured value)
        #[arg(long)]
        max_tokens: Option<usize>,
    },
    /// Load the advisory corpus and report what would be indexed
    Index {
        /// Show a preview of every chunk
        #[arg(short, long)]
        detailed: bool,
    },
    /// Server commands
    Serve {
        #[command(subcommand)]
        action: ServeCommands,
    },
    /// Print the effective configuration, secrets masked
    Config,
}

#[derive(Subcommand)]
pub enum ServeCommands {
    /// Start the REST API (assessment, results and chat endpoints)
    Api {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Bind port
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Enable CORS for all origins
        #[arg(long)]
        cors: bool,
    },
}
