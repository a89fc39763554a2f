use careerrag::cli::commands::Cli;
use careerrag::cli::commands::Commands;
use careerrag::cli::commands::ServeCommands;
use careerrag::cli::handlers;
use careerrag::AppConfig;
use careerrag::Result;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;

    if config.logging.backtrace && std::env::var_os("RUST_BACKTRACE").is_none() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    // --verbose wins over the configured level
    let level = if cli.verbose {
        "debug"
    } else {
        config.logging_level()
    };
    careerrag::logging::init_logging_with_level(level)?;
    info!("Configuration loaded");

    // Dispatch to the subcommand handlers
    match cli.command {
        Commands::Assess { bank, no_save } => {
            handlers::handle_assess_command(&config, &bank, no_save).await?;
        }
        Commands::Results => {
            handlers::handle_results_command(&config).await?;
        }
        Commands::Chat => {
            handlers::handle_chat_command(&config).await?;
        }
        Commands::Ask {
            question,
            sources,
            temperature,
            max_tokens,
        } => {
            handlers::handle_ask_command(&config, &question, sources, temperature, max_tokens)
                .await?;
        }
        Commands::Index { detailed } => {
            handlers::handle_index_command(&config, detailed).await?;
        }
        Commands::Serve { action } => match action {
            ServeCommands::Api { host, port, cors } => {
                handlers::handle_serve_api(&config, host, port, cors).await?;
            }
        },
        Commands::Config => {
            handlers::handle_config_command(&config).await?;
        }
    }

    Ok(())
}
