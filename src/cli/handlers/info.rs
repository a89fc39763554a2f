//! Effective-configuration display

use crate::cli::output::print_config;
use crate::AppConfig;
use crate::Result;

/// Show the configuration the process actually loaded, secrets masked.
pub async fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
