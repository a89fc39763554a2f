//! Saved assessment result display handler

use crate::assessment::ResultStore;
use crate::cli::output::print_info;
use crate::cli::output::print_score_sheet;
use crate::AppConfig;
use crate::Result;

/// Handle results command: show the saved score sheet, if any
pub async fn handle_results_command(config: &AppConfig) -> Result<()> {
    let store = ResultStore::new(config.results_path());
    match store.load()? {
        Some(sheet) => print_score_sheet(&sheet),
        None => print_info(&format!(
            "No saved result at {}. Run `careerrag assess` first.",
            config.results_path()
        )),
    }
    Ok(())
}
