//! Command-line surface of the `careerrag` binary.
//!
//! `commands` defines the clap tree, `handlers` holds one module per
//! subcommand, and `output` carries the shared terminal formatting
//! (score charts, spinners, wrapped text).

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::*;
pub use handlers::*;
pub use output::*;
