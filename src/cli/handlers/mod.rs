//! One handler module per subcommand.
//!
//! assess and chat are interactive loops on stdin; ask, results, index
//! and info run once and exit; serve hands off to the API server.

pub mod ask;
pub mod assess;
pub mod chat;
pub mod index;
pub mod info;
pub mod results;
pub mod serve;

// Flat namespace for main's dispatch
pub use ask::*;
pub use assess::*;
pub use chat::*;
pub use index::*;
pub use info::*;
pub use results::*;
pub use serve::*;
