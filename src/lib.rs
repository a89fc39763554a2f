pub mod api;
pub mod assessment;
pub mod chat;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod embeddings;
pub mod errors;
pub mod llm;
pub mod logging;
pub mod rag;

pub use config::AppConfig;
pub use errors::*;
