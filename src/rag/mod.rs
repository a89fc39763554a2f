//! Retrieval over the advisory corpus.
//!
//! The retrieval half of the chat flow: [`Retriever`] embeds a query
//! and searches the vector index, [`ContextAssembler`] packs the hits
//! into a character-bounded context block. Answer generation lives in
//! [`crate::chat`], which combines this retrieval with conversation
//! memory and score personalization.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use careerrag::config::AppConfig;
//! use careerrag::corpus::VectorIndex;
//! use careerrag::embeddings::EmbeddingService;
//! use careerrag::rag::Retriever;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let embeddings = Arc::new(EmbeddingService::new(&config)?);
//!     let index = Arc::new(VectorIndex::new());
//!
//!     let retriever = Retriever::new(embeddings, index);
//!     let results = retriever.retrieve("careers for social types", 4).await?;
//!     println!("Found {} chunk(s)", results.len());
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod retriever;

pub use context::ContextAssembler;
pub use retriever::Retriever;
