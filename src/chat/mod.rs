//! RAG chat for career advice
//!
//! The chat side of the application: prompt construction, bounded
//! conversation memory, and the engine that turns a user message into a
//! grounded answer. One [`ChatEngine`] is shared across sessions; each
//! conversation owns its own [`ChatMemory`].

pub mod engine;
pub mod memory;
pub mod prompts;

pub use engine::ChatEngine;
pub use engine::ChatReply;
pub use memory::ChatMemory;
