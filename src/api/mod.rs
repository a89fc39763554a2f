//! API server module for serving the assessment and chat over REST

pub mod handlers;
pub mod routes;
pub mod server;
pub mod session;
pub mod types;

pub use server::serve_api;
