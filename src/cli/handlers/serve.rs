//! API server handler

use crate::api::serve_api;
use crate::AppConfig;
use crate::Result;

pub async fn handle_serve_api(
    config: &AppConfig,
    host: String,
    port: u16,
    cors: bool,
) -> Result<()> {
    println!("🚀 Career advisor API");
    println!(
        "   {host}:{port}  (CORS {})\n",
        if cors { "enabled" } else { "disabled" }
    );

    serve_api(config, host, port, cors).await
}
