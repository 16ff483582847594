//! Console chat example backed by the Gemini completion API
//!
//! Requires the `GEMINI_API_KEY` environment variable; a missing key is a
//! fatal startup error.
//!
//! ```sh
//! GEMINI_API_KEY=... cargo run --example chat
//! ```

use a2a_exchange::chat::{run_chat, GeminiChat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let service = GeminiChat::from_env()?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_chat(stdin.lock(), stdout.lock(), &service).await?;

    Ok(())
}
