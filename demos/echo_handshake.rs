//! Echo agent handshake example
//!
//! Resolves the agent card from a running A2A agent, then sends the same
//! message over the unary and the streaming path.
//!
//! Run against an agent listening on localhost:
//!
//! ```sh
//! cargo run --example echo_handshake
//! ```

use a2a_exchange::prelude::*;
use futures::StreamExt;

const AGENT_URL: &str = "http://localhost:5209/";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // 1. Resolve the agent card
    let url = AGENT_URL.parse()?;
    let mut client = ClientBuilder::new_http(url).build()?;

    let card = client.resolve_card().await?;
    println!("Connected to agent: {}", card.name);
    println!("Description: {}", card.description);
    println!("Streaming support: {}", card.capabilities.streaming);

    // 2. Send a message using the unary API
    println!("\n=== Non-Streaming Communication ===");
    let message = Message::user("Hello from the A2A client!");
    let reply = client.send_unary(message.clone()).await?;
    println!("Received response: {}", reply.text_content());

    // 3. Send the same message using the streaming API
    println!("\n=== Streaming Communication ===");
    let mut stream = client.send_stream(message).await?;
    while let Some(chunk) = stream.next().await {
        println!("Received streaming chunk: {}", chunk?.text_content());
    }

    Ok(())
}
