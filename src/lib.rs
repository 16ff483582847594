//! # A2A Exchange
//!
//! A Tower-based implementation of the agent message-exchange handshake
//! from the Agent2Agent (A2A) protocol: agent card discovery, unary and
//! streaming message sends, and a server-side agent abstraction.
//!
//! ## Features
//!
//! - **Transport agnostic**: HTTP+JSON with SSE streaming, or an
//!   in-process loopback for tests and embedded hosts
//! - **Capability injection**: agents implement a two-method trait and are
//!   attached to a neutral host
//! - **Stateless by construction**: every exchange is a pure function of
//!   its input, so there is nothing to lock or retry
//!
//! ## Example
//!
//! ```rust,no_run
//! use a2a_exchange::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = "http://localhost:5209/".parse().unwrap();
//!     let mut client = ClientBuilder::new_http(url).build()?;
//!
//!     let card = client.resolve_card().await?;
//!     println!("Connected to agent: {}", card.name);
//!
//!     let reply = client.send_unary(Message::user("Hello from the A2A client!")).await?;
//!     println!("Received response: {}", reply.text_content());
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod chat;
pub mod client;
pub mod codec;
pub mod layer;
pub mod protocol;
pub mod service;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        agent::{Agent, AgentHost, EchoAgent},
        client::{AgentClient, ClientBuilder},
        protocol::error::{A2aError, A2aResult},
        protocol::{AgentCard, AgentSkill, Message, MessageSendParams, Part, Role},
    };
}
