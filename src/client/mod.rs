//! High-level client API for the message exchange

pub mod agent;
pub mod builder;
pub mod config;

pub use agent::AgentClient;
pub use builder::ClientBuilder;
pub use config::ClientConfig;
