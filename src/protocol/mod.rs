//! Core A2A protocol types and definitions

pub mod agent;
pub mod error;
pub mod message;
pub mod operation;

pub use agent::{AgentCapabilities, AgentCard, AgentSkill};
pub use error::{A2aError, A2aResult};
pub use message::{Message, MessageSendParams, Part, Role};
pub use operation::ExchangeOperation;
