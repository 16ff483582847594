//! Console chat loop over an external completion service
//!
//! A thin read-line/print loop: each console line becomes a user turn, the
//! whole history goes to the completion service, and the reply is printed
//! and appended. No retries, no concurrency, no state beyond the history.

pub mod gemini;

use std::io::{BufRead, Write};

use async_trait::async_trait;

pub use gemini::{GeminiChat, GeminiConfig};

use crate::protocol::error::A2aResult;

/// Role of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// Turn entered by the user
    User,

    /// Turn produced by the completion service
    Assistant,
}

/// One turn of a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    /// Who produced the turn
    pub role: ChatRole,

    /// Plain text content
    pub content: String,
}

impl ChatTurn {
    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Append-only conversation history
#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl ChatHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn
    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// Append a user turn
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatTurn::user(content));
    }

    /// Append an assistant turn
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(ChatTurn::assistant(content));
    }

    /// The turns in conversation order
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Number of turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the history has no turns yet
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// External chat-completion service
///
/// The conversation history is forwarded whole on every call; the service
/// returns the next assistant turn.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Produce the next assistant turn for the given history
    async fn complete(&self, history: &ChatHistory) -> A2aResult<ChatTurn>;
}

/// Run the chat loop until end-of-input
///
/// Reads one line per user turn, forwards the history to the completion
/// service, prints `"Assistant > " + reply` and appends both turns.
/// End-of-input terminates the loop gracefully; service errors propagate.
pub async fn run_chat<R, W, S>(mut input: R, mut output: W, service: &S) -> A2aResult<()>
where
    R: BufRead,
    W: Write,
    S: CompletionService + ?Sized,
{
    let mut history = ChatHistory::new();

    loop {
        write!(output, "User > ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input, not an error
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        history.push_user(line);

        let reply = service.complete(&history).await?;
        writeln!(output, "Assistant > {}", reply.content)?;

        history.push(reply);
    }

    Ok(())
}
