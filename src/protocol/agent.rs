//! Agent discovery and capability types

use serde::{Deserialize, Serialize};

/// Agent Card for agent discovery
///
/// The Agent Card is published at `/.well-known/agent-card.json` and
/// describes the agent's identity, endpoint, capabilities and skills.
/// Cards are constructed fresh per query and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentCard {
    /// Name of the agent
    pub name: String,

    /// Human-readable description of the agent
    pub description: String,

    /// Base URL where the agent can be reached
    pub url: String,

    /// Agent version
    pub version: String,

    /// Content-type tags the agent accepts by default
    #[serde(rename = "defaultInputModes", default)]
    pub default_input_modes: Vec<String>,

    /// Content-type tags the agent produces by default
    #[serde(rename = "defaultOutputModes", default)]
    pub default_output_modes: Vec<String>,

    /// Agent capabilities
    pub capabilities: AgentCapabilities,

    /// Skills the agent advertises (possibly empty)
    #[serde(default)]
    pub skills: Vec<AgentSkill>,
}

impl AgentCard {
    /// Create a new agent card with text input/output modes
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            version: "1.0.0".to_string(),
            default_input_modes: vec!["text".to_string()],
            default_output_modes: vec!["text".to_string()],
            capabilities: AgentCapabilities::default(),
            skills: Vec::new(),
        }
    }

    /// Set the agent version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the agent capabilities
    pub fn with_capabilities(mut self, capabilities: AgentCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Add a skill to the agent card
    pub fn with_skill(mut self, skill: AgentSkill) -> Self {
        self.skills.push(skill);
        self
    }
}

/// Agent capabilities
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentCapabilities {
    /// Supports streaming responses
    #[serde(default)]
    pub streaming: bool,

    /// Supports push notifications via webhooks
    #[serde(rename = "pushNotifications", default)]
    pub push_notifications: bool,
}

impl AgentCapabilities {
    /// Create capabilities with default values (all false)
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable streaming
    pub fn with_streaming(mut self) -> Self {
        self.streaming = true;
        self
    }

    /// Enable push notifications
    pub fn with_push_notifications(mut self) -> Self {
        self.push_notifications = true;
        self
    }
}

/// A skill advertised by an agent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentSkill {
    /// Skill identifier, unique within the card
    pub id: String,

    /// Display name
    pub name: String,

    /// Human-readable description of the skill
    pub description: String,

    /// Tags classifying the skill
    #[serde(default)]
    pub tags: Vec<String>,

    /// Example prompts that exercise the skill
    #[serde(default)]
    pub examples: Vec<String>,
}

impl AgentSkill {
    /// Create a new skill with no tags or examples
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Add a classification tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add an example prompt
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_card_creation() {
        let card = AgentCard::new("Echo Agent", "Echoes messages", "http://localhost:5209/")
            .with_version("1.0.0")
            .with_capabilities(AgentCapabilities::new().with_streaming())
            .with_skill(
                AgentSkill::new("echo", "Echo tool", "Echoes every received message")
                    .with_tag("echo")
                    .with_example("hello"),
            );

        assert_eq!(card.name, "Echo Agent");
        assert!(card.capabilities.streaming);
        assert_eq!(card.version, "1.0.0");
        assert_eq!(card.skills.len(), 1);
        assert_eq!(card.skills[0].tags, vec!["echo"]);
        assert_eq!(card.default_input_modes, vec!["text"]);
    }

    #[test]
    fn test_agent_capabilities() {
        let mut caps = AgentCapabilities::default();
        assert!(!caps.streaming);
        assert!(!caps.push_notifications);

        caps = caps.with_streaming();
        assert!(caps.streaming);
    }

    #[test]
    fn test_agent_card_serialization() {
        let card = AgentCard::new("Test", "Description", "https://example.com")
            .with_capabilities(AgentCapabilities::new().with_streaming());

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["name"], "Test");
        assert_eq!(json["defaultInputModes"][0], "text");
        assert_eq!(json["capabilities"]["streaming"], true);

        let deserialized: AgentCard = serde_json::from_value(json).unwrap();
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_skills_default_to_empty_on_missing_field() {
        let json = serde_json::json!({
            "name": "Bare",
            "description": "No skills field",
            "url": "https://example.com",
            "version": "1.0.0",
            "capabilities": {"streaming": false}
        });

        let card: AgentCard = serde_json::from_value(json).unwrap();
        assert!(card.skills.is_empty());
        assert!(card.default_input_modes.is_empty());
    }
}
