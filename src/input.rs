//! Input parsing for the Claude Code hook JSON format
//!
//! Parses the JSON object Claude Code writes to the hook's stdin. Every field
//! is default-tolerant: a request that parses as JSON but lacks `tool_input`
//! or `command` must still produce a request the engine can classify.

use serde::Deserialize;

/// Main input structure from Claude Code hooks
#[derive(Debug, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g., "Bash", "Read", "Edit")
    #[serde(default)]
    pub tool_name: String,

    /// Tool-specific input parameters
    #[serde(default)]
    pub tool_input: ToolInput,
}

/// Tool-specific input parameters. Only `command` matters to this gate;
/// non-shell tools carry other fields, which serde ignores.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    /// The shell command, present when the tool is Bash
    #[serde(default)]
    pub command: Option<String>,
}

/// A single classification request handed to the decision engine.
///
/// Created per invocation from a parsed [`HookInput`] and discarded once the
/// decision is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    /// Name of the tool the agent wants to invoke
    pub tool_name: String,

    /// Raw command text, absent when the tool does not execute shell commands
    pub command_text: Option<String>,
}

impl HookInput {
    /// Parse input from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convert to the engine-facing request
    pub fn into_request(self) -> ClassificationRequest {
        ClassificationRequest {
            tool_name: self.tool_name,
            command_text: self.tool_input.command,
        }
    }
}

impl ClassificationRequest {
    /// Build a request directly, mainly for tests and embedding callers
    pub fn new(tool_name: impl Into<String>, command_text: Option<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            command_text,
        }
    }
}
