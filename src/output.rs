//! Decision type and Claude Code hook response JSON
//!
//! Produces the `hookSpecificOutput` object the host tool layer expects on a
//! deny. Allow produces no output at all; the reason-string template below is
//! the compatibility surface with that layer and must not be reworded.

use serde::Serialize;

/// Maximum number of characters of command text echoed in a deny explanation.
///
/// Keeps the reason concise and avoids reflecting arbitrarily long or
/// sensitive command text back in full.
pub const EXCERPT_MAX_CHARS: usize = 80;

/// Decision result from the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Allow the command; the hook stays silent
    Allow,

    /// Deny the command with a human-readable explanation
    Deny {
        /// Hazard label from the matching signature
        description: String,

        /// The offending command, truncated to [`EXCERPT_MAX_CHARS`]
        matched_excerpt: String,
    },
}

impl Decision {
    /// Create a deny decision, truncating the command to the excerpt bound.
    ///
    /// Truncation counts characters, not bytes, so multibyte command text can
    /// never split a UTF-8 scalar.
    pub fn deny(description: impl Into<String>, command: &str) -> Self {
        Decision::Deny {
            description: description.into(),
            matched_excerpt: command.chars().take(EXCERPT_MAX_CHARS).collect(),
        }
    }

    /// Check if this is an allow decision
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Check if this is a deny decision
    pub fn is_deny(&self) -> bool {
        matches!(self, Decision::Deny { .. })
    }

    /// Get the hazard description if this is a deny
    pub fn description(&self) -> Option<&str> {
        match self {
            Decision::Allow => None,
            Decision::Deny { description, .. } => Some(description),
        }
    }
}

/// Hook response written to stdout on deny
#[derive(Debug, Serialize)]
pub struct HookOutput {
    #[serde(rename = "hookSpecificOutput")]
    pub hook_specific_output: HookSpecificOutput,
}

/// The permission decision payload
#[derive(Debug, Serialize)]
pub struct HookSpecificOutput {
    #[serde(rename = "hookEventName")]
    pub hook_event_name: String,

    #[serde(rename = "permissionDecision")]
    pub permission_decision: String,

    #[serde(rename = "permissionDecisionReason")]
    pub permission_decision_reason: String,
}

impl HookOutput {
    /// Create a deny response with the verbatim reason template
    pub fn deny(description: &str, excerpt: &str) -> Self {
        HookOutput {
            hook_specific_output: HookSpecificOutput {
                hook_event_name: "PreToolUse".to_string(),
                permission_decision: "deny".to_string(),
                permission_decision_reason: format!(
                    "BLOCKED: {}. Command '{}...' matches destructive pattern. \
                     If you need this command, ask the user to run it manually.",
                    description, excerpt
                ),
            },
        }
    }

    /// Create output from a decision; `Allow` maps to no output
    pub fn from_decision(decision: &Decision) -> Option<Self> {
        match decision {
            Decision::Allow => None,
            Decision::Deny {
                description,
                matched_excerpt,
            } => Some(HookOutput::deny(description, matched_excerpt)),
        }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
