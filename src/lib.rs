//! claude-blocklist - destructive-command gate for Claude Code
//!
//! A PreToolUse hook that classifies Bash commands against a builtin
//! blocklist of destructive-action signatures before they run. Matching
//! commands are denied with an explanation; everything else is allowed
//! silently.
//!
//! # Features
//!
//! - **Builtin signature table**: filesystem wipes, disk-device writes, fork
//!   bombs, pipe-to-shell, force pushes to main/master, hard resets, and more
//! - **First match wins**: the earliest-declared signature supplies the
//!   reported reason; any match denies
//! - **Fail open**: unparseable input is never blocked, this is an advisory
//!   gate in front of a human-supervised agent, not a hard security boundary
//! - **Stateless**: one immutable compiled ruleset, safe to share across
//!   threads
//!
//! # Example
//!
//! ```
//! use claude_blocklist::{DecisionEngine, HookInput};
//!
//! let input = r#"{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}"#;
//! let request = HookInput::from_json(input).unwrap().into_request();
//!
//! let decision = DecisionEngine::shared().classify(&request);
//! assert!(decision.is_deny());
//! ```

pub mod engine;
pub mod input;
pub mod output;
pub mod rules;

// Re-exports for convenience
pub use engine::DecisionEngine;
pub use input::{ClassificationRequest, HookInput, ToolInput};
pub use output::{Decision, HookOutput, EXCERPT_MAX_CHARS};
pub use rules::{Signature, SIGNATURES};
