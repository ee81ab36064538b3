//! The decision engine
//!
//! Compiles the signature table once and classifies requests against it.
//! Classification is a pure function of the request and the static ruleset:
//! no I/O, no mutation, identical input always yields an identical decision.

use once_cell::sync::Lazy;
use regex::{RegexSet, RegexSetBuilder};

use crate::input::ClassificationRequest;
use crate::output::Decision;
use crate::rules::{Signature, SIGNATURES};

/// Tools whose input is shell command text. Everything else is outside this
/// gate's jurisdiction and allowed without inspection.
fn is_shell_tool(tool_name: &str) -> bool {
    tool_name == "Bash"
}

static SHARED: Lazy<DecisionEngine> = Lazy::new(DecisionEngine::new);

/// The destructive-command decision engine.
///
/// Holds the compiled ruleset. Immutable after construction and `Sync`, so a
/// single engine can serve arbitrarily many concurrent classifications.
pub struct DecisionEngine {
    signatures: &'static [Signature],
    set: RegexSet,
}

impl DecisionEngine {
    /// Compile the builtin signature table into an engine.
    ///
    /// The builtin patterns are static and covered by a compile test, so a
    /// failure here is a programming error; an empty fallback set would
    /// silently disable the gate, which is worse than refusing to start.
    pub fn new() -> Self {
        Self::with_signatures(SIGNATURES)
    }

    /// Compile an engine over a specific ordered signature table
    pub fn with_signatures(signatures: &'static [Signature]) -> Self {
        let patterns: Vec<&str> = signatures.iter().map(|s| s.pattern).collect();
        let set = RegexSetBuilder::new(&patterns)
            .case_insensitive(true)
            .build()
            .expect("builtin signature patterns compile");
        Self { signatures, set }
    }

    /// The process-wide engine, compiled on first use
    pub fn shared() -> &'static DecisionEngine {
        &SHARED
    }

    /// Classify a request against the ruleset.
    ///
    /// Non-shell tools and empty commands are trivially safe. Otherwise the
    /// earliest-declared matching signature populates the deny; no match
    /// allows. `RegexSet` reports matches in declaration order, which is what
    /// makes first-match-wins hold.
    pub fn classify(&self, request: &ClassificationRequest) -> Decision {
        if !is_shell_tool(&request.tool_name) {
            return Decision::Allow;
        }

        let command = match request.command_text.as_deref() {
            Some(cmd) if !cmd.is_empty() => cmd,
            _ => return Decision::Allow,
        };

        match self.set.matches(command).iter().next() {
            Some(idx) => Decision::deny(self.signatures[idx].description, command),
            None => Decision::Allow,
        }
    }

    /// Number of signatures in the compiled ruleset
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// True when the ruleset is empty
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}
