//! claude-blocklist - destructive-command gate for Claude Code
//!
//! Reads the PreToolUse hook JSON from stdin. Denied commands produce a
//! permission decision on stdout; everything else exits silently with
//! status 0, including input that cannot be parsed at all (fail open).
//!
//! # Usage
//!
//! ```bash
//! echo '{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}' | claude-blocklist
//! ```

use std::env;
use std::io::{self, Read, Write};

use claude_blocklist::{DecisionEngine, HookInput, HookOutput};

fn print_version() {
    println!("claude-blocklist {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"claude-blocklist - destructive-command gate for Claude Code

USAGE:
    claude-blocklist [OPTIONS]

OPTIONS:
    -h, --help       Print this help message
    -v, --version    Print version information

USAGE AS HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "type": "command",
          "command": "~/.claude/hooks/claude-blocklist",
          "tools": ["Bash"]
        }}]
      }}
    }}

    Reads the hook JSON from stdin. On deny, writes a permissionDecision
    object to stdout; on allow, writes nothing and exits 0.
"#
    );
}

fn main() {
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-v" | "--version" => {
                print_version();
                return;
            }
            _ => {}
        }
    }

    // Read JSON from stdin
    let mut input_json = String::new();
    if io::stdin().read_to_string(&mut input_json).is_err() {
        // Unreadable stdin: fail open, nothing to check
        return;
    }

    // Parse input; malformed input fails open with no output. Blocking all
    // tool use on any malformed-but-harmless input would be worse than
    // occasionally missing a check.
    let input = match HookInput::from_json(&input_json) {
        Ok(input) => input,
        Err(_) => return,
    };

    let request = input.into_request();
    let decision = DecisionEngine::shared().classify(&request);

    // Only a deny produces output; allow is silence + exit 0
    if let Some(output) = HookOutput::from_decision(&decision) {
        let json = output.to_json();
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{}", json);
        let _ = handle.flush();
    }
}
