//! Destructive-command signatures
//!
//! The ordered blocklist the engine matches commands against. Each entry is a
//! self-contained (pattern, description) pair; adding a hazard class means
//! adding a row here, never touching the matcher.

/// A single destructive-command signature.
///
/// Patterns are regex source strings compiled case-insensitively by the
/// engine. The first matching signature in [`SIGNATURES`] supplies the
/// description reported to the user; any match denies.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    /// Regex pattern to search for in the raw command text
    pub pattern: &'static str,

    /// Human-readable hazard label reported on deny
    pub description: &'static str,
}

impl Signature {
    /// Create a new signature
    pub const fn new(pattern: &'static str, description: &'static str) -> Self {
        Self {
            pattern,
            description,
        }
    }
}

/// The builtin blocklist, in match-priority order.
///
/// Where two signatures could fire on the same command, the more specific one
/// is declared first so the reported reason is the most actionable. The `rm`
/// patterns tolerate flag bundling (`-rf`, `-fr`, `-Rf`) and only target
/// root-like locations (a single top-level segment, `~`, or `.`) so nested
/// deletes like `rm -rf build/` stay out of scope.
pub const SIGNATURES: &[Signature] = &[
    // Filesystem destruction
    Signature::new(
        r"\brm\s+(-[a-zA-Z]*)?(r[a-zA-Z]*f|f[a-zA-Z]*r)\b.*\s+/\s*$",
        "rm -rf / (filesystem wipe)",
    ),
    Signature::new(
        r"\brm\s+(-[a-zA-Z]*)?(r[a-zA-Z]*f|f[a-zA-Z]*r)\b.*\s+/[a-z]+\s*$",
        "rm -rf on system directory",
    ),
    Signature::new(
        r"\brm\s+(-[a-zA-Z]*)?(r[a-zA-Z]*f|f[a-zA-Z]*r)\b.*\s+~\s*$",
        "rm -rf ~ (home directory wipe)",
    ),
    Signature::new(
        r"\brm\s+(-[a-zA-Z]*)?(r[a-zA-Z]*f|f[a-zA-Z]*r)\b.*\s+\.\s*$",
        "rm -rf . (current directory wipe)",
    ),
    // Disk destruction
    Signature::new(r"\bdd\b.*\bof=/dev/[sh]d", "dd write to disk device"),
    Signature::new(r"\bmkfs\b", "filesystem format command"),
    Signature::new(r"\bfdisk\b", "disk partition command"),
    // Fork bomb
    Signature::new(r":\(\)\s*\{", "fork bomb"),
    // Dangerous redirects
    Signature::new(r">\s*/dev/sd[a-z]", "redirect to disk device"),
    Signature::new(
        r">\s*/dev/null\s*2>&1\s*<\s*/dev/",
        "suspicious /dev redirect",
    ),
    // Network exfiltration of sensitive files
    Signature::new(
        r"\bcurl\b.*(-d|--data).*(/etc/passwd|/etc/shadow|\.env|\.ssh)",
        "exfiltration of sensitive files",
    ),
    Signature::new(r"\bwget\b.*(-O|-P)\s*-.*\|", "wget pipe execution"),
    // Remote code execution via pipe-to-shell
    Signature::new(
        r"\bcurl\b.*\|\s*(ba)?sh",
        "curl pipe to shell (remote code execution)",
    ),
    Signature::new(
        r"\bwget\b.*\|\s*(ba)?sh",
        "wget pipe to shell (remote code execution)",
    ),
    // Git force push to main/master
    Signature::new(
        r"\bgit\s+push\s+.*--force.*\b(main|master)\b",
        "force push to main/master",
    ),
    Signature::new(
        r"\bgit\s+push\s+-f\b.*\b(main|master)\b",
        "force push to main/master",
    ),
    // Git destructive local resets
    Signature::new(r"\bgit\s+reset\s+--hard\b", "git reset --hard (destructive)"),
    Signature::new(r"\bgit\s+clean\s+-[a-zA-Z]*f", "git clean -f (destructive)"),
    // Windows-specific destructive commands
    Signature::new(r"\bformat\s+[a-zA-Z]:", "format drive"),
    Signature::new(
        r"\bdel\s+/[sS]\s+/[qQ]\s+[cC]:\\",
        "recursive silent delete on C:",
    ),
    Signature::new(
        r"\brd\s+/[sS]\s+/[qQ]\s+[cC]:\\",
        "recursive silent remove on C:",
    ),
    // Environment variable wipes
    Signature::new(r"\bsetx?\b.*\bPATH\b.*=\s*$", "PATH wipe"),
    // Shutdown/reboot
    Signature::new(r"\bshutdown\b", "system shutdown"),
    Signature::new(r"\breboot\b", "system reboot"),
];
