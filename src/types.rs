use serde::Deserialize;

/// Which exit code a link reports after its child has exited.
///
/// - `Propagate`: return the child's exit code unchanged, so the top-level
///   code equals the deepest link's code (default behaviour).
/// - `AlwaysZero`: a link that managed to launch and await its child always
///   exits with `0`, whatever the child reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitCodePolicy {
    Propagate,
    AlwaysZero,
}

impl Default for ExitCodePolicy {
    fn default() -> Self {
        ExitCodePolicy::Propagate
    }
}

/// How the next link is handed to the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Execute the program directly.
    Direct,
    /// Go through the platform shell (`sh -c` / `cmd /C`).
    Shell,
}

impl Default for LaunchMode {
    fn default() -> Self {
        LaunchMode::Direct
    }
}

/// Where lifecycle events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Plain lines on stdout.
    Console,
    /// `tracing` events with structured fields (stderr).
    Structured,
}

impl Default for SinkKind {
    fn default() -> Self {
        SinkKind::Console
    }
}
