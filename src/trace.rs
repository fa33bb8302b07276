//! Diagnostic tracing for recovered per-request failures.

use std::fmt;

/// Most frames one block will render; anything beyond is dropped.
const MAX_FRAMES: usize = 32;

/// One element of the call chain, captured by whoever caught the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceFrame {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl TraceFrame {
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

impl fmt::Display for TraceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\t{}:{} {}()", self.file, self.line, self.function)
    }
}

/// Writes recovered failures to stderr according to a verbosity level.
///
/// Verbosity 0 emits nothing; 1 a single `recover:` line; anything higher
/// additionally one line per supplied frame, terminated by a blank line.
/// The whole block is rendered into one buffer and written in a single
/// call, so blocks from concurrent workers may interleave with each other
/// but their lines never do. Tracing never alters how the failure itself
/// propagates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureTracer {
    verbosity: u8,
}

impl FailureTracer {
    #[must_use]
    pub const fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    pub fn trace<F>(self, failure: &F, frames: &[TraceFrame])
    where
        F: fmt::Display,
    {
        if let Some(block) = self.render(failure, frames) {
            eprint!("{block}");
        }
    }

    fn render<F>(self, failure: &F, frames: &[TraceFrame]) -> Option<String>
    where
        F: fmt::Display,
    {
        if self.verbosity == 0 {
            return None;
        }
        let mut lines = vec![format!("recover: {failure}")];
        if self.verbosity > 1 {
            lines.extend(frames.iter().take(MAX_FRAMES).map(ToString::to_string));
            lines.push(String::new());
        }
        lines.push(String::new());
        Some(lines.join("\n"))
    }
}
