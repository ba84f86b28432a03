/// What to do with a non-blank line that has no `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Fail the whole parse with `ProfileError::MissingColon`.
    #[default]
    Error,
    /// Drop the line and keep going.
    Skip,
}

/// What to do with a line indented past the deepest open section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthPolicy {
    /// Fail the whole parse with `ProfileError::OrphanedLine`.
    #[default]
    Strict,
    /// Attach the line to the nearest shallower open section.
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Spaces per nesting level.
    pub indent_width: usize,
    pub malformed: MalformedPolicy,
    pub depth: DepthPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            malformed: MalformedPolicy::Error,
            depth: DepthPolicy::Strict,
        }
    }
}

impl ParseOptions {
    /// Skip malformed lines and re-home orphaned ones instead of failing.
    pub fn lenient() -> Self {
        Self {
            malformed: MalformedPolicy::Skip,
            depth: DepthPolicy::Nearest,
            ..Self::default()
        }
    }

    /// Set the indentation unit. Widths below 1 are raised to 1.
    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.max(1);
        self
    }

    pub fn malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }

    pub fn depth(mut self, policy: DepthPolicy) -> Self {
        self.depth = policy;
        self
    }
}
