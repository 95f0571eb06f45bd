//! Parsing options and configuration.

/// Options for reading generated pages.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Reject pages that do not carry a Doxygen generator tag
    pub require_doxygen: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (replace invalid UTF-8 instead of failing).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Only accept pages produced by Doxygen.
    pub fn require_doxygen(mut self, require: bool) -> Self {
        self.require_doxygen = require;
        self
    }
}

/// Error handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Skip invalid content and continue
    Lenient,
}
