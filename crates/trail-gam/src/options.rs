//! Encoder options.

/// How the encoder treats text and raw values wider than their field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// Reject over-long values with `ValueTooLong` (default).
    #[default]
    Strict,
    /// Cut over-long values to the field width.
    Truncate,
}

/// Options for encoding save records.
///
/// Integer fields are always range-checked, whatever the text mode.
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    /// Handling of over-long text and raw values.
    pub text_mode: TextMode,
}

impl EncodeOptions {
    /// Create encoder options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Truncate over-long values instead of failing.
    #[must_use]
    pub fn truncating(mut self) -> Self {
        self.text_mode = TextMode::Truncate;
        self
    }

    /// Set the text mode.
    #[must_use]
    pub fn with_text_mode(mut self, mode: TextMode) -> Self {
        self.text_mode = mode;
        self
    }
}
