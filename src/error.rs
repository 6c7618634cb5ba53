/// Errors reported by the strict helpers.
///
/// Splitting a URL never fails; these only come from conversions layered
/// on top of a component view, such as reading the port as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The port view is empty
    MissingPort,
    /// The port view is not a decimal number in `0..=65535`
    InvalidPort,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MissingPort => "Missing port",
            Self::InvalidPort => "Invalid port",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for the strict helpers
pub type Result<T> = core::result::Result<T, ParseError>;
