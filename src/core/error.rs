use std::fmt;

/// Failure to turn an identifier token or a listing label into scalar values.
///
/// Every variant carries the input it was produced from so callers can log
/// the item and move on to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A `-`-part is not plain base-16 text.
    InvalidHex { token: String, part: String },
    /// A part parsed as hex but names a surrogate or lies past U+10FFFF.
    InvalidScalar { token: String, part: String },
    /// A category label is empty or has no space between glyph and name.
    EmptyInput { input: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidHex { token, part } => {
                write!(f, "Invalid hex part '{}' in token '{}'", part, token)
            }
            DecodeError::InvalidScalar { token, part } => {
                write!(f, "Part '{}' in token '{}' is not a Unicode scalar value", part, token)
            }
            DecodeError::EmptyInput { input } if input.is_empty() => write!(f, "Empty category entry"),
            DecodeError::EmptyInput { input } => {
                write!(f, "Category entry '{}' has no glyph/name separator", input)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl DecodeError {
    pub(crate) fn invalid_hex(token: &str, part: &str) -> Self {
        DecodeError::InvalidHex { token: token.to_string(), part: part.to_string() }
    }
    pub(crate) fn invalid_scalar(token: &str, part: &str) -> Self {
        DecodeError::InvalidScalar { token: token.to_string(), part: part.to_string() }
    }
    pub(crate) fn empty_input(input: &str) -> Self {
        DecodeError::EmptyInput { input: input.to_string() }
    }

    /// The whole input the error was raised for.
    pub fn input(&self) -> &str {
        match self {
            DecodeError::InvalidHex { token, .. } | DecodeError::InvalidScalar { token, .. } => token,
            DecodeError::EmptyInput { input } => input,
        }
    }

    /// The piece of the input to point at, if narrower than the input itself.
    pub fn offending(&self) -> Option<&str> {
        match self {
            DecodeError::InvalidHex { part, .. } | DecodeError::InvalidScalar { part, .. } => Some(part),
            DecodeError::EmptyInput { .. } => None,
        }
    }
}
