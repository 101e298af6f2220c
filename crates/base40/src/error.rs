//! Error types for base40 name validation, conversion, and arithmetic.

use thiserror::Error;

use crate::name::Quality;

/// Which kind of name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// A pitch name such as `"C#4"`.
    Pitch,
    /// An interval name such as `"+M9"`.
    Interval,
}

impl NameKind {
    /// Returns the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            NameKind::Pitch => "pitch",
            NameKind::Interval => "interval",
        }
    }
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur while parsing, converting, or combining base40 values.
///
/// All failures are synchronous validation failures on malformed input.
/// A MIDI value outside `0..=127` is not an error; see
/// [`base40_to_midi`](crate::codec::base40_to_midi).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base40Error {
    /// A pitch or interval string failed syntactic validation.
    #[error("invalid {kind} name \"{name}\": {reason}")]
    InvalidName {
        kind: NameKind,
        name: String,
        reason: &'static str,
    },

    /// A letter outside `A..=G` was given to a letter lookup.
    #[error("invalid letter '{letter}'")]
    InvalidLetter { letter: char },

    /// A well-formed interval name whose quality is not legal for its quantity.
    #[error("invalid quality \"{quality}\" for quantity \"{quantity}\"")]
    IllegalIntervalQuality { quality: Quality, quantity: u32 },

    /// A base40 pitch number that is not positive or falls on an empty slot.
    #[error("invalid base40 pitch {value}: {reason}")]
    InvalidPitch { value: i32, reason: &'static str },

    /// A base40 interval number whose simple class falls on an empty slot.
    #[error("{value} has no valid interval representation")]
    InvalidInterval { value: i32 },

    /// Integer arithmetic left the representable range.
    #[error("base40 arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl Base40Error {
    pub(crate) fn pitch_name(name: &str, reason: &'static str) -> Self {
        Base40Error::InvalidName {
            kind: NameKind::Pitch,
            name: name.to_string(),
            reason,
        }
    }

    pub(crate) fn interval_name(name: &str, reason: &'static str) -> Self {
        Base40Error::InvalidName {
            kind: NameKind::Interval,
            name: name.to_string(),
            reason,
        }
    }

    /// Returns a stable error code for reporting (e.g., `"BASE40_001"`).
    pub fn code(&self) -> &'static str {
        match self {
            Base40Error::InvalidName { .. } => "BASE40_001",
            Base40Error::InvalidLetter { .. } => "BASE40_002",
            Base40Error::IllegalIntervalQuality { .. } => "BASE40_003",
            Base40Error::InvalidPitch { .. } => "BASE40_004",
            Base40Error::InvalidInterval { .. } => "BASE40_005",
            Base40Error::Overflow { .. } => "BASE40_006",
        }
    }

    /// Returns the error category used to group related errors.
    pub fn category(&self) -> &'static str {
        match self {
            Base40Error::InvalidName { .. } | Base40Error::InvalidLetter { .. } => "name",
            Base40Error::InvalidPitch { .. } => "pitch",
            Base40Error::IllegalIntervalQuality { .. }
            | Base40Error::InvalidInterval { .. }
            | Base40Error::Overflow { .. } => "interval",
        }
    }
}
