//! Errors reported by the color picker.
//!
//! None of these are fatal. The picker stays interactive and the canonical
//! color is left unchanged whenever one of them is returned.

use crate::view::Field;

/// An erroneous hexadecimal color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HexFormatError {
    /// The digits, without a leading `#`, are neither 3 nor 6 characters
    /// long. For example, `#00` is missing a hexadecimal digit.
    UnexpectedLength(usize),

    /// A character that is not a hexadecimal digit. For example, `#00g` has
    /// the correct length but contains an unsuitable character.
    UnexpectedCharacter(char),
}

impl std::fmt::Display for HexFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::UnexpectedLength(len) => {
                write!(f, "expected 3 or 6 hexadecimal digits but found {len}")
            }
            Self::UnexpectedCharacter(c) => write!(f, "{c:?} is not a hexadecimal digit"),
        }
    }
}

impl std::error::Error for HexFormatError {}

/// An input that the picker refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerError {
    /// The hex field holds a malformed value.
    InvalidHexFormat {
        /// The rejected text.
        input: String,
        /// Why it was rejected.
        source: HexFormatError,
    },

    /// A numeric field holds text that is not a number. Numbers out of range
    /// are never an error, they are clamped.
    InvalidNumber {
        /// The field that holds the text.
        field: Field,
        /// The rejected text.
        value: String,
    },
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHexFormat { input, source } => {
                write!(f, "invalid hex color {input:?}: {source}")
            }
            Self::InvalidNumber { field, value } => {
                write!(f, "{value:?} is not a valid number for the {field} field")
            }
        }
    }
}

impl std::error::Error for PickerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidHexFormat { source, .. } => Some(source),
            Self::InvalidNumber { .. } => None,
        }
    }
}
