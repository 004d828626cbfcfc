//! Error types for TOB encoding and decoding.
//!
//! All failures in this crate are reported through the single [`Error`] enum,
//! with one variant per failure kind. Decode-time structural errors latch the
//! reader (further iteration reports the same condition); value-conversion
//! errors are local to the call that raised them and leave the reader or
//! value untouched, so the object remains usable afterwards.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tob::{from_slice, Error, TobValue};
//!
//! // 0xDD is not assigned in the token catalog.
//! let result: Result<TobValue, Error> = from_slice(&[0xDD]);
//! assert!(matches!(result, Err(Error::UnknownToken { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding or decoding
/// TOB data, or while converting a [`TobValue`](crate::TobValue).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The leading byte of a token is not assigned in the token catalog, or
    /// a declared length was requested from a token kind that carries none.
    #[error("unknown token: byte 0x{byte:02x} at offset {offset}")]
    UnknownToken { offset: usize, byte: u8 },

    /// A token appeared where the protocol does not allow it, e.g. an end
    /// marker with no matching begin marker.
    #[error("unexpected token: found {found} at offset {offset}")]
    UnexpectedToken { offset: usize, found: String },

    /// The input ended before a complete value was decoded.
    #[error("unexpected end of input at offset {offset}: expected {expected}")]
    UnexpectedEnd { offset: usize, expected: String },

    /// A 64-bit length prefix declared a negative length.
    #[error("negative length {length} at offset {offset}")]
    NegativeLength { offset: usize, length: i64 },

    /// The bytes or structure of a token are malformed for its kind.
    #[error("invalid value: {msg}")]
    InvalidValue { msg: String },

    /// A value of one category was requested as an unrelated category, or an
    /// operation was applied to a tag that does not support it.
    #[error("incompatible type: expected {expected}, found {found}")]
    IncompatibleType { expected: String, found: String },

    /// A numeric value does not fit the requested type.
    #[error("overflow: value does not fit in {target}")]
    Overflow { target: String },

    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message, used for serde bridge errors.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unknown-token error for an unassigned leading byte.
    pub fn unknown_token(offset: usize, byte: u8) -> Self {
        Error::UnknownToken { offset, byte }
    }

    /// Creates an unexpected-token error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tob::Error;
    ///
    /// let err = Error::unexpected_token(4, "end_array");
    /// assert!(err.to_string().contains("end_array"));
    /// ```
    pub fn unexpected_token(offset: usize, found: impl fmt::Display) -> Self {
        Error::UnexpectedToken {
            offset,
            found: found.to_string(),
        }
    }

    /// Creates an unexpected-end error with a description of what was missing.
    pub fn unexpected_end(offset: usize, expected: &str) -> Self {
        Error::UnexpectedEnd {
            offset,
            expected: expected.to_string(),
        }
    }

    /// Creates a negative-length error for a signed 64-bit length prefix.
    pub fn negative_length(offset: usize, length: i64) -> Self {
        Error::NegativeLength { offset, length }
    }

    /// Creates an invalid-value error for malformed token payloads.
    pub fn invalid_value(msg: impl fmt::Display) -> Self {
        Error::InvalidValue {
            msg: msg.to_string(),
        }
    }

    /// Creates an incompatible-type error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tob::Error;
    ///
    /// let err = Error::incompatible_type("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn incompatible_type(expected: impl fmt::Display, found: impl fmt::Display) -> Self {
        Error::IncompatibleType {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an overflow error naming the requested target type.
    pub fn overflow(target: impl fmt::Display) -> Self {
        Error::Overflow {
            target: target.to_string(),
        }
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
