//! Token classification for the TOB wire format.
//!
//! Every token on the wire starts with a leading byte that fully determines
//! its kind. This module is the static catalog mapping that byte to a
//! [`Code`] (the exact wire representation), which in turn collapses to a
//! coarser [`Symbol`] and an even coarser [`Category`].
//!
//! Two regions of the byte space encode small integers directly in the
//! leading byte with no payload: `0x00..=0x7F` is the literal range
//! `0..=127` and `0xE0..=0xFF` is the literal range `-32..=-1`. Both
//! classify as [`Code::Int8`], the same logical kind as the explicit
//! one-byte-payload encoding.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tob::token::{Category, Code, Symbol};
//!
//! assert_eq!(Code::classify(0x7F), Code::Int8);
//! assert_eq!(Code::classify(0x7F).symbol(), Symbol::Integer);
//! assert_eq!(Code::classify(0x7F).category(), Category::Data);
//! assert_eq!(Code::classify(0xD4), Code::ErrorUnknownToken);
//! ```

use std::fmt;

/// Wire opcodes. Bytes outside these assignments (and outside the two
/// small-integer ranges) are unassigned and classify as an unknown token.
pub mod opcode {
    /// Upper bound (inclusive) of the small positive integer range `0..=127`.
    pub const SMALL_POSITIVE_MAX: u8 = 0x7F;
    /// Lower bound (inclusive) of the small negative integer range `-32..=-1`.
    pub const SMALL_NEGATIVE_MIN: u8 = 0xE0;

    pub const FALSE: u8 = 0x80;
    pub const TRUE: u8 = 0x81;
    pub const NULL: u8 = 0x82;

    pub const BEGIN_RECORD: u8 = 0x90;
    pub const END_RECORD: u8 = 0x91;
    pub const BEGIN_ARRAY: u8 = 0x92;
    pub const END_ARRAY: u8 = 0x93;
    pub const BEGIN_MAP: u8 = 0x94;
    pub const END_MAP: u8 = 0x95;
    pub const DEPRECATED_BEGIN_MAP: u8 = 0x96;
    pub const DEPRECATED_END_MAP: u8 = 0x97;

    pub const INT8: u8 = 0xA0;
    pub const INT16: u8 = 0xA1;
    pub const INT32: u8 = 0xA2;
    pub const INT64: u8 = 0xA3;
    pub const FLOAT32: u8 = 0xA8;
    pub const FLOAT64: u8 = 0xA9;

    pub const STRING8: u8 = 0xB0;
    pub const STRING16: u8 = 0xB1;
    pub const STRING32: u8 = 0xB2;
    pub const STRING64: u8 = 0xB3;
    pub const BINARY8: u8 = 0xB8;
    pub const BINARY16: u8 = 0xB9;
    pub const BINARY32: u8 = 0xBA;
    pub const BINARY64: u8 = 0xBB;

    pub const ARRAY_INT8: u8 = 0xC0;
    pub const ARRAY_INT16: u8 = 0xC1;
    pub const ARRAY_INT32: u8 = 0xC2;
    pub const ARRAY_INT64: u8 = 0xC3;
    pub const ARRAY_FLOAT32: u8 = 0xC8;
    pub const ARRAY_FLOAT64: u8 = 0xC9;
}

/// The exact wire representation of a token.
///
/// [`Code::End`] is a virtual status code: it is never present on the wire
/// and is reported by a reader whose input is exhausted. The `Error*` codes
/// are likewise sentinels reported by a failed reader, one per failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    End,
    ErrorUnknownToken,
    ErrorUnexpectedToken,
    ErrorNegativeLength,
    ErrorInvalidValue,
    ErrorIncompatibleType,
    ErrorOverflow,
    Null,
    False,
    True,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    String8,
    String16,
    String32,
    String64,
    Binary8,
    Binary16,
    Binary32,
    Binary64,
    ArrayInt8,
    ArrayInt16,
    ArrayInt32,
    ArrayInt64,
    ArrayFloat32,
    ArrayFloat64,
    BeginRecord,
    EndRecord,
    BeginArray,
    EndArray,
    BeginMap,
    EndMap,
    DeprecatedBeginMap,
    DeprecatedEndMap,
}

/// Coarse classification of a token, derived from its [`Code`].
///
/// All integer widths map to [`Symbol::Integer`], all real widths to
/// [`Symbol::Real`], and so on. Begin/end markers map to
/// [`Symbol::Structural`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    End,
    Error,
    Null,
    Boolean,
    Integer,
    Real,
    String,
    Binary,
    Array,
    Structural,
}

/// Coarsest classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Virtual end-of-input status.
    Status,
    /// Malformed-input sentinel.
    Error,
    /// The null token.
    Nullable,
    /// A token carrying a value.
    Data,
    /// Begin/end markers.
    Structural,
}

impl Code {
    /// Classifies a leading byte. Unassigned bytes classify as
    /// [`Code::ErrorUnknownToken`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tob::token::Code;
    ///
    /// assert_eq!(Code::classify(0x00), Code::Int8); // small integer 0
    /// assert_eq!(Code::classify(0xE0), Code::Int8); // small integer -32
    /// assert_eq!(Code::classify(0x82), Code::Null);
    /// ```
    pub fn classify(byte: u8) -> Code {
        use opcode::*;
        match byte {
            0x00..=SMALL_POSITIVE_MAX => Code::Int8,
            SMALL_NEGATIVE_MIN..=0xFF => Code::Int8,
            FALSE => Code::False,
            TRUE => Code::True,
            NULL => Code::Null,
            BEGIN_RECORD => Code::BeginRecord,
            END_RECORD => Code::EndRecord,
            BEGIN_ARRAY => Code::BeginArray,
            END_ARRAY => Code::EndArray,
            BEGIN_MAP => Code::BeginMap,
            END_MAP => Code::EndMap,
            DEPRECATED_BEGIN_MAP => Code::DeprecatedBeginMap,
            DEPRECATED_END_MAP => Code::DeprecatedEndMap,
            INT8 => Code::Int8,
            INT16 => Code::Int16,
            INT32 => Code::Int32,
            INT64 => Code::Int64,
            FLOAT32 => Code::Float32,
            FLOAT64 => Code::Float64,
            STRING8 => Code::String8,
            STRING16 => Code::String16,
            STRING32 => Code::String32,
            STRING64 => Code::String64,
            BINARY8 => Code::Binary8,
            BINARY16 => Code::Binary16,
            BINARY32 => Code::Binary32,
            BINARY64 => Code::Binary64,
            ARRAY_INT8 => Code::ArrayInt8,
            ARRAY_INT16 => Code::ArrayInt16,
            ARRAY_INT32 => Code::ArrayInt32,
            ARRAY_INT64 => Code::ArrayInt64,
            ARRAY_FLOAT32 => Code::ArrayFloat32,
            ARRAY_FLOAT64 => Code::ArrayFloat64,
            _ => Code::ErrorUnknownToken,
        }
    }

    /// Returns the coarse symbol for this code.
    #[must_use]
    pub const fn symbol(self) -> Symbol {
        match self {
            Code::End => Symbol::End,
            Code::ErrorUnknownToken
            | Code::ErrorUnexpectedToken
            | Code::ErrorNegativeLength
            | Code::ErrorInvalidValue
            | Code::ErrorIncompatibleType
            | Code::ErrorOverflow => Symbol::Error,
            Code::Null => Symbol::Null,
            Code::False | Code::True => Symbol::Boolean,
            Code::Int8 | Code::Int16 | Code::Int32 | Code::Int64 => Symbol::Integer,
            Code::Float32 | Code::Float64 => Symbol::Real,
            Code::String8 | Code::String16 | Code::String32 | Code::String64 => Symbol::String,
            Code::Binary8 | Code::Binary16 | Code::Binary32 | Code::Binary64 => Symbol::Binary,
            Code::ArrayInt8
            | Code::ArrayInt16
            | Code::ArrayInt32
            | Code::ArrayInt64
            | Code::ArrayFloat32
            | Code::ArrayFloat64 => Symbol::Array,
            Code::BeginRecord
            | Code::EndRecord
            | Code::BeginArray
            | Code::EndArray
            | Code::BeginMap
            | Code::EndMap
            | Code::DeprecatedBeginMap
            | Code::DeprecatedEndMap => Symbol::Structural,
        }
    }

    /// Returns the category for this code.
    #[must_use]
    pub const fn category(self) -> Category {
        self.symbol().category()
    }

    /// Returns `true` for the `begin_*` structural markers.
    #[must_use]
    pub const fn is_begin(self) -> bool {
        matches!(
            self,
            Code::BeginRecord | Code::BeginArray | Code::BeginMap | Code::DeprecatedBeginMap
        )
    }

    /// Returns `true` for the `end_*` structural markers.
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(
            self,
            Code::EndRecord | Code::EndArray | Code::EndMap | Code::DeprecatedEndMap
        )
    }

    /// The `end_*` code matching a `begin_*` code, if this is one.
    #[must_use]
    pub const fn matching_end(self) -> Option<Code> {
        match self {
            Code::BeginRecord => Some(Code::EndRecord),
            Code::BeginArray => Some(Code::EndArray),
            Code::BeginMap => Some(Code::EndMap),
            Code::DeprecatedBeginMap => Some(Code::DeprecatedEndMap),
            _ => None,
        }
    }
}

impl Symbol {
    /// Returns the category for this symbol.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Symbol::End => Category::Status,
            Symbol::Error => Category::Error,
            Symbol::Null => Category::Nullable,
            Symbol::Boolean
            | Symbol::Integer
            | Symbol::Real
            | Symbol::String
            | Symbol::Binary
            | Symbol::Array => Category::Data,
            Symbol::Structural => Category::Structural,
        }
    }
}

/// Payload shape of a leading byte: how many bytes follow the opcode, and
/// how they are framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Payload {
    /// No payload bytes. Small integers carry their value in the leading
    /// byte itself.
    None,
    /// A fixed number of payload bytes.
    Fixed(usize),
    /// A little-endian length prefix of the given width, then that many
    /// content bytes. The 8-byte prefix is signed.
    LengthPrefixed(usize),
    /// A 1-byte total byte length, then a homogeneous run of elements of
    /// the given size.
    Counted { element_size: usize },
}

/// Returns the payload shape for a leading byte, or `None` if the byte is
/// unassigned.
pub(crate) fn payload_shape(byte: u8) -> Option<Payload> {
    use opcode::*;
    let shape = match byte {
        0x00..=SMALL_POSITIVE_MAX | SMALL_NEGATIVE_MIN..=0xFF => Payload::None,
        FALSE | TRUE | NULL => Payload::None,
        BEGIN_RECORD | END_RECORD | BEGIN_ARRAY | END_ARRAY | BEGIN_MAP | END_MAP
        | DEPRECATED_BEGIN_MAP | DEPRECATED_END_MAP => Payload::None,
        INT8 => Payload::Fixed(1),
        INT16 => Payload::Fixed(2),
        INT32 => Payload::Fixed(4),
        INT64 => Payload::Fixed(8),
        FLOAT32 => Payload::Fixed(4),
        FLOAT64 => Payload::Fixed(8),
        STRING8 | BINARY8 => Payload::LengthPrefixed(1),
        STRING16 | BINARY16 => Payload::LengthPrefixed(2),
        STRING32 | BINARY32 => Payload::LengthPrefixed(4),
        STRING64 | BINARY64 => Payload::LengthPrefixed(8),
        ARRAY_INT8 => Payload::Counted { element_size: 1 },
        ARRAY_INT16 => Payload::Counted { element_size: 2 },
        ARRAY_INT32 => Payload::Counted { element_size: 4 },
        ARRAY_INT64 => Payload::Counted { element_size: 8 },
        ARRAY_FLOAT32 => Payload::Counted { element_size: 4 },
        ARRAY_FLOAT64 => Payload::Counted { element_size: 8 },
        _ => return None,
    };
    Some(shape)
}

/// Element size in bytes for the compact array codes.
pub(crate) const fn compact_element_size(code: Code) -> Option<usize> {
    match code {
        Code::ArrayInt8 => Some(1),
        Code::ArrayInt16 => Some(2),
        Code::ArrayInt32 => Some(4),
        Code::ArrayInt64 => Some(8),
        Code::ArrayFloat32 => Some(4),
        Code::ArrayFloat64 => Some(8),
        _ => None,
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Code::End => "end",
            Code::ErrorUnknownToken => "error_unknown_token",
            Code::ErrorUnexpectedToken => "error_unexpected_token",
            Code::ErrorNegativeLength => "error_negative_length",
            Code::ErrorInvalidValue => "error_invalid_value",
            Code::ErrorIncompatibleType => "error_incompatible_type",
            Code::ErrorOverflow => "error_overflow",
            Code::Null => "null",
            Code::False => "false",
            Code::True => "true",
            Code::Int8 => "int8",
            Code::Int16 => "int16",
            Code::Int32 => "int32",
            Code::Int64 => "int64",
            Code::Float32 => "float32",
            Code::Float64 => "float64",
            Code::String8 => "string8",
            Code::String16 => "string16",
            Code::String32 => "string32",
            Code::String64 => "string64",
            Code::Binary8 => "binary8",
            Code::Binary16 => "binary16",
            Code::Binary32 => "binary32",
            Code::Binary64 => "binary64",
            Code::ArrayInt8 => "array8_int8",
            Code::ArrayInt16 => "array8_int16",
            Code::ArrayInt32 => "array8_int32",
            Code::ArrayInt64 => "array8_int64",
            Code::ArrayFloat32 => "array8_float32",
            Code::ArrayFloat64 => "array8_float64",
            Code::BeginRecord => "begin_record",
            Code::EndRecord => "end_record",
            Code::BeginArray => "begin_array",
            Code::EndArray => "end_array",
            Code::BeginMap => "begin_assoc_array",
            Code::EndMap => "end_assoc_array",
            Code::DeprecatedBeginMap => "deprecated_begin_assoc_array",
            Code::DeprecatedEndMap => "deprecated_end_assoc_array",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symbol::End => "end",
            Symbol::Error => "error",
            Symbol::Null => "null",
            Symbol::Boolean => "boolean",
            Symbol::Integer => "integer",
            Symbol::Real => "real",
            Symbol::String => "string",
            Symbol::Binary => "binary",
            Symbol::Array => "array",
            Symbol::Structural => "structural",
        };
        f.write_str(name)
    }
}
