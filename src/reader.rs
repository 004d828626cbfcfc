//! TOB token reader.
//!
//! [`Reader`] is a pull-style state machine over a byte buffer: at any point
//! it is positioned at a token, at the end of input, or latched in a failure
//! state. Constructing a reader decodes the first token eagerly; [`Reader::next`]
//! is the sole transition, consuming the current token and decoding the
//! following one.
//!
//! Token payloads are decoded lazily: classification ([`Reader::code`],
//! [`Reader::symbol`], [`Reader::category`]) is O(1), and the payload is only
//! interpreted when [`Reader::value`] or [`Reader::array`] is called with a
//! requested type.
//!
//! ## Usage
//!
//! ```rust
//! use serde_tob::Reader;
//! use serde_tob::token::{Code, Symbol};
//!
//! // int16 opcode + little-endian 0x0100
//! let mut reader = Reader::new(&[0xA1, 0x00, 0x01]);
//! assert_eq!(reader.code(), Code::Int16);
//! assert_eq!(reader.symbol(), Symbol::Integer);
//! assert_eq!(reader.value::<i16>().unwrap(), 256);
//! assert_eq!(reader.value::<f32>().unwrap(), 256.0);
//! assert!(reader.value::<i8>().is_err()); // overflow
//! assert!(!reader.next().unwrap()); // end of input
//! ```

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::token::{self, Category, Code, Payload, Symbol};
use crate::value::convert::{int_to, real_to_int};

/// The TOB token reader.
///
/// Decodes a byte buffer into a lazy sequence of tokens, tracking structural
/// nesting as it goes. Created via [`Reader::new`] or [`Reader::from_cursor`].
pub struct Reader<'de> {
    cursor: Cursor<'de>,
    state: State<'de>,
    scopes: Vec<Code>,
}

#[derive(Debug, Clone)]
struct Token<'de> {
    code: Code,
    head: u8,
    literal: &'de [u8],
}

#[derive(Debug, Clone)]
enum State<'de> {
    Positioned(Token<'de>),
    End,
    Failed(Error),
}

impl<'de> Reader<'de> {
    /// Creates a reader over `input`, decoding the first token immediately.
    #[must_use]
    pub fn new(input: &'de [u8]) -> Self {
        Self::from_cursor(Cursor::new(input))
    }

    /// Creates a reader from an existing cursor position.
    #[must_use]
    pub fn from_cursor(cursor: Cursor<'de>) -> Self {
        let mut reader = Reader {
            cursor,
            state: State::End,
            scopes: Vec::new(),
        };
        reader.state = reader.decode();
        reader
    }

    /// Advances to the next token.
    ///
    /// Returns `Ok(true)` when positioned at a token, `Ok(false)` at end of
    /// input (repeatedly, once reached). A malformed leading byte or
    /// structural mismatch latches the reader: the same error is returned
    /// from every subsequent call.
    ///
    /// A token whose declared payload length exceeds the remaining input is
    /// reported as end of input rather than an error; tree building converts
    /// a premature end into [`Error::UnexpectedEnd`].
    pub fn next(&mut self) -> Result<bool> {
        match &self.state {
            State::Failed(err) => Err(err.clone()),
            State::End => Ok(false),
            State::Positioned(_) => {
                self.state = self.decode();
                match &self.state {
                    State::Positioned(_) => Ok(true),
                    State::End => Ok(false),
                    State::Failed(err) => Err(err.clone()),
                }
            }
        }
    }

    /// The code of the current token, or the matching sentinel at end of
    /// input / after a failure.
    #[must_use]
    pub fn code(&self) -> Code {
        match &self.state {
            State::Positioned(token) => token.code,
            State::End => Code::End,
            State::Failed(err) => error_code(err),
        }
    }

    /// The coarse symbol of the current token.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.code().symbol()
    }

    /// The category of the current token.
    #[must_use]
    pub fn category(&self) -> Category {
        self.code().category()
    }

    /// Current structural nesting depth: incremented by every `begin_*`
    /// token, decremented by the matching `end_*`.
    #[must_use]
    pub fn level(&self) -> usize {
        self.scopes.len()
    }

    /// Byte offset of the cursor from the start of the input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// The raw payload slice of the current token: the single byte for a
    /// small integer, the payload (excluding opcode) for fixed-width tokens,
    /// the content (excluding opcode and length prefix) for string, binary
    /// and compact array tokens, and empty for tokens with no payload.
    #[must_use]
    pub fn literal(&self) -> &'de [u8] {
        match &self.state {
            State::Positioned(token) => token.literal,
            _ => &[],
        }
    }

    /// Declared length of the current token: the byte length for string and
    /// binary tokens, the element count for compact array tokens.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnknownToken`] on token kinds that carry no
    /// declared length (including `begin_record`, whose extent is only known
    /// once the matching end marker is reached).
    pub fn length(&self) -> Result<usize> {
        let token = self.current()?;
        match token.code.symbol() {
            Symbol::String | Symbol::Binary => Ok(token.literal.len()),
            Symbol::Array => {
                let size = token::compact_element_size(token.code)
                    .ok_or_else(|| Error::invalid_value("array token without element size"))?;
                Ok(token.literal.len() / size)
            }
            _ => Err(Error::unknown_token(self.cursor.offset(), token.head)),
        }
    }

    /// Decodes the current data token's payload into the requested type,
    /// applying the scalar conversion rules: integer tokens widen freely and
    /// narrow only when the value fits, real tokens truncate toward zero for
    /// integer requests, and cross-category requests fail with
    /// [`Error::IncompatibleType`]. A failed conversion leaves the reader
    /// usable for a different, valid request.
    pub fn value<T: FromToken<'de>>(&self) -> Result<T> {
        let token = self.current()?;
        T::from_token(token.code, token.literal)
    }

    /// Bulk-decodes a compact array token into a caller-provided slice,
    /// returning the number of elements written.
    ///
    /// This path is stricter than [`Reader::value`]: the requested element
    /// type must losslessly represent the encoded element type (same class,
    /// equal or wider width), and the destination must hold the full encoded
    /// count.
    ///
    /// # Errors
    ///
    /// [`Error::Overflow`] if `out` is shorter than the encoded count;
    /// [`Error::IncompatibleType`] if the current token is not a compact
    /// array or the element types are not losslessly convertible.
    pub fn array<T: CompactElement>(&self, out: &mut [T]) -> Result<usize> {
        let token = self.current()?;
        if token::compact_element_size(token.code).is_none() {
            return Err(Error::incompatible_type("compact array", token.code));
        }
        T::decode_compact(token.code, token.literal, out)
    }

    fn current(&self) -> Result<&Token<'de>> {
        match &self.state {
            State::Positioned(token) => Ok(token),
            State::End => Err(Error::unexpected_end(self.cursor.offset(), "a token")),
            State::Failed(err) => Err(err.clone()),
        }
    }

    /// Decodes the token at the cursor, consuming its bytes.
    fn decode(&mut self) -> State<'de> {
        let offset = self.cursor.offset();
        let Some(head) = self.cursor.peek() else {
            return State::End;
        };
        let code = Code::classify(head);
        let Some(shape) = token::payload_shape(head) else {
            return State::Failed(Error::unknown_token(offset, head));
        };
        let Ok(head_slice) = self.cursor.consume(1) else {
            return State::End;
        };

        if code.is_begin() {
            // matching_end is Some for every begin code
            if let Some(end) = code.matching_end() {
                self.scopes.push(end);
            }
        } else if code.is_end() {
            match self.scopes.pop() {
                Some(expected) if expected == code => {}
                _ => return State::Failed(Error::unexpected_token(offset, code)),
            }
        }

        let literal = match shape {
            Payload::None => {
                if code == Code::Int8 {
                    // small integer: the leading byte is the value
                    head_slice
                } else {
                    &head_slice[..0]
                }
            }
            Payload::Fixed(width) => match self.cursor.consume(width) {
                Ok(payload) => payload,
                Err(_) => return State::End,
            },
            Payload::LengthPrefixed(width) => {
                let Ok(prefix) = self.cursor.consume(width) else {
                    return State::End;
                };
                let length = match decode_length(prefix) {
                    Ok(length) => length,
                    Err(negative) => {
                        return State::Failed(Error::negative_length(offset, negative))
                    }
                };
                let Ok(length) = usize::try_from(length) else {
                    return State::End;
                };
                match self.cursor.consume(length) {
                    Ok(content) => content,
                    Err(_) => return State::End,
                }
            }
            Payload::Counted { element_size } => {
                let Ok(prefix) = self.cursor.consume(1) else {
                    return State::End;
                };
                let total = prefix[0] as usize;
                if total % element_size != 0 {
                    return State::Failed(Error::invalid_value(format!(
                        "compact array byte length {} is not a multiple of element size {}",
                        total, element_size
                    )));
                }
                match self.cursor.consume(total) {
                    Ok(content) => content,
                    Err(_) => return State::End,
                }
            }
        };

        State::Positioned(Token {
            code,
            head,
            literal,
        })
    }
}

/// Decodes a little-endian length prefix. The 8-byte prefix is signed; a
/// negative value is reported through `Err`.
fn decode_length(prefix: &[u8]) -> std::result::Result<u64, i64> {
    match prefix.len() {
        1 => Ok(prefix[0] as u64),
        2 => Ok(u16::from_le_bytes([prefix[0], prefix[1]]) as u64),
        4 => Ok(u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as u64),
        _ => {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(prefix);
            let signed = i64::from_le_bytes(bytes);
            if signed < 0 {
                Err(signed)
            } else {
                Ok(signed as u64)
            }
        }
    }
}

fn error_code(err: &Error) -> Code {
    match err {
        Error::UnknownToken { .. } => Code::ErrorUnknownToken,
        Error::UnexpectedToken { .. } => Code::ErrorUnexpectedToken,
        Error::NegativeLength { .. } => Code::ErrorNegativeLength,
        Error::IncompatibleType { .. } => Code::ErrorIncompatibleType,
        Error::Overflow { .. } => Code::ErrorOverflow,
        _ => Code::ErrorInvalidValue,
    }
}

fn payload<const N: usize>(literal: &[u8]) -> Result<[u8; N]> {
    literal
        .try_into()
        .map_err(|_| Error::invalid_value("truncated token payload"))
}

/// The integer value of an integer-symbol token.
fn token_int(code: Code, literal: &[u8]) -> Result<i64> {
    match code {
        Code::Int8 => Ok(payload::<1>(literal)?[0] as i8 as i64),
        Code::Int16 => Ok(i16::from_le_bytes(payload(literal)?) as i64),
        Code::Int32 => Ok(i32::from_le_bytes(payload(literal)?) as i64),
        Code::Int64 => Ok(i64::from_le_bytes(payload(literal)?)),
        other => Err(Error::incompatible_type("integer", other)),
    }
}

/// The real value of a real-symbol token.
fn token_real(code: Code, literal: &[u8]) -> Result<f64> {
    match code {
        Code::Float32 => Ok(f32::from_le_bytes(payload(literal)?) as f64),
        Code::Float64 => Ok(f64::from_le_bytes(payload(literal)?)),
        other => Err(Error::incompatible_type("real", other)),
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for bool {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
    impl Sealed for &str {}
    impl Sealed for Vec<u8> {}
}

/// Types a data token can be decoded into via [`Reader::value`].
///
/// This trait is sealed; it is implemented for `bool`, the integer and
/// floating-point primitives, `String`, `&str` (borrowed from the input
/// buffer), and `Vec<u8>` (binary tokens).
pub trait FromToken<'de>: Sized + sealed::Sealed {
    #[doc(hidden)]
    fn from_token(code: Code, literal: &'de [u8]) -> Result<Self>;
}

impl<'de> FromToken<'de> for bool {
    fn from_token(code: Code, _literal: &'de [u8]) -> Result<Self> {
        match code {
            Code::True => Ok(true),
            Code::False => Ok(false),
            other => Err(Error::incompatible_type("boolean", other)),
        }
    }
}

macro_rules! impl_from_token_int {
    ($($t:ty),* $(,)?) => {$(
        impl<'de> FromToken<'de> for $t {
            fn from_token(code: Code, literal: &'de [u8]) -> Result<Self> {
                match code.symbol() {
                    Symbol::Integer => int_to(token_int(code, literal)? as i128, stringify!($t)),
                    Symbol::Real => real_to_int(token_real(code, literal)?, stringify!($t)),
                    _ => Err(Error::incompatible_type(stringify!($t), code)),
                }
            }
        }
    )*};
}

impl_from_token_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl<'de> FromToken<'de> for f32 {
    fn from_token(code: Code, literal: &'de [u8]) -> Result<Self> {
        match code.symbol() {
            Symbol::Integer => Ok(token_int(code, literal)? as f32),
            Symbol::Real => Ok(token_real(code, literal)? as f32),
            _ => Err(Error::incompatible_type("f32", code)),
        }
    }
}

impl<'de> FromToken<'de> for f64 {
    fn from_token(code: Code, literal: &'de [u8]) -> Result<Self> {
        match code.symbol() {
            Symbol::Integer => Ok(token_int(code, literal)? as f64),
            Symbol::Real => Ok(token_real(code, literal)?),
            _ => Err(Error::incompatible_type("f64", code)),
        }
    }
}

impl<'de> FromToken<'de> for &'de str {
    fn from_token(code: Code, literal: &'de [u8]) -> Result<Self> {
        match code.symbol() {
            Symbol::String => std::str::from_utf8(literal)
                .map_err(|err| Error::invalid_value(format!("invalid UTF-8 in string: {}", err))),
            _ => Err(Error::incompatible_type("string", code)),
        }
    }
}

impl<'de> FromToken<'de> for String {
    fn from_token(code: Code, literal: &'de [u8]) -> Result<Self> {
        <&str>::from_token(code, literal).map(str::to_owned)
    }
}

impl<'de> FromToken<'de> for Vec<u8> {
    fn from_token(code: Code, literal: &'de [u8]) -> Result<Self> {
        match code.symbol() {
            Symbol::Binary => Ok(literal.to_vec()),
            _ => Err(Error::incompatible_type("binary", code)),
        }
    }
}

/// Element types a compact array token can be bulk-decoded into via
/// [`Reader::array`]. Sealed; implemented for `i8`/`i16`/`i32`/`i64` and
/// `f32`/`f64`.
pub trait CompactElement: Sized + sealed::Sealed {
    #[doc(hidden)]
    fn decode_compact(code: Code, literal: &[u8], out: &mut [Self]) -> Result<usize>;
}

fn check_capacity(count: usize, capacity: usize, target: &str) -> Result<()> {
    if capacity < count {
        Err(Error::overflow(format!(
            "destination of {} elements for {} encoded {}",
            capacity, count, target
        )))
    } else {
        Ok(())
    }
}

macro_rules! impl_compact_int {
    ($t:ty, [$($src:ident => $elem:ty),* $(,)?]) => {
        impl CompactElement for $t {
            fn decode_compact(code: Code, literal: &[u8], out: &mut [Self]) -> Result<usize> {
                match code {
                    $(Code::$src => {
                        let size = std::mem::size_of::<$elem>();
                        let count = literal.len() / size;
                        check_capacity(count, out.len(), stringify!($t))?;
                        for (index, chunk) in literal.chunks_exact(size).enumerate() {
                            let element = <$elem>::from_le_bytes(
                                chunk.try_into().map_err(|_| {
                                    Error::invalid_value("truncated compact array element")
                                })?,
                            );
                            out[index] = element as $t;
                        }
                        Ok(count)
                    })*
                    other => Err(Error::incompatible_type(
                        concat!("compact array of ", stringify!($t)),
                        other,
                    )),
                }
            }
        }
    };
}

impl_compact_int!(i8, [ArrayInt8 => i8]);
impl_compact_int!(i16, [ArrayInt8 => i8, ArrayInt16 => i16]);
impl_compact_int!(i32, [ArrayInt8 => i8, ArrayInt16 => i16, ArrayInt32 => i32]);
impl_compact_int!(i64, [ArrayInt8 => i8, ArrayInt16 => i16, ArrayInt32 => i32, ArrayInt64 => i64]);
impl_compact_int!(f32, [ArrayFloat32 => f32]);
impl_compact_int!(f64, [ArrayFloat32 => f32, ArrayFloat64 => f64]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::opcode;

    #[test]
    fn test_small_positive_integer() {
        let reader = Reader::new(&[0x7F]);
        assert_eq!(reader.code(), Code::Int8);
        assert_eq!(reader.symbol(), Symbol::Integer);
        assert_eq!(reader.value::<i64>().unwrap(), 127);
        assert_eq!(reader.literal(), &[0x7F]);
    }

    #[test]
    fn test_small_negative_integer() {
        let reader = Reader::new(&[0xE0]);
        assert_eq!(reader.code(), Code::Int8);
        assert_eq!(reader.value::<i32>().unwrap(), -32);
        let reader = Reader::new(&[0xFF]);
        assert_eq!(reader.value::<i32>().unwrap(), -1);
    }

    #[test]
    fn test_int16_conversions() {
        let reader = Reader::new(&[opcode::INT16, 0x00, 0x01]);
        assert_eq!(reader.value::<i16>().unwrap(), 256);
        assert_eq!(reader.value::<i32>().unwrap(), 256);
        assert_eq!(reader.value::<f32>().unwrap(), 256.0);
        assert!(matches!(
            reader.value::<i8>(),
            Err(Error::Overflow { .. })
        ));
        // a failed conversion leaves the reader usable
        assert_eq!(reader.value::<u16>().unwrap(), 256);
    }

    #[test]
    fn test_signedness() {
        let reader = Reader::new(&[0xFF]); // -1
        assert!(matches!(
            reader.value::<u8>(),
            Err(Error::Overflow { .. })
        ));
        assert_eq!(reader.value::<i8>().unwrap(), -1);
    }

    #[test]
    fn test_real_truncates_toward_zero() {
        let mut bytes = vec![opcode::FLOAT64];
        bytes.extend_from_slice(&1.0f64.to_le_bytes());
        let reader = Reader::new(&bytes);
        assert_eq!(reader.code(), Code::Float64);
        assert_eq!(reader.value::<i32>().unwrap(), 1);
        assert_eq!(reader.value::<f32>().unwrap(), 1.0);
        assert!(reader.value::<bool>().is_err());
    }

    #[test]
    fn test_boolean_is_not_numeric() {
        let reader = Reader::new(&[opcode::TRUE]);
        assert_eq!(reader.value::<bool>().unwrap(), true);
        assert!(matches!(
            reader.value::<i32>(),
            Err(Error::IncompatibleType { .. })
        ));
    }

    #[test]
    fn test_null_yields_no_value() {
        let reader = Reader::new(&[opcode::NULL]);
        assert_eq!(reader.code(), Code::Null);
        assert!(reader.value::<i32>().is_err());
        assert!(reader.value::<bool>().is_err());
        assert!(reader.value::<String>().is_err());
    }

    #[test]
    fn test_string8() {
        let reader = Reader::new(&[opcode::STRING8, 0x02, b'A', b'B']);
        assert_eq!(reader.code(), Code::String8);
        assert_eq!(reader.value::<String>().unwrap(), "AB");
        assert_eq!(reader.literal(), b"AB");
        assert_eq!(reader.length().unwrap(), 2);
    }

    #[test]
    fn test_binary_literal_only() {
        let reader = Reader::new(&[opcode::BINARY8, 0x03, 1, 2, 3]);
        assert_eq!(reader.code(), Code::Binary8);
        assert_eq!(reader.literal(), &[1, 2, 3]);
        assert_eq!(reader.value::<Vec<u8>>().unwrap(), vec![1, 2, 3]);
        assert!(reader.value::<String>().is_err());
    }

    #[test]
    fn test_token_iteration() {
        let mut reader = Reader::new(&[0x01, 0x02, opcode::TRUE]);
        assert_eq!(reader.value::<i32>().unwrap(), 1);
        assert!(reader.next().unwrap());
        assert_eq!(reader.value::<i32>().unwrap(), 2);
        assert!(reader.next().unwrap());
        assert_eq!(reader.value::<bool>().unwrap(), true);
        assert!(!reader.next().unwrap());
        assert_eq!(reader.code(), Code::End);
        // end is sticky
        assert!(!reader.next().unwrap());
    }

    #[test]
    fn test_unknown_token_latches() {
        let mut reader = Reader::new(&[0x01, 0xD4]);
        assert!(reader.next().is_err());
        assert_eq!(reader.code(), Code::ErrorUnknownToken);
        assert!(matches!(
            reader.next(),
            Err(Error::UnknownToken { byte: 0xD4, .. })
        ));
    }

    #[test]
    fn test_truncated_payload_reports_end() {
        // int32 opcode with only two payload bytes
        let reader = Reader::new(&[opcode::INT32, 0x01, 0x02]);
        assert_eq!(reader.code(), Code::End);
        // string declaring more content than remains
        let reader = Reader::new(&[opcode::STRING8, 0x05, b'a']);
        assert_eq!(reader.code(), Code::End);
    }

    #[test]
    fn test_negative_length() {
        let mut bytes = vec![opcode::STRING64];
        bytes.extend_from_slice(&(-1i64).to_le_bytes());
        let reader = Reader::new(&bytes);
        assert_eq!(reader.code(), Code::ErrorNegativeLength);
    }

    #[test]
    fn test_nesting_level() {
        let mut reader = Reader::new(&[
            opcode::BEGIN_ARRAY,
            opcode::BEGIN_RECORD,
            opcode::END_RECORD,
            opcode::END_ARRAY,
        ]);
        assert_eq!(reader.level(), 1);
        assert!(reader.next().unwrap());
        assert_eq!(reader.level(), 2);
        assert!(reader.next().unwrap());
        assert_eq!(reader.level(), 1);
        assert!(reader.next().unwrap());
        assert_eq!(reader.level(), 0);
        assert!(!reader.next().unwrap());
    }

    #[test]
    fn test_stray_end_token() {
        let reader = Reader::new(&[opcode::END_ARRAY]);
        assert_eq!(reader.code(), Code::ErrorUnexpectedToken);
    }

    #[test]
    fn test_mismatched_end_token() {
        let mut reader = Reader::new(&[opcode::BEGIN_ARRAY, opcode::END_RECORD]);
        assert!(matches!(
            reader.next(),
            Err(Error::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_length_on_lengthless_token() {
        let reader = Reader::new(&[opcode::BEGIN_RECORD]);
        assert!(matches!(
            reader.length(),
            Err(Error::UnknownToken {
                byte: opcode::BEGIN_RECORD,
                ..
            })
        ));
    }

    #[test]
    fn test_compact_int_array() {
        let reader = Reader::new(&[opcode::ARRAY_INT16, 0x04, 0x01, 0x00, 0xFF, 0xFF]);
        assert_eq!(reader.code(), Code::ArrayInt16);
        assert_eq!(reader.length().unwrap(), 2);
        let mut out = [0i16; 4];
        assert_eq!(reader.array(&mut out).unwrap(), 2);
        assert_eq!(&out[..2], &[1, -1]);
        // widening is allowed on the bulk path
        let mut wide = [0i64; 2];
        assert_eq!(reader.array(&mut wide).unwrap(), 2);
        assert_eq!(wide, [1, -1]);
    }

    #[test]
    fn test_compact_array_rejects_narrowing() {
        let reader = Reader::new(&[opcode::ARRAY_INT16, 0x02, 0x01, 0x00]);
        let mut out = [0i8; 4];
        assert!(matches!(
            reader.array(&mut out),
            Err(Error::IncompatibleType { .. })
        ));
        let mut floats = [0f64; 4];
        assert!(matches!(
            reader.array(&mut floats),
            Err(Error::IncompatibleType { .. })
        ));
    }

    #[test]
    fn test_compact_array_destination_too_small() {
        let reader = Reader::new(&[opcode::ARRAY_INT8, 0x03, 1, 2, 3]);
        let mut out = [0i8; 2];
        assert!(matches!(
            reader.array(&mut out),
            Err(Error::Overflow { .. })
        ));
    }

    #[test]
    fn test_compact_array_uneven_length() {
        let reader = Reader::new(&[opcode::ARRAY_INT16, 0x03, 1, 2, 3]);
        assert_eq!(reader.code(), Code::ErrorInvalidValue);
    }

    #[test]
    fn test_compact_float_array() {
        let mut bytes = vec![opcode::ARRAY_FLOAT32, 0x08];
        bytes.extend_from_slice(&1.5f32.to_le_bytes());
        bytes.extend_from_slice(&(-2.5f32).to_le_bytes());
        let reader = Reader::new(&bytes);
        let mut out = [0f32; 2];
        assert_eq!(reader.array(&mut out).unwrap(), 2);
        assert_eq!(out, [1.5, -2.5]);
    }

    #[test]
    fn test_empty_input() {
        let mut reader = Reader::new(&[]);
        assert_eq!(reader.code(), Code::End);
        assert!(!reader.next().unwrap());
    }
}
