//! # serde_tob
//!
//! A Serde-compatible codec for the TOB (Token-Oriented Binary) format.
//!
//! ## What is TOB?
//!
//! TOB is a compact, self-describing binary token protocol. A value is a
//! flat sequence of tokens, each introduced by a single classifying byte:
//! small integers fit in one byte, scalars carry little-endian payloads,
//! strings and binary blobs are length-prefixed, and containers are
//! delimited by structural begin/end markers. See the [`spec`] module for
//! the complete wire format.
//!
//! ## Key Features
//!
//! - **Serde Compatible**: Works seamlessly with existing Rust types via
//!   `#[derive(Serialize, Deserialize)]`
//! - **Dynamic Values**: [`TobValue`] represents any TOB value with exact
//!   type-tag tracking, cross-type numeric conversion, ordered maps, and
//!   STL-style iteration
//! - **Token-Level Access**: [`Reader`] and [`Writer`] expose the protocol
//!   one token at a time for streaming and inspection use cases
//! - **Zero-Copy Strings**: deserialization borrows string and binary
//!   content straight from the input buffer
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_tob = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_tob::{from_slice, to_vec};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let bytes = to_vec(&user).unwrap();
//! let user_back: User = from_slice(&bytes).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Dynamic Values with the tob! Macro
//!
//! ```rust
//! use serde_tob::{tob, TobValue};
//!
//! let mut data = tob!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde"]
//! });
//!
//! assert_eq!(data["name"], tob!("Alice"));
//! data["age"].append(&tob!(1)).unwrap();
//! assert_eq!(data["age"], tob!(31));
//! ```
//!
//! ### Token-Level Reading
//!
//! ```rust
//! use serde_tob::Reader;
//! use serde_tob::token::Symbol;
//!
//! // int16 opcode + little-endian 0x0100
//! let reader = Reader::new(&[0xA1, 0x00, 0x01]);
//! assert_eq!(reader.symbol(), Symbol::Integer);
//! assert_eq!(reader.value::<i32>().unwrap(), 256);
//! ```

pub mod cursor;
pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod reader;
pub mod ser;
pub mod spec;
pub mod token;
pub mod value;
pub mod writer;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use map::TobMap;
pub use reader::Reader;
pub use ser::{Serializer, TobValueSerializer};
pub use value::TobValue;
pub use writer::Writer;

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to a TOB byte vector.
///
/// # Examples
///
/// ```rust
/// use serde_tob::to_vec;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let bytes = to_vec(&Point { x: 1, y: 2 }).unwrap();
/// assert!(!bytes.is_empty());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g. an unsigned
/// integer above `i64::MAX`).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new();
    value.serialize(&mut serializer)?;
    Ok(serializer.into_bytes())
}

/// Serialize any `T: Serialize` to a writer in TOB format.
///
/// # Examples
///
/// ```rust
/// use serde_tob::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2, 3]).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let bytes = to_vec(value)?;
    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Convert any `T: Serialize` to a [`TobValue`].
///
/// Unlike [`to_vec`], struct fields are preserved by name, so the result is
/// self-describing.
///
/// # Examples
///
/// ```rust
/// use serde_tob::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_map());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: T) -> Result<TobValue>
where
    T: Serialize,
{
    value.serialize(TobValueSerializer)
}

/// Deserialize an instance of type `T` from TOB bytes.
///
/// The whole input must be consumed: trailing tokens after the root value
/// are an error.
///
/// # Examples
///
/// ```rust
/// use serde_tob::from_slice;
///
/// // begin_array, count 2, true, false, end_array
/// let values: Vec<bool> = from_slice(&[0x92, 0x02, 0x81, 0x80, 0x93]).unwrap();
/// assert_eq!(values, vec![true, false]);
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid TOB or cannot be deserialized
/// to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_slice(v);
    let value = T::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// Deserialize an instance of type `T` from an I/O stream of TOB bytes.
///
/// # Examples
///
/// ```rust
/// use serde_tob::from_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(vec![0x92, 0x02, 0x01, 0x02, 0x93]);
/// let values: Vec<i32> = from_reader(cursor).unwrap();
/// assert_eq!(values, vec![1, 2]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid TOB, or the
/// data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&bytes)
}

/// Deserialize an instance of type `T` from a [`TobValue`].
///
/// # Examples
///
/// ```rust
/// use serde_tob::{from_value, tob};
///
/// let value = tob!([1, 2, 3]);
/// let numbers: Vec<i32> = from_value(&value).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: &TobValue) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    from_slice(&to_vec(value)?)
}
