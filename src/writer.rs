//! TOB token writer.
//!
//! [`Writer`] is the emitting mirror of [`Reader`](crate::Reader): a
//! token-at-a-time encoder into an in-memory buffer. Scalar emitters pick the
//! most compact wire representation that holds the value (an integer in
//! `-32..=127` becomes a single byte, strings get the smallest length prefix
//! that fits), and structural emitters track nesting so that a mismatched or
//! stray end marker is rejected at write time.
//!
//! ## Usage
//!
//! ```rust
//! use serde_tob::Writer;
//!
//! let mut writer = Writer::new();
//! writer.begin_array();
//! writer.integer(2);
//! writer.boolean(true);
//! writer.boolean(false);
//! writer.end_array().unwrap();
//! assert_eq!(writer.into_bytes(), vec![0x92, 0x02, 0x81, 0x80, 0x93]);
//! ```

use crate::error::{Error, Result};
use crate::token::{opcode, Code};

/// The TOB token writer.
#[derive(Debug, Default)]
pub struct Writer {
    output: Vec<u8>,
    scopes: Vec<Code>,
}

impl Writer {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Writer {
            output: Vec::with_capacity(128),
            scopes: Vec::new(),
        }
    }

    /// Returns the encoded bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Consumes the writer and returns the encoded buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.output
    }

    /// Current structural nesting depth.
    #[must_use]
    pub fn level(&self) -> usize {
        self.scopes.len()
    }

    /// Emits a null token.
    pub fn null(&mut self) {
        self.output.push(opcode::NULL);
    }

    /// Emits a boolean token.
    pub fn boolean(&mut self, value: bool) {
        self.output
            .push(if value { opcode::TRUE } else { opcode::FALSE });
    }

    /// Emits an integer in the most compact encoding that holds it: the
    /// small-integer byte for `-32..=127`, otherwise the narrowest of
    /// `int8`/`int16`/`int32`/`int64`.
    pub fn integer(&mut self, value: i64) {
        if (-32..=127).contains(&value) {
            self.output.push(value as i8 as u8);
        } else if let Ok(v) = i8::try_from(value) {
            self.output.push(opcode::INT8);
            self.output.push(v as u8);
        } else if let Ok(v) = i16::try_from(value) {
            self.output.push(opcode::INT16);
            self.output.extend_from_slice(&v.to_le_bytes());
        } else if let Ok(v) = i32::try_from(value) {
            self.output.push(opcode::INT32);
            self.output.extend_from_slice(&v.to_le_bytes());
        } else {
            self.output.push(opcode::INT64);
            self.output.extend_from_slice(&value.to_le_bytes());
        }
    }

    /// Emits an unsigned integer.
    ///
    /// # Errors
    ///
    /// The wire format stores integers as signed two's complement, so a value
    /// above `i64::MAX` fails with [`Error::Overflow`].
    pub fn unsigned(&mut self, value: u64) -> Result<()> {
        let signed = i64::try_from(value).map_err(|_| Error::overflow("int64"))?;
        self.integer(signed);
        Ok(())
    }

    /// Emits a 32-bit real token.
    pub fn float32(&mut self, value: f32) {
        self.output.push(opcode::FLOAT32);
        self.output.extend_from_slice(&value.to_le_bytes());
    }

    /// Emits a 64-bit real token.
    pub fn float64(&mut self, value: f64) {
        self.output.push(opcode::FLOAT64);
        self.output.extend_from_slice(&value.to_le_bytes());
    }

    /// Emits a string token with the smallest length prefix that fits.
    pub fn string(&mut self, value: &str) {
        self.length_prefixed(
            value.as_bytes(),
            [
                opcode::STRING8,
                opcode::STRING16,
                opcode::STRING32,
                opcode::STRING64,
            ],
        );
    }

    /// Emits a binary token with the smallest length prefix that fits.
    pub fn binary(&mut self, value: &[u8]) {
        self.length_prefixed(
            value,
            [
                opcode::BINARY8,
                opcode::BINARY16,
                opcode::BINARY32,
                opcode::BINARY64,
            ],
        );
    }

    fn length_prefixed(&mut self, content: &[u8], opcodes: [u8; 4]) {
        let length = content.len();
        if let Ok(v) = u8::try_from(length) {
            self.output.push(opcodes[0]);
            self.output.push(v);
        } else if let Ok(v) = u16::try_from(length) {
            self.output.push(opcodes[1]);
            self.output.extend_from_slice(&v.to_le_bytes());
        } else if let Ok(v) = u32::try_from(length) {
            self.output.push(opcodes[2]);
            self.output.extend_from_slice(&v.to_le_bytes());
        } else {
            self.output.push(opcodes[3]);
            self.output.extend_from_slice(&(length as i64).to_le_bytes());
        }
        self.output.extend_from_slice(content);
    }

    /// Opens a record scope.
    pub fn begin_record(&mut self) {
        self.begin(opcode::BEGIN_RECORD, Code::EndRecord);
    }

    /// Closes a record scope.
    pub fn end_record(&mut self) -> Result<()> {
        self.end(opcode::END_RECORD, Code::EndRecord)
    }

    /// Opens an array scope.
    pub fn begin_array(&mut self) {
        self.begin(opcode::BEGIN_ARRAY, Code::EndArray);
    }

    /// Closes an array scope.
    pub fn end_array(&mut self) -> Result<()> {
        self.end(opcode::END_ARRAY, Code::EndArray)
    }

    /// Opens an associative-array scope.
    pub fn begin_map(&mut self) {
        self.begin(opcode::BEGIN_MAP, Code::EndMap);
    }

    /// Closes an associative-array scope.
    pub fn end_map(&mut self) -> Result<()> {
        self.end(opcode::END_MAP, Code::EndMap)
    }

    fn begin(&mut self, byte: u8, end: Code) {
        self.output.push(byte);
        self.scopes.push(end);
    }

    fn end(&mut self, byte: u8, end: Code) -> Result<()> {
        match self.scopes.pop() {
            Some(expected) if expected == end => {
                self.output.push(byte);
                Ok(())
            }
            Some(expected) => {
                self.scopes.push(expected);
                Err(Error::unexpected_token(self.output.len(), end))
            }
            None => Err(Error::unexpected_token(self.output.len(), end)),
        }
    }

    /// Emits a compact `array8_int8` token.
    pub fn compact_int8(&mut self, values: &[i8]) -> Result<()> {
        let bytes: Vec<u8> = values.iter().map(|v| *v as u8).collect();
        self.compact(opcode::ARRAY_INT8, &bytes)
    }

    /// Emits a compact `array8_int16` token.
    pub fn compact_int16(&mut self, values: &[i16]) -> Result<()> {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.compact(opcode::ARRAY_INT16, &bytes)
    }

    /// Emits a compact `array8_int32` token.
    pub fn compact_int32(&mut self, values: &[i32]) -> Result<()> {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.compact(opcode::ARRAY_INT32, &bytes)
    }

    /// Emits a compact `array8_int64` token.
    pub fn compact_int64(&mut self, values: &[i64]) -> Result<()> {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.compact(opcode::ARRAY_INT64, &bytes)
    }

    /// Emits a compact `array8_float32` token.
    pub fn compact_float32(&mut self, values: &[f32]) -> Result<()> {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.compact(opcode::ARRAY_FLOAT32, &bytes)
    }

    /// Emits a compact `array8_float64` token.
    pub fn compact_float64(&mut self, values: &[f64]) -> Result<()> {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.compact(opcode::ARRAY_FLOAT64, &bytes)
    }

    fn compact(&mut self, byte: u8, content: &[u8]) -> Result<()> {
        let length =
            u8::try_from(content.len()).map_err(|_| Error::overflow("compact array length"))?;
        self.output.push(byte);
        self.output.push(length);
        self.output.extend_from_slice(content);
        Ok(())
    }
}
