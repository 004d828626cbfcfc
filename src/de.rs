//! Deserialize TOB bytes into Rust data structures.
//!
//! [`Deserializer`] drives a [`Reader`] token by token: scalars map
//! directly onto the serde data model with their exact width, array scopes
//! become sequences (after consuming the count-or-null metadata token),
//! record scopes become sentinel-terminated sequences, and both the classic
//! and the deprecated associative-array framings become maps with identical
//! results. Compact array tokens surface as sequences of numbers.
//!
//! Most callers use [`from_slice`](crate::from_slice) instead of this type
//! directly; deserializing into [`TobValue`](crate::TobValue) materializes
//! the full value tree.

use crate::error::{Error, Result};
use crate::reader::Reader;
use crate::token::{Category, Code, Symbol};
use serde::de::value::SeqDeserializer;
use serde::de::{self, DeserializeSeed, Visitor};
use serde::forward_to_deserialize_any;

/// A serde deserializer reading TOB tokens through a [`Reader`].
pub struct Deserializer<'de> {
    reader: Reader<'de>,
}

impl<'de> Deserializer<'de> {
    /// Creates a deserializer over a byte slice.
    #[must_use]
    pub fn from_slice(input: &'de [u8]) -> Self {
        Deserializer {
            reader: Reader::new(input),
        }
    }

    /// Creates a deserializer over an existing reader position.
    #[must_use]
    pub fn from_reader(reader: Reader<'de>) -> Self {
        Deserializer { reader }
    }

    /// Verifies that the input is exhausted.
    ///
    /// # Errors
    ///
    /// [`Error::UnexpectedToken`] when decodable tokens remain after the
    /// root value, or the reader's latched error for malformed trailing
    /// bytes.
    pub fn end(&mut self) -> Result<()> {
        match self.reader.code() {
            Code::End => Ok(()),
            code if code.category() == Category::Error => self.latched(),
            code => Err(Error::unexpected_token(self.reader.offset(), code)),
        }
    }

    /// Re-raises the error the reader latched on.
    fn latched<T>(&mut self) -> Result<T> {
        match self.reader.next() {
            Err(err) => Err(err),
            Ok(_) => Err(Error::invalid_value("reader error state was cleared")),
        }
    }

    /// Consumes the count-or-null metadata token that follows an array or
    /// associative-array begin marker.
    fn count_token(&mut self) -> Result<Option<usize>> {
        match self.reader.code() {
            Code::Null => {
                self.reader.next()?;
                Ok(None)
            }
            Code::End => Err(Error::unexpected_end(
                self.reader.offset(),
                "an element count or null",
            )),
            code if code.symbol() == Symbol::Integer => {
                let count = self.reader.value::<i64>()?;
                let count = usize::try_from(count)
                    .map_err(|_| Error::invalid_value("negative element count"))?;
                self.reader.next()?;
                Ok(Some(count))
            }
            code if code.category() == Category::Error => self.latched(),
            code => Err(Error::unexpected_token(self.reader.offset(), code)),
        }
    }
}

/// Numeric requests go through [`Reader::value`] so the scalar conversion
/// rules apply: widening is free, narrowing is checked, and a value that
/// does not fit reports [`Error::Overflow`] rather than a generic type
/// error. Non-numeric tokens fall back to self-describing dispatch.
macro_rules! deserialize_number {
    ($($method:ident => $visit:ident as $t:ty),* $(,)?) => {$(
        fn $method<V>(self, visitor: V) -> Result<V::Value>
        where
            V: Visitor<'de>,
        {
            match self.reader.symbol() {
                Symbol::Integer | Symbol::Real => {
                    let value = self.reader.value::<$t>()?;
                    self.reader.next()?;
                    visitor.$visit(value)
                }
                _ => self.deserialize_any(visitor),
            }
        }
    )*};
}

impl<'de, 'a> de::Deserializer<'de> for &'a mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.reader.code() {
            Code::End => Err(Error::unexpected_end(self.reader.offset(), "a value")),
            Code::Null => {
                self.reader.next()?;
                visitor.visit_unit()
            }
            Code::True => {
                self.reader.next()?;
                visitor.visit_bool(true)
            }
            Code::False => {
                self.reader.next()?;
                visitor.visit_bool(false)
            }
            Code::Int8 => {
                let value = self.reader.value::<i8>()?;
                self.reader.next()?;
                visitor.visit_i8(value)
            }
            Code::Int16 => {
                let value = self.reader.value::<i16>()?;
                self.reader.next()?;
                visitor.visit_i16(value)
            }
            Code::Int32 => {
                let value = self.reader.value::<i32>()?;
                self.reader.next()?;
                visitor.visit_i32(value)
            }
            Code::Int64 => {
                let value = self.reader.value::<i64>()?;
                self.reader.next()?;
                visitor.visit_i64(value)
            }
            Code::Float32 => {
                let value = self.reader.value::<f32>()?;
                self.reader.next()?;
                visitor.visit_f32(value)
            }
            Code::Float64 => {
                let value = self.reader.value::<f64>()?;
                self.reader.next()?;
                visitor.visit_f64(value)
            }
            Code::String8 | Code::String16 | Code::String32 | Code::String64 => {
                let value = self.reader.value::<&'de str>()?;
                self.reader.next()?;
                visitor.visit_borrowed_str(value)
            }
            Code::Binary8 | Code::Binary16 | Code::Binary32 | Code::Binary64 => {
                let value = self.reader.literal();
                self.reader.next()?;
                visitor.visit_borrowed_bytes(value)
            }
            Code::ArrayInt8 => {
                let mut values = vec![0i8; self.reader.length()?];
                self.reader.array(&mut values)?;
                self.reader.next()?;
                visitor.visit_seq(SeqDeserializer::<_, Error>::new(values.into_iter()))
            }
            Code::ArrayInt16 => {
                let mut values = vec![0i16; self.reader.length()?];
                self.reader.array(&mut values)?;
                self.reader.next()?;
                visitor.visit_seq(SeqDeserializer::<_, Error>::new(values.into_iter()))
            }
            Code::ArrayInt32 => {
                let mut values = vec![0i32; self.reader.length()?];
                self.reader.array(&mut values)?;
                self.reader.next()?;
                visitor.visit_seq(SeqDeserializer::<_, Error>::new(values.into_iter()))
            }
            Code::ArrayInt64 => {
                let mut values = vec![0i64; self.reader.length()?];
                self.reader.array(&mut values)?;
                self.reader.next()?;
                visitor.visit_seq(SeqDeserializer::<_, Error>::new(values.into_iter()))
            }
            Code::ArrayFloat32 => {
                let mut values = vec![0f32; self.reader.length()?];
                self.reader.array(&mut values)?;
                self.reader.next()?;
                visitor.visit_seq(SeqDeserializer::<_, Error>::new(values.into_iter()))
            }
            Code::ArrayFloat64 => {
                let mut values = vec![0f64; self.reader.length()?];
                self.reader.array(&mut values)?;
                self.reader.next()?;
                visitor.visit_seq(SeqDeserializer::<_, Error>::new(values.into_iter()))
            }
            Code::BeginArray => {
                self.reader.next()?;
                let expected = self.count_token()?;
                let mut tokens = SeqTokens {
                    de: self,
                    end: Code::EndArray,
                    expected,
                    seen: 0,
                };
                let value = visitor.visit_seq(&mut tokens)?;
                tokens.finish()?;
                Ok(value)
            }
            Code::BeginRecord => {
                self.reader.next()?;
                let mut tokens = SeqTokens {
                    de: self,
                    end: Code::EndRecord,
                    expected: None,
                    seen: 0,
                };
                let value = visitor.visit_seq(&mut tokens)?;
                tokens.finish()?;
                Ok(value)
            }
            Code::BeginMap => {
                self.reader.next()?;
                let expected = self.count_token()?;
                let mut tokens = MapTokens {
                    de: self,
                    expected,
                    seen: 0,
                    record_wrapped: false,
                };
                let value = visitor.visit_map(&mut tokens)?;
                tokens.finish()?;
                Ok(value)
            }
            Code::DeprecatedBeginMap => {
                self.reader.next()?;
                let expected = self.count_token()?;
                let mut tokens = MapTokens {
                    de: self,
                    expected,
                    seen: 0,
                    record_wrapped: true,
                };
                let value = visitor.visit_map(&mut tokens)?;
                tokens.finish()?;
                Ok(value)
            }
            code if code.category() == Category::Error => self.latched(),
            code => Err(Error::unexpected_token(self.reader.offset(), code)),
        }
    }

    deserialize_number! {
        deserialize_i8 => visit_i8 as i8,
        deserialize_i16 => visit_i16 as i16,
        deserialize_i32 => visit_i32 as i32,
        deserialize_i64 => visit_i64 as i64,
        deserialize_u8 => visit_u8 as u8,
        deserialize_u16 => visit_u16 as u16,
        deserialize_u32 => visit_u32 as u32,
        deserialize_u64 => visit_u64 as u64,
        deserialize_f32 => visit_f32 as f32,
        deserialize_f64 => visit_f64 as f64,
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.reader.code() {
            // binary content decodes element-wise for sequence-only
            // visitors such as Vec<u8>'s
            Code::Binary8 | Code::Binary16 | Code::Binary32 | Code::Binary64 => {
                let literal = self.reader.literal();
                self.reader.next()?;
                visitor.visit_seq(SeqDeserializer::<_, Error>::new(literal.iter().copied()))
            }
            _ => self.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        if self.reader.code() == Code::Null {
            self.reader.next()?;
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.reader.code() {
            code if code.symbol() == Symbol::String => {
                // bare variant name, no payload
                visitor.visit_enum(EnumTokens { de: self })
            }
            Code::BeginMap => {
                self.reader.next()?;
                self.count_token()?;
                let value = visitor.visit_enum(EnumTokens { de: &mut *self })?;
                if self.reader.code() != Code::EndMap {
                    return Err(Error::unexpected_token(
                        self.reader.offset(),
                        self.reader.code(),
                    ));
                }
                self.reader.next()?;
                Ok(value)
            }
            code => Err(Error::incompatible_type("enum", code)),
        }
    }

    fn is_human_readable(&self) -> bool {
        false
    }

    forward_to_deserialize_any! {
        bool i128 u128 char str string bytes byte_buf unit unit_struct tuple
        tuple_struct map struct identifier ignored_any
    }
}

/// Sequence access over the tokens between a begin marker and its matching
/// end. The access itself never consumes the end marker: a visitor with a
/// fixed arity (tuple, struct) stops requesting elements early, so the
/// marker and the declared-count check are handled by [`SeqTokens::finish`]
/// after the visitor returns.
struct SeqTokens<'a, 'de> {
    de: &'a mut Deserializer<'de>,
    end: Code,
    expected: Option<usize>,
    seen: usize,
}

impl SeqTokens<'_, '_> {
    /// Consumes the end marker, verifying the declared count against the
    /// decoded count and rejecting elements the visitor left behind.
    fn finish(self) -> Result<()> {
        match self.de.reader.code() {
            Code::End => Err(Error::unexpected_end(
                self.de.reader.offset(),
                "an end marker",
            )),
            code if code.category() == Category::Error => self.de.latched(),
            code if code == self.end => {
                if let Some(expected) = self.expected {
                    if expected != self.seen {
                        return Err(Error::invalid_value(format!(
                            "declared count {} does not match decoded count {}",
                            expected, self.seen
                        )));
                    }
                }
                self.de.reader.next()?;
                Ok(())
            }
            code => Err(Error::unexpected_token(self.de.reader.offset(), code)),
        }
    }
}

impl<'b, 'a, 'de> de::SeqAccess<'de> for &'b mut SeqTokens<'a, 'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: DeserializeSeed<'de>,
    {
        let code = self.de.reader.code();
        if code == self.end {
            return Ok(None);
        }
        if code == Code::End {
            return Err(Error::unexpected_end(
                self.de.reader.offset(),
                "an element or end marker",
            ));
        }
        let value = seed.deserialize(&mut *self.de)?;
        self.seen += 1;
        Ok(Some(value))
    }

    fn size_hint(&self) -> Option<usize> {
        self.expected.map(|expected| expected - self.seen.min(expected))
    }
}

/// Map access over either framing: classic inline key/value tokens, or the
/// deprecated form with each pair wrapped in a record scope.
struct MapTokens<'a, 'de> {
    de: &'a mut Deserializer<'de>,
    expected: Option<usize>,
    seen: usize,
    record_wrapped: bool,
}

impl MapTokens<'_, '_> {
    fn end_code(&self) -> Code {
        if self.record_wrapped {
            Code::DeprecatedEndMap
        } else {
            Code::EndMap
        }
    }

    /// Consumes the end marker, verifying the declared count against the
    /// decoded count.
    fn finish(self) -> Result<()> {
        match self.de.reader.code() {
            Code::End => Err(Error::unexpected_end(
                self.de.reader.offset(),
                "an end marker",
            )),
            code if code.category() == Category::Error => self.de.latched(),
            code if code == self.end_code() => {
                if let Some(expected) = self.expected {
                    if expected != self.seen {
                        return Err(Error::invalid_value(format!(
                            "declared count {} does not match decoded count {}",
                            expected, self.seen
                        )));
                    }
                }
                self.de.reader.next()?;
                Ok(())
            }
            code => Err(Error::unexpected_token(self.de.reader.offset(), code)),
        }
    }
}

impl<'b, 'a, 'de> de::MapAccess<'de> for &'b mut MapTokens<'a, 'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: DeserializeSeed<'de>,
    {
        let code = self.de.reader.code();
        if code == self.end_code() {
            return Ok(None);
        }
        if code == Code::End {
            return Err(Error::unexpected_end(
                self.de.reader.offset(),
                "a key or end marker",
            ));
        }
        if self.record_wrapped {
            if code != Code::BeginRecord {
                return Err(Error::unexpected_token(self.de.reader.offset(), code));
            }
            self.de.reader.next()?;
        }
        seed.deserialize(&mut *self.de).map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: DeserializeSeed<'de>,
    {
        let value = seed.deserialize(&mut *self.de)?;
        if self.record_wrapped {
            if self.de.reader.code() != Code::EndRecord {
                return Err(Error::unexpected_token(
                    self.de.reader.offset(),
                    self.de.reader.code(),
                ));
            }
            self.de.reader.next()?;
        }
        self.seen += 1;
        Ok(value)
    }

    fn size_hint(&self) -> Option<usize> {
        self.expected.map(|expected| expected - self.seen.min(expected))
    }
}

/// Enum access: the variant name is a string token, the payload (if any)
/// follows as the map entry's value.
struct EnumTokens<'a, 'de> {
    de: &'a mut Deserializer<'de>,
}

impl<'de> de::EnumAccess<'de> for EnumTokens<'_, 'de> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(&mut *self.de)?;
        Ok((variant, self))
    }
}

impl<'de> de::VariantAccess<'de> for EnumTokens<'_, 'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Ok(())
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: DeserializeSeed<'de>,
    {
        seed.deserialize(self.de)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_any(self.de, visitor)
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_any(self.de, visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::opcode;
    use crate::{from_slice, TobValue};
    use serde::Deserialize;

    #[test]
    fn test_scalars() {
        assert_eq!(from_slice::<bool>(&[opcode::TRUE]).unwrap(), true);
        assert_eq!(from_slice::<i32>(&[0x05]).unwrap(), 5);
        assert_eq!(from_slice::<i32>(&[0xE0]).unwrap(), -32);
        assert_eq!(
            from_slice::<String>(&[opcode::STRING8, 0x02, b'A', b'B']).unwrap(),
            "AB"
        );
    }

    #[test]
    fn test_borrowed_str() {
        let bytes = [opcode::STRING8, 0x02, b'h', b'i'];
        let s: &str = from_slice(&bytes).unwrap();
        assert_eq!(s, "hi");
    }

    #[test]
    fn test_counted_array() {
        let bytes = [
            opcode::BEGIN_ARRAY,
            0x02,
            opcode::TRUE,
            opcode::FALSE,
            opcode::END_ARRAY,
        ];
        let values: Vec<bool> = from_slice(&bytes).unwrap();
        assert_eq!(values, vec![true, false]);
    }

    #[test]
    fn test_empty_array() {
        let bytes = [opcode::BEGIN_ARRAY, 0x00, opcode::END_ARRAY];
        let values: Vec<bool> = from_slice(&bytes).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_null_count_array() {
        let bytes = [
            opcode::BEGIN_ARRAY,
            opcode::NULL,
            0x01,
            0x02,
            opcode::END_ARRAY,
        ];
        let values: Vec<i32> = from_slice(&bytes).unwrap();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_count_mismatch() {
        let bytes = [opcode::BEGIN_ARRAY, 0x03, opcode::TRUE, opcode::END_ARRAY];
        let result: Result<Vec<bool>> = from_slice(&bytes);
        assert!(matches!(result, Err(Error::InvalidValue { .. })));
    }

    #[test]
    fn test_struct_from_record() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Point {
            x: i32,
            y: i32,
        }
        let bytes = [opcode::BEGIN_RECORD, 0x01, 0x02, opcode::END_RECORD];
        assert_eq!(from_slice::<Point>(&bytes).unwrap(), Point { x: 1, y: 2 });
    }

    #[test]
    fn test_map_framings_equivalent() {
        // {"alpha": null, "bravo": true} in classic framing
        let classic = [
            opcode::BEGIN_MAP,
            0x02,
            opcode::STRING8,
            0x05,
            b'a',
            b'l',
            b'p',
            b'h',
            b'a',
            opcode::NULL,
            opcode::STRING8,
            0x05,
            b'b',
            b'r',
            b'a',
            b'v',
            b'o',
            opcode::TRUE,
            opcode::END_MAP,
        ];
        // the same map with each pair wrapped in a record
        let deprecated = [
            opcode::DEPRECATED_BEGIN_MAP,
            0x02,
            opcode::BEGIN_RECORD,
            opcode::STRING8,
            0x05,
            b'a',
            b'l',
            b'p',
            b'h',
            b'a',
            opcode::NULL,
            opcode::END_RECORD,
            opcode::BEGIN_RECORD,
            opcode::STRING8,
            0x05,
            b'b',
            b'r',
            b'a',
            b'v',
            b'o',
            opcode::TRUE,
            opcode::END_RECORD,
            opcode::DEPRECATED_END_MAP,
        ];
        let a: TobValue = from_slice(&classic).unwrap();
        let b: TobValue = from_slice(&deprecated).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.size(), 2);
        assert_eq!(a["alpha"], TobValue::Null);
        assert_eq!(a["bravo"], TobValue::from(true));
    }

    #[test]
    fn test_compact_array_as_seq() {
        let bytes = [opcode::ARRAY_INT16, 0x04, 0x01, 0x00, 0xFF, 0xFF];
        let values: Vec<i16> = from_slice(&bytes).unwrap();
        assert_eq!(values, vec![1, -1]);
        // compact arrays also materialize into the dynamic value
        let value: TobValue = from_slice(&bytes).unwrap();
        assert!(value.is_array());
        assert_eq!(value.size(), 2);
    }

    #[test]
    fn test_narrowing_request_checks_overflow() {
        // int16 holding 256 does not fit an i8
        let result: Result<i8> = from_slice(&[opcode::INT16, 0x00, 0x01]);
        assert!(matches!(result, Err(Error::Overflow { .. })));
        // narrowing succeeds when the value fits
        assert_eq!(from_slice::<i8>(&[opcode::INT16, 0x05, 0x00]).unwrap(), 5);
        // signedness is part of the check
        let result: Result<u8> = from_slice(&[0xFF]);
        assert!(matches!(result, Err(Error::Overflow { .. })));
    }

    #[test]
    fn test_real_token_into_integer() {
        let mut bytes = vec![opcode::FLOAT64];
        bytes.extend_from_slice(&2.75f64.to_le_bytes());
        assert_eq!(from_slice::<i32>(&bytes).unwrap(), 2);
    }

    #[test]
    fn test_binary_token_into_byte_types() {
        let bytes = [opcode::BINARY8, 0x03, 1, 2, 3];
        let borrowed: &[u8] = from_slice(&bytes).unwrap();
        assert_eq!(borrowed, &[1, 2, 3]);
        let owned: Vec<u8> = from_slice(&bytes).unwrap();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[test]
    fn test_option() {
        assert_eq!(from_slice::<Option<i32>>(&[opcode::NULL]).unwrap(), None);
        assert_eq!(from_slice::<Option<i32>>(&[0x07]).unwrap(), Some(7));
    }

    #[test]
    fn test_trailing_input_rejected() {
        let result: Result<bool> = from_slice(&[opcode::TRUE, opcode::FALSE]);
        assert!(matches!(result, Err(Error::UnexpectedToken { .. })));
    }

    #[test]
    fn test_premature_end_in_container() {
        let bytes = [opcode::BEGIN_ARRAY, 0x02, opcode::TRUE];
        let result: Result<Vec<bool>> = from_slice(&bytes);
        assert!(matches!(result, Err(Error::UnexpectedEnd { .. })));
    }

    #[test]
    fn test_stray_end_marker() {
        let result: Result<TobValue> = from_slice(&[opcode::END_ARRAY]);
        assert!(matches!(result, Err(Error::UnexpectedToken { .. })));
    }

    #[test]
    fn test_unknown_byte() {
        let result: Result<TobValue> = from_slice(&[0xDD]);
        assert!(matches!(result, Err(Error::UnknownToken { byte: 0xDD, .. })));
    }

    #[test]
    fn test_enum_roundtrip() {
        #[derive(serde::Serialize, Deserialize, Debug, PartialEq)]
        enum Shape {
            Empty,
            Circle(f64),
            Rect { w: i32, h: i32 },
        }
        for shape in [
            Shape::Empty,
            Shape::Circle(1.5),
            Shape::Rect { w: 3, h: 4 },
        ] {
            let bytes = crate::to_vec(&shape).unwrap();
            assert_eq!(from_slice::<Shape>(&bytes).unwrap(), shape);
        }
    }

    #[test]
    fn test_nested_value_tree() {
        let bytes = [
            opcode::BEGIN_ARRAY,
            0x02,
            opcode::BEGIN_ARRAY,
            0x01,
            0x2A,
            opcode::END_ARRAY,
            opcode::NULL,
            opcode::END_ARRAY,
        ];
        let value: TobValue = from_slice(&bytes).unwrap();
        assert!(value.is_array());
        assert_eq!(value.size(), 2);
        assert_eq!(value[0][0], TobValue::from(42));
        assert_eq!(value[1], TobValue::Null);
    }
}
