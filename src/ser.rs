//! Serialize Rust data structures into TOB bytes.
//!
//! [`Serializer`] drives a [`Writer`] from any [`serde::Serialize`] type:
//! sequences become counted array scopes, tuples and structs become
//! sentinel-terminated record scopes, and maps become associative-array
//! scopes with alternating key/value tokens. [`TobValueSerializer`] is the
//! in-memory counterpart, turning any serializable type into a
//! [`TobValue`] tree without touching the wire.
//!
//! Most callers use the crate-root functions
//! [`to_vec`](crate::to_vec) / [`to_value`](crate::to_value) instead of
//! these types directly.

use crate::error::{Error, Result};
use crate::map::TobMap;
use crate::value::{is_wide_text_name, Int, Real, TobValue};
use crate::writer::Writer;
use serde::ser::{self, Serialize};

/// A serde serializer emitting TOB tokens through a [`Writer`].
#[derive(Debug, Default)]
pub struct Serializer {
    writer: Writer,
}

impl Serializer {
    /// Creates a serializer with an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Serializer {
            writer: Writer::new(),
        }
    }

    /// Consumes the serializer and returns the encoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.writer.as_bytes()
    }

    /// Opens the single-entry map that frames an enum variant.
    fn begin_variant(&mut self, variant: &'static str) {
        self.writer.begin_map();
        self.writer.integer(1);
        self.writer.string(variant);
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqScope<'a>;
    type SerializeTuple = RecordScope<'a>;
    type SerializeTupleStruct = RecordScope<'a>;
    type SerializeTupleVariant = VariantScope<'a>;
    type SerializeMap = MapScope<'a>;
    type SerializeStruct = RecordScope<'a>;
    type SerializeStructVariant = VariantScope<'a>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.writer.boolean(v);
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.writer.integer(v as i64);
        Ok(())
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.writer.integer(v as i64);
        Ok(())
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.writer.integer(v as i64);
        Ok(())
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.writer.integer(v);
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.writer.integer(v as i64);
        Ok(())
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.writer.integer(v as i64);
        Ok(())
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.writer.integer(v as i64);
        Ok(())
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.writer.unsigned(v)
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.writer.float32(v);
        Ok(())
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.writer.float64(v);
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<()> {
        let mut buffer = [0u8; 4];
        self.writer.string(v.encode_utf8(&mut buffer));
        Ok(())
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.writer.string(v);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.writer.binary(v);
        Ok(())
    }

    fn serialize_none(self) -> Result<()> {
        self.writer.null();
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.writer.null();
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if is_wide_text_name(name) {
            // a bridge error here is a failed wide-string conversion
            return value.serialize(&mut *self).map_err(|err| match err {
                Error::Message(msg) => Error::invalid_value(msg),
                other => other,
            });
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.begin_variant(variant);
        value.serialize(&mut *self)?;
        self.writer.end_map()
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.writer.begin_array();
        match len {
            Some(len) => self.writer.unsigned(len as u64)?,
            None => self.writer.null(),
        }
        Ok(SeqScope { ser: self })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        self.writer.begin_record();
        Ok(RecordScope { ser: self })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.writer.begin_record();
        Ok(RecordScope { ser: self })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.begin_variant(variant);
        self.writer.begin_record();
        Ok(VariantScope { ser: self })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        self.writer.begin_map();
        match len {
            Some(len) => self.writer.unsigned(len as u64)?,
            None => self.writer.null(),
        }
        Ok(MapScope { ser: self })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        // structs use positional record framing; field names are not encoded
        self.writer.begin_record();
        Ok(RecordScope { ser: self })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.begin_variant(variant);
        self.writer.begin_record();
        Ok(VariantScope { ser: self })
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

/// Open array scope with a leading element count.
pub struct SeqScope<'a> {
    ser: &'a mut Serializer,
}

impl ser::SerializeSeq for SeqScope<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.end_array()
    }
}

/// Open record scope; sentinel-terminated, no count.
pub struct RecordScope<'a> {
    ser: &'a mut Serializer,
}

impl ser::SerializeTuple for RecordScope<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.end_record()
    }
}

impl ser::SerializeTupleStruct for RecordScope<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.end_record()
    }
}

impl ser::SerializeStruct for RecordScope<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.end_record()
    }
}

/// Open associative-array scope with a leading pair count.
pub struct MapScope<'a> {
    ser: &'a mut Serializer,
}

impl ser::SerializeMap for MapScope<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        key.serialize(&mut *self.ser)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.end_map()
    }
}

/// Open record scope nested inside a variant map.
pub struct VariantScope<'a> {
    ser: &'a mut Serializer,
}

impl ser::SerializeTupleVariant for VariantScope<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.end_record()?;
        self.ser.writer.end_map()
    }
}

impl ser::SerializeStructVariant for VariantScope<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.end_record()?;
        self.ser.writer.end_map()
    }
}

/// A serde serializer producing a [`TobValue`] tree in memory.
///
/// Unlike the wire serializer, structs become maps keyed by field name, so
/// the resulting value is self-describing. Used by
/// [`to_value`](crate::to_value).
#[derive(Debug, Default, Clone, Copy)]
pub struct TobValueSerializer;

impl ser::Serializer for TobValueSerializer {
    type Ok = TobValue;
    type Error = Error;

    type SerializeSeq = ValueSeq;
    type SerializeTuple = ValueSeq;
    type SerializeTupleStruct = ValueSeq;
    type SerializeTupleVariant = ValueVariantSeq;
    type SerializeMap = ValueMap;
    type SerializeStruct = ValueStruct;
    type SerializeStructVariant = ValueVariantStruct;

    fn serialize_bool(self, v: bool) -> Result<TobValue> {
        Ok(TobValue::Boolean(v))
    }

    fn serialize_i8(self, v: i8) -> Result<TobValue> {
        Ok(TobValue::Integer(Int::I8(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<TobValue> {
        Ok(TobValue::Integer(Int::I16(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<TobValue> {
        Ok(TobValue::Integer(Int::I32(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<TobValue> {
        Ok(TobValue::Integer(Int::I64(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<TobValue> {
        Ok(TobValue::Integer(Int::U8(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<TobValue> {
        Ok(TobValue::Integer(Int::U16(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<TobValue> {
        Ok(TobValue::Integer(Int::U32(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<TobValue> {
        Ok(TobValue::Integer(Int::U64(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<TobValue> {
        Ok(TobValue::Real(Real::F32(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<TobValue> {
        Ok(TobValue::Real(Real::F64(v)))
    }

    fn serialize_char(self, v: char) -> Result<TobValue> {
        Ok(TobValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<TobValue> {
        Ok(TobValue::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<TobValue> {
        Ok(TobValue::Array(
            v.iter().map(|&b| TobValue::from(b)).collect(),
        ))
    }

    fn serialize_none(self) -> Result<TobValue> {
        Ok(TobValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<TobValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<TobValue> {
        Ok(TobValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<TobValue> {
        Ok(TobValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<TobValue> {
        Ok(TobValue::from(variant))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<TobValue>
    where
        T: ?Sized + Serialize,
    {
        if is_wide_text_name(name) {
            // a bridge error here is a failed wide-string conversion
            return value.serialize(self).map_err(|err| match err {
                Error::Message(msg) => Error::invalid_value(msg),
                other => other,
            });
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<TobValue>
    where
        T: ?Sized + Serialize,
    {
        let mut map = TobMap::new();
        map.insert(TobValue::from(variant), value.serialize(self)?);
        Ok(TobValue::Map(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(ValueSeq {
            elements: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(ValueVariantSeq {
            variant,
            elements: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(ValueMap {
            map: TobMap::new(),
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(ValueStruct { map: TobMap::new() })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(ValueVariantStruct {
            variant,
            map: TobMap::new(),
        })
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

pub struct ValueSeq {
    elements: Vec<TobValue>,
}

impl ser::SerializeSeq for ValueSeq {
    type Ok = TobValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.elements.push(value.serialize(TobValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<TobValue> {
        Ok(TobValue::Array(self.elements))
    }
}

impl ser::SerializeTuple for ValueSeq {
    type Ok = TobValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<TobValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for ValueSeq {
    type Ok = TobValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<TobValue> {
        ser::SerializeSeq::end(self)
    }
}

pub struct ValueVariantSeq {
    variant: &'static str,
    elements: Vec<TobValue>,
}

impl ser::SerializeTupleVariant for ValueVariantSeq {
    type Ok = TobValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.elements.push(value.serialize(TobValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<TobValue> {
        let mut map = TobMap::new();
        map.insert(TobValue::from(self.variant), TobValue::Array(self.elements));
        Ok(TobValue::Map(map))
    }
}

pub struct ValueMap {
    map: TobMap,
    pending_key: Option<TobValue>,
}

impl ser::SerializeMap for ValueMap {
    type Ok = TobValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(key.serialize(TobValueSerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called before serialize_key"))?;
        self.map.insert(key, value.serialize(TobValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<TobValue> {
        Ok(TobValue::Map(self.map))
    }
}

pub struct ValueStruct {
    map: TobMap,
}

impl ser::SerializeStruct for ValueStruct {
    type Ok = TobValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map
            .insert(TobValue::from(key), value.serialize(TobValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<TobValue> {
        Ok(TobValue::Map(self.map))
    }
}

pub struct ValueVariantStruct {
    variant: &'static str,
    map: TobMap,
}

impl ser::SerializeStructVariant for ValueVariantStruct {
    type Ok = TobValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map
            .insert(TobValue::from(key), value.serialize(TobValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<TobValue> {
        let mut map = TobMap::new();
        map.insert(TobValue::from(self.variant), TobValue::Map(self.map));
        Ok(TobValue::Map(map))
    }
}
