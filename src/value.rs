//! Dynamic value representation for TOB data.
//!
//! This module provides the [`TobValue`] enum, a closed tagged union over
//! every value the TOB protocol can represent: null, boolean, integers of
//! eight exact widths, reals of two widths, four string kinds, arrays, and
//! ordered maps keyed by values.
//!
//! ## Two query layers
//!
//! The stored type is tracked exactly: a value built from an `i8` remembers
//! that it is an `i8`, not merely "an integer". Two query layers expose
//! this:
//!
//! - [`TobValue::is`] matches the *logical* category: every integer width
//!   satisfies `is::<i64>()`, `is::<u8>()`, and so on.
//! - [`TobValue::same`] matches the *exact* stored type only.
//!
//! ```rust
//! use serde_tob::TobValue;
//!
//! let value = TobValue::from(1i8);
//! assert!(value.is::<i32>());
//! assert!(!value.same::<i32>());
//! assert!(value.same::<i8>());
//! ```
//!
//! ## Extracting values
//!
//! [`TobValue::value`] converts the payload to a requested type following
//! the same numeric promotion rules as the token reader: widening always
//! succeeds, narrowing succeeds when the value fits, reals truncate toward
//! zero for integer requests, and cross-category requests fail.
//!
//! ```rust
//! use serde_tob::{Error, TobValue};
//!
//! let value = TobValue::from(256i16);
//! assert_eq!(value.value::<i32>().unwrap(), 256);
//! assert_eq!(value.value::<f32>().unwrap(), 256.0);
//! assert!(matches!(value.value::<i8>(), Err(Error::Overflow { .. })));
//! ```

use crate::error::{Error, Result};
use crate::map::TobMap;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::btree_map;
use std::fmt;
use std::ops;
use std::slice;

/// Exact stored-type discriminant: one code per fundamental width and
/// signedness, per string kind, and per container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    Null,
    Boolean,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    WString,
    U16String,
    U32String,
    Array,
    Map,
}

/// Logical category discriminant: all integer widths collapse to
/// [`Symbol::Integer`] and both real widths to [`Symbol::Real`]. The four
/// string kinds stay distinct — they never compare equal to one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Null,
    Boolean,
    Integer,
    Real,
    String,
    WString,
    U16String,
    U32String,
    Array,
    Map,
}

impl Code {
    /// Returns the logical category for this exact code.
    #[must_use]
    pub const fn symbol(self) -> Symbol {
        match self {
            Code::Null => Symbol::Null,
            Code::Boolean => Symbol::Boolean,
            Code::I8
            | Code::I16
            | Code::I32
            | Code::I64
            | Code::U8
            | Code::U16
            | Code::U32
            | Code::U64 => Symbol::Integer,
            Code::F32 | Code::F64 => Symbol::Real,
            Code::String => Symbol::String,
            Code::WString => Symbol::WString,
            Code::U16String => Symbol::U16String,
            Code::U32String => Symbol::U32String,
            Code::Array => Symbol::Array,
            Code::Map => Symbol::Map,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Code::Null => "null",
            Code::Boolean => "boolean",
            Code::I8 => "i8",
            Code::I16 => "i16",
            Code::I32 => "i32",
            Code::I64 => "i64",
            Code::U8 => "u8",
            Code::U16 => "u16",
            Code::U32 => "u32",
            Code::U64 => "u64",
            Code::F32 => "f32",
            Code::F64 => "f64",
            Code::String => "string",
            Code::WString => "wstring",
            Code::U16String => "u16string",
            Code::U32String => "u32string",
            Code::Array => "array",
            Code::Map => "map",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symbol::Null => "null",
            Symbol::Boolean => "boolean",
            Symbol::Integer => "integer",
            Symbol::Real => "real",
            Symbol::String => "string",
            Symbol::WString => "wstring",
            Symbol::U16String => "u16string",
            Symbol::U32String => "u32string",
            Symbol::Array => "array",
            Symbol::Map => "map",
        };
        f.write_str(name)
    }
}

/// An integer payload with its exact width and signedness preserved.
#[derive(Debug, Clone, Copy)]
pub enum Int {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

impl Int {
    /// The exact type code for this width.
    #[must_use]
    pub const fn code(self) -> Code {
        match self {
            Int::I8(_) => Code::I8,
            Int::I16(_) => Code::I16,
            Int::I32(_) => Code::I32,
            Int::I64(_) => Code::I64,
            Int::U8(_) => Code::U8,
            Int::U16(_) => Code::U16,
            Int::U32(_) => Code::U32,
            Int::U64(_) => Code::U64,
        }
    }

    /// The stored value, widened losslessly.
    #[must_use]
    pub const fn as_i128(self) -> i128 {
        match self {
            Int::I8(v) => v as i128,
            Int::I16(v) => v as i128,
            Int::I32(v) => v as i128,
            Int::I64(v) => v as i128,
            Int::U8(v) => v as i128,
            Int::U16(v) => v as i128,
            Int::U32(v) => v as i128,
            Int::U64(v) => v as i128,
        }
    }

    /// The stored value as a real number (nearest representable).
    #[must_use]
    pub fn as_f64(self) -> f64 {
        self.as_i128() as f64
    }

    /// Zero in the same width.
    #[must_use]
    pub const fn zeroed(self) -> Int {
        match self {
            Int::I8(_) => Int::I8(0),
            Int::I16(_) => Int::I16(0),
            Int::I32(_) => Int::I32(0),
            Int::I64(_) => Int::I64(0),
            Int::U8(_) => Int::U8(0),
            Int::U16(_) => Int::U16(0),
            Int::U32(_) => Int::U32(0),
            Int::U64(_) => Int::U64(0),
        }
    }

    /// The given value narrowed back into this width.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Overflow`] if `value` does not fit.
    pub fn with_value(self, value: i128) -> Result<Int> {
        Ok(match self {
            Int::I8(_) => Int::I8(convert::int_to(value, "i8")?),
            Int::I16(_) => Int::I16(convert::int_to(value, "i16")?),
            Int::I32(_) => Int::I32(convert::int_to(value, "i32")?),
            Int::I64(_) => Int::I64(convert::int_to(value, "i64")?),
            Int::U8(_) => Int::U8(convert::int_to(value, "u8")?),
            Int::U16(_) => Int::U16(convert::int_to(value, "u16")?),
            Int::U32(_) => Int::U32(convert::int_to(value, "u32")?),
            Int::U64(_) => Int::U64(convert::int_to(value, "u64")?),
        })
    }
}

/// A real payload with its exact width preserved.
#[derive(Debug, Clone, Copy)]
pub enum Real {
    F32(f32),
    F64(f64),
}

impl Real {
    /// The exact type code for this width.
    #[must_use]
    pub const fn code(self) -> Code {
        match self {
            Real::F32(_) => Code::F32,
            Real::F64(_) => Code::F64,
        }
    }

    /// The stored value widened to `f64`.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Real::F32(v) => v as f64,
            Real::F64(v) => v,
        }
    }

    /// Zero in the same width.
    #[must_use]
    pub const fn zeroed(self) -> Real {
        match self {
            Real::F32(_) => Real::F32(0.0),
            Real::F64(_) => Real::F64(0.0),
        }
    }

    /// The given value in this width (may round for `f32`).
    #[must_use]
    pub const fn with_value(self, value: f64) -> Real {
        match self {
            Real::F32(_) => Real::F32(value as f32),
            Real::F64(_) => Real::F64(value),
        }
    }
}

/// A dynamically-typed representation of any TOB value.
///
/// Exactly one payload is active at a time. The default value is
/// [`TobValue::Null`]; assignment and [`TobValue::append`] may change the
/// tag, while [`TobValue::clear`] resets the payload and never changes it.
///
/// Cross-tag comparison is always defined and never fails: null orders
/// before everything else, booleans/integers/reals compare by numeric value
/// across tags (`true == 1 == 1.0`), strings compare equal only within the
/// same string kind, and containers compare lexicographically.
///
/// # Examples
///
/// ```rust
/// use serde_tob::TobValue;
///
/// let mut data = TobValue::Null;
/// data["alpha"] = TobValue::from(true); // auto-vivifies a map
/// assert!(data.is_map());
/// assert_eq!(data["alpha"], TobValue::from(1)); // true == 1
/// ```
#[derive(Debug, Clone, Default)]
pub enum TobValue {
    #[default]
    Null,
    Boolean(bool),
    Integer(Int),
    Real(Real),
    String(String),
    WString(Vec<char>),
    U16String(Vec<u16>),
    U32String(Vec<u32>),
    Array(Vec<TobValue>),
    Map(TobMap),
}

/// Numeric conversion helpers shared by the value type and the token reader.
pub(crate) mod convert {
    use crate::error::{Error, Result};

    /// Narrows or widens an integer, failing with `Overflow` when the value
    /// does not fit the target.
    pub(crate) fn int_to<T: TryFrom<i128>>(value: i128, target: &'static str) -> Result<T> {
        T::try_from(value).map_err(|_| Error::overflow(target))
    }

    /// Converts a real to an integer by truncation toward zero.
    pub(crate) fn real_to_int<T: TryFrom<i128>>(value: f64, target: &'static str) -> Result<T> {
        if !value.is_finite() {
            return Err(Error::overflow(target));
        }
        // the saturating cast turns out-of-range values into i128 bounds,
        // which then fail the narrowing below
        int_to(value.trunc() as i128, target)
    }
}

mod sealed {
    use super::TobValue;
    use crate::map::TobMap;

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
    impl Sealed for Vec<char> {}
    impl Sealed for Vec<u16> {}
    impl Sealed for Vec<u32> {}
    impl Sealed for Vec<TobValue> {}
    impl Sealed for TobMap {}
}

/// Rust types with an exact [`Code`] in the TOB type system. Sealed;
/// implemented for the payload types a [`TobValue`] can store.
pub trait TypedValue: sealed::Sealed {
    #[doc(hidden)]
    const CODE: Code;
}

macro_rules! impl_typed_value {
    ($($t:ty => $code:ident),* $(,)?) => {$(
        impl TypedValue for $t {
            const CODE: Code = Code::$code;
        }
    )*};
}

impl_typed_value! {
    bool => Boolean,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<char> => WString,
    Vec<u16> => U16String,
    Vec<u32> => U32String,
    Vec<TobValue> => Array,
    TobMap => Map,
}

impl TobValue {
    /// The exact stored-type code.
    #[must_use]
    pub fn code(&self) -> Code {
        match self {
            TobValue::Null => Code::Null,
            TobValue::Boolean(_) => Code::Boolean,
            TobValue::Integer(int) => int.code(),
            TobValue::Real(real) => real.code(),
            TobValue::String(_) => Code::String,
            TobValue::WString(_) => Code::WString,
            TobValue::U16String(_) => Code::U16String,
            TobValue::U32String(_) => Code::U32String,
            TobValue::Array(_) => Code::Array,
            TobValue::Map(_) => Code::Map,
        }
    }

    /// The logical category of the stored value.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.code().symbol()
    }

    /// Returns `true` if `T`'s logical category matches the current tag.
    ///
    /// Every integer width satisfies `is` for every other integer width;
    /// use [`TobValue::same`] for an exact-type test.
    #[must_use]
    pub fn is<T: TypedValue>(&self) -> bool {
        self.symbol() == T::CODE.symbol()
    }

    /// Returns `true` only if `T` is the exact stored type.
    #[must_use]
    pub fn same<T: TypedValue>(&self) -> bool {
        self.code() == T::CODE
    }

    /// Returns `true` if the value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, TobValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, TobValue::Boolean(_))
    }

    /// Returns `true` if the value is an integer of any width.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, TobValue::Integer(_))
    }

    /// Returns `true` if the value is a real of any width.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, TobValue::Real(_))
    }

    /// Returns `true` if the value is a narrow (UTF-8) string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, TobValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, TobValue::Array(_))
    }

    /// Returns `true` if the value is a map.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, TobValue::Map(_))
    }

    /// If the value is a boolean, returns it.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TobValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer that fits `i64`, returns it.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TobValue::Integer(int) => i64::try_from(int.as_i128()).ok(),
            _ => None,
        }
    }

    /// If the value is an integer or real, returns it as `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TobValue::Integer(int) => Some(int.as_f64()),
            TobValue::Real(real) => Some(real.as_f64()),
            _ => None,
        }
    }

    /// If the value is a narrow string, returns a reference to it.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TobValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to its elements.
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<TobValue>> {
        match self {
            TobValue::Array(values) => Some(values),
            _ => None,
        }
    }

    /// If the value is an array, returns a mutable reference to its elements.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<TobValue>> {
        match self {
            TobValue::Array(values) => Some(values),
            _ => None,
        }
    }

    /// If the value is a map, returns a reference to it.
    #[must_use]
    pub fn as_map(&self) -> Option<&TobMap> {
        match self {
            TobValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// If the value is a map, returns a mutable reference to it.
    pub fn as_map_mut(&mut self) -> Option<&mut TobMap> {
        match self {
            TobValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Converts the payload to the requested type.
    ///
    /// Numeric tags follow the cross-type promotion rules (widening always
    /// succeeds; narrowing succeeds when the value fits, else
    /// [`Error::Overflow`]; reals truncate toward zero for integer
    /// requests). Non-numeric tags require an exact category match, else
    /// [`Error::IncompatibleType`]. A failed conversion leaves the value
    /// unmodified and usable.
    pub fn value<T>(&self) -> Result<T>
    where
        T: for<'a> TryFrom<&'a TobValue, Error = Error>,
    {
        T::try_from(self)
    }

    /// Unchecked accessor: the exact-type counterpart of [`TobValue::value`].
    ///
    /// # Panics
    ///
    /// Panics unless [`TobValue::same`]`::<T>()` holds. Callers must have
    /// verified the tag beforehand; this is the only accessor that does not
    /// report a recoverable error.
    #[must_use]
    pub fn assume<T>(&self) -> T
    where
        T: TypedValue + for<'a> TryFrom<&'a TobValue, Error = Error>,
    {
        assert!(
            self.same::<T>(),
            "assume called on {} value",
            self.code()
        );
        match T::try_from(self) {
            Ok(value) => value,
            Err(_) => unreachable!("exact tag conversion cannot fail"),
        }
    }

    /// Number of elements: 0 for null, 1 for every scalar and string kind
    /// (a string is one atomic element, not a character sequence), the
    /// container length for arrays and maps.
    ///
    /// `size()` always equals `iter().count()`.
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            TobValue::Null => 0,
            TobValue::Array(values) => values.len(),
            TobValue::Map(map) => map.len(),
            _ => 1,
        }
    }

    /// Returns `true` if [`TobValue::size`] is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Resets the payload to the default value for the current tag. The tag
    /// itself never changes: clearing a map empties it but it remains a map.
    pub fn clear(&mut self) {
        match self {
            TobValue::Null => {}
            TobValue::Boolean(b) => *b = false,
            TobValue::Integer(int) => *int = int.zeroed(),
            TobValue::Real(real) => *real = real.zeroed(),
            TobValue::String(s) => s.clear(),
            TobValue::WString(v) => v.clear(),
            TobValue::U16String(v) => v.clear(),
            TobValue::U32String(v) => v.clear(),
            TobValue::Array(values) => values.clear(),
            TobValue::Map(map) => map.clear(),
        }
    }

    /// Inserts an element.
    ///
    /// Null promotes to an array first; arrays append; maps require the
    /// element to decompose into a 2-element key/value pair.
    ///
    /// # Errors
    ///
    /// [`Error::IncompatibleType`] on scalar and string tags, or when a map
    /// insert is given anything but a 2-element pair. A failed insert leaves
    /// the value unmodified.
    pub fn insert(&mut self, value: TobValue) -> Result<()> {
        match self {
            TobValue::Null => {
                *self = TobValue::Array(vec![value]);
                Ok(())
            }
            TobValue::Array(values) => {
                values.push(value);
                Ok(())
            }
            TobValue::Map(map) => {
                let (key, val) = into_pair(value)?;
                map.insert(key, val);
                Ok(())
            }
            other => Err(Error::incompatible_type("array or map", other.symbol())),
        }
    }

    /// Inserts an element at a position. Position is honored for arrays and
    /// ignored for maps (which are key-ordered).
    ///
    /// # Errors
    ///
    /// [`Error::InvalidValue`] if `index` is past the end of an array, and
    /// the same tag errors as [`TobValue::insert`].
    pub fn insert_at(&mut self, index: usize, value: TobValue) -> Result<()> {
        match self {
            TobValue::Null => {
                if index != 0 {
                    return Err(Error::invalid_value("insert position past the end"));
                }
                *self = TobValue::Array(vec![value]);
                Ok(())
            }
            TobValue::Array(values) => {
                if index > values.len() {
                    return Err(Error::invalid_value("insert position past the end"));
                }
                values.insert(index, value);
                Ok(())
            }
            TobValue::Map(map) => {
                let (key, val) = into_pair(value)?;
                map.insert(key, val);
                Ok(())
            }
            other => Err(Error::incompatible_type("array or map", other.symbol())),
        }
    }

    /// Removes the element at `position` (array index, or the n-th key in
    /// key order for maps), returning it. A no-op returning `None` on null,
    /// scalar, and string tags, or when the position is out of range.
    pub fn erase(&mut self, position: usize) -> Option<TobValue> {
        match self {
            TobValue::Array(values) => {
                if position < values.len() {
                    Some(values.remove(position))
                } else {
                    None
                }
            }
            TobValue::Map(map) => {
                let key = map.keys().nth(position).cloned()?;
                map.remove(&key)
            }
            _ => None,
        }
    }

    /// Removes a map entry by key, returning its value. `None` on any other
    /// tag or when the key is absent.
    pub fn erase_key(&mut self, key: &TobValue) -> Option<TobValue> {
        match self {
            TobValue::Map(map) => map.remove(key),
            _ => None,
        }
    }

    /// Exchanges the full tagged state of two values in O(1). Never fails.
    pub fn swap(&mut self, other: &mut TobValue) {
        std::mem::swap(self, other);
    }

    /// Iterates the elements of this value: no elements for null, the
    /// single scalar self for scalar and string tags, element values for
    /// arrays, and *values* (not key/value pairs) for maps. Use
    /// [`TobValue::keys`] for map keys.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter(match self {
            TobValue::Null => IterInner::Scalar(None),
            TobValue::Array(values) => IterInner::Array(values.iter()),
            TobValue::Map(map) => IterInner::Map(map.values()),
            scalar => IterInner::Scalar(Some(scalar)),
        })
    }

    /// Mutable counterpart of [`TobValue::iter`]. Map keys are not reachable
    /// this way; only values can be mutated in place.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut(match self {
            TobValue::Null => IterMutInner::Scalar(None),
            TobValue::Array(values) => IterMutInner::Array(values.iter_mut()),
            TobValue::Map(map) => IterMutInner::Map(map.values_mut()),
            scalar => IterMutInner::Scalar(Some(scalar)),
        })
    }

    /// Iterates map keys in key order; empty for every other tag.
    #[must_use]
    pub fn keys(&self) -> Keys<'_> {
        Keys(match self {
            TobValue::Map(map) => KeysInner::Map(map.keys()),
            _ => KeysInner::Empty,
        })
    }

    /// Position of the first element equal to `needle` under the cross-tag
    /// equality rules, in iteration order.
    #[must_use]
    pub fn find(&self, needle: &TobValue) -> Option<usize> {
        self.iter().position(|value| value == needle)
    }

    /// Position of the first map key equal to `key`, in key order.
    #[must_use]
    pub fn find_key(&self, key: &TobValue) -> Option<usize> {
        self.keys().position(|k| k == key)
    }

    /// Appends `rhs` according to the type-compatibility matrix:
    ///
    /// | lhs \ rhs  | null | boolean | integer | real | string | wstring | u16string | u32string | array  | map    |
    /// |------------|------|---------|---------|------|--------|---------|-----------|-----------|--------|--------|
    /// | null       | keep | adopt   | adopt   | adopt| adopt  | adopt   | adopt     | adopt     | adopt  | adopt  |
    /// | boolean    | keep | add     | add     | add  | —      | —       | —         | —         | —      | —      |
    /// | integer    | keep | add     | add     | add  | —      | —       | —         | —         | —      | —      |
    /// | real       | keep | add     | add     | add  | —      | —       | —         | —         | —      | —      |
    /// | string     | keep | —       | —       | —    | concat | —       | —         | —         | —      | —      |
    /// | wstring    | keep | —       | —       | —    | —      | concat  | —         | —         | —      | —      |
    /// | u16string  | keep | —       | —       | —    | —      | —       | concat    | —         | —      | —      |
    /// | u32string  | keep | —       | —       | —    | —      | —       | —         | concat    | —      | —      |
    /// | array      | keep | push    | push    | push | push   | push    | push      | push      | concat | push   |
    /// | map        | keep | —       | —       | —    | —      | —       | —         | —         | —      | merge  |
    ///
    /// "—" fails with [`Error::IncompatibleType`]. Numeric addition keeps
    /// the left-hand tag and width (integer overflow fails with
    /// [`Error::Overflow`]); map merge lets the right-hand side overwrite on
    /// key conflict. A failed append leaves the receiver unmodified.
    pub fn append(&mut self, rhs: &TobValue) -> Result<()> {
        if rhs.is_null() {
            return Ok(());
        }
        match self {
            TobValue::Null => {
                *self = rhs.clone();
                Ok(())
            }
            TobValue::Boolean(lhs) => {
                let sum = numeric_sum(*lhs as i64 as f64, rhs)?;
                *lhs = sum != 0.0;
                Ok(())
            }
            TobValue::Integer(lhs) => match rhs {
                TobValue::Boolean(b) => {
                    let sum = lhs
                        .as_i128()
                        .checked_add(*b as i128)
                        .ok_or_else(|| Error::overflow(lhs.code()))?;
                    *lhs = lhs.with_value(sum)?;
                    Ok(())
                }
                TobValue::Integer(b) => {
                    let sum = lhs
                        .as_i128()
                        .checked_add(b.as_i128())
                        .ok_or_else(|| Error::overflow(lhs.code()))?;
                    *lhs = lhs.with_value(sum)?;
                    Ok(())
                }
                TobValue::Real(b) => {
                    let sum = lhs.as_f64() + b.as_f64();
                    let narrowed = if sum.is_finite() {
                        lhs.with_value(sum.trunc() as i128)?
                    } else {
                        return Err(Error::overflow(lhs.code()));
                    };
                    *lhs = narrowed;
                    Ok(())
                }
                other => Err(Error::incompatible_type("numeric", other.symbol())),
            },
            TobValue::Real(lhs) => {
                let sum = numeric_sum(lhs.as_f64(), rhs)?;
                *lhs = lhs.with_value(sum);
                Ok(())
            }
            TobValue::String(lhs) => match rhs {
                TobValue::String(b) => {
                    lhs.push_str(b);
                    Ok(())
                }
                other => Err(Error::incompatible_type("string", other.symbol())),
            },
            TobValue::WString(lhs) => match rhs {
                TobValue::WString(b) => {
                    lhs.extend_from_slice(b);
                    Ok(())
                }
                other => Err(Error::incompatible_type("wstring", other.symbol())),
            },
            TobValue::U16String(lhs) => match rhs {
                TobValue::U16String(b) => {
                    lhs.extend_from_slice(b);
                    Ok(())
                }
                other => Err(Error::incompatible_type("u16string", other.symbol())),
            },
            TobValue::U32String(lhs) => match rhs {
                TobValue::U32String(b) => {
                    lhs.extend_from_slice(b);
                    Ok(())
                }
                other => Err(Error::incompatible_type("u32string", other.symbol())),
            },
            TobValue::Array(lhs) => match rhs {
                TobValue::Array(b) => {
                    lhs.extend(b.iter().cloned());
                    Ok(())
                }
                other => {
                    lhs.push(other.clone());
                    Ok(())
                }
            },
            TobValue::Map(lhs) => match rhs {
                TobValue::Map(b) => {
                    for (key, value) in b.iter() {
                        lhs.insert(key.clone(), value.clone());
                    }
                    Ok(())
                }
                other => Err(Error::incompatible_type("map", other.symbol())),
            },
        }
    }

    /// Non-mutating addition: copies the left operand, applies
    /// [`TobValue::append`] with the right, and returns the copy. Neither
    /// input is modified.
    pub fn added(&self, rhs: &TobValue) -> Result<TobValue> {
        let mut out = self.clone();
        out.append(rhs)?;
        Ok(out)
    }

    /// Builds a value from a flat element sequence, applying the pair
    /// heuristic: if every element is itself a 2-element array, the whole
    /// sequence becomes a map of those pairs, otherwise it becomes an array.
    ///
    /// The heuristic makes a flat array whose elements all happen to be
    /// 2-element arrays indistinguishable from a map literal; such inputs
    /// are always interpreted as a map. Construct with
    /// `TobValue::Array(...)` directly to force an array of pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tob::TobValue;
    ///
    /// let pairs = vec![
    ///     TobValue::Array(vec![TobValue::from("a"), TobValue::from(1)]),
    ///     TobValue::Array(vec![TobValue::from("b"), TobValue::from(2)]),
    /// ];
    /// let value = TobValue::from_elements(pairs);
    /// assert!(value.is_map());
    /// ```
    #[must_use]
    pub fn from_elements(elements: Vec<TobValue>) -> TobValue {
        let pair_shaped = !elements.is_empty()
            && elements
                .iter()
                .all(|e| matches!(e, TobValue::Array(pair) if pair.len() == 2));
        if pair_shaped {
            let mut map = TobMap::new();
            for element in elements {
                if let Ok((key, value)) = into_pair(element) {
                    map.insert(key, value);
                }
            }
            TobValue::Map(map)
        } else {
            TobValue::Array(elements)
        }
    }
}

/// Decomposes a value into a key/value pair: it must be a 2-element array.
fn into_pair(value: TobValue) -> Result<(TobValue, TobValue)> {
    match value {
        TobValue::Array(pair) if pair.len() == 2 => match <[TobValue; 2]>::try_from(pair) {
            Ok([key, value]) => Ok((key, value)),
            Err(_) => Err(Error::incompatible_type("2-element key/value pair", "array")),
        },
        other => Err(Error::incompatible_type(
            "2-element key/value pair",
            other.symbol(),
        )),
    }
}

/// The numeric sum of a real left operand and a boolean/integer/real right
/// operand.
fn numeric_sum(lhs: f64, rhs: &TobValue) -> Result<f64> {
    match rhs {
        TobValue::Boolean(b) => Ok(lhs + (*b as i64 as f64)),
        TobValue::Integer(int) => Ok(lhs + int.as_f64()),
        TobValue::Real(real) => Ok(lhs + real.as_f64()),
        other => Err(Error::incompatible_type("numeric", other.symbol())),
    }
}

// --- comparison -----------------------------------------------------------

/// Ordering group of a tag. The numeric tags share one group so that
/// booleans, integers and reals compare by value across tags.
fn rank(value: &TobValue) -> u8 {
    match value {
        TobValue::Null => 0,
        TobValue::Boolean(_) | TobValue::Integer(_) | TobValue::Real(_) => 1,
        TobValue::String(_) => 2,
        TobValue::WString(_) => 3,
        TobValue::U16String(_) => 4,
        TobValue::U32String(_) => 5,
        TobValue::Array(_) => 6,
        TobValue::Map(_) => 7,
    }
}

enum Num {
    Int(i128),
    Real(f64),
}

fn numeric(value: &TobValue) -> Option<Num> {
    match value {
        TobValue::Boolean(b) => Some(Num::Int(*b as i128)),
        TobValue::Integer(int) => Some(Num::Int(int.as_i128())),
        TobValue::Real(real) => Some(Num::Real(real.as_f64())),
        _ => None,
    }
}

/// Total order over the numeric group. NaN orders after every number and
/// equal to itself, which keeps the order total and the equality reflexive.
fn numeric_cmp(a: Num, b: Num) -> Ordering {
    match (a, b) {
        (Num::Int(x), Num::Int(y)) => x.cmp(&y),
        (x, y) => {
            let fx = match x {
                Num::Int(v) => v as f64,
                Num::Real(v) => v,
            };
            let fy = match y {
                Num::Int(v) => v as f64,
                Num::Real(v) => v,
            };
            match (fx.is_nan(), fy.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => fx.partial_cmp(&fy).unwrap_or(Ordering::Equal),
            }
        }
    }
}

impl Ord for TobValue {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (rank(self), rank(other));
        if a != b {
            return a.cmp(&b);
        }
        match (self, other) {
            (TobValue::Null, TobValue::Null) => Ordering::Equal,
            (TobValue::String(x), TobValue::String(y)) => x.cmp(y),
            (TobValue::WString(x), TobValue::WString(y)) => x.cmp(y),
            (TobValue::U16String(x), TobValue::U16String(y)) => x.cmp(y),
            (TobValue::U32String(x), TobValue::U32String(y)) => x.cmp(y),
            (TobValue::Array(x), TobValue::Array(y)) => x.cmp(y),
            (TobValue::Map(x), TobValue::Map(y)) => x.cmp(y),
            _ => match (numeric(self), numeric(other)) {
                (Some(x), Some(y)) => numeric_cmp(x, y),
                // ranks agree, so both sides are numeric here
                _ => Ordering::Equal,
            },
        }
    }
}

impl PartialOrd for TobValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TobValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TobValue {}

// --- iteration ------------------------------------------------------------

/// Iterator over the elements of a [`TobValue`]; see [`TobValue::iter`].
pub struct Iter<'a>(IterInner<'a>);

enum IterInner<'a> {
    Scalar(Option<&'a TobValue>),
    Array(slice::Iter<'a, TobValue>),
    Map(btree_map::Values<'a, TobValue, TobValue>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a TobValue;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            IterInner::Scalar(slot) => slot.take(),
            IterInner::Array(iter) => iter.next(),
            IterInner::Map(iter) => iter.next(),
        }
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            IterInner::Scalar(slot) => slot.take(),
            IterInner::Array(iter) => iter.next_back(),
            IterInner::Map(iter) => iter.next_back(),
        }
    }
}

/// Mutable iterator over the elements of a [`TobValue`].
pub struct IterMut<'a>(IterMutInner<'a>);

enum IterMutInner<'a> {
    Scalar(Option<&'a mut TobValue>),
    Array(slice::IterMut<'a, TobValue>),
    Map(btree_map::ValuesMut<'a, TobValue, TobValue>),
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut TobValue;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            IterMutInner::Scalar(slot) => slot.take(),
            IterMutInner::Array(iter) => iter.next(),
            IterMutInner::Map(iter) => iter.next(),
        }
    }
}

impl<'a> DoubleEndedIterator for IterMut<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            IterMutInner::Scalar(slot) => slot.take(),
            IterMutInner::Array(iter) => iter.next_back(),
            IterMutInner::Map(iter) => iter.next_back(),
        }
    }
}

/// Iterator over map keys; see [`TobValue::keys`].
pub struct Keys<'a>(KeysInner<'a>);

enum KeysInner<'a> {
    Empty,
    Map(btree_map::Keys<'a, TobValue, TobValue>),
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a TobValue;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            KeysInner::Empty => None,
            KeysInner::Map(iter) => iter.next(),
        }
    }
}

impl<'a> DoubleEndedIterator for Keys<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.0 {
            KeysInner::Empty => None,
            KeysInner::Map(iter) => iter.next_back(),
        }
    }
}

impl<'a> IntoIterator for &'a TobValue {
    type Item = &'a TobValue;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<TobValue> for TobValue {
    /// Collects through [`TobValue::from_elements`], so a sequence of
    /// 2-element arrays becomes a map.
    fn from_iter<T: IntoIterator<Item = TobValue>>(iter: T) -> Self {
        TobValue::from_elements(iter.into_iter().collect())
    }
}

// --- indexing -------------------------------------------------------------

impl ops::Index<usize> for TobValue {
    type Output = TobValue;

    /// Array element access with vector semantics.
    ///
    /// # Panics
    ///
    /// Panics when the value is not an array or the index is out of bounds.
    fn index(&self, index: usize) -> &TobValue {
        match self {
            TobValue::Array(values) => &values[index],
            other => panic!("cannot index {} with a usize", other.symbol()),
        }
    }
}

impl ops::IndexMut<usize> for TobValue {
    fn index_mut(&mut self, index: usize) -> &mut TobValue {
        match self {
            TobValue::Array(values) => &mut values[index],
            other => panic!("cannot index {} with a usize", other.symbol()),
        }
    }
}

impl ops::Index<&str> for TobValue {
    type Output = TobValue;

    /// Map access by key.
    ///
    /// # Panics
    ///
    /// Panics when the value is not a map, or the key is absent. This is the
    /// immutable side of the access asymmetry; the mutable side
    /// auto-vivifies instead.
    fn index(&self, key: &str) -> &TobValue {
        match self {
            TobValue::Map(map) => match map.get(&TobValue::from(key)) {
                Some(value) => value,
                None => panic!("no entry for key {:?}", key),
            },
            other => panic!("cannot index {} with a key", other.symbol()),
        }
    }
}

impl ops::IndexMut<&str> for TobValue {
    /// Map access by key, auto-vivifying: a null value becomes a map on
    /// first keyed write, and a missing key is inserted with a null value.
    ///
    /// # Panics
    ///
    /// Panics when the value is neither null nor a map.
    fn index_mut(&mut self, key: &str) -> &mut TobValue {
        if self.is_null() {
            *self = TobValue::Map(TobMap::new());
        }
        match self {
            TobValue::Map(map) => map.get_or_insert_null(TobValue::from(key)),
            other => panic!("cannot index {} with a key", other.symbol()),
        }
    }
}

impl ops::Index<&TobValue> for TobValue {
    type Output = TobValue;

    fn index(&self, key: &TobValue) -> &TobValue {
        match self {
            TobValue::Map(map) => match map.get(key) {
                Some(value) => value,
                None => panic!("no entry for key {}", key),
            },
            other => panic!("cannot index {} with a key", other.symbol()),
        }
    }
}

impl ops::IndexMut<&TobValue> for TobValue {
    fn index_mut(&mut self, key: &TobValue) -> &mut TobValue {
        if self.is_null() {
            *self = TobValue::Map(TobMap::new());
        }
        match self {
            TobValue::Map(map) => map.get_or_insert_null(key.clone()),
            other => panic!("cannot index {} with a key", other.symbol()),
        }
    }
}

// --- construction ---------------------------------------------------------

impl From<bool> for TobValue {
    fn from(value: bool) -> Self {
        TobValue::Boolean(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<$t> for TobValue {
            fn from(value: $t) -> Self {
                TobValue::Integer(Int::$variant(value))
            }
        }
    )*};
}

impl_from_int! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

impl From<f32> for TobValue {
    fn from(value: f32) -> Self {
        TobValue::Real(Real::F32(value))
    }
}

impl From<f64> for TobValue {
    fn from(value: f64) -> Self {
        TobValue::Real(Real::F64(value))
    }
}

impl From<&str> for TobValue {
    fn from(value: &str) -> Self {
        TobValue::String(value.to_string())
    }
}

impl From<String> for TobValue {
    fn from(value: String) -> Self {
        TobValue::String(value)
    }
}

impl From<Vec<char>> for TobValue {
    fn from(value: Vec<char>) -> Self {
        TobValue::WString(value)
    }
}

impl From<Vec<u16>> for TobValue {
    fn from(value: Vec<u16>) -> Self {
        TobValue::U16String(value)
    }
}

impl From<Vec<u32>> for TobValue {
    fn from(value: Vec<u32>) -> Self {
        TobValue::U32String(value)
    }
}

impl From<Vec<TobValue>> for TobValue {
    fn from(value: Vec<TobValue>) -> Self {
        TobValue::Array(value)
    }
}

impl From<TobMap> for TobValue {
    fn from(value: TobMap) -> Self {
        TobValue::Map(value)
    }
}

// --- extraction -----------------------------------------------------------

impl TryFrom<&TobValue> for bool {
    type Error = Error;

    fn try_from(value: &TobValue) -> Result<Self> {
        match value {
            TobValue::Boolean(b) => Ok(*b),
            other => Err(Error::incompatible_type("boolean", other.symbol())),
        }
    }
}

macro_rules! impl_try_from_int {
    ($($t:ty),* $(,)?) => {$(
        impl TryFrom<&TobValue> for $t {
            type Error = Error;

            fn try_from(value: &TobValue) -> Result<Self> {
                match value {
                    TobValue::Integer(int) => {
                        convert::int_to(int.as_i128(), stringify!($t))
                    }
                    TobValue::Real(real) => {
                        convert::real_to_int(real.as_f64(), stringify!($t))
                    }
                    other => Err(Error::incompatible_type(
                        stringify!($t),
                        other.symbol(),
                    )),
                }
            }
        }
    )*};
}

impl_try_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl TryFrom<&TobValue> for f32 {
    type Error = Error;

    fn try_from(value: &TobValue) -> Result<Self> {
        match value {
            TobValue::Integer(int) => Ok(int.as_f64() as f32),
            TobValue::Real(real) => Ok(real.as_f64() as f32),
            other => Err(Error::incompatible_type("f32", other.symbol())),
        }
    }
}

impl TryFrom<&TobValue> for f64 {
    type Error = Error;

    fn try_from(value: &TobValue) -> Result<Self> {
        match value {
            TobValue::Integer(int) => Ok(int.as_f64()),
            TobValue::Real(real) => Ok(real.as_f64()),
            other => Err(Error::incompatible_type("f64", other.symbol())),
        }
    }
}

macro_rules! impl_try_from_clone {
    ($($t:ty => $variant:ident / $name:literal),* $(,)?) => {$(
        impl TryFrom<&TobValue> for $t {
            type Error = Error;

            fn try_from(value: &TobValue) -> Result<Self> {
                match value {
                    TobValue::$variant(inner) => Ok(inner.clone()),
                    other => Err(Error::incompatible_type($name, other.symbol())),
                }
            }
        }
    )*};
}

impl_try_from_clone! {
    String => String / "string",
    Vec<char> => WString / "wstring",
    Vec<u16> => U16String / "u16string",
    Vec<u32> => U32String / "u32string",
    Vec<TobValue> => Array / "array",
    TobMap => Map / "map",
}

impl TryFrom<TobValue> for String {
    type Error = Error;

    fn try_from(value: TobValue) -> Result<Self> {
        match value {
            TobValue::String(s) => Ok(s),
            other => Err(Error::incompatible_type("string", other.symbol())),
        }
    }
}

impl TryFrom<TobValue> for Vec<TobValue> {
    type Error = Error;

    fn try_from(value: TobValue) -> Result<Self> {
        match value {
            TobValue::Array(values) => Ok(values),
            other => Err(Error::incompatible_type("array", other.symbol())),
        }
    }
}

impl TryFrom<TobValue> for TobMap {
    type Error = Error;

    fn try_from(value: TobValue) -> Result<Self> {
        match value {
            TobValue::Map(map) => Ok(map),
            other => Err(Error::incompatible_type("map", other.symbol())),
        }
    }
}

// --- display --------------------------------------------------------------

impl fmt::Display for TobValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TobValue::Null => write!(f, "null"),
            TobValue::Boolean(b) => write!(f, "{}", b),
            TobValue::Integer(int) => write!(f, "{}", int.as_i128()),
            TobValue::Real(real) => write!(f, "{}", real.as_f64()),
            TobValue::String(s) => write!(f, "{:?}", s),
            TobValue::WString(v) => {
                let text: String = v.iter().collect();
                write!(f, "w{:?}", text)
            }
            TobValue::U16String(v) => {
                write!(f, "u16{:?}", String::from_utf16_lossy(v))
            }
            TobValue::U32String(v) => {
                let text: String = v
                    .iter()
                    .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
                    .collect();
                write!(f, "u32{:?}", text)
            }
            TobValue::Array(values) => {
                write!(f, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
            TobValue::Map(map) => {
                write!(f, "{{")?;
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// --- serde ----------------------------------------------------------------

// Wide-string content is routed through a named newtype so the crate's own
// serializers can recognize it and report conversion failures as
// `Error::InvalidValue` instead of a generic bridge message.
pub(crate) const U16_TEXT_NAME: &str = "$serde_tob::u16text";
pub(crate) const U32_TEXT_NAME: &str = "$serde_tob::u32text";

pub(crate) fn is_wide_text_name(name: &str) -> bool {
    name == U16_TEXT_NAME || name == U32_TEXT_NAME
}

struct U16Text<'a>(&'a [u16]);

impl Serialize for U16Text<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error as _;
        let text = String::from_utf16(self.0)
            .map_err(|_| S::Error::custom("unpaired surrogate in u16string"))?;
        serializer.serialize_str(&text)
    }
}

struct U32Text<'a>(&'a [u32]);

impl Serialize for U32Text<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error as _;
        let text: std::result::Result<String, S::Error> = self
            .0
            .iter()
            .map(|&c| {
                char::from_u32(c).ok_or_else(|| S::Error::custom("invalid scalar in u32string"))
            })
            .collect();
        serializer.serialize_str(&text?)
    }
}

impl Serialize for TobValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TobValue::Null => serializer.serialize_unit(),
            TobValue::Boolean(b) => serializer.serialize_bool(*b),
            TobValue::Integer(Int::I8(v)) => serializer.serialize_i8(*v),
            TobValue::Integer(Int::I16(v)) => serializer.serialize_i16(*v),
            TobValue::Integer(Int::I32(v)) => serializer.serialize_i32(*v),
            TobValue::Integer(Int::I64(v)) => serializer.serialize_i64(*v),
            TobValue::Integer(Int::U8(v)) => serializer.serialize_u8(*v),
            TobValue::Integer(Int::U16(v)) => serializer.serialize_u16(*v),
            TobValue::Integer(Int::U32(v)) => serializer.serialize_u32(*v),
            TobValue::Integer(Int::U64(v)) => serializer.serialize_u64(*v),
            TobValue::Real(Real::F32(v)) => serializer.serialize_f32(*v),
            TobValue::Real(Real::F64(v)) => serializer.serialize_f64(*v),
            TobValue::String(s) => serializer.serialize_str(s),
            TobValue::WString(v) => {
                let text: String = v.iter().collect();
                serializer.serialize_str(&text)
            }
            TobValue::U16String(v) => {
                serializer.serialize_newtype_struct(U16_TEXT_NAME, &U16Text(v))
            }
            TobValue::U32String(v) => {
                serializer.serialize_newtype_struct(U32_TEXT_NAME, &U32Text(v))
            }
            TobValue::Array(values) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for element in values {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            TobValue::Map(map) => {
                use serde::ser::SerializeMap;
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    entries.serialize_entry(key, value)?;
                }
                entries.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for TobValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TobValueVisitor;

        impl<'de> Visitor<'de> for TobValueVisitor {
            type Value = TobValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid TOB value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Boolean(value))
            }

            fn visit_i8<E>(self, value: i8) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Integer(Int::I8(value)))
            }

            fn visit_i16<E>(self, value: i16) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Integer(Int::I16(value)))
            }

            fn visit_i32<E>(self, value: i32) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Integer(Int::I32(value)))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Integer(Int::I64(value)))
            }

            fn visit_u8<E>(self, value: u8) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Integer(Int::U8(value)))
            }

            fn visit_u16<E>(self, value: u16) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Integer(Int::U16(value)))
            }

            fn visit_u32<E>(self, value: u32) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Integer(Int::U32(value)))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Integer(Int::U64(value)))
            }

            fn visit_f32<E>(self, value: f32) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Real(Real::F32(value)))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Real(Real::F64(value)))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::String(value))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Array(
                    value.iter().map(|&b| TobValue::from(b)).collect(),
                ))
            }

            fn visit_byte_buf<E>(self, value: Vec<u8>) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Array(
                    value.into_iter().map(TobValue::from).collect(),
                ))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(TobValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values = Vec::new();
                while let Some(element) = seq.next_element()? {
                    values.push(element);
                }
                // a decoded sequence is always an array; the pair heuristic
                // applies only to from_elements construction
                Ok(TobValue::Array(values))
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = TobMap::new();
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(TobValue::Map(map))
            }
        }

        deserializer.deserialize_any(TobValueVisitor)
    }
}
