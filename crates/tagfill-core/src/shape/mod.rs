// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime shape model.
//!
//! Every constructible type implements [`Fill`], whose [`Fill::slot`] returns
//! a [`Slot`]: a mutable view of the value tagged with its shape. The engine
//! dispatches on that closed set of variants instead of on runtime type
//! reflection.
//!
//! # Architecture
//!
//! ```text
//! Fill::slot(&mut self) -> Slot<'_>
//! │
//! ├── scalars     Bool, Str, Int, Uint, Float, Complex, Char
//! ├── well-known  Duration, Timestamp, RawMessage, Any
//! ├── containers  Pointer, Array, List, Map, Channel (capability traits)
//! ├── Struct      StructSlot, generated by #[derive(Fill)]
//! └── Unsupported fall-back, always an error
//! ```
//!
//! Container shapes hand out element slots through object-safe traits, so a
//! `Vec<Option<Box<User>>>` is walked without the engine knowing the concrete
//! type.

mod impls;

use std::{fmt, time::Duration};

use chrono::{DateTime, Utc};
use num_complex::{Complex32, Complex64};

use crate::{error::Result, raw::RawMessage};

/// Shape discriminant of a [`Slot`].
///
/// Displayed with the names used in error messages (`int8`, `slice`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// `bool`.
    Bool,
    /// `String`.
    Str,
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `isize`.
    Isize,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// `usize`.
    Usize,
    /// `f32`.
    F32,
    /// `f64`.
    F64,
    /// `Complex32`.
    Complex64,
    /// `Complex64`.
    Complex128,
    /// `char`.
    Char,
    /// `Option<T>` or `Box<T>`.
    Pointer,
    /// Derived struct.
    Struct,
    /// `[T; N]`.
    Array,
    /// `Vec<T>`.
    List,
    /// `HashMap<K, V>` or `BTreeMap<K, V>`.
    Map,
    /// [`Chan<T>`](crate::Chan).
    Channel,
    /// `serde_json::Value`.
    Any,
    /// `std::time::Duration`.
    Duration,
    /// `chrono::DateTime<Utc>`.
    Timestamp,
    /// [`RawMessage`].
    RawMessage,
    /// Type without a construction routine.
    Unsupported
}

impl ShapeKind {
    /// Name used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Str => "string",
            Self::I8 => "int8",
            Self::I16 => "int16",
            Self::I32 => "int32",
            Self::I64 => "int64",
            Self::Isize => "int",
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::Usize => "uint",
            Self::F32 => "float32",
            Self::F64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Char => "rune",
            Self::Pointer => "pointer",
            Self::Struct => "struct",
            Self::Array => "array",
            Self::List => "slice",
            Self::Map => "map",
            Self::Channel => "chan",
            Self::Any => "interface",
            Self::Duration => "duration",
            Self::Timestamp => "timestamp",
            Self::RawMessage => "raw message",
            Self::Unsupported => "unsupported"
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable view of a signed integer.
#[derive(Debug)]
pub enum IntSlot<'a> {
    /// `i8`.
    I8(&'a mut i8),
    /// `i16`.
    I16(&'a mut i16),
    /// `i32`.
    I32(&'a mut i32),
    /// `i64`.
    I64(&'a mut i64),
    /// `isize`.
    Isize(&'a mut isize)
}

/// Mutable view of an unsigned integer.
#[derive(Debug)]
pub enum UintSlot<'a> {
    /// `u8`.
    U8(&'a mut u8),
    /// `u16`.
    U16(&'a mut u16),
    /// `u32`.
    U32(&'a mut u32),
    /// `u64`.
    U64(&'a mut u64),
    /// `usize`.
    Usize(&'a mut usize)
}

/// Mutable view of a float.
#[derive(Debug)]
pub enum FloatSlot<'a> {
    /// `f32`.
    F32(&'a mut f32),
    /// `f64`.
    F64(&'a mut f64)
}

/// Mutable view of a complex number.
#[derive(Debug)]
pub enum ComplexSlot<'a> {
    /// Two `f32` parts.
    C64(&'a mut Complex32),
    /// Two `f64` parts.
    C128(&'a mut Complex64)
}

/// Mutable view of a value, tagged with its shape.
///
/// This is the closed set of shapes the engine can construct. Scalars carry
/// the reference itself; containers carry a capability trait object.
pub enum Slot<'a> {
    /// Boolean.
    Bool(&'a mut bool),

    /// Owned string.
    Str(&'a mut String),

    /// Signed integer of any width.
    Int(IntSlot<'a>),

    /// Unsigned integer of any width.
    Uint(UintSlot<'a>),

    /// Float of either precision.
    Float(FloatSlot<'a>),

    /// Complex number of either precision.
    Complex(ComplexSlot<'a>),

    /// Single character.
    Char(&'a mut char),

    /// Nullable or owning pointer.
    Pointer(&'a mut dyn PointerSlot),

    /// Struct with field metadata.
    Struct(&'a mut dyn StructSlot),

    /// Fixed-length array.
    Array(&'a mut dyn ArraySlot),

    /// Growable sequence.
    List(&'a mut dyn ListSlot),

    /// Key-value map.
    Map(&'a mut dyn MapSlot),

    /// Channel handle.
    Channel(&'a mut dyn ChannelSlot),

    /// Dynamically typed JSON value.
    Any(&'a mut serde_json::Value),

    /// Time span.
    Duration(&'a mut Duration),

    /// UTC timestamp.
    Timestamp(&'a mut DateTime<Utc>),

    /// Undecoded JSON fragment.
    RawMessage(&'a mut RawMessage),

    /// Type that cannot be constructed; carries its type name.
    Unsupported(&'static str)
}

impl Slot<'_> {
    /// Shape discriminant of this slot.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Bool(_) => ShapeKind::Bool,
            Self::Str(_) => ShapeKind::Str,
            Self::Int(int) => match int {
                IntSlot::I8(_) => ShapeKind::I8,
                IntSlot::I16(_) => ShapeKind::I16,
                IntSlot::I32(_) => ShapeKind::I32,
                IntSlot::I64(_) => ShapeKind::I64,
                IntSlot::Isize(_) => ShapeKind::Isize
            },
            Self::Uint(uint) => match uint {
                UintSlot::U8(_) => ShapeKind::U8,
                UintSlot::U16(_) => ShapeKind::U16,
                UintSlot::U32(_) => ShapeKind::U32,
                UintSlot::U64(_) => ShapeKind::U64,
                UintSlot::Usize(_) => ShapeKind::Usize
            },
            Self::Float(FloatSlot::F32(_)) => ShapeKind::F32,
            Self::Float(FloatSlot::F64(_)) => ShapeKind::F64,
            Self::Complex(ComplexSlot::C64(_)) => ShapeKind::Complex64,
            Self::Complex(ComplexSlot::C128(_)) => ShapeKind::Complex128,
            Self::Char(_) => ShapeKind::Char,
            Self::Pointer(_) => ShapeKind::Pointer,
            Self::Struct(_) => ShapeKind::Struct,
            Self::Array(_) => ShapeKind::Array,
            Self::List(_) => ShapeKind::List,
            Self::Map(_) => ShapeKind::Map,
            Self::Channel(_) => ShapeKind::Channel,
            Self::Any(_) => ShapeKind::Any,
            Self::Duration(_) => ShapeKind::Duration,
            Self::Timestamp(_) => ShapeKind::Timestamp,
            Self::RawMessage(_) => ShapeKind::RawMessage,
            Self::Unsupported(_) => ShapeKind::Unsupported
        }
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.kind()).finish()
    }
}

/// A value the engine can construct.
///
/// Implemented for the supported standard types and generated for structs by
/// `#[derive(Fill)]`. Manual implementations only need to return the right
/// [`Slot`] variant.
///
/// # Example
///
/// ```rust
/// use tagfill_core::{Fill, Slot};
///
/// struct Celsius(f64);
///
/// impl Fill for Celsius {
///     fn zero() -> Self {
///         Self(0.0)
///     }
///
///     fn slot(&mut self) -> Slot<'_> {
///         self.0.slot()
///     }
/// }
/// ```
pub trait Fill {
    /// Zero value used for fresh allocations.
    fn zero() -> Self
    where
        Self: Sized;

    /// Mutable view of this value.
    fn slot(&mut self) -> Slot<'_>;
}

/// Pointer capability: `Option<T>` and `Box<T>`.
pub trait PointerSlot {
    /// Check if the pointer is null.
    fn is_null(&self) -> bool;

    /// Pointee, allocating a zero value first when null.
    fn pointee(&mut self) -> &mut dyn Fill;

    /// Reset to null, or to a zero pointee for non-nullable pointers.
    fn clear(&mut self);
}

/// Fixed-length array capability.
pub trait ArraySlot {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Check if the array has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`.
    fn element(&mut self, index: usize) -> Option<&mut dyn Fill>;

    /// Reset every element to its zero value.
    fn clear(&mut self);
}

/// Growable sequence capability.
pub trait ListSlot {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Check if the list has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity of the underlying buffer.
    fn capacity(&self) -> usize;

    /// Replace the contents with `len` zero elements in a buffer of at least
    /// `capacity`.
    fn reset(&mut self, len: usize, capacity: usize);

    /// Element at `index`.
    fn element(&mut self, index: usize) -> Option<&mut dyn Fill>;

    /// Shape of the element type.
    fn element_kind(&self) -> ShapeKind;
}

/// Map capability.
pub trait MapSlot {
    /// Number of entries.
    fn len(&self) -> usize;

    /// Check if the map has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the contents with an empty map sized for `capacity` entries.
    fn reset(&mut self, capacity: usize);

    /// Build one entry from zero key and value, then insert it.
    ///
    /// `build` receives the key and the value; the entry is inserted only when
    /// it returns `Ok`.
    fn insert_with(
        &mut self,
        build: &mut dyn FnMut(&mut dyn Fill, &mut dyn Fill) -> Result<()>
    ) -> Result<()>;
}

/// Channel capability.
pub trait ChannelSlot {
    /// Replace the handle with a new channel buffering `capacity` messages.
    fn open(&mut self, capacity: usize);
}

/// Metadata of one struct field, generated by `#[derive(Fill)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Field name.
    pub name:     &'static str,
    /// Whether the field is visible outside its module (`pub`, `pub(..)`).
    pub settable: bool,
    /// Directives by tag name, in declaration order.
    pub tags:     &'static [(&'static str, &'static str)]
}

impl FieldInfo {
    /// Directive stored under `tag`, empty when absent.
    #[must_use]
    pub fn directive(&self, tag: &str) -> &'static str {
        self.tags
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, directive)| *directive)
            .unwrap_or_default()
    }
}

/// Struct capability, generated by `#[derive(Fill)]`.
pub trait StructSlot {
    /// Name of the struct type.
    fn type_name(&self) -> &'static str;

    /// Field metadata in declaration order.
    fn fields(&self) -> &'static [FieldInfo];

    /// Field at `index` of [`fields`](Self::fields).
    fn field(&mut self, index: usize) -> Option<&mut dyn Fill>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_names() {
        assert_eq!(ShapeKind::I8.to_string(), "int8");
        assert_eq!(ShapeKind::List.to_string(), "slice");
        assert_eq!(ShapeKind::Any.to_string(), "interface");
        assert_eq!(ShapeKind::RawMessage.to_string(), "raw message");
    }

    #[test]
    fn slot_kinds() {
        let mut flag = false;
        assert_eq!(flag.slot().kind(), ShapeKind::Bool);

        let mut small = 0_i16;
        assert_eq!(small.slot().kind(), ShapeKind::I16);

        let mut list: Vec<u8> = Vec::new();
        assert_eq!(list.slot().kind(), ShapeKind::List);

        let mut maybe: Option<Box<u64>> = None;
        assert_eq!(maybe.slot().kind(), ShapeKind::Pointer);
    }

    #[test]
    fn slot_debug_shows_kind() {
        let mut text = String::new();
        assert_eq!(format!("{:?}", text.slot()), "Slot(Str)");
    }

    #[test]
    fn field_directive_lookup() {
        let info = FieldInfo {
            name:     "name",
            settable: true,
            tags:     &[("default", "abc"), ("fixture", "xyz")]
        };
        assert_eq!(info.directive("default"), "abc");
        assert_eq!(info.directive("fixture"), "xyz");
        assert_eq!(info.directive("json"), "");
    }
}
