// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! [`Fill`] implementations for standard and well-known types.
//!
//! | Rust type | Shape |
//! |-----------|-------|
//! | `bool`, `String`, `char` | scalar |
//! | `i8`..`i64`, `isize`, `u8`..`u64`, `usize` | integer |
//! | `f32`, `f64`, `Complex32`, `Complex64` | float / complex |
//! | `Option<T>`, `Box<T>` | pointer |
//! | `[T; N]`, `Vec<T>` | array / slice |
//! | `HashMap<K, V, S>`, `BTreeMap<K, V>` | map |
//! | `serde_json::Value` | interface |
//! | `Duration`, `DateTime<Utc>` | duration / timestamp |
//! | `()`, `PhantomData<T>` | unsupported |

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
    marker::PhantomData,
    time::Duration
};

use chrono::{DateTime, Utc};
use num_complex::{Complex32, Complex64};

use super::{
    ArraySlot, ComplexSlot, Fill, FloatSlot, IntSlot, ListSlot, MapSlot, PointerSlot, ShapeKind,
    Slot, UintSlot
};
use crate::error::Result;

macro_rules! impl_number {
    ($($ty:ty => $slot:ident($view:ident::$variant:ident)),* $(,)?) => {
        $(
            impl Fill for $ty {
                fn zero() -> Self {
                    0 as $ty
                }

                fn slot(&mut self) -> Slot<'_> {
                    Slot::$slot($view::$variant(self))
                }
            }
        )*
    };
}

impl_number! {
    i8 => Int(IntSlot::I8),
    i16 => Int(IntSlot::I16),
    i32 => Int(IntSlot::I32),
    i64 => Int(IntSlot::I64),
    isize => Int(IntSlot::Isize),
    u8 => Uint(UintSlot::U8),
    u16 => Uint(UintSlot::U16),
    u32 => Uint(UintSlot::U32),
    u64 => Uint(UintSlot::U64),
    usize => Uint(UintSlot::Usize),
    f32 => Float(FloatSlot::F32),
    f64 => Float(FloatSlot::F64),
}

impl Fill for bool {
    fn zero() -> Self {
        false
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

impl Fill for String {
    fn zero() -> Self {
        Self::new()
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Str(self)
    }
}

impl Fill for char {
    fn zero() -> Self {
        '\0'
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Char(self)
    }
}

impl Fill for Complex32 {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Complex(ComplexSlot::C64(self))
    }
}

impl Fill for Complex64 {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Complex(ComplexSlot::C128(self))
    }
}

impl Fill for serde_json::Value {
    fn zero() -> Self {
        Self::Null
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Any(self)
    }
}

impl Fill for Duration {
    fn zero() -> Self {
        Self::ZERO
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Duration(self)
    }
}

impl Fill for DateTime<Utc> {
    fn zero() -> Self {
        Self::default()
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Timestamp(self)
    }
}

impl Fill for () {
    fn zero() -> Self {}

    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported("()")
    }
}

impl<T: ?Sized> Fill for PhantomData<T> {
    fn zero() -> Self {
        PhantomData
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<T: Fill> PointerSlot for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }

    fn pointee(&mut self) -> &mut dyn Fill {
        self.get_or_insert_with(T::zero)
    }

    fn clear(&mut self) {
        *self = None;
    }
}

impl<T: Fill> Fill for Option<T> {
    fn zero() -> Self {
        None
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Pointer(self)
    }
}

impl<T: Fill> PointerSlot for Box<T> {
    fn is_null(&self) -> bool {
        false
    }

    fn pointee(&mut self) -> &mut dyn Fill {
        &mut **self
    }

    fn clear(&mut self) {
        **self = T::zero();
    }
}

impl<T: Fill> Fill for Box<T> {
    fn zero() -> Self {
        Box::new(T::zero())
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Pointer(self)
    }
}

impl<T: Fill, const N: usize> ArraySlot for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn element(&mut self, index: usize) -> Option<&mut dyn Fill> {
        self.get_mut(index).map(|element| element as &mut dyn Fill)
    }

    fn clear(&mut self) {
        for element in self.iter_mut() {
            *element = T::zero();
        }
    }
}

impl<T: Fill, const N: usize> Fill for [T; N] {
    fn zero() -> Self {
        std::array::from_fn(|_| T::zero())
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Array(self)
    }
}

impl<T: Fill> ListSlot for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    fn reset(&mut self, len: usize, capacity: usize) {
        let mut fresh = Vec::with_capacity(capacity.max(len));
        fresh.extend((0..len).map(|_| T::zero()));
        *self = fresh;
    }

    fn element(&mut self, index: usize) -> Option<&mut dyn Fill> {
        self.get_mut(index).map(|element| element as &mut dyn Fill)
    }

    fn element_kind(&self) -> ShapeKind {
        let mut probe = T::zero();
        let kind = probe.slot().kind();
        kind
    }
}

impl<T: Fill> Fill for Vec<T> {
    fn zero() -> Self {
        Vec::new()
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::List(self)
    }
}

impl<K, V, S> MapSlot for HashMap<K, V, S>
where
    K: Fill + Eq + Hash,
    V: Fill,
    S: BuildHasher + Default
{
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn reset(&mut self, capacity: usize) {
        *self = HashMap::with_capacity_and_hasher(capacity, S::default());
    }

    fn insert_with(
        &mut self,
        build: &mut dyn FnMut(&mut dyn Fill, &mut dyn Fill) -> Result<()>
    ) -> Result<()> {
        let mut key = K::zero();
        let mut value = V::zero();
        build(&mut key, &mut value)?;
        self.insert(key, value);
        Ok(())
    }
}

impl<K, V, S> Fill for HashMap<K, V, S>
where
    K: Fill + Eq + Hash,
    V: Fill,
    S: BuildHasher + Default
{
    fn zero() -> Self {
        HashMap::with_hasher(S::default())
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Map(self)
    }
}

impl<K: Fill + Ord, V: Fill> MapSlot for BTreeMap<K, V> {
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn reset(&mut self, _capacity: usize) {
        self.clear();
    }

    fn insert_with(
        &mut self,
        build: &mut dyn FnMut(&mut dyn Fill, &mut dyn Fill) -> Result<()>
    ) -> Result<()> {
        let mut key = K::zero();
        let mut value = V::zero();
        build(&mut key, &mut value)?;
        self.insert(key, value);
        Ok(())
    }
}

impl<K: Fill + Ord, V: Fill> Fill for BTreeMap<K, V> {
    fn zero() -> Self {
        BTreeMap::new()
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Map(self)
    }
}
