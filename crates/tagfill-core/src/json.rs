// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Structural JSON assignment.
//!
//! `json(..)` payloads are parsed into a [`serde_json::Value`] and then
//! assigned into the target by shape, so any [`Fill`] type can be decoded in
//! place without implementing `Deserialize`.
//!
//! | Shape | Accepts |
//! |-------|---------|
//! | bool, string | matching JSON kind |
//! | integers | integral numbers within range |
//! | floats | any number |
//! | char | one-character string, or a code point |
//! | struct | object keyed by `json` tag name or field name |
//! | array | array; leading slots filled, the rest zeroed |
//! | slice | array |
//! | map | object; keys built with literal rules |
//! | interface | anything, numbers become floats |
//! | duration | integer nanoseconds |
//! | timestamp | RFC 3339 string |
//! | raw message | anything; verbatim text at the top, compact when nested |
//!
//! `null` clears pointers, slices and maps and leaves scalars unchanged.

use std::{mem, time::Duration};

use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

use crate::{
    command::Command,
    config::Config,
    error::{FillError, Result},
    setter::{enter, set_value, single_char},
    shape::{
        ArraySlot, FieldInfo, Fill, FloatSlot, IntSlot, ListSlot, MapSlot, ShapeKind, Slot,
        StructSlot, UintSlot
    }
};

/// Tag whose first segment renames a field in JSON objects.
const JSON_TAG: &str = "json";

/// Parse `text` and assign it into `target`.
pub(crate) fn assign_text(
    config: &Config,
    target: &mut dyn Fill,
    text: &str,
    depth: usize
) -> Result<()> {
    let value: Value = serde_json::from_str(text)?;
    if let Slot::RawMessage(raw) = target.slot() {
        enter(config, depth)?;
        raw.set(text.trim());
        return Ok(());
    }
    assign(config, target, value, depth)
}

/// Assign an already parsed JSON value into `target`.
pub(crate) fn assign(
    config: &Config,
    target: &mut dyn Fill,
    value: Value,
    depth: usize
) -> Result<()> {
    enter(config, depth)?;

    let slot = target.slot();
    let shape = slot.kind();
    let found = kind_of(&value);
    let mismatch = || FillError::Decode {
        shape,
        found
    };

    if value.is_null() {
        match slot {
            Slot::Pointer(ptr) => ptr.clear(),
            Slot::List(list) => list.reset(0, 0),
            Slot::Map(map) => map.reset(0),
            Slot::Any(any) => *any = Value::Null,
            Slot::RawMessage(raw) => raw.set("null"),
            _ => {}
        }
        return Ok(());
    }

    match (slot, value) {
        (Slot::Bool(flag), Value::Bool(b)) => *flag = b,
        (Slot::Str(text), Value::String(s)) => *text = s,
        (Slot::Int(int), Value::Number(n)) => assign_int(int, &n).ok_or_else(mismatch)?,
        (Slot::Uint(uint), Value::Number(n)) => assign_uint(uint, &n).ok_or_else(mismatch)?,
        (Slot::Float(float), Value::Number(n)) => {
            let n = n.as_f64().ok_or_else(mismatch)?;
            match float {
                FloatSlot::F32(f) => *f = n as f32,
                FloatSlot::F64(f) => *f = n
            }
        }
        (Slot::Char(ch), Value::String(s)) => {
            *ch = single_char(ShapeKind::Char, &s)?;
        }
        (Slot::Char(ch), Value::Number(n)) => {
            *ch = n
                .as_u64()
                .and_then(|code| u32::try_from(code).ok())
                .and_then(char::from_u32)
                .ok_or_else(mismatch)?;
        }
        (Slot::Pointer(ptr), value) => assign(config, ptr.pointee(), value, depth + 1)?,
        (Slot::Struct(strukt), Value::Object(object)) => {
            assign_struct(config, strukt, object, depth + 1)?;
        }
        (Slot::Array(array), Value::Array(items)) => {
            assign_array(config, array, items, depth + 1)?;
        }
        (Slot::List(list), Value::Array(items)) => assign_list(config, list, items, depth + 1)?,
        (Slot::Map(map), Value::Object(object)) => assign_map(config, map, object, depth + 1)?,
        (Slot::Any(any), value) => *any = normalize(value),
        (Slot::Duration(duration), Value::Number(n)) => {
            *duration = Duration::from_nanos(n.as_u64().ok_or_else(mismatch)?);
        }
        (Slot::Timestamp(timestamp), Value::String(s)) => {
            *timestamp = DateTime::parse_from_rfc3339(&s)
                .map(|stamp| stamp.with_timezone(&Utc))
                .map_err(|err| FillError::parse(ShapeKind::Timestamp, &s, err))?;
        }
        (Slot::RawMessage(raw), value) => raw.set(value.to_string()),
        (Slot::Complex(_), _) => {
            return Err(FillError::unsupported(shape, "complex numbers have no JSON form"));
        }
        (Slot::Channel(_), _) => {
            return Err(FillError::unsupported(shape, "channels have no JSON form"));
        }
        (Slot::Unsupported(name), _) => {
            return Err(FillError::unsupported(name, "no construction routine"));
        }
        _ => return Err(mismatch())
    }

    Ok(())
}

fn assign_int(slot: IntSlot<'_>, n: &Number) -> Option<()> {
    let n = n.as_i64()?;
    match slot {
        IntSlot::I8(v) => *v = n.try_into().ok()?,
        IntSlot::I16(v) => *v = n.try_into().ok()?,
        IntSlot::I32(v) => *v = n.try_into().ok()?,
        IntSlot::I64(v) => *v = n,
        IntSlot::Isize(v) => *v = n.try_into().ok()?
    }
    Some(())
}

fn assign_uint(slot: UintSlot<'_>, n: &Number) -> Option<()> {
    let n = n.as_u64()?;
    match slot {
        UintSlot::U8(v) => *v = n.try_into().ok()?,
        UintSlot::U16(v) => *v = n.try_into().ok()?,
        UintSlot::U32(v) => *v = n.try_into().ok()?,
        UintSlot::U64(v) => *v = n,
        UintSlot::Usize(v) => *v = n.try_into().ok()?
    }
    Some(())
}

/// Key a field answers to in JSON objects, `None` when excluded with `-`.
fn json_name(info: &FieldInfo) -> Option<&'static str> {
    let name = info.directive(JSON_TAG).split(',').next().unwrap_or_default();
    match name {
        "-" => None,
        "" => Some(info.name),
        renamed => Some(renamed)
    }
}

fn assign_struct(
    config: &Config,
    strukt: &mut dyn StructSlot,
    object: Map<String, Value>,
    depth: usize
) -> Result<()> {
    let fields = strukt.fields();

    for (key, value) in object {
        let candidates = || {
            fields
                .iter()
                .enumerate()
                .filter(|(_, info)| info.settable)
                .filter_map(|(index, info)| json_name(info).map(|name| (index, name)))
        };
        let index = candidates()
            .find(|(_, name)| *name == key)
            .or_else(|| candidates().find(|(_, name)| name.eq_ignore_ascii_case(&key)))
            .map(|(index, _)| index);

        if let Some(field) = index.and_then(|index| strukt.field(index)) {
            assign(config, field, value, depth)?;
        }
    }
    Ok(())
}

fn assign_array(
    config: &Config,
    array: &mut dyn ArraySlot,
    items: Vec<Value>,
    depth: usize
) -> Result<()> {
    array.clear();
    for (index, item) in items.into_iter().enumerate().take(array.len()) {
        if let Some(element) = array.element(index) {
            assign(config, element, item, depth)?;
        }
    }
    Ok(())
}

fn assign_list(
    config: &Config,
    list: &mut dyn ListSlot,
    items: Vec<Value>,
    depth: usize
) -> Result<()> {
    list.reset(items.len(), items.len());
    for (index, item) in items.into_iter().enumerate() {
        if let Some(element) = list.element(index) {
            assign(config, element, item, depth)?;
        }
    }
    Ok(())
}

fn assign_map(
    config: &Config,
    map: &mut dyn MapSlot,
    object: Map<String, Value>,
    depth: usize
) -> Result<()> {
    map.reset(object.len());
    for (key, mut value) in object {
        let key = Command::literal(key);
        map.insert_with(&mut |key_slot: &mut dyn Fill, value_slot: &mut dyn Fill| {
            set_value(config, key_slot, &key, depth)?;
            assign(config, value_slot, mem::take(&mut value), depth)
        })?;
    }
    Ok(())
}

/// Dynamically typed form: every number becomes a float.
pub(crate) fn normalize(value: Value) -> Value {
    match value {
        Value::Number(n) => n
            .as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        Value::Object(object) => Value::Object(
            object
                .into_iter()
                .map(|(key, value)| (key, normalize(value)))
                .collect()
        ),
        other => other
    }
}

/// JSON kind name used in decode errors.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object"
    }
}
