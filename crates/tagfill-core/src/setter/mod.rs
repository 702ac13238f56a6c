// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type-dispatch setter.
//!
//! [`set_value`] applies one parsed [`Command`] to one target. The target's
//! [`Slot`] selects the construction routine; a `json(..)` primary is routed
//! to the structural JSON assigner for every shape.
//!
//! # Architecture
//!
//! ```text
//! setter/
//! ├── mod.rs       - set_value dispatch and the depth guard
//! ├── scalar.rs    - bool, integers, floats, complex, rune, byte
//! ├── time.rs      - durations and timestamps
//! ├── container.rs - arrays, slices, maps
//! └── tests.rs
//! ```

mod container;
mod scalar;
mod time;


pub(crate) use scalar::single_char;

use log::trace;

use crate::{
    command::{Command, Keyword},
    config::Config,
    error::{FillError, Result},
    json,
    shape::{Fill, ShapeKind, Slot},
    walk
};

/// Apply `cmd` to `target`.
///
/// An empty command never touches the target. `depth` counts the nested
/// steps taken so far from the top-level call.
///
/// # Errors
///
/// Any [`FillError`] raised by the construction routine of the target shape
/// or of a nested element.
pub fn set_value(config: &Config, target: &mut dyn Fill, cmd: &Command, depth: usize) -> Result<()> {
    if cmd.is_empty() {
        return Ok(());
    }
    enter(config, depth)?;

    if cmd.primary() == Some(Keyword::Json) {
        return json::assign_text(config, target, cmd.value(), depth);
    }

    let slot = target.slot();
    trace!("setting {} from `{cmd}`", slot.kind());

    match slot {
        Slot::Bool(flag) => *flag = scalar::parse_bool(cmd.value())?,
        Slot::Str(text) => cmd.value().clone_into(text),
        Slot::Int(int) => scalar::set_int(int, cmd)?,
        Slot::Uint(uint) => scalar::set_uint(uint, cmd)?,
        Slot::Float(float) => scalar::set_float(float, cmd.value())?,
        Slot::Complex(complex) => scalar::set_complex(complex, cmd.value())?,
        Slot::Char(ch) => *ch = scalar::single_char(ShapeKind::Char, cmd.value())?,
        Slot::Pointer(ptr) => set_value(config, ptr.pointee(), cmd, depth + 1)?,
        Slot::Struct(strukt) => {
            if cmd.is_struct() {
                walk::walk_struct(config, strukt, depth + 1)?;
            }
        }
        Slot::Array(array) => container::set_array(config, array, cmd, depth)?,
        Slot::List(list) => container::set_list(config, list, cmd, depth)?,
        Slot::Map(map) => container::set_map(config, map, cmd, depth)?,
        Slot::Channel(chan) => {
            if cmd.primary() == Some(Keyword::Chan) {
                chan.open(cmd.number(Keyword::Chan));
            }
        }
        Slot::Any(any) => {
            let value: serde_json::Value = serde_json::from_str(cmd.value())?;
            *any = json::normalize(value);
        }
        Slot::Duration(duration) => *duration = time::parse_duration(cmd.value())?,
        Slot::Timestamp(timestamp) => {
            *timestamp = time::parse_timestamp(cmd.value(), cmd.layout())?;
        }
        Slot::RawMessage(raw) => raw.set(cmd.value()),
        Slot::Unsupported(name) => {
            return Err(FillError::unsupported(name, "no construction routine"));
        }
    }

    Ok(())
}

/// Fail once `depth` passes the configured ceiling.
pub(crate) fn enter(config: &Config, depth: usize) -> Result<()> {
    if depth > config.max_depth() {
        return Err(FillError::DepthExceeded {
            limit: config.max_depth()
        });
    }
    Ok(())
}
