// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Recursive struct walker.

use log::trace;

use crate::{
    command::Command,
    config::Config,
    error::{FillError, Result},
    setter::{enter, set_value},
    shape::{Fill, Slot, StructSlot}
};

/// Fill the struct behind `target`.
///
/// Pointer chains are followed, allocating zero values where null, until a
/// struct is reached.
///
/// # Errors
///
/// [`FillError::UnsupportedType`] when the chain ends in anything but a
/// struct, and every error of [`walk_struct`].
pub fn walk(config: &Config, target: &mut dyn Fill, depth: usize) -> Result<()> {
    enter(config, depth)?;

    match target.slot() {
        Slot::Pointer(ptr) => walk(config, ptr.pointee(), depth + 1),
        Slot::Struct(strukt) => walk_struct(config, strukt, depth),
        other => Err(FillError::unsupported(
            other.kind(),
            "construction target must be a struct"
        ))
    }
}

/// Fill every field of `target` that carries a directive under the
/// configured tag.
///
/// All directives of the struct are resolved and parsed before the first
/// field is touched, so a malformed directive or a private field leaves the
/// struct unchanged. Fields are then set in declaration order and the first
/// failure aborts the walk.
///
/// # Errors
///
/// - [`FillError::UnsettableField`] for a private field with a directive
/// - [`FillError::MalformedDirective`] for an ambiguous directive
/// - any error of [`set_value`] for the field values
pub fn walk_struct(config: &Config, target: &mut dyn StructSlot, depth: usize) -> Result<()> {
    enter(config, depth)?;

    let owner = target.type_name();
    let mut plan = Vec::new();

    for (index, info) in target.fields().iter().enumerate() {
        let raw = info.directive(config.tag());
        if raw.is_empty() {
            continue;
        }
        if !info.settable {
            return Err(FillError::UnsettableField {
                owner,
                field: info.name
            });
        }
        plan.push((index, info.name, Command::parse(raw)?));
    }

    for (index, name, cmd) in plan {
        let Some(field) = target.field(index) else {
            continue;
        };
        trace!("{owner}.{name} <- `{cmd}`");
        set_value(config, field, &cmd, depth + 1)?;
    }
    Ok(())
}
