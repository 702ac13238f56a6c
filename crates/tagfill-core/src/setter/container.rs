// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Arrays, slices and maps.

use super::set_value;
use crate::{
    command::{Command, Keyword},
    config::Config,
    error::{FillError, Result},
    shape::{ArraySlot, Fill, IntSlot, ListSlot, MapSlot, ShapeKind, Slot, UintSlot}
};

/// `repeat(d)`: every slot is reset, then built from directive `d` on its
/// own. Slots never share state, so `repeat(chan(1))` opens one channel per
/// slot.
pub(super) fn set_array(
    config: &Config,
    array: &mut dyn ArraySlot,
    cmd: &Command,
    depth: usize
) -> Result<()> {
    if cmd.primary() != Some(Keyword::Repeat) {
        return Ok(());
    }

    let element = Command::parse(cmd.value())?;
    array.clear();
    for index in 0..array.len() {
        if let Some(slot) = array.element(index) {
            set_value(config, slot, &element, depth + 1)?;
        }
    }
    Ok(())
}

/// Text-derived lists for `rune(..)`/`byte(..)`, otherwise `len` zero
/// elements in a buffer of `cap`, each built from the `repeat` directive.
pub(super) fn set_list(
    config: &Config,
    list: &mut dyn ListSlot,
    cmd: &Command,
    depth: usize
) -> Result<()> {
    let element_kind = list.element_kind();

    match cmd.primary() {
        Some(Keyword::Rune) => return fill_runes(list, element_kind, cmd),
        Some(Keyword::Byte) => return fill_bytes(list, element_kind, cmd),
        None if cmd.is_literal() && element_kind == ShapeKind::Char => {
            return fill_runes(list, element_kind, cmd);
        }
        None if cmd.is_literal() && element_kind == ShapeKind::U8 => {
            return fill_bytes(list, element_kind, cmd);
        }
        _ => {}
    }

    let element = match cmd.primary() {
        Some(Keyword::Repeat) => Command::parse(cmd.value())?,
        _ => Command::default()
    };

    list.reset(cmd.len(), cmd.cap());
    for index in 0..cmd.len() {
        if let Some(slot) = list.element(index) {
            set_value(config, slot, &element, depth + 1)?;
        }
    }
    Ok(())
}

fn fill_runes(list: &mut dyn ListSlot, element_kind: ShapeKind, cmd: &Command) -> Result<()> {
    if !matches!(element_kind, ShapeKind::Char | ShapeKind::I32 | ShapeKind::U32) {
        return Err(FillError::unsupported(
            element_kind,
            "rune sequences need char, i32 or u32 elements"
        ));
    }

    let runes: Vec<char> = cmd.value().chars().collect();
    list.reset(runes.len(), cmd.cap().max(runes.len()));
    for (index, rune) in runes.into_iter().enumerate() {
        let Some(element) = list.element(index) else {
            continue;
        };
        match element.slot() {
            Slot::Char(ch) => *ch = rune,
            Slot::Int(IntSlot::I32(n)) => *n = rune as i32,
            Slot::Uint(UintSlot::U32(n)) => *n = u32::from(rune),
            _ => {}
        }
    }
    Ok(())
}

fn fill_bytes(list: &mut dyn ListSlot, element_kind: ShapeKind, cmd: &Command) -> Result<()> {
    if element_kind != ShapeKind::U8 {
        return Err(FillError::unsupported(element_kind, "byte sequences need u8 elements"));
    }

    let bytes = cmd.value().as_bytes();
    list.reset(bytes.len(), cmd.cap().max(bytes.len()));
    for (index, byte) in bytes.iter().enumerate() {
        if let Some(element) = list.element(index)
            && let Slot::Uint(UintSlot::U8(n)) = element.slot()
        {
            *n = *byte;
        }
    }
    Ok(())
}

/// Comma-separated `key:value` pairs, each side built as a literal directive.
///
/// The map is replaced by a fresh one sized for `len`. Pairs without a `:` are
/// skipped; a failing key or value aborts the whole map.
pub(super) fn set_map(
    config: &Config,
    map: &mut dyn MapSlot,
    cmd: &Command,
    depth: usize
) -> Result<()> {
    map.reset(cmd.len());

    for pair in cmd.value().split(',') {
        let Some((key, value)) = pair.split_once(':') else {
            continue;
        };
        let key = Command::literal(key.trim());
        let value = Command::literal(value.trim());

        map.insert_with(&mut |key_slot: &mut dyn Fill, value_slot: &mut dyn Fill| {
            set_value(config, key_slot, &key, depth + 1)?;
            set_value(config, value_slot, &value, depth + 1)
        })?;
    }
    Ok(())
}
