// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scalar literals.

use std::{fmt::Display, str::FromStr};

use num_complex::Complex;

use crate::{
    command::{Command, Keyword},
    error::{FillError, Result},
    shape::{ComplexSlot, FloatSlot, IntSlot, ShapeKind, UintSlot}
};

/// Boolean literal spellings: `1 t T TRUE true True` and their negations.
pub(super) fn parse_bool(input: &str) -> Result<bool> {
    match input {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(FillError::parse(ShapeKind::Bool, input, "not a boolean literal"))
    }
}

fn parse_number<N>(shape: ShapeKind, input: &str) -> Result<N>
where
    N: FromStr,
    N::Err: Display
{
    input.parse().map_err(|err| FillError::parse(shape, input, err))
}

/// Float at the slot's width; results that overflow to infinity fail unless
/// the input spells an infinity or NaN.
fn parse_float<F>(shape: ShapeKind, input: &str) -> Result<F>
where
    F: FromStr + Copy + Into<f64>,
    F::Err: Display
{
    let n: F = parse_number(shape, input)?;
    let spelled = input.to_ascii_lowercase();
    if !n.into().is_finite() && !spelled.contains("inf") && !spelled.contains("nan") {
        return Err(FillError::parse(shape, input, "value out of range"));
    }
    Ok(n)
}

/// Signed integer at the slot's width, or the code point of a `rune(..)` on
/// an `i32`.
pub(super) fn set_int(slot: IntSlot<'_>, cmd: &Command) -> Result<()> {
    let input = cmd.value();
    let rune = cmd.primary() == Some(Keyword::Rune);

    match slot {
        IntSlot::I32(n) if rune => *n = single_char(ShapeKind::I32, input)? as i32,
        IntSlot::I8(n) => *n = parse_number(ShapeKind::I8, input)?,
        IntSlot::I16(n) => *n = parse_number(ShapeKind::I16, input)?,
        IntSlot::I32(n) => *n = parse_number(ShapeKind::I32, input)?,
        IntSlot::I64(n) => *n = parse_number(ShapeKind::I64, input)?,
        IntSlot::Isize(n) => *n = parse_number(ShapeKind::Isize, input)?
    }
    Ok(())
}

/// Unsigned integer at the slot's width, the byte of a `byte(..)` on a `u8`,
/// or the code point of a `rune(..)` on a `u32`.
pub(super) fn set_uint(slot: UintSlot<'_>, cmd: &Command) -> Result<()> {
    let input = cmd.value();
    let primary = cmd.primary();

    match slot {
        UintSlot::U8(n) if primary == Some(Keyword::Byte) => *n = single_byte(input)?,
        UintSlot::U32(n) if primary == Some(Keyword::Rune) => {
            *n = u32::from(single_char(ShapeKind::U32, input)?);
        }
        UintSlot::U8(n) => *n = parse_number(ShapeKind::U8, input)?,
        UintSlot::U16(n) => *n = parse_number(ShapeKind::U16, input)?,
        UintSlot::U32(n) => *n = parse_number(ShapeKind::U32, input)?,
        UintSlot::U64(n) => *n = parse_number(ShapeKind::U64, input)?,
        UintSlot::Usize(n) => *n = parse_number(ShapeKind::Usize, input)?
    }
    Ok(())
}

pub(super) fn set_float(slot: FloatSlot<'_>, input: &str) -> Result<()> {
    match slot {
        FloatSlot::F32(n) => *n = parse_float(ShapeKind::F32, input)?,
        FloatSlot::F64(n) => *n = parse_float(ShapeKind::F64, input)?
    }
    Ok(())
}

pub(super) fn set_complex(slot: ComplexSlot<'_>, input: &str) -> Result<()> {
    match slot {
        ComplexSlot::C64(n) => {
            let (re, im) = parse_complex(ShapeKind::Complex64, input)?;
            *n = Complex::new(re, im);
        }
        ComplexSlot::C128(n) => {
            let (re, im) = parse_complex(ShapeKind::Complex128, input)?;
            *n = Complex::new(re, im);
        }
    }
    Ok(())
}

/// Parse `a+bi`, `a-bi`, `bi` or `a`, optionally wrapped in parentheses.
///
/// A bare sign before `i` stands for a unit imaginary part (`1+i`). Both
/// parts are parsed at the component width `F`.
fn parse_complex<F>(shape: ShapeKind, input: &str) -> Result<(F, F)>
where
    F: FromStr + Copy + Into<f64> + From<i8>,
    F::Err: Display
{
    let text = input
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(input);

    let Some(body) = text.strip_suffix('i') else {
        return Ok((parse_float(shape, text)?, F::from(0)));
    };

    let split = body
        .char_indices()
        .rev()
        .find(|&(index, ch)| {
            matches!(ch, '+' | '-')
                && index > 0
                && !matches!(body.as_bytes()[index - 1], b'e' | b'E')
        })
        .map(|(index, _)| index);

    let (re, im) = match split {
        Some(index) => (&body[..index], &body[index..]),
        None => ("", body)
    };

    let re = if re.is_empty() {
        F::from(0)
    } else {
        parse_float(shape, re)?
    };
    let im = match im {
        "" => return Err(FillError::parse(shape, input, "missing imaginary part")),
        "+" => F::from(1),
        "-" => F::from(-1),
        other => parse_float(shape, other)?
    };

    Ok((re, im))
}

/// The only character of `input`.
pub(crate) fn single_char(shape: ShapeKind, input: &str) -> Result<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(FillError::Validation {
            shape,
            expected: "character",
            input: input.to_owned()
        })
    }
}

/// The only byte of `input`.
pub(super) fn single_byte(input: &str) -> Result<u8> {
    match input.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(FillError::Validation {
            shape:    ShapeKind::U8,
            expected: "byte",
            input:    input.to_owned()
        })
    }
}
