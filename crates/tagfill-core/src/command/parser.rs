// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Directive parsing.

use std::collections::BTreeMap;

use super::types::{Command, Keyword};
use crate::error::{FillError, Result};

impl Command {
    /// Parse a raw directive.
    ///
    /// # Syntax Examples
    ///
    /// ```text
    /// true                                   // literal value
    /// value(5h30m15s)                        // explicit value
    /// value(2024-12-09 02:20:35),layout(DateTime)
    /// json(["1", "2", "3"])                  // JSON payload, brackets balanced
    /// len(5),cap(10),repeat(1)               // sized container, repeated element
    /// repeat(struct)                         // every element walked as a struct
    /// chan(5)                                // channel with capacity 5
    /// chan                                   // rendezvous channel
    /// ```
    ///
    /// Clauses are found anywhere in the text: separators, unknown
    /// `name(..)` clauses and other stray text between them are skipped, and
    /// double-quoted strings outside a clause are never searched. A directive
    /// without a single recognized clause is a literal whose value is the
    /// whole text.
    ///
    /// # Errors
    ///
    /// [`FillError::MalformedDirective`] when two primary instructions are
    /// present or a keyword repeats.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self::default());
        }

        let clauses = scan_clauses(raw);
        if clauses.is_empty() {
            return Ok(Self::literal(raw));
        }

        let mut cmd = Self {
            raw:          raw.to_owned(),
            instructions: BTreeMap::new(),
            primary:      None,
            literal:      false
        };

        for (keyword, arg) in clauses {
            if cmd.instructions.contains_key(&keyword) {
                return Err(FillError::malformed(
                    raw,
                    format!("`{keyword}` appears more than once")
                ));
            }

            if keyword.is_primary() {
                if let Some(existing) = cmd.primary {
                    return Err(FillError::malformed(
                        raw,
                        format!("more than one primary instruction (`{existing}` and `{keyword}`)")
                    ));
                }
                cmd.primary = Some(keyword);
            }

            cmd.instructions.insert(keyword, arg.to_owned());
        }

        Ok(cmd)
    }
}

/// Recognized keyword clauses of `raw`, in order of appearance.
///
/// A clause is `keyword(argument)` with a balanced argument, or a bare
/// `chan` delimited by commas, whitespace or the ends of the text. Unknown
/// `name(..)` clauses are skipped whole, so keywords inside their arguments
/// do not count.
fn scan_clauses(raw: &str) -> Vec<(Keyword, &str)> {
    let mut clauses = Vec::new();
    let mut index = 0;

    while let Some(ch) = raw[index..].chars().next() {
        if ch == '"' {
            let body = &raw[index + 1..];
            index += 1 + closing_quote(body).map_or(body.len(), |close| close + 1);
            continue;
        }
        if !is_word(ch) {
            index += ch.len_utf8();
            continue;
        }

        let start = index;
        index += raw[start..]
            .find(|ch: char| !is_word(ch))
            .unwrap_or(raw.len() - start);
        let keyword = Keyword::from_name(&raw[start..index]);

        if let Some(inner) = raw[index..].strip_prefix('(') {
            if let Some(close) = closing_paren(inner) {
                if let Some(keyword) = keyword {
                    clauses.push((keyword, &inner[..close]));
                }
                index += close + 2;
            }
        } else if let Some(keyword) = keyword
            && keyword.allows_bare()
            && stands_alone(raw, start, index)
        {
            clauses.push((keyword, ""));
        }
    }

    clauses
}

fn is_word(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn stands_alone(raw: &str, start: usize, end: usize) -> bool {
    let delimiter = |ch: char| ch == ',' || ch.is_whitespace();
    raw[..start].chars().next_back().is_none_or(delimiter)
        && raw[end..].chars().next().is_none_or(delimiter)
}

/// Byte offset of the `"` closing a string whose body starts at `body`.
fn closing_quote(body: &str) -> Option<usize> {
    let mut escaped = false;
    for (index, ch) in body.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(index),
            _ => {}
        }
    }
    None
}

/// Byte offset of the `)` that closes an argument starting right after `(`.
///
/// Brackets of all three kinds nest; JSON string literals are skipped so
/// that brackets inside them do not count.
fn closing_paren(arg: &str) -> Option<usize> {
    let mut open = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in arg.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '(' | '[' | '{' => open.push(ch),
            ')' if open.is_empty() => return Some(index),
            ')' | ']' | '}' => {
                let expected = match open.pop()? {
                    '(' => ')',
                    '[' => ']',
                    _ => '}'
                };
                if ch != expected {
                    return None;
                }
            }
            _ => {}
        }
    }

    None
}
