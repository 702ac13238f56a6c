// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hand-written struct fixtures for unit tests.
//!
//! These mirror what `#[derive(Fill)]` generates.

use crate::shape::{FieldInfo, Fill, Slot, StructSlot};

#[derive(Debug, Clone, PartialEq)]
pub struct Inner {
    pub name:  String,
    pub count: i32
}

impl Fill for Inner {
    fn zero() -> Self {
        Self {
            name:  String::new(),
            count: 0
        }
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Struct(self)
    }
}

impl StructSlot for Inner {
    fn type_name(&self) -> &'static str {
        "Inner"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        const FIELDS: &[FieldInfo] = &[
            FieldInfo {
                name:     "name",
                settable: true,
                tags:     &[("default", "inner"), ("json", "title")]
            },
            FieldInfo {
                name:     "count",
                settable: true,
                tags:     &[("default", "7"), ("fixture", "9")]
            }
        ];
        FIELDS
    }

    fn field(&mut self, index: usize) -> Option<&mut dyn Fill> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.count),
            _ => None
        }
    }
}

/// First field valid, second field carries `directive` under `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair<const PRIVATE: bool> {
    pub label:  String,
    pub second: String
}

impl<const PRIVATE: bool> Fill for Pair<PRIVATE> {
    fn zero() -> Self {
        Self {
            label:  String::new(),
            second: String::new()
        }
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Struct(self)
    }
}

impl<const PRIVATE: bool> StructSlot for Pair<PRIVATE> {
    fn type_name(&self) -> &'static str {
        "Pair"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        if PRIVATE {
            &[
                FieldInfo {
                    name:     "label",
                    settable: true,
                    tags:     &[("default", "set")]
                },
                FieldInfo {
                    name:     "second",
                    settable: false,
                    tags:     &[("default", "hidden")]
                }
            ]
        } else {
            &[
                FieldInfo {
                    name:     "label",
                    settable: true,
                    tags:     &[("default", "set")]
                },
                FieldInfo {
                    name:     "second",
                    settable: true,
                    tags:     &[("default", "value(a),json([1])")]
                }
            ]
        }
    }

    fn field(&mut self, index: usize) -> Option<&mut dyn Fill> {
        match index {
            0 => Some(&mut self.label),
            1 => Some(&mut self.second),
            _ => None
        }
    }
}

/// Self-referential list node that recurses forever under `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub next: Option<Box<Node>>
}

impl Fill for Node {
    fn zero() -> Self {
        Self {
            next: None
        }
    }

    fn slot(&mut self) -> Slot<'_> {
        Slot::Struct(self)
    }
}

impl StructSlot for Node {
    fn type_name(&self) -> &'static str {
        "Node"
    }

    fn fields(&self) -> &'static [FieldInfo] {
        &[FieldInfo {
            name:     "next",
            settable: true,
            tags:     &[("default", "value(struct)")]
        }]
    }

    fn field(&mut self, index: usize) -> Option<&mut dyn Fill> {
        match index {
            0 => Some(&mut self.next),
            _ => None
        }
    }
}
