// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::sync::Mutex;

use tagfill::{Config, Fill, build};

#[derive(Debug, Fill)]
pub struct Document {
    #[tag(default = r#"json({"a": [1, 2]})"#, type = "{}")]
    pub body: serde_json::Value,

    #[tag(default = "7")]
    #[tag(fixture = "8")]
    pub r#type: u32,

    #[tag(skip)]
    pub lock: Mutex<u8>,

    hidden: u8,
}

fn main() {
    let doc: Document = build(&Config::new()).unwrap();
    assert_eq!(doc.body["a"][1], 2.0);
    assert_eq!(doc.r#type, 7);
    assert_eq!(doc.hidden, 0);

    let doc: Document = build(&Config::new().with_tag("fixture")).unwrap();
    assert_eq!(doc.r#type, 8);
    assert!(doc.body.is_null());
}
