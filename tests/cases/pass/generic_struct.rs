// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tagfill::{Config, Fill, build};

#[derive(Debug, Fill)]
pub struct Pair<K, V>
where
    K: Clone,
{
    #[tag(default = "1")]
    pub key: K,

    #[tag(default = "len(2),repeat(2)")]
    pub values: Vec<V>,
}

fn main() {
    let pair: Pair<u8, String> = build(&Config::new()).unwrap();
    assert_eq!(pair.key, 1);
    assert_eq!(pair.values, vec!["2", "2"]);
}
