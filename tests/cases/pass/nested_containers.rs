// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use tagfill::{Config, Fill, build};

#[derive(Debug, Clone, Fill)]
pub struct Worker {
    #[tag(default = "worker")]
    pub name: String,
}

#[derive(Debug, Fill)]
pub struct Pool {
    #[tag(default = "len(3),repeat(struct)")]
    pub workers: Vec<Worker>,

    #[tag(default = "repeat(struct)")]
    pub spare: [Option<Box<Worker>>; 2],

    #[tag(default = "value(struct)")]
    pub leader: Option<Box<Worker>>,

    #[tag(default = "a:1,b:2")]
    pub weights: BTreeMap<String, u32>,
}

fn main() {
    let pool: Pool = build(&Config::new()).unwrap();
    assert_eq!(pool.workers.len(), 3);
    assert!(pool.spare.iter().all(Option::is_some));
    assert_eq!(pool.leader.map(|leader| leader.name), Some("worker".to_string()));
    assert_eq!(pool.weights.get("b"), Some(&2));
}
