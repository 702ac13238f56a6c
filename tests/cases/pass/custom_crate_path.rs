// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod reexport {
    pub use tagfill::*;
}

use reexport::{Config, build};

#[derive(Debug, reexport::Fill)]
#[fill(crate = "crate::reexport")]
pub struct Settings {
    #[tag(default = "4")]
    pub threads: usize,
}

fn main() {
    let settings: Settings = build(&Config::new()).unwrap();
    assert_eq!(settings.threads, 4);
}
