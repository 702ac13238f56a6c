// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tagfill::{Config, Fill, build};

#[derive(Debug, Fill)]
pub struct Server {
    #[tag(default = "localhost")]
    pub host: String,

    #[tag(default = "8080")]
    pub port: u16,

    #[tag(default = "true")]
    pub tls: bool,

    pub note: String,
}

fn main() {
    let server: Server = build(&Config::new()).unwrap();
    assert_eq!(server.host, "localhost");
    assert_eq!(server.port, 8080);
    assert!(server.tls);
    assert!(server.note.is_empty());
}
