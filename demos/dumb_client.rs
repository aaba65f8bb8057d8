//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Minimal interactive Telnet client
//!
//! Connects, then relays between the terminal and the server until either side hangs up.
//! Every `-d` raises the protocol trace level by one.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example dumb_client -- -d localhost 23
//! ```

use std::time::Duration;
use telnetkit_client::{Telnet, TelnetConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut debug_level = 0u8;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "-d" {
            debug_level = debug_level.saturating_add(1);
        } else {
            positional.push(arg);
        }
    }
    let host = positional.first().map(String::as_str).unwrap_or("localhost");
    let port: u16 = match positional.get(1) {
        Some(port) => port.parse()?,
        None => 0,
    };

    let config = TelnetConfig::new()
        .with_debug_level(debug_level)
        .with_connect_timeout(Some(Duration::from_secs(10)));
    let mut telnet = Telnet::connect_with(config, host, port).await?;
    telnet.interact_stdio().await?;
    telnet.close().await;
    Ok(())
}
