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

//! # Telnetkit Client
//!
//! Client side Telnet connections on Tokio, modelled on the classic `telnetlib` reading API.
//!
//! ## Features
//!
//! - **Option Negotiation** - Every option is refused unless a [`NegotiationHandler`] says otherwise
//! - **Read Strategies** - From blocking `read_all` to never-blocking `read_very_lazy`
//! - **Pattern Matching** - `read_until` on a byte string, `expect` on a list of regexes
//! - **Interactive Relay** - Connect a session to the local terminal with `interact`
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::time::Duration;
//! use telnetkit_client::{Telnet, TelnetConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TelnetConfig::new().with_connect_timeout(Some(Duration::from_secs(10)));
//!     let mut telnet = Telnet::connect_with(config, "localhost", 23).await?;
//!
//!     telnet.read_until(b"login: ", Some(Duration::from_secs(5))).await?;
//!     telnet.write(b"guest\r\n").await?;
//!     telnet.write(b"ls\r\nexit\r\n").await?;
//!
//!     let transcript = telnet.read_all().await?;
//!     println!("{}", String::from_utf8_lossy(&transcript));
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Negotiation
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use telnetkit_client::Telnet;
//! use telnetkit_client::{NegotiationContext, TelnetCommand, consts};
//!
//! # async fn example(telnet: &mut Telnet) {
//! // Accept ECHO from the server, refuse everything else.
//! telnet.set_negotiation_handler(Arc::new(
//!     |ctx: &mut NegotiationContext<'_>, command: TelnetCommand, option: u8| match command {
//!         TelnetCommand::Will if option == consts::option::ECHO => {
//!             ctx.reply(TelnetCommand::Do, option)
//!         }
//!         TelnetCommand::Will | TelnetCommand::Wont => ctx.reply(TelnetCommand::Dont, option),
//!         TelnetCommand::Do | TelnetCommand::Dont => ctx.reply(TelnetCommand::Wont, option),
//!         _ => {}
//!     },
//! ));
//! # }
//! ```

#![warn(
    clippy::cargo,
    missing_debug_implementations,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

mod config;
mod error;
mod read;
mod relay;
mod telnet;
mod writer;

pub use self::config::{DEFAULT_RECEIVE_SIZE, RelayMode, TelnetConfig};
pub use self::error::{Result, TelnetError};
pub use self::read::ExpectMatch;
pub use self::relay::{CLOSED_NOTICE, LocalInput, LocalOutput, SessionRelay, SplitRelay, UnifiedRelay};
pub use self::telnet::Telnet;
pub use self::writer::TelnetWriter;

pub use regex::bytes::Regex;
pub use telnetkit_codec::{
    NegotiationContext, NegotiationHandler, RefuseAll, TelnetCommand, TelnetOption, consts,
};
