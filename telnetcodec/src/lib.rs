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

//! # Telnetkit Protocol Codec
//!
//! Sans-I/O building blocks for the client side of the Telnet protocol (RFC 854). Nothing in
//! this crate touches a socket: bytes received from the transport are fed in, and the crate
//! hands back application data, subnegotiation payloads, and the negotiation replies that must
//! be written back to the peer.
//!
//! ## Core Components
//!
//! ### [`FrameProcessor`]
//!
//! The receive state machine. It owns four queues:
//!
//! - **raw**: bytes received but not yet interpreted
//! - **cooked**: application data with every command sequence removed
//! - **subnegotiation**: the payload between `IAC SB` and `IAC SE`
//! - **replies**: command bytes queued by the negotiation handler
//!
//! Command sequences may straddle receive boundaries; at most two pending bytes of state are
//! kept between calls.
//!
//! ### [`NegotiationHandler`]
//!
//! The extension point for option specific logic. The default, [`RefuseAll`], answers every
//! `DO`/`DONT` with `WONT` and every `WILL`/`WONT` with `DONT`, so a peer can never switch an
//! option on behind the application's back.
//!
//! ### [`IacEncoder`]
//!
//! A `tokio_util` encoder that doubles `IAC` bytes in outbound data.
//!
//! ## Usage Example
//!
//! ```rust
//! use telnetkit_codec::{FrameProcessor, consts};
//!
//! let mut processor = FrameProcessor::new();
//! processor.feed(b"Login:\xFF\xFD\x18 ");
//! processor.process();
//!
//! assert_eq!(&processor.take_cooked()[..], b"Login: ");
//! assert_eq!(
//!     &processor.take_replies()[..],
//!     &[consts::IAC, consts::WONT, consts::option::TTYPE]
//! );
//! ```
//!
//! ## Related RFCs
//!
//! - RFC 854: Telnet Protocol Specification
//! - RFC 855: Telnet Option Specifications
//! - RFC 861: Telnet Extended Options: List Option

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

mod command;
pub mod consts;
mod encoder;
mod handler;
mod options;
mod processor;

pub use self::command::TelnetCommand;
pub use self::encoder::{IacEncoder, escape_iac};
pub use self::handler::{NegotiationContext, NegotiationHandler, RefuseAll};
pub use self::options::TelnetOption;
pub use self::processor::{DataMode, FrameProcessor, NegotiationState};
