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

use crate::{TelnetCommand, TelnetOption, consts};
use bytes::{BufMut, Bytes, BytesMut};
use tracing::debug;

///
/// Option-specific negotiation logic supplied by the embedding application.
///
/// The [`FrameProcessor`](crate::FrameProcessor) invokes the handler for every negotiation
/// relevant command it decodes: `DO`, `DONT`, `WILL` and `WONT` with their option byte, and
/// every other single byte command (including `SB` and `SE`) with [`consts::NOOPT`]. A handler
/// fully owns the reply policy for the events it receives; replies are queued through the
/// [`NegotiationContext`] and written to the peer once the current processing pass ends.
///
/// Closures with the matching signature implement this trait, so a handler can be registered
/// without declaring a type:
///
/// ```
/// use std::sync::Arc;
/// use telnetkit_codec::{FrameProcessor, NegotiationContext, TelnetCommand};
///
/// let mut processor = FrameProcessor::new();
/// processor.set_handler(Arc::new(
///     |ctx: &mut NegotiationContext<'_>, command: TelnetCommand, option: u8| {
///         if command == TelnetCommand::Do {
///             ctx.reply(TelnetCommand::Will, option);
///         }
///     },
/// ));
/// ```
pub trait NegotiationHandler: Send + Sync {
    /// Handle a single decoded command.
    fn negotiate(&self, ctx: &mut NegotiationContext<'_>, command: TelnetCommand, option: u8);
}

impl<F> NegotiationHandler for F
where
    F: Fn(&mut NegotiationContext<'_>, TelnetCommand, u8) + Send + Sync,
{
    fn negotiate(&self, ctx: &mut NegotiationContext<'_>, command: TelnetCommand, option: u8) {
        self(ctx, command, option)
    }
}

/// The surface a [`NegotiationHandler`] may act on while a command is dispatched.
///
/// It can queue raw command bytes for the peer and inspect the subnegotiation queue, nothing
/// else; the socket itself is never exposed.
pub struct NegotiationContext<'a> {
    identity: &'a str,
    replies: &'a mut BytesMut,
    sb_data: &'a mut BytesMut,
}

impl<'a> NegotiationContext<'a> {
    pub(crate) fn new(
        identity: &'a str,
        replies: &'a mut BytesMut,
        sb_data: &'a mut BytesMut,
    ) -> Self {
        Self {
            identity,
            replies,
            sb_data,
        }
    }

    /// Identity of the connection the command arrived on, formatted as `host:port`.
    pub fn identity(&self) -> &str {
        self.identity
    }

    /// Queue bytes to be written to the peer verbatim. No IAC escaping is applied.
    pub fn send_command(&mut self, bytes: &[u8]) {
        self.replies.extend_from_slice(bytes);
    }

    /// Queue a three byte `IAC <command> <option>` sequence.
    pub fn reply(&mut self, command: TelnetCommand, option: u8) {
        self.replies.reserve(3);
        self.replies.put_u8(consts::IAC);
        self.replies.put_u8(command.to_u8());
        self.replies.put_u8(option);
    }

    /// Subnegotiation bytes received so far, without consuming them.
    pub fn sb_data(&self) -> &[u8] {
        self.sb_data
    }

    /// Drain the subnegotiation queue.
    pub fn take_sb_data(&mut self) -> Bytes {
        self.sb_data.split().freeze()
    }
}

/// Default negotiation policy: refuse every option the peer asks about.
///
/// `DO`/`DONT` are answered with `WONT`, `WILL`/`WONT` with `DONT`. Any other command is
/// logged as not recognized and otherwise ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct RefuseAll;

impl NegotiationHandler for RefuseAll {
    fn negotiate(&self, ctx: &mut NegotiationContext<'_>, command: TelnetCommand, option: u8) {
        match command {
            TelnetCommand::Do | TelnetCommand::Dont => ctx.reply(TelnetCommand::Wont, option),
            TelnetCommand::Will | TelnetCommand::Wont => ctx.reply(TelnetCommand::Dont, option),
            other => {
                debug!(
                    peer = ctx.identity(),
                    "IAC {} not recognized",
                    other.to_u8()
                );
            }
        }
    }
}

/// Renders an option byte for protocol traces.
pub(crate) fn describe_option(option: u8) -> TelnetOption {
    TelnetOption::from_u8(option)
}

#[cfg(test)]
mod tests {
    use super::{NegotiationContext, NegotiationHandler, RefuseAll};
    use crate::{TelnetCommand, consts};
    use bytes::BytesMut;

    fn run(handler: &dyn NegotiationHandler, command: TelnetCommand, option: u8) -> BytesMut {
        let mut replies = BytesMut::new();
        let mut sb_data = BytesMut::new();
        let mut ctx = NegotiationContext::new("localhost:23", &mut replies, &mut sb_data);
        handler.negotiate(&mut ctx, command, option);
        replies
    }

    #[test]
    fn refuse_all_answers_do_with_wont() {
        let replies = run(&RefuseAll, TelnetCommand::Do, consts::option::ECHO);
        assert_eq!(&replies[..], &[consts::IAC, consts::WONT, consts::option::ECHO]);
    }

    #[test]
    fn refuse_all_answers_will_with_dont() {
        let replies = run(&RefuseAll, TelnetCommand::Will, consts::option::NAWS);
        assert_eq!(&replies[..], &[consts::IAC, consts::DONT, consts::option::NAWS]);
    }

    #[test]
    fn refuse_all_ignores_single_byte_commands() {
        let replies = run(&RefuseAll, TelnetCommand::NoOperation, consts::NOOPT);
        assert!(replies.is_empty());
    }

    #[test]
    fn context_exposes_subnegotiation_queue() {
        let mut replies = BytesMut::new();
        let mut sb_data = BytesMut::from(&b"\x18\x00xterm"[..]);
        let mut ctx = NegotiationContext::new("localhost:23", &mut replies, &mut sb_data);
        assert_eq!(ctx.sb_data(), b"\x18\x00xterm");
        assert_eq!(&ctx.take_sb_data()[..], b"\x18\x00xterm");
        assert!(ctx.sb_data().is_empty());
        ctx.send_command(&[consts::IAC, consts::NOP]);
        assert_eq!(&replies[..], &[consts::IAC, consts::NOP]);
    }
}
