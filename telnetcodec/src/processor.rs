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

use crate::handler::describe_option;
use crate::{NegotiationContext, NegotiationHandler, RefuseAll, TelnetCommand, consts};
use bytes::{Bytes, BytesMut};
use std::sync::Arc;
use tracing::debug;

/// Progress through a command sequence that may straddle receive boundaries.
///
/// At most two bytes (`IAC` and a negotiation verb) are ever held pending.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NegotiationState {
    /// Ordinary data.
    #[default]
    Normal,
    /// An `IAC` has been seen.
    SawCommandPrefix,
    /// `IAC` followed by `DO`, `DONT`, `WILL` or `WONT`; waiting for the option byte.
    SawTwoBytePrefix(TelnetCommand),
}

/// Which queue receives ordinary data bytes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DataMode {
    /// Application data, routed to the cooked queue.
    #[default]
    Cooked,
    /// Inside `IAC SB ... IAC SE`, routed to the subnegotiation queue.
    Subnegotiation,
}

/// The Telnet receive state machine.
///
/// Bytes received from the transport are appended to the raw queue with [`feed`](Self::feed).
/// [`process`](Self::process) consumes the raw queue head first, strips command sequences, and
/// routes the remaining bytes to the cooked queue (application data) or the subnegotiation
/// queue. Replies produced by the [`NegotiationHandler`] accumulate in an outgoing queue that
/// the owner drains with [`take_replies`](Self::take_replies) and writes to the peer.
///
/// Processing never blocks and never fails: a command sequence cut short by the end of the raw
/// queue is resumed on the next call, and unrecognized commands are handed to the handler (the
/// default [`RefuseAll`] logs and ignores them).
///
/// ```
/// use telnetkit_codec::FrameProcessor;
///
/// let mut processor = FrameProcessor::new();
/// processor.feed(b"abc\xFF\xFFdef");
/// processor.process();
/// assert_eq!(&processor.take_cooked()[..], b"abc\xFFdef");
/// ```
pub struct FrameProcessor {
    raw: BytesMut,
    cooked: BytesMut,
    sb_pending: BytesMut,
    sb_data: BytesMut,
    replies: BytesMut,
    state: NegotiationState,
    mode: DataMode,
    handler: Arc<dyn NegotiationHandler>,
    identity: String,
    debug_level: u8,
}

impl FrameProcessor {
    /// Creates a processor with empty queues and the [`RefuseAll`] policy.
    pub fn new() -> FrameProcessor {
        FrameProcessor::default()
    }

    /// Replace the negotiation handler.
    pub fn set_handler(&mut self, handler: Arc<dyn NegotiationHandler>) {
        self.handler = handler;
    }

    /// Restore the default refusal policy.
    pub fn clear_handler(&mut self) {
        self.handler = Arc::new(RefuseAll);
    }

    /// Identity reported to handlers and in protocol traces, usually `host:port`.
    pub fn set_identity(&mut self, identity: impl Into<String>) {
        self.identity = identity.into();
    }

    /// Protocol traces are emitted only when the level is above zero.
    pub fn set_debug_level(&mut self, debug_level: u8) {
        self.debug_level = debug_level;
    }

    /// Current command sequence state.
    pub fn state(&self) -> NegotiationState {
        self.state
    }

    /// Current data routing mode.
    pub fn mode(&self) -> DataMode {
        self.mode
    }

    /// Append freshly received bytes to the raw queue.
    pub fn feed(&mut self, data: &[u8]) {
        self.raw.extend_from_slice(data);
    }

    /// True when no unprocessed bytes remain.
    pub fn raw_is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Consume the whole raw queue.
    pub fn process(&mut self) {
        let raw = self.raw.split();
        for &byte in raw.iter() {
            self.step(byte);
        }
    }

    fn step(&mut self, byte: u8) {
        match (self.state, byte) {
            (NegotiationState::Normal, consts::NUL | consts::XON) => {}
            (NegotiationState::Normal, consts::IAC) => {
                self.state = NegotiationState::SawCommandPrefix;
            }
            (NegotiationState::Normal, _) => self.push_data(byte),
            (
                NegotiationState::SawCommandPrefix,
                consts::DO | consts::DONT | consts::WILL | consts::WONT,
            ) => {
                self.state = NegotiationState::SawTwoBytePrefix(TelnetCommand::from_u8(byte));
            }
            (NegotiationState::SawCommandPrefix, consts::IAC) => {
                self.state = NegotiationState::Normal;
                self.push_data(consts::IAC);
            }
            (NegotiationState::SawCommandPrefix, _) => {
                self.state = NegotiationState::Normal;
                match byte {
                    consts::SB => {
                        self.mode = DataMode::Subnegotiation;
                        self.sb_pending.clear();
                        self.sb_data.clear();
                    }
                    consts::SE => {
                        self.mode = DataMode::Cooked;
                        let block = self.sb_pending.split();
                        self.sb_data.unsplit(block);
                    }
                    _ => {}
                }
                self.dispatch(TelnetCommand::from_u8(byte), consts::NOOPT);
            }
            (NegotiationState::SawTwoBytePrefix(command), option) => {
                self.state = NegotiationState::Normal;
                if self.debug_level > 0 {
                    debug!(
                        peer = %self.identity,
                        "IAC {} {} ({})",
                        command,
                        option,
                        describe_option(option)
                    );
                }
                self.dispatch(command, option);
            }
        }
    }

    fn push_data(&mut self, byte: u8) {
        match self.mode {
            DataMode::Cooked => self.cooked.extend_from_slice(&[byte]),
            DataMode::Subnegotiation => self.sb_pending.extend_from_slice(&[byte]),
        }
    }

    fn dispatch(&mut self, command: TelnetCommand, option: u8) {
        let mut ctx = NegotiationContext::new(&self.identity, &mut self.replies, &mut self.sb_data);
        self.handler.negotiate(&mut ctx, command, option);
    }

    /// Discard a partially received command sequence and leave subnegotiation mode.
    ///
    /// Called when the transport reports end of file; the truncated sequence and any
    /// unterminated subnegotiation payload are dropped rather than reported.
    pub fn abort_pending(&mut self) {
        if self.state != NegotiationState::Normal && self.debug_level > 0 {
            debug!(peer = %self.identity, "discarding truncated command sequence {:?}", self.state);
        }
        self.state = NegotiationState::Normal;
        self.mode = DataMode::Cooked;
        self.sb_pending.clear();
    }

    /// Cooked bytes available, without consuming them.
    pub fn cooked(&self) -> &[u8] {
        &self.cooked
    }

    /// Drain the whole cooked queue.
    pub fn take_cooked(&mut self) -> Bytes {
        self.cooked.split().freeze()
    }

    /// Drain the first `len` cooked bytes.
    ///
    /// # Panics
    /// Panics if `len` exceeds the number of cooked bytes available.
    pub fn take_cooked_to(&mut self, len: usize) -> Bytes {
        self.cooked.split_to(len).freeze()
    }

    /// Drain the payload of the last completed subnegotiation.
    pub fn take_sb_data(&mut self) -> Bytes {
        self.sb_data.split().freeze()
    }

    /// Drain replies queued by the negotiation handler.
    pub fn take_replies(&mut self) -> Bytes {
        self.replies.split().freeze()
    }
}

impl Default for FrameProcessor {
    fn default() -> Self {
        FrameProcessor {
            raw: BytesMut::new(),
            cooked: BytesMut::new(),
            sb_pending: BytesMut::new(),
            sb_data: BytesMut::new(),
            replies: BytesMut::new(),
            state: NegotiationState::Normal,
            mode: DataMode::Cooked,
            handler: Arc::new(RefuseAll),
            identity: String::new(),
            debug_level: 0,
        }
    }
}

impl std::fmt::Debug for FrameProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameProcessor")
            .field("raw", &self.raw.len())
            .field("cooked", &self.cooked.len())
            .field("sb_pending", &self.sb_pending.len())
            .field("sb_data", &self.sb_data.len())
            .field("replies", &self.replies.len())
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
