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

//! Client configuration

use std::time::Duration;

/// Default number of bytes requested from the transport per receive.
pub const DEFAULT_RECEIVE_SIZE: usize = 50;

/// How [`interact`](crate::Telnet::interact) relays between the connection and the local
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayMode {
    /// One task waits on both the connection and local input at once.
    Unified,
    /// Local input is read on its own task while the caller's task drains the connection.
    Split,
}

impl RelayMode {
    /// The mode best suited to the host platform.
    ///
    /// Console input cannot be multiplexed with sockets on Windows, so that platform gets
    /// [`RelayMode::Split`].
    pub fn for_platform() -> RelayMode {
        if cfg!(windows) {
            RelayMode::Split
        } else {
            RelayMode::Unified
        }
    }
}

impl Default for RelayMode {
    fn default() -> Self {
        RelayMode::for_platform()
    }
}

/// Telnet client configuration
#[derive(Debug, Clone)]
pub struct TelnetConfig {
    /// Connection timeout (None waits for the operating system)
    pub connect_timeout: Option<Duration>,

    /// Protocol trace verbosity, 0 disables tracing
    pub debug_level: u8,

    /// Maximum bytes taken from the transport per receive
    pub receive_size: usize,

    /// Relay strategy used by `interact`
    pub relay_mode: RelayMode,
}

impl Default for TelnetConfig {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            debug_level: 0,
            receive_size: DEFAULT_RECEIVE_SIZE,
            relay_mode: RelayMode::for_platform(),
        }
    }
}

impl TelnetConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connection timeout
    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the protocol trace verbosity
    pub fn with_debug_level(mut self, debug_level: u8) -> Self {
        self.debug_level = debug_level;
        self
    }

    /// Set the receive size, clamped to at least one byte
    pub fn with_receive_size(mut self, receive_size: usize) -> Self {
        self.receive_size = receive_size.max(1);
        self
    }

    /// Set the relay strategy
    pub fn with_relay_mode(mut self, relay_mode: RelayMode) -> Self {
        self.relay_mode = relay_mode;
        self
    }
}
