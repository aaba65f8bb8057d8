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

//! Client error types

use std::io;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum TelnetError {
    /// End of stream reached with no buffered data left to return
    #[error("telnet connection closed")]
    ConnectionClosed,

    /// Operation needs an open connection
    #[error("not connected")]
    NotConnected,

    /// The connect attempt did not finish within its timeout
    #[error("connection timed out")]
    ConnectTimeout,

    /// Transport failure reported by the operating system
    #[error("transport error: {0}")]
    Transport(#[from] io::Error),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, TelnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TelnetError::ConnectionClosed.to_string(), "telnet connection closed");
        assert_eq!(TelnetError::NotConnected.to_string(), "not connected");
        let error = TelnetError::from(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
        assert_eq!(error.to_string(), "transport error: reset");
    }
}
