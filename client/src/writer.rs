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

//! Outbound half of a connection

use crate::{Result, TelnetError};
use bytes::BytesMut;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use telnetkit_codec::IacEncoder;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;
use tokio_util::codec::Encoder;
use tracing::debug;

/// Cloneable handle to the sending side of a connection.
///
/// Every clone writes through the same socket half, so a relay task can send local input while
/// another task keeps reading. Closing the connection detaches the half from all clones at once.
#[derive(Clone)]
pub struct TelnetWriter {
    half: Arc<Mutex<Option<OwnedWriteHalf>>>,
    identity: Arc<str>,
    debug_level: Arc<AtomicU8>,
}

impl TelnetWriter {
    pub(crate) fn new(half: OwnedWriteHalf, identity: &str, debug_level: Arc<AtomicU8>) -> Self {
        Self {
            half: Arc::new(Mutex::new(Some(half))),
            identity: Arc::from(identity),
            debug_level,
        }
    }

    /// Send application data, doubling every `IAC` byte.
    pub async fn write(&self, data: &[u8]) -> Result<()> {
        let mut escaped = BytesMut::with_capacity(data.len());
        IacEncoder.encode(data, &mut escaped)?;
        if self.debug_level.load(Ordering::Relaxed) > 0 {
            debug!(peer = %self.identity, "send {}", data.escape_ascii());
        }
        self.send_raw(&escaped).await
    }

    /// Send bytes exactly as given. Used for command sequences.
    pub async fn send_command(&self, bytes: &[u8]) -> Result<()> {
        if self.debug_level.load(Ordering::Relaxed) > 0 {
            debug!(peer = %self.identity, "send command {}", bytes.escape_ascii());
        }
        self.send_raw(bytes).await
    }

    /// Whether a socket half is still attached.
    pub async fn is_open(&self) -> bool {
        self.half.lock().await.is_some()
    }

    pub(crate) async fn send_raw(&self, bytes: &[u8]) -> Result<()> {
        let mut guard = self.half.lock().await;
        let half = guard.as_mut().ok_or(TelnetError::NotConnected)?;
        half.write_all(bytes).await?;
        Ok(())
    }

    /// Detach and shut down the socket half. Idempotent.
    pub(crate) async fn close(&self) {
        if let Some(mut half) = self.half.lock().await.take() {
            // The peer may already be gone.
            let _ = half.shutdown().await;
        }
    }
}

impl Default for TelnetWriter {
    fn default() -> Self {
        Self {
            half: Arc::new(Mutex::new(None)),
            identity: Arc::from(""),
            debug_level: Arc::new(AtomicU8::new(0)),
        }
    }
}

impl std::fmt::Debug for TelnetWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelnetWriter")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
