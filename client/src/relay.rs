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

//! Interactive relay between a connection and a local terminal

use crate::{RelayMode, Result, Telnet, TelnetError};
use async_trait::async_trait;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

/// Written to local output when the peer ends the session.
pub const CLOSED_NOTICE: &[u8] = b"\r\n*** Connection closed by remote host ***\r\n";

/// Boxed local input source.
pub type LocalInput = Box<dyn AsyncBufRead + Send + Unpin>;

/// Boxed local output sink.
pub type LocalOutput = Box<dyn AsyncWrite + Send + Unpin>;

/// Strategy for shuttling data between a connection and local I/O.
///
/// Either side ending finishes the session: local end of input stops the relay quietly, while
/// the peer closing writes [`CLOSED_NOTICE`] first.
#[async_trait]
pub trait SessionRelay: Send + Sync {
    async fn run(&self, telnet: &mut Telnet, input: LocalInput, output: LocalOutput) -> Result<()>;
}

/// Waits on connection readiness and local input from a single task.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnifiedRelay;

/// Reads local input on a spawned task while the calling task drains the connection.
///
/// The connection side stays on the caller because the receive queues live in the borrowed
/// [`Telnet`]; the spawned side only needs a cloned [`TelnetWriter`](crate::TelnetWriter). The
/// two sides never share state: one owns the write half, the other the read half and queues.
/// Local end of input finishes the spawned task and with it the session, while a remote close
/// aborts the task.
#[derive(Debug, Default, Clone, Copy)]
pub struct SplitRelay;

pub(crate) fn for_mode(mode: RelayMode) -> Arc<dyn SessionRelay> {
    match mode {
        RelayMode::Unified => Arc::new(UnifiedRelay),
        RelayMode::Split => Arc::new(SplitRelay),
    }
}

/// Forward whatever the connection has ready. Returns false once the peer has closed.
async fn forward_remote(telnet: &mut Telnet, output: &mut LocalOutput) -> Result<bool> {
    match telnet.read_eager().await {
        Ok(text) => {
            if !text.is_empty() {
                output.write_all(&text).await?;
                output.flush().await?;
            }
            Ok(true)
        }
        Err(TelnetError::ConnectionClosed) => {
            info!("Server closed connection");
            output.write_all(CLOSED_NOTICE).await?;
            output.flush().await?;
            Ok(false)
        }
        Err(error) => Err(error),
    }
}

#[async_trait]
impl SessionRelay for UnifiedRelay {
    async fn run(
        &self,
        telnet: &mut Telnet,
        mut input: LocalInput,
        mut output: LocalOutput,
    ) -> Result<()> {
        // read_until is cancel safe: a partial line stays in `line` across iterations.
        let mut line = Vec::new();
        loop {
            tokio::select! {
                ready = telnet.wait_readable(None) => {
                    ready?;
                    if !forward_remote(telnet, &mut output).await? {
                        return Ok(());
                    }
                }
                read = input.read_until(b'\n', &mut line) => {
                    if read? == 0 {
                        if !line.is_empty() {
                            telnet.write(&line).await?;
                        }
                        debug!("local input closed");
                        return Ok(());
                    }
                    telnet.write(&line).await?;
                    line.clear();
                }
            }
        }
    }
}

#[async_trait]
impl SessionRelay for SplitRelay {
    async fn run(
        &self,
        telnet: &mut Telnet,
        mut input: LocalInput,
        mut output: LocalOutput,
    ) -> Result<()> {
        let writer = telnet.writer();
        let mut input_task = tokio::spawn(async move {
            let mut line = Vec::new();
            loop {
                line.clear();
                if input.read_until(b'\n', &mut line).await? == 0 {
                    debug!("local input closed");
                    return Ok::<(), TelnetError>(());
                }
                writer.write(&line).await?;
            }
        });

        loop {
            tokio::select! {
                joined = &mut input_task => {
                    return joined.map_err(|error| TelnetError::Transport(io::Error::other(error)))?;
                }
                ready = telnet.wait_readable(None) => {
                    let open = match ready {
                        Ok(_) => forward_remote(telnet, &mut output).await,
                        Err(error) => Err(error),
                    };
                    if !matches!(open, Ok(true)) {
                        input_task.abort();
                        return open.map(|_| ());
                    }
                }
            }
        }
    }
}

impl Telnet {
    /// Relay between this connection and the given local streams until either side ends.
    ///
    /// Local input is forwarded line by line; remote data is written to `output` as soon as
    /// it arrives. The strategy comes from [`TelnetConfig::relay_mode`](crate::TelnetConfig).
    pub async fn interact<I, O>(&mut self, input: I, output: O) -> Result<()>
    where
        I: AsyncBufRead + Send + Unpin + 'static,
        O: AsyncWrite + Send + Unpin + 'static,
    {
        let relay = self.relay();
        relay.run(self, Box::new(input), Box::new(output)).await
    }

    /// [`Telnet::interact`] over the process's standard input and output.
    pub async fn interact_stdio(&mut self) -> Result<()> {
        self.interact(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }
}
