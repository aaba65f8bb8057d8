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

//! Connection lifecycle and transport plumbing

use crate::relay::{self, SessionRelay};
use crate::{Result, TelnetConfig, TelnetError, TelnetWriter};
use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;
use telnetkit_codec::consts::TELNET_PORT;
use telnetkit_codec::{FrameProcessor, NegotiationHandler};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedReadHalf;
use tracing::{debug, info, warn};

/// A client side Telnet connection.
///
/// Received bytes pass through a [`FrameProcessor`] which strips command sequences, answers
/// option negotiation, and collects subnegotiation payloads. The read methods hand out the
/// resulting application data; see the `read_*` family and [`Telnet::expect`].
///
/// A `Telnet` may be created unconnected with [`Telnet::new`] and attached later with
/// [`Telnet::open`]. Dropping it closes the connection.
///
/// ```no_run
/// use std::time::Duration;
/// use telnetkit_client::Telnet;
///
/// # async fn demo() -> telnetkit_client::Result<()> {
/// let mut telnet = Telnet::connect("localhost", 23).await?;
/// let banner = telnet.read_until(b"login: ", Some(Duration::from_secs(5))).await?;
/// telnet.write(b"guest\r\n").await?;
/// # let _ = banner;
/// telnet.close().await;
/// # Ok(())
/// # }
/// ```
pub struct Telnet {
    config: TelnetConfig,
    host: String,
    port: u16,
    timeout: Option<Duration>,
    stream: Option<OwnedReadHalf>,
    writer: TelnetWriter,
    pub(crate) processor: FrameProcessor,
    pub(crate) eof: bool,
    receive_buffer: Vec<u8>,
    debug_level: Arc<AtomicU8>,
    relay: Arc<dyn SessionRelay>,
}

impl Telnet {
    /// Create an unconnected instance.
    pub fn new(config: TelnetConfig) -> Telnet {
        let debug_level = Arc::new(AtomicU8::new(config.debug_level));
        let mut processor = FrameProcessor::new();
        processor.set_debug_level(config.debug_level);
        Telnet {
            host: String::new(),
            port: 0,
            timeout: None,
            stream: None,
            writer: TelnetWriter::default(),
            processor,
            eof: false,
            receive_buffer: vec![0; config.receive_size.max(1)],
            debug_level,
            relay: relay::for_mode(config.relay_mode),
            config,
        }
    }

    /// Connect to `host:port` with default settings. Port 0 selects the standard Telnet port.
    pub async fn connect(host: impl Into<String>, port: u16) -> Result<Telnet> {
        Telnet::connect_with(TelnetConfig::default(), host, port).await
    }

    /// Connect to `host:port` using the given configuration.
    pub async fn connect_with(
        config: TelnetConfig,
        host: impl Into<String>,
        port: u16,
    ) -> Result<Telnet> {
        let timeout = config.connect_timeout;
        let mut telnet = Telnet::new(config);
        telnet.open(host, port, timeout).await?;
        Ok(telnet)
    }

    /// Establish the connection.
    ///
    /// Port 0 selects port 23. `timeout` bounds the connect attempt only; `None` waits for the
    /// operating system. Any previous connection is closed first and the end of file flag is
    /// cleared, then set again if the attempt fails.
    pub async fn open(
        &mut self,
        host: impl Into<String>,
        port: u16,
        timeout: Option<Duration>,
    ) -> Result<()> {
        if self.stream.is_some() {
            self.close().await;
        }
        self.eof = false;
        self.host = host.into();
        self.port = if port == 0 { TELNET_PORT } else { port };
        self.timeout = timeout;

        let address = format!("{}:{}", self.host, self.port);
        info!("Connecting to {}...", address);
        let connect = TcpStream::connect(address.as_str());
        let connected = match timeout {
            Some(limit) => match tokio::time::timeout(limit, connect).await {
                Ok(result) => result.map_err(TelnetError::from),
                Err(_) => Err(TelnetError::ConnectTimeout),
            },
            None => connect.await.map_err(TelnetError::from),
        };
        let stream = match connected {
            Ok(stream) => stream,
            Err(error) => {
                self.eof = true;
                return Err(error);
            }
        };
        info!("Connected to {}", stream.peer_addr()?);

        let (read_half, write_half) = stream.into_split();
        self.processor.set_identity(address.as_str());
        self.writer = TelnetWriter::new(write_half, &address, Arc::clone(&self.debug_level));
        self.stream = Some(read_half);
        Ok(())
    }

    /// Close the connection.
    ///
    /// Negotiation state is reset and the end of file flag set. Data already buffered stays
    /// available to the lazy reads. Closing twice is harmless.
    pub async fn close(&mut self) {
        if self.stream.take().is_some() {
            debug!(peer = %self.identity(), "closing connection");
        }
        self.writer.close().await;
        self.processor.abort_pending();
        self.eof = true;
    }

    /// Send application data. `IAC` bytes are doubled.
    pub async fn write(&self, data: &[u8]) -> Result<()> {
        self.writer.write(data).await
    }

    /// Send raw command bytes without escaping, e.g. `[IAC, NOP]`.
    pub async fn send_command(&self, bytes: &[u8]) -> Result<()> {
        self.writer.send_command(bytes).await
    }

    /// A cloneable handle for writing from another task.
    pub fn writer(&self) -> TelnetWriter {
        self.writer.clone()
    }

    /// Install a negotiation handler in place of the refusal policy.
    pub fn set_negotiation_handler(&mut self, handler: Arc<dyn NegotiationHandler>) {
        self.processor.set_handler(handler);
    }

    /// Restore the default refusal policy.
    pub fn clear_negotiation_handler(&mut self) {
        self.processor.clear_handler();
    }

    /// Set protocol trace verbosity. Above zero every send, receive, and negotiation event is
    /// logged at debug level.
    pub fn set_debug_level(&mut self, debug_level: u8) {
        self.debug_level.store(debug_level, Ordering::Relaxed);
        self.processor.set_debug_level(debug_level);
    }

    pub fn debug_level(&self) -> u8 {
        self.debug_level.load(Ordering::Relaxed)
    }

    pub fn config(&self) -> &TelnetConfig {
        &self.config
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The timeout passed to the last [`Telnet::open`].
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Address of the remote peer, if connected.
    pub fn peer_addr(&self) -> Result<SocketAddr> {
        let stream = self.stream.as_ref().ok_or(TelnetError::NotConnected)?;
        Ok(stream.peer_addr()?)
    }

    /// True once end of file has been seen or the connection closed.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// True while a socket is attached.
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    pub(crate) fn relay(&self) -> Arc<dyn SessionRelay> {
        Arc::clone(&self.relay)
    }

    fn identity(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Receive once, waiting as long as needed. At most `receive_size` bytes are taken.
    pub(crate) async fn fill(&mut self) -> Result<()> {
        let stream = self.stream.as_mut().ok_or(TelnetError::NotConnected)?;
        let count = stream.read(&mut self.receive_buffer).await?;
        self.record_received(count);
        Ok(())
    }

    /// Receive once if the transport is ready. Returns false if it would block.
    pub(crate) fn try_fill(&mut self) -> Result<bool> {
        let Some(stream) = self.stream.as_ref() else {
            return Ok(false);
        };
        match stream.try_read(&mut self.receive_buffer) {
            Ok(count) => {
                self.record_received(count);
                Ok(true)
            }
            Err(error) if error.kind() == io::ErrorKind::WouldBlock => Ok(false),
            Err(error) => Err(error.into()),
        }
    }

    /// Wait until the transport reports readiness. Returns false if `limit` elapsed first.
    pub(crate) async fn wait_readable(&self, limit: Option<Duration>) -> Result<bool> {
        let stream = self.stream.as_ref().ok_or(TelnetError::NotConnected)?;
        match limit {
            None => {
                stream.readable().await?;
                Ok(true)
            }
            Some(limit) => match tokio::time::timeout(limit, stream.readable()).await {
                Ok(ready) => {
                    ready?;
                    Ok(true)
                }
                Err(_) => Ok(false),
            },
        }
    }

    fn record_received(&mut self, count: usize) {
        let data = &self.receive_buffer[..count];
        if self.debug_level() > 0 {
            debug!(host = %self.host, port = self.port, "recv {}", data.escape_ascii());
        }
        self.eof = count == 0;
        self.processor.feed(data);
    }

    /// Run the frame processor over everything received and send queued replies.
    pub(crate) async fn process_raw(&mut self) {
        self.processor.process();
        if self.eof {
            self.processor.abort_pending();
        }
        let replies = self.processor.take_replies();
        if !replies.is_empty() {
            if let Err(error) = self.writer.send_raw(&replies).await {
                warn!(peer = %self.identity(), %error, "failed to send negotiation reply");
            }
        }
    }
}

impl fmt::Debug for Telnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Telnet")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("eof", &self.eof)
            .field("open", &self.is_open())
            .field("processor", &self.processor)
            .finish_non_exhaustive()
    }
}
