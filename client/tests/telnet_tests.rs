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

//! Client behaviour against a scripted loopback server

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use telnetkit_client::{
    CLOSED_NOTICE, NegotiationContext, Regex, RelayMode, Telnet, TelnetCommand, TelnetConfig,
    TelnetError, consts,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio::time::{Instant, timeout};

const LIMIT: Duration = Duration::from_secs(5);

/// Accept a single connection and hand it to `script`.
async fn serve<F, Fut>(script: F) -> (SocketAddr, JoinHandle<()>)
where
    F: FnOnce(TcpStream) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        script(stream).await;
    });
    (addr, handle)
}

/// Keep the socket open until the client goes away.
async fn hold(mut stream: TcpStream) {
    let mut sink = Vec::new();
    let _ = timeout(LIMIT, stream.read_to_end(&mut sink)).await;
}

async fn connect(addr: SocketAddr) -> Telnet {
    Telnet::connect("127.0.0.1", addr.port()).await.unwrap()
}

#[tokio::test]
async fn test_write_escapes_iac() {
    let (addr, server) = serve(|mut stream| async move {
        let mut received = Vec::new();
        timeout(LIMIT, stream.read_to_end(&mut received))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(received, b"a\xFF\xFFb");
    })
    .await;

    let mut telnet = connect(addr).await;
    telnet.write(b"a\xFFb").await.unwrap();
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_send_command_is_not_escaped() {
    let (addr, server) = serve(|mut stream| async move {
        let mut received = Vec::new();
        timeout(LIMIT, stream.read_to_end(&mut received))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(received, [consts::IAC, consts::NOP]);
    })
    .await;

    let mut telnet = connect(addr).await;
    telnet.send_command(&[consts::IAC, consts::NOP]).await.unwrap();
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_do_is_refused_once() {
    let (addr, server) = serve(|mut stream| async move {
        stream
            .write_all(&[consts::IAC, consts::DO, consts::option::TTYPE, b'h', b'i'])
            .await
            .unwrap();
        let mut reply = [0u8; 3];
        timeout(LIMIT, stream.read_exact(&mut reply))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reply, [consts::IAC, consts::WONT, consts::option::TTYPE]);
        hold(stream).await;
    })
    .await;

    let mut telnet = connect(addr).await;
    let text = telnet.read_until(b"hi", Some(LIMIT)).await.unwrap();
    assert_eq!(&text[..], b"hi");
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_read_until_times_out_with_empty_result() {
    let (addr, server) = serve(hold).await;

    let mut telnet = connect(addr).await;
    let started = Instant::now();
    let text = telnet
        .read_until(b"never", Some(Duration::from_millis(100)))
        .await
        .unwrap();
    let elapsed = started.elapsed();
    assert!(text.is_empty());
    assert!(elapsed >= Duration::from_millis(95), "returned after {elapsed:?}");
    assert!(elapsed < Duration::from_secs(2), "returned after {elapsed:?}");
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_read_until_returns_prefix_and_keeps_rest() {
    let (addr, server) = serve(|mut stream| async move {
        stream.write_all(b"login: ").await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        stream.write_all(b"rest").await.unwrap();
        hold(stream).await;
    })
    .await;

    let mut telnet = connect(addr).await;
    let text = telnet.read_until(b"gin", Some(LIMIT)).await.unwrap();
    assert_eq!(&text[..], b"login");
    let text = telnet.read_until(b"rest", Some(LIMIT)).await.unwrap();
    assert_eq!(&text[..], b": rest");
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_expect_first_listed_pattern() {
    let (addr, server) = serve(|mut stream| async move {
        stream.write_all(b"xxbarxx").await.unwrap();
        hold(stream).await;
    })
    .await;

    let mut telnet = connect(addr).await;
    let patterns = [Regex::new("foo").unwrap(), Regex::new("bar").unwrap()];
    let found = telnet.expect(&patterns, Some(LIMIT)).await.unwrap();
    assert_eq!(found.index, Some(1));
    assert_eq!(found.span, Some(2..5));
    assert_eq!(&found.text[..], b"xxbar");
    let rest = telnet.read_until(b"xx", Some(LIMIT)).await.unwrap();
    assert_eq!(&rest[..], b"xx");
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_expect_timeout_returns_buffered_text() {
    let (addr, server) = serve(|mut stream| async move {
        stream.write_all(b"partial").await.unwrap();
        hold(stream).await;
    })
    .await;

    let mut telnet = connect(addr).await;
    let patterns = [Regex::new("zzz").unwrap()];
    let found = telnet
        .expect(&patterns, Some(Duration::from_millis(200)))
        .await
        .unwrap();
    assert!(!found.is_match());
    assert_eq!(found.span, None);
    assert_eq!(&found.text[..], b"partial");
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_expect_on_silent_close_is_connection_closed() {
    let (addr, server) = serve(|stream| async move {
        drop(stream);
    })
    .await;

    let mut telnet = connect(addr).await;
    let patterns = [Regex::new("anything").unwrap()];
    let result = telnet.expect(&patterns, Some(LIMIT)).await;
    assert!(matches!(result, Err(TelnetError::ConnectionClosed)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_read_all_strips_commands_until_eof() {
    let (addr, server) = serve(|mut stream| async move {
        stream.write_all(b"one").await.unwrap();
        stream.write_all(&[consts::IAC, consts::NOP]).await.unwrap();
        stream.write_all(b"two\x00\x11").await.unwrap();
    })
    .await;

    let mut telnet = connect(addr).await;
    let text = telnet.read_all().await.unwrap();
    assert_eq!(&text[..], b"onetwo");
    assert!(telnet.is_eof());
    assert!(telnet.read_all().await.unwrap().is_empty());
    assert!(telnet.read_some().await.unwrap().is_empty());
    assert!(matches!(
        telnet.read_very_lazy(),
        Err(TelnetError::ConnectionClosed)
    ));
    assert!(matches!(
        telnet.read_eager().await,
        Err(TelnetError::ConnectionClosed)
    ));
    assert!(matches!(
        telnet.read_lazy().await,
        Err(TelnetError::ConnectionClosed)
    ));
    server.await.unwrap();
}

#[tokio::test]
async fn test_read_some_returns_available_data() {
    let (addr, server) = serve(|mut stream| async move {
        stream.write_all(b"abc").await.unwrap();
        hold(stream).await;
    })
    .await;

    let mut telnet = connect(addr).await;
    let text = timeout(LIMIT, telnet.read_some()).await.unwrap().unwrap();
    assert!(!text.is_empty());
    assert!(b"abc".starts_with(&text));
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_eager_reads_never_wait() {
    let (addr, server) = serve(|mut stream| async move {
        stream.write_all(b"eager").await.unwrap();
        hold(stream).await;
    })
    .await;

    let mut telnet = connect(addr).await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    let text = telnet.read_very_eager().await.unwrap();
    assert_eq!(&text[..], b"eager");

    let started = Instant::now();
    assert!(telnet.read_very_eager().await.unwrap().is_empty());
    assert!(telnet.read_eager().await.unwrap().is_empty());
    assert!(telnet.read_lazy().await.unwrap().is_empty());
    assert!(telnet.read_very_lazy().unwrap().is_empty());
    assert!(started.elapsed() < Duration::from_millis(500));
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_subnegotiation_payload() {
    let (addr, server) = serve(|mut stream| async move {
        let mut frame = vec![consts::IAC, consts::SB, consts::option::TTYPE, 1];
        frame.extend_from_slice(&[consts::IAC, consts::SE]);
        frame.extend_from_slice(b"ok");
        stream.write_all(&frame).await.unwrap();
        hold(stream).await;
    })
    .await;

    let mut telnet = connect(addr).await;
    let text = telnet.read_until(b"ok", Some(LIMIT)).await.unwrap();
    assert_eq!(&text[..], b"ok");
    assert_eq!(&telnet.read_sb_data()[..], &[consts::option::TTYPE, 1]);
    assert!(telnet.read_sb_data().is_empty());
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_subnegotiation_cut_by_eof_is_discarded() {
    let (addr, server) = serve(|mut stream| async move {
        stream
            .write_all(&[consts::IAC, consts::SB, consts::option::NAWS, 0, 80])
            .await
            .unwrap();
    })
    .await;

    let mut telnet = connect(addr).await;
    assert!(telnet.read_all().await.unwrap().is_empty());
    assert!(telnet.read_sb_data().is_empty());
    server.await.unwrap();
}

#[tokio::test]
async fn test_handler_owns_reply_policy() {
    let (addr, server) = serve(|mut stream| async move {
        stream
            .write_all(&[consts::IAC, consts::WILL, consts::option::ECHO, b'.'])
            .await
            .unwrap();
        let mut reply = [0u8; 3];
        timeout(LIMIT, stream.read_exact(&mut reply))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reply, [consts::IAC, consts::DO, consts::option::ECHO]);
        hold(stream).await;
    })
    .await;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let mut telnet = connect(addr).await;
    telnet.set_negotiation_handler(Arc::new(
        move |ctx: &mut NegotiationContext<'_>, command: TelnetCommand, option: u8| {
            recorder.lock().unwrap().push((command, option));
            if command == TelnetCommand::Will {
                ctx.reply(TelnetCommand::Do, option);
            }
        },
    ));
    let text = telnet.read_until(b".", Some(LIMIT)).await.unwrap();
    assert_eq!(&text[..], b".");
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(TelnetCommand::Will, consts::option::ECHO)]
    );
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_close_keeps_buffered_data() {
    let (addr, server) = serve(|mut stream| async move {
        stream.write_all(b"keep").await.unwrap();
        hold(stream).await;
    })
    .await;

    let mut telnet = connect(addr).await;
    let text = telnet.read_until(b"k", Some(LIMIT)).await.unwrap();
    assert_eq!(&text[..], b"k");
    telnet.close().await;
    telnet.close().await;
    assert!(!telnet.is_open());
    assert!(telnet.is_eof());
    assert_eq!(&telnet.read_very_lazy().unwrap()[..], b"eep");
    assert!(matches!(
        telnet.read_very_lazy(),
        Err(TelnetError::ConnectionClosed)
    ));
    assert!(matches!(
        telnet.write(b"late").await,
        Err(TelnetError::NotConnected)
    ));
    server.await.unwrap();
}

#[tokio::test]
async fn test_reopen_clears_eof() {
    let (first, first_server) = serve(|stream| async move {
        drop(stream);
    })
    .await;
    let (second, second_server) = serve(|mut stream| async move {
        stream.write_all(b"again").await.unwrap();
    })
    .await;

    let mut telnet = connect(first).await;
    assert!(telnet.read_all().await.unwrap().is_empty());
    assert!(telnet.is_eof());

    telnet
        .open("127.0.0.1", second.port(), Some(LIMIT))
        .await
        .unwrap();
    assert!(!telnet.is_eof());
    assert_eq!(telnet.port(), second.port());
    assert_eq!(telnet.peer_addr().unwrap(), second);
    assert_eq!(&telnet.read_all().await.unwrap()[..], b"again");
    first_server.await.unwrap();
    second_server.await.unwrap();
}

#[tokio::test]
async fn test_port_zero_selects_default() {
    let mut telnet = Telnet::new(TelnetConfig::default());
    let _ = telnet
        .open("127.0.0.1", 0, Some(Duration::from_millis(200)))
        .await;
    assert_eq!(telnet.port(), consts::TELNET_PORT);
    assert_eq!(telnet.timeout(), Some(Duration::from_millis(200)));
}

#[tokio::test]
async fn test_failed_open_leaves_connection_closed() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut telnet = Telnet::new(TelnetConfig::default());
    assert!(telnet.open("127.0.0.1", port, Some(LIMIT)).await.is_err());
    assert!(!telnet.is_open());
    assert!(telnet.is_eof());
    assert!(matches!(
        telnet.read_very_lazy(),
        Err(TelnetError::ConnectionClosed)
    ));
}

#[tokio::test]
async fn test_unconnected_operations() {
    let mut telnet = Telnet::new(TelnetConfig::default());
    assert!(!telnet.is_open());
    assert!(matches!(
        telnet.write(b"x").await,
        Err(TelnetError::NotConnected)
    ));
    assert!(matches!(telnet.read_some().await, Err(TelnetError::NotConnected)));
    assert!(telnet.read_very_lazy().unwrap().is_empty());
    assert!(matches!(telnet.peer_addr(), Err(TelnetError::NotConnected)));
}

async fn relay_until_remote_close(mode: RelayMode) {
    let (addr, server) = serve(|mut stream| async move {
        let mut line = [0u8; 7];
        timeout(LIMIT, stream.read_exact(&mut line))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(&line, b"hello\r\n");
        stream.write_all(b"welcome\r\n").await.unwrap();
    })
    .await;

    let config = TelnetConfig::new().with_relay_mode(mode);
    let mut telnet = Telnet::connect_with(config, "127.0.0.1", addr.port())
        .await
        .unwrap();
    let (mut input_tx, input_rx) = tokio::io::duplex(256);
    let (output_tx, mut output_rx) = tokio::io::duplex(4096);
    input_tx.write_all(b"hello\r\n").await.unwrap();

    timeout(LIMIT, telnet.interact(BufReader::new(input_rx), output_tx))
        .await
        .unwrap()
        .unwrap();

    let mut output = Vec::new();
    output_rx.read_to_end(&mut output).await.unwrap();
    let mut expected = b"welcome\r\n".to_vec();
    expected.extend_from_slice(CLOSED_NOTICE);
    assert_eq!(output, expected);
    drop(input_tx);
    server.await.unwrap();
}

async fn relay_until_local_eof(mode: RelayMode) {
    let (addr, server) = serve(|mut stream| async move {
        let mut received = Vec::new();
        timeout(LIMIT, stream.read_to_end(&mut received))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(received, b"bye\n\xFF\xFF\n");
    })
    .await;

    let config = TelnetConfig::new().with_relay_mode(mode);
    let mut telnet = Telnet::connect_with(config, "127.0.0.1", addr.port())
        .await
        .unwrap();
    let (output_tx, _output_rx) = tokio::io::duplex(4096);
    timeout(LIMIT, telnet.interact(&b"bye\n\xFF\n"[..], output_tx))
        .await
        .unwrap()
        .unwrap();
    telnet.close().await;
    server.await.unwrap();
}

#[tokio::test]
async fn test_unified_relay_remote_close() {
    relay_until_remote_close(RelayMode::Unified).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_split_relay_remote_close() {
    relay_until_remote_close(RelayMode::Split).await;
}

#[tokio::test]
async fn test_unified_relay_local_eof() {
    relay_until_local_eof(RelayMode::Unified).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_split_relay_local_eof() {
    relay_until_local_eof(RelayMode::Split).await;
}
