#![allow(dead_code)]

use rask_relay::forwarder::ForwardPolicy;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// Accepts connections one at a time and sends each connection's full
/// payload down the channel.
pub async fn spawn_line_sink() -> (SocketAddr, mpsc::UnboundedReceiver<Vec<u8>>) {
    spawn_line_sink_on(0).await
}

/// Same as `spawn_line_sink`, on a fixed loopback port.
pub async fn spawn_line_sink_on(port: u16) -> (SocketAddr, mpsc::UnboundedReceiver<Vec<u8>>) {
    let listener = TcpListener::bind(("127.0.0.1", port)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = Vec::new();
            if socket.read_to_end(&mut buf).await.is_ok() && tx.send(buf).is_err() {
                break;
            }
        }
    });

    (addr, rx)
}

/// A loopback port with nothing listening on it.
pub fn refused_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

pub fn fast_policy() -> ForwardPolicy {
    ForwardPolicy {
        max_attempts: 3,
        retry_delay: Duration::from_millis(50),
        socket_timeout: Duration::from_secs(2),
    }
}

pub async fn recv_payload(rx: &mut mpsc::UnboundedReceiver<Vec<u8>>) -> String {
    let payload = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for forwarded payload")
        .expect("sink closed");
    String::from_utf8(payload).unwrap()
}
