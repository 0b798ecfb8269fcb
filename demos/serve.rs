//! Demo echo server
//!
//! Answers every request with a JSON body containing the curl command that
//! reproduces it, and logs the same command:
//!
//! ```bash
//! cargo run --example serve
//! curl -X POST -d 'age=10&name=Hudson' -H 'API_KEY: 123' http://127.0.0.1:8888/cats
//! # {"curl":"curl -X 'POST' -d 'age=10&name=Hudson' -H 'Api_key: 123' ... --compressed"}
//! ```

use std::net::SocketAddr;

use http::Request;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let addr: SocketAddr = ([127, 0, 0, 1], 8888).into();
    let listener = TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, peer_addr).await {
                        error!("connection error from {}: {}", peer_addr, e);
                    }
                });
            }
            Err(e) => error!("accept error: {}", e),
        }
    }
}

/// Handle a single connection
async fn handle_connection(mut stream: TcpStream, peer_addr: SocketAddr) -> std::io::Result<()> {
    let mut buf = vec![0u8; 8192];
    let n = stream.read(&mut buf).await?;
    if n == 0 {
        return Ok(());
    }

    let Some(request) = parse_request(&buf[..n]) else {
        stream
            .write_all(b"HTTP/1.1 400 Bad Request\r\ncontent-length: 0\r\n\r\n")
            .await?;
        return Ok(());
    };

    let body = match recurl::curl_command(&request) {
        Ok(cmd) => {
            info!("{} -> {}", peer_addr, cmd);
            serde_json::json!({ "curl": cmd.to_string() }).to_string()
        }
        Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
    };

    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{}",
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.flush().await
}

/// Parse the request head out of the read buffer.
///
/// The reproduction URI is rebuilt from the Host header and the
/// request-line path; requests without a Host header are rejected.
fn parse_request(data: &[u8]) -> Option<Request<Vec<u8>>> {
    let text = String::from_utf8_lossy(data);
    let (head, body) = match text.split_once("\r\n\r\n") {
        Some((head, body)) => (head, body),
        None => (text.as_ref(), ""),
    };

    let mut lines = head.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?;
    let path = parts.next()?;

    let mut builder = Request::builder().method(method);
    let mut host = None;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let (name, value) = (name.trim(), value.trim());
        if name.eq_ignore_ascii_case("host") {
            host = Some(value.to_string());
        }
        builder = builder.header(name, value);
    }

    let uri = format!("http://{}{}", host?, path);
    builder.uri(uri).body(body.as_bytes().to_vec()).ok()
}
