//! Local chat-completions stand-in for integration tests.

use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};

/// One request as seen by the local service.
#[derive(Debug)]
pub struct SeenRequest {
    /// Request line and headers, as sent.
    pub head: String,
    pub body: Value,
}

/// Serve up to `max_requests` chat completions on a local port.
///
/// Each reply's content is `"  POST:" + <user message> + "  "`, so callers
/// can check both the echo and the trimming. Returns the base URL to put in
/// `OPENAI_BASE_URL` and a receiver that yields every request handled.
pub fn spawn_echo_service(max_requests: usize) -> (String, Receiver<SeenRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let base_url = format!("http://{}/v1", listener.local_addr().expect("local addr"));
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for _ in 0..max_requests {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            let seen = answer(stream);
            if tx.send(seen).is_err() {
                return;
            }
        }
    });
    (base_url, rx)
}

fn answer(stream: TcpStream) -> SeenRequest {
    let mut reader = BufReader::new(stream);
    let mut head = String::new();
    let mut content_length: usize = 0;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("read request line");
        if line == "\r\n" || line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().expect("content-length");
            }
        }
        head.push_str(&line);
    }
    let mut raw = vec![0u8; content_length];
    reader.read_exact(&mut raw).expect("read request body");
    let body: Value = serde_json::from_slice(&raw).expect("request body is JSON");

    let user = body["messages"][1]["content"].as_str().unwrap_or_default();
    let reply = json!({
        "choices": [{"message": {"role": "assistant", "content": format!("  POST:{user}  ")}}]
    })
    .to_string();

    let mut stream = reader.into_inner();
    write!(
        stream,
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
        reply.len()
    )
    .expect("write reply");
    SeenRequest { head, body }
}
