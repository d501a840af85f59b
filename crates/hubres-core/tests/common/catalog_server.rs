//! Minimal HTTP/1.1 server standing in for the catalog in integration tests.
//!
//! Each connection is answered by a handler that sees the request path and
//! returns a canned reply. Every requested path is recorded.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    /// Advertise this Content-Length instead of the real one (truncation).
    pub declared_len: Option<usize>,
    /// Sleep before answering.
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: body.as_bytes().to_vec(),
            declared_len: None,
            delay: None,
        }
    }

    pub fn yaml_envelope(yaml: &str) -> Self {
        let body = serde_json::json!({ "data": { "yaml": yaml } }).to_string();
        Self::json(200, &body)
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 302,
            headers: vec![("Location".into(), location.into())],
            body: Vec::new(),
            declared_len: None,
            delay: None,
        }
    }
}

pub struct CatalogServer {
    /// Base URL with trailing slash, e.g. "http://127.0.0.1:12345/".
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CatalogServer {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start<F>(handler: F) -> CatalogServer
where
    F: Fn(&str) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let handler = Arc::new(handler);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let requests_srv = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let handler = Arc::clone(&handler);
            let requests = Arc::clone(&requests_srv);
            thread::spawn(move || handle(stream, handler.as_ref(), &requests));
        }
    });
    CatalogServer {
        base: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

/// Serves the same reply for every path.
pub fn start_fixed(reply: Reply) -> CatalogServer {
    start(move |_| reply.clone())
}

/// A base URL nobody listens on (connection refused).
pub fn refused_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, handler: &dyn Fn(&str) -> Reply, requests: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let Some((method, path)) = parse_request_line(request) else {
        return;
    };
    requests.lock().unwrap().push(path.to_string());
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let reply = handler(path);
    if let Some(d) = reply.delay {
        thread::sleep(d);
    }
    let mut head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        reply.status,
        reason(reply.status),
        reply.declared_len.unwrap_or(reply.body.len())
    );
    for (k, v) in &reply.headers {
        head.push_str(&format!("{}: {}\r\n", k, v));
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&reply.body);
    let _ = stream.flush();
}

fn parse_request_line(request: &str) -> Option<(&str, &str)> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    Some((parts.next()?, parts.next()?))
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
