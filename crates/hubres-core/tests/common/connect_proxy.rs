//! Proxy stub that accepts any CONNECT with `200 Connection established`
//! and then sends plain bytes instead of a TLS handshake.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Starts the stub in a background thread and returns its proxy URL
/// (e.g. "http://127.0.0.1:12345").
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 4096];
    match stream.read(&mut buf) {
        Ok(n) if n > 0 && buf[..n].starts_with(b"CONNECT ") => {}
        _ => return,
    }
    let _ = stream.write_all(b"HTTP/1.1 200 Connection established\r\n\r\n");
    let _ = stream.write_all(b"this is not a tls server hello\r\n\r\n");
    let _ = stream.flush();
    // Give curl time to read the garbage before the socket closes.
    thread::sleep(Duration::from_millis(200));
}
