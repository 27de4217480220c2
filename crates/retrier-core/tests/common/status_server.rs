//! Minimal HTTP/1.1 server that answers each request with the next status
//! from a script, repeating the last one once the script runs out.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Handle to a running server. `hits` counts requests served.
pub struct StatusServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl StatusServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(script: Vec<u16>) -> StatusServer {
    assert!(!script.is_empty(), "script needs at least one status");
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let served = Arc::clone(&hits);
    let script = Arc::new(script);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let n = served.fetch_add(1, Ordering::SeqCst);
            let code = script[n.min(script.len() - 1)];
            handle(stream, code);
        }
    });
    StatusServer {
        url: format!("http://127.0.0.1:{}/", port),
        hits,
    }
}

/// A URL on a port nothing listens on.
pub fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, code: u16) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 4096];
    if !matches!(stream.read(&mut buf), Ok(n) if n > 0) {
        return;
    }
    let body = format!("status {}", code);
    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        code,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
