//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed route table keyed by request path; unknown paths answer
//! 404. A route can delay its response to exercise the probe deadline.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u32,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Route {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(status: u32) -> Self {
        Self {
            status,
            body: String::new(),
            delay: None,
        }
    }

    pub fn delayed(body: &str, delay: Duration) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: Some(delay),
        }
    }
}

/// Starts a server in a background thread serving `routes`. Returns the base
/// URL (e.g. "http://127.0.0.1:12345"). The server runs until the process
/// exits.
pub fn start(routes: HashMap<String, Route>) -> String {
    start_with(|_| routes)
}

/// Like `start`, but the route table is built after binding so route bodies
/// can reference the server's own base URL (e.g. a sitemap index whose
/// children live on the same server).
pub fn start_with<F>(build: F) -> String
where
    F: FnOnce(&str) -> HashMap<String, Route>,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{}", port);
    let routes = Arc::new(build(&base));
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    base
}

/// Returns a base URL on which nothing listens (connection refused).
pub fn refused_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(30)));
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
    let path = request_path(request);

    let (status, body, delay) = match routes.get(path) {
        Some(route) => (route.status, route.body.as_str(), route.delay),
        None => (404, "", None),
    };
    if let Some(d) = delay {
        thread::sleep(d);
    }

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_line(status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}

/// Extracts the path from the request line ("GET /x HTTP/1.1").
fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
}

fn status_line(status: u32) -> &'static str {
    match status {
        200 => "200 OK",
        301 => "301 Moved Permanently",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        _ => "500 Internal Server Error",
    }
}
