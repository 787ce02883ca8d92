//! Tiny HTTP stub standing in for the REST Countries API in offline tests.
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// One canned answer for `GET /v3.1/name/{name}`.
#[derive(Clone)]
pub struct Route {
    pub name: &'static str,
    pub status: u16,
    pub body: String,
    /// Accept the request but never answer.
    pub silent: bool,
}

pub fn ok(name: &'static str, body: &str) -> Route {
    Route {
        name,
        status: 200,
        body: body.to_string(),
        silent: false,
    }
}

pub fn status(name: &'static str, status: u16, body: &str) -> Route {
    Route {
        name,
        status,
        body: body.to_string(),
        silent: false,
    }
}

/// Route whose requests hang until the client gives up.
pub fn silent(name: &'static str) -> Route {
    Route {
        name,
        status: 200,
        body: String::new(),
        silent: true,
    }
}

pub fn fixture(file: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), file);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

/// Start the stub on an ephemeral port and return its base URL (`http://127.0.0.1:N/v3.1`).
/// Unknown names get the API's 404 payload. The server thread lives until the test
/// process exits.
pub fn serve(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = routes.clone();
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://{addr}/v3.1")
}

/// Base URL nobody listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v3.1")
}

fn handle(mut stream: TcpStream, routes: &[Route]) {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // Drain headers; GET requests carry no body.
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => {}
            Err(_) => return,
        }
    }

    let target = request_line.split_whitespace().nth(1).unwrap_or("");
    let path = target.split('?').next().unwrap_or("");
    let name = path.rsplit("/name/").next().unwrap_or("");

    let (code, body) = match routes.iter().find(|r| r.name == name) {
        Some(r) if r.silent => {
            thread::sleep(Duration::from_secs(30));
            return;
        }
        Some(r) => (r.status, r.body.clone()),
        None => (404, r#"{"status":404,"message":"Not Found"}"#.to_string()),
    };
    let reason = match code {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let resp = format!(
        "HTTP/1.1 {code} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(resp.as_bytes());
    let _ = stream.flush();
}
