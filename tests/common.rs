#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

pub fn wtk() -> Command {
    cargo_bin_cmd!("worktrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worktrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique session file path inside the system temp dir and remove any existing file
pub fn setup_session_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worktrack_session.json", name));
    let session_path = path.to_string_lossy().to_string();
    fs::remove_file(&session_path).ok();
    session_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Spin up a one-shot HTTP stub for the script endpoint: it serves the given
/// (status, body) responses, one connection each, then goes away. Returns the
/// base URL to pass via `--endpoint`.
pub fn stub_endpoint(responses: Vec<(u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub endpoint");
    let addr = listener.local_addr().expect("stub endpoint addr");

    thread::spawn(move || {
        for (status, body) in responses {
            let (mut stream, _) = match listener.accept() {
                Ok(conn) => conn,
                Err(_) => return,
            };

            // drain the request: headers, then content-length body if any
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            let header_end = loop {
                match stream.read(&mut chunk) {
                    Ok(0) => break None,
                    Ok(n) => {
                        buf.extend_from_slice(&chunk[..n]);
                        if let Some(pos) = find_header_end(&buf) {
                            break Some(pos);
                        }
                    }
                    Err(_) => break None,
                }
            };

            if let Some(pos) = header_end {
                let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);

                let mut body_read = buf.len() - (pos + 4);
                while body_read < content_length {
                    match stream.read(&mut chunk) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => body_read += n,
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason(status),
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}", addr)
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Canned acknowledgment for a successful write.
pub fn ack_ok(message: &str) -> (u16, String) {
    (
        200,
        format!(r#"{{"success":true,"message":"{}"}}"#, message),
    )
}

/// Canned log response with the given JSON rows.
pub fn log_ok(rows_json: &str) -> (u16, String) {
    (200, format!(r#"{{"success":true,"data":{}}}"#, rows_json))
}
