#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub fn wl() -> Command {
    cargo_bin_cmd!("wordlink")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wordlink_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file pointing at `base_url`, no refresh delay, UTC display.
pub fn test_config(name: &str, base_url: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wordlink.conf", name));
    let yaml = format!(
        "device_url: \"{base_url}\"\nrefresh_delay_ms: 0\ntime_policy: fixed\ndisplay_offset: \"+00:00\"\ncolor: false\n"
    );
    fs::write(&path, yaml).expect("write test config");
    path.to_string_lossy().to_string()
}

/// Base URL on which nothing listens.
pub fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe local addr");
    drop(listener);
    format!("http://{addr}")
}

pub const SAMPLE_LOG: &str = r#"[
  {"word": "hello", "time": "2024-01-01T00:00:00Z"},
  {"word": "howareyou", "time": "2024-01-01T00:05:30Z"},
  {"word": "hello", "time": "not a time"},
  {"time": "2024-01-01T00:06:00Z"},
  {"word": "hello", "time": "2024-01-01T00:07:00Z"}
]"#;

/// Minimal HTTP device: `GET /log` answers with the configured body, any
/// other `GET /<word>` answers 200. Every request line is recorded.
pub struct StubDevice {
    addr: SocketAddr,
    stop: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl StubDevice {
    pub fn start(log_status: u16, log_body: &str) -> Self {
        Self::start_with(log_status, log_body, 200)
    }

    /// Like `start`, with a custom status for word triggers.
    pub fn start_with(log_status: u16, log_body: &str, trigger_status: u16) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        listener
            .set_nonblocking(true)
            .expect("set nonblocking listener");
        let addr = listener.local_addr().expect("listener local addr");
        let stop = Arc::new(AtomicBool::new(false));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let stop_flag = Arc::clone(&stop);
        let seen = Arc::clone(&requests);
        let body = log_body.to_string();
        let handle = thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                match listener.accept() {
                    Ok((stream, _)) => handle_conn(stream, log_status, &body, trigger_status, &seen),
                    Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Self {
            addr,
            stop,
            requests,
            handle: Some(handle),
        }
    }

    pub fn with_log(body: &str) -> Self {
        Self::start(200, body)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request lines received so far, e.g. `GET /log HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|line| line.split_whitespace().nth(1).map(str::to_string))
            .collect()
    }
}

impl Drop for StubDevice {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = TcpStream::connect(self.addr);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn status_text(code: u16) -> &'static str {
    match code {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

fn write_response(mut stream: TcpStream, status: u16, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        status_text(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn handle_conn(
    mut stream: TcpStream,
    log_status: u16,
    log_body: &str,
    trigger_status: u16,
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_nonblocking(false);
    let mut buf = [0_u8; 8192];
    let n = stream.read(&mut buf).unwrap_or(0);
    if n == 0 {
        return;
    }
    let req = String::from_utf8_lossy(&buf[..n]);
    let line = req.lines().next().unwrap_or_default().to_string();
    seen.lock().expect("requests lock").push(line.clone());

    if line.starts_with("GET /log ") {
        return write_response(stream, log_status, log_body);
    }
    if line.starts_with("GET /") {
        return write_response(stream, trigger_status, "ok");
    }
    write_response(stream, 404, "{}")
}
