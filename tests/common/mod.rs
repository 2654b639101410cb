use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub struct DeviceGuard {
    pub base_url: String,
    _tmp_dir: tempfile::TempDir,
    child: Child,
}

impl Drop for DeviceGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn spawn_device() -> Result<DeviceGuard> {
    let tmp_dir = tempfile::tempdir().context("create device tempdir")?;
    let addr_file = tmp_dir.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_rowsync-device"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn rowsync-device")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(DeviceGuard {
        base_url,
        _tmp_dir: tmp_dir,
        child,
    })
}

fn read_addr_file(addr_file: &std::path::Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("device did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

/// An address nothing listens on, for exercising the defaulting path.
#[allow(dead_code)]
pub fn unreachable_base_url() -> String {
    // Bind a listener to grab a free port, then drop it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe listener addr");
    drop(listener);
    format!("http://{}", addr)
}

/// Fetch `/journal` from the simulator: ordered (endpoint, body) pairs.
#[allow(dead_code)]
pub fn journal(base_url: &str) -> Result<Vec<serde_json::Value>> {
    let resp = reqwest::blocking::get(format!("{}/journal", base_url)).context("GET /journal")?;
    resp.json().context("parse journal")
}
