//! Snapshot and log access. The image URL carries a random `dummy` query
//! value so neither the client nor any proxy serves a stale frame.

use super::*;

pub const IMAGE_PATH: &str = "/out.jpg";
pub const LOG_PATH: &str = "/logs/log.txt";

fn cache_token() -> u32 {
    let mut buf = [0u8; 4];
    if getrandom::getrandom(&mut buf).is_err() {
        // Extremely unlikely; a clock-derived token still busts caches.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        return nanos;
    }
    u32::from_le_bytes(buf)
}

impl DeviceClient {
    /// A fresh snapshot URL. Pure function of the random source; call after
    /// every settings mutation and on initial load.
    pub fn next_image_url(&self) -> String {
        format!("{}?dummy={}", self.url(IMAGE_PATH), cache_token())
    }

    /// Current snapshot bytes, fetched through a fresh cache-busting URL.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        let url = self.next_image_url();
        let resp = self.client.get(&url).send().context("GET /out.jpg")?;
        let resp = resp.error_for_status().context("snapshot status")?;
        let bytes = resp.bytes().context("read snapshot body")?;
        Ok(bytes.to_vec())
    }

    /// The device's plain-text log, unparsed.
    pub fn device_log(&self) -> Result<String> {
        let resp = self
            .client
            .get(self.url(LOG_PATH))
            .send()
            .context("GET /logs/log.txt")?;
        let resp = resp.error_for_status().context("log status")?;
        resp.text().context("read log body")
    }

    pub fn log_url(&self) -> String {
        self.url(LOG_PATH)
    }
}

#[cfg(test)]
#[path = "../tests/remote/snapshot_tests.rs"]
mod tests;
