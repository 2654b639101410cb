use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::{Form, Json};
use axum::http::header;
use axum::response::IntoResponse;
use serde_json::Value;

use super::state::{DeviceState, JournalEntry, now_rfc3339};

/// Smallest well-formed JPEG; stands in for the camera's current frame.
const SNAPSHOT_JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x03, 0x02, 0x02, 0x02, 0x02, 0x02, 0x03, 0x02,
    0x02, 0x02, 0x03, 0x03, 0x03, 0x03, 0x04, 0x06, 0x04, 0x04, 0x04, 0x04, 0x04, 0x08, 0x06,
    0x06, 0x05, 0x06, 0x09, 0x08, 0x0A, 0x0A, 0x09, 0x08, 0x09, 0x09, 0x0A, 0x0C, 0x0F, 0x0C,
    0x0A, 0x0B, 0x0E, 0x0B, 0x09, 0x09, 0x0D, 0x11, 0x0D, 0x0E, 0x0F, 0x10, 0x10, 0x11, 0x10,
    0x0A, 0x0C, 0x12, 0x13, 0x12, 0x10, 0x13, 0x0F, 0x10, 0x10, 0x10, 0xFF, 0xC9, 0x00, 0x0B,
    0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00, 0xFF, 0xCC, 0x00, 0x06, 0x00, 0x10,
    0x10, 0x05, 0xFF, 0xDA, 0x00, 0x08, 0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xD2, 0xCF, 0x20,
    0xFF, 0xD9,
];

pub(crate) async fn healthz() -> &'static str {
    "ok"
}

pub(crate) async fn get_config(State(state): State<Arc<DeviceState>>) -> Json<Value> {
    let values = state.values.read().await;
    Json(Value::Object(
        values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    ))
}

pub(crate) async fn post_update(
    State(state): State<Arc<DeviceState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> &'static str {
    let mut body = BTreeMap::new();
    {
        let mut values = state.values.write().await;
        for (name, raw) in &pairs {
            values.insert(name.clone(), parse_form_value(raw));
            body.insert(name.clone(), raw.clone());
        }
    }
    state.log.write().await.push(format!(
        "{} update applied ({} fields)",
        now_rfc3339(),
        pairs.len()
    ));
    state.journal.write().await.push(JournalEntry {
        endpoint: "update".to_string(),
        body,
    });
    "ok"
}

pub(crate) async fn post_calibrate(State(state): State<Arc<DeviceState>>) -> &'static str {
    state
        .log
        .write()
        .await
        .push(format!("{} calibration requested", now_rfc3339()));
    state.journal.write().await.push(JournalEntry {
        endpoint: "calibrate".to_string(),
        body: BTreeMap::new(),
    });
    "ok"
}

pub(crate) async fn get_image() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/jpeg")], SNAPSHOT_JPEG)
}

pub(crate) async fn get_log(State(state): State<Arc<DeviceState>>) -> impl IntoResponse {
    let mut text = state.log.read().await.join("\n");
    text.push('\n');
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text)
}

pub(crate) async fn get_journal(
    State(state): State<Arc<DeviceState>>,
) -> Json<Vec<JournalEntry>> {
    Json(state.journal.read().await.clone())
}

/// The real device stores everything as strings internally; the simulator
/// keeps JSON types so `/config` looks like the firmware's response.
fn parse_form_value(raw: &str) -> Value {
    if raw == "true" {
        return Value::Bool(true);
    }
    if raw == "false" {
        return Value::Bool(false);
    }
    match raw.parse::<i64>() {
        Ok(n) => Value::from(n),
        Err(_) => Value::String(raw.to_string()),
    }
}
