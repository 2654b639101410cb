use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use rowsync::model::{Group, GroupSettings};

pub(crate) struct DeviceState {
    /// Flat settings map, the union of all groups. Unknown names written by
    /// a client are kept so they show up in `/config` for debugging.
    pub(crate) values: RwLock<BTreeMap<String, Value>>,
    pub(crate) journal: RwLock<Vec<JournalEntry>>,
    pub(crate) log: RwLock<Vec<String>>,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct JournalEntry {
    pub(crate) endpoint: String,
    pub(crate) body: BTreeMap<String, String>,
}

impl DeviceState {
    pub(crate) fn seeded() -> Self {
        let mut values = BTreeMap::new();
        for group in [Group::Camera, Group::Dash, Group::Advanced] {
            for (name, value) in GroupSettings::defaults(group).to_wire() {
                values.insert(name.to_string(), serde_json::to_value(value).unwrap_or(Value::Null));
            }
        }
        Self {
            values: RwLock::new(values),
            journal: RwLock::new(Vec::new()),
            log: RwLock::new(vec![format!("{} device boot", now_rfc3339())]),
        }
    }
}

pub(crate) fn now_rfc3339() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}
