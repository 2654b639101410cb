use serde::{Deserialize, Serialize};

mod groups;
pub use groups::{
    ADVANCED_NAMES, AdvancedSettings, CAMERA_NAMES, CameraSettings, DASH_NAMES, DashSettings,
    Group, GroupSettings,
};

/// A single device setting as the wire sees it: a flat name plus a scalar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Setting {
    pub name: &'static str,
    pub value: SettingValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Number(i64),
    Bool(bool),
}

impl SettingValue {
    /// Value as it appears in a form-encoded `/update` body.
    pub fn form_value(&self) -> String {
        match self {
            SettingValue::Number(n) => n.to_string(),
            SettingValue::Bool(b) => b.to_string(),
        }
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Number(n) => write!(f, "{}", n),
            SettingValue::Bool(b) => write!(f, "{}", b),
        }
    }
}
