//! Settings groups: fixed name sets, factory defaults, and the explicit
//! mapping between typed structs and the wire's flat key/value object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Setting, SettingValue};

pub const CAMERA_NAMES: &[&str] = &["CAMERAS", "CAMERA_OFFSET"];

pub const DASH_NAMES: &[&str] = &[
    "SENSITIVITY",
    "AGGRESSIVENESS",
    "MIN_VOLTAGE",
    "MAX_VOLTAGE",
    "SUPPLY_VOLTAGE",
];

pub const ADVANCED_NAMES: &[&str] = &[
    "P_COEF",
    "I_COEF",
    "D_COEF",
    "HUE_MIN",
    "HUE_MAX",
    "SAT_MIN",
    "SAT_MAX",
    "VAL_MIN",
    "VAL_MAX",
    "N_SAMPLES",
    "THRESHOLD_PERCENTILE",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Camera,
    Dash,
    Advanced,
}

impl Group {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "camera" => Ok(Group::Camera),
            "dash" => Ok(Group::Dash),
            "advanced" => Ok(Group::Advanced),
            other => anyhow::bail!("unknown settings group '{}' (camera, dash, advanced)", other),
        }
    }

    /// The group's fixed name set. Exactly these names round-trip to the
    /// device; everything else in a `/config` response is ignored.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            Group::Camera => CAMERA_NAMES,
            Group::Dash => DASH_NAMES,
            Group::Advanced => ADVANCED_NAMES,
        }
    }

    /// Client-local toggle carried on save for this group, if any.
    pub fn toggle_name(&self) -> Option<&'static str> {
        match self {
            Group::Camera => Some("HIGHLIGHT"),
            Group::Dash => Some("PWM_INVERTED"),
            Group::Advanced => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Group::Camera => "camera",
            Group::Dash => "dash",
            Group::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub cameras: i64,
    pub camera_offset: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashSettings {
    pub sensitivity: i64,
    pub aggressiveness: i64,
    pub min_voltage: i64,
    pub max_voltage: i64,
    pub supply_voltage: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedSettings {
    pub p_coef: i64,
    pub i_coef: i64,
    pub d_coef: i64,
    pub hue_min: i64,
    pub hue_max: i64,
    pub sat_min: i64,
    pub sat_max: i64,
    pub val_min: i64,
    pub val_max: i64,
    pub n_samples: i64,
    pub threshold_percentile: i64,
}

fn wire_i64(body: &Map<String, Value>, name: &str, default: i64) -> i64 {
    // Tolerant read: absent, non-numeric, or fractional fields fall back.
    body.get(name)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(default)
}

impl CameraSettings {
    pub fn defaults() -> Self {
        Self {
            cameras: 2,
            camera_offset: 0,
        }
    }

    pub fn from_wire(body: &Map<String, Value>) -> Self {
        let d = Self::defaults();
        Self {
            cameras: wire_i64(body, "CAMERAS", d.cameras),
            camera_offset: wire_i64(body, "CAMERA_OFFSET", d.camera_offset),
        }
    }

    pub fn to_wire(&self) -> Vec<(&'static str, SettingValue)> {
        vec![
            ("CAMERAS", SettingValue::Number(self.cameras)),
            ("CAMERA_OFFSET", SettingValue::Number(self.camera_offset)),
        ]
    }
}

impl DashSettings {
    pub fn defaults() -> Self {
        Self {
            sensitivity: 1,
            aggressiveness: 1,
            min_voltage: 1250,
            max_voltage: 3750,
            supply_voltage: 5000,
        }
    }

    pub fn from_wire(body: &Map<String, Value>) -> Self {
        let d = Self::defaults();
        Self {
            sensitivity: wire_i64(body, "SENSITIVITY", d.sensitivity),
            aggressiveness: wire_i64(body, "AGGRESSIVENESS", d.aggressiveness),
            min_voltage: wire_i64(body, "MIN_VOLTAGE", d.min_voltage),
            max_voltage: wire_i64(body, "MAX_VOLTAGE", d.max_voltage),
            supply_voltage: wire_i64(body, "SUPPLY_VOLTAGE", d.supply_voltage),
        }
    }

    pub fn to_wire(&self) -> Vec<(&'static str, SettingValue)> {
        vec![
            ("SENSITIVITY", SettingValue::Number(self.sensitivity)),
            ("AGGRESSIVENESS", SettingValue::Number(self.aggressiveness)),
            ("MIN_VOLTAGE", SettingValue::Number(self.min_voltage)),
            ("MAX_VOLTAGE", SettingValue::Number(self.max_voltage)),
            ("SUPPLY_VOLTAGE", SettingValue::Number(self.supply_voltage)),
        ]
    }
}

impl AdvancedSettings {
    pub fn defaults() -> Self {
        Self {
            p_coef: 1,
            i_coef: 4,
            d_coef: 0,
            hue_min: 45,
            hue_max: 105,
            sat_min: 128,
            sat_max: 255,
            val_min: 64,
            val_max: 250,
            n_samples: 30,
            threshold_percentile: 95,
        }
    }

    pub fn from_wire(body: &Map<String, Value>) -> Self {
        let d = Self::defaults();
        Self {
            p_coef: wire_i64(body, "P_COEF", d.p_coef),
            i_coef: wire_i64(body, "I_COEF", d.i_coef),
            d_coef: wire_i64(body, "D_COEF", d.d_coef),
            hue_min: wire_i64(body, "HUE_MIN", d.hue_min),
            hue_max: wire_i64(body, "HUE_MAX", d.hue_max),
            sat_min: wire_i64(body, "SAT_MIN", d.sat_min),
            sat_max: wire_i64(body, "SAT_MAX", d.sat_max),
            val_min: wire_i64(body, "VAL_MIN", d.val_min),
            val_max: wire_i64(body, "VAL_MAX", d.val_max),
            n_samples: wire_i64(body, "N_SAMPLES", d.n_samples),
            threshold_percentile: wire_i64(body, "THRESHOLD_PERCENTILE", d.threshold_percentile),
        }
    }

    pub fn to_wire(&self) -> Vec<(&'static str, SettingValue)> {
        vec![
            ("P_COEF", SettingValue::Number(self.p_coef)),
            ("I_COEF", SettingValue::Number(self.i_coef)),
            ("D_COEF", SettingValue::Number(self.d_coef)),
            ("HUE_MIN", SettingValue::Number(self.hue_min)),
            ("HUE_MAX", SettingValue::Number(self.hue_max)),
            ("SAT_MIN", SettingValue::Number(self.sat_min)),
            ("SAT_MAX", SettingValue::Number(self.sat_max)),
            ("VAL_MIN", SettingValue::Number(self.val_min)),
            ("VAL_MAX", SettingValue::Number(self.val_max)),
            ("N_SAMPLES", SettingValue::Number(self.n_samples)),
            (
                "THRESHOLD_PERCENTILE",
                SettingValue::Number(self.threshold_percentile),
            ),
        ]
    }
}

/// One screen's worth of editable settings, dispatched by group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupSettings {
    Camera(CameraSettings),
    Dash(DashSettings),
    Advanced(AdvancedSettings),
}

impl GroupSettings {
    pub fn defaults(group: Group) -> Self {
        match group {
            Group::Camera => GroupSettings::Camera(CameraSettings::defaults()),
            Group::Dash => GroupSettings::Dash(DashSettings::defaults()),
            Group::Advanced => GroupSettings::Advanced(AdvancedSettings::defaults()),
        }
    }

    pub fn from_wire(group: Group, body: &Map<String, Value>) -> Self {
        match group {
            Group::Camera => GroupSettings::Camera(CameraSettings::from_wire(body)),
            Group::Dash => GroupSettings::Dash(DashSettings::from_wire(body)),
            Group::Advanced => GroupSettings::Advanced(AdvancedSettings::from_wire(body)),
        }
    }

    pub fn group(&self) -> Group {
        match self {
            GroupSettings::Camera(_) => Group::Camera,
            GroupSettings::Dash(_) => Group::Dash,
            GroupSettings::Advanced(_) => Group::Advanced,
        }
    }

    /// Flat pairs in the group's fixed name order.
    pub fn to_wire(&self) -> Vec<(&'static str, SettingValue)> {
        match self {
            GroupSettings::Camera(s) => s.to_wire(),
            GroupSettings::Dash(s) => s.to_wire(),
            GroupSettings::Advanced(s) => s.to_wire(),
        }
    }

    pub fn settings(&self) -> Vec<Setting> {
        self.to_wire()
            .into_iter()
            .map(|(name, value)| Setting { name, value })
            .collect()
    }

    pub fn as_camera(&self) -> Option<&CameraSettings> {
        match self {
            GroupSettings::Camera(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_dash(&self) -> Option<&DashSettings> {
        match self {
            GroupSettings::Dash(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_advanced(&self) -> Option<&AdvancedSettings> {
        match self {
            GroupSettings::Advanced(s) => Some(s),
            _ => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.to_wire().into_iter().find(|(n, _)| *n == name).map(
            |(_, value)| match value {
                SettingValue::Number(n) => n,
                SettingValue::Bool(b) => b as i64,
            },
        )
    }

    /// Overwrite one named field. Returns false for names outside the group.
    pub fn set(&mut self, name: &str, value: i64) -> bool {
        let slot: &mut i64 = match self {
            GroupSettings::Camera(s) => match name {
                "CAMERAS" => &mut s.cameras,
                "CAMERA_OFFSET" => &mut s.camera_offset,
                _ => return false,
            },
            GroupSettings::Dash(s) => match name {
                "SENSITIVITY" => &mut s.sensitivity,
                "AGGRESSIVENESS" => &mut s.aggressiveness,
                "MIN_VOLTAGE" => &mut s.min_voltage,
                "MAX_VOLTAGE" => &mut s.max_voltage,
                "SUPPLY_VOLTAGE" => &mut s.supply_voltage,
                _ => return false,
            },
            GroupSettings::Advanced(s) => match name {
                "P_COEF" => &mut s.p_coef,
                "I_COEF" => &mut s.i_coef,
                "D_COEF" => &mut s.d_coef,
                "HUE_MIN" => &mut s.hue_min,
                "HUE_MAX" => &mut s.hue_max,
                "SAT_MIN" => &mut s.sat_min,
                "SAT_MAX" => &mut s.sat_max,
                "VAL_MIN" => &mut s.val_min,
                "VAL_MAX" => &mut s.val_max,
                "N_SAMPLES" => &mut s.n_samples,
                "THRESHOLD_PERCENTILE" => &mut s.threshold_percentile,
                _ => return false,
            },
        };
        *slot = value;
        true
    }
}

#[cfg(test)]
#[path = "../tests/model/groups_tests.rs"]
mod tests;
