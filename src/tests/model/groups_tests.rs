use super::*;

fn wire(body: serde_json::Value) -> Map<String, Value> {
    body.as_object().expect("test body is an object").clone()
}

#[test]
fn full_response_returns_exact_values() {
    let body = wire(serde_json::json!({
        "CAMERAS": 3,
        "CAMERA_OFFSET": -4,
    }));
    let s = CameraSettings::from_wire(&body);
    assert_eq!(s.cameras, 3);
    assert_eq!(s.camera_offset, -4);

    let body = wire(serde_json::json!({
        "P_COEF": 7, "I_COEF": 2, "D_COEF": 1,
        "HUE_MIN": 10, "HUE_MAX": 200, "SAT_MIN": 5, "SAT_MAX": 6,
        "VAL_MIN": 7, "VAL_MAX": 8, "N_SAMPLES": 9, "THRESHOLD_PERCENTILE": 50,
    }));
    let s = AdvancedSettings::from_wire(&body);
    assert_eq!(s.p_coef, 7);
    assert_eq!(s.i_coef, 2);
    assert_eq!(s.threshold_percentile, 50);
}

#[test]
fn absent_fields_take_their_default() {
    let body = wire(serde_json::json!({ "SENSITIVITY": 8 }));
    let s = DashSettings::from_wire(&body);
    assert_eq!(s.sensitivity, 8);
    assert_eq!(s.min_voltage, 1250);
    assert_eq!(s.max_voltage, 3750);
    assert_eq!(s.supply_voltage, 5000);
}

#[test]
fn non_integer_fields_are_tolerated() {
    let body = wire(serde_json::json!({
        "CAMERAS": 2.0,
        "CAMERA_OFFSET": "garbage",
    }));
    let s = CameraSettings::from_wire(&body);
    assert_eq!(s.cameras, 2);
    // Unparseable field falls back, same as absent.
    assert_eq!(s.camera_offset, CameraSettings::defaults().camera_offset);
}

#[test]
fn other_groups_fields_never_surface() {
    let body = wire(serde_json::json!({
        "CAMERAS": 1,
        "CAMERA_OFFSET": 5,
        "SENSITIVITY": 9,
        "HUE_MIN": 99,
        "FIRMWARE_REV": "1.4.2",
    }));
    let fetched = GroupSettings::from_wire(Group::Camera, &body);
    let names: Vec<&str> = fetched.settings().iter().map(|s| s.name).collect();
    assert_eq!(names, CAMERA_NAMES);
}

#[test]
fn advanced_default_table_is_the_factory_table() {
    let d = AdvancedSettings::defaults();
    assert_eq!(d.p_coef, 1);
    assert_eq!(d.i_coef, 4);
    assert_eq!(d.d_coef, 0);
    assert_eq!(d.hue_min, 45);
    assert_eq!(d.hue_max, 105);
    assert_eq!(d.sat_min, 128);
    assert_eq!(d.sat_max, 255);
    assert_eq!(d.val_min, 64);
    assert_eq!(d.val_max, 250);
    assert_eq!(d.n_samples, 30);
    assert_eq!(d.threshold_percentile, 95);
}

#[test]
fn dash_default_table_is_the_factory_table() {
    let d = DashSettings::defaults();
    assert_eq!(d.sensitivity, 1);
    assert_eq!(d.aggressiveness, 1);
    assert_eq!(d.min_voltage, 1250);
    assert_eq!(d.max_voltage, 3750);
    assert_eq!(d.supply_voltage, 5000);
}

#[test]
fn to_wire_round_trips_exactly_the_fixed_name_set() {
    for group in [Group::Camera, Group::Dash, Group::Advanced] {
        let wire_names: Vec<&str> = GroupSettings::defaults(group)
            .to_wire()
            .iter()
            .map(|(n, _)| *n)
            .collect();
        assert_eq!(wire_names, group.names(), "group {}", group);
    }
}

#[test]
fn toggles_are_not_part_of_any_name_set() {
    assert!(!CAMERA_NAMES.contains(&"HIGHLIGHT"));
    assert!(!DASH_NAMES.contains(&"PWM_INVERTED"));
    assert_eq!(Group::Camera.toggle_name(), Some("HIGHLIGHT"));
    assert_eq!(Group::Dash.toggle_name(), Some("PWM_INVERTED"));
    assert_eq!(Group::Advanced.toggle_name(), None);
}

#[test]
fn set_rejects_names_outside_the_group() {
    let mut values = GroupSettings::defaults(Group::Camera);
    assert!(values.set("CAMERAS", 4));
    assert_eq!(values.get("CAMERAS"), Some(4));
    assert!(!values.set("SENSITIVITY", 2));
    assert!(!values.set("HIGHLIGHT", 1));
}

#[test]
fn group_parse_accepts_known_names_only() {
    assert_eq!(Group::parse("camera").unwrap(), Group::Camera);
    assert_eq!(Group::parse("dash").unwrap(), Group::Dash);
    assert_eq!(Group::parse("advanced").unwrap(), Group::Advanced);
    assert!(Group::parse("Camera").is_err());
    assert!(Group::parse("basic").is_err());
}
