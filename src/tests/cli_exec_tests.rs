use super::*;

#[test]
fn assignment_parsing() {
    assert_eq!(parse_assignment("HUE_MIN=50").unwrap(), ("HUE_MIN", 50));
    assert_eq!(
        parse_assignment("CAMERA_OFFSET=-3").unwrap(),
        ("CAMERA_OFFSET", -3)
    );
    assert!(parse_assignment("HUE_MIN").is_err());
    assert!(parse_assignment("HUE_MIN=fast").is_err());
}

#[test]
fn device_flag_wins_over_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    crate::config::write_device_file(
        dir.path(),
        &crate::config::DeviceFile {
            device: Some(DeviceConfig {
                base_url: "http://configured".to_string(),
            }),
        },
    )
    .expect("write config");

    let url = resolve_base_url(dir.path(), Some("http://flag".to_string())).expect("resolve");
    assert_eq!(url, "http://flag");

    let url = resolve_base_url(dir.path(), None).expect("resolve");
    assert_eq!(url, "http://configured");
}

#[test]
fn missing_device_config_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = resolve_base_url(dir.path(), None).unwrap_err();
    assert!(err.to_string().contains("no device configured"));
}

#[test]
fn device_set_round_trips_through_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    device_set(dir.path(), "http://192.168.4.1".to_string()).expect("set device");
    let cfg = crate::config::read_device_file(dir.path()).expect("read config");
    assert_eq!(
        cfg.device.map(|d| d.base_url),
        Some("http://192.168.4.1".to_string())
    );
}
