mod common;

use anyhow::Result;

use rowsync::model::DashSettings;
use rowsync::remote::DeviceClient;

#[test]
fn calibrate_saves_first_then_hits_the_calibration_endpoint() -> Result<()> {
    let guard = common::spawn_device()?;
    let client = DeviceClient::new(&guard.base_url)?;

    let dash = DashSettings {
        sensitivity: 4,
        aggressiveness: 2,
        min_voltage: 1300,
        max_voltage: 3600,
        supply_voltage: 5000,
    };
    client.calibrate(&dash, false)?;

    let journal = common::journal(&guard.base_url)?;
    assert_eq!(journal.len(), 2, "exactly two requests");

    let first = &journal[0];
    assert_eq!(first.get("endpoint").and_then(|v| v.as_str()), Some("update"));
    let body = first
        .get("body")
        .and_then(|b| b.as_object())
        .expect("update body");
    assert_eq!(body.get("SENSITIVITY").and_then(|v| v.as_str()), Some("4"));
    assert_eq!(body.get("MIN_VOLTAGE").and_then(|v| v.as_str()), Some("1300"));
    assert_eq!(
        body.get("PWM_INVERTED").and_then(|v| v.as_str()),
        Some("false")
    );

    let second = &journal[1];
    assert_eq!(
        second.get("endpoint").and_then(|v| v.as_str()),
        Some("calibrate")
    );
    let body = second
        .get("body")
        .and_then(|b| b.as_object())
        .expect("calibrate body");
    assert!(body.is_empty(), "calibrate posts an empty body");
    Ok(())
}

#[test]
fn calibrate_does_not_fire_when_the_save_fails() -> Result<()> {
    // The device calibrates against freshly written settings; if the write
    // cannot land, the calibration request must not be issued either.
    let client = DeviceClient::new(&common::unreachable_base_url())?;
    let dash = DashSettings {
        sensitivity: 1,
        aggressiveness: 1,
        min_voltage: 1250,
        max_voltage: 3750,
        supply_voltage: 5000,
    };
    assert!(client.calibrate(&dash, false).is_err());
    Ok(())
}
