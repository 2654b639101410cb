//! Implementations behind the `rowsync` subcommands.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{self, DeviceConfig};
use crate::model::Group;
use crate::remote::DeviceClient;

/// `--device` wins; otherwise the `.rowsync.json` in the working directory.
pub fn resolve_base_url(dir: &Path, flag: Option<String>) -> Result<String> {
    if let Some(url) = flag {
        return Ok(url);
    }
    let cfg = config::read_device_file(dir)?;
    match cfg.device {
        Some(device) => Ok(device.base_url),
        None => anyhow::bail!(
            "no device configured (run `rowsync device set --url http://...` or pass --device)"
        ),
    }
}

pub fn device_show(dir: &Path, json: bool) -> Result<()> {
    let cfg = config::read_device_file(dir)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&cfg.device).context("serialize device json")?
        );
    } else if let Some(device) = cfg.device {
        println!("url: {}", device.base_url);
    } else {
        println!("No device configured");
    }
    Ok(())
}

pub fn device_set(dir: &Path, url: String) -> Result<()> {
    let mut cfg = config::read_device_file(dir)?;
    cfg.device = Some(DeviceConfig { base_url: url });
    config::write_device_file(dir, &cfg)?;
    println!("Device configured");
    Ok(())
}

pub fn show(client: &DeviceClient, group: Group, json: bool) -> Result<()> {
    let outcome = client.fetch(group);
    let defaulted = outcome.is_defaulted();
    let values = outcome.into_values();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "group": group,
                "defaulted": defaulted,
                "settings": values.settings(),
            }))
            .context("serialize settings json")?
        );
        return Ok(());
    }
    for setting in values.settings() {
        println!("{} = {}", setting.name, setting.value);
    }
    if defaulted {
        println!("(device unreachable; showing factory defaults)");
    }
    Ok(())
}

/// Fetch the group, overlay `NAME=VALUE` arguments, save.
pub fn set(client: &DeviceClient, group: Group, assignments: &[String], toggle: bool) -> Result<()> {
    let mut values = client.fetch(group).into_values();
    for raw in assignments {
        let (name, value) = parse_assignment(raw)?;
        if !values.set(name, value) {
            anyhow::bail!("'{}' is not a {} setting", name, group);
        }
    }
    client.save(&values, toggle)?;
    println!("Saved {} settings", group);
    Ok(())
}

pub fn reset(client: &DeviceClient, group: Group) -> Result<()> {
    let (defaults, pushed) = client.reset_to_defaults(group);
    for setting in defaults.settings() {
        println!("{} = {}", setting.name, setting.value);
    }
    pushed.context("push factory defaults")?;
    println!("Factory defaults applied");
    Ok(())
}

pub fn calibrate(client: &DeviceClient) -> Result<()> {
    // Calibration runs against freshly written dashboard settings, so write
    // back whatever the device currently reports (defaults if unreachable).
    let values = client.fetch(Group::Dash).into_values();
    let dash = values
        .as_dash()
        .context("dash fetch returned a different group")?;
    client.calibrate(dash, false)?;
    println!("Calibration started");
    Ok(())
}

pub fn snapshot(client: &DeviceClient, out: Option<std::path::PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            let bytes = client.snapshot()?;
            std::fs::write(&path, &bytes)
                .with_context(|| format!("write {}", path.display()))?;
            println!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => println!("{}", client.next_image_url()),
    }
    Ok(())
}

pub fn log(client: &DeviceClient) -> Result<()> {
    let text = client.device_log()?;
    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn parse_assignment(raw: &str) -> Result<(&str, i64)> {
    let (name, value) = raw
        .split_once('=')
        .with_context(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let value: i64 = value
        .parse()
        .with_context(|| format!("value for {} is not an integer", name))?;
    Ok((name, value))
}

#[cfg(test)]
#[path = "tests/cli_exec_tests.rs"]
mod tests;
