//! Write-side operations: save, factory reset, calibrate.

use super::*;

use crate::model::{
    AdvancedSettings, CameraSettings, DashSettings, Group, GroupSettings, SettingValue,
};

impl DeviceClient {
    /// Camera screen save: the two numeric fields plus the client-local
    /// highlight toggle.
    pub fn save_camera(&self, settings: &CameraSettings, highlight: bool) -> Result<()> {
        let mut pairs = settings.to_wire();
        pairs.push(("HIGHLIGHT", SettingValue::Bool(highlight)));
        self.post_update(&pairs)
    }

    /// Dashboard screen save: five numeric fields plus the inverted-PWM
    /// toggle.
    pub fn save_dash(&self, settings: &DashSettings, pwm_inverted: bool) -> Result<()> {
        let mut pairs = settings.to_wire();
        pairs.push(("PWM_INVERTED", SettingValue::Bool(pwm_inverted)));
        self.post_update(&pairs)
    }

    pub fn save_advanced(&self, settings: &AdvancedSettings) -> Result<()> {
        self.post_update(&settings.to_wire())
    }

    /// Save dispatched by group; `toggle` is the group's client-local flag
    /// (ignored for the advanced group, which has none).
    pub fn save(&self, values: &GroupSettings, toggle: bool) -> Result<()> {
        match values {
            GroupSettings::Camera(s) => self.save_camera(s, toggle),
            GroupSettings::Dash(s) => self.save_dash(s, toggle),
            GroupSettings::Advanced(s) => self.save_advanced(s),
        }
    }

    /// Factory reset: returns the defaults the caller should adopt as its
    /// local state, and pushes exactly those values (no toggles) to the
    /// device so client and device stay consistent. The push outcome is
    /// reported separately so local state resets even when the device is
    /// unreachable.
    pub fn reset_to_defaults(&self, group: Group) -> (GroupSettings, Result<()>) {
        let defaults = GroupSettings::defaults(group);
        let pushed = self.post_update(&defaults.to_wire());
        (defaults, pushed)
    }

    /// Dashboard-only calibration. The device calibrates against whatever
    /// settings it currently holds, so the save must land first; both calls
    /// are sequential blocking requests.
    pub fn calibrate(&self, settings: &DashSettings, pwm_inverted: bool) -> Result<()> {
        self.save_dash(settings, pwm_inverted)?;
        let resp = self
            .client
            .post(self.url("/calibrate"))
            .body("")
            .send()
            .context("POST /calibrate")?;
        resp.error_for_status().context("calibrate status")?;
        Ok(())
    }
}
