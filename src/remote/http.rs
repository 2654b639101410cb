use super::*;

use crate::model::SettingValue;

impl DeviceClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST flat pairs to `/update`, form-encoded. The device ignores the
    /// response body; we only surface the transport/status outcome.
    pub(super) fn post_update(&self, pairs: &[(&'static str, SettingValue)]) -> Result<()> {
        let form: Vec<(String, String)> = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.form_value()))
            .collect();
        let resp = self
            .client
            .post(self.url("/update"))
            .form(&form)
            .send()
            .context("POST /update")?;
        resp.error_for_status().context("update status")?;
        Ok(())
    }
}
