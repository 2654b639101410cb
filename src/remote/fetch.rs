use super::*;

use crate::model::{Group, GroupSettings};

/// Result of a settings fetch. Fetch never fails from the caller's point of
/// view: any transport or server error on `GET /config` is absorbed into
/// `Defaulted` carrying the group's factory table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The device answered; values came from its `/config` response.
    Fresh(GroupSettings),
    /// The fetch failed; values are the group's factory defaults.
    Defaulted(GroupSettings),
}

impl FetchOutcome {
    pub fn values(&self) -> &GroupSettings {
        match self {
            FetchOutcome::Fresh(v) | FetchOutcome::Defaulted(v) => v,
        }
    }

    pub fn into_values(self) -> GroupSettings {
        match self {
            FetchOutcome::Fresh(v) | FetchOutcome::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, FetchOutcome::Defaulted(_))
    }
}

impl DeviceClient {
    /// One GET to `/config`. Only the group's fields are extracted from the
    /// response; fields belonging to other groups (or unknown to the client)
    /// are ignored, and absent fields take their factory default.
    pub fn fetch(&self, group: Group) -> FetchOutcome {
        match self.try_fetch(group) {
            Ok(values) => FetchOutcome::Fresh(values),
            Err(_) => FetchOutcome::Defaulted(GroupSettings::defaults(group)),
        }
    }

    fn try_fetch(&self, group: Group) -> Result<GroupSettings> {
        let resp = self
            .client
            .get(self.url("/config"))
            .send()
            .context("GET /config")?;
        let resp = resp.error_for_status().context("config status")?;
        let body: serde_json::Value = resp.json().context("parse config body")?;
        let map = body
            .as_object()
            .context("config body is not a JSON object")?;
        Ok(GroupSettings::from_wire(group, map))
    }
}
