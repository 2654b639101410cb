use anyhow::Result;

use crate::model::{Group, GroupSettings};
use crate::remote::DeviceClient;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Tab {
    Camera,
    Dashboard,
    Advanced,
    About,
}

pub(super) const TABS: [Tab; 4] = [Tab::Camera, Tab::Dashboard, Tab::Advanced, Tab::About];

impl Tab {
    pub(super) fn title(self) -> &'static str {
        match self {
            Tab::Camera => "Camera",
            Tab::Dashboard => "Dashboard",
            Tab::Advanced => "Advanced",
            Tab::About => "About",
        }
    }

    pub(super) fn group(self) -> Option<Group> {
        match self {
            Tab::Camera => Some(Group::Camera),
            Tab::Dashboard => Some(Group::Dash),
            Tab::Advanced => Some(Group::Advanced),
            Tab::About => None,
        }
    }

    fn index(self) -> usize {
        TABS.iter().position(|t| *t == self).unwrap_or(0)
    }
}

/// Editable state for the active tab. Rebuilt from a fresh fetch on every
/// tab entry; nothing is shared across screens.
pub(super) struct Screen {
    pub(super) values: GroupSettings,
    /// HIGHLIGHT (camera) or PWM_INVERTED (dashboard). Client-local: starts
    /// false on screen entry, never fetched.
    pub(super) toggle: bool,
    pub(super) defaulted: bool,
}

pub(super) struct App {
    client: DeviceClient,
    pub(super) tab: Tab,
    pub(super) screen: Screen,
    pub(super) selected: usize,
    pub(super) image_url: String,
    pub(super) status: String,
    pub(super) should_quit: bool,
}

impl App {
    pub(super) fn connect(base_url: &str) -> Result<Self> {
        let client = DeviceClient::new(base_url)?;
        let outcome = client.fetch(Group::Camera);
        let image_url = client.next_image_url();
        let mut app = Self {
            client,
            tab: Tab::Camera,
            screen: Screen {
                values: GroupSettings::defaults(Group::Camera),
                toggle: false,
                defaulted: true,
            },
            selected: 0,
            image_url,
            status: String::new(),
            should_quit: false,
        };
        app.adopt_fetch(outcome.is_defaulted(), outcome.into_values());
        Ok(app)
    }

    fn adopt_fetch(&mut self, defaulted: bool, values: GroupSettings) {
        self.screen = Screen {
            values,
            toggle: false,
            defaulted,
        };
        self.selected = 0;
        self.status = if defaulted {
            "device unreachable; showing factory defaults".to_string()
        } else {
            "settings loaded".to_string()
        };
    }

    pub(super) fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.selected = 0;
        if let Some(group) = tab.group() {
            let outcome = self.client.fetch(group);
            self.adopt_fetch(outcome.is_defaulted(), outcome.into_values());
        } else {
            self.status.clear();
        }
        self.image_url = self.client.next_image_url();
    }

    pub(super) fn next_tab(&mut self) {
        let next = TABS[(self.tab.index() + 1) % TABS.len()];
        self.switch_tab(next);
    }

    pub(super) fn prev_tab(&mut self) {
        let prev = TABS[(self.tab.index() + TABS.len() - 1) % TABS.len()];
        self.switch_tab(prev);
    }

    /// Numeric rows followed by the tab's toggle row, if it has one.
    pub(super) fn row_count(&self) -> usize {
        match self.tab.group() {
            Some(group) => group.names().len() + usize::from(group.toggle_name().is_some()),
            None => 0,
        }
    }

    pub(super) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1).min(rows - 1);
    }

    pub(super) fn adjust(&mut self, direction: i64) {
        let Some(group) = self.tab.group() else {
            return;
        };
        let names = group.names();
        if self.selected >= names.len() {
            // Toggle row; left/right flips it like space does.
            self.screen.toggle = !self.screen.toggle;
            return;
        }
        let name = names[self.selected];
        if let Some(current) = self.screen.values.get(name) {
            self.screen.values.set(name, current + direction * step_for(name));
        }
    }

    pub(super) fn flip_toggle(&mut self) {
        if self.tab.group().is_some_and(|g| g.toggle_name().is_some()) {
            self.screen.toggle = !self.screen.toggle;
        }
    }

    pub(super) fn save(&mut self) {
        if self.tab.group().is_none() {
            return;
        }
        match self.client.save(&self.screen.values, self.screen.toggle) {
            Ok(()) => self.status = "saved".to_string(),
            Err(err) => self.status = format!("save failed: {:#}", err),
        }
        self.image_url = self.client.next_image_url();
    }

    pub(super) fn reset(&mut self) {
        let Some(group) = self.tab.group() else {
            return;
        };
        let (defaults, pushed) = self.client.reset_to_defaults(group);
        self.screen.values = defaults;
        self.screen.defaulted = false;
        self.status = match pushed {
            Ok(()) => "factory defaults applied".to_string(),
            Err(err) => format!("defaults restored locally; push failed: {:#}", err),
        };
        self.image_url = self.client.next_image_url();
    }

    pub(super) fn calibrate(&mut self) {
        if self.tab != Tab::Dashboard {
            return;
        }
        let Some(dash) = self.screen.values.as_dash().copied() else {
            return;
        };
        match self.client.calibrate(&dash, self.screen.toggle) {
            Ok(()) => self.status = "calibration started".to_string(),
            Err(err) => self.status = format!("calibrate failed: {:#}", err),
        }
        self.image_url = self.client.next_image_url();
    }

    pub(super) fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub(super) fn log_url(&self) -> String {
        self.client.log_url()
    }
}

fn step_for(name: &str) -> i64 {
    match name {
        "MIN_VOLTAGE" | "MAX_VOLTAGE" | "SUPPLY_VOLTAGE" => 50,
        _ => 1,
    }
}
