//! In-memory settings store
//!
//! Holds the single dashboard [`Settings`] record. Each operation takes the
//! write lock once, so a merge is never observed half-applied.

use crate::contract::{
    DashboardError, DisplayPreferences, DisplayPreferencesPatch, Notifications,
    NotificationsPatch, Settings, Thresholds, ThresholdsPatch,
};
use super::validation::require_non_empty;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: RwLock<Settings>,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            settings: RwLock::new(initial),
        }
    }

    pub fn get(&self) -> Settings {
        self.settings.read().clone()
    }

    pub fn update_notifications(&self, patch: NotificationsPatch) -> Notifications {
        let mut settings = self.settings.write();
        let current = &mut settings.notifications;
        if let Some(email) = patch.email {
            current.email = email;
        }
        if let Some(push) = patch.push {
            current.push = push;
        }
        if let Some(frequency) = patch.frequency {
            current.frequency = frequency;
        }
        current.clone()
    }

    pub fn update_thresholds(&self, patch: ThresholdsPatch) -> Thresholds {
        let mut settings = self.settings.write();
        let current = &mut settings.thresholds;
        if let Some(compliance) = patch.compliance {
            current.compliance = compliance;
        }
        if let Some(stock_level) = patch.stock_level {
            current.stock_level = stock_level;
        }
        if let Some(display_score) = patch.display_score {
            current.display_score = display_score;
        }
        *current
    }

    pub fn set_default_wilaya(&self, wilaya: Option<String>) -> Result<String, DashboardError> {
        let wilaya = require_non_empty(wilaya, "Wilaya is required")?;
        let mut settings = self.settings.write();
        settings.default_wilaya = wilaya;
        Ok(settings.default_wilaya.clone())
    }

    pub fn update_display_preferences(&self, patch: DisplayPreferencesPatch) -> DisplayPreferences {
        let mut settings = self.settings.write();
        let current = &mut settings.display_preferences;
        if let Some(language) = patch.language {
            current.language = language;
        }
        if let Some(theme) = patch.theme {
            current.theme = theme;
        }
        if let Some(timezone) = patch.timezone {
            current.timezone = timezone;
        }
        current.clone()
    }

    /// Replace everything with [`Settings::default`]
    pub fn reset(&self) -> Settings {
        let defaults = Settings::default();
        *self.settings.write() = defaults.clone();
        defaults
    }
}
