//! Viewer preferences and their string serialization.
//!
//! The watching client keeps its configuration in a browser-local
//! key/value store; this module is the typed view over it. Unknown keys
//! and malformed values are errors, never silent coercions.

use crate::catalog_store::LanguageFilter;
use crate::shelves::FilterMode;
use chrono::NaiveDate;
use std::collections::HashMap;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// All supported viewer preferences with their typed values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerPref {
    /// Parental watch budget granted each day, in seconds.
    DailyLimitSecs(u32),
    /// Budget left today, in seconds.
    RemainingSecs(u32),
    /// Date the budget was last restored.
    LastResetDate(NaiveDate),
    /// Videos / music / radio browsing mode.
    FilterMode(FilterMode),
    /// Content language restriction.
    LanguageMode(LanguageFilter),
    /// Which child profile is watching.
    Profile(String),
    /// Whether the on-screen debug overlay is shown.
    DebugOverlay(bool),
}

impl ViewerPref {
    /// Get the storage key for this preference.
    pub fn key(&self) -> &'static str {
        match self {
            Self::DailyLimitSecs(_) => "daily_limit_secs",
            Self::RemainingSecs(_) => "remaining_secs",
            Self::LastResetDate(_) => "last_reset_date",
            Self::FilterMode(_) => "filter_mode",
            Self::LanguageMode(_) => "language_mode",
            Self::Profile(_) => "profile",
            Self::DebugOverlay(_) => "debug_overlay",
        }
    }

    /// Serialize the value to a string for storage.
    pub fn value_to_string(&self) -> String {
        match self {
            Self::DailyLimitSecs(secs) | Self::RemainingSecs(secs) => secs.to_string(),
            Self::LastResetDate(date) => date.format(DATE_FORMAT).to_string(),
            Self::FilterMode(mode) => mode.as_str().to_string(),
            Self::LanguageMode(filter) => filter.as_wire_str().to_string(),
            Self::Profile(profile) => profile.clone(),
            Self::DebugOverlay(enabled) => enabled.to_string(),
        }
    }

    /// Deserialize from key-value strings.
    ///
    /// Returns `Err` with a description if the key is unknown or the
    /// value is invalid.
    pub fn from_key_value(key: &str, value: &str) -> Result<Self, String> {
        match key {
            "daily_limit_secs" | "remaining_secs" => {
                let secs = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid seconds value for {}: {}", key, value))?;
                Ok(if key == "daily_limit_secs" {
                    Self::DailyLimitSecs(secs)
                } else {
                    Self::RemainingSecs(secs)
                })
            }
            "last_reset_date" => {
                let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
                    .map_err(|_| format!("Invalid date value for {}: {}", key, value))?;
                Ok(Self::LastResetDate(date))
            }
            "filter_mode" => FilterMode::from_str(value)
                .map(Self::FilterMode)
                .ok_or_else(|| format!("Invalid filter mode: {}", value)),
            "language_mode" => LanguageFilter::parse(value)
                .map(Self::LanguageMode)
                .ok_or_else(|| format!("Invalid language mode: {}", value)),
            "profile" => Ok(Self::Profile(value.to_string())),
            "debug_overlay" => {
                let enabled = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for {}: {}", key, value))?;
                Ok(Self::DebugOverlay(enabled))
            }
            _ => Err(format!("Unknown preference key: {}", key)),
        }
    }

    /// Get the default value for a preference by key.
    pub fn default_for_key(key: &str) -> Option<Self> {
        match key {
            "daily_limit_secs" => Some(Self::DailyLimitSecs(3600)),
            "remaining_secs" => Some(Self::RemainingSecs(3600)),
            "filter_mode" => Some(Self::FilterMode(FilterMode::Videos)),
            "language_mode" => Some(Self::LanguageMode(LanguageFilter::All)),
            "profile" => Some(Self::Profile(String::new())),
            "debug_overlay" => Some(Self::DebugOverlay(false)),
            _ => None,
        }
    }
}

/// String key/value storage the preferences live in; the browser-local
/// store on a real client.
pub trait PrefsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory store for tests and the engine's own bookkeeping.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, String>,
}

impl PrefsStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

/// Read a preference through the typed layer. A stored value that no
/// longer parses is an error, absence is `Ok(None)`.
pub fn read_pref(store: &dyn PrefsStore, key: &str) -> Result<Option<ViewerPref>, String> {
    match store.get(key) {
        Some(value) => ViewerPref::from_key_value(key, &value).map(Some),
        None => Ok(None),
    }
}

/// Write a preference through the typed layer.
pub fn write_pref(store: &mut dyn PrefsStore, pref: &ViewerPref) {
    store.set(pref.key(), pref.value_to_string());
}
