//! Parental watch-budget countdown.
//!
//! One tick per second of playback. During the final minute each tick
//! derives a fading volume and a darkening overlay; at zero the budget is
//! spent. The remaining budget is restored from the daily limit once per
//! calendar day.

use super::prefs::{read_pref, write_pref, PrefsStore, ViewerPref};
use chrono::NaiveDate;

/// Length of the fade-out window before the budget runs out.
pub const FADE_WINDOW_SECS: u32 = 60;

/// Fallback daily budget when no preference has ever been stored.
pub const DEFAULT_DAILY_LIMIT_SECS: u32 = 3600;

/// Snapshot of the timer after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimerTick {
    pub remaining_secs: u32,
    /// Playback volume in percent: 100 outside the fade window, then
    /// linear down to 0.
    pub volume: u8,
    /// Dimming overlay opacity, complementary to the volume.
    pub overlay_opacity: f32,
    pub expired: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct WatchTimer {
    remaining_secs: u32,
}

impl WatchTimer {
    pub fn new(remaining_secs: u32) -> Self {
        WatchTimer { remaining_secs }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Consume one second of budget and report the resulting effects.
    pub fn tick(&mut self) -> TimerTick {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        self.snapshot()
    }

    /// Current effects without consuming budget.
    pub fn snapshot(&self) -> TimerTick {
        let volume = if self.remaining_secs >= FADE_WINDOW_SECS {
            100
        } else {
            (self.remaining_secs * 100 / FADE_WINDOW_SECS) as u8
        };
        TimerTick {
            remaining_secs: self.remaining_secs,
            volume,
            overlay_opacity: 1.0 - f32::from(volume) / 100.0,
            expired: self.remaining_secs == 0,
        }
    }
}

/// Restore the remaining budget from the daily limit if the stored reset
/// date is not `today`. Returns whether a reset happened; calling again
/// on the same date is a no-op.
pub fn apply_daily_reset(prefs: &mut dyn PrefsStore, today: NaiveDate) -> Result<bool, String> {
    let already_reset = matches!(
        read_pref(prefs, "last_reset_date")?,
        Some(ViewerPref::LastResetDate(date)) if date == today
    );
    if already_reset {
        return Ok(false);
    }

    let limit = match read_pref(prefs, "daily_limit_secs")? {
        Some(ViewerPref::DailyLimitSecs(limit)) => limit,
        _ => DEFAULT_DAILY_LIMIT_SECS,
    };
    write_pref(prefs, &ViewerPref::RemainingSecs(limit));
    write_pref(prefs, &ViewerPref::LastResetDate(today));
    Ok(true)
}
