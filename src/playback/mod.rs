mod controller;
mod prefs;
mod session;
mod timer;

pub use controller::{PlaybackController, WidgetState};
pub use prefs::{read_pref, write_pref, MemoryPrefs, PrefsStore, ViewerPref};
pub use session::{PlaybackPhase, PlaybackSession};
pub use timer::{
    apply_daily_reset, TimerTick, WatchTimer, DEFAULT_DAILY_LIMIT_SECS, FADE_WINDOW_SECS,
};
