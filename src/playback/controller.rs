//! Playback controller abstraction.
//!
//! The embedded third-party player widget is callback-driven; everything
//! the timer and session logic needs from it is behind this trait so the
//! logic is testable with a recording mock.

/// Commands the playback view issues to the embedded player.
pub trait PlaybackController {
    fn play(&mut self);
    fn pause(&mut self);
    /// Volume in percent, 0..=100.
    fn set_volume(&mut self, volume: u8);
}

/// State reported by the widget's state-change callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetState {
    Unstarted,
    Ended,
    Playing,
    Paused,
    Buffering,
    Cued,
}

impl WidgetState {
    /// Decode the numeric state codes the embedded player API emits.
    pub fn from_widget_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(WidgetState::Unstarted),
            0 => Some(WidgetState::Ended),
            1 => Some(WidgetState::Playing),
            2 => Some(WidgetState::Paused),
            3 => Some(WidgetState::Buffering),
            5 => Some(WidgetState::Cued),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_codes_decode() {
        assert_eq!(WidgetState::from_widget_code(1), Some(WidgetState::Playing));
        assert_eq!(WidgetState::from_widget_code(2), Some(WidgetState::Paused));
        assert_eq!(WidgetState::from_widget_code(-1), Some(WidgetState::Unstarted));
        assert_eq!(WidgetState::from_widget_code(4), None);
    }
}
