//! Playback session state machine.
//!
//! One session per visit to the playback view:
//! `Unstarted -> Playing <-> Paused -> ForcePaused` where the last
//! transition fires when the watch budget runs out. `ForcePaused` is
//! terminal; only returning to the catalog (a new session) clears it.

use super::controller::{PlaybackController, WidgetState};
use super::timer::{TimerTick, WatchTimer};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    Unstarted,
    Playing,
    Paused,
    ForcePaused,
}

pub struct PlaybackSession<C: PlaybackController> {
    controller: C,
    timer: WatchTimer,
    phase: PlaybackPhase,
}

impl<C: PlaybackController> PlaybackSession<C> {
    pub fn new(controller: C, timer: WatchTimer) -> Self {
        PlaybackSession {
            controller,
            timer,
            phase: PlaybackPhase::Unstarted,
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.timer.remaining_secs()
    }

    /// Ask the player to start. Ignored once the budget is spent or when
    /// there was no budget to begin with.
    pub fn request_play(&mut self) {
        if self.phase == PlaybackPhase::ForcePaused || self.timer.snapshot().expired {
            return;
        }
        self.controller.play();
    }

    pub fn request_pause(&mut self) {
        if self.phase == PlaybackPhase::ForcePaused {
            return;
        }
        self.controller.pause();
    }

    /// The single play/pause button of the playback view.
    pub fn toggle(&mut self) {
        match self.phase {
            PlaybackPhase::Playing => self.request_pause(),
            _ => self.request_play(),
        }
    }

    /// Feed a state-change notification from the embedded widget.
    ///
    /// The widget is the source of truth for whether media is actually
    /// rolling; a `Playing` report after force-pause is countermanded.
    pub fn widget_state_changed(&mut self, state: WidgetState) {
        if self.phase == PlaybackPhase::ForcePaused {
            if state == WidgetState::Playing {
                self.controller.pause();
            }
            return;
        }
        match state {
            WidgetState::Playing => self.phase = PlaybackPhase::Playing,
            WidgetState::Paused | WidgetState::Ended => {
                if self.phase == PlaybackPhase::Playing {
                    self.phase = PlaybackPhase::Paused;
                }
            }
            WidgetState::Unstarted | WidgetState::Buffering | WidgetState::Cued => {}
        }
    }

    /// One-second tick. Budget is only consumed while playing; expiry
    /// pauses the player and ends the session.
    pub fn tick(&mut self) -> TimerTick {
        if self.phase != PlaybackPhase::Playing {
            return self.timer.snapshot();
        }
        let tick = self.timer.tick();
        self.controller.set_volume(tick.volume);
        if tick.expired {
            self.controller.pause();
            self.phase = PlaybackPhase::ForcePaused;
        }
        tick
    }
}
