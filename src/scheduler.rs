//! Frame scheduler
//!
//! Owns the run-loop lifecycle instead of each tick re-deciding at its tail.
//! The host calls [`FrameScheduler::frame`] once per display refresh and
//! requests the next refresh only when it returns true; state-machine
//! transitions feed their [`LoopSignal`]s through [`FrameScheduler::handle`]
//! to start a chain after it has wound down.

use crate::sim::{self, GameMode, GameState, LoopSignal};

#[derive(Debug, Default)]
pub struct FrameScheduler {
    running: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self { running: false }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Consume a transition signal. Returns true when a stopped chain was
    /// started — the host must then request the first animation frame.
    pub fn handle(&mut self, signal: LoopSignal) -> bool {
        match signal {
            LoopSignal::Start if !self.running => {
                self.running = true;
                log::debug!("frame chain started");
                true
            }
            LoopSignal::Stop if self.running => {
                self.running = false;
                log::debug!("frame chain stopped");
                false
            }
            _ => false,
        }
    }

    /// One scheduled invocation: a single simulation tick, then the
    /// reschedule decision. The host renders right after this call; the
    /// chain keeps running through Paused (frozen view) and terminates in
    /// Menu until a start/resume signal kicks off a new one.
    pub fn frame(&mut self, state: &mut GameState) -> bool {
        if !self.running {
            return false;
        }
        sim::tick(state);
        self.running = matches!(state.mode, GameMode::Playing | GameMode::Paused);
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Intent, apply_intent};

    fn setup() -> (FrameScheduler, GameState) {
        (FrameScheduler::new(), GameState::new(5, 800.0, 600.0))
    }

    #[test]
    fn test_no_frames_before_start() {
        let (mut scheduler, mut state) = setup();
        assert!(!scheduler.frame(&mut state));
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_start_begins_the_chain() {
        let (mut scheduler, mut state) = setup();

        let kicked = scheduler.handle(state.start());
        assert!(kicked);
        assert!(scheduler.frame(&mut state));
        assert_eq!(state.time_ticks, 1);

        // A second Start while running does not kick another chain
        assert!(!scheduler.handle(LoopSignal::Start));
    }

    #[test]
    fn test_chain_survives_pause_without_simulating() {
        let (mut scheduler, mut state) = setup();
        scheduler.handle(state.start());
        scheduler.frame(&mut state);

        apply_intent(&mut state, Intent::Pause);
        assert!(scheduler.frame(&mut state));
        assert!(scheduler.frame(&mut state));
        // Frozen: ticks did not advance while paused
        assert_eq!(state.time_ticks, 1);

        scheduler.handle(apply_intent(&mut state, Intent::Resume));
        scheduler.frame(&mut state);
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_quit_terminates_the_chain() {
        let (mut scheduler, mut state) = setup();
        scheduler.handle(state.start());
        scheduler.frame(&mut state);

        scheduler.handle(apply_intent(&mut state, Intent::Quit));
        assert!(!scheduler.running());
        assert!(!scheduler.frame(&mut state));

        // Starting again from the menu kicks a fresh chain
        assert!(scheduler.handle(state.start()));
        assert!(scheduler.frame(&mut state));
    }

    #[test]
    fn test_menu_mode_self_terminates() {
        // Quit applied between frames (from a button rather than a key):
        // the next frame notices Menu mode and ends the chain itself.
        let (mut scheduler, mut state) = setup();
        scheduler.handle(state.start());
        scheduler.frame(&mut state);

        state.quit();
        assert!(!scheduler.frame(&mut state));
        assert!(!scheduler.running());
    }
}
