//=========================================================================
// Logic Loop
//=========================================================================
//
// Periodic simulation task: applies pulls, publishes progress, detects
// the winner.
//
// State machine:
// ```text
//   Running ──(winner found | stop requested)──► Finished (terminal)
// ```
//
// Each tick while Running:
//  1. GameField::advance()
//  2. Measure and publish pull percentages
//  3. Evaluate the win condition
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::pacing::{run_fixed_rate, TickControl};
use super::SessionControl;
use crate::core::field::{GameField, Winner};

//=== LoopState ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Finished,
}

//=== LogicLoop ===========================================================

/// Drives the field forward one tick at a time.
pub struct LogicLoop {
    field: Arc<GameField>,
    control: Arc<SessionControl>,
    state: LoopState,
    ticks: u64,
}

impl LogicLoop {
    pub fn new(field: Arc<GameField>, control: Arc<SessionControl>) -> Self {
        Self {
            field,
            control,
            state: LoopState::Running,
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    //--- tick() -----------------------------------------------------------

    /// Runs one logic tick and returns the resulting state.
    ///
    /// Once `Finished`, further calls do nothing.
    pub fn tick(&mut self) -> LoopState {
        if self.state == LoopState::Finished {
            return self.state;
        }

        if self.control.stop_requested() {
            debug!("Logic loop stopping after {} ticks", self.ticks);
            self.state = LoopState::Finished;
            return self.state;
        }

        self.ticks += 1;
        let report = self.field.advance();
        if !report.is_idle() {
            trace!(
                "Tick {}: applied {} + {} pulls",
                self.ticks, report.player1_pulls, report.player2_pulls
            );
        }
        self.field.publish_progress(self.field.measure_progress());

        if let Some(winner) = self.field.evaluate_winner() {
            self.finish(winner);
        }

        self.state
    }

    fn finish(&mut self, winner: Winner) {
        info!("Game over at tick {}: {}", self.ticks, winner);
        self.control.disable_input();
        self.state = LoopState::Finished;
    }

    //--- spawn() ----------------------------------------------------------

    /// Runs the loop on its own thread at `interval`.
    ///
    /// The thread returns the number of ticks it ran.
    pub fn spawn(mut self, interval: Duration) -> JoinHandle<u64> {
        thread::spawn(move || {
            debug!("Logic loop started ({:?} per tick)", interval);
            run_fixed_rate(interval, || match self.tick() {
                LoopState::Running => TickControl::Continue,
                LoopState::Finished => TickControl::Exit,
            });
            self.ticks
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::PlayerId;

    fn setup() -> (Arc<GameField>, Arc<SessionControl>, LogicLoop) {
        let field = Arc::new(GameField::new(900.0, 1000.0));
        let control = Arc::new(SessionControl::new());
        control.enable_input();
        let logic = LogicLoop::new(Arc::clone(&field), Arc::clone(&control));
        (field, control, logic)
    }

    #[test]
    fn idle_tick_keeps_running() {
        let (field, _control, mut logic) = setup();

        assert_eq!(logic.tick(), LoopState::Running);
        assert_eq!(logic.ticks(), 1);
        assert_eq!(field.position(PlayerId::One), 380.0);
    }

    #[test]
    fn tick_applies_pulls_and_publishes_progress() {
        let (field, _control, mut logic) = setup();
        field.register_pull(PlayerId::One);

        logic.tick();

        let snapshot = field.snapshot();
        assert_eq!(snapshot.player1_position, 373.0);
        assert!((snapshot.progress.player1 - 55.0).abs() < 1e-9);
        assert!((snapshot.progress.player2 - 45.0).abs() < 1e-9);
    }

    #[test]
    fn finishes_on_first_winning_tick() {
        let (field, control, mut logic) = setup();

        for tick in 1..=10 {
            field.register_pull(PlayerId::One);
            let state = logic.tick();
            if tick < 10 {
                assert_eq!(state, LoopState::Running);
            } else {
                assert_eq!(state, LoopState::Finished);
            }
        }

        assert_eq!(field.winner().map(|w| w.player), Some(PlayerId::One));
        assert!(!control.input_enabled());
    }

    #[test]
    fn finished_is_terminal() {
        let (field, _control, mut logic) = setup();
        for _ in 0..10 {
            field.register_pull(PlayerId::Two);
            logic.tick();
        }
        assert_eq!(logic.state(), LoopState::Finished);
        let ticks = logic.ticks();

        assert_eq!(logic.tick(), LoopState::Finished);
        assert_eq!(logic.ticks(), ticks);
    }

    #[test]
    fn stop_request_finishes_without_winner() {
        let (field, control, mut logic) = setup();
        control.end_session();

        assert_eq!(logic.tick(), LoopState::Finished);
        assert_eq!(field.winner(), None);
    }

    #[test]
    fn spawned_loop_exits_on_stop() {
        let (_field, control, logic) = setup();
        let handle = logic.spawn(Duration::from_millis(1));

        control.end_session();

        assert!(handle.join().is_ok());
    }
}
