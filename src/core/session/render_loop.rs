//=========================================================================
// Render Loop
//=========================================================================
//
// Periodic presentation task, scheduled independently of the logic loop.
//
// Each tick takes one snapshot (a single lock acquisition, so the two
// players never tear) and hands it to the observer. The loop ends after
// delivering the first game-over frame, or when the session is stopped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use super::pacing::{run_fixed_rate, TickControl};
use super::{FrameObserver, SessionControl};
use crate::core::field::GameField;

//=== RenderLoop ==========================================================

pub struct RenderLoop {
    field: Arc<GameField>,
    control: Arc<SessionControl>,
    observer: Box<dyn FrameObserver>,
    frames: u64,
}

impl RenderLoop {
    pub fn new(
        field: Arc<GameField>,
        control: Arc<SessionControl>,
        observer: Box<dyn FrameObserver>,
    ) -> Self {
        Self {
            field,
            control,
            observer,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Presents one frame.
    pub fn tick(&mut self) -> TickControl {
        if self.control.stop_requested() {
            debug!("Render loop stopping after {} frames", self.frames);
            self.observer.on_stopped();
            return TickControl::Exit;
        }

        let snapshot = self.field.snapshot();
        self.frames += 1;
        self.observer.on_frame(&snapshot);

        match snapshot.winner {
            Some(winner) => {
                self.observer.on_game_over(winner);
                TickControl::Exit
            }
            None => TickControl::Continue,
        }
    }

    /// Runs the loop on its own thread at `interval`.
    ///
    /// The thread returns the number of frames presented.
    pub fn spawn(mut self, interval: Duration) -> JoinHandle<u64> {
        thread::spawn(move || {
            debug!("Render loop started ({:?} per frame)", interval);
            run_fixed_rate(interval, || self.tick());
            self.frames
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::{FieldSnapshot, PlayerId, Winner};
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct Recorded {
        frames: Vec<FieldSnapshot>,
        winners: Vec<Winner>,
        stopped: usize,
    }

    struct Recorder(Arc<Mutex<Recorded>>);

    impl FrameObserver for Recorder {
        fn on_frame(&mut self, snapshot: &FieldSnapshot) {
            self.0.lock().unwrap().frames.push(snapshot.clone());
        }

        fn on_game_over(&mut self, winner: Winner) {
            self.0.lock().unwrap().winners.push(winner);
        }

        fn on_stopped(&mut self) {
            self.0.lock().unwrap().stopped += 1;
        }
    }

    fn setup() -> (Arc<GameField>, Arc<SessionControl>, Arc<Mutex<Recorded>>, RenderLoop) {
        let field = Arc::new(GameField::new(900.0, 1000.0));
        let control = Arc::new(SessionControl::new());
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let render = RenderLoop::new(
            Arc::clone(&field),
            Arc::clone(&control),
            Box::new(Recorder(Arc::clone(&recorded))),
        );
        (field, control, recorded, render)
    }

    #[test]
    fn tick_presents_current_snapshot() {
        let (field, _control, recorded, mut render) = setup();

        assert_eq!(render.tick(), TickControl::Continue);

        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.frames, vec![field.snapshot()]);
        assert!(recorded.winners.is_empty());
    }

    #[test]
    fn game_over_frame_is_delivered_then_loop_exits() {
        let (field, _control, recorded, mut render) = setup();
        for _ in 0..10 {
            field.register_pull(PlayerId::One);
            field.advance();
        }
        field.evaluate_winner();

        assert_eq!(render.tick(), TickControl::Exit);

        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.frames.len(), 1);
        assert!(recorded.frames[0].game_over());
        assert_eq!(recorded.winners, vec![Winner { player: PlayerId::One }]);
    }

    #[test]
    fn stop_request_notifies_observer() {
        let (_field, control, recorded, mut render) = setup();
        control.end_session();

        assert_eq!(render.tick(), TickControl::Exit);

        let recorded = recorded.lock().unwrap();
        assert!(recorded.frames.is_empty());
        assert_eq!(recorded.stopped, 1);
    }

    #[test]
    fn spawned_loop_counts_frames() {
        let (_field, control, _recorded, render) = setup();
        let handle = render.spawn(Duration::from_millis(1));

        std::thread::sleep(Duration::from_millis(20));
        control.end_session();

        assert!(handle.join().unwrap() >= 1);
    }
}
