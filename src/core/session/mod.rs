//=========================================================================
// Session
//=========================================================================
//
// One game from start to winner (or abort).
//
// Architecture:
// ```text
//   Session
//     ├─ Arc<GameField>        shared rope state
//     ├─ Arc<SessionControl>   input gate + stop flag
//     ├─ Arc<InputDispatcher>  handed to input producers
//     ├─ LogicLoop thread      advance → progress → winner
//     └─ RenderLoop thread     snapshot → FrameObserver
// ```
//
// The two loops share nothing but the field and the control flags; each
// paces itself and stops on its own once it observes the end.
//
//=========================================================================

//=== Module Declarations =================================================

mod control;
mod logic_loop;
mod observer;
mod pacing;
mod render_loop;

//=== Public API ==========================================================

pub use control::SessionControl;
pub use logic_loop::{LogicLoop, LoopState};
pub use observer::{FrameObserver, LogObserver};
pub use pacing::{run_fixed_rate, TickControl};
pub use render_loop::RenderLoop;

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::thread::JoinHandle;

use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;
use crate::core::field::{FieldSnapshot, GameField};
use crate::core::input::{ActionMapper, InputDispatcher};

//=== Session =============================================================

/// Owns one field and the threads that drive it.
///
/// # Lifecycle
///
/// 1. `Session::new()` builds the field; input is disabled
/// 2. `start_session()` opens input and spawns both loops
/// 3. Input flows through `dispatcher()` until a winner or `end_session()`
/// 4. `join()` waits for both loops and returns the final snapshot
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tug_of_war::core::config::GameConfig;
/// use tug_of_war::core::session::{LogObserver, Session};
///
/// let config = GameConfig {
///     tick_interval: Duration::from_millis(1),
///     ..GameConfig::default()
/// };
/// let mut session = Session::new(config, Box::new(LogObserver::new()));
/// session.start_session();
/// session.end_session();
///
/// let snapshot = session.join();
/// assert!(!snapshot.game_over());
/// ```
pub struct Session {
    config: GameConfig,
    field: Arc<GameField>,
    control: Arc<SessionControl>,
    dispatcher: Arc<InputDispatcher>,
    observer: Option<Box<dyn FrameObserver>>,
    logic: Option<JoinHandle<u64>>,
    render: Option<JoinHandle<u64>>,
}

impl Session {
    //--- Construction -----------------------------------------------------

    /// Creates a session with the default key bindings.
    pub fn new(config: GameConfig, observer: Box<dyn FrameObserver>) -> Self {
        Self::with_bindings(config, ActionMapper::default(), observer)
    }

    /// Creates a session with custom key bindings.
    pub fn with_bindings(
        config: GameConfig,
        mapper: ActionMapper,
        observer: Box<dyn FrameObserver>,
    ) -> Self {
        let field = Arc::new(GameField::from_config(&config));
        let control = Arc::new(SessionControl::new());
        let dispatcher = Arc::new(InputDispatcher::new(
            Arc::clone(&field),
            Arc::clone(&control),
            mapper,
        ));

        Self {
            config,
            field,
            control,
            dispatcher,
            observer: Some(observer),
            logic: None,
            render: None,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn field(&self) -> Arc<GameField> {
        Arc::clone(&self.field)
    }

    pub fn control(&self) -> Arc<SessionControl> {
        Arc::clone(&self.control)
    }

    pub fn dispatcher(&self) -> Arc<InputDispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True between `start_session()` and the end of the game.
    pub fn is_running(&self) -> bool {
        self.logic.is_some() && !self.control.stop_requested() && !self.field.is_game_over()
    }

    //--- Lifecycle --------------------------------------------------------

    /// Opens input and starts both periodic loops.
    ///
    /// A session runs once; later calls only log a warning.
    pub fn start_session(&mut self) {
        let Some(observer) = self.observer.take() else {
            warn!("Session already started");
            return;
        };

        let interval = self.config.tick_interval;
        info!("Starting session ({:?} per tick)", interval);

        self.control.enable_input();

        let logic = LogicLoop::new(Arc::clone(&self.field), Arc::clone(&self.control));
        self.logic = Some(logic.spawn(interval));

        let render = RenderLoop::new(Arc::clone(&self.field), Arc::clone(&self.control), observer);
        self.render = Some(render.spawn(interval));
    }

    /// Closes input and asks both loops to stop.
    pub fn end_session(&self) {
        self.control.end_session();
    }

    /// Waits for both loops and returns the final snapshot.
    ///
    /// Blocks until the game is won or `end_session()` was called. A
    /// panicked loop thread is logged, not propagated.
    pub fn join(mut self) -> FieldSnapshot {
        if let Some(handle) = self.logic.take() {
            match handle.join() {
                Ok(ticks) => info!("Logic loop finished after {} ticks", ticks),
                Err(e) => error!("Logic thread panicked: {:?}", e),
            }
        }

        // The render loop only stops on its own after a winner; make sure an
        // aborted logic loop brings it down too.
        if !self.field.is_game_over() {
            self.control.end_session();
        }

        if let Some(handle) = self.render.take() {
            match handle.join() {
                Ok(frames) => info!("Render loop finished after {} frames", frames),
                Err(e) => error!("Render thread panicked: {:?}", e),
            }
        }

        self.field.snapshot()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::{PlayerId, Winner};
    use crate::core::input::{Dispatch, InputEvent, KeyCode};
    use crossbeam_channel::unbounded;
    use std::time::{Duration, Instant};

    fn fast_config() -> GameConfig {
        GameConfig {
            tick_interval: Duration::from_millis(1),
            ..GameConfig::default()
        }
    }

    #[test]
    fn new_session_has_input_closed() {
        let session = Session::new(fast_config(), Box::new(LogObserver::new()));
        assert!(!session.control().input_enabled());
        assert!(!session.is_running());
    }

    #[test]
    fn start_opens_input() {
        let mut session = Session::new(fast_config(), Box::new(LogObserver::new()));
        session.start_session();

        assert!(session.control().input_enabled());
        assert!(session.is_running());

        session.end_session();
        session.join();
    }

    #[test]
    fn second_start_is_ignored() {
        let mut session = Session::new(fast_config(), Box::new(LogObserver::new()));
        session.start_session();
        session.start_session();
        session.end_session();

        let snapshot = session.join();
        assert!(!snapshot.game_over());
    }

    fn pull_until_game_over(session: &Session, key: KeyCode) {
        let dispatcher = session.dispatcher();
        let deadline = Instant::now() + Duration::from_secs(5);

        while !session.field().is_game_over() && Instant::now() < deadline {
            if let Dispatch::Pulled(task) = dispatcher.dispatch(&InputEvent::KeyDown(key)) {
                task.join();
            }
            std::thread::sleep(Duration::from_millis(2));
        }
    }

    #[test]
    fn player_one_pulls_until_player_one_wins() {
        let mut session = Session::new(fast_config(), Box::new(LogObserver::new()));
        session.start_session();

        pull_until_game_over(&session, KeyCode::KeyA);
        let snapshot = session.join();

        assert_eq!(snapshot.winner, Some(Winner { player: PlayerId::One }));
        assert!(snapshot.player2_position <= snapshot.center);
    }

    #[test]
    fn player_two_pulls_until_player_two_wins() {
        let mut session = Session::new(fast_config(), Box::new(LogObserver::new()));
        session.start_session();

        pull_until_game_over(&session, KeyCode::KeyL);
        let snapshot = session.join();

        assert_eq!(snapshot.winner, Some(Winner { player: PlayerId::Two }));
        assert!(snapshot.player1_position >= snapshot.center);
    }

    #[test]
    fn pulls_are_rejected_after_game_over() {
        let mut session = Session::new(fast_config(), Box::new(LogObserver::new()));
        session.start_session();

        pull_until_game_over(&session, KeyCode::KeyA);
        let dispatcher = session.dispatcher();
        let before = session.field().snapshot();

        let dispatch = dispatcher.dispatch(&InputEvent::KeyDown(KeyCode::KeyL));
        assert!(matches!(dispatch, Dispatch::Rejected));

        let control = session.control();
        let after = session.join();
        assert!(!control.input_enabled());
        assert_eq!(after.player1_position, before.player1_position);
        assert_eq!(after.player2_position, before.player2_position);
    }

    #[test]
    fn channel_observer_sees_final_frame() {
        let (tx, rx) = unbounded();
        let mut session = Session::new(fast_config(), Box::new(tx));
        session.start_session();

        pull_until_game_over(&session, KeyCode::KeyA);
        session.join();

        let frames: Vec<FieldSnapshot> = rx.try_iter().collect();
        assert!(!frames.is_empty());
        assert!(frames.last().is_some_and(FieldSnapshot::game_over));
        assert_eq!(frames.iter().filter(|frame| frame.game_over()).count(), 1);
    }

    #[test]
    fn end_session_stops_without_winner() {
        let (tx, rx) = unbounded();
        let mut session = Session::new(fast_config(), Box::new(tx));
        session.start_session();
        std::thread::sleep(Duration::from_millis(10));

        session.end_session();
        let snapshot = session.join();

        assert!(snapshot.winner.is_none());
        assert!(rx.try_iter().all(|frame| !frame.game_over()));
    }

    #[test]
    fn join_without_start_returns_initial_snapshot() {
        let session = Session::new(fast_config(), Box::new(LogObserver::new()));
        let snapshot = session.join();

        assert_eq!(snapshot.player1_position, 380.0);
        assert_eq!(snapshot.player2_position, 520.0);
    }
}
