//=========================================================================
// Input Dispatcher
//=========================================================================
//
// Turns input events into pulls on the shared field.
//
// Architecture:
// ```text
//   InputEvent ──► ActionMapper ──► TugAction
//                                     │
//                 ┌───────────────────┴──────────────┐
//                 ▼                                  ▼
//          Pull(player)                            Quit
//   gate: input enabled && !game over        SessionControl::end_session
//                 │
//                 ▼
//   thread::spawn ─► GameField::register_pull(player)
// ```
//
// Every accepted pull runs on its own short-lived thread. Nothing is
// queued or debounced: rapid input simply raises the pending counter.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{ActionMapper, InputEvent, TugAction};
use crate::core::field::{GameField, PlayerId};
use crate::core::session::SessionControl;

//=== PullTask ============================================================

/// Handle to the thread registering one pull.
///
/// Dropping it detaches the thread; the pull still lands.
#[derive(Debug)]
pub struct PullTask {
    handle: JoinHandle<bool>,
}

impl PullTask {
    /// Waits for the pull to land. Returns `false` if the field rejected it
    /// because the game ended in the meantime.
    ///
    /// A panic on the pull thread (counter overflow) is re-raised here.
    pub fn join(self) -> bool {
        match self.handle.join() {
            Ok(registered) => registered,
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}

//=== Dispatch ============================================================

/// Outcome of dispatching one input.
#[derive(Debug)]
pub enum Dispatch {
    /// The event is not bound to any action.
    Ignored,

    /// A pull was refused: input disabled or game over.
    Rejected,

    /// A pull was accepted and is being registered.
    Pulled(PullTask),

    /// The quit action ended the session.
    Quit,
}

impl Dispatch {
    pub fn is_pulled(&self) -> bool {
        matches!(self, Dispatch::Pulled(_))
    }
}

//=== InputDispatcher =====================================================

/// Routes input to the field, gated by the session state.
pub struct InputDispatcher {
    field: Arc<GameField>,
    control: Arc<SessionControl>,
    mapper: ActionMapper,
}

impl InputDispatcher {
    pub fn new(field: Arc<GameField>, control: Arc<SessionControl>, mapper: ActionMapper) -> Self {
        Self {
            field,
            control,
            mapper,
        }
    }

    /// Maps `event` through the key bindings and acts on it.
    pub fn dispatch(&self, event: &InputEvent) -> Dispatch {
        match self.mapper.map_event(event) {
            Some(TugAction::Pull(player)) => self.pull(player),
            Some(TugAction::Quit) => {
                debug!("Quit requested");
                self.control.end_session();
                Dispatch::Quit
            }
            None => {
                trace!("Unbound input ignored: {:?}", event);
                Dispatch::Ignored
            }
        }
    }

    /// Registers one pull for `player` on a new thread, if input is open.
    pub fn pull(&self, player: PlayerId) -> Dispatch {
        if !self.control.input_enabled() || self.field.is_game_over() {
            trace!("Pull for {} rejected", player);
            return Dispatch::Rejected;
        }

        debug!("{} key pressed", player);

        let field = Arc::clone(&self.field);
        let handle = thread::spawn(move || field.register_pull(player));
        Dispatch::Pulled(PullTask { handle })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    fn setup() -> (Arc<GameField>, Arc<SessionControl>, InputDispatcher) {
        let field = Arc::new(GameField::new(900.0, 1000.0));
        let control = Arc::new(SessionControl::new());
        let dispatcher = InputDispatcher::new(
            Arc::clone(&field),
            Arc::clone(&control),
            ActionMapper::default(),
        );
        (field, control, dispatcher)
    }

    fn expect_pulled(dispatch: Dispatch) -> bool {
        match dispatch {
            Dispatch::Pulled(task) => task.join(),
            other => panic!("Expected Pulled, got {:?}", other),
        }
    }

    #[test]
    fn pulls_rejected_before_start() {
        let (field, _control, dispatcher) = setup();

        let dispatch = dispatcher.dispatch(&InputEvent::KeyDown(KeyCode::KeyA));

        assert!(matches!(dispatch, Dispatch::Rejected));
        assert_eq!(field.pending_pulls(PlayerId::One), 0);
    }

    #[test]
    fn bound_keys_pull_the_right_player() {
        let (field, control, dispatcher) = setup();
        control.enable_input();

        assert!(expect_pulled(dispatcher.dispatch(&InputEvent::KeyDown(KeyCode::KeyA))));
        assert!(expect_pulled(dispatcher.dispatch(&InputEvent::KeyDown(KeyCode::KeyL))));
        assert!(expect_pulled(dispatcher.dispatch(&InputEvent::KeyDown(KeyCode::KeyL))));

        assert_eq!(field.pending_pulls(PlayerId::One), 1);
        assert_eq!(field.pending_pulls(PlayerId::Two), 2);
    }

    #[test]
    fn releases_and_unbound_keys_are_ignored() {
        let (field, control, dispatcher) = setup();
        control.enable_input();

        assert!(matches!(
            dispatcher.dispatch(&InputEvent::KeyUp(KeyCode::KeyA)),
            Dispatch::Ignored
        ));
        assert!(matches!(
            dispatcher.dispatch(&InputEvent::KeyDown(KeyCode::KeyZ)),
            Dispatch::Ignored
        ));
        assert_eq!(field.pending_pulls(PlayerId::One), 0);
    }

    #[test]
    fn pulls_rejected_after_game_over() {
        let (field, control, dispatcher) = setup();
        control.enable_input();
        for _ in 0..10 {
            field.register_pull(PlayerId::Two);
            field.advance();
        }
        assert!(field.evaluate_winner().is_some());

        assert!(matches!(dispatcher.pull(PlayerId::One), Dispatch::Rejected));
    }

    #[test]
    fn quit_ends_session() {
        let (_field, control, dispatcher) = setup();
        control.enable_input();

        let dispatch = dispatcher.dispatch(&InputEvent::KeyDown(KeyCode::Escape));

        assert!(matches!(dispatch, Dispatch::Quit));
        assert!(control.stop_requested());
        assert!(!dispatcher.pull(PlayerId::One).is_pulled());
    }

    #[test]
    fn rapid_input_accumulates_without_debounce() {
        let (field, control, dispatcher) = setup();
        control.enable_input();

        let tasks: Vec<_> = (0..50)
            .map(|_| dispatcher.dispatch(&InputEvent::KeyDown(KeyCode::KeyA)))
            .collect();
        for dispatch in tasks {
            assert!(expect_pulled(dispatch));
        }

        assert_eq!(field.pending_pulls(PlayerId::One), 50);
    }
}
