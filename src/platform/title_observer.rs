//=========================================================================
// Title Observer
//=========================================================================
//
// Render-loop observer that wakes the Winit event loop with each frame.
//
//   RenderLoop thread ──on_frame()──► EventLoopProxy ──► Platform::user_event
//
// A closed event loop is not an error here: the window may already be gone
// while the render loop finishes its last tick.
//
//=========================================================================

//=== External Crates =====================================================

use log::trace;
use winit::event_loop::EventLoopProxy;

//=== Internal Imports ====================================================

use super::UiEvent;
use crate::core::field::{FieldSnapshot, Winner};
use crate::core::session::FrameObserver;

//=== TitleObserver =======================================================

/// Pushes snapshots and lifecycle notices into the platform thread.
#[derive(Clone)]
pub(crate) struct TitleObserver {
    proxy: EventLoopProxy<UiEvent>,
}

impl TitleObserver {
    pub(crate) fn new(proxy: EventLoopProxy<UiEvent>) -> Self {
        Self { proxy }
    }

    fn send(&self, event: UiEvent) {
        if self.proxy.send_event(event).is_err() {
            trace!(target: "platform", "Event loop closed, dropping UI event");
        }
    }
}

impl FrameObserver for TitleObserver {
    fn on_frame(&mut self, snapshot: &FieldSnapshot) {
        self.send(UiEvent::Frame(snapshot.clone()));
    }

    fn on_game_over(&mut self, winner: Winner) {
        self.send(UiEvent::GameOver(winner));
    }

    fn on_stopped(&mut self) {
        self.send(UiEvent::SessionEnded);
    }
}
