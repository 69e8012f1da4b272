//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side input pump: drains platform events into the dispatcher.
//
// Architecture:
//   Receiver<PlatformEvent> → collect() → InputDispatcher → TickControl
//
// The pump blocks on the channel between events; inputs are forwarded one
// by one as they arrive. A closed window, the quit key or a dropped sender
// ends the session.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::{Dispatch, InputDispatcher};
use crate::core::session::{SessionControl, TickControl};

//=== EventCollector ======================================================

/// Forwards platform events to the dispatcher.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    forwarded: u64,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            forwarded: 0,
        }
    }

    /// Number of input events handed to the dispatcher so far.
    #[cfg(test)]
    pub(crate) fn forwarded(&self) -> u64 {
        self.forwarded
    }

    /// Waits for the next platform event and handles it.
    pub(crate) fn collect(&mut self, dispatcher: &InputDispatcher) -> TickControl {
        match self.receiver.recv() {
            Ok(event) => self.handle_event(event, dispatcher),
            Err(_) => {
                debug!("Platform channel disconnected");
                TickControl::Exit
            }
        }
    }

    fn handle_event(&mut self, event: PlatformEvent, dispatcher: &InputDispatcher) -> TickControl {
        match event {
            PlatformEvent::Input(input) => {
                self.forwarded += 1;
                // Pull threads run detached; the field sees them land.
                match dispatcher.dispatch(&input) {
                    Dispatch::Quit => {
                        debug!("Quit received from platform");
                        TickControl::Exit
                    }
                    _ => TickControl::Continue,
                }
            }
            PlatformEvent::WindowClosed => TickControl::Exit,
        }
    }

    /// Runs the pump on its own thread until the platform goes away or the
    /// quit key arrives, then ends the session and calls `on_exit`.
    ///
    /// `on_exit` lets the platform leave its event loop even when the render
    /// loop has already finished on a winner.
    pub(crate) fn spawn<F>(
        mut self,
        dispatcher: Arc<InputDispatcher>,
        control: Arc<SessionControl>,
        on_exit: F,
    ) -> JoinHandle<u64>
    where
        F: FnOnce() + Send + 'static,
    {
        thread::spawn(move || {
            while self.collect(&dispatcher) == TickControl::Continue {}

            info!("Input pump exiting after {} events", self.forwarded);
            control.end_session();
            on_exit();
            self.forwarded
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
