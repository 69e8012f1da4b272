//=========================================================================
// Session Control
//=========================================================================
//
// Lock-free lifecycle flags shared by the dispatcher and both loops.
//
//   input_enabled:  gates pull dispatch (set on start, cleared on end)
//   stop_requested: cooperative stop signal polled by the loops
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

//=== SessionControl ======================================================

/// Lifecycle flags of one session.
///
/// Stopping is cooperative: loops poll `stop_requested()` once per tick,
/// so a loop asleep between ticks wakes once more before exiting.
#[derive(Debug, Default)]
pub struct SessionControl {
    input_enabled: AtomicBool,
    stop_requested: AtomicBool,
}

impl SessionControl {
    /// Creates flags for a session that has not started yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable_input(&self) {
        self.input_enabled.store(true, Ordering::Release);
    }

    pub fn disable_input(&self) {
        self.input_enabled.store(false, Ordering::Release);
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled.load(Ordering::Acquire)
    }

    /// Disables input and asks both loops to stop.
    ///
    /// Idempotent; only the first call is logged.
    pub fn end_session(&self) {
        self.disable_input();
        if !self.stop_requested.swap(true, Ordering::AcqRel) {
            info!("Session end requested");
        }
    }

    pub fn stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let control = SessionControl::new();
        assert!(!control.input_enabled());
        assert!(!control.stop_requested());
    }

    #[test]
    fn input_toggles() {
        let control = SessionControl::new();
        control.enable_input();
        assert!(control.input_enabled());
        control.disable_input();
        assert!(!control.input_enabled());
    }

    #[test]
    fn end_session_disables_input_and_stops() {
        let control = SessionControl::new();
        control.enable_input();
        control.end_session();
        control.end_session();

        assert!(!control.input_enabled());
        assert!(control.stop_requested());
    }
}
