//=========================================================================
// Frame Observer
//=========================================================================
//
// The seam between the core and whatever presents it.
//
// The render loop owns one observer and calls it from its own thread with
// a snapshot per tick. Implementations never see the field itself.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::{info, trace};

//=== Internal Dependencies ===============================================

use crate::core::field::{FieldSnapshot, Winner};

//=== FrameObserver =======================================================

/// Receives render-tick snapshots.
///
/// Only `on_frame()` is required; the lifecycle hooks default to no-ops.
pub trait FrameObserver: Send {
    /// Called once per render tick, including the final game-over frame.
    fn on_frame(&mut self, snapshot: &FieldSnapshot);

    /// Called once, right after the frame that first shows a winner.
    fn on_game_over(&mut self, _winner: Winner) {}

    /// Called once if the session was ended before anyone won.
    fn on_stopped(&mut self) {}
}

//=== LogObserver =========================================================

/// Observer that only logs; used when no presentation is attached.
#[derive(Debug, Default)]
pub struct LogObserver {
    frames: u64,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameObserver for LogObserver {
    fn on_frame(&mut self, snapshot: &FieldSnapshot) {
        self.frames += 1;
        trace!(
            "Frame {}: {:.1} / {:.1} ({})",
            self.frames,
            snapshot.player1_position,
            snapshot.player2_position,
            snapshot.progress
        );
    }

    fn on_game_over(&mut self, winner: Winner) {
        info!("{} after {} frames", winner, self.frames);
    }

    fn on_stopped(&mut self) {
        info!("Session stopped after {} frames", self.frames);
    }
}

//=== Channel Observer ====================================================

/// Forwards every frame over a crossbeam channel.
///
/// A disconnected receiver is ignored; the render loop keeps its own pace.
impl FrameObserver for Sender<FieldSnapshot> {
    fn on_frame(&mut self, snapshot: &FieldSnapshot) {
        let _ = self.send(snapshot.clone());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
