//=========================================================================
// Fixed-Rate Pacing
//=========================================================================
//
// Runs a tick closure at a fixed interval on the calling thread.
//
// Each iteration:
//  1. Records the frame start
//  2. Runs the tick; `TickControl::Exit` ends the loop
//  3. Sleeps for whatever is left of the interval
//
// A tick that overruns the interval is followed immediately by the next.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== run_fixed_rate() ====================================================

/// Calls `tick` every `interval` until it returns [`TickControl::Exit`].
///
/// Callers keep their own counters; the exiting tick is the last call.
pub fn run_fixed_rate<F>(interval: Duration, mut tick: F)
where
    F: FnMut() -> TickControl,
{
    loop {
        let frame_start = Instant::now();

        if tick() == TickControl::Exit {
            return;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exits_on_first_exit_signal() {
        let mut calls = 0;
        run_fixed_rate(Duration::from_millis(1), || {
            calls += 1;
            if calls == 3 {
                TickControl::Exit
            } else {
                TickControl::Continue
            }
        });

        assert_eq!(calls, 3);
    }

    #[test]
    fn paces_ticks_at_interval() {
        let interval = Duration::from_millis(5);
        let start = Instant::now();
        let mut remaining = 4;

        run_fixed_rate(interval, || {
            remaining -= 1;
            if remaining == 0 {
                TickControl::Exit
            } else {
                TickControl::Continue
            }
        });

        // Three full sleeps happen before the fourth (exiting) tick.
        assert!(start.elapsed() >= interval * 3);
    }
}
