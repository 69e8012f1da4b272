//=========================================================================
// Core Systems
//=========================================================================
//
// Everything that runs off the platform thread.
//
// Architecture:
// ```text
//   platform_bridge ──► input ──► field ◄── session (logic + render loops)
// ```
//
// Modules:
// - `config`: fixed tuning constants and the session configuration
// - `field`: players, the lock-guarded game field, snapshots
// - `input`: key events, bindings, the pull dispatcher
// - `session`: lifecycle flags, periodic loops, the frame observer seam
// - `platform_bridge`: platform → core events and the input pump
//
// Notes:
// The core never talks to the windowing backend directly. Input arrives
// as `PlatformEvent`s over a channel; output leaves as `FieldSnapshot`s
// through a `FrameObserver`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod field;
pub mod input;
pub mod session;
pub(crate) mod platform_bridge;

//=== Re-exports ==========================================================

pub use config::GameConfig;
pub use field::{FieldSnapshot, GameField, PlayerId, Progress, Winner};
pub use input::{ActionMapper, InputDispatcher, InputEvent, KeyCode, TugAction};
pub use platform_bridge::PlatformError;
pub use session::{FrameObserver, Session, SessionControl};
