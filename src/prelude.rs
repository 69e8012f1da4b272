//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use tug_of_war::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Configuration
pub use crate::core::config::GameConfig;

// Field
pub use crate::core::field::{FieldSnapshot, GameField, PlayerId, Progress, Winner};

// Input
pub use crate::core::input::{ActionMapper, InputEvent, KeyCode, TugAction};

// Session
pub use crate::core::session::{FrameObserver, LogObserver, Session, SessionControl};
