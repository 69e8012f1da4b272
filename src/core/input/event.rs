//=========================================================================
// Input Event Types
//
// Platform-independent representation of keyboard input.
//
// The platform layer (winit) converts OS key events into these types
// before they cross the thread boundary; nothing past this module knows
// which windowing backend produced them.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    ActionMapper → TugAction
//         ↓
//    InputDispatcher → GameField::register_pull
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// the default bindings (`A` and `L`) sit at the two ends of the home row
/// on any layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,

    /// Fallback for keys the platform reports but this enum does not name.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Only presses are bound to actions. Releases are carried so the
/// platform does not need to know which events matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed (including OS auto-repeat).
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),
}


//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn press_and_release_are_distinct() {
        let mut set = HashSet::new();
        set.insert(InputEvent::KeyDown(KeyCode::KeyA));
        set.insert(InputEvent::KeyUp(KeyCode::KeyA));
        set.insert(InputEvent::KeyDown(KeyCode::KeyA));
        assert_eq!(set.len(), 2);
    }
}
