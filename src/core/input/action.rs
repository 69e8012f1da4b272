//=========================================================================
// Tug Actions
//=========================================================================
//
// High-level commands produced from raw input by the action mapper.
//
// Actions are what the dispatcher acts on; keys are only a way to reach
// them. A key binding table can therefore be swapped without touching the
// dispatcher.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::field::PlayerId;

//=== TugAction ===========================================================

/// Gameplay command resolved from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TugAction {
    /// One pull for the given player.
    Pull(PlayerId),

    /// Leave the session (external abort).
    Quit,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pulls_for_different_players_differ() {
        assert_ne!(TugAction::Pull(PlayerId::One), TugAction::Pull(PlayerId::Two));
    }

    #[test]
    fn action_is_hashable() {
        let mut set = HashSet::new();
        set.insert(TugAction::Quit);
        set.insert(TugAction::Quit);
        set.insert(TugAction::Pull(PlayerId::One));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn action_is_send_and_static() {
        fn assert_send_static<T: Send + 'static>() {}
        assert_send_static::<TugAction>();
    }
}
