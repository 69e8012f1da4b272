//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps key presses to tug actions through a binding table.
//
// Architecture:
//   KeyDown(key) → HashMap<KeyCode, TugAction> → TugAction
//
// Releases never resolve. A key has at most one action; several keys may
// share an action.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::TugAction,
    event::{InputEvent, KeyCode},
};
use crate::core::field::PlayerId;

//=== ActionMapper ========================================================

/// Key binding table.
///
/// `Default` installs the standard layout: `A` pulls for player 1, `L`
/// pulls for player 2, `Escape` quits.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionMapper {
    key_bindings: HashMap<KeyCode, TugAction>,
}

impl ActionMapper {
    /// Creates a mapper with no bindings.
    pub fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` to `action`, replacing any previous binding of `key`.
    pub fn bind_key(&mut self, key: KeyCode, action: TugAction) -> &mut Self {
        self.key_bindings.insert(key, action);
        self
    }

    /// Removes the binding of `key`, if any.
    pub fn unbind_key(&mut self, key: KeyCode) -> &mut Self {
        self.key_bindings.remove(&key);
        self
    }

    /// Keys currently bound to `action`, in no particular order.
    pub fn keys_for(&self, action: TugAction) -> Vec<KeyCode> {
        self.key_bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect()
    }

    //--- Event Mapping ----------------------------------------------------

    /// Resolves an event to an action. Only presses resolve.
    pub fn map_event(&self, event: &InputEvent) -> Option<TugAction> {
        match event {
            InputEvent::KeyDown(key) => self.key_bindings.get(key).copied(),
            InputEvent::KeyUp(_) => None,
        }
    }
}

impl Default for ActionMapper {
    fn default() -> Self {
        let mut mapper = Self::new();
        mapper
            .bind_key(KeyCode::KeyA, TugAction::Pull(PlayerId::One))
            .bind_key(KeyCode::KeyL, TugAction::Pull(PlayerId::Two))
            .bind_key(KeyCode::Escape, TugAction::Quit);
        mapper
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapper_resolves_nothing() {
        let mapper = ActionMapper::new();
        assert_eq!(mapper.map_event(&InputEvent::KeyDown(KeyCode::KeyA)), None);
    }

    #[test]
    fn default_layout() {
        let mapper = ActionMapper::default();
        assert_eq!(
            mapper.map_event(&InputEvent::KeyDown(KeyCode::KeyA)),
            Some(TugAction::Pull(PlayerId::One))
        );
        assert_eq!(
            mapper.map_event(&InputEvent::KeyDown(KeyCode::KeyL)),
            Some(TugAction::Pull(PlayerId::Two))
        );
        assert_eq!(
            mapper.map_event(&InputEvent::KeyDown(KeyCode::Escape)),
            Some(TugAction::Quit)
        );
    }

    #[test]
    fn releases_never_resolve() {
        let mapper = ActionMapper::default();
        assert_eq!(mapper.map_event(&InputEvent::KeyUp(KeyCode::KeyA)), None);
    }

    #[test]
    fn unbound_key_resolves_nothing() {
        let mapper = ActionMapper::default();
        assert_eq!(mapper.map_event(&InputEvent::KeyDown(KeyCode::KeyQ)), None);
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut mapper = ActionMapper::default();
        mapper.bind_key(KeyCode::KeyA, TugAction::Pull(PlayerId::Two));

        assert_eq!(
            mapper.map_event(&InputEvent::KeyDown(KeyCode::KeyA)),
            Some(TugAction::Pull(PlayerId::Two))
        );
        assert!(mapper.keys_for(TugAction::Pull(PlayerId::One)).is_empty());
    }

    #[test]
    fn several_keys_can_share_an_action() {
        let mut mapper = ActionMapper::default();
        mapper.bind_key(KeyCode::ArrowLeft, TugAction::Pull(PlayerId::One));

        let mut keys = mapper.keys_for(TugAction::Pull(PlayerId::One));
        keys.sort_by_key(|key| format!("{:?}", key));
        assert_eq!(keys, vec![KeyCode::ArrowLeft, KeyCode::KeyA]);
    }

    #[test]
    fn unbind_removes_binding() {
        let mut mapper = ActionMapper::default();
        mapper.unbind_key(KeyCode::Escape);
        assert_eq!(mapper.map_event(&InputEvent::KeyDown(KeyCode::Escape)), None);
    }
}
