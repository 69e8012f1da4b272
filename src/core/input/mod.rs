//=========================================================================
// Input System
//
// From raw key events to pulls on the field.
//
// Responsibilities:
// - Represent keyboard input independently of the platform backend
// - Map key presses to tug actions through a binding table
// - Gate and dispatch pulls, one thread per accepted pull
//
// Notes:
// The dispatcher is shared (`Arc`) between the platform event pump and
// any other producer of input, such as tests or scripted drivers.
//
//=========================================================================

//=== Submodules ==========================================================

mod action;
mod action_mapper;
mod dispatcher;
pub mod event;

//=== Public API ==========================================================

pub use action::TugAction;
pub use action_mapper::ActionMapper;
pub use dispatcher::{Dispatch, InputDispatcher, PullTask};
pub use event::{InputEvent, KeyCode};
