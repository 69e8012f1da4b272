//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the core session.
//
// This module defines the contract between the platform implementation
// and core logic, so the windowing backend can change without touching
// the field, the dispatcher or the loops.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side pump feeding the input dispatcher
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::EventCollector;
pub(crate) use interface::PlatformEvent;

//=== Public API ==========================================================

pub use interface::PlatformError;
