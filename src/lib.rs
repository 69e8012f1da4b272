//=========================================================================
// Tug Of War — Library Root
//
// This crate defines the public API surface of the Tug Of War engine.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the core (field, input, session) for headless use and tests
// - Keep the Winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use tug_of_war::EngineBuilder;
//
// fn main() {
//     tug_of_war::logging::init_logger();
//     let _ = EngineBuilder::new().build().run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the game field, the input path and the session threads.
// It never touches the windowing backend, so it can run headless.
//
pub mod core;
pub mod logging;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit window and event loop and is kept private.
//
// `engine` wires a session to the platform.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
