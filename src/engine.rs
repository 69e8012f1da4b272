//=========================================================================
// Tug Of War Engine
//
// Main entry point and coordinator for a game.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tick_interval()    ├─ starts the session threads
//         ├─ with_field_size()       ├─ spawns the input pump
//         ├─ with_window_title()     ├─ runs platform (main thread)
//         └─ with_bindings()         └─ joins everything, returns result
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{error, info};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::config::{GameConfig, ROPE_LENGTH};
use crate::core::field::FieldSnapshot;
use crate::core::input::ActionMapper;
use crate::core::platform_bridge::{EventCollector, PlatformError, PlatformEvent};
use crate::core::session::{FrameObserver, Session};
use crate::platform::{Platform, TitleObserver};

//=== EngineError =========================================================

/// Errors that abort [`Engine::run`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Tick interval**: 100 ms (both loops)
/// - **Field**: 900 x 1000, window 900 x 700
/// - **Title**: "Tug Of War"
/// - **Bindings**: `A` pulls for player 1, `L` for player 2, `Escape` quits
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use tug_of_war::EngineBuilder;
///
/// let result = EngineBuilder::new()
///     .with_tick_interval(Duration::from_millis(50))
///     .with_window_title("Rope Practice")
///     .build()
///     .run();
///
/// if let Ok(snapshot) = result {
///     println!("{:?}", snapshot.winner);
/// }
/// ```
pub struct EngineBuilder {
    config: GameConfig,
    bindings: ActionMapper,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            bindings: ActionMapper::default(),
        }
    }

    /// Sets the pacing of the logic and render loops.
    ///
    /// Default: 100 ms
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be positive");
        self.config.tick_interval = interval;
        self
    }

    /// Sets the simulation field size. The window follows the width.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive, or if `width` cannot
    /// hold the rope (`width < 140`).
    pub fn with_field_size(mut self, width: f64, height: f64) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "Field size must be positive, got {}x{}",
            width,
            height
        );
        assert!(
            width >= ROPE_LENGTH,
            "Field width must hold the rope ({}), got {}",
            ROPE_LENGTH,
            width
        );
        self.config.field_width = width;
        self.config.field_height = height;
        self.config.display_size.0 = width;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.config.window_title = title.into();
        self
    }

    /// Replaces the default key bindings.
    pub fn with_bindings(mut self, bindings: ActionMapper) -> Self {
        self.bindings = bindings;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine ({:?} per tick, field {}x{})",
            self.config.tick_interval, self.config.field_width, self.config.field_height
        );

        Engine {
            config: self.config,
            bindings: self.bindings,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Tug Of War runtime.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► Session
///   │     ├─► LogicLoop thread   (advance, progress, winner)
///   │     └─► RenderLoop thread  (snapshot → TitleObserver)
///   ├─► Input pump thread        (PlatformEvent → InputDispatcher)
///   │     └─► one thread per accepted pull
///   └─► Platform (Event Loop)
///         └─► Window, keyboard, title updates
///
/// Communication: crossbeam channel (PlatformEvent), event loop proxy (UiEvent)
/// ```
pub struct Engine {
    config: GameConfig,
    bindings: ActionMapper,
}

impl Engine {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    //--- Execution --------------------------------------------------------

    /// Starts a game and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the channel for platform → core communication
    /// 2. Creates the event loop and hands its proxy to the render loop
    /// 3. Starts the session (input open, both loops running)
    /// 4. Spawns the input pump
    /// 5. Runs the platform event loop (blocks here)
    /// 6. On exit: ends the session, joins all threads
    ///
    /// Returns the final field snapshot; its `winner` is `None` if the
    /// window was closed before anyone won.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Platform`] if the event loop cannot be
    /// created or fails while running.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tug_of_war::{EngineBuilder, EngineError};
    ///
    /// let snapshot = EngineBuilder::new().build().run()?;
    /// match snapshot.winner {
    ///     Some(winner) => println!("{}", winner),
    ///     None => println!("closed early at {}", snapshot.progress),
    /// }
    /// # Ok::<(), EngineError>(())
    /// ```
    pub fn run(self) -> Result<FieldSnapshot, EngineError> {
        info!("Starting engine runtime ({:?} per tick)", self.config.tick_interval);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) = unbounded();

        //--- 2. Create the event loop ------------------------------------
        let event_loop = Platform::create_event_loop()?;
        let observer = TitleObserver::new(event_loop.create_proxy());

        //--- 3. Start the session ----------------------------------------
        let mut session =
            Session::with_bindings(self.config.clone(), self.bindings, Box::new(observer.clone()));
        session.start_session();

        //--- 4. Spawn the input pump -------------------------------------
        let mut exit_observer = observer;
        let pump_handle = EventCollector::new(rx).spawn(
            session.dispatcher(),
            session.control(),
            move || exit_observer.on_stopped(),
        );
        info!("Input pump spawned");

        //--- 5. Launch the platform subsystem ----------------------------
        let platform = Platform::new(tx, &self.config);
        info!("Platform initialized, entering event loop");

        let outcome = platform.run(event_loop);
        info!("Platform event loop exited");

        //--- 6. Cleanup --------------------------------------------------
        session.end_session();

        match pump_handle.join() {
            Ok(events) => info!("Input pump terminated cleanly ({} events)", events),
            Err(e) => error!("Input pump panicked: {:?}", e),
        }

        let snapshot = session.join();
        info!("Engine shutdown complete");

        outcome?;
        Ok(snapshot)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, TugAction};

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.config, GameConfig::default());
        assert_eq!(builder.config.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn builder_with_tick_interval() {
        let builder = EngineBuilder::new().with_tick_interval(Duration::from_millis(16));
        assert_eq!(builder.config.tick_interval, Duration::from_millis(16));
    }

    #[test]
    #[should_panic(expected = "Tick interval must be positive")]
    fn builder_with_tick_interval_panics_on_zero() {
        EngineBuilder::new().with_tick_interval(Duration::ZERO);
    }

    #[test]
    fn builder_with_field_size_moves_window_width() {
        let builder = EngineBuilder::new().with_field_size(600.0, 400.0);
        assert_eq!(builder.config.field_width, 600.0);
        assert_eq!(builder.config.field_height, 400.0);
        assert_eq!(builder.config.display_size, (600.0, 700.0));
    }

    #[test]
    #[should_panic(expected = "Field size must be positive")]
    fn builder_with_field_size_panics_on_zero() {
        EngineBuilder::new().with_field_size(0.0, 400.0);
    }

    #[test]
    #[should_panic(expected = "Field width must hold the rope")]
    fn builder_with_field_size_panics_below_rope_length() {
        EngineBuilder::new().with_field_size(100.0, 400.0);
    }

    #[test]
    fn builder_with_field_size_accepts_rope_length() {
        let engine = EngineBuilder::new().with_field_size(ROPE_LENGTH, 400.0).build();
        let field = crate::core::field::GameField::from_config(engine.config());
        assert_eq!(field.width(), ROPE_LENGTH);
    }

    #[test]
    fn builder_with_window_title() {
        let builder = EngineBuilder::new().with_window_title("Practice");
        assert_eq!(builder.config.window_title, "Practice");
    }

    #[test]
    fn builder_with_bindings() {
        let mut bindings = ActionMapper::new();
        bindings.bind_key(KeyCode::KeyQ, TugAction::Quit);

        let builder = EngineBuilder::new().with_bindings(bindings);
        assert_eq!(builder.bindings.keys_for(TugAction::Quit), vec![KeyCode::KeyQ]);
    }

    #[test]
    fn build_keeps_config() {
        let engine = EngineBuilder::new()
            .with_tick_interval(Duration::from_millis(5))
            .build();
        assert_eq!(engine.config().tick_interval, Duration::from_millis(5));
    }

    #[test]
    fn engine_error_wraps_platform_error() {
        let error: EngineError = PlatformError::EventLoopCreation("no display".into()).into();
        assert_eq!(error.to_string(), "Event loop creation failed: no display");
    }
}
