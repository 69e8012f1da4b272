//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the session threads.
//
// Architecture:
// ```text
//  Main Thread:                     Session Threads:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  Input pump          │
//  │   ↓                      │    │   ↓                  │
//  │  InputProcessor          │    │  InputDispatcher     │
//  │   └─ Converts Winit      │    │   ↓ (pull threads)   │
//  │   ↓                      │    │  GameField           │
//  │  Channel ────────────────┼───►│   ↑                  │
//  │                          │    │  LogicLoop           │
//  │  user_event() ◄──────────┼────┤  RenderLoop          │
//  │   └─ window title        │    │   └─ TitleObserver   │
//  └──────────────────────────┘    └──────────────────────┘
// ```
//
// Key Design Decisions:
// - **Immediate forwarding**: each key press is sent to the pump as soon
//   as the OS reports it; pulls must never be batched or deduplicated
// - **Proxy wake-ups**: the render loop pushes frames through the event
//   loop proxy, so the window title tracks the field at the render rate
// - **Window outlives the match**: after a winner is shown the window
//   stays open until the player closes it or presses the quit key
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;
mod title_observer;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::config::GameConfig;
use crate::core::field::{FieldSnapshot, PlayerId, Winner};
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_processor::InputProcessor;

pub(crate) use title_observer::TitleObserver;

//=== UiEvent =============================================================

/// Events pushed from the session threads into the Winit event loop.
#[derive(Debug, Clone)]
pub(crate) enum UiEvent {
    /// Latest field state, once per render tick.
    Frame(FieldSnapshot),

    /// A winner was decided. The window stays open.
    GameOver(Winner),

    /// The session stopped; the event loop should exit.
    SessionEnded,
}

//=== Platform ============================================================

/// Window manager and input forwarder.
///
/// Runs on the main thread and is not Send. Key events leave through the
/// crossbeam sender; frames come back as [`UiEvent`]s.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Channel to the input pump.
    event_sender: Sender<PlatformEvent>,

    /// Converts Winit events to engine InputEvents.
    input_processor: InputProcessor,

    title: String,
    display_size: (f64, f64),

    /// Last text written to the title bar.
    last_status: Option<String>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance with the given event sender.
    ///
    /// Does not create window yet - that happens lazily in `resumed()`.
    pub fn new(event_sender: Sender<PlatformEvent>, config: &GameConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            event_sender,
            input_processor: InputProcessor::new(),
            title: config.window_title.clone(),
            display_size: config.display_size,
            last_status: None,
        }
    }

    /// Builds the Winit event loop with [`UiEvent`] as its user event.
    ///
    /// Split from [`Platform::run`] so the caller can hand a proxy to the
    /// render loop before the loop starts.
    pub fn create_event_loop() -> Result<EventLoop<UiEvent>, PlatformError> {
        EventLoop::<UiEvent>::with_user_event()
            .build()
            .map_err(|e| PlatformError::EventLoopCreation(e.to_string()))
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or the session ends.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::EventLoopExecution`] if Winit reports a
    /// failure while running.
    pub fn run(mut self, event_loop: EventLoop<UiEvent>) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends one event to the input pump.
    ///
    /// A disconnected channel means the session is already gone; the event
    /// is dropped so the window can still be closed.
    fn forward(&self, event: PlatformEvent) {
        if self.event_sender.send(event).is_err() {
            warn!(target: "platform::input", "Channel disconnected, dropping event");
        }
    }

    /// Writes a status line to the title bar when it changed.
    fn show(&mut self, status: String) {
        if self.last_status.as_deref() == Some(status.as_str()) {
            return;
        }
        if let Some(window) = &self.window {
            window.set_title(&status);
        }
        self.last_status = Some(status);
    }
}

//--- Status Formatting ---------------------------------------------------

/// Renders a snapshot as a single title-bar line.
///
/// `Tug Of War | Player 1: 50.00% | Player 2: 50.00%` while playing;
/// the winner banner is placed after the title once decided.
pub(crate) fn status_line(title: &str, snapshot: &FieldSnapshot) -> String {
    let progress = format!(
        "{} | {}",
        snapshot.progress.label(PlayerId::One),
        snapshot.progress.label(PlayerId::Two)
    );

    match snapshot.winner {
        Some(winner) => format!("{} | {} | {}", title, winner, progress),
        None => format!("{} | {}", title, progress),
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler<UiEvent> for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let (width, height) = self.display_size;
        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(width, height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.forward(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.forward(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(key_event) {
                    Some(input) => self.forward(PlatformEvent::Input(input)),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            _ => {
                // Ignore: Resized, Focused, etc.
            }
        }
    }

    /// Handles frames and lifecycle notices from the session threads.
    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: UiEvent) {
        match event {
            UiEvent::Frame(snapshot) => {
                let status = status_line(&self.title, &snapshot);
                self.show(status);
            }
            UiEvent::GameOver(winner) => {
                info!(target: "platform", "{} - close the window to exit", winner);
            }
            UiEvent::SessionEnded => {
                debug!(target: "platform", "Session ended, leaving event loop");
                event_loop.exit();
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::GameField;
    use crossbeam_channel::unbounded;

    fn platform() -> (Platform, crossbeam_channel::Receiver<PlatformEvent>) {
        let (tx, rx) = unbounded();
        (Platform::new(tx, &GameConfig::default()), rx)
    }

    #[test]
    fn new_platform_has_no_window() {
        let (platform, _rx) = platform();
        assert!(platform.window.is_none());
        assert_eq!(platform.title, "Tug Of War");
        assert_eq!(platform.display_size, (900.0, 700.0));
    }

    #[test]
    fn forward_sends_to_channel() {
        let (platform, rx) = platform();
        platform.forward(PlatformEvent::WindowClosed);
        assert_eq!(rx.try_recv().unwrap(), PlatformEvent::WindowClosed);
    }

    #[test]
    fn forward_survives_disconnected_channel() {
        let (platform, rx) = platform();
        drop(rx);
        platform.forward(PlatformEvent::WindowClosed);
    }

    #[test]
    fn show_records_status_without_window() {
        let (mut platform, _rx) = platform();
        platform.show("Tug Of War | x".to_string());
        assert_eq!(platform.last_status.as_deref(), Some("Tug Of War | x"));
    }

    #[test]
    fn status_line_while_playing() {
        let field = GameField::new(900.0, 1000.0);
        let line = status_line("Tug Of War", &field.snapshot());
        assert_eq!(line, "Tug Of War | Player 1: 50.00% | Player 2: 50.00%");
    }

    #[test]
    fn status_line_shows_winner() {
        let field = GameField::new(900.0, 1000.0);
        for _ in 0..10 {
            field.register_pull(PlayerId::One);
            field.advance();
        }
        field.publish_progress(field.measure_progress());
        field.evaluate_winner();

        let line = status_line("Tug Of War", &field.snapshot());
        assert!(line.starts_with("Tug Of War | Player 1 Wins! | "));
    }
}
