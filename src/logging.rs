//=========================================================================
// Logging
//=========================================================================
//
// env_logger setup for the binary and for anyone embedding the engine.
//
// `RUST_LOG` overrides the default filter (`tug_of_war=info`). Windowing
// backend chatter is capped at `warn`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

//=== Public API ==========================================================

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "tug_of_war=info";

/// Installs the global logger. Calling it twice is harmless.
pub fn init_logger() {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.filter_module("winit", LevelFilter::Warn);
    builder.filter_module("calloop", LevelFilter::Warn);

    builder.format(|buf, record| {
        let style = buf.default_level_style(record.level());
        writeln!(
            buf,
            "{style}[{}]{style:#}[{}] {}",
            record.level(),
            record.target(),
            record.args()
        )
    });

    let _ = builder.try_init();
}

//=========================================================================
// Unit Tests
//=========================================================================
