//! Logger setup for the command-line binary

use log::LevelFilter;
use std::env;

/// Initialize `env_logger` at Info, or Debug when `debug_enabled`
///
/// An explicit `RUST_LOG` overrides the defaults. Calling this twice is
/// harmless; the second call leaves the first logger in place.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
