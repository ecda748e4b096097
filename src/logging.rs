//! Logger setup for the browser and native builds.

use preview_core::LogLevel;

/// Route `log` records to the browser console at `level`.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LogLevel) {
    if let Err(e) = console_log::init_with_level(level.to_level()) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
}

/// Route `log` records to stderr. `RUST_LOG` overrides `level`.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LogLevel) {
    if let Err(e) = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init()
    {
        eprintln!("Logger already initialized: {}", e);
    }
}
