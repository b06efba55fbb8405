//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Log target used for messages forwarded from the physics engine
pub const PHYSICS_TARGET: &str = "physics";

/// Log target used by the debug line renderer
pub const DEBUG_DRAW_TARGET: &str = "physics_bridge::debug_draw";

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a global level on top of `RUST_LOG`
///
/// Returns `false` when a logger was already installed.
pub fn try_init_with_level(level: log::LevelFilter) -> bool {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init()
        .is_ok()
}
