//! Crate-level error type

use crate::config::ConfigError;
use crate::render::RenderError;

/// Errors raised while setting up the bridge
#[derive(thiserror::Error, Debug)]
pub enum BridgeError {
    /// Renderer refused a request
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for bridge setup
pub type BridgeResult<T> = Result<T, BridgeError>;
