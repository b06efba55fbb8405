//! Foundation module - renderer-side types and utilities
//!
//! This module provides the small set of fundamentals shared by the bridge:
//! - Renderer math types (vectors, quaternions, transforms, colours)
//! - Logging utilities

pub mod math;
pub mod logging;
