//! Physics debug visualization
//!
//! The physics engine describes its internal state (collider shapes, body
//! axes, joints, contacts) as a stream of coloured line segments. This module
//! collects that stream once per frame and hands it to the renderer.

pub mod line_drawer;
pub mod drawer;

pub use line_drawer::{Line, LineDrawer};
pub use drawer::{DebugDrawer, DebugLineSink};
