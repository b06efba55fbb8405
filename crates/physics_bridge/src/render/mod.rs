//! Renderer contract
//!
//! The bridge never talks to a concrete graphics backend. It needs a scene
//! graph to hang nodes on, immediate-mode "manual" geometry to stream lines
//! into, and an unlit material library. Those requirements are expressed as
//! traits so any renderer can be plugged in.
//!
//! ```text
//! Physics debug pipeline
//!      ↓
//! DebugDrawer (callback adapter)
//!      ↓
//! LineDrawer (line batch)
//!      ↓
//! SceneManager / ManualGeometry (renderer)
//! ```

mod scene;
pub mod memory;

pub use scene::{
    GeometryId, ManualGeometry, NodeId, NodeMobility, OperationType, RenderError, SceneManager,
};
pub use memory::{LineVertex, MemoryGeometry, MemoryScene};
