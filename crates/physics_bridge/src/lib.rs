//! # Physics Bridge
//!
//! Glue between the rapier rigid-body simulation and a scene-graph renderer.
//!
//! ## Features
//!
//! - **Conversions**: physics vectors, points, rotations and isometries to
//!   renderer types and back
//! - **Debug drawing**: the physics engine's wireframe overlay (collider
//!   shapes, contacts, joints) streamed into renderer line geometry
//! - **Pluggable renderer**: any renderer implementing [`render::SceneManager`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use physics_bridge::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut scene = MemoryScene::new();
//!     let mut world = PhysicsWorld::new();
//!     let root = scene.root_node();
//!     let mut drawer = DebugDrawer::new(&mut scene, root, &DebugDrawConfig::default())?;
//!
//!     for _ in 0..60 {
//!         world.step();
//!         drawer.step(&world, &mut scene);
//!     }
//!
//!     drawer.destroy(&mut scene);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod error;
pub mod config;
pub mod convert;
pub mod render;
pub mod physics;
pub mod debug;

pub use rapier3d;
pub use error::{BridgeError, BridgeResult};

/// Common imports for bridge users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, DebugDrawConfig},
        convert,
        error::{BridgeError, BridgeResult},
        debug::{DebugDrawer, LineDrawer},
        foundation::math::{Color, Quat, Transform, Vec3},
        physics::PhysicsWorld,
        render::{ManualGeometry, MemoryScene, NodeId, NodeMobility, RenderError, SceneManager},
    };
    pub use rapier3d::pipeline::DebugRenderMode;
}
