//! Line batch flushed into renderer manual geometry
//!
//! Lines are accumulated during a physics debug pass and uploaded in one
//! `begin`/`end` block when [`LineDrawer::update`] runs.

use crate::foundation::logging::DEBUG_DRAW_TARGET;
use crate::foundation::math::{Color, Vec3};
use crate::render::{GeometryId, ManualGeometry, NodeId, NodeMobility, OperationType, SceneManager};

/// A buffered line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point
    pub start: Vec3,
    /// End point
    pub end: Vec3,
    /// Colour of both vertices
    pub color: Color,
}

/// Accumulates lines and draws them through a manual geometry object
///
/// The geometry object is created lazily on the first [`update`](Self::update)
/// and attached to the node passed at construction. It is owned by the drawer
/// until [`destroy`](Self::destroy).
#[derive(Debug)]
pub struct LineDrawer {
    node: NodeId,
    material: String,
    cast_shadows: bool,
    lines: Vec<Line>,
    geometry: Option<GeometryId>,
    index: u32,
}

impl LineDrawer {
    /// Create a drawer attaching its geometry to `node` and drawing with `material`
    pub fn new(node: NodeId, material: impl Into<String>) -> Self {
        Self {
            node,
            material: material.into(),
            cast_shadows: false,
            lines: Vec::new(),
            geometry: None,
            index: 0,
        }
    }

    /// Set whether the created geometry casts shadows
    pub fn with_cast_shadows(mut self, cast_shadows: bool) -> Self {
        self.cast_shadows = cast_shadows;
        self
    }

    /// Add a line to the batch shown at next update
    pub fn add_line(&mut self, start: Vec3, end: Vec3, color: Color) {
        self.lines.push(Line { start, end, color });
    }

    /// Drop buffered lines, keeping what the geometry currently shows
    pub fn clear_lines(&mut self) {
        self.lines.clear();
    }

    /// Clear the manual geometry and the line buffer
    pub fn clear<S: SceneManager>(&mut self, scene: &mut S) {
        if let Some(geometry) = self.geometry.and_then(|id| scene.geometry_mut(id)) {
            geometry.clear();
        }
        self.lines.clear();
    }

    /// Create the unlit material in `resource_group` if the renderer doesn't know it yet
    pub fn check_for_material<S: SceneManager>(&self, scene: &mut S, resource_group: &str) {
        if scene.unlit_material_exists(&self.material) {
            return;
        }

        log::info!(target: DEBUG_DRAW_TARGET, "Debug line material '{}' not found, creating it", self.material);
        if let Err(e) = scene.create_unlit_material(&self.material, resource_group) {
            log::error!(target: DEBUG_DRAW_TARGET, "Debug line material was not created: {}", e);
        }
    }

    /// Replace the content of the manual geometry with the line buffer
    ///
    /// Every line contributes two vertices and two consecutive indices.
    pub fn update<S: SceneManager>(&mut self, scene: &mut S, resource_group: &str) {
        let Some(id) = self.ensure_geometry(scene) else {
            return;
        };

        self.check_for_material(scene, resource_group);

        let Some(geometry) = scene.geometry_mut(id) else {
            log::error!(target: DEBUG_DRAW_TARGET, "Debug line geometry {:?} vanished from the scene", id);
            self.geometry = None;
            return;
        };

        geometry.clear();
        geometry.begin(&self.material, OperationType::LineList);
        self.index = 0;

        for line in &self.lines {
            geometry.position(line.start);
            geometry.colour(line.color);
            geometry.index(self.index);
            self.index += 1;

            geometry.position(line.end);
            geometry.colour(line.color);
            geometry.index(self.index);
            self.index += 1;
        }

        geometry.end();
    }

    /// Clear and destroy the manual geometry
    pub fn destroy<S: SceneManager>(mut self, scene: &mut S) {
        self.clear(scene);
        if let Some(id) = self.geometry.take() {
            scene.destroy_manual_geometry(id);
        }
    }

    /// Buffered lines
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Node the geometry is attached to
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Material name
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Manual geometry, once created
    pub fn geometry(&self) -> Option<GeometryId> {
        self.geometry
    }

    /// Number of indices emitted by the last update
    pub fn emitted_indices(&self) -> u32 {
        self.index
    }

    fn ensure_geometry<S: SceneManager>(&mut self, scene: &mut S) -> Option<GeometryId> {
        if self.geometry.is_some() {
            return self.geometry;
        }

        log::info!(target: DEBUG_DRAW_TARGET, "Creating debug line geometry");
        let Some(id) = scene.create_manual_geometry(NodeMobility::Static) else {
            log::error!(target: DEBUG_DRAW_TARGET, "Renderer refused to create debug line geometry, skipping update");
            return None;
        };

        if let Some(geometry) = scene.geometry_mut(id) {
            geometry.set_cast_shadows(self.cast_shadows);
        }

        if let Err(e) = scene.attach_geometry(self.node, id) {
            log::error!(target: DEBUG_DRAW_TARGET, "Could not attach debug line geometry: {}", e);
            scene.destroy_manual_geometry(id);
            return None;
        }

        self.geometry = Some(id);
        self.geometry
    }
}

impl Drop for LineDrawer {
    fn drop(&mut self) {
        if let Some(id) = self.geometry {
            log::warn!(target: DEBUG_DRAW_TARGET, "LineDrawer dropped without destroy, geometry {:?} leaks", id);
        }
    }
}
