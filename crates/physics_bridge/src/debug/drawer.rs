//! Physics debug drawer
//!
//! Receives the physics engine's debug-draw callbacks and turns them into
//! buffered renderer lines. One [`DebugDrawer::step`] per frame runs the
//! physics debug pass and flushes the batch into the scene.

use rapier3d::math::{Point, Real, Vector};
use rapier3d::pipeline::{
    DebugRenderBackend, DebugRenderMode, DebugRenderObject, DebugRenderPipeline, DebugRenderStyle,
};

use crate::config::{Config, DebugDrawConfig};
use crate::convert;
use crate::debug::LineDrawer;
use crate::error::BridgeResult;
use crate::foundation::logging::PHYSICS_TARGET;
use crate::foundation::math::Color;
use crate::physics::PhysicsWorld;
use crate::render::{NodeId, NodeMobility, SceneManager};

/// Callback side of the drawer: what the physics debug pass writes into
#[derive(Debug)]
pub struct DebugLineSink {
    drawer: LineDrawer,
    unlit_diffuse_multiplier: f32,
    contact_normal_scale: f32,
    contact_color: Color,
    stepped: bool,
}

impl DebugLineSink {
    fn new(drawer: LineDrawer, config: &DebugDrawConfig) -> Self {
        Self {
            drawer,
            unlit_diffuse_multiplier: 1.0,
            contact_normal_scale: config.contact_normal_scale,
            contact_color: config.contact_color,
            stepped: false,
        }
    }

    /// Add a line; the first line after a step starts a new batch
    pub fn push_line(&mut self, from: &Point<Real>, to: &Point<Real>, color: Color) {
        if self.stepped {
            self.drawer.clear_lines();
            self.stepped = false;
        }

        self.drawer.add_line(
            convert::to_render_point(from),
            convert::to_render_point(to),
            color * self.unlit_diffuse_multiplier,
        );
    }

    /// Contact point drawn as a line along the contact normal
    pub fn push_contact(
        &mut self,
        point: &Point<Real>,
        normal: &Vector<Real>,
        distance: Real,
        color: Color,
    ) {
        let tip = point + normal * distance * self.contact_normal_scale;
        self.push_line(point, &tip, color);
    }

    /// Line batch
    pub fn line_drawer(&self) -> &LineDrawer {
        &self.drawer
    }
}

impl DebugRenderBackend for DebugLineSink {
    fn draw_line(
        &mut self,
        _object: DebugRenderObject,
        a: Point<Real>,
        b: Point<Real>,
        color: [f32; 4],
    ) {
        self.push_line(&a, &b, convert::debug_color_to_render(color));
    }
}

/// Debug drawer bridging the physics debug pass to a renderer scene
///
/// Owns a static child node of the node it was created under, and the line
/// geometry hung on it.
pub struct DebugDrawer {
    node: NodeId,
    resource_group: String,
    pipeline: DebugRenderPipeline,
    sink: DebugLineSink,
}

impl DebugDrawer {
    /// Create a drawer whose lines hang below `parent`
    ///
    /// A static child node of `parent` is created to hold the geometry, and
    /// the configured resource group is created if missing.
    pub fn new<S: SceneManager>(
        scene: &mut S,
        parent: NodeId,
        config: &DebugDrawConfig,
    ) -> BridgeResult<Self> {
        let node = scene.create_child_node(parent, NodeMobility::Static)?;

        if !scene.resource_group_exists(&config.resource_group) {
            scene.create_resource_group(&config.resource_group);
        }

        let drawer = LineDrawer::new(node, config.material_name.clone())
            .with_cast_shadows(config.cast_shadows);

        let mut debug_drawer = Self {
            node,
            resource_group: config.resource_group.clone(),
            pipeline: DebugRenderPipeline::new(DebugRenderStyle::default(), config.debug_mode()),
            sink: DebugLineSink::new(drawer, config),
        };
        debug_drawer.set_unlit_diffuse_multiplier(config.unlit_diffuse_multiplier);

        log::debug!(
            "Debug drawer created on node {:?} with mode {:?}",
            node,
            debug_drawer.debug_mode()
        );
        Ok(debug_drawer)
    }

    /// Create a drawer with settings read from a `.toml` or `.ron` file
    pub fn from_config_file<S: SceneManager>(
        scene: &mut S,
        parent: NodeId,
        path: &str,
    ) -> BridgeResult<Self> {
        let config = DebugDrawConfig::load_from_file(path)?;
        Self::new(scene, parent, &config)
    }

    /// Set the colour multiplier used by HDR pipelines; values below 1 are ignored
    pub fn set_unlit_diffuse_multiplier(&mut self, value: f32) {
        if value >= 1.0 {
            self.sink.unlit_diffuse_multiplier = value;
        }
    }

    /// Current colour multiplier
    pub fn unlit_diffuse_multiplier(&self) -> f32 {
        self.sink.unlit_diffuse_multiplier
    }

    /// Add a line with an opaque `(r, g, b)` colour
    pub fn draw_line(&mut self, from: &Point<Real>, to: &Point<Real>, color: &Vector<Real>) {
        self.sink.push_line(from, to, convert::rgb_to_render(color));
    }

    /// Render a contact point as a line from `point` along `normal`
    pub fn draw_contact_point(
        &mut self,
        point: &Point<Real>,
        normal: &Vector<Real>,
        distance: Real,
        color: &Vector<Real>,
    ) {
        self.sink
            .push_contact(point, normal, distance, convert::rgb_to_render(color));
    }

    /// Forward a physics warning to the log
    pub fn report_error_warning(&self, warning: &str) {
        log::warn!(target: PHYSICS_TARGET, "{}", warning);
    }

    /// Set the debug mode; an empty mode turns drawing off and clears the lines
    pub fn set_debug_mode<S: SceneManager>(&mut self, mode: DebugRenderMode, scene: &mut S) {
        self.pipeline.mode = mode;

        if mode.is_empty() {
            self.sink.drawer.clear(scene);
        }
    }

    /// Current debug mode
    pub fn debug_mode(&self) -> DebugRenderMode {
        self.pipeline.mode
    }

    /// Run the physics debug pass and push the result into the scene
    ///
    /// With an empty mode the geometry is cleared instead.
    pub fn step<S: SceneManager>(&mut self, world: &PhysicsWorld, scene: &mut S) {
        let mode = self.pipeline.mode;

        if mode.is_empty() {
            self.sink.drawer.clear(scene);
        } else {
            // Contacts go through draw_contact_point rather than rapier's own rendering
            self.pipeline.mode = mode.difference(DebugRenderMode::CONTACTS);
            world.debug_render(&mut self.pipeline, &mut self.sink);
            self.pipeline.mode = mode;

            if mode.contains(DebugRenderMode::CONTACTS) {
                self.draw_world_contacts(world);
            }

            // Nothing was drawn this pass, the previous batch is stale
            if self.sink.stepped {
                self.sink.drawer.clear_lines();
            }

            self.sink.drawer.update(scene, &self.resource_group);
        }

        self.sink.stepped = true;
    }

    /// Release the scene resources held by the drawer
    pub fn destroy<S: SceneManager>(self, scene: &mut S) {
        self.sink.drawer.destroy(scene);
    }

    /// Node holding the debug geometry
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Line batch
    pub fn line_drawer(&self) -> &LineDrawer {
        &self.sink.drawer
    }

    /// Callback sink, for driving a custom physics debug pass
    pub fn sink_mut(&mut self) -> &mut DebugLineSink {
        &mut self.sink
    }

    fn draw_world_contacts(&mut self, world: &PhysicsWorld) {
        let color = self.sink.contact_color;

        for pair in world.contact_pairs() {
            for manifold in &pair.manifolds {
                for contact in &manifold.data.solver_contacts {
                    self.sink
                        .push_contact(&contact.point, &manifold.data.normal, contact.dist, color);
                }
            }
        }
    }
}

impl DebugRenderBackend for DebugDrawer {
    fn draw_line(
        &mut self,
        object: DebugRenderObject,
        a: Point<Real>,
        b: Point<Real>,
        color: [f32; 4],
    ) {
        self.sink.draw_line(object, a, b, color);
    }
}
