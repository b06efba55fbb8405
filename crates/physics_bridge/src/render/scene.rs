//! Scene manager and manual geometry traits

use slotmap::new_key_type;

use crate::foundation::math::{Color, Vec3};

new_key_type! {
    /// Handle of a scene node
    pub struct NodeId;

    /// Handle of a manual geometry object
    pub struct GeometryId;
}

/// Whether a node or object is expected to move after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeMobility {
    /// Transform never changes; renderers may bake it
    #[default]
    Static,
    /// Transform may change every frame
    Dynamic,
}

/// Primitive topology of a manual geometry section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Every two indices form an independent line segment
    LineList,
}

/// Renderer errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Unknown scene node
    #[error("Scene node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Unknown manual geometry
    #[error("Manual geometry not found: {0:?}")]
    GeometryNotFound(GeometryId),

    /// Unknown resource group
    #[error("Resource group not found: {0}")]
    ResourceGroupNotFound(String),

    /// Material creation was refused
    #[error("Material creation failed: {0}")]
    MaterialCreation(String),
}

/// Immediate-mode geometry that is rebuilt from scratch every time it changes
///
/// A section is opened with [`begin`](Self::begin), filled with per-vertex
/// `position`/`colour` calls plus indices, and closed with [`end`](Self::end).
pub trait ManualGeometry {
    /// Start a new section drawn with `material`
    fn begin(&mut self, material: &str, operation: OperationType);

    /// Start a new vertex at `position`
    fn position(&mut self, position: Vec3);

    /// Colour of the current vertex
    fn colour(&mut self, colour: Color);

    /// Append an index to the current section
    fn index(&mut self, index: u32);

    /// Close the current section
    fn end(&mut self);

    /// Drop all sections
    fn clear(&mut self);

    /// Toggle shadow casting
    fn set_cast_shadows(&mut self, cast_shadows: bool);
}

/// The subset of a renderer's scene manager the bridge relies on
pub trait SceneManager {
    /// Geometry type handed out by this scene manager
    type Geometry: ManualGeometry;

    /// Root node of the scene graph
    fn root_node(&self) -> NodeId;

    /// Create a child of `parent`
    fn create_child_node(
        &mut self,
        parent: NodeId,
        mobility: NodeMobility,
    ) -> Result<NodeId, RenderError>;

    /// Create an empty manual geometry object, `None` if the renderer refuses
    fn create_manual_geometry(&mut self, mobility: NodeMobility) -> Option<GeometryId>;

    /// Attach a manual geometry object to a node
    fn attach_geometry(&mut self, node: NodeId, geometry: GeometryId) -> Result<(), RenderError>;

    /// Access a manual geometry object
    fn geometry_mut(&mut self, geometry: GeometryId) -> Option<&mut Self::Geometry>;

    /// Detach and destroy a manual geometry object
    fn destroy_manual_geometry(&mut self, geometry: GeometryId);

    /// Whether an unlit material called `name` is registered
    fn unlit_material_exists(&self, name: &str) -> bool;

    /// Register an unlit material in `group`
    fn create_unlit_material(&mut self, name: &str, group: &str) -> Result<(), RenderError>;

    /// Whether a resource group called `name` exists
    fn resource_group_exists(&self, name: &str) -> bool;

    /// Create a resource group
    fn create_resource_group(&mut self, name: &str);
}
