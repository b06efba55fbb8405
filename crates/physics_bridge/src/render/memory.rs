//! In-memory renderer backend
//!
//! Keeps the scene graph and manual geometry in slot maps instead of GPU
//! buffers. Used by the tests and the demo, and as the reference for what a
//! real backend has to provide.

use std::collections::{HashMap, HashSet};

use bytemuck::{Pod, Zeroable};
use slotmap::SlotMap;

use super::scene::{
    GeometryId, ManualGeometry, NodeId, NodeMobility, OperationType, RenderError, SceneManager,
};
use crate::foundation::math::{Color, Vec3};

/// Vertex layout of debug lines
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// World-space position
    pub position: [f32; 3],
    /// RGBA colour
    pub color: [f32; 4],
}

/// One `begin`/`end` block of a manual geometry object
#[derive(Debug, Clone, PartialEq)]
pub struct GeometrySection {
    /// Material the section is drawn with
    pub material: String,
    /// Primitive topology
    pub operation: OperationType,
    /// Vertex data
    pub vertices: Vec<LineVertex>,
    /// Index data
    pub indices: Vec<u32>,
}

impl GeometrySection {
    /// Raw vertex bytes, as they would be uploaded to a vertex buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Manual geometry stored in memory
#[derive(Debug)]
pub struct MemoryGeometry {
    mobility: NodeMobility,
    cast_shadows: bool,
    attached_to: Option<NodeId>,
    sections: Vec<GeometrySection>,
    open: Option<GeometrySection>,
}

impl MemoryGeometry {
    fn new(mobility: NodeMobility) -> Self {
        Self {
            mobility,
            cast_shadows: true,
            attached_to: None,
            sections: Vec::new(),
            open: None,
        }
    }

    /// Finished sections
    pub fn sections(&self) -> &[GeometrySection] {
        &self.sections
    }

    /// Whether a section is currently open
    pub fn is_building(&self) -> bool {
        self.open.is_some()
    }

    /// Shadow casting flag
    pub fn casts_shadows(&self) -> bool {
        self.cast_shadows
    }

    /// Mobility the object was created with
    pub fn mobility(&self) -> NodeMobility {
        self.mobility
    }

    /// Node the object is attached to
    pub fn attached_to(&self) -> Option<NodeId> {
        self.attached_to
    }

    /// Total vertex count over all finished sections
    pub fn vertex_count(&self) -> usize {
        self.sections.iter().map(|s| s.vertices.len()).sum()
    }

    fn open_section(&mut self, call: &str) -> Option<&mut GeometrySection> {
        if self.open.is_none() {
            log::warn!("ManualGeometry::{} called outside begin/end", call);
        }
        self.open.as_mut()
    }
}

impl ManualGeometry for MemoryGeometry {
    fn begin(&mut self, material: &str, operation: OperationType) {
        if let Some(unfinished) = self.open.take() {
            log::warn!("ManualGeometry::begin without end, closing previous section");
            self.sections.push(unfinished);
        }

        self.open = Some(GeometrySection {
            material: material.to_string(),
            operation,
            vertices: Vec::new(),
            indices: Vec::new(),
        });
    }

    fn position(&mut self, position: Vec3) {
        if let Some(section) = self.open_section("position") {
            section.vertices.push(LineVertex {
                position: [position.x, position.y, position.z],
                color: Color::WHITE.to_array(),
            });
        }
    }

    fn colour(&mut self, colour: Color) {
        if let Some(section) = self.open_section("colour") {
            match section.vertices.last_mut() {
                Some(vertex) => vertex.color = colour.to_array(),
                None => log::warn!("ManualGeometry::colour called before position"),
            }
        }
    }

    fn index(&mut self, index: u32) {
        if let Some(section) = self.open_section("index") {
            section.indices.push(index);
        }
    }

    fn end(&mut self) {
        match self.open.take() {
            Some(section) => self.sections.push(section),
            None => log::warn!("ManualGeometry::end without begin"),
        }
    }

    fn clear(&mut self) {
        self.sections.clear();
        self.open = None;
    }

    fn set_cast_shadows(&mut self, cast_shadows: bool) {
        self.cast_shadows = cast_shadows;
    }
}

/// A node of the in-memory scene graph
#[derive(Debug)]
pub struct MemoryNode {
    /// Parent node, `None` for the root
    pub parent: Option<NodeId>,
    /// Child nodes
    pub children: Vec<NodeId>,
    /// Mobility the node was created with
    pub mobility: NodeMobility,
    /// Attached manual geometry
    pub geometry: Vec<GeometryId>,
}

/// Scene manager keeping everything in memory
#[derive(Debug)]
pub struct MemoryScene {
    nodes: SlotMap<NodeId, MemoryNode>,
    geometry: SlotMap<GeometryId, MemoryGeometry>,
    root: NodeId,
    materials: HashMap<String, String>,
    resource_groups: HashSet<String>,
    material_creations: usize,
    resource_group_creations: usize,

    /// Make `create_manual_geometry` fail
    pub refuse_geometry: bool,

    /// Make `create_unlit_material` fail
    pub refuse_materials: bool,
}

impl MemoryScene {
    /// Create a scene holding only the root node
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(MemoryNode {
            parent: None,
            children: Vec::new(),
            mobility: NodeMobility::Static,
            geometry: Vec::new(),
        });

        Self {
            nodes,
            geometry: SlotMap::with_key(),
            root,
            materials: HashMap::new(),
            resource_groups: HashSet::new(),
            material_creations: 0,
            resource_group_creations: 0,
            refuse_geometry: false,
            refuse_materials: false,
        }
    }

    /// Look up a node
    pub fn node(&self, node: NodeId) -> Option<&MemoryNode> {
        self.nodes.get(node)
    }

    /// Look up a manual geometry object
    pub fn geometry(&self, geometry: GeometryId) -> Option<&MemoryGeometry> {
        self.geometry.get(geometry)
    }

    /// Number of live manual geometry objects
    pub fn geometry_count(&self) -> usize {
        self.geometry.len()
    }

    /// Number of nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resource group of a registered material
    pub fn material_group(&self, name: &str) -> Option<&str> {
        self.materials.get(name).map(String::as_str)
    }

    /// Successful `create_unlit_material` calls so far
    pub fn material_creations(&self) -> usize {
        self.material_creations
    }

    /// `create_resource_group` calls so far
    pub fn resource_group_creations(&self) -> usize {
        self.resource_group_creations
    }
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneManager for MemoryScene {
    type Geometry = MemoryGeometry;

    fn root_node(&self) -> NodeId {
        self.root
    }

    fn create_child_node(
        &mut self,
        parent: NodeId,
        mobility: NodeMobility,
    ) -> Result<NodeId, RenderError> {
        if !self.nodes.contains_key(parent) {
            return Err(RenderError::NodeNotFound(parent));
        }

        let child = self.nodes.insert(MemoryNode {
            parent: Some(parent),
            children: Vec::new(),
            mobility,
            geometry: Vec::new(),
        });
        self.nodes[parent].children.push(child);
        Ok(child)
    }

    fn create_manual_geometry(&mut self, mobility: NodeMobility) -> Option<GeometryId> {
        if self.refuse_geometry {
            return None;
        }
        Some(self.geometry.insert(MemoryGeometry::new(mobility)))
    }

    fn attach_geometry(&mut self, node: NodeId, geometry: GeometryId) -> Result<(), RenderError> {
        if !self.nodes.contains_key(node) {
            return Err(RenderError::NodeNotFound(node));
        }
        let object = self
            .geometry
            .get_mut(geometry)
            .ok_or(RenderError::GeometryNotFound(geometry))?;

        if let Some(previous) = object.attached_to.replace(node) {
            if let Some(previous) = self.nodes.get_mut(previous) {
                previous.geometry.retain(|g| *g != geometry);
            }
        }
        self.nodes[node].geometry.push(geometry);
        Ok(())
    }

    fn geometry_mut(&mut self, geometry: GeometryId) -> Option<&mut MemoryGeometry> {
        self.geometry.get_mut(geometry)
    }

    fn destroy_manual_geometry(&mut self, geometry: GeometryId) {
        if let Some(object) = self.geometry.remove(geometry) {
            if let Some(node) = object.attached_to.and_then(|n| self.nodes.get_mut(n)) {
                node.geometry.retain(|g| *g != geometry);
            }
        }
    }

    fn unlit_material_exists(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    fn create_unlit_material(&mut self, name: &str, group: &str) -> Result<(), RenderError> {
        if self.refuse_materials {
            return Err(RenderError::MaterialCreation(name.to_string()));
        }
        if !self.resource_groups.contains(group) {
            return Err(RenderError::ResourceGroupNotFound(group.to_string()));
        }
        self.materials.insert(name.to_string(), group.to_string());
        self.material_creations += 1;
        Ok(())
    }

    fn resource_group_exists(&self, name: &str) -> bool {
        self.resource_groups.contains(name)
    }

    fn create_resource_group(&mut self, name: &str) {
        self.resource_groups.insert(name.to_string());
        self.resource_group_creations += 1;
    }
}
