//! Physics world wrapper
//!
//! Owns the rapier sets and pipelines so the debug drawer has a single
//! "world" to ask for a debug pass, the way a dynamics world is handed to a
//! debug drawer in engines with a built-in debug draw hook.

use rapier3d::prelude::*;

use crate::convert;
use crate::foundation::math::Vec3;

/// Rigid-body world: every rapier structure needed to step and to debug-render
pub struct PhysicsWorld {
    /// Gravity applied on each step
    pub gravity: Vector<Real>,
    /// Integration parameters (time step, solver iterations, ...)
    pub integration_parameters: IntegrationParameters,
    /// Island manager
    pub islands: IslandManager,
    /// Broad phase
    pub broad_phase: BroadPhaseBvh,
    /// Narrow phase, holds the contact graph
    pub narrow_phase: NarrowPhase,
    /// Rigid bodies
    pub bodies: RigidBodySet,
    /// Colliders
    pub colliders: ColliderSet,
    /// Impulse joints
    pub impulse_joints: ImpulseJointSet,
    /// Multibody joints
    pub multibody_joints: MultibodyJointSet,
    /// Continuous collision detection solver
    pub ccd_solver: CCDSolver,
    pipeline: PhysicsPipeline,
}

impl PhysicsWorld {
    /// Create an empty world with standard earth gravity along -Y
    pub fn new() -> Self {
        Self::with_gravity(Vec3::new(0.0, -9.81, 0.0))
    }

    /// Create an empty world with the given gravity
    pub fn with_gravity(gravity: Vec3) -> Self {
        Self {
            gravity: convert::to_physics_vector(&gravity),
            integration_parameters: IntegrationParameters::default(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            pipeline: PhysicsPipeline::new(),
        }
    }

    /// Insert a rigid body with one attached collider
    pub fn insert_body(&mut self, body: impl Into<RigidBody>, collider: impl Into<Collider>) -> RigidBodyHandle {
        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Insert a collider not attached to any body
    pub fn insert_static_collider(&mut self, collider: impl Into<Collider>) -> ColliderHandle {
        self.colliders.insert(collider)
    }

    /// Advance the simulation by one time step
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    /// Run the debug render pass of `pipeline` into `backend`
    pub fn debug_render(
        &self,
        pipeline: &mut DebugRenderPipeline,
        backend: &mut impl DebugRenderBackend,
    ) {
        pipeline.render(
            backend,
            &self.bodies,
            &self.colliders,
            &self.impulse_joints,
            &self.multibody_joints,
            &self.narrow_phase,
        );
    }

    /// Contact pairs currently tracked by the narrow phase
    pub fn contact_pairs(&self) -> impl Iterator<Item = &ContactPair> {
        self.narrow_phase.contact_pairs()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
