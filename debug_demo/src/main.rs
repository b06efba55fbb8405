//! Physics debug drawing demo
//!
//! Drops a few bodies on a ground plate, runs the debug drawer every frame
//! against the in-memory renderer and logs what would be uploaded.
//!
//! Pass a `.toml` or `.ron` file as first argument to override the debug
//! draw settings.

use physics_bridge::prelude::*;
use physics_bridge::rapier3d::prelude::{vector, ColliderBuilder, RigidBodyBuilder};

const FRAMES: usize = 240;
const REPORT_EVERY: usize = 60;

fn create_drawer(scene: &mut MemoryScene) -> BridgeResult<DebugDrawer> {
    let root = scene.root_node();
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading debug draw settings from {}", path);
            DebugDrawer::from_config_file(scene, root, &path)
        }
        None => DebugDrawer::new(scene, root, &DebugDrawConfig::default()),
    }
}

fn build_world() -> PhysicsWorld {
    let mut world = PhysicsWorld::new();
    world.insert_static_collider(ColliderBuilder::cuboid(20.0, 0.1, 20.0));

    for i in 0..4u8 {
        let height = 2.0 + f32::from(i) * 1.5;
        let body = RigidBodyBuilder::dynamic().translation(vector![f32::from(i) * 0.3, height, 0.0]);
        if i % 2 == 0 {
            world.insert_body(body, ColliderBuilder::ball(0.5));
        } else {
            world.insert_body(body, ColliderBuilder::cuboid(0.5, 0.5, 0.5));
        }
    }

    world
}

fn main() -> BridgeResult<()> {
    physics_bridge::foundation::logging::try_init_with_level(log::LevelFilter::Info);

    log::info!("Starting physics debug draw demo");

    let mut scene = MemoryScene::new();
    let mut world = build_world();
    let mut drawer = create_drawer(&mut scene)?;

    for frame in 1..=FRAMES {
        world.step();
        drawer.step(&world, &mut scene);

        if frame % REPORT_EVERY == 0 {
            let vertices = drawer
                .line_drawer()
                .geometry()
                .and_then(|id| scene.geometry(id))
                .map_or(0, |geometry| geometry.vertex_count());
            log::info!(
                "frame {}: {} lines, {} vertices uploaded",
                frame,
                drawer.line_drawer().lines().len(),
                vertices
            );
        }

        if frame == FRAMES / 2 {
            log::info!("Switching to contact-only debug mode");
            drawer.set_debug_mode(DebugRenderMode::CONTACTS, &mut scene);
        }
    }

    drawer.destroy(&mut scene);
    log::info!("Demo finished, {} geometry objects left in the scene", scene.geometry_count());
    Ok(())
}
