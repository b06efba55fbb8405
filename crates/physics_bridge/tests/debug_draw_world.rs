//! End-to-end: rapier world -> debug drawer -> in-memory scene

use physics_bridge::prelude::*;
use physics_bridge::rapier3d::prelude::{point, vector, ColliderBuilder, RigidBodyBuilder};

fn ground_and_ball() -> PhysicsWorld {
    let mut world = PhysicsWorld::new();
    world.insert_static_collider(ColliderBuilder::cuboid(10.0, 0.1, 10.0));
    world.insert_body(
        RigidBodyBuilder::dynamic().translation(vector![0.0, 0.59, 0.0]),
        ColliderBuilder::ball(0.5),
    );
    world
}

fn vertex_count(scene: &MemoryScene, drawer: &DebugDrawer) -> usize {
    drawer
        .line_drawer()
        .geometry()
        .and_then(|id| scene.geometry(id))
        .map_or(0, |geometry| geometry.vertex_count())
}

#[test]
fn collider_shapes_reach_the_scene() {
    let mut scene = MemoryScene::new();
    let root = scene.root_node();
    let config = DebugDrawConfig::default().with_debug_mode(DebugRenderMode::COLLIDER_SHAPES);
    let mut drawer = DebugDrawer::new(&mut scene, root, &config).unwrap();
    let mut world = ground_and_ball();

    world.step();
    drawer.step(&world, &mut scene);

    let lines = drawer.line_drawer().lines().len();
    assert!(lines > 0);
    assert_eq!(vertex_count(&scene, &drawer), lines * 2);
    assert!(scene.unlit_material_exists(DebugDrawConfig::DEFAULT_MATERIAL));

    let geometry = scene.geometry(drawer.line_drawer().geometry().unwrap()).unwrap();
    assert_eq!(geometry.attached_to(), Some(drawer.node()));
    assert_eq!(geometry.sections().len(), 1);

    drawer.destroy(&mut scene);
    assert_eq!(scene.geometry_count(), 0);
}

#[test]
fn batches_do_not_accumulate_across_steps() {
    let mut scene = MemoryScene::new();
    let root = scene.root_node();
    let config = DebugDrawConfig::default().with_debug_mode(DebugRenderMode::COLLIDER_SHAPES);
    let mut drawer = DebugDrawer::new(&mut scene, root, &config).unwrap();
    let mut world = ground_and_ball();

    world.step();
    drawer.step(&world, &mut scene);
    let first = drawer.line_drawer().lines().len();

    for _ in 0..5 {
        world.step();
        drawer.step(&world, &mut scene);
    }

    assert_eq!(drawer.line_drawer().lines().len(), first);
    assert_eq!(vertex_count(&scene, &drawer), first * 2);
    drawer.destroy(&mut scene);
}

#[test]
fn contacts_are_drawn_along_the_normal() {
    let mut scene = MemoryScene::new();
    let root = scene.root_node();
    let config = DebugDrawConfig::default().with_debug_mode(DebugRenderMode::CONTACTS);
    let mut drawer = DebugDrawer::new(&mut scene, root, &config).unwrap();
    let mut world = ground_and_ball();

    for _ in 0..10 {
        world.step();
    }
    drawer.step(&world, &mut scene);

    let lines = drawer.line_drawer().lines();
    assert!(!lines.is_empty());
    for line in lines {
        let direction = line.end - line.start;
        assert!(direction.x.abs() < 1e-3 && direction.z.abs() < 1e-3);
        assert_eq!(line.color, config.contact_color);
    }
    drawer.destroy(&mut scene);
}

#[test]
fn disabled_mode_clears_geometry() {
    let mut scene = MemoryScene::new();
    let root = scene.root_node();
    let mut drawer = DebugDrawer::new(&mut scene, root, &DebugDrawConfig::default()).unwrap();
    let mut world = ground_and_ball();

    world.step();
    drawer.step(&world, &mut scene);
    assert!(vertex_count(&scene, &drawer) > 0);

    drawer.set_debug_mode(DebugRenderMode::empty(), &mut scene);
    assert_eq!(vertex_count(&scene, &drawer), 0);

    world.step();
    drawer.step(&world, &mut scene);

    assert!(drawer.line_drawer().lines().is_empty());
    assert_eq!(vertex_count(&scene, &drawer), 0);
    drawer.destroy(&mut scene);
}

#[test]
fn empty_pass_drops_stale_lines() {
    let mut scene = MemoryScene::new();
    let root = scene.root_node();
    let mut drawer = DebugDrawer::new(&mut scene, root, &DebugDrawConfig::default()).unwrap();
    let world = PhysicsWorld::new();

    drawer.draw_line(&point![0.0, 0.0, 0.0], &point![1.0, 0.0, 0.0], &vector![1.0, 0.0, 0.0]);
    drawer.step(&world, &mut scene);
    assert_eq!(vertex_count(&scene, &drawer), 2);

    drawer.step(&world, &mut scene);
    assert_eq!(vertex_count(&scene, &drawer), 0);
    drawer.destroy(&mut scene);
}

#[test]
fn child_node_is_created_under_the_given_parent() {
    let mut scene = MemoryScene::new();
    let parent = scene
        .create_child_node(scene.root_node(), NodeMobility::Dynamic)
        .unwrap();

    let drawer = DebugDrawer::new(&mut scene, parent, &DebugDrawConfig::default()).unwrap();

    assert_eq!(scene.node(drawer.node()).unwrap().parent, Some(parent));
    assert_eq!(scene.node(parent).unwrap().children, vec![drawer.node()]);
    drawer.destroy(&mut scene);
}
