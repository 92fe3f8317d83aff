//! Hero scene behavior: resize, pointer easing, cloud immutability,
//! and output-buffer layout.

#![cfg(not(target_arch = "wasm32"))]

use approx::assert_relative_eq;
use starfield_engine::render::{LINE_STRIDE, POINT_STRIDE};
use starfield_engine::sim::{HeroWorld, PARTICLE_COUNT, SHAPE_COUNT};

#[test]
fn resize_updates_half_dimensions() {
    let mut world = HeroWorld::new(1280, 720);
    assert_eq!(world.half_width(), 640.0);
    assert_eq!(world.half_height(), 360.0);

    world.resize(1920, 1080);
    assert_eq!(world.half_width(), 960.0);
    assert_eq!(world.half_height(), 540.0);
    assert_relative_eq!(world.camera().aspect(), 1920.0 / 1080.0);
}

#[test]
fn pointer_offset_is_normalized_against_half_dimensions() {
    let mut world = HeroWorld::new(1000, 500);

    world.pointer_moved(500.0, 250.0); // dead center
    assert_relative_eq!(world.mouse().0, 0.0);
    assert_relative_eq!(world.mouse().1, 0.0);

    world.pointer_moved(1000.0, 500.0); // bottom-right corner
    assert_relative_eq!(world.mouse().0, 1.0);
    assert_relative_eq!(world.mouse().1, 1.0);

    world.pointer_moved(0.0, 0.0); // top-left corner
    assert_relative_eq!(world.mouse().0, -1.0);
    assert_relative_eq!(world.mouse().1, -1.0);
}

#[test]
fn camera_eases_toward_the_pointer_target() {
    let mut world = HeroWorld::new(800, 600);
    world.pointer_moved(800.0, 300.0); // mouse_x = 1, mouse_y = 0

    for frame in 0..600 {
        world.tick(frame as f64 * 16.0);
    }

    let camera = world.camera();
    assert_relative_eq!(camera.x, 0.05, epsilon = 1e-4);
    assert_relative_eq!(camera.y, 0.0, epsilon = 1e-4);
}

#[test]
fn camera_moves_a_fraction_per_frame() {
    let mut world = HeroWorld::new(800, 600);
    world.pointer_moved(800.0, 300.0);

    world.tick(0.0);
    let after_one = world.camera().x;
    assert!(after_one > 0.0 && after_one < 0.05);
}

#[test]
fn particle_cloud_is_generated_once_and_immutable() {
    let mut world = HeroWorld::new(640, 480);
    let cloud = world.cloud();
    assert_eq!(cloud.len(), PARTICLE_COUNT);

    let x0 = cloud.x.clone();
    let y0 = cloud.y.clone();
    let z0 = cloud.z.clone();

    for frame in 0..10 {
        world.tick(frame as f64 * 16.0);
    }

    assert_eq!(world.cloud().x, x0);
    assert_eq!(world.cloud().y, y0);
    assert_eq!(world.cloud().z, z0);

    // Only the orientation advances
    assert!(world.cloud().rot_y > 0.0);
    assert!(world.cloud().rot_x > 0.0);
    assert!(world.cloud().rot_y > world.cloud().rot_x);
}

#[test]
fn particles_spawn_inside_the_volume() {
    let world = HeroWorld::new(640, 480);
    let cloud = world.cloud();
    for i in 0..cloud.len() {
        assert!(cloud.x[i].abs() <= 100.0);
        assert!(cloud.y[i].abs() <= 100.0);
        assert!(cloud.z[i].abs() <= 50.0);
        assert_eq!(cloud.r[i], 1.0);
        assert_eq!(cloud.g[i], 1.0);
        assert_eq!(cloud.b[i], 1.0);
    }
}

#[test]
fn shapes_carry_speeds_inside_the_assigned_ranges() {
    let world = HeroWorld::new(640, 480);
    let shapes = world.shapes();
    assert_eq!(shapes.len(), SHAPE_COUNT);

    for shape in &shapes.items {
        assert!(shape.rot_speed >= 0.001 && shape.rot_speed < 0.003);
        assert!(shape.float_speed >= 0.0005 && shape.float_speed < 0.0015);
        assert!(shape.position.x.abs() <= 25.0);
        assert!(shape.position.y.abs() <= 25.0);
        assert!(shape.position.z.abs() <= 15.0);
        assert!(!shape.edges.is_empty());
    }
}

#[test]
fn tick_fills_buffers_with_consistent_strides() {
    let mut world = HeroWorld::new(1280, 720);
    world.tick(16.0);

    let points = world.points();
    assert_eq!(points.len(), world.point_count() * POINT_STRIDE);
    assert!(world.point_count() > PARTICLE_COUNT / 2);
    assert!(world.point_count() <= PARTICLE_COUNT);

    let lines = world.lines();
    assert_eq!(lines.len(), world.line_count() * LINE_STRIDE);
    assert!(world.line_count() > 0);

    // Every point record carries the white cloud color at 0.8 alpha
    for rec in points.chunks_exact(POINT_STRIDE) {
        assert!(rec[2] > 0.0, "point size must be positive");
        assert_eq!(&rec[3..7], &[1.0, 1.0, 1.0, 0.8]);
    }
}

#[test]
fn buffers_are_rebuilt_every_tick() {
    let mut world = HeroWorld::new(1280, 720);
    world.tick(16.0);
    let first = world.point_count();
    world.tick(32.0);
    // Rebuilt, not appended
    assert!(world.point_count() <= PARTICLE_COUNT);
    assert!(world.point_count() > 0);
    assert!((world.point_count() as i64 - first as i64).abs() < PARTICLE_COUNT as i64);
}
