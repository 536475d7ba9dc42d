use glam::Vec3;
use wirescape::camera::TURN_SPEED;
use wirescape::render::camera_space_vertices;
use wirescape::scene::create_default_scene;
use wirescape::shape::Shape;
use wirescape::types::Color;
use wirescape::world::{World, BOX_SIZE, SHOOT_TIME_STEP, SPIN_STEP};

fn empty_world() -> World {
    World::new(Vec::new())
}

#[test]
fn advance_accumulates_spin() {
    let mut world = empty_world();
    world.advance();
    world.advance();
    assert!((world.spin_angle - 2.0 * SPIN_STEP).abs() < 1e-6);
}

#[test]
fn advance_applies_held_camera_input() {
    let mut world = empty_world();
    world.camera.movement.forward = true;
    world.camera.movement.turn_left = true;
    let start_z = world.camera.position.z;

    world.advance();

    assert_eq!(world.camera.yaw, TURN_SPEED);
    assert!(world.camera.position.z < start_z);
}

#[test]
fn firing_appends_projectiles_in_draw_order() {
    let mut world = World::new(create_default_scene(20));
    let base_count = world.shapes.len();

    world.fire();
    world.fire();

    assert_eq!(world.shapes.len(), base_count + 2);
    for shot in &world.shapes[base_count..] {
        let angle = shot.bullet_angle.expect("fired shape must carry its yaw");
        assert!((angle.y - world.camera.yaw).abs() <= 0.25 + 1e-6);
        assert!(shot.animates);
        assert_eq!(shot.shoot_time, 0.0);
        assert_eq!(shot.center, -world.camera.position);
    }
}

#[test]
fn fired_color_blends_magenta_toward_yellow() {
    let mut world = empty_world();
    world.fire();
    let color = world.shapes[0].color;

    // Any blend of magenta (1,0,1) and yellow (1,1,0) keeps r = 1 and
    // g + b = 1.
    assert!((color.r - 1.0).abs() < 1e-6);
    assert!((color.g + color.b - 1.0).abs() < 1e-6);
    assert_eq!(color.a, 1.0);
}

#[test]
fn airborne_projectile_ages_each_tick() {
    let mut world = empty_world();
    world.fire();

    world.advance();
    assert_eq!(world.shapes[0].shoot_time, SHOOT_TIME_STEP);
    world.advance();
    assert_eq!(world.shapes[0].shoot_time, 2.0 * SHOOT_TIME_STEP);
}

#[test]
fn projectile_freezes_at_the_floor() {
    let mut world = empty_world();
    world.fire();

    for _ in 0..50 {
        world.advance();
    }
    let resting_time = world.shapes[0].shoot_time;
    let resting_offset = world.shapes[0].projectile_offset();

    // The launch arc has dropped it to the floor well before 50 ticks;
    // further ticks change nothing.
    for _ in 0..10 {
        world.advance();
    }
    assert_eq!(world.shapes[0].shoot_time, resting_time);
    assert_eq!(world.shapes[0].projectile_offset(), resting_offset);
    assert!(resting_time < 50.0 * SHOOT_TIME_STEP);
}

#[test]
fn resting_projectile_renders_at_a_fixed_position() {
    // A non-spinning projectile shape isolates the trajectory contribution.
    let mut world = empty_world();
    world.shapes.push(Shape::cube(
        BOX_SIZE,
        BOX_SIZE,
        Vec3::ZERO,
        false,
        Color::MAGENTA,
        Some(Vec3::new(0.0, 0.3, 0.0)),
    ));

    for _ in 0..60 {
        world.advance();
    }
    let resting =
        camera_space_vertices(&world.shapes[0], world.spin_angle, &world.camera);

    world.advance();
    let after =
        camera_space_vertices(&world.shapes[0], world.spin_angle, &world.camera);

    assert_eq!(resting, after);
}

#[test]
fn advance_leaves_static_shapes_untouched() {
    let mut world = World::new(create_default_scene(20));
    let before: Vec<f32> = world.shapes.iter().map(|s| s.shoot_time).collect();

    world.advance();

    let after: Vec<f32> = world.shapes.iter().map(|s| s.shoot_time).collect();
    assert_eq!(before, after);
}
