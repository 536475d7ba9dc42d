use glam::Vec3;
use std::collections::HashSet;
use wirescape::shape::Shape;
use wirescape::types::Color;
use wirescape::FLOOR_HEIGHT;

#[test]
fn cube_has_expected_topology() {
    let cube = Shape::cube(100.0, 100.0, Vec3::ZERO, false, Color::BROWN, None);
    assert_eq!(cube.vertices.len(), 8);
    assert_eq!(cube.edges.len(), 12);
    assert_eq!(cube.faces.len(), 6);

    for face in &cube.faces {
        let distinct: HashSet<usize> = face.iter().copied().collect();
        assert_eq!(distinct.len(), 4, "cube face must have 4 distinct corners");
        assert!(face.iter().all(|&i| i < cube.vertices.len()));
    }
}

#[test]
fn cube_vertices_stay_within_half_extents() {
    let center = Vec3::new(10.0, -20.0, 30.0);
    let cube = Shape::cube(100.0, 100.0, center, false, Color::BROWN, None);
    for v in &cube.vertices {
        let local = *v - center;
        assert!(local.x.abs() <= 50.0 + f32::EPSILON);
        assert!(local.y.abs() <= 50.0 + f32::EPSILON);
        assert!(local.z.abs() <= 50.0 + f32::EPSILON);
    }
}

#[test]
fn cube_width_and_height_are_independent() {
    let cube = Shape::cube(150.0, 600.0, Vec3::ZERO, false, Color::BROWN, None);
    for v in &cube.vertices {
        assert!(v.x.abs() <= 75.0 && v.z.abs() <= 75.0);
        assert!(v.y.abs() <= 300.0);
    }
}

#[test]
fn pyramid_has_expected_topology() {
    let pyramid = Shape::pyramid(100.0, Vec3::ZERO, false, Color::GREEN);
    assert_eq!(pyramid.vertices.len(), 5);
    assert_eq!(pyramid.edges.len(), 8);
    assert_eq!(pyramid.faces.len(), 4);
}

#[test]
fn pyramid_apex_appears_in_every_face() {
    let pyramid = Shape::pyramid(100.0, Vec3::ZERO, false, Color::GREEN);
    for face in &pyramid.faces {
        assert!(face.contains(&4), "face {:?} is missing the apex", face);
    }
}

#[test]
fn pyramid_faces_are_degenerate_quads() {
    let pyramid = Shape::pyramid(100.0, Vec3::ZERO, false, Color::GREEN);
    for face in &pyramid.faces {
        let distinct: HashSet<usize> = face.iter().copied().collect();
        assert_eq!(distinct.len(), 3, "triangle encoded by repeating an index");
    }
}

#[test]
fn grid_floor_topology_and_height() {
    let grid = Shape::grid_floor(20, 150.0);
    assert_eq!(grid.vertices.len(), 400);
    assert_eq!(grid.edges.len(), 40);
    assert!(grid.faces.is_empty());
    assert!(!grid.animates);
    assert!(grid.bullet_angle.is_none());

    for v in &grid.vertices {
        assert_eq!(v.y, FLOOR_HEIGHT);
    }
}

#[test]
fn grid_floor_edges_span_the_boundary() {
    let n = 4;
    let grid = Shape::grid_floor(n, 10.0);
    for i in 0..n {
        // One edge spans the x rows at column i, one spans row i across columns.
        assert!(grid.edges.contains(&[i, n * n - n + i]));
        assert!(grid.edges.contains(&[i * n, i * n + (n - 1)]));
    }
}

#[test]
fn new_shape_starts_with_zero_shoot_time() {
    let cube = Shape::cube(
        100.0,
        100.0,
        Vec3::ZERO,
        true,
        Color::MAGENTA,
        Some(Vec3::new(0.0, 0.5, 0.0)),
    );
    assert_eq!(cube.shoot_time, 0.0);
}

#[test]
fn projectile_offset_is_zero_for_static_shapes() {
    let cube = Shape::cube(100.0, 100.0, Vec3::ZERO, false, Color::BROWN, None);
    assert_eq!(cube.projectile_offset(), Vec3::ZERO);
}

#[test]
fn projectile_offset_follows_the_launch_arc() {
    let mut cube = Shape::cube(
        100.0,
        100.0,
        Vec3::ZERO,
        true,
        Color::MAGENTA,
        Some(Vec3::ZERO),
    );
    cube.shoot_time = 2.0;

    // Unrotated arc: y drops by (t/2)^3, z advances by 10 t^2.
    let offset = cube.projectile_offset();
    assert!((offset.x).abs() < 1e-4);
    assert!((offset.y + 1.0).abs() < 1e-4);
    assert!((offset.z - 40.0).abs() < 1e-4);
}

#[test]
#[should_panic(expected = "edge")]
fn out_of_range_edge_index_panics() {
    Shape::new(
        vec![Vec3::ZERO, Vec3::X],
        vec![[0, 2]],
        Vec::new(),
        Color::BROWN,
        Vec3::ZERO,
        false,
        None,
    );
}

#[test]
#[should_panic(expected = "face")]
fn out_of_range_face_index_panics() {
    Shape::new(
        vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z],
        Vec::new(),
        vec![[0, 1, 2, 4]],
        Color::BROWN,
        Vec3::ZERO,
        false,
        None,
    );
}
