use tessel_blocks::{BlockHitResult, Direction, raytrace_block};
use tessel_geom::Vec3;

#[test]
fn downward_ray_enters_through_top() {
    let hit = raytrace_block(0, 0, 0, Vec3::new(0.5, 2.0, 0.5), Vec3::new(0.5, -2.0, 0.5)).unwrap();
    assert_eq!(hit, BlockHitResult { x: 0, y: 0, z: 0, face: Direction::Up });
}

#[test]
fn upward_ray_enters_through_bottom() {
    let hit = raytrace_block(0, 0, 0, Vec3::new(0.5, -2.0, 0.5), Vec3::new(0.5, 2.0, 0.5)).unwrap();
    assert_eq!(hit.face, Direction::Down);
}

#[test]
fn horizontal_rays_report_entry_face() {
    let cases = [
        (Vec3::new(0.5, 0.5, -3.0), Vec3::new(0.5, 0.5, 3.0), Direction::North),
        (Vec3::new(0.5, 0.5, 3.0), Vec3::new(0.5, 0.5, -3.0), Direction::South),
        (Vec3::new(-3.0, 0.5, 0.5), Vec3::new(3.0, 0.5, 0.5), Direction::West),
        (Vec3::new(3.0, 0.5, 0.5), Vec3::new(-3.0, 0.5, 0.5), Direction::East),
    ];
    for (start, end, face) in cases {
        let hit = raytrace_block(0, 0, 0, start, end).unwrap();
        assert_eq!(hit.face, face);
    }
}

#[test]
fn block_position_is_applied() {
    // Same downward ray shifted to block (10, 64, -3)
    let start = Vec3::new(10.5, 66.0, -2.5);
    let end = Vec3::new(10.5, 62.0, -2.5);
    let hit = raytrace_block(10, 64, -3, start, end).unwrap();
    assert_eq!((hit.x, hit.y, hit.z, hit.face), (10, 64, -3, Direction::Up));
    // Block next to it along the ray's path is missed
    assert!(raytrace_block(11, 64, -3, start, end).is_none());
}

#[test]
fn parallel_ray_outside_cross_section_misses() {
    // Runs parallel to y, offset outside the cube in x
    assert!(raytrace_block(0, 0, 0, Vec3::new(1.5, 2.0, 0.5), Vec3::new(1.5, -2.0, 0.5)).is_none());
    // Runs parallel to x above the cube
    assert!(raytrace_block(0, 0, 0, Vec3::new(-2.0, 1.5, 0.5), Vec3::new(2.0, 1.5, 0.5)).is_none());
}

#[test]
fn segment_stopping_short_misses() {
    assert!(raytrace_block(0, 0, 0, Vec3::new(0.5, 5.0, 0.5), Vec3::new(0.5, 1.5, 0.5)).is_none());
}

#[test]
fn ties_resolve_in_direction_order() {
    // Diagonal through the (x=0, y=1) edge: the UP and WEST planes are hit at the
    // same point; UP is evaluated first and wins.
    let hit = raytrace_block(0, 0, 0, Vec3::new(-1.0, 2.0, 0.5), Vec3::new(1.0, 0.0, 0.5)).unwrap();
    assert_eq!(hit.face, Direction::Up);
}

#[test]
fn ray_starting_inside_hits_exit_face() {
    let hit = raytrace_block(0, 0, 0, Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.5, 0.5, 4.0)).unwrap();
    assert_eq!(hit.face, Direction::South);
}

#[test]
fn adjacent_cell_follows_face_normal() {
    let hit = BlockHitResult { x: 3, y: 4, z: 5, face: Direction::West };
    assert_eq!(hit.adjacent(), (2, 4, 5));
    let hit = BlockHitResult { face: Direction::Up, ..hit };
    assert_eq!(hit.adjacent(), (3, 5, 5));
}
