use taut::{PathMover, SimError, Vec2, Winding};

#[test]
fn waypoints_hit_exactly_at_matching_speed() {
    // (0,0) -> (10,0) -> (10,10) at speed 10: one waypoint per second.
    let mut m: PathMover<f64> =
        PathMover::polyline(Vec2::new(0.0, 0.0), &[Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)], 10.0);
    m.start();

    m.update(1.0);
    assert_eq!(m.pos, Vec2::new(10.0, 0.0), "tick 1 should land exactly on the waypoint");
    assert_eq!(m.overrun(), 0.0);

    m.update(1.0);
    assert_eq!(m.pos, Vec2::new(10.0, 10.0), "no drift may accumulate across segments");
}

#[test]
fn overrun_is_carried_into_the_next_update() {
    // First segment is 3 units at speed 1; a 5 second step overshoots by 2.
    let mut m: PathMover<f64> =
        PathMover::polyline(Vec2::new(0.0, 0.0), &[Vec2::new(3.0, 0.0), Vec2::new(0.0, 10.0)], 1.0);
    m.start();

    m.update(5.0);
    assert_eq!(m.pos, Vec2::new(3.0, 0.0), "must snap onto the waypoint, not past it");
    assert!((m.overrun() - 2.0).abs() < 1e-12, "overrun = {}", m.overrun());

    m.update(1.0);
    assert!(
        (m.pos.y - 3.0).abs() < 1e-12,
        "carried overrun must not lose time: pos = {:?}",
        m.pos
    );
    assert_eq!(m.overrun(), 0.0);
}

#[test]
fn empty_path_never_moves() {
    let mut m: PathMover<f64> = PathMover::new(10.0);
    m.start();
    for _ in 0..10 {
        m.update(1.0);
    }
    assert_eq!(m.pos, Vec2::zero());
}

#[test]
fn single_waypoint_path_never_moves() {
    let mut m: PathMover<f64> = PathMover::new(10.0);
    m.push_waypoint(Vec2::new(4.0, 4.0));
    m.start();
    for _ in 0..10 {
        m.update(1.0);
    }
    assert_eq!(m.pos, Vec2::new(4.0, 4.0));
}

#[test]
fn update_before_start_is_a_no_op() {
    let mut m: PathMover<f64> =
        PathMover::polyline(Vec2::new(1.0, 1.0), &[Vec2::new(10.0, 0.0)], 10.0);
    m.update(1.0);
    assert_eq!(m.pos, Vec2::zero(), "translation only begins after start()");
}

#[test]
fn pause_stops_translation_but_not_rotation() {
    let mut m: PathMover<f64> =
        PathMover::polyline(Vec2::new(0.0, 0.0), &[Vec2::new(10.0, 0.0)], 10.0);
    m.set_rotation_speed(2.0);
    m.start();
    m.pause();

    m.update(1.0);

    assert_eq!(m.pos, Vec2::new(0.0, 0.0));
    assert!((m.angle() - 2.0).abs() < 1e-12, "rotation is independent of path state");

    m.resume();
    m.update(0.5);
    assert_eq!(m.pos, Vec2::new(5.0, 0.0));
}

#[test]
fn rotation_accumulates_every_update() {
    let mut m: PathMover<f64> = PathMover::new(1.0);
    m.set_rotation_speed(2.0);
    for _ in 0..3 {
        m.update(0.5);
    }
    assert!((m.angle() - 3.0).abs() < 1e-12);
}

#[test]
fn forward_wraps_to_the_first_waypoint() {
    let mut m: PathMover<f64> =
        PathMover::polyline(Vec2::new(0.0, 0.0), &[Vec2::new(10.0, 0.0)], 10.0);
    m.start();
    assert_eq!(m.target_index(), 1);

    m.update(1.0);
    assert_eq!(m.target_index(), 0, "end of path wraps to waypoint 0");
}

#[test]
fn reverse_decrements_with_wraparound() {
    let mut m: PathMover<f64> = PathMover::polyline(
        Vec2::new(0.0, 0.0),
        &[Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)],
        10.0,
    );
    m.set_reverse(true);
    m.start();
    assert_eq!(m.target_index(), 1);

    m.update(1.0);
    assert_eq!(m.target_index(), 0);

    m.update(1.0);
    assert_eq!(m.target_index(), 2, "reverse wraps from 0 to the last waypoint");
}

#[test]
fn per_segment_speed_applies_to_its_segment() {
    let mut m: PathMover<f64> =
        PathMover::polyline(Vec2::new(0.0, 0.0), &[Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)], 10.0);
    m.set_segment_speed(2, 5.0).unwrap();
    m.start();

    m.update(1.0); // segment to waypoint 1 at speed 10
    assert_eq!(m.pos, Vec2::new(10.0, 0.0));

    m.update(1.0); // segment to waypoint 2 at speed 5
    assert_eq!(m.pos, Vec2::new(10.0, 5.0));
}

#[test]
fn jump_to_point_teleports_and_retargets() {
    let mut m: PathMover<f64> = PathMover::polyline(
        Vec2::new(0.0, 0.0),
        &[Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)],
        10.0,
    );
    m.start();

    m.jump_to_point(1).unwrap();
    assert_eq!(m.pos, Vec2::new(10.0, 0.0));
    assert_eq!(m.target_index(), 2);

    assert_eq!(
        m.jump_to_point(9),
        Err(SimError::PointOutOfBounds { index: 9, count: 3 })
    );
}

#[test]
fn circle_path_points_sit_on_the_radius() {
    let center = Vec2::new(2.0, -1.0);
    let m: PathMover<f64> =
        PathMover::circle(center, 5.0, 8, Winding::Clockwise, 10.0).unwrap();

    assert_eq!(m.waypoints().len(), 8);
    for (i, w) in m.waypoints().iter().enumerate() {
        let r = w.distance(center);
        assert!((r - 5.0).abs() < 1e-9, "waypoint {} at radius {}", i, r);
    }
}

#[test]
fn circle_winding_mirrors_the_sweep() {
    let center = Vec2::new(0.0, 0.0);
    let cw: PathMover<f64> =
        PathMover::circle(center, 5.0, 4, Winding::Clockwise, 10.0).unwrap();
    let ccw: PathMover<f64> =
        PathMover::circle(center, 5.0, 4, Winding::CounterClockwise, 10.0).unwrap();

    assert_eq!(cw.waypoints()[0], ccw.waypoints()[0]);
    assert!((cw.waypoints()[1].y + ccw.waypoints()[1].y).abs() < 1e-9);
    assert!(cw.waypoints()[1].y > 0.0, "+y is down: clockwise sweeps through +y first");
}

#[test]
fn circle_rejects_bad_geometry() {
    assert_eq!(
        PathMover::<f64>::circle(Vec2::zero(), 0.0, 8, Winding::Clockwise, 1.0).unwrap_err(),
        SimError::InvalidRadius
    );
    assert_eq!(
        PathMover::<f64>::circle(Vec2::zero(), 5.0, 1, Winding::Clockwise, 1.0).unwrap_err(),
        SimError::InsufficientWaypoints { got: 1 }
    );
}

#[test]
fn coincident_waypoints_do_not_stall() {
    let mut m: PathMover<f64> = PathMover::new(1.0);
    m.push_waypoint(Vec2::new(0.0, 0.0));
    m.push_waypoint(Vec2::new(0.0, 0.0));
    m.push_waypoint(Vec2::new(2.0, 0.0));
    m.start();

    m.update(1.0); // zero-length segment consumed, time kept as overrun
    m.update(1.0);

    assert_eq!(m.pos, Vec2::new(2.0, 0.0), "mover should pass the duplicate waypoint");
}
