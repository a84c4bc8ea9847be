use taut::{FollowMode, Follower, Vec2};

#[test]
fn proportional_follower_closes_the_gap() {
    let mut f: Follower<f64> = Follower::new(Vec2::zero(), FollowMode::Proportional(5.0));
    f.target = Vec2::new(10.0, 0.0);

    let mut last_gap = f.pos.distance(f.target);
    for _ in 0..120 {
        f.update(1.0 / 60.0);
        let gap = f.pos.distance(f.target);
        assert!(gap <= last_gap, "gap must shrink: {} -> {}", last_gap, gap);
        last_gap = gap;
    }
    assert!(last_gap < 0.01, "gap after 2 seconds: {}", last_gap);
}

#[test]
fn proportional_follower_never_overshoots_on_huge_deltas() {
    let mut f: Follower<f64> = Follower::new(Vec2::zero(), FollowMode::Proportional(5.0));
    f.target = Vec2::new(10.0, 0.0);

    f.update(100.0);

    assert_eq!(f.pos, f.target, "rate * delta past 1 clamps to arrival");
    assert!(f.arrived());
}

#[test]
fn fixed_speed_follower_snaps_on_arrival() {
    let mut f: Follower<f64> = Follower::new(Vec2::zero(), FollowMode::FixedSpeed(3.0));
    f.target = Vec2::new(4.0, 0.0);

    f.update(1.0);
    assert_eq!(f.pos, Vec2::new(3.0, 0.0));

    f.update(1.0); // only 1 unit left; a 3 unit step snaps exactly
    assert_eq!(f.pos, f.target);
    assert!(f.arrived());
}
