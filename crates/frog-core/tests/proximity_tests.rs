// Host-side tests for the distance-to-volume curve and nearest selection.

use frog_core::*;
use glam::Vec2;

fn frog(id: u32, x: f32, y: f32, is_target: bool) -> Frog {
    Frog {
        id,
        position: Vec2::new(x, y),
        kind: format!("kind-{id}"),
        sound: format!("sounds/kind-{id}.mp3"),
        is_target,
    }
}

#[test]
fn volume_is_monotonically_non_increasing_in_distance() {
    let mut prev = volume_for_distance(0.0);
    assert!((prev - 1.0).abs() < 1e-6, "volume at zero distance is full");
    let mut d = 0.0_f32;
    while d <= SOUND_THRESHOLD + 2.0 {
        let v = volume_for_distance(d);
        assert!(v <= prev + 1e-6, "volume increased at distance {d}");
        prev = v;
        d += 0.1;
    }
}

#[test]
fn volume_at_half_threshold_matches_the_power_curve() {
    let v = volume_for_distance(SOUND_THRESHOLD / 2.0);
    let expected = 0.5_f32.powf(VOLUME_CURVE_EXPONENT);
    assert!(
        (v - expected).abs() < 1e-6,
        "expected {expected} at half threshold, got {v}"
    );
}

#[test]
fn volume_floor_applies_near_the_threshold() {
    // The raw curve is nearly zero here; the audible floor takes over.
    let v = volume_for_distance(SOUND_THRESHOLD - 0.01);
    assert!((v - VOLUME_FLOOR).abs() < 1e-6);
}

#[test]
fn volume_is_zero_at_and_beyond_the_threshold() {
    assert_eq!(volume_for_distance(SOUND_THRESHOLD), 0.0);
    assert_eq!(volume_for_distance(SOUND_THRESHOLD * 3.0), 0.0);
}

#[test]
fn only_the_nearest_frog_is_audible() {
    let frogs = vec![
        frog(0, 20.0, 20.0, false),
        frog(1, 30.0, 20.0, false),
        frog(2, 80.0, 80.0, true),
    ];
    let mut out = FrogVolumes::new();
    proximity_volumes(Vec2::new(21.0, 20.0), &frogs, &mut out);
    assert_eq!(out.len(), 3);
    assert!(out[0].volume > 0.0, "nearest frog should be audible");
    assert_eq!(out[1].volume, 0.0);
    assert_eq!(out[2].volume, 0.0);
}

#[test]
fn everything_is_silent_when_the_pointer_is_far() {
    let frogs = vec![
        frog(0, 10.0, 10.0, false),
        frog(1, 90.0, 10.0, false),
        frog(2, 10.0, 90.0, false),
        frog(3, 90.0, 90.0, true),
    ];
    let mut out = FrogVolumes::new();
    proximity_volumes(Vec2::new(50.0, 50.0), &frogs, &mut out);
    assert_eq!(out.len(), 4);
    for l in &out {
        assert_eq!(l.volume, 0.0, "frog {} should be silent", l.id);
    }
}

#[test]
fn nearest_frog_picks_the_minimum_distance() {
    let frogs = vec![
        frog(0, 10.0, 10.0, false),
        frog(1, 40.0, 40.0, false),
        frog(2, 90.0, 90.0, true),
    ];
    let (i, d) = nearest_frog(Vec2::new(42.0, 40.0), &frogs).unwrap();
    assert_eq!(i, 1);
    assert!((d - 2.0).abs() < 1e-6);
}

#[test]
fn empty_board_yields_no_volumes() {
    let mut out = FrogVolumes::new();
    proximity_volumes(Vec2::new(50.0, 50.0), &[], &mut out);
    assert!(out.is_empty());
    assert!(nearest_frog(Vec2::new(50.0, 50.0), &[]).is_none());
}

#[test]
fn out_vector_is_reusable_across_samples() {
    let frogs = vec![frog(0, 50.0, 50.0, true)];
    let mut out = FrogVolumes::new();
    proximity_volumes(Vec2::new(50.0, 50.0), &frogs, &mut out);
    proximity_volumes(Vec2::new(0.0, 0.0), &frogs, &mut out);
    assert_eq!(out.len(), 1, "stale entries must be cleared");
    assert_eq!(out[0].volume, 0.0);
}
