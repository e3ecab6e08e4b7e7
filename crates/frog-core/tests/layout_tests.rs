// Host-side tests for the placement sampler.

use frog_core::*;
use rand::prelude::*;

#[test]
fn always_exactly_one_target_placed_last() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let frogs = place_frogs(&mut rng, &default_config(), &LayoutParams::default());
        let targets = frogs.iter().filter(|f| f.is_target).count();
        assert_eq!(targets, 1, "seed {seed}: expected exactly one target");
        assert!(
            frogs.last().unwrap().is_target,
            "seed {seed}: target should be the last frog placed"
        );
    }
}

#[test]
fn decoy_count_and_ids_are_well_formed() {
    let config = default_config();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let frogs = place_frogs(&mut rng, &config, &LayoutParams::default());
        let total = frogs.len() as u32;
        assert!(
            (DECOY_COUNT_MIN + 1..=DECOY_COUNT_MAX + 1).contains(&total),
            "seed {seed}: unexpected roster size {total}"
        );
        for (i, f) in frogs.iter().enumerate() {
            assert_eq!(f.id, i as u32, "ids are sequential");
        }
        let target = frogs.last().unwrap();
        assert_eq!(target.kind, config.target.name);
        assert_eq!(target.sound, config.target.sound);
        for decoy in &frogs[..frogs.len() - 1] {
            assert!(
                config.decoys.iter().any(|k| k.name == decoy.kind),
                "seed {seed}: decoy kind `{}` not in roster",
                decoy.kind
            );
        }
    }
}

#[test]
fn positions_stay_inside_the_spawn_rect() {
    // Holds even for degraded placements: every sample is drawn in-bounds.
    let params = LayoutParams::default();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let frogs = place_frogs(&mut rng, &default_config(), &params);
        for f in &frogs {
            assert!(
                params.spawn.contains(f.position),
                "seed {seed}: frog {} at {:?} left the spawn rect",
                f.id,
                f.position
            );
        }
    }
}

#[test]
fn spacing_and_reserved_rect_hold_with_a_roomy_budget() {
    // With a modest spacing and a large retry budget the degraded fallback
    // cannot realistically fire, so the hard constraints must all hold.
    let params = LayoutParams {
        min_spacing: 5.0,
        max_attempts: 10_000,
        ..LayoutParams::default()
    };
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let frogs = place_frogs(&mut rng, &default_config(), &params);
        for f in &frogs {
            assert!(
                !params.reserved.contains(f.position),
                "seed {seed}: frog {} landed in the reserved region",
                f.id
            );
        }
        for i in 0..frogs.len() {
            for j in i + 1..frogs.len() {
                let d = frogs[i].position.distance(frogs[j].position);
                assert!(
                    d >= params.min_spacing,
                    "seed {seed}: frogs {i} and {j} only {d} apart"
                );
            }
        }
    }
}

#[test]
fn impossible_spacing_still_terminates_with_a_full_roster() {
    // Spacing wider than the board forces the fallback for every frog after
    // the first; the generator must still return a full roster.
    let params = LayoutParams {
        min_spacing: 1000.0,
        max_attempts: 5,
        ..LayoutParams::default()
    };
    let mut rng = StdRng::seed_from_u64(7);
    let frogs = place_frogs(&mut rng, &default_config(), &params);
    let total = frogs.len() as u32;
    assert!((DECOY_COUNT_MIN + 1..=DECOY_COUNT_MAX + 1).contains(&total));
    assert_eq!(frogs.iter().filter(|f| f.is_target).count(), 1);
}

#[test]
fn seeded_generation_is_deterministic() {
    let config = default_config();
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    let left = place_frogs(&mut a, &config, &LayoutParams::default());
    let right = place_frogs(&mut b, &config, &LayoutParams::default());
    assert_eq!(left.len(), right.len());
    for (l, r) in left.iter().zip(right.iter()) {
        assert_eq!(l.position, r.position);
        assert_eq!(l.kind, r.kind);
        assert_eq!(l.is_target, r.is_target);
    }
}
