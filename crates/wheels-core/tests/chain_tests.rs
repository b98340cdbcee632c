// Chain generation, merge resolution and bead drawing.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;
use wheels_core::*;

fn chain_of(points: &[(f32, f32, bool)]) -> Chain {
    Chain {
        points: points
            .iter()
            .map(|&(x, y, merged)| BeadPoint {
                pos: Vec2::new(x, y),
                merged,
            })
            .collect(),
    }
}

#[test]
fn ring_has_floor_circumference_over_width_points() {
    let mut rng = StdRng::seed_from_u64(1);
    let chain = generate_ring(Vec2::new(100.0, 100.0), 125.0, 20.0, &mut rng);
    assert_eq!(chain.len(), 39);
    assert_eq!(bead_count(125.0, 20.0), 39);
    assert_eq!(bead_count(10.0, 20.0), 3);
}

#[test]
fn ring_points_jitter_within_five_units() {
    let center = Vec2::new(100.0, 100.0);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let chain = generate_ring(center, 125.0, 20.0, &mut rng);
        for p in &chain.points {
            let r = p.pos.distance(center);
            assert!((r - 125.0).abs() <= 5.0 + 1e-3, "radius {r} out of range");
            assert!(!p.merged);
        }
    }
}

#[test]
fn ring_points_are_equally_spaced_from_angle_zero() {
    let center = Vec2::new(-40.0, 300.0);
    let mut rng = StdRng::seed_from_u64(7);
    let chain = generate_ring(center, 125.0, 20.0, &mut rng);
    let n = chain.len() as f32;
    for (i, p) in chain.points.iter().enumerate() {
        let d = p.pos - center;
        let angle = d.y.atan2(d.x).rem_euclid(TAU);
        let expected = (i as f32 * TAU / n).rem_euclid(TAU);
        let diff = (angle - expected).abs();
        assert!(diff < 1e-3 || (TAU - diff) < 1e-3, "point {i}: {angle} vs {expected}");
    }
}

#[test]
fn merge_takes_first_match_not_nearest() {
    let mut net = ChainNetwork {
        chains: vec![
            chain_of(&[(0.0, 0.0, false), (100.0, 0.0, false)]),
            chain_of(&[(15.0, 0.0, false), (5.0, 0.0, false)]),
        ],
    };
    net.resolve_merges();

    let a = &net.chains[0].points;
    assert_eq!(a[0].pos, Vec2::new(15.0, 0.0));
    assert!(a[0].merged);
    assert_eq!(a[1].pos, Vec2::new(100.0, 0.0));
    assert!(!a[1].merged);

    // The second chain sees the first chain's already-snapped point.
    let b = &net.chains[1].points;
    assert_eq!(b[0].pos, Vec2::new(15.0, 0.0));
    assert!(!b[0].merged);
    assert_eq!(b[1].pos, Vec2::new(15.0, 0.0));
    assert!(!b[1].merged);
}

#[test]
fn merge_ignores_points_at_threshold() {
    let mut net = ChainNetwork {
        chains: vec![
            chain_of(&[(0.0, 0.0, false)]),
            chain_of(&[(20.0, 0.0, false)]),
        ],
    };
    let before = net.chains.clone();
    net.resolve_merges();
    assert_eq!(net.chains, before);
}

#[test]
fn segment_with_both_ends_merged_is_skipped() {
    let net = ChainNetwork {
        chains: vec![chain_of(&[
            (0.0, 0.0, true),
            (10.0, 0.0, true),
            (10.0, 10.0, false),
        ])],
    };
    let indices: Vec<usize> = net.visible_segments().map(|s| s.index).collect();
    assert_eq!(indices, vec![1, 2]);

    let mut painter = RecordingPainter::new();
    net.draw(&mut painter, 0.0);
    // Segment 0 would be a rivet; only the two capsules are drawn.
    assert_eq!(painter.ellipses().count(), 2);
    assert_eq!(painter.depth(), 0);
}

#[test]
fn rivet_every_sixth_segment() {
    for i in 0..30 {
        let expected = if i % 6 == 0 {
            BeadKind::Rivet
        } else {
            BeadKind::Capsule
        };
        assert_eq!(bead_kind(i), expected, "index {i}");
    }
    assert_eq!(capsule_color(1), CHAIN_COLORS[1]);
    assert_eq!(capsule_color(5), CHAIN_COLORS[1]);
}

#[test]
fn rivets_draw_after_all_capsules() {
    let pts: Vec<(f32, f32, bool)> = (0..7)
        .map(|i| {
            let a = i as f32 * TAU / 7.0;
            (a.cos() * 50.0, a.sin() * 50.0, false)
        })
        .collect();
    let net = ChainNetwork {
        chains: vec![chain_of(&pts)],
    };
    let mut painter = RecordingPainter::new();
    net.draw(&mut painter, 0.0);

    let ellipses: Vec<(Vec2, f32, f32)> = painter.ellipses().collect();
    // five capsules, then (rivet, dot) for segments 0 and 6
    assert_eq!(ellipses.len(), 9);
    for (_, w, h) in &ellipses[..5] {
        assert!((*h - (w / 2.0).min(12.0)).abs() < 1e-4);
    }
    assert!((ellipses[5].2 - 12.0).abs() < 1e-4);
    assert_eq!((ellipses[6].1, ellipses[6].2), (3.0, 3.0));
    assert!((ellipses[7].2 - 12.0).abs() < 1e-4);
    assert_eq!((ellipses[8].1, ellipses[8].2), (3.0, 3.0));
}

#[test]
fn bead_offset_widens_capsules() {
    let net = ChainNetwork {
        chains: vec![chain_of(&[(0.0, 0.0, false), (10.0, 0.0, false), (30.0, 0.0, false)])],
    };
    let mut painter = RecordingPainter::new();
    net.draw(&mut painter, 4.0);
    let (_, w, h) = painter.ellipses().next().expect("capsule");
    assert!((w - 20.0).abs() < 1e-4);
    assert!((h - 14.0).abs() < 1e-4);
}

#[test]
fn network_generates_one_chain_per_center() {
    let mut rng = StdRng::seed_from_u64(3);
    let centers = [Vec2::ZERO, Vec2::new(300.0, 0.0), Vec2::new(0.0, 300.0)];
    let net = ChainNetwork::generate(centers, 125.0, 20.0, &mut rng);
    assert_eq!(net.chains.len(), 3);
    assert!(net.chains.iter().all(|c| c.len() == 39));
}
