// What each variant circle puts on the painter.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;
use wheels_core::motifs::{variant_circle, VARIANT_C_DASH};
use wheels_core::*;

fn draw_variant(variant: VariantCircle) -> RecordingPainter {
    let mut rng = StdRng::seed_from_u64(5);
    let mut painter = RecordingPainter::new();
    variant_circle(&mut painter, variant, Rgba::rgb(41, 92, 49), &mut rng);
    assert_eq!(painter.depth(), 0);
    painter
}

fn polylines(painter: &RecordingPainter) -> Vec<(&[Vec2], bool)> {
    painter
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCmd::Polyline { points, close } => Some((points.as_slice(), *close)),
            _ => None,
        })
        .collect()
}

#[test]
fn variant_a_is_one_fine_wavy_outline() {
    let painter = draw_variant(VariantCircle::A);
    let lines = polylines(&painter);
    assert_eq!(lines.len(), 1);
    let (points, close) = lines[0];
    assert!(close);
    // sampled every 0.02 rad through one full turn
    let expected = ((TAU + 0.02) / 0.02) as usize;
    assert!(
        (expected..=expected + 1).contains(&points.len()),
        "{} points",
        points.len()
    );
    let step = points[1].y.atan2(points[1].x);
    assert!((step - 0.02).abs() < 1e-4, "step {step}");
    assert!(painter.commands.contains(&DrawCmd::Stroke(Some(VARIANT_A_COLOR))));
    assert_eq!(painter.ellipses().count(), 0);
}

#[test]
fn variant_b_is_three_closed_outlines() {
    let painter = draw_variant(VariantCircle::B);
    let lines = polylines(&painter);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|(_, close)| *close));
    assert_eq!(painter.ellipses().count(), 0);
    assert!(painter
        .commands
        .contains(&DrawCmd::Stroke(Some(Rgba::new(41, 92, 49, 200)))));
}

#[test]
fn variant_c_is_three_dashed_circles() {
    let painter = draw_variant(VariantCircle::C);
    assert!(painter
        .commands
        .contains(&DrawCmd::LineDash(VARIANT_C_DASH.to_vec())));
    assert_eq!(VARIANT_C_DASH, [0.3, 1.8]);

    let diameters: Vec<(f32, f32)> = painter.ellipses().map(|(_, w, h)| (w, h)).collect();
    assert_eq!(diameters.len(), 3);
    for ((w, h), expected) in diameters.iter().zip([10.8_f32, 14.4, 18.0]) {
        assert!((w - expected).abs() < 1e-4, "{w} vs {expected}");
        assert_eq!(w, h);
    }
    assert!(polylines(&painter).is_empty());
}
