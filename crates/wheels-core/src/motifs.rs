//! Decorative drawing helpers used inside a wheel's unit space.
//!
//! Every helper opens its own [`StyleScope`](crate::paint::StyleScope), so the
//! caller's fill, stroke, dash and transform are untouched afterwards.

use crate::color::Rgba;
use crate::constants::{ACCENT_COLOR, STRONG_RING_COLOR, VARIANT_A_COLOR};
use crate::layout::VariantCircle;
use crate::paint::Painter;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

pub const DASHED_RING_RADII: [f32; 6] = [11.0, 12.8, 14.6, 16.4, 18.2, 19.6];
pub const RING_DASH: [f32; 2] = [0.3, 2.0];
pub const VARIANT_C_DASH: [f32; 2] = [0.3, 1.8];

/// Parameters for a closed outline whose radius oscillates with angle.
#[derive(Clone, Copy, Debug)]
pub struct Wave {
    pub base_r: f32,
    pub amp: f32,
    pub freq: f32,
    pub step: f32,
}

impl Wave {
    /// Sample points for `a = 0, step, ..` while `a <= TAU + step`.
    pub fn points(&self) -> Vec<Vec2> {
        let mut pts = Vec::with_capacity((TAU / self.step) as usize + 2);
        let mut a = 0.0_f32;
        while a <= TAU + self.step {
            let r = self.base_r + (a * self.freq).sin() * self.amp;
            pts.push(Vec2::new(a.cos() * r, a.sin() * r));
            a += self.step;
        }
        pts
    }
}

pub fn wavy_outline<P: Painter>(painter: &mut P, wave: Wave, color: Rgba, line_width: f32) {
    let mut p = painter.scoped();
    p.set_fill(None);
    p.set_stroke(Some(color));
    p.set_line_width(line_width);
    p.polyline(&wave.points(), true);
}

/// Dense wavy ring between `inner_r` and `outer_r`, 180 samples around.
pub fn strong_wavy_ring<P: Painter>(painter: &mut P, inner_r: f32, outer_r: f32) {
    let wave = Wave {
        base_r: (inner_r + outer_r) / 2.0,
        amp: 5.0,
        freq: 70.0,
        step: TAU / 180.0,
    };
    wavy_outline(painter, wave, STRONG_RING_COLOR, 0.5);
}

pub fn dashed_ring<P: Painter>(painter: &mut P, r: f32, color: Rgba, dash: &[f32], weight: f32) {
    let mut p = painter.dashed(dash);
    p.set_fill(None);
    p.set_stroke(Some(color));
    p.set_line_width(weight + 0.5);
    p.circle(Vec2::ZERO, r * 2.0);
}

pub fn dashed_rings<P: Painter>(painter: &mut P, color: Rgba) {
    for r in DASHED_RING_RADII {
        dashed_ring(painter, r, color, &RING_DASH, 1.0);
    }
}

pub fn variant_circle<P: Painter, R: Rng + ?Sized>(
    painter: &mut P,
    variant: VariantCircle,
    color: Rgba,
    rng: &mut R,
) {
    match variant {
        VariantCircle::A => variant_a(painter),
        VariantCircle::B => variant_b(painter, color, rng),
        VariantCircle::C => variant_c(painter, color),
    }
}

fn variant_a<P: Painter>(painter: &mut P) {
    let wave = Wave {
        base_r: 5.0,
        amp: 4.0,
        freq: 20.0,
        step: 0.02,
    };
    wavy_outline(painter, wave, VARIANT_A_COLOR, 0.5);
}

// Outlines are re-jittered every frame, which gives the B motif its shimmer.
fn variant_b<P: Painter, R: Rng + ?Sized>(painter: &mut P, color: Rgba, rng: &mut R) {
    let mut p = painter.scoped();
    p.set_fill(None);
    p.set_stroke(Some(color.with_alpha(200)));
    p.set_line_width(1.0);
    let mut pts = Vec::with_capacity(64);
    for base_r in [6.0_f32, 8.0, 10.0] {
        let amp = rng.gen_range(1.0_f32..1.1);
        let freq = rng.gen_range(0.0_f32..2.0).floor();
        pts.clear();
        let mut a = 0.0_f32;
        while a <= TAU + 0.05 {
            let rx = base_r + (a * freq + rng.gen_range(-0.1_f32..0.1)).sin() * amp;
            let ry = base_r + (a * freq + rng.gen_range(-0.1_f32..0.1)).sin() * amp;
            pts.push(Vec2::new(a.cos() * rx, a.sin() * ry));
            a += 0.1;
        }
        p.polyline(&pts, true);
    }
}

fn variant_c<P: Painter>(painter: &mut P, color: Rgba) {
    let mut p = painter.dashed(&VARIANT_C_DASH);
    p.set_fill(None);
    p.set_stroke(Some(color.with_alpha(153)));
    p.set_line_width(1.0);
    for r in [6.0_f32, 8.0, 10.0] {
        p.circle(Vec2::ZERO, r * 1.8);
    }
}

/// Short curved stroke from the centre toward `angle`, bent by a random control point.
pub fn curved_accent<P: Painter, R: Rng + ?Sized>(painter: &mut P, angle: f32, rng: &mut R) {
    const LEN: f32 = 25.0;
    let ctrl_angle = angle + rng.gen_range(-PI / 3.0..PI / 3.0);
    let ctrl = Vec2::from_angle(ctrl_angle) * (LEN * 0.5);
    let end = Vec2::from_angle(angle) * LEN;

    let mut p = painter.scoped();
    p.set_stroke(Some(ACCENT_COLOR));
    p.set_line_width(1.0);
    p.set_fill(None);
    p.quadratic(Vec2::ZERO, ctrl, end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{DrawCmd, RecordingPainter};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wave_closes_past_full_turn() {
        let pts = Wave {
            base_r: 5.0,
            amp: 0.0,
            freq: 1.0,
            step: 0.5,
        }
        .points();
        assert!(pts.len() >= (TAU / 0.5) as usize + 1);
        for p in &pts {
            assert!((p.length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn accent_ends_at_fixed_length() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut p = RecordingPainter::new();
        curved_accent(&mut p, 0.0, &mut rng);
        let q = p
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCmd::Quadratic { to, control, .. } => Some((*to, *control)),
                _ => None,
            })
            .expect("quadratic drawn");
        assert!((q.0 - Vec2::new(25.0, 0.0)).length() < 1e-4);
        assert!((q.1.length() - 12.5).abs() < 1e-4);
        assert!(q.1.y.atan2(q.1.x).abs() <= PI / 3.0 + 1e-4);
        assert_eq!(p.depth(), 0);
    }

    #[test]
    fn dashed_rings_draw_six_circles() {
        let mut p = RecordingPainter::new();
        dashed_rings(&mut p, Rgba::BLACK);
        let diameters: Vec<f32> = p.ellipses().map(|(_, w, _)| w).collect();
        assert_eq!(diameters.len(), 6);
        assert!((diameters[0] - 22.0).abs() < 1e-4);
        assert!(p
            .commands
            .iter()
            .any(|c| *c == DrawCmd::LineDash(RING_DASH.to_vec())));
        assert_eq!(p.depth(), 0);
    }
}
