//! Bead chains: one jittered ring of points around each wheel.
//!
//! Each frame the network first runs a merge pass, where points that come
//! within [`MERGE_DISTANCE`] of a point on another chain snap onto it, and
//! then draws capsules between consecutive points followed by the rivet beads
//! on top.

use crate::color::Rgba;
use crate::constants::{
    BEAD_MAX_HEIGHT, BEAD_OUTLINE, BEAD_STROKE_WIDTH, BEAD_WIDTH, CHAIN_COLORS, MERGE_DISTANCE,
    RIVET_DOT_SIZE, RIVET_EVERY, RING_JITTER,
};
use crate::paint::{Painter, StyleScope};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeadPoint {
    pub pos: Vec2,
    pub merged: bool,
}

impl BeadPoint {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, merged: false }
    }
}

/// Closed loop of bead points; point `i` connects to `i + 1`, the last to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chain {
    pub points: Vec<BeadPoint>,
}

/// Number of beads that fit on a ring: `floor(2π·radius / bead_width)`.
#[inline]
pub fn bead_count(radius: f32, bead_width: f32) -> usize {
    (TAU * radius / bead_width).floor() as usize
}

/// Scatter `bead_count(radius, bead_width)` points around `center` at equal
/// angular steps from angle 0, each at a radius drawn from
/// `[radius - RING_JITTER, radius + RING_JITTER)`.
pub fn generate_ring<R: Rng + ?Sized>(
    center: Vec2,
    radius: f32,
    bead_width: f32,
    rng: &mut R,
) -> Chain {
    let n = bead_count(radius, bead_width);
    let step = TAU / n as f32;
    let mut angle = 0.0_f32;
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let r = rng.gen_range(radius - RING_JITTER..radius + RING_JITTER);
        points.push(BeadPoint::new(center + Vec2::from_angle(angle) * r));
        angle += step;
    }
    Chain { points }
}

impl Chain {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs with their start index, wrapping last to first.
    pub fn segments(&self) -> impl Iterator<Item = (usize, BeadPoint, BeadPoint)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (i, self.points[i], self.points[(i + 1) % n]))
    }
}

/// Style of the bead drawn on segment `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeadKind {
    Capsule,
    Rivet,
}

#[inline]
pub fn bead_kind(index: usize) -> BeadKind {
    if index % RIVET_EVERY == 0 {
        BeadKind::Rivet
    } else {
        BeadKind::Capsule
    }
}

#[inline]
pub fn capsule_color(index: usize) -> Rgba {
    CHAIN_COLORS[index % CHAIN_COLORS.len()]
}

/// Placement of one drawn segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub mid: Vec2,
    pub length: f32,
    pub angle: f32,
}

impl Segment {
    fn between(index: usize, a: Vec2, b: Vec2) -> Self {
        let d = b - a;
        Self {
            index,
            mid: (a + b) / 2.0,
            length: d.length(),
            angle: d.y.atan2(d.x),
        }
    }
}

/// All chains of the sketch, in wheel order.
#[derive(Clone, Debug, Default)]
pub struct ChainNetwork {
    pub chains: Vec<Chain>,
}

impl ChainNetwork {
    /// One ring per centre, all with the same radius and bead width.
    pub fn generate<R: Rng + ?Sized>(
        centers: impl IntoIterator<Item = Vec2>,
        radius: f32,
        bead_width: f32,
        rng: &mut R,
    ) -> Self {
        let chains: Vec<Chain> = centers
            .into_iter()
            .map(|c| generate_ring(c, radius, bead_width, rng))
            .collect();
        log::debug!(
            "[chain] generated {} chains of {} beads",
            chains.len(),
            chains.first().map_or(0, Chain::len)
        );
        Self { chains }
    }

    /// Snap near-touching points between chains.
    ///
    /// For each ordered pair of distinct chains `(j, c)` and each point of `j`,
    /// the first point of `c` in index order closer than [`MERGE_DISTANCE`]
    /// wins: the `j` point moves onto it and takes the negation of its merged
    /// flag. Matching is first-found, not nearest, and later pairs see the
    /// positions written by earlier ones.
    pub fn resolve_merges(&mut self) {
        let n = self.chains.len();
        for j in 0..n {
            for c in 0..n {
                if j == c {
                    continue;
                }
                for i in 0..self.chains[j].points.len() {
                    let here = self.chains[j].points[i].pos;
                    let hit = self.chains[c]
                        .points
                        .iter()
                        .find(|other| here.distance(other.pos) < MERGE_DISTANCE)
                        .copied();
                    if let Some(other) = hit {
                        self.chains[j].points[i] = BeadPoint {
                            pos: other.pos,
                            merged: !other.merged,
                        };
                    }
                }
            }
        }
    }

    /// Segments that will be drawn: all except those with both ends merged.
    pub fn visible_segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.chains.iter().flat_map(|chain| {
            chain
                .segments()
                .filter(|(_, a, b)| !(a.merged && b.merged))
                .map(|(i, a, b)| Segment::between(i, a.pos, b.pos))
        })
    }

    /// Draw every capsule, then every rivet so rivets sit on top.
    pub fn draw<P: Painter>(&self, painter: &mut P, bead_offset: f32) {
        for seg in self.visible_segments() {
            if bead_kind(seg.index) == BeadKind::Capsule {
                draw_capsule(painter, &seg, bead_offset);
            }
        }
        for seg in self.visible_segments() {
            if bead_kind(seg.index) == BeadKind::Rivet {
                draw_rivet(painter, &seg, bead_offset);
            }
        }
    }

    /// Merge pass followed by the draw pass.
    pub fn update_and_draw<P: Painter>(&mut self, painter: &mut P, bead_offset: f32) {
        self.resolve_merges();
        self.draw(painter, bead_offset);
    }
}

fn begin_segment<'a, P: Painter>(painter: &'a mut P, seg: &Segment) -> StyleScope<'a, P> {
    let mut p = painter.scoped();
    p.set_stroke(Some(Rgba::WHITE));
    p.set_line_width(BEAD_STROKE_WIDTH);
    p.translate(seg.mid);
    p.rotate(seg.angle);
    p
}

fn draw_capsule<P: Painter>(painter: &mut P, seg: &Segment, bead_offset: f32) {
    let mut p = begin_segment(painter, seg);
    p.set_stroke(Some(BEAD_OUTLINE));
    p.set_fill(Some(capsule_color(seg.index)));
    let height = (seg.length / 2.0).min(BEAD_MAX_HEIGHT) + bead_offset;
    p.ellipse(Vec2::ZERO, seg.length, height);
}

fn draw_rivet<P: Painter>(painter: &mut P, seg: &Segment, bead_offset: f32) {
    let mut p = begin_segment(painter, seg);
    p.set_fill(Some(Rgba::BLACK));
    let height = (BEAD_WIDTH * 0.75).min(BEAD_MAX_HEIGHT) + bead_offset;
    p.ellipse(Vec2::ZERO, seg.length, height);
    p.set_fill(Some(Rgba::WHITE));
    p.set_stroke(None);
    p.circle(Vec2::ZERO, RIVET_DOT_SIZE);
}
