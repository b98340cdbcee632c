use crate::audio::Playback;
use crate::color::Rgba;
use crate::constants::{WHEEL_RADIUS, WHEEL_UNITS};
use crate::energy::EnergySample;
use crate::layout::{Motion, Palette, RingStyle, VariantCircle, WheelSpec};
use crate::motifs;
use crate::paint::Painter;
use glam::Vec2;
use rand::Rng;

/// Resolved per-wheel animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Animation {
    /// `direction` is +1 or -1.
    Rotate { direction: f32 },
    Scale { sound: usize },
}

#[derive(Clone, Debug)]
pub struct Wheel {
    pub center: Vec2,
    pub radius: f32,
    /// Current rotation phase in radians.
    pub rotation: f32,
    pub ring: RingStyle,
    pub variant: VariantCircle,
    pub accent: Option<f32>,
    pub animation: Animation,
    pub palette: Palette,
}

impl Wheel {
    /// Build a wheel from its layout entry, picking a random spin direction
    /// for rotating wheels.
    pub fn from_spec<R: Rng + ?Sized>(spec: &WheelSpec, rng: &mut R) -> Self {
        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        Self::with_direction(spec, direction)
    }

    pub fn with_direction(spec: &WheelSpec, direction: f32) -> Self {
        let animation = match spec.motion {
            Motion::Rotate => Animation::Rotate { direction },
            Motion::Scale { sound } => Animation::Scale { sound },
        };
        Self {
            center: spec.center,
            radius: WHEEL_RADIUS,
            rotation: 0.0,
            ring: spec.ring,
            variant: spec.variant,
            accent: spec.accent,
            animation,
            palette: spec.palette,
        }
    }

    /// Step the animation for one frame and return the uniform scale to draw at.
    ///
    /// Rotating wheels advance their phase; scaling wheels get a transient
    /// offset only while their own sound plays. Nothing about scale is stored.
    pub fn animate<A: Playback + ?Sized>(&mut self, sample: &EnergySample, audio: &A) -> f32 {
        let mut scale_offset = 0.0;
        match self.animation {
            Animation::Rotate { direction } => {
                self.rotation += direction * sample.speed_offset();
            }
            Animation::Scale { sound } => {
                if audio.is_playing(sound) {
                    scale_offset = sample.scale_offset();
                }
            }
        }
        self.radius / WHEEL_UNITS + scale_offset
    }

    /// Draw the wheel at its position and advance its animation.
    ///
    /// The rotation applied is the phase from before this frame's advance.
    pub fn display<P, A, R>(
        &mut self,
        painter: &mut P,
        sample: &EnergySample,
        audio: &A,
        rng: &mut R,
    ) where
        P: Painter,
        A: Playback + ?Sized,
        R: Rng + ?Sized,
    {
        let mut p = painter.scoped();
        p.translate(self.center);
        p.rotate(self.rotation);
        let scale = self.animate(sample, audio);
        p.scale(scale);
        self.draw_core(&mut *p, rng);
    }

    /// Draw the motif in unit space: radius 20 units at the outer edge.
    pub fn draw_core<P: Painter, R: Rng + ?Sized>(&self, painter: &mut P, rng: &mut R) {
        let pal = &self.palette;
        {
            let mut p = painter.scoped();
            p.set_stroke(None);
            p.set_fill(Some(pal.bg));
            p.circle(Vec2::ZERO, 40.0);
        }

        match self.ring {
            RingStyle::StrongWavy => motifs::strong_wavy_ring(painter, 10.0, 20.0),
            RingStyle::Dashed => motifs::dashed_rings(painter, pal.stroke),
        }

        {
            let mut p = painter.scoped();
            p.set_stroke(Some(pal.center));
            p.set_line_width(1.0);
            p.set_fill(Some(pal.center.with_alpha(204)));
            p.circle(Vec2::ZERO, 20.0);
        }

        motifs::variant_circle(painter, self.variant, pal.variant, rng);

        for (d, col) in self.dots() {
            let mut p = painter.scoped();
            p.set_stroke(None);
            p.set_fill(Some(col));
            p.circle(Vec2::ZERO, d);
        }

        if let Some(angle) = self.accent {
            motifs::curved_accent(painter, angle, rng);
        }
    }

    /// Nested centre dots, largest first.
    pub fn dots(&self) -> [(f32, Rgba); 5] {
        let pal = &self.palette;
        [
            (11.0, pal.dot1),
            (8.0, pal.center),
            (6.0, pal.dot2),
            (4.0, pal.dot3),
            (2.0, pal.dot4),
        ]
    }
}
