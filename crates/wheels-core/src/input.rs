//! Pointer hot-zones over the sound-driving wheels.

use crate::viewport::Viewport;
use crate::wheel::{Animation, Wheel};
use glam::Vec2;

/// Circular button bound to a sound slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HotZone {
    pub slot: usize,
    pub center: Vec2,
    pub radius: f32,
}

impl HotZone {
    #[inline]
    pub fn contains(&self, design: Vec2) -> bool {
        self.center.distance(design) < self.radius
    }
}

/// One hot-zone per `Scale` wheel, at the wheel's centre, ordered by slot.
pub fn hot_zones(wheels: &[Wheel]) -> Vec<HotZone> {
    let mut zones: Vec<HotZone> = wheels
        .iter()
        .filter_map(|w| match w.animation {
            Animation::Scale { sound } => Some(HotZone {
                slot: sound,
                center: w.center,
                radius: w.radius,
            }),
            Animation::Rotate { .. } => None,
        })
        .collect();
    zones.sort_by_key(|z| z.slot);
    zones
}

/// First zone (in slot order) under a screen-space press.
pub fn hit_test(zones: &[HotZone], viewport: &Viewport, screen: Vec2) -> Option<usize> {
    let design = viewport.to_design(screen);
    zones.iter().find(|z| z.contains(design)).map(|z| z.slot)
}
