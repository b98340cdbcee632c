//! The render-loop context: all mutable animation state in one place.

use crate::audio::{trigger_slot, Playback, Spectrum};
use crate::chain::ChainNetwork;
use crate::constants::{BACKGROUND, BEAD_WIDTH, CHAIN_GAP, DEFAULT_FRAME_RATE, WHEEL_RADIUS};
use crate::energy::EnergySample;
use crate::input::{hit_test, hot_zones, HotZone};
use crate::layout::{validate_layout, LayoutError, WheelSpec, WHEELS};
use crate::paint::Painter;
use crate::state::{FramePacer, RenderLoop};
use crate::viewport::Viewport;
use crate::wheel::Wheel;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SketchParams {
    pub frame_rate: f32,
    /// Seed for chain jitter, spin directions and per-frame shimmer.
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SketchParams {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            seed: None,
        }
    }
}

pub struct Sketch {
    pub wheels: Vec<Wheel>,
    pub chains: ChainNetwork,
    pub zones: Vec<HotZone>,
    pub viewport: Viewport,
    pub render_loop: RenderLoop,
    pub pacer: FramePacer,
    rng: StdRng,
}

impl Sketch {
    pub fn new(params: SketchParams) -> Result<Self, LayoutError> {
        Self::with_layout(&WHEELS, params)
    }

    pub fn with_layout(specs: &[WheelSpec], params: SketchParams) -> Result<Self, LayoutError> {
        validate_layout(specs)?;
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let wheels: Vec<Wheel> = specs
            .iter()
            .map(|s| Wheel::from_spec(s, &mut rng))
            .collect();
        let chains = ChainNetwork::generate(
            wheels.iter().map(|w| w.center),
            WHEEL_RADIUS + CHAIN_GAP,
            BEAD_WIDTH,
            &mut rng,
        );
        let zones = hot_zones(&wheels);
        log::debug!(
            "[sketch] {} wheels, {} hot-zones, seed {:?}",
            wheels.len(),
            zones.len(),
            params.seed
        );
        Ok(Self {
            wheels,
            chains,
            zones,
            viewport: Viewport::default(),
            render_loop: RenderLoop::new(),
            pacer: FramePacer::new(params.frame_rate),
            rng,
        })
    }

    /// Refit the design canvas to a new window size and redraw once if idle.
    pub fn resize(&mut self, window: Vec2) {
        self.viewport = Viewport::fit(window);
        self.render_loop.request_redraw();
    }

    /// Handle a press in screen space. On a hot-zone hit the slot's sound is
    /// triggered and the loop becomes active. Returns the slot hit.
    pub fn pointer_pressed<A: Playback + ?Sized>(
        &mut self,
        screen: Vec2,
        audio: &mut A,
    ) -> Option<usize> {
        let slot = hit_test(&self.zones, &self.viewport, screen)?;
        trigger_slot(audio, slot);
        self.render_loop.activate();
        Some(slot)
    }

    /// Host callback entry point. Draws a frame when the loop wants one and
    /// the pacer allows it; returns whether the host should call again.
    pub fn tick<P, A>(&mut self, now: Duration, painter: &mut P, audio: &mut A) -> bool
    where
        P: Painter,
        A: Playback + Spectrum + ?Sized,
    {
        if !self.render_loop.should_draw() {
            return false;
        }
        if !self.pacer.ready(now) {
            return true;
        }
        self.frame(painter, audio);
        self.render_loop.frame_drawn()
    }

    /// Draw one frame unconditionally.
    pub fn frame<P, A>(&mut self, painter: &mut P, audio: &mut A)
    where
        P: Painter,
        A: Playback + Spectrum + ?Sized,
    {
        painter.clear(BACKGROUND);
        audio.analyze();

        let mut p = painter.scoped();
        p.translate(self.viewport.offset);
        p.scale(self.viewport.scale);

        let sample = EnergySample::read(&*audio);
        for wheel in &mut self.wheels {
            wheel.display(&mut *p, &sample, &*audio, &mut self.rng);
        }
        self.chains.update_and_draw(&mut *p, sample.bead_offset());
    }
}
