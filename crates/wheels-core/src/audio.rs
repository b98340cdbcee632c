//! Audio collaborator contract.
//!
//! The core never touches an audio API. A front-end owns the sound slots and
//! the analyser and exposes them through these two traits.

/// Per-slot playback control.
pub trait Playback {
    fn is_playing(&self, slot: usize) -> bool;
    /// One-shot playback from the start; restarts a slot that is already playing.
    fn play(&mut self, slot: usize);
    /// Looping playback until [`Playback::stop`].
    fn start_loop(&mut self, slot: usize);
    fn stop(&mut self, slot: usize);
}

/// Shared spectral analyser attached to the mixed output.
pub trait Spectrum {
    /// Capture the current spectrum. Called once per frame before any reads.
    fn analyze(&mut self);
    /// Mean bin magnitude (0..255) over the band `[low_hz, high_hz]`.
    fn energy_in_band(&self, low_hz: f32, high_hz: f32) -> f32;
}

/// How a hot-zone press drives its sound slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Start looping if stopped, stop if playing.
    Toggle,
    /// Play once from the start.
    OneShot,
}

pub const SLOT_TRIGGERS: [Trigger; crate::constants::SOUND_COUNT] = [
    Trigger::Toggle,
    Trigger::Toggle,
    Trigger::OneShot,
    Trigger::Toggle,
    Trigger::OneShot,
];

/// Apply the slot's trigger kind to `audio`.
pub fn trigger_slot<A: Playback + ?Sized>(audio: &mut A, slot: usize) {
    match SLOT_TRIGGERS.get(slot) {
        Some(Trigger::Toggle) => {
            if audio.is_playing(slot) {
                log::info!("[sound] stop slot {}", slot);
                audio.stop(slot);
            } else {
                log::info!("[sound] loop slot {}", slot);
                audio.start_loop(slot);
            }
        }
        Some(Trigger::OneShot) => {
            log::info!("[sound] play slot {}", slot);
            audio.play(slot);
        }
        None => log::warn!("[sound] no trigger for slot {}", slot),
    }
}
