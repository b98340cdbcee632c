// In-memory stand-in for the browser audio deck.
#![allow(dead_code)]

use wheels_core::{Playback, Spectrum, SOUND_COUNT};

#[derive(Default, Debug)]
pub struct FakeDeck {
    pub playing: [bool; SOUND_COUNT],
    pub looping: [bool; SOUND_COUNT],
    pub plays: [u32; SOUND_COUNT],
    pub energy: f32,
    pub analyzed: u32,
}

impl FakeDeck {
    pub fn with_energy(energy: f32) -> Self {
        Self {
            energy,
            ..Self::default()
        }
    }
}

impl Playback for FakeDeck {
    fn is_playing(&self, slot: usize) -> bool {
        self.playing[slot]
    }

    fn play(&mut self, slot: usize) {
        self.playing[slot] = true;
        self.looping[slot] = false;
        self.plays[slot] += 1;
    }

    fn start_loop(&mut self, slot: usize) {
        self.playing[slot] = true;
        self.looping[slot] = true;
    }

    fn stop(&mut self, slot: usize) {
        self.playing[slot] = false;
        self.looping[slot] = false;
    }
}

impl Spectrum for FakeDeck {
    fn analyze(&mut self) {
        self.analyzed += 1;
    }

    fn energy_in_band(&self, _low_hz: f32, _high_hz: f32) -> f32 {
        self.energy
    }
}
