//! Audio-energy sampling and the mapping from energy to animation offsets.

use crate::audio::{Playback, Spectrum};
use crate::constants::{BEAD_OFFSET_MAX, ENERGY_BAND_HIGH_HZ, ENERGY_BAND_LOW_HZ, SPECIAL_SOUND};

/// Linear range map without clamping: `value` in `[in_lo, in_hi]` maps to
/// `[out_lo, out_hi]`, values outside extrapolate.
#[inline]
pub fn map_range(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    (value - in_lo) / (in_hi - in_lo) * (out_hi - out_lo) + out_lo
}

/// Average of byte-magnitude analyser bins covering `[low_hz, high_hz]`.
///
/// Bin indices are `round(f / nyquist * bins.len())` for both edges and the
/// window is inclusive. Edges are swapped if given in reverse order and the
/// upper index is clamped to the last bin.
pub fn band_energy(bins: &[u8], sample_rate: f32, low_hz: f32, high_hz: f32) -> f32 {
    if bins.is_empty() || sample_rate <= 0.0 {
        return 0.0;
    }
    let (lo, hi) = if low_hz > high_hz {
        (high_hz, low_hz)
    } else {
        (low_hz, high_hz)
    };
    let nyquist = sample_rate / 2.0;
    let n = bins.len();
    let lo_i = ((lo / nyquist) * n as f32).round().max(0.0) as usize;
    let hi_i = (((hi / nyquist) * n as f32).round().max(0.0) as usize).min(n - 1);
    if lo_i > hi_i {
        return 0.0;
    }
    let window = &bins[lo_i..=hi_i];
    let total: u32 = window.iter().map(|&b| b as u32).sum();
    total as f32 / window.len() as f32
}

/// Input energy range used to derive every offset for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyMapping {
    pub input_low: f32,
    pub input_high: f32,
    /// Bead offset is clamped to ±BEAD_OFFSET_MAX only in the narrow mapping.
    pub clamp_beads: bool,
}

impl EnergyMapping {
    pub const DEFAULT: EnergyMapping = EnergyMapping {
        input_low: 200.0,
        input_high: 250.0,
        clamp_beads: false,
    };
    // Active while SPECIAL_SOUND plays.
    pub const NARROW: EnergyMapping = EnergyMapping {
        input_low: 230.0,
        input_high: 240.0,
        clamp_beads: true,
    };

    pub fn select(special_playing: bool) -> Self {
        if special_playing {
            Self::NARROW
        } else {
            Self::DEFAULT
        }
    }

    pub fn speed_offset(&self, energy: f32) -> f32 {
        map_range(energy, self.input_low, self.input_high, 0.0, 0.05)
    }

    pub fn scale_offset(&self, energy: f32) -> f32 {
        map_range(energy, self.input_low, self.input_high, -0.1, 0.1)
    }

    pub fn bead_offset(&self, energy: f32) -> f32 {
        let v = map_range(energy, self.input_low, self.input_high, 0.0, BEAD_OFFSET_MAX);
        if self.clamp_beads {
            v.clamp(-BEAD_OFFSET_MAX, BEAD_OFFSET_MAX)
        } else {
            v
        }
    }
}

/// One frame's energy reading together with its mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergySample {
    pub energy: f32,
    pub mapping: EnergyMapping,
}

impl EnergySample {
    /// Read the low band from `audio` after it has analysed the frame.
    pub fn read<A: Playback + Spectrum + ?Sized>(audio: &A) -> Self {
        let energy = audio.energy_in_band(ENERGY_BAND_LOW_HZ, ENERGY_BAND_HIGH_HZ);
        Self {
            energy,
            mapping: EnergyMapping::select(audio.is_playing(SPECIAL_SOUND)),
        }
    }

    pub fn speed_offset(&self) -> f32 {
        self.mapping.speed_offset(self.energy)
    }

    pub fn scale_offset(&self) -> f32 {
        self.mapping.scale_offset(self.energy)
    }

    pub fn bead_offset(&self) -> f32 {
        self.mapping.bead_offset(self.energy)
    }
}
