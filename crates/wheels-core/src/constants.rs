use crate::color::Rgba;

// Shared layout/animation tuning constants used by the core and front-ends.

// Design canvas
pub const DESIGN_SIZE: f32 = 800.0; // all layout data is authored in this square

// Wheels
pub const WHEEL_RADIUS: f32 = 115.0;
// motif is drawn in a unit space this many units across per radius
pub const WHEEL_UNITS: f32 = 22.0;

// Chains
pub const BEAD_WIDTH: f32 = 20.0;
pub const CHAIN_GAP: f32 = 10.0; // distance from wheel rim to the chain ring
pub const RING_JITTER: f32 = 5.0; // max radial offset of a bead from the ring
pub const MERGE_DISTANCE: f32 = 20.0; // beads closer than this snap together
pub const RIVET_EVERY: usize = 6; // every sixth segment is a rivet bead
pub const BEAD_MAX_HEIGHT: f32 = 12.0;
pub const RIVET_DOT_SIZE: f32 = 3.0;
pub const BEAD_STROKE_WIDTH: f32 = 1.5;
pub const BEAD_OFFSET_MAX: f32 = 5.0; // energy-driven bead height offset at full input

// Audio energy
pub const SOUND_COUNT: usize = 5;
pub const SPECIAL_SOUND: usize = 3; // narrows the energy input range while playing
pub const ENERGY_BAND_LOW_HZ: f32 = 20.0;
pub const ENERGY_BAND_HIGH_HZ: f32 = 200.0;

// Frame pacing
pub const DEFAULT_FRAME_RATE: f32 = 30.0;

// Colours
pub const BACKGROUND: Rgba = Rgba::rgb(37, 84, 125);
pub const CHAIN_COLORS: [Rgba; 4] = [
    Rgba::rgb(252, 11, 13),  // red
    Rgba::rgb(254, 155, 14), // orange
    Rgba::rgb(99, 153, 35),  // green
    Rgba::rgb(93, 192, 213), // cyan
];
pub const BEAD_OUTLINE: Rgba = Rgba::new(255, 255, 255, 180);
pub const ACCENT_COLOR: Rgba = Rgba::rgb(255, 70, 130);
pub const STRONG_RING_COLOR: Rgba = Rgba::rgb(223, 50, 34);
pub const VARIANT_A_COLOR: Rgba = Rgba::rgb(255, 140, 0);
