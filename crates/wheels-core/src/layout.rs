//! The fixed arrangement of the seventeen wheel motifs.
//!
//! Positions are in design-canvas units; several wheels sit partly off the
//! 800×800 square on purpose so the pattern bleeds past the edges.

use crate::color::Rgba;
use crate::constants::SOUND_COUNT;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariantCircle {
    /// Single wavy outline.
    A,
    /// Three jittered outlines.
    B,
    /// Dashed concentric rings.
    C,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingStyle {
    /// Six concentric dashed rings in the palette's stroke colour.
    Dashed,
    /// One dense wavy ring in red.
    StrongWavy,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub bg: Rgba,
    pub stroke: Rgba,
    pub center: Rgba,
    pub dot1: Rgba,
    pub dot2: Rgba,
    pub dot3: Rgba,
    pub dot4: Rgba,
    pub variant: Rgba,
}

/// How a wheel animates with the music.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Spin with overall energy; direction is picked at setup.
    Rotate,
    /// Pulse in size while the given sound slot plays.
    Scale { sound: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSpec {
    pub center: Vec2,
    pub ring: RingStyle,
    pub variant: VariantCircle,
    /// Base angle of the curved accent line, if the wheel has one.
    pub accent: Option<f32>,
    pub motion: Motion,
    pub palette: Palette,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("wheel {wheel} is bound to sound slot {sound}, but only {SOUND_COUNT} slots exist")]
    InvalidSound { wheel: usize, sound: usize },
    #[error("sound slot {sound} is bound to more than one wheel")]
    DuplicateSound { sound: usize },
}

/// Check every `Scale` wheel names a distinct, existing sound slot.
pub fn validate_layout(specs: &[WheelSpec]) -> Result<(), LayoutError> {
    let mut seen = [false; SOUND_COUNT];
    for (i, spec) in specs.iter().enumerate() {
        if let Motion::Scale { sound } = spec.motion {
            let slot = seen
                .get_mut(sound)
                .ok_or(LayoutError::InvalidSound { wheel: i, sound })?;
            if *slot {
                return Err(LayoutError::DuplicateSound { sound });
            }
            *slot = true;
        }
    }
    Ok(())
}

const fn c(r: u8, g: u8, b: u8) -> Rgba {
    Rgba::rgb(r, g, b)
}

// Dot colours shared by most wheels.
const DOT1: Rgba = c(184, 55, 36);
const DOT2: Rgba = c(38, 84, 42);
const DOT3: Rgba = c(0, 0, 0);
const DOT4: Rgba = c(205, 225, 239);

const fn wheel(
    x: f32,
    y: f32,
    ring: RingStyle,
    variant: VariantCircle,
    accent: Option<f32>,
    motion: Motion,
    palette: Palette,
) -> WheelSpec {
    WheelSpec {
        center: Vec2::new(x, y),
        ring,
        variant,
        accent,
        motion,
        palette,
    }
}

#[allow(clippy::too_many_arguments)]
const fn pal(
    bg: Rgba,
    stroke: Rgba,
    center: Rgba,
    dot1: Rgba,
    dot2: Rgba,
    dot3: Rgba,
    dot4: Rgba,
    variant: Rgba,
) -> Palette {
    Palette {
        bg,
        stroke,
        center,
        dot1,
        dot2,
        dot3,
        dot4,
        variant,
    }
}

use Motion::{Rotate, Scale};
use RingStyle::{Dashed, StrongWavy};
use VariantCircle::{A, B, C};

pub const WHEELS: [WheelSpec; 17] = [
    wheel(
        113.0,
        104.0,
        Dashed,
        B,
        Some(FRAC_PI_2),
        Rotate,
        pal(
            c(205, 225, 239),
            c(10, 10, 104),
            c(155, 78, 148),
            DOT1,
            DOT2,
            DOT3,
            DOT4,
            c(41, 92, 49),
        ),
    ),
    wheel(
        346.0,
        42.0,
        StrongWavy,
        C,
        None,
        Rotate,
        pal(
            c(242, 181, 64),
            c(255, 25, 25),
            c(230, 97, 47),
            c(165, 162, 167),
            c(0, 0, 0),
            c(69, 137, 68),
            c(165, 162, 167),
            c(200, 90, 163),
        ),
    ),
    wheel(
        589.0,
        -13.0,
        Dashed,
        B,
        Some(FRAC_PI_4),
        Rotate,
        pal(
            c(243, 240, 236),
            c(218, 53, 35),
            c(191, 94, 176),
            c(192, 47, 42),
            c(52, 92, 68),
            DOT3,
            DOT4,
            c(199, 98, 180),
        ),
    ),
    wheel(
        30.0,
        328.0,
        Dashed,
        C,
        None,
        Rotate,
        pal(
            c(242, 181, 64),
            c(39, 82, 145),
            c(229, 84, 67),
            c(103, 104, 85),
            c(19, 1, 0),
            c(225, 90, 82),
            c(178, 184, 198),
            c(204, 86, 139),
        ),
    ),
    wheel(
        271.0,
        287.0,
        Dashed,
        B,
        Some(-FRAC_PI_4),
        Scale { sound: 0 },
        pal(
            c(225, 249, 247),
            c(63, 139, 59),
            c(204, 84, 160),
            c(74, 73, 54),
            c(199, 207, 200),
            DOT3,
            c(68, 140, 59),
            c(230, 87, 75),
        ),
    ),
    wheel(
        508.0,
        215.0,
        Dashed,
        B,
        None,
        Scale { sound: 1 },
        pal(
            c(238, 181, 76),
            c(196, 150, 214),
            c(182, 76, 160),
            DOT1,
            DOT2,
            DOT3,
            DOT4,
            c(119, 175, 215),
        ),
    ),
    wheel(
        758.0,
        162.0,
        Dashed,
        C,
        None,
        Rotate,
        pal(
            c(242, 181, 64),
            c(33, 62, 107),
            c(169, 74, 146),
            c(37, 6, 8),
            c(70, 67, 49),
            DOT3,
            c(225, 70, 54),
            c(238, 228, 243),
        ),
    ),
    wheel(
        -48.0,
        556.0,
        Dashed,
        B,
        Some(-FRAC_PI_4),
        Rotate,
        pal(
            c(215, 252, 254),
            c(66, 146, 149),
            c(188, 71, 166),
            DOT1,
            DOT2,
            DOT3,
            DOT4,
            c(188, 71, 166),
        ),
    ),
    wheel(
        193.0,
        509.5,
        StrongWavy,
        C,
        None,
        Scale { sound: 2 },
        pal(
            c(242, 181, 64),
            c(10, 10, 104),
            c(226, 99, 176),
            DOT1,
            DOT2,
            DOT3,
            DOT4,
            c(223, 52, 42),
        ),
    ),
    wheel(
        448.0,
        445.0,
        Dashed,
        A,
        Some(0.0),
        Scale { sound: 3 },
        pal(
            c(247, 236, 238),
            c(215, 65, 62),
            c(224, 111, 174),
            DOT1,
            DOT2,
            DOT3,
            DOT4,
            c(226, 92, 72),
        ),
    ),
    wheel(
        686.0,
        390.0,
        Dashed,
        B,
        Some(-FRAC_PI_4),
        Scale { sound: 4 },
        pal(
            c(240, 250, 248),
            c(236, 148, 64),
            c(155, 78, 148),
            DOT1,
            DOT2,
            DOT3,
            DOT4,
            c(41, 92, 49),
        ),
    ),
    wheel(
        127.0,
        739.5,
        Dashed,
        B,
        Some(FRAC_PI_4),
        Rotate,
        pal(
            c(251, 235, 241),
            c(225, 55, 41),
            c(185, 89, 182),
            c(71, 84, 63),
            DOT2,
            DOT3,
            DOT4,
            c(132, 177, 224),
        ),
    ),
    wheel(
        372.0,
        675.5,
        Dashed,
        B,
        None,
        Rotate,
        pal(
            c(242, 194, 93),
            c(184, 49, 106),
            c(226, 111, 195),
            c(217, 203, 101),
            c(89, 91, 78),
            c(213, 48, 39),
            DOT4,
            c(226, 111, 195),
        ),
    ),
    wheel(
        611.0,
        625.5,
        Dashed,
        B,
        None,
        Rotate,
        pal(
            c(242, 181, 64),
            c(49, 105, 169),
            c(230, 107, 190),
            c(84, 77, 64),
            DOT2,
            c(216, 50, 38),
            DOT4,
            c(227, 88, 57),
        ),
    ),
    wheel(
        845.0,
        570.0,
        StrongWavy,
        C,
        None,
        Rotate,
        pal(
            c(242, 181, 64),
            c(10, 10, 104),
            c(155, 78, 148),
            DOT1,
            DOT2,
            DOT3,
            DOT4,
            c(41, 92, 49),
        ),
    ),
    wheel(
        532.0,
        859.0,
        Dashed,
        B,
        None,
        Rotate,
        pal(
            c(252, 240, 237),
            c(229, 70, 54),
            c(155, 78, 148),
            DOT1,
            DOT2,
            DOT3,
            DOT4,
            c(41, 92, 49),
        ),
    ),
    wheel(
        768.0,
        813.0,
        Dashed,
        B,
        None,
        Rotate,
        pal(
            c(252, 240, 237),
            c(112, 192, 120),
            c(221, 129, 210),
            DOT1,
            DOT2,
            DOT3,
            DOT4,
            c(41, 92, 49),
        ),
    ),
];
