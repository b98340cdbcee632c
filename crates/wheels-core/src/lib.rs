//! Platform-independent core of the wheels sketch.
//!
//! Everything here is pure Rust with no browser dependency: the layout table,
//! wheel and chain models, the audio-energy mapping, the viewport transform
//! and the render-loop state. Front-ends supply a [`Painter`] for drawing and
//! a [`Playback`] + [`Spectrum`] pair for audio.

pub mod audio;
pub mod chain;
pub mod color;
pub mod constants;
pub mod energy;
pub mod input;
pub mod layout;
pub mod motifs;
pub mod paint;
pub mod sketch;
pub mod state;
pub mod viewport;
pub mod wheel;

pub use audio::*;
pub use chain::*;
pub use color::*;
pub use constants::*;
pub use energy::*;
pub use input::*;
pub use layout::*;
pub use paint::*;
pub use sketch::*;
pub use state::*;
pub use viewport::*;
pub use wheel::*;
