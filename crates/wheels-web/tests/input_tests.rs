// Host-side tests for pure input functions and web constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::*;
use input::client_to_backing;
use glam::Vec2;

#[test]
fn client_maps_through_device_pixel_ratio() {
    // 400x300 CSS box rendered at 2x
    let p = client_to_backing(
        Vec2::new(110.0, 70.0),
        Vec2::new(10.0, 20.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(p, Vec2::new(200.0, 100.0));
}

#[test]
fn degenerate_rect_falls_back_to_offset() {
    let p = client_to_backing(
        Vec2::new(5.0, 6.0),
        Vec2::new(1.0, 1.0),
        Vec2::ZERO,
        Vec2::new(800.0, 600.0),
    );
    assert_eq!(p, Vec2::new(4.0, 5.0));
}

#[test]
fn asset_urls_live_under_asset_dir() {
    for file in SOUND_FILES {
        let url = asset_url(file);
        assert!(url.starts_with(ASSET_DIR));
        assert!(url.ends_with(file));
    }
    assert_eq!(SOUND_FILES.len(), wheels_core::constants::SOUND_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_size_is_a_power_of_two() {
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&ANALYSER_FFT_SIZE));
    assert!((0.0..1.0).contains(&ANALYSER_SMOOTHING));
}
