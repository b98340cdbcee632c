// Band energy averaging and energy-to-offset mapping.

mod common;

use common::FakeDeck;
use wheels_core::*;

fn ramp_bins() -> Vec<u8> {
    (0..1024).map(|i| if i < 20 { (i * 10) as u8 } else { 0 }).collect()
}

#[test]
fn band_energy_averages_inclusive_window() {
    // nyquist 22050 Hz over 1024 bins: 20 Hz -> bin 1, 200 Hz -> bin 9
    let e = band_energy(&ramp_bins(), 44_100.0, 20.0, 200.0);
    assert!((e - 50.0).abs() < 1e-4, "got {e}");
}

#[test]
fn band_energy_accepts_reversed_edges() {
    let bins = ramp_bins();
    assert_eq!(
        band_energy(&bins, 44_100.0, 200.0, 20.0),
        band_energy(&bins, 44_100.0, 20.0, 200.0)
    );
}

#[test]
fn band_energy_handles_degenerate_input() {
    assert_eq!(band_energy(&[], 44_100.0, 20.0, 200.0), 0.0);
    assert_eq!(band_energy(&[255; 8], 0.0, 20.0, 200.0), 0.0);
    // band above nyquist clamps to the last bin
    assert_eq!(band_energy(&[7; 16], 1_000.0, 400.0, 5_000.0), 7.0);
}

#[test]
fn map_range_extrapolates() {
    assert!((map_range(225.0, 200.0, 250.0, 0.0, 0.05) - 0.025).abs() < 1e-7);
    assert!((map_range(0.0, 200.0, 250.0, 0.0, 0.05) + 0.2).abs() < 1e-6);
    assert!((map_range(300.0, 200.0, 250.0, -0.1, 0.1) - 0.3).abs() < 1e-6);
}

#[test]
fn default_mapping_is_unclamped() {
    let m = EnergyMapping::DEFAULT;
    assert!((m.speed_offset(250.0) - 0.05).abs() < 1e-6);
    assert!((m.scale_offset(200.0) + 0.1).abs() < 1e-6);
    assert!((m.bead_offset(0.0) + 20.0).abs() < 1e-4);
}

#[test]
fn narrow_mapping_clamps_only_beads() {
    let m = EnergyMapping::NARROW;
    assert!((m.speed_offset(240.0) - 0.05).abs() < 1e-6);
    assert!((m.bead_offset(235.0) - 2.5).abs() < 1e-4);
    assert_eq!(m.bead_offset(0.0), -5.0);
    assert_eq!(m.bead_offset(255.0), 5.0);
    // speed and scale still extrapolate
    assert!(m.scale_offset(255.0) > 0.1);
}

#[test]
fn sample_switches_mapping_while_special_sound_plays() {
    let mut deck = FakeDeck::with_energy(235.0);
    let s = EnergySample::read(&deck);
    assert_eq!(s.mapping, EnergyMapping::DEFAULT);
    assert!((s.speed_offset() - 0.035).abs() < 1e-6);

    deck.start_loop(SPECIAL_SOUND);
    let s = EnergySample::read(&deck);
    assert_eq!(s.mapping, EnergyMapping::NARROW);
    assert!((s.speed_offset() - 0.025).abs() < 1e-6);

    deck.start_loop(0);
    deck.stop(SPECIAL_SOUND);
    assert_eq!(EnergySample::read(&deck).mapping, EnergyMapping::DEFAULT);
}
