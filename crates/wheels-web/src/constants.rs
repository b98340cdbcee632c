// Browser-side configuration for the web front-end.

// DOM
pub const CANVAS_ID: &str = "app-canvas";

// Sound assets, indexed by sound slot
pub const ASSET_DIR: &str = "assets";
pub const SOUND_FILES: [&str; 5] = [
    "Odyssey_Breakdown_Loop_1_-_128_BPM_F_Min.wav",
    "Odyssey_House_Drum_Loop_-_128_BPM.wav",
    "Odyssey_Impact.wav",
    "Odyssey_House_Drop_Loop_12_-_128_BPM_G_Min.wav",
    "Trap-Demo-4-Cymatics-LeadOneShot30-E.mp3",
];

// Analyser: 1024 byte bins, light temporal smoothing
pub const ANALYSER_FFT_SIZE: u32 = 2048;
pub const ANALYSER_SMOOTHING: f64 = 0.3;

// Query-string keys
pub const SEED_PARAM: &str = "seed";
pub const DEBUG_PARAM: &str = "debug";

#[inline]
pub fn asset_url(file: &str) -> String {
    format!("{}/{}", ASSET_DIR, file)
}
