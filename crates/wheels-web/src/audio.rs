use crate::constants::{asset_url, ANALYSER_FFT_SIZE, ANALYSER_SMOOTHING};
use anyhow::anyhow;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;
use wheels_core::{band_energy, Playback, Spectrum};

/// One decoded clip plus whatever source node is currently playing it.
struct SoundSlot {
    name: &'static str,
    buffer: Option<web::AudioBuffer>,
    source: Option<web::AudioBufferSourceNode>,
    on_ended: Option<Closure<dyn FnMut()>>,
    playing: Rc<Cell<bool>>,
}

impl SoundSlot {
    fn new(name: &'static str, buffer: Option<web::AudioBuffer>) -> Self {
        Self {
            name,
            buffer,
            source: None,
            on_ended: None,
            playing: Rc::new(Cell::new(false)),
        }
    }

    fn start(&mut self, ctx: &web::AudioContext, output: &web::AudioNode, looping: bool) {
        let Some(buffer) = self.buffer.clone() else {
            log::warn!("[audio] {} not loaded; ignoring play", self.name);
            return;
        };
        self.halt();

        let src = match web::AudioBufferSourceNode::new(ctx) {
            Ok(s) => s,
            Err(e) => {
                log::error!("[audio] AudioBufferSourceNode error: {:?}", e);
                return;
            }
        };
        src.set_buffer(Some(&buffer));
        src.set_loop(looping);
        if let Err(e) = src.connect_with_audio_node(output) {
            log::error!("[audio] connect error: {:?}", e);
            return;
        }

        let playing = self.playing.clone();
        let on_ended = Closure::wrap(Box::new(move || playing.set(false)) as Box<dyn FnMut()>);
        let sched: &web::AudioScheduledSourceNode = &src;
        sched.set_onended(Some(on_ended.as_ref().unchecked_ref()));
        if let Err(e) = sched.start() {
            log::error!("[audio] start error: {:?}", e);
            sched.set_onended(None);
            return;
        }
        self.playing.set(true);
        self.source = Some(src);
        self.on_ended = Some(on_ended);
    }

    /// Stop the current source without letting its `ended` event fire back.
    fn halt(&mut self) {
        if let Some(src) = self.source.take() {
            let sched: &web::AudioScheduledSourceNode = &src;
            sched.set_onended(None);
            _ = sched.stop();
        }
        self.on_ended = None;
        self.playing.set(false);
    }
}

/// The five sound slots routed through one shared analyser.
pub struct SoundDeck {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    bins: Vec<u8>,
    slots: Vec<SoundSlot>,
}

impl SoundDeck {
    /// Create the analyser and fetch/decode every asset. A clip that fails to
    /// load is logged and left silent.
    pub async fn load(ctx: web::AudioContext, files: &[&'static str]) -> anyhow::Result<Self> {
        let analyser = web::AnalyserNode::new(&ctx).map_err(|e| anyhow!("AnalyserNode: {:?}", e))?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);
        analyser.set_smoothing_time_constant(ANALYSER_SMOOTHING);
        analyser
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| anyhow!("analyser connect: {:?}", e))?;
        let bins = vec![0u8; analyser.frequency_bin_count() as usize];

        let mut slots = Vec::with_capacity(files.len());
        for &name in files {
            let buffer = match fetch_and_decode(&ctx, &asset_url(name)).await {
                Ok(b) => {
                    log::info!("[audio] loaded {} ({:.1}s)", name, b.duration());
                    Some(b)
                }
                Err(e) => {
                    log::error!("[audio] {:#}", e);
                    None
                }
            };
            slots.push(SoundSlot::new(name, buffer));
        }
        Ok(Self {
            ctx,
            analyser,
            bins,
            slots,
        })
    }

    /// Browsers keep a fresh context suspended until a user gesture.
    pub fn resume(&self) {
        if self.ctx.state() != web::AudioContextState::Running {
            _ = self.ctx.resume();
        }
    }

    fn output(&self) -> &web::AudioNode {
        &self.analyser
    }
}

impl Playback for SoundDeck {
    fn is_playing(&self, slot: usize) -> bool {
        self.slots.get(slot).is_some_and(|s| s.playing.get())
    }

    fn play(&mut self, slot: usize) {
        let (ctx, output) = (self.ctx.clone(), self.output().clone());
        if let Some(s) = self.slots.get_mut(slot) {
            s.start(&ctx, &output, false);
        }
    }

    fn start_loop(&mut self, slot: usize) {
        let (ctx, output) = (self.ctx.clone(), self.output().clone());
        if let Some(s) = self.slots.get_mut(slot) {
            s.start(&ctx, &output, true);
        }
    }

    fn stop(&mut self, slot: usize) {
        if let Some(s) = self.slots.get_mut(slot) {
            s.halt();
        }
    }
}

impl Spectrum for SoundDeck {
    fn analyze(&mut self) {
        let bins = self.analyser.frequency_bin_count() as usize;
        if self.bins.len() != bins {
            self.bins.resize(bins, 0);
        }
        self.analyser.get_byte_frequency_data(&mut self.bins);
    }

    fn energy_in_band(&self, low_hz: f32, high_hz: f32) -> f32 {
        band_energy(&self.bins, self.ctx.sample_rate(), low_hz, high_hz)
    }
}

async fn fetch_and_decode(ctx: &web::AudioContext, url: &str) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|_| anyhow!("fetch {}: not a Response", url))?;
    if !resp.ok() {
        return Err(anyhow!("fetch {}: HTTP {}", url, resp.status()));
    }
    let bytes = JsFuture::from(resp.array_buffer().map_err(|e| anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow!("read {}: {:?}", url, e))?;
    let bytes: js_sys::ArrayBuffer = bytes
        .dyn_into()
        .map_err(|_| anyhow!("read {}: not an ArrayBuffer", url))?;
    let decoded = JsFuture::from(
        ctx.decode_audio_data(&bytes)
            .map_err(|e| anyhow!("decodeAudioData: {:?}", e))?,
    )
    .await
    .map_err(|e| anyhow!("decode {}: {:?}", url, e))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|_| anyhow!("decode {}: not an AudioBuffer", url))
}
