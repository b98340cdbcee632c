#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use wheels_core::Sketch;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod params;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let search = dom::location_search();
    console_log::init_with_level(params::log_level(&search)).ok();
    log::info!("wheels-web starting");

    spawn_local(async move {
        if let Err(e) = init(&search).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(search: &str) -> anyhow::Result<()> {
    let canvas = dom::find_canvas(constants::CANVAS_ID)?;
    let ctx2d = dom::context_2d(&canvas)?;
    let size = input::fit_backing_store(&canvas);

    let mut sketch = Sketch::new(params::sketch_params(search))?;
    sketch.resize(size);
    let scale = sketch.viewport.scale;
    let sketch = Rc::new(RefCell::new(sketch));

    // Created before any gesture; stays suspended until the first hit resumes it
    let audio_ctx =
        web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext error: {:?}", e))?;
    let deck = audio::SoundDeck::load(audio_ctx, &constants::SOUND_FILES).await?;
    let deck = Rc::new(RefCell::new(deck));

    let painter = canvas::CanvasPainter::new(ctx2d, canvas.clone());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sketch: sketch.clone(),
        deck: deck.clone(),
        painter,
        started: Instant::now(),
    }));
    let driver = frame::start_loop(frame_ctx);

    events::wire_input_handlers(events::InputWiring {
        canvas,
        sketch,
        deck,
        driver,
    });

    log::info!("[init] canvas {:?} at scale {:.3}", size, scale);
    Ok(())
}
