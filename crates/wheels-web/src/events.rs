use crate::audio::SoundDeck;
use crate::frame::FrameDriver;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheels_core::Sketch;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sketch: Rc<RefCell<Sketch>>,
    pub deck: Rc<RefCell<SoundDeck>>,
    pub driver: FrameDriver,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_resize(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let mut deck = w.deck.borrow_mut();
        let hit = w.sketch.borrow_mut().pointer_pressed(pos, &mut *deck);
        if let Some(slot) = hit {
            deck.resume();
            log::info!("[click] slot {} at ({:.0},{:.0})", slot, pos.x, pos.y);
            w.driver.kick();
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let size = input::fit_backing_store(&w.canvas);
        w.sketch.borrow_mut().resize(size);
        w.driver.kick();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
