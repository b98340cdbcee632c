use crate::audio::SoundDeck;
use crate::canvas::CanvasPainter;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheels_core::Sketch;

pub struct FrameContext {
    pub sketch: Rc<RefCell<Sketch>>,
    pub deck: Rc<RefCell<SoundDeck>>,
    pub painter: CanvasPainter,
    pub started: Instant,
}

impl FrameContext {
    /// One animation-frame callback. Returns whether another is wanted.
    pub fn frame(&mut self) -> bool {
        let now = self.started.elapsed();
        let mut sketch = self.sketch.borrow_mut();
        let mut deck = self.deck.borrow_mut();
        self.painter.reset();
        sketch.tick(now, &mut self.painter, &mut *deck)
    }
}

/// `requestAnimationFrame` driver that can go quiet and be woken again.
#[derive(Clone)]
pub struct FrameDriver {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    scheduled: Rc<Cell<bool>>,
}

impl FrameDriver {
    /// Schedule a callback unless one is already pending.
    pub fn kick(&self) {
        if self.scheduled.get() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(_) => self.scheduled.set(true),
                Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameDriver {
    let driver = FrameDriver {
        tick: Rc::new(RefCell::new(None)),
        scheduled: Rc::new(Cell::new(false)),
    };
    let driver_tick = driver.clone();
    *driver.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        driver_tick.scheduled.set(false);
        if frame_ctx.borrow_mut().frame() {
            driver_tick.kick();
        } else {
            log::debug!("[frame] loop idle");
        }
    }) as Box<dyn FnMut()>));
    driver.kick();
    driver
}
