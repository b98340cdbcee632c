use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;
use wheels_core::{Painter, Rgba};

#[derive(Clone, Copy)]
struct PaintState {
    fill: Option<Rgba>,
    stroke: Option<Rgba>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill: Some(Rgba::WHITE),
            stroke: Some(Rgba::BLACK),
        }
    }
}

/// [`Painter`] over a 2D canvas context.
///
/// The context's own save/restore covers transform, colours, line width and
/// dash; fill/stroke on/off is tracked alongside it since the canvas has no
/// notion of "no fill".
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    canvas: web::HtmlCanvasElement,
    state: PaintState,
    stack: Vec<PaintState>,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d, canvas: web::HtmlCanvasElement) -> Self {
        let mut painter = Self {
            ctx,
            canvas,
            state: PaintState::default(),
            stack: Vec::new(),
        };
        painter.reset();
        painter
    }

    /// Back to identity transform and default style; called at frame start
    /// since resizing the canvas wipes context state.
    pub fn reset(&mut self) {
        _ = self.ctx.reset_transform();
        self.ctx.set_line_cap("round");
        self.ctx.set_line_width(1.0);
        _ = self.ctx.set_line_dash(&js_sys::Array::new());
        self.stack.clear();
        self.state = PaintState::default();
        self.apply_colors();
    }

    fn apply_colors(&self) {
        if let Some(c) = self.state.fill {
            self.ctx.set_fill_style_str(&c.to_css());
        }
        if let Some(c) = self.state.stroke {
            self.ctx.set_stroke_style_str(&c.to_css());
        }
    }

    fn paint_path(&self) {
        if self.state.fill.is_some() {
            self.ctx.fill();
        }
        if self.state.stroke.is_some() {
            self.ctx.stroke();
        }
    }
}

impl Painter for CanvasPainter {
    fn save(&mut self) {
        self.stack.push(self.state);
        self.ctx.save();
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn scale(&mut self, factor: f32) {
        _ = self.ctx.scale(factor as f64, factor as f64);
    }

    fn set_fill(&mut self, fill: Option<Rgba>) {
        self.state.fill = fill;
        if let Some(c) = fill {
            self.ctx.set_fill_style_str(&c.to_css());
        }
    }

    fn set_stroke(&mut self, stroke: Option<Rgba>) {
        self.state.stroke = stroke;
        if let Some(c) = stroke {
            self.ctx.set_stroke_style_str(&c.to_css());
        }
    }

    fn set_line_width(&mut self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    fn set_line_dash(&mut self, pattern: &[f32]) {
        let segments = js_sys::Array::new();
        for v in pattern {
            segments.push(&JsValue::from_f64(*v as f64));
        }
        if let Err(e) = self.ctx.set_line_dash(&segments) {
            log::warn!("setLineDash failed: {:?}", e);
        }
    }

    fn clear(&mut self, color: Rgba) {
        self.ctx.save();
        _ = self.ctx.reset_transform();
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.restore();
    }

    fn ellipse(&mut self, center: Vec2, width: f32, height: f32) {
        // negative sizes draw as their magnitude
        let rx = (width / 2.0).abs() as f64;
        let ry = (height / 2.0).abs() as f64;
        self.ctx.begin_path();
        if self
            .ctx
            .ellipse(center.x as f64, center.y as f64, rx, ry, 0.0, 0.0, TAU)
            .is_ok()
        {
            self.paint_path();
        }
    }

    fn polyline(&mut self, points: &[Vec2], close: bool) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        if close {
            self.ctx.close_path();
        }
        self.paint_path();
    }

    fn quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.quadratic_curve_to(
            control.x as f64,
            control.y as f64,
            to.x as f64,
            to.y as f64,
        );
        self.paint_path();
    }
}
