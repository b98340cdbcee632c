//! Immediate-mode drawing seam.
//!
//! The sketch draws through [`Painter`], a small 2D API modelled on a canvas
//! context with a save/restore stack. Fill and stroke are optional: `None`
//! disables that part of every shape until the enclosing scope is restored.
//!
//! Helpers never leave state behind. They open a [`StyleScope`] with
//! [`Painter::scoped`] (or [`Painter::dashed`]) and the scope restores colour,
//! line width, dash pattern and transform when it is dropped.

use crate::color::Rgba;
use glam::Vec2;
use std::ops::{Deref, DerefMut};

pub trait Painter {
    fn save(&mut self);
    fn restore(&mut self);

    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, factor: f32);

    fn set_fill(&mut self, fill: Option<Rgba>);
    fn set_stroke(&mut self, stroke: Option<Rgba>);
    fn set_line_width(&mut self, width: f32);
    fn set_line_dash(&mut self, pattern: &[f32]);

    /// Fill the whole surface, ignoring the current transform.
    fn clear(&mut self, color: Rgba);
    /// Axis-aligned ellipse; `width`/`height` are diameters.
    fn ellipse(&mut self, center: Vec2, width: f32, height: f32);
    /// Poly-line through `points`, closed back to the first point if `close`.
    fn polyline(&mut self, points: &[Vec2], close: bool);
    /// Open quadratic Bézier from `from` to `to`.
    fn quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2);

    fn circle(&mut self, center: Vec2, diameter: f32) {
        self.ellipse(center, diameter, diameter);
    }

    /// Save state and return a guard that restores it on drop.
    fn scoped(&mut self) -> StyleScope<'_, Self>
    where
        Self: Sized,
    {
        self.save();
        StyleScope { painter: self }
    }

    /// Like [`Painter::scoped`] with a dash pattern applied inside the scope.
    fn dashed(&mut self, pattern: &[f32]) -> StyleScope<'_, Self>
    where
        Self: Sized,
    {
        let mut scope = self.scoped();
        scope.set_line_dash(pattern);
        scope
    }
}

/// Save/restore guard returned by [`Painter::scoped`].
pub struct StyleScope<'a, P: Painter> {
    painter: &'a mut P,
}

impl<P: Painter> Deref for StyleScope<'_, P> {
    type Target = P;
    fn deref(&self) -> &P {
        self.painter
    }
}

impl<P: Painter> DerefMut for StyleScope<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.painter
    }
}

impl<P: Painter> Drop for StyleScope<'_, P> {
    fn drop(&mut self) {
        self.painter.restore();
    }
}

/// One recorded call on a [`RecordingPainter`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Scale(f32),
    Fill(Option<Rgba>),
    Stroke(Option<Rgba>),
    LineWidth(f32),
    LineDash(Vec<f32>),
    Clear(Rgba),
    Ellipse {
        center: Vec2,
        width: f32,
        height: f32,
    },
    Polyline {
        points: Vec<Vec2>,
        close: bool,
    },
    Quadratic {
        from: Vec2,
        control: Vec2,
        to: Vec2,
    },
}

impl DrawCmd {
    /// True for commands that put pixels on the surface.
    pub fn is_geometry(&self) -> bool {
        matches!(
            self,
            DrawCmd::Clear(_)
                | DrawCmd::Ellipse { .. }
                | DrawCmd::Polyline { .. }
                | DrawCmd::Quadratic { .. }
        )
    }
}

/// Painter that records every call. Used by tests and for headless frames.
#[derive(Default, Debug)]
pub struct RecordingPainter {
    pub commands: Vec<DrawCmd>,
    depth: usize,
    max_depth: usize,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current save/restore nesting depth; zero when balanced.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn geometry_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_geometry()).count()
    }

    pub fn ellipses(&self) -> impl Iterator<Item = (Vec2, f32, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Ellipse {
                center,
                width,
                height,
            } => Some((*center, *width, *height)),
            _ => None,
        })
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
        self.depth = 0;
        self.max_depth = 0;
    }
}

impl Painter for RecordingPainter {
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.commands.push(DrawCmd::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCmd::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCmd::Translate(offset));
    }

    fn rotate(&mut self, radians: f32) {
        self.commands.push(DrawCmd::Rotate(radians));
    }

    fn scale(&mut self, factor: f32) {
        self.commands.push(DrawCmd::Scale(factor));
    }

    fn set_fill(&mut self, fill: Option<Rgba>) {
        self.commands.push(DrawCmd::Fill(fill));
    }

    fn set_stroke(&mut self, stroke: Option<Rgba>) {
        self.commands.push(DrawCmd::Stroke(stroke));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCmd::LineWidth(width));
    }

    fn set_line_dash(&mut self, pattern: &[f32]) {
        self.commands.push(DrawCmd::LineDash(pattern.to_vec()));
    }

    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCmd::Clear(color));
    }

    fn ellipse(&mut self, center: Vec2, width: f32, height: f32) {
        self.commands.push(DrawCmd::Ellipse {
            center,
            width,
            height,
        });
    }

    fn polyline(&mut self, points: &[Vec2], close: bool) {
        self.commands.push(DrawCmd::Polyline {
            points: points.to_vec(),
            close,
        });
    }

    fn quadratic(&mut self, from: Vec2, control: Vec2, to: Vec2) {
        self.commands.push(DrawCmd::Quadratic { from, control, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_restores_on_drop() {
        let mut p = RecordingPainter::new();
        {
            let mut s = p.scoped();
            s.set_fill(None);
            {
                let mut d = s.dashed(&[1.0, 2.0]);
                d.circle(Vec2::ZERO, 4.0);
                assert_eq!(d.depth(), 2);
            }
        }
        assert_eq!(p.depth(), 0);
        assert_eq!(p.max_depth(), 2);
        assert_eq!(p.commands.first(), Some(&DrawCmd::Save));
        assert_eq!(p.commands.last(), Some(&DrawCmd::Restore));
    }
}
