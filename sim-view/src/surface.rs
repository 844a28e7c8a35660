//! egui-backed drawing surface.
//!
//! Adapts an [`egui::Painter`] to the core [`Surface`] trait. Surface
//! coordinates have their origin at the top-left corner of the panel the
//! scene is drawn into.

use constellation_core::{
    Dimensions,
    render::{Color, Stroke, Surface},
};
use glam::Vec2;

/// [`Surface`] that paints through an egui painter.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    background: egui::Color32,
}

impl<'a> PainterSurface<'a> {
    /// Creates a surface whose origin is `origin` in screen space.
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2, background: Color) -> Self {
        Self {
            painter,
            origin,
            background: to_color32(background),
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, dims: Dimensions) {
        let size = egui::vec2(dims.width.max(0.0), dims.height.max(0.0));
        let rect = egui::Rect::from_min_size(self.origin, size);
        self.painter.rect_filled(rect, 0.0, self.background);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.painter.circle_filled(
            surface_to_screen(self.origin, center),
            radius,
            to_color32(color),
        );
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        let a = surface_to_screen(self.origin, from);
        let b = surface_to_screen(self.origin, to);
        self.painter
            .line_segment([a, b], egui::Stroke::new(stroke.width, stroke_color(&stroke)));
    }
}

/// Converts a surface-local position to screen space.
pub fn surface_to_screen(origin: egui::Pos2, p: Vec2) -> egui::Pos2 {
    egui::pos2(origin.x + p.x, origin.y + p.y)
}

/// Converts a screen-space position to surface-local coordinates.
///
/// This is the inverse of [`surface_to_screen`].
pub fn screen_to_surface(origin: egui::Pos2, p: egui::Pos2) -> Vec2 {
    Vec2::new(p.x - origin.x, p.y - origin.y)
}

pub fn to_color32(c: Color) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

/// Line colour with the stroke's opacity applied.
pub fn stroke_color(stroke: &Stroke) -> egui::Color32 {
    let alpha = (stroke.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    let Color { r, g, b } = stroke.color;
    egui::Color32::from_rgba_unmultiplied(r, g, b, alpha)
}
