//! Scene rendering onto an abstract drawing surface.
//!
//! Rendering never touches simulation state: [`draw_frame`] reads the
//! field and emits draw calls to a [`Surface`]. The host supplies the
//! surface; [`DrawList`] records calls for headless use and tests.
//!
//! The link pass compares every unordered pair of particles, which is
//! O(n²) per frame. That is fine at grid spacings of tens of units but
//! is the first thing to revisit for much denser fields.

use crate::{
    config::Config,
    particle::ParticleField,
    types::{Dimensions, ParticleId},
};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Line style for [`Surface::stroke_line`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    /// Opacity in `0.0..=1.0`.
    pub alpha: f32,
}

/// Drawing primitives the renderer needs from the host.
pub trait Surface {
    /// Clears the whole surface to empty.
    fn clear(&mut self, dims: Dimensions);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
}

/// A connection between two distinct particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: ParticleId,
    pub b: ParticleId,
    pub alpha: f32,
}

/// Line opacity for two particles `distance` apart.
///
/// Falls linearly from `1.0` when touching to `0.0` at `threshold`.
/// Returns `None` at or beyond the threshold.
pub fn link_alpha(distance: f32, threshold: f32) -> Option<f32> {
    if distance < threshold {
        Some(1.0 - distance / threshold)
    } else {
        None
    }
}

/// Enumerates the links of a field.
///
/// Each unordered pair is visited exactly once, with `a < b`, so no
/// particle is ever paired with itself.
pub fn links(field: &ParticleField, threshold: f32) -> impl Iterator<Item = Link> + '_ {
    let particles = field.as_slice();
    (0..particles.len()).flat_map(move |a| {
        ((a + 1)..particles.len()).filter_map(move |b| {
            let distance = particles[a].pos.distance(particles[b].pos);
            link_alpha(distance, threshold).map(|alpha| Link { a, b, alpha })
        })
    })
}

/// Draws one frame of the scene.
///
/// Issues, in order: one [`Surface::clear`], one filled circle per
/// particle, then one line per [`Link`].
///
/// ### Parameters
/// - `field` - Particles to draw; read only.
/// - `dims` - Surface size passed to [`Surface::clear`].
/// - `cfg` - Colours, line width and link distance.
/// - `surface` - Receives the draw calls.
///
/// ### Returns
/// The number of links drawn.
pub fn draw_frame(
    field: &ParticleField,
    dims: Dimensions,
    cfg: &Config,
    surface: &mut impl Surface,
) -> usize {
    surface.clear(dims);

    for p in field {
        surface.fill_circle(p.pos, p.radius, cfg.particle_color);
    }

    let particles = field.as_slice();
    let mut drawn = 0;
    for link in links(field, cfg.link_distance()) {
        surface.stroke_line(
            particles[link.a].pos,
            particles[link.b].pos,
            Stroke {
                width: cfg.line_width,
                color: cfg.line_color,
                alpha: link.alpha,
            },
        );
        drawn += 1;
    }
    drawn
}

/// One recorded call on a [`DrawList`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Dimensions),
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
}

/// A [`Surface`] that records draw calls instead of painting them.
///
/// `clear` drops previously recorded commands, so the list always holds
/// the most recent frame.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for DrawList {
    fn clear(&mut self, dims: Dimensions) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(dims));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }
}
