//! Grid layout generation.
//!
//! Builds the particle field for a surface of a given size. The field is
//! always built from scratch; callers replace their old field with the
//! result so that no particle survives a resize.

use crate::{
    config::Config,
    particle::{Particle, ParticleField},
    types::Dimensions,
};
use glam::Vec2;
use tracing::warn;

/// Upper bound on grid points along one axis.
///
/// Larger surfaces are treated like non-finite ones and produce an empty
/// axis instead of an unbounded allocation.
pub const MAX_AXIS_POINTS: usize = 4096;

/// First grid coordinate along an axis of length `dimension`.
///
/// Computed as `((dimension - spacing) % spacing) + spacing`, using the
/// truncating remainder, so the first point is never flush with the
/// axis origin. For `dimension >= 2 * spacing` it lies in
/// `[spacing, 2 * spacing)`; below that it is at or past `dimension`.
pub fn grid_origin(dimension: f32, spacing: f32) -> f32 {
    ((dimension - spacing) % spacing) + spacing
}

/// Number of grid points along an axis, or `None` for degenerate input.
///
/// `dimension - origin` is a whole multiple of `spacing`, so the count is
/// rounded rather than found by comparing accumulated coordinates.
fn axis_len(dimension: f32, spacing: f32) -> Option<usize> {
    if !dimension.is_finite() || !spacing.is_finite() || spacing <= 0.0 {
        return None;
    }

    let steps = ((dimension - grid_origin(dimension, spacing)) / spacing).round();
    if steps > MAX_AXIS_POINTS as f32 {
        warn!(dimension, spacing, "surface too large for grid, skipping layout");
        return None;
    }
    Some(steps.max(0.0) as usize)
}

/// All grid coordinates along one axis, in increasing order.
///
/// Coordinates start at [`grid_origin`], step by `spacing` and end at
/// `dimension - spacing`. Non-finite input, a non-positive `spacing`, a
/// `dimension` below `2 * spacing`, or one needing more than
/// [`MAX_AXIS_POINTS`] points yields an empty vector.
pub fn grid_axis(dimension: f32, spacing: f32) -> Vec<f32> {
    let Some(len) = axis_len(dimension, spacing) else {
        return Vec::new();
    };

    let origin = grid_origin(dimension, spacing);
    (0..len).map(|i| origin + i as f32 * spacing).collect()
}

/// Generates a fresh particle field covering `dims`.
///
/// Particles are laid out row by row on a grid with `cfg.spacing`
/// between neighbours. Each particle starts at rest, with radius and
/// response speed taken from `cfg`.
///
/// ### Parameters
/// - `dims` - Current surface size. Zero, negative or non-finite sizes
///   are allowed and produce an empty field.
/// - `cfg` - Supplies the grid spacing and per-particle constants.
///
/// ### Returns
/// A new [`ParticleField`]; it shares nothing with any previous field.
pub fn generate(dims: Dimensions, cfg: &Config) -> ParticleField {
    let xs = grid_axis(dims.width, cfg.spacing);
    let ys = grid_axis(dims.height, cfg.spacing);

    let mut particles = Vec::with_capacity(xs.len() * ys.len());
    for &y in &ys {
        for &x in &xs {
            particles.push(Particle::new(
                Vec2::new(x, y),
                cfg.particle_radius,
                cfg.response_speed,
            ));
        }
    }

    ParticleField::from_particles(particles)
}
