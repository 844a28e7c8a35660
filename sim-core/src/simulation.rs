//! Per-frame particle motion.
//!
//! Each frame every particle is either pushed away from the pointer (when
//! the pointer is present and within its influence radius) or relaxed
//! back toward its rest position. A particle's update reads only itself
//! and the pointer, so updating the field in any order gives the same
//! result as a simultaneous update.

use crate::{
    config::Config,
    particle::{Particle, ParticleField},
    pointer::Pointer,
};
use glam::Vec2;

/// What [`update`] did to a particle this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Repelled,
    Relaxed,
}

/// Normalized repulsion strength at `distance` from the pointer.
///
/// `1.0` at the pointer, falling linearly to `0.0` at `influence_radius`.
/// Returns `None` at or beyond the radius.
pub fn repulsion_force(distance: f32, influence_radius: f32) -> Option<f32> {
    if distance < influence_radius {
        Some((influence_radius - distance) / influence_radius)
    } else {
        None
    }
}

/// Advances one particle by one frame.
///
/// 1. With no pointer, skip straight to relaxation.
/// 2. Otherwise measure the vector from the particle to the pointer. If
///    its length is below the influence radius, move the particle away
///    from the pointer by `response_speed * force` along the unit
///    direction. At distance zero the direction is the zero vector, so
///    the particle stays put for that frame.
/// 3. Otherwise move the particle `cfg.relaxation` of the way back to
///    its rest position, independently per axis.
///
/// ### Parameters
/// - `particle` - Particle to move; only `pos` is written.
/// - `pointer` - Current pointer state; read only.
/// - `cfg` - Supplies the relaxation fraction.
///
/// ### Returns
/// Which branch was taken.
pub fn update(particle: &mut Particle, pointer: &Pointer, cfg: &Config) -> Motion {
    if let Some(target) = pointer.position {
        let delta = target - particle.pos;
        let distance = delta.length();

        if let Some(force) = repulsion_force(distance, pointer.influence_radius) {
            let direction = delta.normalize_or_zero();
            particle.pos -= direction * (particle.response_speed * force);
            return Motion::Repelled;
        }
    }

    relax(particle, cfg.relaxation);
    Motion::Relaxed
}

/// Removes `fraction` of the particle's offset from rest.
fn relax(particle: &mut Particle, fraction: f32) {
    let offset = particle.offset_from_rest();
    if offset != Vec2::ZERO {
        particle.pos -= offset * fraction;
    }
}

/// Advances every particle in the field by one frame.
///
/// ### Returns
/// The number of particles repelled by the pointer this frame.
pub fn step(field: &mut ParticleField, pointer: &Pointer, cfg: &Config) -> usize {
    field
        .as_mut_slice()
        .iter_mut()
        .map(|p| update(p, pointer, cfg))
        .filter(|m| *m == Motion::Repelled)
        .count()
}
