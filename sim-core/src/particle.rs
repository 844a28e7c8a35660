use crate::types::ParticleId;
use glam::Vec2;

/// One node of the grid.
///
/// `pos` moves every frame; the rest position is fixed at construction
/// and only readable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    rest: Vec2,
    pub radius: f32,
    pub response_speed: f32,
}

/// Ordered, contiguous storage of every live particle.
///
/// Membership is fixed for the lifetime of a field; a layout reset
/// builds a new field instead of editing this one.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl Particle {
    /// Creates a particle at rest at `pos`.
    pub fn new(pos: Vec2, radius: f32, response_speed: f32) -> Self {
        Self {
            pos,
            rest: pos,
            radius,
            response_speed,
        }
    }

    pub fn rest(&self) -> Vec2 {
        self.rest
    }

    /// Vector from the rest position to the current position.
    pub fn offset_from_rest(&self) -> Vec2 {
        self.pos - self.rest
    }
}

impl ParticleField {
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the particles; the slice cannot grow or shrink.
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Finds the particle closest to `pos`, with its squared distance.
    pub fn find_nearest(&self, pos: Vec2) -> Option<(ParticleId, f32)> {
        let mut best = None;
        let mut best_d2 = f32::MAX;
        for (id, p) in self.particles.iter().enumerate() {
            let d2 = (p.pos - pos).length_squared();
            if d2 < best_d2 {
                best_d2 = d2;
                best = Some(id);
            }
        }
        best.map(|id| (id, best_d2))
    }
}

impl<'a> IntoIterator for &'a ParticleField {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_starts_at_rest() {
        let p = Particle::new(Vec2::new(3.0, 4.0), 4.0, 8.0);
        assert_eq!(p.pos, p.rest());
        assert_eq!(p.offset_from_rest(), Vec2::ZERO);
    }

    #[test]
    fn moving_a_particle_keeps_rest_position() {
        let mut p = Particle::new(Vec2::new(3.0, 4.0), 4.0, 8.0);
        p.pos += Vec2::new(10.0, -2.0);
        assert_eq!(p.rest(), Vec2::new(3.0, 4.0));
        assert_eq!(p.offset_from_rest(), Vec2::new(10.0, -2.0));
    }

    #[test]
    fn find_nearest_picks_closest_particle() {
        let field = ParticleField::from_particles(vec![
            Particle::new(Vec2::new(0.0, 0.0), 4.0, 8.0),
            Particle::new(Vec2::new(40.0, 0.0), 4.0, 8.0),
        ]);
        let (id, d2) = field.find_nearest(Vec2::new(35.0, 0.0)).unwrap();
        assert_eq!(id, 1);
        assert_eq!(d2, 25.0);
    }

    #[test]
    fn find_nearest_on_empty_field_is_none() {
        let field = ParticleField::default();
        assert!(field.is_empty());
        assert!(field.find_nearest(Vec2::ZERO).is_none());
    }
}
