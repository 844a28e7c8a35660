/// Identifier for a particle in a [`crate::particle::ParticleField`].
///
/// This is an index into the field's particle storage, and is only
/// meaningful within the lifetime of a given field instance. A layout
/// reset replaces the field, so ids never carry across resets.
pub type ParticleId = usize;

/// Width and height of the drawing surface, in surface units.
///
/// Owned by the hosting environment; the core only reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
