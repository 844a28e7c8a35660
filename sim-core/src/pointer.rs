use glam::Vec2;

/// Externally tracked pointer state.
///
/// `None` means the pointer is outside the trackable area. It is distinct
/// from every real coordinate, including the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub position: Option<Vec2>,
    pub influence_radius: f32,
}

impl Pointer {
    /// Creates an absent pointer with the given influence radius.
    pub fn new(influence_radius: f32) -> Self {
        Self {
            position: None,
            influence_radius,
        }
    }

    pub fn move_to(&mut self, pos: Vec2) {
        self.position = Some(pos);
    }

    pub fn leave(&mut self) {
        self.position = None;
    }

    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_a_present_position() {
        let mut pointer = Pointer::new(100.0);
        assert!(!pointer.is_present());

        pointer.move_to(Vec2::ZERO);
        assert_eq!(pointer.position, Some(Vec2::ZERO));
        assert!(pointer.is_present());

        pointer.leave();
        assert_eq!(pointer.position, None);
    }
}
