use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::Color;

/// Tunables for layout, simulation and rendering.
///
/// Every field has a default, so a partial TOML table deserializes into a
/// complete config.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Distance between neighbouring grid points.
    pub spacing: f32,
    /// Distance within which the pointer repels particles.
    pub influence_radius: f32,
    /// Radius of each drawn particle.
    pub particle_radius: f32,
    /// Maximum per-frame repulsion displacement.
    pub response_speed: f32,
    /// Fraction of the offset from rest removed per frame.
    pub relaxation: f32,
    /// Links are drawn below `spacing * link_distance_factor`.
    pub link_distance_factor: f32,
    pub line_width: f32,
    pub particle_color: Color,
    pub line_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacing: 40.0,
            influence_radius: 100.0,
            particle_radius: 4.0,
            response_speed: 8.0,
            relaxation: 0.1,
            link_distance_factor: 1.5,
            line_width: 2.0,
            particle_color: Color::WHITE,
            line_color: Color::WHITE,
        }
    }
}

impl Config {
    /// Distance below which two particles are connected by a line.
    pub fn link_distance(&self) -> f32 {
        self.spacing * self.link_distance_factor
    }

    /// Checks that every tunable is usable by the frame loop.
    ///
    /// Surface dimensions are not part of the config; degenerate
    /// surfaces are handled by producing an empty field.
    ///
    /// ### Errors
    /// [`Error::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("spacing", self.spacing),
            ("influence_radius", self.influence_radius),
            ("particle_radius", self.particle_radius),
            ("response_speed", self.response_speed),
            ("link_distance_factor", self.link_distance_factor),
            ("line_width", self.line_width),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig {
                    field,
                    reason: "must be finite and > 0",
                });
            }
        }

        if !(self.relaxation > 0.0 && self.relaxation <= 1.0) {
            return Err(Error::InvalidConfig {
                field: "relaxation",
                reason: "must be in (0, 1]",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.spacing, 40.0);
        assert_eq!(cfg.influence_radius, 100.0);
        assert_eq!(cfg.particle_radius, 4.0);
        assert_eq!(cfg.response_speed, 8.0);
        assert_eq!(cfg.relaxation, 0.1);
        assert_eq!(cfg.link_distance(), 60.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_positive_spacing() {
        let mut cfg = Config::default();
        cfg.spacing = 0.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("spacing"));

        cfg.spacing = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_relaxation_out_of_range() {
        let mut cfg = Config::default();
        cfg.relaxation = 0.0;
        assert!(cfg.validate().is_err());

        cfg.relaxation = 1.5;
        assert!(cfg.validate().is_err());

        cfg.relaxation = 1.0;
        assert!(cfg.validate().is_ok());
    }
}
