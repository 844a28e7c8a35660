//! Viewer settings with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `<config_dir>/constellation/config.toml`
//! 3. File passed with `--config`
//! 4. Environment variables: `CONSTELLATION_*`, sections split by `__`
//!
//! ```toml
//! [field]
//! spacing = 32.0
//! influence_radius = 120.0
//! line_color = { r = 120, g = 200, b = 255 }
//!
//! [window]
//! title = "Constellation"
//! width = 1280.0
//! height = 720.0
//! ```

use std::path::{Path, PathBuf};

use constellation_core::{Config, render::Color};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to produce usable settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A layer could not be read or did not match the settings shape.
    /// Boxed because `figment::Error` is large.
    #[error("failed to load settings: {0}")]
    Load(Box<figment::Error>),

    /// Settings loaded but a field tunable is out of range.
    #[error(transparent)]
    Invalid(#[from] constellation_core::Error),
}

impl From<figment::Error> for SettingsError {
    fn from(err: figment::Error) -> Self {
        Self::Load(Box::new(err))
    }
}

/// Root settings structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation and rendering tunables.
    pub field: Config,
    pub window: WindowSettings,
}

/// Native window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    /// Initial inner size in logical points.
    pub width: f32,
    pub height: f32,
    pub background: Color,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Constellation".to_string(),
            width: 1280.0,
            height: 720.0,
            background: Color::BLACK,
        }
    }
}

impl Settings {
    /// Load settings from all layers and validate them.
    ///
    /// `explicit` is an optional TOML file given on the command line; a
    /// missing file is an error, unlike the user config which is optional.
    /// `spacing` overrides every layer.
    pub fn load(explicit: Option<&Path>, spacing: Option<f32>) -> Result<Self, SettingsError> {
        Self::resolve(Self::figment(Self::user_config_path(), explicit), spacing)
    }

    fn resolve(figment: Figment, spacing: Option<f32>) -> Result<Self, SettingsError> {
        let mut settings: Settings = figment.extract()?;
        if let Some(spacing) = spacing {
            settings.field.spacing = spacing;
        }
        settings.field.validate()?;
        Ok(settings)
    }

    fn figment(user_config: Option<PathBuf>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));

        if let Some(path) = user_config {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed("CONSTELLATION_").split("__"))
    }

    /// User config path: `<config_dir>/constellation/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("constellation").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_any_layer() {
        figment::Jail::expect_with(|_jail| {
            let settings: Settings = Settings::figment(None, None).extract()?;
            assert_eq!(settings, Settings::default());
            assert_eq!(settings.field.spacing, 40.0);
            assert_eq!(settings.window.background, Color::BLACK);
            Ok(())
        });
    }

    #[test]
    fn explicit_file_overrides_defaults_partially() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                r#"
                [field]
                spacing = 32.0
                line_color = { r = 10, g = 20, b = 30 }

                [window]
                title = "Stars"
                "#,
            )?;

            let path = jail.directory().join("custom.toml");
            let settings: Settings = Settings::figment(None, Some(&path)).extract()?;

            assert_eq!(settings.field.spacing, 32.0);
            assert_eq!(settings.field.line_color, Color::rgb(10, 20, 30));
            assert_eq!(settings.field.influence_radius, 100.0);
            assert_eq!(settings.window.title, "Stars");
            assert_eq!(settings.window.width, 1280.0);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("user.toml", "[field]\nspacing = 32.0\n")?;
            jail.set_env("CONSTELLATION_FIELD__SPACING", "24.0");
            jail.set_env("CONSTELLATION_WINDOW__WIDTH", "640.0");

            let path = jail.directory().join("user.toml");
            let settings: Settings = Settings::figment(Some(path), None).extract()?;

            assert_eq!(settings.field.spacing, 24.0);
            assert_eq!(settings.window.width, 640.0);
            Ok(())
        });
    }

    #[test]
    fn spacing_override_beats_every_layer() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CONSTELLATION_FIELD__SPACING", "24.0");

            let settings = Settings::resolve(Settings::figment(None, None), Some(50.0))
                .expect("override is valid");

            assert_eq!(settings.field.spacing, 50.0);
            Ok(())
        });
    }

    #[test]
    fn out_of_range_field_is_rejected_after_loading() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "[field]\nrelaxation = 2.0\n")?;
            let path = jail.directory().join("bad.toml");

            let err = Settings::resolve(Settings::figment(None, Some(&path)), None).unwrap_err();
            assert!(matches!(err, SettingsError::Invalid(_)));
            assert!(err.to_string().contains("relaxation"));

            let err = Settings::resolve(Settings::figment(None, None), Some(-1.0)).unwrap_err();
            assert!(err.to_string().contains("spacing"));
            Ok(())
        });
    }

    #[test]
    fn malformed_file_is_a_load_error() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("broken.toml", "[field]\nspacing = \"wide\"\n")?;
            let path = jail.directory().join("broken.toml");

            let err = Settings::resolve(Settings::figment(None, Some(&path)), None).unwrap_err();
            assert!(matches!(err, SettingsError::Load(_)));
            Ok(())
        });
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        figment::Jail::expect_with(|jail| {
            let path = jail.directory().join("absent.toml");
            let result: Result<Settings, _> = Settings::figment(None, Some(&path)).extract();
            assert!(result.is_err());
            Ok(())
        });
    }
}
