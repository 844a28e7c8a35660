//! Core of the constellation effect: a grid of particles pushed away by
//! the pointer, relaxing back to rest, and linked by fading lines.
//!
//! Main components:
//! - [`layout`] — grid generation for a given surface size.
//! - [`simulation`] — per-frame repulsion and relaxation.
//! - [`render`] — drawing surface abstraction and the scene renderer.
//! - [`scene`] — the context object the host's frame loop drives.
//! - [`particle`] — particles and the particle field.
//! - [`pointer`] — pointer state.
//! - [`config`] — tunables shared by all components.
//! - [`types`] — shared type aliases and surface dimensions.
//! - [`error`] — crate error type.

pub mod config;
pub mod error;
pub mod layout;
pub mod particle;
pub mod pointer;
pub mod render;
pub mod scene;
pub mod simulation;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use scene::Scene;
pub use types::Dimensions;
