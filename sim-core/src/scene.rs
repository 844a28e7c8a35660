//! The simulation context driven by the host's frame loop.
//!
//! [`Scene`] owns everything that changes between frames: the particle
//! field, the pointer state and the cached surface size. The host feeds
//! it input notifications and calls [`Scene::tick`] once per frame.
//! Notifications are plain writes that take effect on the next tick.

use crate::{
    config::Config,
    error::Result,
    layout,
    particle::ParticleField,
    pointer::Pointer,
    render::{self, Surface},
    simulation,
    types::Dimensions,
};
use glam::Vec2;
use tracing::{debug, trace};

/// Counters from the most recent [`Scene::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub repelled: usize,
    pub links: usize,
}

#[derive(Debug)]
pub struct Scene {
    field: ParticleField,
    pointer: Pointer,
    dims: Dimensions,
    cfg: Config,

    running: bool,
    frame: u64,
    last_stats: FrameStats,
}

impl Scene {
    /// Creates a running scene with a fresh layout for `dims`.
    ///
    /// ### Errors
    /// [`crate::Error::InvalidConfig`] if `cfg` fails [`Config::validate`];
    /// an out-of-range tunable such as a NaN relaxation would otherwise
    /// turn every particle position non-finite.
    pub fn new(cfg: Config, dims: Dimensions) -> Result<Self> {
        cfg.validate()?;

        let field = layout::generate(dims, &cfg);
        debug!(
            width = dims.width,
            height = dims.height,
            particles = field.len(),
            "scene created"
        );

        Ok(Self {
            field,
            pointer: Pointer::new(cfg.influence_radius),
            dims,
            cfg,
            running: true,
            frame: 0,
            last_stats: FrameStats::default(),
        })
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Number of frames advanced so far. Halted ticks are not counted.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Resize notification: caches `dims` and replaces the whole field.
    pub fn resize(&mut self, dims: Dimensions) {
        self.dims = dims;
        self.reset();
    }

    /// Regenerates the layout for the current dimensions.
    pub fn reset(&mut self) {
        self.field = layout::generate(self.dims, &self.cfg);
        debug!(
            width = self.dims.width,
            height = self.dims.height,
            particles = self.field.len(),
            "layout reset"
        );
    }

    /// Pointer move notification, in surface-local coordinates.
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer.move_to(pos);
    }

    /// Pointer leave notification.
    pub fn pointer_left(&mut self) {
        self.pointer.leave();
    }

    /// Stops advancing the simulation. Ticks still redraw the scene.
    pub fn halt(&mut self) {
        if self.running {
            debug!(frame = self.frame, "scene halted");
        }
        self.running = false;
    }

    pub fn resume(&mut self) {
        if !self.running {
            debug!(frame = self.frame, "scene resumed");
        }
        self.running = true;
    }

    /// Whether the host should keep scheduling ticks.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs one frame: clear, advance every particle, draw.
    ///
    /// A halted scene is drawn in its current state without advancing.
    ///
    /// ### Returns
    /// Whether the host should schedule another tick.
    pub fn tick(&mut self, surface: &mut impl Surface) -> bool {
        let repelled = if self.running {
            self.frame += 1;
            simulation::step(&mut self.field, &self.pointer, &self.cfg)
        } else {
            0
        };

        let links = render::draw_frame(&self.field, self.dims, &self.cfg, surface);
        self.last_stats = FrameStats { repelled, links };
        trace!(frame = self.frame, repelled, links, "tick");

        self.running
    }
}
