//! Interactive constellation viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Scene`] and acts as
//! its hosting environment: it reports the panel size and pointer
//! position to the scene, drives one tick per egui frame, and paints the
//! result through a [`PainterSurface`].

use constellation_core::{Dimensions, Scene, render::Color};
use eframe::App;
use tracing::{debug, info};

use crate::settings::Settings;
use crate::surface::{self, PainterSurface};

/// Main application state for the interactive viewer.
///
/// The typical per-frame update is:
/// 1. Build the control and status panels.
/// 2. Sync the drawing panel's size and the pointer into the scene.
/// 3. Call [`Scene::tick`] and request another repaint while running.
///
/// ### Fields
/// - `scene` - Simulation context: field, pointer, cached dimensions.
/// - `background` - Colour the surface is cleared to.
pub struct Viewer {
    scene: Scene,
    background: Color,
}

impl Viewer {
    /// Creates a viewer from loaded settings.
    ///
    /// The scene starts sized to the configured window; the first frame
    /// replaces that with the actual panel size.
    ///
    /// ### Errors
    /// Propagates [`Scene::new`] config validation failures.
    pub fn new(settings: &Settings) -> constellation_core::Result<Self> {
        let dims = Dimensions::new(settings.window.width, settings.window.height);
        let scene = Scene::new(settings.field, dims)?;
        info!(particles = scene.field().len(), "viewer ready");

        Ok(Self {
            scene,
            background: settings.window.background,
        })
    }

    fn toggle_running(&mut self) {
        if self.scene.is_running() {
            self.scene.halt();
        } else {
            self.scene.resume();
        }
    }

    /// Resize notification for the drawing panel.
    ///
    /// ### Returns
    /// `true` if the size changed and the layout was regenerated.
    fn sync_dimensions(&mut self, rect: egui::Rect) -> bool {
        let dims = Dimensions::new(rect.width(), rect.height());
        if dims == self.scene.dimensions() {
            return false;
        }

        debug!(width = dims.width, height = dims.height, "surface resized");
        self.scene.resize(dims);
        true
    }

    /// Pointer move/leave notification for the drawing panel.
    fn sync_pointer(&mut self, origin: egui::Pos2, hover: Option<egui::Pos2>) {
        match hover {
            Some(p) => self.scene.pointer_moved(surface::screen_to_surface(origin, p)),
            None => self.scene.pointer_left(),
        }
    }

    fn pointer_label(&self) -> String {
        match self.scene.pointer().position {
            Some(p) => {
                let nearest = self
                    .scene
                    .field()
                    .find_nearest(p)
                    .map(|(id, d2)| format!(" nearest #{id} at {:.1}", d2.sqrt()))
                    .unwrap_or_default();
                format!("pointer = ({:.0}, {:.0}){nearest}", p.x, p.y)
            }
            None => "pointer = absent".to_string(),
        }
    }

    /// Builds the top panel UI (pause/resume, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.scene.is_running() { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.toggle_running();
                }

                if ui.button("Reset").clicked() {
                    self.scene.reset();
                }
            });
        });
    }

    /// Builds the bottom status bar (counts, pointer state, frame).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        let stats = self.scene.last_stats();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("frame = {}", self.scene.frame()));
                ui.separator();
                ui.label(format!("links = {}", stats.links));
                ui.label(format!("repelled = {}", stats.repelled));
                ui.label(format!("particles = {}", self.scene.field().len()));
                ui.separator();
                ui.label(self.pointer_label());
            });
        });
    }

    /// Builds the central panel the scene is drawn into.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::new().fill(surface::to_color32(self.background));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            self.sync_dimensions(rect);
            self.sync_pointer(rect.min, response.hover_pos());

            let mut surface = PainterSurface::new(&painter, rect.min, self.background);
            if self.scene.tick(&mut surface) {
                ctx.request_repaint();
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
