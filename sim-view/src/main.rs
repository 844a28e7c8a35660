//! Application entry point for the constellation viewer.
//!
//! This binary parses the command line, loads layered settings, installs
//! logging, and delegates all interactive logic and rendering to
//! [`Viewer`] from the `viewer` module.

mod settings;
mod surface;
mod viewer;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

use settings::Settings;
use viewer::Viewer;

#[derive(Parser)]
#[command(name = "constellation")]
#[command(about = "Pointer-reactive particle grid with proximity links")]
struct Cli {
    /// Extra TOML settings file, applied over the user config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid spacing, overriding every settings layer
    #[arg(short, long)]
    spacing: Option<f32>,

    /// Run in verbose mode
    #[arg(short, long)]
    verbose: bool,
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if settings are invalid or eframe fails to create the window.
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag when set.
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::load(cli.config.as_deref(), cli.spacing)?;
    tracing::info!(
        spacing = settings.field.spacing,
        influence_radius = settings.field.influence_radius,
        "loaded settings"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window.title.clone())
            .with_inner_size([settings.window.width, settings.window.height]),
        ..Default::default()
    };

    let title = settings.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(&settings)?))),
    )
    .map_err(|e| eyre!("failed to run viewer: {e}"))
}
