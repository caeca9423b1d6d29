#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod canvas;
mod energy_view;
mod input;
mod pacing;

use std::path::PathBuf;

use app::PendulumApp;
use dp_project::Scene;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let scene = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading scene");
            dp_project::load(&path)?
        }
        None => Scene::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                scene.display.width as f32 + app::SIDE_PANEL_WIDTH,
                scene.display.height as f32,
            ])
            .with_title("Double Pendulum (press R to reset)"),
        ..Default::default()
    };

    let app = PendulumApp::new(&scene)?;
    eframe::run_native(
        "Double Pendulum",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}
