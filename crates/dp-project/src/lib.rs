//! dp-project: scene file format and validation.
//!
//! A scene holds the initial pendulum, the display settings and the reset
//! distribution. YAML is the primary format; JSON is accepted too.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_scene};

pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Simulation setup error: {0}")]
    Sim(#[from] dp_sim::SimError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<Scene> {
    let content = std::fs::read_to_string(path)?;
    let scene: Scene = serde_yaml::from_str(&content)?;
    validate_scene(&scene)?;
    Ok(scene)
}

pub fn save_yaml(path: &std::path::Path, scene: &Scene) -> ProjectResult<()> {
    validate_scene(scene)?;
    let content = serde_yaml::to_string(scene)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Scene> {
    let content = std::fs::read_to_string(path)?;
    let scene: Scene = serde_json::from_str(&content)?;
    validate_scene(&scene)?;
    Ok(scene)
}

pub fn save_json(path: &std::path::Path, scene: &Scene) -> ProjectResult<()> {
    validate_scene(scene)?;
    let content = serde_json::to_string_pretty(scene)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &std::path::Path) -> ProjectResult<Scene> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
