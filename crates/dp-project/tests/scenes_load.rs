//! Load the scene files shipped in the repository.

use std::path::PathBuf;

use dp_project::{Scene, load};

fn scenes_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // go to crates
    dir.pop(); // go to repo root
    dir.push("scenes");
    dir
}

#[test]
fn default_yaml_matches_builtin_defaults() {
    let path = scenes_dir().join("default.yaml");
    let scene = load(&path).expect("default scene loads");
    assert_eq!(scene, Scene::default());
}

#[test]
fn json_scene_builds_state() {
    let path = scenes_dir().join("heavy_lower_bob.json");
    let scene = load(&path).expect("json scene loads");

    assert_eq!(scene.seed, Some(1234));
    let state = scene.initial_state().unwrap();
    assert_eq!(state.params().mass2, 4.0);
    assert_eq!(state.dt(), 0.005);
    // Reset block omitted: defaults apply.
    assert_eq!(scene.reset_policy().unwrap(), dp_sim::ResetPolicy::default());
}
