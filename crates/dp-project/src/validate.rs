//! Scene validation logic.

use crate::schema::Scene;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scene(scene: &Scene) -> Result<(), ValidationError> {
    if scene.version == 0 || scene.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scene.version,
        });
    }

    let p = &scene.pendulum;
    for (field, value) in [
        ("pendulum.theta1", p.theta1),
        ("pendulum.theta2", p.theta2),
        ("pendulum.omega1", p.omega1),
        ("pendulum.omega2", p.omega2),
    ] {
        require_finite(field, value)?;
    }
    for (field, value) in [
        ("pendulum.length1", p.length1),
        ("pendulum.length2", p.length2),
        ("pendulum.mass1", p.mass1),
        ("pendulum.mass2", p.mass2),
        ("pendulum.gravity", p.gravity),
        ("pendulum.dt", p.dt),
        ("reset.theta_std", scene.reset.theta_std),
        ("reset.omega_std", scene.reset.omega_std),
        ("reset.mass1_cap", scene.reset.mass1_cap),
        ("reset.mass2_cap_factor", scene.reset.mass2_cap_factor),
    ] {
        require_positive(field, value)?;
    }

    let d = &scene.display;
    for (field, value) in [
        ("display.width", d.width),
        ("display.height", d.height),
        ("display.fps", d.fps),
    ] {
        if value == 0 {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
                reason: "must be non-zero".to_string(),
            });
        }
    }

    Ok(())
}

fn require_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        })
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_is_valid() {
        validate_scene(&Scene::default()).unwrap();
    }

    #[test]
    fn rejects_future_version() {
        let scene = Scene {
            version: crate::LATEST_VERSION + 1,
            ..Scene::default()
        };
        assert!(matches!(
            validate_scene(&scene),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_parameters() {
        let mut scene = Scene::default();
        scene.pendulum.dt = -0.01;
        let err = validate_scene(&scene).unwrap_err();
        assert!(err.to_string().contains("pendulum.dt"));

        let mut scene = Scene::default();
        scene.reset.omega_std = 0.0;
        assert!(validate_scene(&scene).is_err());
    }

    #[test]
    fn rejects_zero_fps_and_nan_angles() {
        let mut scene = Scene::default();
        scene.display.fps = 0;
        assert!(validate_scene(&scene).is_err());

        let mut scene = Scene::default();
        scene.pendulum.theta2 = f64::NAN;
        assert!(validate_scene(&scene).is_err());
    }
}
