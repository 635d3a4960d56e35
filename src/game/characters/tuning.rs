// Movement tuning for the giraffe cat

use serde::{Deserialize, Serialize};

/// A tuning value that makes no physical sense
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid tuning value {field} = {value}: must be {requirement}")]
pub struct TuningError {
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

/// Physics and animation constants of the giraffe cat.
///
/// Velocities are in pixels per reference tick (1/60 s); rates are per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatTuning {
    /// Horizontal velocity gained per second of held direction
    pub run_acceleration: f32,
    /// Horizontal velocity lost per second
    pub friction: f32,
    /// Horizontal speed cap
    pub max_velocity_x: f32,
    /// Downward velocity gained per second
    pub gravity: f32,
    /// Upward velocity gained per second while the jump is held
    pub jump_acceleration: f32,
    /// Seconds a held jump keeps adding lift
    pub max_jump_duration: f32,
    /// Y coordinate of the ground line
    pub ground_y: f32,
    pub run_frame_duration: f32,
    pub jump_frame_duration: f32,
    /// Run frame reused as the standing pose
    pub standing_frame: usize,
}

pub const BASE_TUNING: CatTuning = CatTuning {
    run_acceleration: 20.0,
    friction: 10.0,
    max_velocity_x: 5.0,
    gravity: 30.0,
    jump_acceleration: 72.0,
    max_jump_duration: 0.15,
    ground_y: 240.0,
    run_frame_duration: 0.05,
    jump_frame_duration: 0.1,
    standing_frame: 3,
};

impl Default for CatTuning {
    fn default() -> Self {
        BASE_TUNING
    }
}

impl CatTuning {
    /// Reject values the integrator can't work with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("run_acceleration", self.run_acceleration),
            ("max_velocity_x", self.max_velocity_x),
            ("gravity", self.gravity),
            ("jump_acceleration", self.jump_acceleration),
            ("max_jump_duration", self.max_jump_duration),
            ("run_frame_duration", self.run_frame_duration),
            ("jump_frame_duration", self.jump_frame_duration),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError {
                    field,
                    value,
                    requirement: "greater than zero",
                });
            }
        }
        if !(self.friction >= 0.0) {
            return Err(TuningError {
                field: "friction",
                value: self.friction,
                requirement: "zero or more",
            });
        }
        if !self.ground_y.is_finite() {
            return Err(TuningError {
                field: "ground_y",
                value: self.ground_y,
                requirement: "finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning() {
        let tuning = CatTuning::default();
        assert_eq!(tuning.run_acceleration, 20.0);
        assert_eq!(tuning.friction, 10.0);
        assert_eq!(tuning.max_velocity_x, 5.0);
        assert_eq!(tuning.standing_frame, 3);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive() {
        let tuning = CatTuning {
            gravity: 0.0,
            ..CatTuning::default()
        };
        let err = tuning.validate().unwrap_err();
        assert_eq!(err.field, "gravity");
        assert_eq!(
            err.to_string(),
            "Invalid tuning value gravity = 0: must be greater than zero"
        );
    }

    #[test]
    fn test_allows_zero_friction() {
        let tuning = CatTuning {
            friction: 0.0,
            ..CatTuning::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_rejects_nan() {
        let tuning = CatTuning {
            max_jump_duration: f32::NAN,
            ..CatTuning::default()
        };
        assert_eq!(tuning.validate().unwrap_err().field, "max_jump_duration");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning: CatTuning = serde_json::from_str(r#"{ "gravity": 45.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 45.0);
        assert_eq!(tuning.friction, BASE_TUNING.friction);
    }
}
