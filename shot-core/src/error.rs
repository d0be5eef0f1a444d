//! Errors raised by the configuration surface.
//!
//! The physics itself never fails; degenerate inputs are absorbed by the
//! numeric guards in [`crate::types::constants`].

use thiserror::Error;

/// Error type for material and condition loading.
#[derive(Error, Debug)]
pub enum MaterialError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Material not found: {0}")]
    NotFound(String),

    #[error("Invalid material '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MaterialError::NotFound("tour_ball".to_string());
        assert_eq!(err.to_string(), "Material not found: tour_ball");

        let err = MaterialError::Invalid {
            name: "soft".to_string(),
            reason: "mass must be positive, got 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid material 'soft': mass must be positive, got 0"
        );
    }

    #[test]
    fn test_yaml_error_converts() {
        let parse: Result<crate::types::BallProperties, _> = serde_yaml::from_str("mass: [");
        let err: MaterialError = parse.unwrap_err().into();
        assert!(matches!(err, MaterialError::Parse(_)));
    }
}
