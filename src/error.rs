//! Error types shared by the shape, collision and world modules.

use thiserror::Error;

/// Failures raised by shape construction and collision queries.
///
/// Budget exhaustion inside GJK/EPA is not represented here:
/// those paths degrade to "no overlap" or a best-effort normal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// A shape was built (or resized) from unusable parameters.
    #[error("Invalid shape parameters: {0}")]
    InvalidShapeParameters(String),

    /// The shape variant cannot perform the requested operation.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    /// A collision normal was requested for a pair that does not overlap.
    #[error("No active collision between the given shapes")]
    NoActiveCollision,
}

pub type Result<T> = std::result::Result<T, CollisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CollisionError::InvalidShapeParameters("radius must be positive".into());
        assert_eq!(err.to_string(), "Invalid shape parameters: radius must be positive");

        let err = CollisionError::UnsupportedOperation("rectangle rotation");
        assert_eq!(err.to_string(), "Unsupported operation: rectangle rotation");

        assert_eq!(
            CollisionError::NoActiveCollision.to_string(),
            "No active collision between the given shapes"
        );
    }
}
