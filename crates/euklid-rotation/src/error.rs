use thiserror::Error;

/// An error type for rotation matrix construction.
#[derive(Error, Debug, PartialEq)]
pub enum RotationError {
    /// A direction vector with (numerically) zero length was passed.
    #[error("cannot compute a rotation from a zero-length vector")]
    ZeroVector,

    /// The rotation angle is NaN or infinite.
    #[error("rotation angle must be finite, got {0}")]
    NonFiniteAngle(f64),
}
