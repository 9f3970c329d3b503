use thiserror::Error;

/// An error type for convex hull membership tests.
#[derive(Error, Debug, PartialEq)]
pub enum HullError {
    /// Too few points to triangulate.
    #[error("convex hull triangulation requires at least {required} points, got {actual}")]
    InsufficientPoints {
        /// Minimum number of points required.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// The input points are coincident or collinear and span no area.
    #[error("input points are degenerate, no triangulation covers them")]
    DegenerateInput,

    /// A simplex of a caller-supplied triangulation has zero volume.
    #[error("simplex {index} is degenerate (zero volume)")]
    DegenerateSimplex {
        /// Index of the offending simplex.
        index: usize,
    },

    /// A coordinate is NaN or infinite.
    #[error("coordinates must be finite")]
    InvalidCoordinate,

    /// A query point does not match the dimension of the triangulation.
    #[error("query point has {actual} coordinates but the triangulation is {expected}-dimensional")]
    DimensionMismatch {
        /// Dimension of the triangulation.
        expected: usize,
        /// Number of coordinates in the query point.
        actual: usize,
    },

    /// The flat vertex or simplex storage is malformed.
    #[error("invalid triangulation storage: {0}")]
    InvalidStorage(&'static str),
}
