#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::RotationError;

mod align;
pub use align::rotation_between_vectors;

mod planar;
pub use planar::rotation_matrix_2d;

mod ops;
pub use ops::{is_rotation_matrix2, is_rotation_matrix3, rotate_points2d, rotate_points3d};
