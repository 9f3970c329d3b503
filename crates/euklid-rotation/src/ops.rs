use glam::{DMat2, DMat3, DVec2, DVec3};

/// Rotate a set of 3D points by a rotation matrix.
///
/// # Arguments
///
/// * `points` - The points to rotate.
/// * `rotation` - A row-major rotation matrix.
/// * `dst` - A pre-allocated slice to store the rotated points.
///
/// PRECONDITION: `dst` has the same length as `points`.
pub fn rotate_points3d(points: &[[f64; 3]], rotation: &[[f64; 3]; 3], dst: &mut [[f64; 3]]) {
    assert_eq!(points.len(), dst.len());

    // rotation is row-major, glam is column-major
    let r = DMat3::from_cols(
        DVec3::new(rotation[0][0], rotation[1][0], rotation[2][0]),
        DVec3::new(rotation[0][1], rotation[1][1], rotation[2][1]),
        DVec3::new(rotation[0][2], rotation[1][2], rotation[2][2]),
    );

    for (dst, src) in dst.iter_mut().zip(points.iter()) {
        *dst = (r * DVec3::from_array(*src)).to_array();
    }
}

/// Rotate a set of 2D points by a rotation matrix.
///
/// # Arguments
///
/// * `points` - The points to rotate.
/// * `rotation` - A row-major rotation matrix.
/// * `dst` - A pre-allocated slice to store the rotated points.
///
/// PRECONDITION: `dst` has the same length as `points`.
pub fn rotate_points2d(points: &[[f64; 2]], rotation: &[[f64; 2]; 2], dst: &mut [[f64; 2]]) {
    assert_eq!(points.len(), dst.len());

    let r = DMat2::from_cols(
        DVec2::new(rotation[0][0], rotation[1][0]),
        DVec2::new(rotation[0][1], rotation[1][1]),
    );

    for (dst, src) in dst.iter_mut().zip(points.iter()) {
        *dst = (r * DVec2::from_array(*src)).to_array();
    }
}

/// Check whether a 3x3 matrix is a proper rotation.
///
/// Verifies `r * r^T = I` and `det(r) = 1` within `eps`.
pub fn is_rotation_matrix3(r: &[[f64; 3]; 3], eps: f64) -> bool {
    let m = DMat3::from_cols(
        DVec3::new(r[0][0], r[1][0], r[2][0]),
        DVec3::new(r[0][1], r[1][1], r[2][1]),
        DVec3::new(r[0][2], r[1][2], r[2][2]),
    );

    let diff = m * m.transpose() - DMat3::IDENTITY;
    let max_diff = diff
        .to_cols_array()
        .iter()
        .fold(0.0, |acc: f64, x| acc.max(x.abs()));

    max_diff < eps && (m.determinant() - 1.0).abs() < eps
}

/// Check whether a 2x2 matrix is a proper rotation.
///
/// Verifies `r * r^T = I` and `det(r) = 1` within `eps`.
pub fn is_rotation_matrix2(r: &[[f64; 2]; 2], eps: f64) -> bool {
    let m = DMat2::from_cols(
        DVec2::new(r[0][0], r[1][0]),
        DVec2::new(r[0][1], r[1][1]),
    );

    let diff = m * m.transpose() - DMat2::IDENTITY;
    let max_diff = diff
        .to_cols_array()
        .iter()
        .fold(0.0, |acc: f64, x| acc.max(x.abs()));

    max_diff < eps && (m.determinant() - 1.0).abs() < eps
}
