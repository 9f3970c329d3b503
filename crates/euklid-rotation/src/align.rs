use glam::{DMat3, DVec3};

use crate::error::RotationError;

/// Norm below which an input vector is treated as zero-length.
const MIN_NORM: f64 = 1e-10;

/// Tolerance deciding when two unit directions coincide or oppose.
const ALIGN_TOL: f64 = 1e-10;

/// Compute the rotation matrix that rotates the direction of `p` onto the
/// direction of `q`.
///
/// The matrix acts on directions only, the magnitudes of `p` and `q` are
/// ignored. The result `r` is a proper rotation (orthogonal, determinant +1)
/// in row-major layout satisfying `r * normalize(p) == normalize(q)`.
///
/// The rotation is built as a change of basis: a planar rotation by the angle
/// between the two directions, expressed in the basis spanned by
/// `normalize(p)`, the component of `normalize(q)` orthogonal to it, and
/// their cross product.
///
/// When `p` and `q` point in opposite directions that plane is undefined; the
/// returned matrix is then the half-turn about a deterministically chosen
/// axis orthogonal to `p` (the cross product of `p` with the standard basis
/// vector least aligned with it).
///
/// # Arguments
///
/// * `p` - The start direction.
/// * `q` - The goal direction.
///
/// # Returns
///
/// The 3x3 rotation matrix, or [`RotationError::ZeroVector`] if either input
/// has zero length.
///
/// Example:
///
/// ```
/// use euklid_rotation::rotation_between_vectors;
///
/// let rotation = rotation_between_vectors(&[1.0, 0.0, 0.0], &[0.0, 2.0, 0.0]).unwrap();
///
/// // a quarter turn about the z axis
/// let expected = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
/// for i in 0..3 {
///     for j in 0..3 {
///         assert!((rotation[i][j] - expected[i][j]).abs() < 1e-12);
///     }
/// }
/// ```
pub fn rotation_between_vectors(
    p: &[f64; 3],
    q: &[f64; 3],
) -> Result<[[f64; 3]; 3], RotationError> {
    let p = normalized(DVec3::from_array(*p))?;
    let q = normalized(DVec3::from_array(*q))?;

    // already aligned, tolerance instead of an exact zero-norm comparison
    if (p - q).length() < ALIGN_TOL {
        return Ok(to_rows(DMat3::IDENTITY));
    }

    let scal = p.dot(q);
    let cross = p.cross(q);
    let ncross = cross.length();

    // opposite directions span no unique plane, rotate half a turn about a
    // fixed axis orthogonal to p
    if ncross < ALIGN_TOL {
        return Ok(to_rows(half_turn(orthogonal_axis(p))));
    }

    // rotation by the angle between p and q, expressed in the basis
    // {p, midvec, cross} where midvec is the in-plane direction orthogonal
    // to p
    let g = DMat3::from_cols_array(&[
        scal, ncross, 0.0, //
        -ncross, scal, 0.0, //
        0.0, 0.0, 1.0,
    ]);
    let midvec = (q - scal * p).normalize();
    let basis = DMat3::from_cols(p, midvec, cross);

    Ok(to_rows(basis * g * basis.inverse()))
}

/// Normalize `v`, failing on zero-length input.
fn normalized(v: DVec3) -> Result<DVec3, RotationError> {
    let norm = v.length();
    if norm < MIN_NORM {
        return Err(RotationError::ZeroVector);
    }
    Ok(v / norm)
}

/// Unit vector orthogonal to `v`, built from the standard basis vector least
/// aligned with `v`.
fn orthogonal_axis(v: DVec3) -> DVec3 {
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
    let e = if ax <= ay && ax <= az {
        DVec3::X
    } else if ay <= az {
        DVec3::Y
    } else {
        DVec3::Z
    };
    v.cross(e).normalize()
}

/// Rotation by pi about `axis`: 2aa^T - I.
///
/// PRECONDITION: axis is a unit vector.
fn half_turn(axis: DVec3) -> DMat3 {
    let a = axis;
    DMat3::from_cols_array(&[
        2.0 * a.x * a.x - 1.0,
        2.0 * a.x * a.y,
        2.0 * a.x * a.z,
        2.0 * a.x * a.y,
        2.0 * a.y * a.y - 1.0,
        2.0 * a.y * a.z,
        2.0 * a.x * a.z,
        2.0 * a.y * a.z,
        2.0 * a.z * a.z - 1.0,
    ])
}

/// Convert a column-major glam matrix into row-major nested arrays.
fn to_rows(m: DMat3) -> [[f64; 3]; 3] {
    m.transpose().to_cols_array_2d()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::is_rotation_matrix3;
    use approx::assert_relative_eq;

    fn apply(r: &[[f64; 3]; 3], v: &[f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for i in 0..3 {
            out[i] = r[i][0] * v[0] + r[i][1] * v[1] + r[i][2] * v[2];
        }
        out
    }

    fn unit(v: &[f64; 3]) -> [f64; 3] {
        let n = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        [v[0] / n, v[1] / n, v[2] / n]
    }

    #[test]
    fn test_quarter_turn_about_z() -> Result<(), RotationError> {
        let rotation = rotation_between_vectors(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0])?;
        let expected = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(rotation[i][j], expected[i][j], epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_same_direction_is_identity() -> Result<(), RotationError> {
        let rotation = rotation_between_vectors(&[0.3, -1.2, 2.5], &[0.3, -1.2, 2.5])?;
        let expected = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(rotation, expected);
        Ok(())
    }

    #[test]
    fn test_scaling_is_ignored() -> Result<(), RotationError> {
        // parallel vectors of different lengths still short-circuit to identity
        let rotation = rotation_between_vectors(&[0.5, 0.5, 0.0], &[3.0, 3.0, 0.0])?;
        let expected = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(rotation[i][j], expected[i][j], epsilon = 1e-12);
            }
        }
        Ok(())
    }

    #[test]
    fn test_maps_start_direction_to_goal_direction() -> Result<(), RotationError> {
        let pairs = [
            ([1.0, 2.0, 3.0], [-4.0, 0.5, 1.0]),
            ([0.0, 0.0, 2.0], [1.0, 1.0, 1.0]),
            ([-1.0, 4.0, -2.0], [3.0, -1.0, 0.5]),
            ([10.0, 0.1, 0.0], [0.0, -5.0, 0.2]),
        ];
        for (p, q) in pairs {
            let rotation = rotation_between_vectors(&p, &q)?;
            let rotated = apply(&rotation, &unit(&p));
            let goal = unit(&q);
            for i in 0..3 {
                assert_relative_eq!(rotated[i], goal[i], epsilon = 1e-9);
            }
        }
        Ok(())
    }

    #[test]
    fn test_result_is_proper_rotation() -> Result<(), RotationError> {
        let pairs = [
            ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([1.0, 2.0, 3.0], [-4.0, 0.5, 1.0]),
            ([0.2, -0.3, 0.9], [-0.2, 0.3, -0.8]),
        ];
        for (p, q) in pairs {
            let rotation = rotation_between_vectors(&p, &q)?;
            assert!(is_rotation_matrix3(&rotation, 1e-9));
        }
        Ok(())
    }

    #[test]
    fn test_antiparallel_is_half_turn() -> Result<(), RotationError> {
        let p = [1.0, 0.0, 0.0];
        let q = [-1.0, 0.0, 0.0];
        let rotation = rotation_between_vectors(&p, &q)?;

        for row in &rotation {
            for value in row {
                assert!(value.is_finite());
            }
        }
        assert!(is_rotation_matrix3(&rotation, 1e-9));

        let rotated = apply(&rotation, &p);
        for i in 0..3 {
            assert_relative_eq!(rotated[i], q[i], epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_antiparallel_generic_direction() -> Result<(), RotationError> {
        let p = [0.3, -0.4, 1.2];
        let q = [-0.3, 0.4, -1.2];
        let rotation = rotation_between_vectors(&p, &q)?;
        assert!(is_rotation_matrix3(&rotation, 1e-9));

        let rotated = apply(&rotation, &unit(&p));
        let goal = unit(&q);
        for i in 0..3 {
            assert_relative_eq!(rotated[i], goal[i], epsilon = 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_zero_vector_is_rejected() {
        let result = rotation_between_vectors(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0]);
        assert_eq!(result, Err(RotationError::ZeroVector));

        let result = rotation_between_vectors(&[1.0, 0.0, 0.0], &[0.0, 0.0, 0.0]);
        assert_eq!(result, Err(RotationError::ZeroVector));
    }
}
