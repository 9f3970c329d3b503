use nalgebra::{DMatrix, DVector};

/// Slack on barycentric coordinates, makes the simplex boundary inclusive.
pub(crate) const MEMBERSHIP_TOL: f64 = 1e-12;

/// Edge-matrix determinant magnitude below which a simplex counts as flat.
pub(crate) const DEGENERACY_EPS: f64 = 1e-12;

/// Matrix with column `j` equal to `vertices[j + 1] - vertices[0]`.
///
/// PRECONDITION: `vertices` holds `dim + 1` slices of length `dim`.
fn edge_matrix(vertices: &[&[f64]], dim: usize) -> DMatrix<f64> {
    DMatrix::<f64>::from_fn(dim, dim, |i, j| vertices[j + 1][i] - vertices[0][i])
}

/// Signed volume scale of a simplex, zero when the corners are affinely
/// dependent.
pub(crate) fn edge_determinant(vertices: &[&[f64]], dim: usize) -> f64 {
    edge_matrix(vertices, dim).determinant()
}

/// Barycentric coordinates of `point` with respect to the simplex spanned by
/// `vertices` (`dim + 1` corners in `dim` dimensions).
///
/// Solves the edge-matrix system `T * lambda = point - v0` and prepends the
/// remaining coordinate `1 - sum(lambda)`. Returns `None` when the simplex is
/// degenerate and the system has no unique solution.
pub(crate) fn barycentric_coordinates(vertices: &[&[f64]], point: &[f64]) -> Option<Vec<f64>> {
    let dim = point.len();
    debug_assert_eq!(vertices.len(), dim + 1);

    let t = edge_matrix(vertices, dim);
    let rhs = DVector::<f64>::from_fn(dim, |i, _| point[i] - vertices[0][i]);

    let lambda = t.lu().solve(&rhs)?;

    let mut coords = Vec::with_capacity(dim + 1);
    coords.push(1.0 - lambda.iter().sum::<f64>());
    coords.extend(lambda.iter().copied());
    Some(coords)
}

/// Whether barycentric coordinates describe a point inside the simplex or on
/// its boundary.
pub(crate) fn coordinates_inside(coords: &[f64], tol: f64) -> bool {
    coords.iter().all(|&c| c >= -tol)
}
