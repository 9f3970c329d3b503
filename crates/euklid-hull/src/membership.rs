use crate::error::HullError;
use crate::triangulation::Triangulation;

/// Specification of the convex hull to test against.
#[derive(Debug, Clone)]
pub enum HullSpec {
    /// A precomputed triangulation, used directly.
    Triangulation(Triangulation),
    /// A raw planar point set, the Delaunay triangulation is computed first.
    Points(Vec<[f64; 2]>),
}

/// Test which query points lie inside a convex hull, boundary inclusive.
///
/// A point is a member when some simplex of the hull triangulation contains
/// it. When `hull` is a raw point set its Delaunay triangulation is computed
/// first; a precomputed [`Triangulation`] is used as given, in any dimension.
///
/// # Arguments
///
/// * `points` - The query points, each with as many coordinates as the hull
///   dimension.
/// * `hull` - The hull specification.
///
/// # Returns
///
/// One boolean per query point, or an error when the triangulation cannot be
/// built or a query point is malformed.
///
/// Example:
///
/// ```
/// use euklid_hull::{is_in_hull, HullSpec};
///
/// let square = HullSpec::Points(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
/// let members = is_in_hull(&[[0.5, 0.5], [2.0, 2.0], [0.0, 0.0]], &square).unwrap();
/// assert_eq!(members, vec![true, false, true]);
/// ```
pub fn is_in_hull<P: AsRef<[f64]>>(points: &[P], hull: &HullSpec) -> Result<Vec<bool>, HullError> {
    match hull {
        HullSpec::Triangulation(triangulation) => membership(points, triangulation),
        HullSpec::Points(raw) => {
            let triangulation = Triangulation::delaunay(raw)?;
            membership(points, &triangulation)
        }
    }
}

fn membership<P: AsRef<[f64]>>(
    points: &[P],
    triangulation: &Triangulation,
) -> Result<Vec<bool>, HullError> {
    let mut members = Vec::with_capacity(points.len());

    for point in points {
        let point = point.as_ref();
        if point.len() != triangulation.dim() {
            return Err(HullError::DimensionMismatch {
                expected: triangulation.dim(),
                actual: point.len(),
            });
        }
        if point.iter().any(|coord| !coord.is_finite()) {
            return Err(HullError::InvalidCoordinate);
        }

        members.push(triangulation.find_simplex(point).is_some());
    }

    Ok(members)
}
