use spade::{DelaunayTriangulation, Point2, Triangulation as _};

use crate::error::HullError;
use crate::simplex::{
    barycentric_coordinates, coordinates_inside, edge_determinant, DEGENERACY_EPS, MEMBERSHIP_TOL,
};

/// A simplicial decomposition of a convex region.
///
/// Vertices and simplices are stored flat: `dim` coordinates per vertex and
/// `dim + 1` vertex indices per simplex. A triangulation can be built from a
/// planar point set with [`Triangulation::delaunay`] or supplied precomputed
/// in any dimension with [`Triangulation::new`].
#[derive(Debug, Clone)]
pub struct Triangulation {
    dim: usize,
    vertices: Vec<f64>,
    simplices: Vec<usize>,
}

impl Triangulation {
    /// Build a triangulation from precomputed flat storage.
    ///
    /// # Arguments
    ///
    /// * `dim` - Dimension of the space.
    /// * `vertices` - `num_vertices * dim` coordinates.
    /// * `simplices` - `num_simplices * (dim + 1)` vertex indices.
    ///
    /// # Returns
    ///
    /// The validated triangulation. Malformed storage fails with
    /// [`HullError::InvalidStorage`], non-finite coordinates with
    /// [`HullError::InvalidCoordinate`], and a zero-volume simplex with
    /// [`HullError::DegenerateSimplex`].
    pub fn new(dim: usize, vertices: Vec<f64>, simplices: Vec<usize>) -> Result<Self, HullError> {
        if dim == 0 {
            return Err(HullError::InvalidStorage("dimension must be at least 1"));
        }
        if vertices.is_empty() || vertices.len() % dim != 0 {
            return Err(HullError::InvalidStorage(
                "vertex storage must hold `dim` coordinates per vertex",
            ));
        }
        if simplices.is_empty() || simplices.len() % (dim + 1) != 0 {
            return Err(HullError::InvalidStorage(
                "simplex storage must hold `dim + 1` vertex indices per simplex",
            ));
        }
        if vertices.iter().any(|coord| !coord.is_finite()) {
            return Err(HullError::InvalidCoordinate);
        }

        let num_vertices = vertices.len() / dim;
        if simplices.iter().any(|&index| index >= num_vertices) {
            return Err(HullError::InvalidStorage(
                "simplex vertex index out of bounds",
            ));
        }

        let triangulation = Self {
            dim,
            vertices,
            simplices,
        };

        // reject flat simplices up front so that membership queries cannot
        // silently skip part of the hull
        for index in 0..triangulation.num_simplices() {
            let corners = triangulation.simplex_corners(index);
            if edge_determinant(&corners, dim).abs() <= DEGENERACY_EPS {
                return Err(HullError::DegenerateSimplex { index });
            }
        }

        Ok(triangulation)
    }

    /// Compute the Delaunay triangulation of a planar point set.
    ///
    /// The triangulation covers the convex hull of `points`. Construction is
    /// delegated to the `spade` crate.
    ///
    /// # Arguments
    ///
    /// * `points` - The planar point set.
    ///
    /// # Returns
    ///
    /// The triangulation, or an error: [`HullError::InsufficientPoints`] for
    /// fewer than 3 points, [`HullError::InvalidCoordinate`] for NaN or
    /// infinite coordinates, and [`HullError::DegenerateInput`] when all
    /// points are coincident or collinear.
    ///
    /// Example:
    ///
    /// ```
    /// use euklid_hull::Triangulation;
    ///
    /// let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    /// let triangulation = Triangulation::delaunay(&square).unwrap();
    /// assert_eq!(triangulation.dim(), 2);
    /// assert_eq!(triangulation.num_simplices(), 2);
    /// ```
    pub fn delaunay(points: &[[f64; 2]]) -> Result<Self, HullError> {
        if points.len() < 3 {
            return Err(HullError::InsufficientPoints {
                required: 3,
                actual: points.len(),
            });
        }

        let elements = points
            .iter()
            .map(|point| Point2::new(point[0], point[1]))
            .collect::<Vec<_>>();

        let delaunay: DelaunayTriangulation<Point2<f64>> =
            DelaunayTriangulation::bulk_load(elements).map_err(|_| HullError::InvalidCoordinate)?;

        if delaunay.num_inner_faces() == 0 {
            return Err(HullError::DegenerateInput);
        }

        // bulk loading reorders the input, read the vertices back in handle
        // order so that face indices stay consistent
        let mut vertices = Vec::with_capacity(delaunay.num_vertices() * 2);
        for vertex in delaunay.vertices() {
            let position = vertex.position();
            vertices.push(position.x);
            vertices.push(position.y);
        }

        let mut simplices = Vec::with_capacity(delaunay.num_inner_faces() * 3);
        for face in delaunay.inner_faces() {
            for vertex in face.vertices() {
                simplices.push(vertex.fix().index());
            }
        }

        log::debug!(
            "delaunay triangulation: {} vertices, {} triangles",
            delaunay.num_vertices(),
            delaunay.num_inner_faces()
        );

        Ok(Self {
            dim: 2,
            vertices,
            simplices,
        })
    }

    /// Dimension of the space the triangulation lives in.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / self.dim
    }

    /// Number of simplices.
    pub fn num_simplices(&self) -> usize {
        self.simplices.len() / (self.dim + 1)
    }

    /// Coordinates of the vertex at `index`.
    pub fn vertex(&self, index: usize) -> &[f64] {
        &self.vertices[index * self.dim..(index + 1) * self.dim]
    }

    /// Vertex indices of the simplex at `index`.
    pub fn simplex(&self, index: usize) -> &[usize] {
        let stride = self.dim + 1;
        &self.simplices[index * stride..(index + 1) * stride]
    }

    /// Find the simplex containing `point`, boundary inclusive.
    ///
    /// Returns the index of the first containing simplex, or `None` when the
    /// point lies outside every simplex.
    ///
    /// PRECONDITION: `point` has `dim` coordinates.
    pub fn find_simplex(&self, point: &[f64]) -> Option<usize> {
        assert_eq!(point.len(), self.dim);

        (0..self.num_simplices()).find(|&index| {
            let corners = self.simplex_corners(index);
            match barycentric_coordinates(&corners, point) {
                Some(coords) => coordinates_inside(&coords, MEMBERSHIP_TOL),
                None => false,
            }
        })
    }

    fn simplex_corners(&self, index: usize) -> Vec<&[f64]> {
        self.simplex(index)
            .iter()
            .map(|&vertex_index| self.vertex(vertex_index))
            .collect()
    }
}
