//! Seams between the route solver and its collaborators.

use crate::matrix::DistanceMatrix;
use crate::place::ProjectedPlace;

/// Provides a distance matrix for a set of projected points.
///
/// The matrix is indexed by the provided point order and must be square with
/// one row per point.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, points: &[ProjectedPlace]) -> DistanceMatrix;
}
