//! Pairwise distance matrices.

use crate::error::{Error, Result};
use crate::place::ProjectedPlace;
use crate::traits::DistanceMatrixProvider;

/// Square matrix of non-negative distances in meters, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a `size`×`size` matrix with entry (i, j) = `distance(i, j)`.
    pub fn from_fn(size: usize, mut distance: impl FnMut(usize, usize) -> f64) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                cells.push(distance(i, j));
            }
        }
        Self { size, cells }
    }

    /// Builds a matrix from externally supplied rows, rejecting anything that
    /// is not square or holds a negative or non-finite entry.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::invalid_matrix(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            for (j, value) in row.into_iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(Error::invalid_matrix(format!(
                        "entry ({i}, {j}) is {value}"
                    )));
                }
                cells.push(value);
            }
        }
        Ok(Self { size, cells })
    }

    /// Number of points (rows).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.size + to]
    }

    /// Sum of consecutive legs along `order`.
    pub fn path_cost(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .fold(0.0, |total, leg| total + self.get(leg[0], leg[1]))
    }
}

/// Straight-line distances on the projection plane.
///
/// Ignores roads entirely; callers inflate the result to approximate them.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanMatrix;

impl DistanceMatrixProvider for EuclideanMatrix {
    fn matrix_for(&self, points: &[ProjectedPlace]) -> DistanceMatrix {
        DistanceMatrix::from_fn(points.len(), |i, j| {
            if i == j {
                0.0
            } else {
                points[i].distance_to(&points[j])
            }
        })
    }
}
