//! Places to visit, in geographic and in projected form.

use serde::{Deserialize, Serialize};

/// A visitable location identified by a caller-supplied id (e.g. a place id).
///
/// Coordinates are degrees. A place never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    id: String,
    lat: f64,
    lng: f64,
}

impl Place {
    pub fn new(id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Location coordinates (lat, lng).
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub(crate) fn has_finite_coords(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// A place re-expressed in planar meters relative to a local origin.
///
/// `x` grows east, `y` grows north.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedPlace {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl ProjectedPlace {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    /// Straight-line distance in meters on the projection plane.
    pub fn distance_to(&self, other: &ProjectedPlace) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
