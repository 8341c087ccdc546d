//! Local flat-plane projection of geographic coordinates.
//!
//! Points are re-expressed in meters relative to the center of their bounding
//! box. Good enough for intra-city distances, wrong at continental scale.

use crate::place::{Place, ProjectedPlace};

/// Meters per degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 110_540.0;

/// Meters per degree of longitude at the equator. Shrinks with cos(latitude).
pub const METERS_PER_DEGREE_LNG_AT_EQUATOR: f64 = 111_320.0;

/// Min/max latitude and longitude over a set of places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Smallest box containing every place. `None` for an empty input.
    pub fn around<'a>(places: impl IntoIterator<Item = &'a Place>) -> Option<Self> {
        let mut places = places.into_iter();
        let first = places.next()?;
        let mut bbox = Self {
            min_lat: first.lat(),
            max_lat: first.lat(),
            min_lng: first.lng(),
            max_lng: first.lng(),
        };

        for place in places {
            bbox.min_lat = bbox.min_lat.min(place.lat());
            bbox.max_lat = bbox.max_lat.max(place.lat());
            bbox.min_lng = bbox.min_lng.min(place.lng());
            bbox.max_lng = bbox.max_lng.max(place.lng());
        }

        Some(bbox)
    }

    /// Center (lat, lng).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Equirectangular projection around a fixed center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalProjection {
    center_lat: f64,
    center_lng: f64,
    meters_per_degree_lng: f64,
}

impl LocalProjection {
    pub fn from_center(center_lat: f64, center_lng: f64) -> Self {
        Self {
            center_lat,
            center_lng,
            meters_per_degree_lng: METERS_PER_DEGREE_LNG_AT_EQUATOR
                * center_lat.to_radians().cos(),
        }
    }

    /// Projection centered on the bounding box of `places`.
    pub fn centered_on<'a>(places: impl IntoIterator<Item = &'a Place>) -> Option<Self> {
        let (lat, lng) = BoundingBox::around(places)?.center();
        Some(Self::from_center(lat, lng))
    }

    pub fn center(&self) -> (f64, f64) {
        (self.center_lat, self.center_lng)
    }

    pub fn project(&self, place: &Place) -> ProjectedPlace {
        ProjectedPlace::new(
            place.id(),
            (place.lng() - self.center_lng) * self.meters_per_degree_lng,
            (place.lat() - self.center_lat) * METERS_PER_DEGREE_LAT,
        )
    }
}

/// Projects `places` around the center of their own bounding box, keeping order.
pub fn project_places(places: &[&Place]) -> Vec<ProjectedPlace> {
    match LocalProjection::centered_on(places.iter().copied()) {
        Some(projection) => places.iter().map(|p| projection.project(p)).collect(),
        None => Vec::new(),
    }
}
