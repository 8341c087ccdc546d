//! Validated route requests.

use std::collections::HashSet;

use crate::error::{Error, PlaceRole, Result};
use crate::place::Place;

/// A start, at least two stops to order, and an optional fixed end.
///
/// Only obtainable through [`RouteRequest::new`], so every value in
/// circulation already satisfies the solver's input requirements.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    start: Place,
    stops: Vec<Place>,
    end: Option<Place>,
}

impl RouteRequest {
    /// Fewest stops a request may carry.
    pub const MIN_STOPS: usize = 2;

    pub fn new(start: Place, stops: Vec<Place>, end: Option<Place>) -> Result<Self> {
        validate_place(&start, PlaceRole::Start)?;

        if let Some(end) = &end {
            validate_place(end, PlaceRole::End)?;
            if end.id() == start.id() {
                return Err(Error::EndIsStart {
                    id: end.id().to_string(),
                });
            }
        }

        let mut seen = HashSet::with_capacity(stops.len());
        for (index, stop) in stops.iter().enumerate() {
            validate_place(stop, PlaceRole::Stop(index))?;
            if !seen.insert(stop.id()) {
                return Err(Error::DuplicateStop {
                    id: stop.id().to_string(),
                });
            }
        }

        if stops.len() < Self::MIN_STOPS {
            return Err(Error::TooFewStops {
                count: stops.len(),
                min: Self::MIN_STOPS,
            });
        }

        Ok(Self { start, stops, end })
    }

    pub fn start(&self) -> &Place {
        &self.start
    }

    pub fn stops(&self) -> &[Place] {
        &self.stops
    }

    pub fn end(&self) -> Option<&Place> {
        self.end.as_ref()
    }

    /// All places in solver index order: start, stops, then end if fixed.
    pub fn places(&self) -> Vec<&Place> {
        let mut places = Vec::with_capacity(self.stops.len() + 2);
        places.push(&self.start);
        places.extend(self.stops.iter());
        if let Some(end) = &self.end {
            places.push(end);
        }
        places
    }
}

fn validate_place(place: &Place, role: PlaceRole) -> Result<()> {
    if place.id().is_empty() {
        return Err(Error::MissingId { role });
    }
    if !place.has_finite_coords() {
        return Err(Error::NonFiniteCoordinate {
            role,
            lat: place.lat(),
            lng: place.lng(),
        });
    }
    Ok(())
}
