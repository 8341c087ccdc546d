//! Route ordering entry point.
//!
//! Projects the request, builds its distance matrix, runs the exact solver
//! (once, or once per candidate end) and inflates the straight-line total to
//! approximate road distance.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::free_end::cheapest_end;
use crate::held_karp::shortest_path;
use crate::matrix::EuclideanMatrix;
use crate::place::Place;
use crate::projection::project_places;
use crate::request::RouteRequest;
use crate::traits::DistanceMatrixProvider;

/// Multiplier from straight-line meters to estimated road meters.
pub const ROAD_DISTANCE_FACTOR: f64 = 1.1;

/// Default cap on stops per request.
pub const DEFAULT_MAX_STOPS: usize = 14;

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Applied to the solved straight-line total before it is reported.
    pub road_distance_factor: f64,
    /// Requests with more stops are rejected rather than solved.
    pub max_stops: usize,
    /// Evaluate free-end candidates on the rayon pool.
    pub parallel_candidates: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            road_distance_factor: ROAD_DISTANCE_FACTOR,
            max_stops: DEFAULT_MAX_STOPS,
            parallel_candidates: false,
        }
    }
}

/// The best visiting order found for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalRoute {
    /// The fixed end, or the stop chosen as end.
    pub end: Place,
    /// Remaining stops in visiting order, excluding start and end.
    pub stops: Vec<Place>,
    /// Estimated road distance in meters.
    pub meters: f64,
    /// Solved straight-line distance in meters.
    pub straight_line_meters: f64,
}

impl OptimalRoute {
    pub fn stop_ids(&self) -> Vec<&str> {
        self.stops.iter().map(Place::id).collect()
    }
}

/// Orders `request` using straight-line distances on the local projection.
pub fn solve(request: &RouteRequest, options: &SolveOptions) -> Result<OptimalRoute> {
    solve_with(request, options, &EuclideanMatrix)
}

/// Validates the places and solves in one step.
pub fn solve_places(
    start: Place,
    stops: Vec<Place>,
    end: Option<Place>,
    options: &SolveOptions,
) -> Result<OptimalRoute> {
    let request = RouteRequest::new(start, stops, end)?;
    solve(&request, options)
}

/// Orders `request` using distances from `provider`.
pub fn solve_with<M>(
    request: &RouteRequest,
    options: &SolveOptions,
    provider: &M,
) -> Result<OptimalRoute>
where
    M: DistanceMatrixProvider,
{
    let factor = options.road_distance_factor;
    if !factor.is_finite() || factor <= 0.0 {
        return Err(Error::InvalidDistanceFactor(factor));
    }

    let stop_count = request.stops().len();
    if stop_count > options.max_stops {
        warn!(stops = stop_count, max = options.max_stops, "route request over stop limit");
        return Err(Error::TooManyStops {
            count: stop_count,
            max: options.max_stops,
        });
    }

    debug!(
        stops = stop_count,
        fixed_end = request.end().is_some(),
        "solving route order"
    );

    let places = request.places();
    let projected = project_places(&places);
    let matrix = provider.matrix_for(&projected);
    if matrix.size() != places.len() {
        return Err(Error::invalid_matrix(format!(
            "provider returned {} rows for {} points",
            matrix.size(),
            places.len()
        )));
    }

    let solution = match request.end() {
        Some(_) => shortest_path(&matrix, 0, places.len() - 1)?,
        None => {
            let candidates: Vec<usize> = (1..=stop_count).collect();
            cheapest_end(&matrix, 0, &candidates, options.parallel_candidates)?
        }
    };

    let route = OptimalRoute {
        end: places[solution.end()].clone(),
        stops: solution
            .intermediates()
            .iter()
            .map(|&i| places[i].clone())
            .collect(),
        meters: solution.cost * factor,
        straight_line_meters: solution.cost,
    };

    debug!(end = route.end.id(), meters = route.meters, "route order solved");
    Ok(route)
}
