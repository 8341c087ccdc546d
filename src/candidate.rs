//! Outbound route candidate for a solved route.
//!
//! The orchestration layer merges this with candidates from the external
//! routing service; `method` tells them apart.

use serde::{Deserialize, Serialize};

use crate::solver::OptimalRoute;

pub const METERS_PER_MILE: f64 = 1609.344;

/// How a route candidate was produced. Candidates from the external service
/// are labelled by the orchestration layer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteMethod {
    /// Computed locally by the exact solver.
    #[serde(rename = "tsp")]
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub meters: i64,
    pub display_distance: String,
    /// Stop ids in visiting order.
    pub order: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub method: RouteMethod,
    /// Id of the place the route ends at.
    #[serde(rename = "destination")]
    pub end: String,
    #[serde(rename = "bike", default, skip_serializing_if = "Option::is_none")]
    pub bike_route: Option<RouteSummary>,
    #[serde(rename = "car", default, skip_serializing_if = "Option::is_none")]
    pub car_route: Option<RouteSummary>,
}

/// Miles with one decimal, e.g. `"3.2 mi"`.
pub fn display_distance(meters: f64) -> String {
    format!("{:.1} mi", meters / METERS_PER_MILE)
}

impl From<&OptimalRoute> for RouteSummary {
    fn from(route: &OptimalRoute) -> Self {
        Self {
            meters: route.meters as i64,
            display_distance: display_distance(route.meters),
            order: route.stops.iter().map(|p| p.id().to_string()).collect(),
        }
    }
}

impl From<&OptimalRoute> for RouteCandidate {
    // Straight-line estimates carry no mode, so the summary is filed under bike.
    fn from(route: &OptimalRoute) -> Self {
        Self {
            method: RouteMethod::Manual,
            end: route.end.id().to_string(),
            bike_route: Some(RouteSummary::from(route)),
            car_route: None,
        }
    }
}
