//! route-sequencer
//!
//! Exact stop ordering for small routes: given a start, a handful of stops and
//! an optional end, find the visiting order with the least travel distance.
//! Runs entirely in-process as a fallback for an external routing service.

pub mod error;
pub mod place;
pub mod request;
pub mod projection;
pub mod traits;
pub mod matrix;
pub mod held_karp;
pub mod free_end;
pub mod solver;
pub mod candidate;

pub use error::{Error, PlaceRole, Result};
pub use place::{Place, ProjectedPlace};
pub use request::RouteRequest;
pub use solver::{solve, solve_places, solve_with, OptimalRoute, SolveOptions};
