//! Choosing the end point when the caller does not fix one.

use rayon::prelude::*;
use tracing::trace;

use crate::error::{Error, Result};
use crate::held_karp::{shortest_path, PathSolution};
use crate::matrix::DistanceMatrix;

/// Solves once per candidate end and keeps the cheapest path.
///
/// Candidates are compared in the order given; the first strictly cheaper
/// one wins, so the outcome is the same whether or not `parallel` is set.
/// A candidate with no finite path is skipped; the selection only fails with
/// [`Error::Unreachable`] when every candidate is.
pub fn cheapest_end(
    matrix: &DistanceMatrix,
    start: usize,
    candidates: &[usize],
    parallel: bool,
) -> Result<PathSolution> {
    if candidates.is_empty() {
        return Err(Error::NoCandidateEnds);
    }

    let outcomes: Vec<Result<PathSolution>> = if parallel {
        candidates
            .par_iter()
            .map(|&end| shortest_path(matrix, start, end))
            .collect()
    } else {
        candidates
            .iter()
            .map(|&end| shortest_path(matrix, start, end))
            .collect()
    };

    let mut best: Option<PathSolution> = None;
    for (&end, outcome) in candidates.iter().zip(outcomes) {
        let solution = match outcome {
            Ok(solution) => solution,
            Err(Error::Unreachable) => {
                trace!(end, "candidate end unreachable");
                continue;
            }
            Err(err) => return Err(err),
        };
        trace!(end, cost = solution.cost, "evaluated candidate end");
        if best.as_ref().is_none_or(|b| solution.cost < b.cost) {
            best = Some(solution);
        }
    }

    best.ok_or(Error::Unreachable)
}
