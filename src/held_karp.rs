//! Exact shortest Hamiltonian path with fixed endpoints (Held–Karp).
//!
//! Intermediate points are every index other than `start` and `end`,
//! renumbered `0..m`. `cost[mask][last]` is the cheapest way to leave `start`,
//! visit exactly the intermediates in `mask`, and stop at `last`. The table has
//! `m · 2^m` entries, so `m` is capped at [`MAX_INTERMEDIATES`].

use tracing::trace;

use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;

/// Largest number of intermediate points the exact solver accepts.
pub const MAX_INTERMEDIATES: usize = 18;

const NO_PARENT: u8 = u8::MAX;

/// An optimal visiting order as matrix indices, `start` first and `end` last.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSolution {
    pub order: Vec<usize>,
    pub cost: f64,
}

impl PathSolution {
    pub fn end(&self) -> usize {
        self.order[self.order.len() - 1]
    }

    /// Indices strictly between start and end.
    pub fn intermediates(&self) -> &[usize] {
        &self.order[1..self.order.len() - 1]
    }
}

/// Minimum-cost path from `start` to `end` visiting every other index once.
///
/// Iteration runs by ascending mask, then ascending last index, then ascending
/// next index, and only a strictly cheaper cost replaces a table entry, so
/// ties resolve the same way on every run.
pub fn shortest_path(matrix: &DistanceMatrix, start: usize, end: usize) -> Result<PathSolution> {
    let size = matrix.size();
    for index in [start, end] {
        if index >= size {
            return Err(Error::IndexOutOfRange { index, size });
        }
    }
    if start == end {
        return Err(Error::SameStartAndEnd(start));
    }

    let intermediates: Vec<usize> = (0..size).filter(|&i| i != start && i != end).collect();
    let m = intermediates.len();
    if m == 0 {
        return Err(Error::NoIntermediates);
    }
    if m > MAX_INTERMEDIATES {
        return Err(Error::TooManyIntermediates {
            count: m,
            max: MAX_INTERMEDIATES,
        });
    }

    let states = 1usize << m;
    let full = states - 1;
    let at = |mask: usize, last: usize| mask * m + last;
    trace!(intermediates = m, states, "filling held-karp table");

    let mut cost = vec![f64::INFINITY; states * m];
    let mut parent = vec![NO_PARENT; states * m];

    for (i, &node) in intermediates.iter().enumerate() {
        cost[at(1 << i, i)] = matrix.get(start, node);
    }

    for mask in 1..states {
        for last in 0..m {
            if mask & (1 << last) == 0 {
                continue;
            }
            let current = cost[at(mask, last)];
            if current == f64::INFINITY {
                continue;
            }

            for next in 0..m {
                if mask & (1 << next) != 0 {
                    continue;
                }
                let extended = at(mask | (1 << next), next);
                let candidate = current + matrix.get(intermediates[last], intermediates[next]);
                if candidate < cost[extended] {
                    cost[extended] = candidate;
                    parent[extended] = last as u8;
                }
            }
        }
    }

    let mut best_last = None;
    let mut best_cost = f64::INFINITY;
    for last in 0..m {
        let total = cost[at(full, last)] + matrix.get(intermediates[last], end);
        if total < best_cost {
            best_cost = total;
            best_last = Some(last);
        }
    }
    let best_last = best_last.ok_or(Error::Unreachable)?;

    // Walk parents back until the single-element mask of the first hop.
    let mut reversed = Vec::with_capacity(m);
    let mut mask = full;
    let mut current = best_last;
    loop {
        reversed.push(intermediates[current]);
        let previous = parent[at(mask, current)];
        if previous == NO_PARENT {
            break;
        }
        mask ^= 1 << current;
        current = previous as usize;
    }
    debug_assert_eq!(reversed.len(), m);

    let mut order = Vec::with_capacity(m + 2);
    order.push(start);
    order.extend(reversed.into_iter().rev());
    order.push(end);

    Ok(PathSolution {
        order,
        cost: best_cost,
    })
}
