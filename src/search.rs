use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::equality::StructuralEq;
use crate::error::GridError;
use crate::grid::{Connectivity, Grid, Point};
use crate::heap::MinHeap;

/// Where a search starts and ends and how it may move.
///
/// Missing fields fall back to the top-left start, the bottom-right end and
/// orthogonal moves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub allow_diagonals: bool,
}

impl SearchOptions {
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn connectivity(&self) -> Connectivity {
        Connectivity::from_diagonals(self.allow_diagonals)
    }
}

/// A discovered cell and the cost of the path that discovered it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    point: Point,
    dist: f64,
}

impl StructuralEq for Frontier {
    fn structural_eq(&self, other: &Self) -> bool {
        self.point == other.point && self.dist.structural_eq(&other.dist)
    }
}

/// Cost of the cheapest path from `options.start` to `options.end`, where each
/// step costs the entry cost of the cell stepped into. The start cell's own
/// cost is never paid.
///
/// Returns `Ok(None)` when the end cannot be reached, including when it lies
/// outside the grid. A start outside the grid is rejected.
pub fn shortest_path(grid: &Grid, options: &SearchOptions) -> Result<Option<f64>, GridError> {
    let start = options.start.unwrap_or(Point::new(0, 0));
    let end = options.end.unwrap_or_else(|| grid.bottom_right());
    let connectivity = options.connectivity();

    if !grid.contains(start) {
        return Err(GridError::StartOutOfBounds {
            x: start.x,
            y: start.y,
        });
    }

    log::debug!("Searching from {start:?} to {end:?} with {connectivity:?} moves");

    // Cells are marked when they are queued, not when they are popped. Every
    // way into a cell costs the same, and cells are expanded in order of
    // distance, so the first discovery is already the cheapest.
    let mut visited: HashSet<Point> = HashSet::new();
    let mut frontier: MinHeap<Frontier> = MinHeap::with_capacity(grid.width() * grid.height());
    visited.insert(start);
    frontier.add((0.0, Frontier { point: start, dist: 0.0 }));

    let mut expanded = 0usize;
    while let Some(entry) = frontier.pop() {
        let current = entry.value;
        if current.point == end {
            log::debug!("Reached {end:?} at distance {} after {expanded} expansions", current.dist);
            return Ok(Some(current.dist));
        }

        expanded += 1;
        log::trace!("Expanding {:?} at distance {}", current.point, current.dist);

        for (neighbor, cost) in grid.neighbors(current.point, connectivity) {
            if !visited.insert(neighbor) {
                continue;
            }
            let dist = current.dist + cost;
            frontier.add((dist, Frontier { point: neighbor, dist }));
        }
    }

    log::debug!("No path from {start:?} to {end:?} after {expanded} expansions");
    Ok(None)
}

impl Grid {
    /// Orthogonal search from the top-left cell to the bottom-right cell.
    pub fn shortest_path(&self) -> Option<f64> {
        shortest_path(self, &SearchOptions::default()).ok().flatten()
    }
}
