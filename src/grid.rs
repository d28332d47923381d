use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// A cell coordinate. `x` is the column, `y` the row.
///
/// Signed so that callers can name cells outside the grid; such cells are
/// simply never reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn offset(self, (dx, dy): (i32, i32)) -> Option<Point> {
        Some(Point::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const DIAGONAL_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Which cells count as neighbours during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Up, down, left and right.
    #[default]
    Orthogonal,
    /// Orthogonal moves plus the four diagonals.
    Diagonal,
}

impl Connectivity {
    pub fn from_diagonals(allow_diagonals: bool) -> Self {
        if allow_diagonals {
            Connectivity::Diagonal
        } else {
            Connectivity::Orthogonal
        }
    }

    /// `(dx, dy)` steps to every neighbour.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Connectivity::Orthogonal => &ORTHOGONAL_OFFSETS,
            Connectivity::Diagonal => &DIAGONAL_OFFSETS,
        }
    }
}

/// Rectangular grid of entry costs: `rows[y][x]` is the cost of stepping
/// into `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<f64>>,
}

impl Grid {
    /// Rejects empty or ragged input and costs that are negative or not finite.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, GridError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            if let Some((x, &cost)) = row
                .iter()
                .enumerate()
                .find(|(_, cost)| !cost.is_finite() || **cost < 0.0)
            {
                return Err(GridError::InvalidCost { x, y, cost });
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            rows,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(to_coord(self.width - 1), to_coord(self.height - 1))
    }

    pub fn contains(&self, point: Point) -> bool {
        self.index_of(point).is_some()
    }

    pub fn cost_at(&self, point: Point) -> Option<f64> {
        self.index_of(point).map(|(x, y)| self.rows[y][x])
    }

    /// In-bounds neighbours of `point`, each paired with its entry cost.
    pub fn neighbors(
        &self,
        point: Point,
        connectivity: Connectivity,
    ) -> impl Iterator<Item = (Point, f64)> + '_ {
        connectivity
            .offsets()
            .iter()
            .filter_map(move |&offset| point.offset(offset))
            .filter_map(move |neighbor| Some((neighbor, self.cost_at(neighbor)?)))
    }

    fn index_of(&self, point: Point) -> Option<(usize, usize)> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }
}

fn to_coord(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

impl TryFrom<Vec<Vec<f64>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Grid::new(rows)
    }
}
