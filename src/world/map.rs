//! Grid data structure
//!
//! The fixed-size 2D grid a dungeon layout is carved into.

use std::fmt;

use super::tile::RoomKind;
use crate::render::render_ascii;

/// A (row, col) grid coordinate. Orders row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate
    pub fn manhattan(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A dungeon layout grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<RoomKind>,
}

impl Grid {
    /// Create a new grid with every cell empty
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![RoomKind::Empty; rows * cols],
        }
    }

    /// Build a grid from rows of symbols. Whitespace is ignored.
    ///
    /// Returns `None` on an unknown symbol or ragged rows.
    pub fn from_symbols(lines: &[&str]) -> Option<Self> {
        let parsed: Vec<Vec<RoomKind>> = lines
            .iter()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(RoomKind::from_symbol)
                    .collect::<Option<Vec<_>>>()
            })
            .collect::<Option<Vec<_>>>()?;

        let cols = parsed.first().map_or(0, |row| row.len());
        if parsed.iter().any(|row| row.len() != cols) {
            return None;
        }

        Some(Self {
            rows: parsed.len(),
            cols,
            cells: parsed.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Center cell, where every dungeon starts
    pub fn center(&self) -> Coord {
        Coord::new(self.rows / 2, self.cols / 2)
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    #[inline]
    fn idx(&self, coord: Coord) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Room kind at a coordinate, `None` when out of bounds
    pub fn get(&self, coord: Coord) -> Option<RoomKind> {
        if self.in_bounds(coord) {
            Some(self.cells[self.idx(coord)])
        } else {
            None
        }
    }

    /// Set the room kind at a coordinate. Out-of-bounds writes are ignored.
    pub fn set(&mut self, coord: Coord, kind: RoomKind) {
        if self.in_bounds(coord) {
            let idx = self.idx(coord);
            self.cells[idx] = kind;
        }
    }

    /// True when the cell is in bounds and not empty
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(|kind| kind.is_occupied())
    }

    /// In-bounds orthogonal neighbors: down, up, right, left
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let Coord { row, col } = coord;
        [
            row.checked_add(1).map(|r| Coord::new(r, col)),
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            col.checked_add(1).map(|c| Coord::new(row, c)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
        ]
        .into_iter()
        .flatten()
        .filter(move |n| self.in_bounds(*n))
    }

    /// Iterate over every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, RoomKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, kind)| (Coord::new(idx / self.cols, idx % self.cols), *kind))
    }

    /// Coordinates of every cell of the given kind, row-major
    pub fn positions_of(&self, kind: RoomKind) -> Vec<Coord> {
        self.iter()
            .filter(|(_, k)| *k == kind)
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of cells holding the given kind
    pub fn count(&self, kind: RoomKind) -> usize {
        self.cells.iter().filter(|k| **k == kind).count()
    }

    /// Number of non-empty cells
    pub fn room_count(&self) -> usize {
        self.cells.iter().filter(|k| k.is_occupied()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_ascii(self))
    }
}
