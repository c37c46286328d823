//! Worm-digging carver
//!
//! Worms start at the grid center and take uniformly random orthogonal
//! steps, marking every cell they enter as corridor. Walks may cross
//! themselves and each other.

use std::collections::HashSet;

use rand::Rng;
use rand::rngs::StdRng;

use super::config::{worm_path_range, CarvePolicy, MAX_WORMS, MIN_WORMS};
use crate::world::{Coord, Grid, RoomKind};

/// A single digger
#[derive(Debug, Clone, Copy)]
struct Worm {
    pos: Coord,
}

impl Worm {
    fn new(pos: Coord) -> Self {
        Self { pos }
    }

    /// Move one step and carve the destination
    fn dig(&mut self, rng: &mut StdRng, grid: &mut Grid) {
        self.pos = random_step(rng, grid.rows(), grid.cols(), self.pos);
        grid.set(self.pos, RoomKind::Corridor);
    }
}

/// Pick a uniformly random legal orthogonal move (up, right, down, left)
pub fn random_step(rng: &mut StdRng, rows: usize, cols: usize, from: Coord) -> Coord {
    let mut moves = [from; 4];
    let mut len = 0;

    if from.row > 0 {
        moves[len] = Coord::new(from.row - 1, from.col);
        len += 1;
    }
    if from.col + 1 < cols {
        moves[len] = Coord::new(from.row, from.col + 1);
        len += 1;
    }
    if from.row + 1 < rows {
        moves[len] = Coord::new(from.row + 1, from.col);
        len += 1;
    }
    if from.col > 0 {
        moves[len] = Coord::new(from.row, from.col - 1);
        len += 1;
    }

    // 1x1 grid
    if len == 0 {
        return from;
    }

    moves[rng.gen_range(0..len)]
}

/// Resolve the worm count, rolling 2..=4 when unspecified
pub fn pick_worm_count(rng: &mut StdRng, worms: Option<usize>) -> usize {
    worms.unwrap_or_else(|| rng.gen_range(MIN_WORMS..=MAX_WORMS))
}

/// Carve a fresh grid with the given policy.
///
/// The start is always the grid center and is stamped last.
pub fn dig_dungeon(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
    policy: &CarvePolicy,
    worms: Option<usize>,
) -> Grid {
    let mut grid = Grid::new(rows, cols);
    let start = grid.center();
    let worm_count = pick_worm_count(rng, worms);

    match *policy {
        CarvePolicy::FixedSteps => dig_fixed_steps(rng, &mut grid, start, worm_count),
        CarvePolicy::RoundRobin { target_rooms } => {
            dig_round_robin(rng, &mut grid, start, worm_count, target_rooms)
        }
    }

    grid.set(start, RoomKind::Start);
    grid
}

/// Each worm walks its own random-length path from the start
fn dig_fixed_steps(rng: &mut StdRng, grid: &mut Grid, start: Coord, worm_count: usize) {
    let steps_range = worm_path_range(worm_count);

    for _ in 0..worm_count {
        let mut worm = Worm::new(start);
        let steps = rng.gen_range(steps_range.clone());
        for _ in 0..steps {
            worm.dig(rng, grid);
        }
    }
}

/// Worms take turns until enough distinct cells are carved
fn dig_round_robin(
    rng: &mut StdRng,
    grid: &mut Grid,
    start: Coord,
    worm_count: usize,
    target_rooms: usize,
) {
    // Never loop past a fully carved grid
    let target = target_rooms.min(grid.rows() * grid.cols());

    let mut worms = vec![Worm::new(start); worm_count.max(1)];
    let mut carved: HashSet<Coord> = HashSet::from([start]);

    'dig: while carved.len() < target {
        for worm in worms.iter_mut() {
            worm.dig(rng, grid);
            carved.insert(worm.pos);
            if carved.len() >= target {
                break 'dig;
            }
        }
    }
}
