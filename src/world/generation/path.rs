//! Shortest paths over carved rooms
//!
//! Breadth-first search where only non-empty cells are traversable.

use std::collections::{HashMap, VecDeque};

use crate::world::{Coord, Grid};

/// Shortest path from `start` to `goal`, both inclusive.
///
/// Returns an empty path when the goal is empty, out of bounds, or not
/// connected to the start through occupied cells.
pub fn shortest_path(grid: &Grid, start: Coord, goal: Coord) -> Vec<Coord> {
    if !grid.in_bounds(start) || !grid.is_occupied(goal) {
        return Vec::new();
    }

    // Parent links double as the visited set
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();
    came_from.insert(start, start);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return rebuild_path(&came_from, start, goal);
        }

        for next in grid.neighbors(current) {
            if grid.is_occupied(next) && !came_from.contains_key(&next) {
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    Vec::new()
}

/// Number of cells on the shortest path, 0 when unreachable
pub fn path_length(grid: &Grid, start: Coord, goal: Coord) -> usize {
    shortest_path(grid, start, goal).len()
}

fn rebuild_path(came_from: &HashMap<Coord, Coord>, start: Coord, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(prev) => {
                current = *prev;
                path.push(current);
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid_path(grid: &Grid, path: &[Coord]) {
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan(&pair[1]), 1, "path jumps at {:?}", pair);
        }
        for coord in path {
            assert!(grid.is_occupied(*coord));
        }
    }

    #[test]
    fn test_straight_line() {
        let grid = Grid::from_symbols(&["X X O X X"]).unwrap();
        let path = shortest_path(&grid, Coord::new(0, 2), Coord::new(0, 0));
        assert_eq!(
            path,
            vec![Coord::new(0, 2), Coord::new(0, 1), Coord::new(0, 0)]
        );
    }

    #[test]
    fn test_takes_the_short_way_around_a_loop() {
        let grid = Grid::from_symbols(&[
            "X X X X X",
            "X . . . X",
            "O X X . X",
            ". . X . X",
            ". . X X X",
        ])
        .unwrap();
        let start = Coord::new(2, 0);
        let goal = Coord::new(2, 4);
        let path = shortest_path(&grid, start, goal);
        assert_valid_path(&grid, &path);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        // Both routes around the loop take 9 cells
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn test_minimal_against_every_occupied_goal() {
        let grid = Grid::from_symbols(&[
            "X X X . X",
            "X . X X X",
            "X X O . X",
            ". X X X X",
            "X X . . X",
        ])
        .unwrap();
        let start = grid.center();
        let manhattan_lower_bound = |c: Coord| start.manhattan(&c) + 1;
        for (coord, kind) in grid.iter() {
            if !kind.is_occupied() {
                continue;
            }
            let path = shortest_path(&grid, start, coord);
            assert_valid_path(&grid, &path);
            assert!(path.len() >= manhattan_lower_bound(coord));
        }
        // Detour-free neighbors are reached directly
        assert_eq!(path_length(&grid, start, Coord::new(1, 2)), 2);
        assert_eq!(path_length(&grid, start, Coord::new(0, 4)), 5);
    }

    #[test]
    fn test_unreachable_goals() {
        let grid = Grid::from_symbols(&["X O . X"]).unwrap();
        let start = Coord::new(0, 1);
        assert!(shortest_path(&grid, start, Coord::new(0, 3)).is_empty());
        assert!(shortest_path(&grid, start, Coord::new(0, 2)).is_empty());
        assert!(shortest_path(&grid, start, Coord::new(4, 4)).is_empty());
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = Grid::from_symbols(&["X O X"]).unwrap();
        let start = Coord::new(0, 1);
        assert_eq!(shortest_path(&grid, start, start), vec![start]);
    }
}
