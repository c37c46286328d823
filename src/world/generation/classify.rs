//! Room classification
//!
//! Finds dead-end rooms (treasure and boss candidates) and empty cells
//! that could hide a secret room.

use std::collections::BTreeMap;

use super::config::SecretExclusion;
use crate::world::{Coord, Grid, RoomKind};

/// Corridor cells with exactly one occupied orthogonal neighbor, row-major
pub fn find_dead_end_rooms(grid: &Grid) -> Vec<Coord> {
    let mut dead_ends = Vec::new();

    for (coord, kind) in grid.iter() {
        if kind != RoomKind::Corridor {
            continue;
        }

        let mut connections = 0;
        for neighbor in grid.neighbors(coord) {
            if grid.is_occupied(neighbor) {
                connections += 1;
            }
            if connections > 1 {
                break;
            }
        }

        if connections == 1 {
            dead_ends.push(coord);
        }
    }

    dead_ends
}

/// Empty cells touching at least two rooms, mapped to their connection count.
///
/// A cell next to any room the exclusion disqualifies is skipped entirely.
pub fn find_secret_room_candidates(
    grid: &Grid,
    exclusion: SecretExclusion,
) -> BTreeMap<Coord, u8> {
    let mut candidates = BTreeMap::new();

    for (coord, kind) in grid.iter() {
        if kind != RoomKind::Empty {
            continue;
        }

        let mut connections = 0u8;
        for neighbor in grid.neighbors(coord) {
            match grid.get(neighbor) {
                Some(n) if exclusion.disqualifies(n) => {
                    connections = 0;
                    break;
                }
                Some(n) if n.is_occupied() => connections += 1,
                _ => {}
            }
        }

        if connections >= 2 {
            candidates.insert(coord, connections);
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_corridor_is_not_a_dead_end() {
        let mut grid = Grid::new(5, 5);
        grid.set(Coord::new(2, 2), RoomKind::Corridor);
        assert!(find_dead_end_rooms(&grid).is_empty());
    }

    #[test]
    fn test_dead_ends_on_a_line() {
        let grid = Grid::from_symbols(&[
            ". . . . .",
            ". . . . .",
            "X X O X X",
            ". . . . .",
            ". . . . .",
        ])
        .unwrap();
        assert_eq!(
            find_dead_end_rooms(&grid),
            vec![Coord::new(2, 0), Coord::new(2, 4)]
        );
    }

    #[test]
    fn test_edge_cells_use_full_bounds() {
        // Dead ends on row 0 and column 0 must still be found
        let grid = Grid::from_symbols(&[
            "X . .",
            "X O X",
            ". . .",
        ])
        .unwrap();
        assert_eq!(
            find_dead_end_rooms(&grid),
            vec![Coord::new(0, 0), Coord::new(1, 2)]
        );
    }

    #[test]
    fn test_start_is_never_a_dead_end() {
        let grid = Grid::from_symbols(&[". . .", ". O X", ". . ."]).unwrap();
        assert_eq!(find_dead_end_rooms(&grid), vec![Coord::new(1, 2)]);
    }

    #[test]
    fn test_secret_candidates_count_connections() {
        let grid = Grid::from_symbols(&[
            ". . . . .",
            ". T X T .",
            ". X . X .",
            ". T X X .",
            ". . . . .",
        ])
        .unwrap();
        let candidates = find_secret_room_candidates(&grid, SecretExclusion::BossAndStart);
        assert_eq!(candidates.get(&Coord::new(2, 2)), Some(&4));
        assert_eq!(candidates.get(&Coord::new(2, 0)), None);
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_secret_candidates_respect_exclusion() {
        let grid = Grid::from_symbols(&[
            ". . . . .",
            ". X O X .",
            ". X . B .",
            ". X X X .",
            ". . . . .",
        ])
        .unwrap();
        let strict = find_secret_room_candidates(&grid, SecretExclusion::BossAndStart);
        assert!(!strict.contains_key(&Coord::new(2, 2)));

        let grid = Grid::from_symbols(&[
            ". . . . .",
            ". X O X .",
            ". X . X .",
            ". X X X .",
            ". . . . .",
        ])
        .unwrap();
        let strict = find_secret_room_candidates(&grid, SecretExclusion::BossAndStart);
        assert!(!strict.contains_key(&Coord::new(2, 2)));
        let lenient = find_secret_room_candidates(&grid, SecretExclusion::BossOnly);
        assert_eq!(lenient.get(&Coord::new(2, 2)), Some(&4));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let grid = Grid::from_symbols(&[
            ". X X X .",
            ". X . X .",
            "X X O . .",
            ". . X X X",
            ". . . . X",
        ])
        .unwrap();
        assert_eq!(find_dead_end_rooms(&grid), find_dead_end_rooms(&grid));
        assert_eq!(
            find_secret_room_candidates(&grid, SecretExclusion::BossAndStart),
            find_secret_room_candidates(&grid, SecretExclusion::BossAndStart)
        );
    }
}
