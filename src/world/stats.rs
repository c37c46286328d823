//! Dungeon statistics
//!
//! Room totals and per-kind counts for a grid.

use std::collections::BTreeMap;

use super::{Grid, RoomKind};

/// Counts of every room kind in a grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DungeonStats {
    /// Non-empty cells
    pub rooms: usize,
    pub start: usize,
    pub corridors: usize,
    pub treasure: usize,
    pub boss: usize,
    pub secret: usize,
}

impl DungeonStats {
    pub fn from_grid(grid: &Grid) -> Self {
        let mut stats = Self::default();
        for (_, kind) in grid.iter() {
            match kind {
                RoomKind::Empty => continue,
                RoomKind::Start => stats.start += 1,
                RoomKind::Corridor => stats.corridors += 1,
                RoomKind::Treasure => stats.treasure += 1,
                RoomKind::Boss => stats.boss += 1,
                RoomKind::Secret => stats.secret += 1,
            }
            stats.rooms += 1;
        }
        stats
    }

    /// Named counts for display, skipping kinds that never occur
    pub fn summary(&self) -> BTreeMap<&'static str, usize> {
        [
            (RoomKind::Start, self.start),
            (RoomKind::Corridor, self.corridors),
            (RoomKind::Treasure, self.treasure),
            (RoomKind::Boss, self.boss),
            (RoomKind::Secret, self.secret),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(kind, count)| (kind.name(), count))
        .collect()
    }
}
