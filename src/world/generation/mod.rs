//! Procedural dungeon generation
//!
//! Carves a layout with worms, classifies special rooms, then validates the
//! result. Any failed check throws the whole attempt away and starts over
//! with a fresh carve from the same random stream.

pub mod config;
pub mod worms;
pub mod classify;
pub mod path;

pub use config::{CarvePolicy, GeneratorConfig, RoomBand, SecretChances, SecretExclusion};
pub use classify::{find_dead_end_rooms, find_secret_room_candidates};
pub use path::shortest_path;
pub use worms::dig_dungeon;

use std::collections::BTreeMap;
use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::GenerationError;
use crate::progression::calc_max_rooms;
use crate::world::{Coord, Grid, RoomKind};

/// A finished, validated dungeon
#[derive(Debug, Clone, PartialEq)]
pub struct Dungeon {
    pub grid: Grid,
    /// Seed the random stream started from, when generation owned it
    pub seed: Option<i64>,
    /// Attempts used, including the successful one
    pub attempts: usize,
    pub start: Coord,
    pub boss: Coord,
    /// Cells on the shortest path from the start to the boss
    pub boss_distance: usize,
    pub treasure: Vec<Coord>,
    pub secrets: Vec<Coord>,
}

/// Why a single attempt was thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    RoomCount(usize),
    TooFewEndRooms(usize),
    /// Farthest dead end is too close, or unreachable (length 0)
    BossTooClose(usize),
    NoSecretCandidates,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::RoomCount(rooms) => write!(f, "{} rooms outside band", rooms),
            Rejection::TooFewEndRooms(ends) => write!(f, "only {} dead ends", ends),
            Rejection::BossTooClose(len) => write!(f, "boss path of {} cells too short", len),
            Rejection::NoSecretCandidates => write!(f, "no secret room candidates"),
        }
    }
}

/// Validated generator for one grid size
#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    rows: usize,
    cols: usize,
    config: GeneratorConfig,
}

impl DungeonGenerator {
    /// Fails fast on zero dimensions or an unusable config.
    ///
    /// A round-robin target larger than the grid is clamped to the cell count.
    pub fn new(
        rows: usize,
        cols: usize,
        mut config: GeneratorConfig,
    ) -> Result<Self, GenerationError> {
        if rows == 0 || cols == 0 {
            return Err(GenerationError::InvalidGridDimensions { rows, cols });
        }
        config.validate()?;

        let cells = rows * cols;
        if let CarvePolicy::RoundRobin { target_rooms } = &mut config.policy {
            if *target_rooms > cells {
                log::warn!(
                    "Room target {} exceeds {} grid cells, clamping",
                    target_rooms,
                    cells
                );
                *target_rooms = cells;
            }
        }

        Ok(Self { rows, cols, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate from a fresh stream seeded with `seed`, or a random seed
    pub fn generate(&self, seed: Option<i64>) -> Result<Dungeon, GenerationError> {
        let seed = resolve_seed(seed);
        let mut rng = rng_from_seed(seed);
        let mut dungeon = self.generate_with_rng(&mut rng)?;
        dungeon.seed = Some(seed);
        Ok(dungeon)
    }

    /// Retry attempts against the caller's stream until one validates
    pub fn generate_with_rng(&self, rng: &mut StdRng) -> Result<Dungeon, GenerationError> {
        for attempt in 1..=self.config.max_attempts {
            match self.attempt(rng) {
                Ok(mut dungeon) => {
                    dungeon.attempts = attempt;
                    log::info!(
                        "Generated {}x{} dungeon in {} attempt(s): {} rooms, boss at {} ({} cells away)",
                        self.rows,
                        self.cols,
                        attempt,
                        dungeon.grid.room_count(),
                        dungeon.boss,
                        dungeon.boss_distance
                    );
                    return Ok(dungeon);
                }
                Err(rejection) => {
                    log::debug!("Attempt {} rejected: {}", attempt, rejection);
                }
            }
        }

        log::warn!(
            "Gave up after {} attempts on a {}x{} grid",
            self.config.max_attempts,
            self.rows,
            self.cols
        );
        Err(GenerationError::Exhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// One pass through carve, validate and stamp
    fn attempt(&self, rng: &mut StdRng) -> Result<Dungeon, Rejection> {
        let config = &self.config;
        let mut grid = dig_dungeon(rng, self.rows, self.cols, &config.policy, config.worms);

        let rooms = grid.room_count();
        if !config.room_band.contains(rooms) {
            return Err(Rejection::RoomCount(rooms));
        }

        let dead_ends = find_dead_end_rooms(&grid);
        if dead_ends.len() < config.min_end_rooms {
            return Err(Rejection::TooFewEndRooms(dead_ends.len()));
        }

        let center = grid.center();
        let (boss, boss_distance) = select_boss_room(&grid, center, &dead_ends);
        if boss_distance < config.min_boss_distance {
            return Err(Rejection::BossTooClose(boss_distance));
        }
        grid.set(boss, RoomKind::Boss);

        let treasure: Vec<Coord> = dead_ends.into_iter().filter(|c| *c != boss).collect();
        for coord in &treasure {
            grid.set(*coord, RoomKind::Treasure);
        }

        let candidates = find_secret_room_candidates(&grid, config.secret_exclusion);
        if candidates.is_empty() {
            return Err(Rejection::NoSecretCandidates);
        }
        let secrets = stamp_secret_rooms(rng, &mut grid, &candidates, &config.secret_chances);

        Ok(Dungeon {
            grid,
            seed: None,
            attempts: 0,
            start: center,
            boss,
            boss_distance,
            treasure,
            secrets,
        })
    }
}

/// Dead end farthest from `from` by path length, ties keep the earliest.
///
/// Returns the first dead end and a length of 0 when none is reachable.
pub fn select_boss_room(grid: &Grid, from: Coord, dead_ends: &[Coord]) -> (Coord, usize) {
    let mut best = (from, 0);
    for room in dead_ends {
        let len = path::path_length(grid, from, *room);
        if len > best.1 {
            best = (*room, len);
        }
    }
    if best.1 == 0 {
        if let Some(first) = dead_ends.first() {
            best.0 = *first;
        }
    }
    best
}

/// Roll every candidate against its threshold, forcing one secret if none hit.
///
/// Candidates are rolled in row-major order so a seed always replays the
/// same draws.
pub fn stamp_secret_rooms(
    rng: &mut StdRng,
    grid: &mut Grid,
    candidates: &BTreeMap<Coord, u8>,
    chances: &SecretChances,
) -> Vec<Coord> {
    let mut secrets = Vec::new();

    for (coord, connections) in candidates {
        let roll: f64 = rng.gen();
        if roll <= chances.for_connections(*connections) {
            grid.set(*coord, RoomKind::Secret);
            secrets.push(*coord);
        }
    }

    if secrets.is_empty() {
        let pool: Vec<Coord> = candidates.keys().copied().collect();
        if let Some(coord) = pool.choose(rng) {
            grid.set(*coord, RoomKind::Secret);
            secrets.push(*coord);
        }
    }

    secrets
}

/// Use the given seed, or draw and log a fresh one
pub fn resolve_seed(seed: Option<i64>) -> i64 {
    seed.unwrap_or_else(|| {
        let seed: i64 = rand::thread_rng().gen();
        log::info!("No seed given, using {}", seed);
        seed
    })
}

/// Deterministic stream for a signed seed
pub fn rng_from_seed(seed: i64) -> StdRng {
    StdRng::seed_from_u64(seed as u64)
}

/// Generate a dungeon with the default fixed-step configuration
pub fn generate_dungeon(
    grid_size: (usize, usize),
    seed: Option<i64>,
) -> Result<Dungeon, GenerationError> {
    let (rows, cols) = grid_size;
    DungeonGenerator::new(rows, cols, GeneratorConfig::default())?.generate(seed)
}

/// Generate a dungeon whose room target scales with `level`.
///
/// The target is drawn from the same stream as the layout itself.
pub fn generate_dungeon_for_level(
    level: u32,
    grid_size: (usize, usize),
    seed: Option<i64>,
) -> Result<Dungeon, GenerationError> {
    let (rows, cols) = grid_size;
    if rows == 0 || cols == 0 {
        return Err(GenerationError::InvalidGridDimensions { rows, cols });
    }

    let seed = resolve_seed(seed);
    let mut rng = rng_from_seed(seed);
    let target_rooms = calc_max_rooms(level, &mut rng);
    log::debug!("Level {} targets {} rooms", level, target_rooms);

    let generator = DungeonGenerator::new(rows, cols, GeneratorConfig::round_robin(target_rooms))?;
    let mut dungeon = generator.generate_with_rng(&mut rng)?;
    dungeon.seed = Some(seed);
    Ok(dungeon)
}
