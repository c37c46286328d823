//! Generator configuration
//!
//! Carve policy, validation bands and secret-room tuning.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::world::RoomKind;

/// Fewest worms picked when the count is left unspecified
pub const MIN_WORMS: usize = 2;
/// Most worms picked when the count is left unspecified
pub const MAX_WORMS: usize = 4;

/// Inclusive step-count range for a single worm under fixed-step carving.
/// More worms means shorter walks.
pub fn worm_path_range(worms: usize) -> RangeInclusive<usize> {
    match worms.clamp(MIN_WORMS, MAX_WORMS) {
        2 => 15..=20,
        3 => 10..=15,
        _ => 8..=12,
    }
}

/// How worms dig corridors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarvePolicy {
    /// Each worm walks a random number of steps from the start
    FixedSteps,
    /// Worms take turns until `target_rooms` distinct cells are carved
    RoundRobin { target_rooms: usize },
}

impl CarvePolicy {
    pub fn name(&self) -> &'static str {
        match self {
            CarvePolicy::FixedSteps => "fixed-steps",
            CarvePolicy::RoundRobin { .. } => "round-robin",
        }
    }

    /// Room band the policy is tuned for
    pub fn default_band(&self) -> RoomBand {
        match self {
            CarvePolicy::FixedSteps => RoomBand::new(16, None),
            CarvePolicy::RoundRobin { .. } => RoomBand::new(16, Some(26)),
        }
    }
}

/// Accepted number of non-empty cells, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBand {
    pub min: usize,
    pub max: Option<usize>,
}

impl RoomBand {
    pub const fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, rooms: usize) -> bool {
        rooms >= self.min && self.max.map_or(true, |max| rooms <= max)
    }
}

/// Which special rooms keep an adjacent empty cell from becoming secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SecretExclusion {
    #[default]
    BossAndStart,
    BossOnly,
}

impl SecretExclusion {
    pub fn disqualifies(&self, kind: RoomKind) -> bool {
        match self {
            SecretExclusion::BossAndStart => matches!(kind, RoomKind::Boss | RoomKind::Start),
            SecretExclusion::BossOnly => kind == RoomKind::Boss,
        }
    }
}

/// Chance a secret candidate is stamped, keyed by its connection count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecretChances {
    pub two: f64,
    pub three: f64,
    pub four: f64,
}

impl Default for SecretChances {
    fn default() -> Self {
        Self {
            two: 0.25,
            three: 0.65,
            four: 0.9,
        }
    }
}

impl SecretChances {
    /// Threshold for a candidate with `connections` occupied neighbors
    pub fn for_connections(&self, connections: u8) -> f64 {
        match connections {
            0 | 1 => 0.0,
            2 => self.two,
            3 => self.three,
            _ => self.four,
        }
    }
}

/// Full configuration for one dungeon generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub policy: CarvePolicy,
    /// Explicit worm count, random in 2..=4 when unset
    pub worms: Option<usize>,
    pub room_band: RoomBand,
    /// Fewest dead ends a layout needs (one boss, the rest treasure)
    pub min_end_rooms: usize,
    /// Shortest acceptable center-to-boss path, counted in cells
    pub min_boss_distance: usize,
    pub secret_exclusion: SecretExclusion,
    pub secret_chances: SecretChances,
    /// Attempts before giving up
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::for_policy(CarvePolicy::FixedSteps)
    }
}

impl GeneratorConfig {
    /// Defaults for a policy, including its room band
    pub fn for_policy(policy: CarvePolicy) -> Self {
        Self {
            policy,
            worms: None,
            room_band: policy.default_band(),
            min_end_rooms: 3,
            min_boss_distance: 5,
            secret_exclusion: SecretExclusion::default(),
            secret_chances: SecretChances::default(),
            max_attempts: 10_000,
        }
    }

    pub fn fixed_steps() -> Self {
        Self::for_policy(CarvePolicy::FixedSteps)
    }

    pub fn round_robin(target_rooms: usize) -> Self {
        Self::for_policy(CarvePolicy::RoundRobin { target_rooms })
    }

    pub fn with_worms(mut self, worms: usize) -> Self {
        self.worms = Some(worms);
        self
    }

    /// Reject settings that can never produce a dungeon
    pub fn validate(&self) -> Result<(), GenerationError> {
        if let Some(worms) = self.worms {
            let supported = match self.policy {
                CarvePolicy::FixedSteps => (MIN_WORMS..=MAX_WORMS).contains(&worms),
                CarvePolicy::RoundRobin { .. } => worms > 0,
            };
            if !supported {
                return Err(GenerationError::InvalidWormCount { worms });
            }
        }

        if let CarvePolicy::RoundRobin { target_rooms } = self.policy {
            if target_rooms == 0 {
                return Err(GenerationError::InvalidConfig(
                    "round-robin target_rooms must be positive".into(),
                ));
            }
        }

        if let Some(max) = self.room_band.max {
            if max < self.room_band.min {
                return Err(GenerationError::InvalidConfig(format!(
                    "room band max {} is below min {}",
                    max, self.room_band.min
                )));
            }
        }

        if self.min_end_rooms == 0 {
            return Err(GenerationError::InvalidConfig(
                "min_end_rooms must leave room for a boss".into(),
            ));
        }

        let chances = [
            self.secret_chances.two,
            self.secret_chances.three,
            self.secret_chances.four,
        ];
        if chances.iter().any(|c| !c.is_finite()) {
            return Err(GenerationError::InvalidConfig(
                "secret chances must be finite".into(),
            ));
        }

        if self.max_attempts == 0 {
            return Err(GenerationError::InvalidConfig(
                "max_attempts must be positive".into(),
            ));
        }

        Ok(())
    }
}
