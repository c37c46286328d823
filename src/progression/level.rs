//! Level-based room scaling
//!
//! Deeper levels carve larger dungeons, up to what the round-robin room
//! band accepts.

use rand::Rng;
use rand::rngs::StdRng;

/// Rooms every level starts from
pub const BASE_ROOMS: usize = 15;
/// Extra rooms per level
pub const ROOMS_PER_LEVEL: f64 = 2.6;
/// Ceiling matching the round-robin band maximum
pub const MAX_ROOMS: usize = 26;

/// Room target for a level: base, a coin flip, and a level-scaled term.
///
/// Level 0 is treated as level 1.
pub fn calc_max_rooms(level: u32, rng: &mut StdRng) -> usize {
    let level = level.max(1);
    let jitter = rng.gen_range(0..=1);
    let scaled = (level as f64 * ROOMS_PER_LEVEL).floor() as usize;
    (BASE_ROOMS + jitter + scaled).min(MAX_ROOMS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_level_one_range() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let rooms = calc_max_rooms(1, &mut rng);
            assert!(rooms == 17 || rooms == 18, "got {}", rooms);
        }
    }

    #[test]
    fn test_level_zero_matches_level_one() {
        let mut a = StdRng::seed_from_u64(8);
        let mut b = StdRng::seed_from_u64(8);
        assert_eq!(calc_max_rooms(0, &mut a), calc_max_rooms(1, &mut b));
    }

    #[test]
    fn test_deep_levels_are_capped() {
        let mut rng = StdRng::seed_from_u64(2);
        let level_four = calc_max_rooms(4, &mut rng);
        assert!(level_four == 25 || level_four == 26);
        for level in 5..40 {
            assert_eq!(calc_max_rooms(level, &mut rng), MAX_ROOMS);
        }
    }
}
