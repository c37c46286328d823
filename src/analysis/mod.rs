//! Generator tuning analysis
//!
//! Samples many carvings and generations and reports percentiles, used to
//! pick worm path lengths and validation bands.

use std::fmt;

use rand::rngs::StdRng;

use crate::error::GenerationError;
use crate::world::generation::config::{MAX_WORMS, MIN_WORMS};
use crate::world::generation::{dig_dungeon, CarvePolicy, DungeonGenerator};

/// Percentiles reported for every distribution
pub const PERCENTILES: [f64; 7] = [5.0, 10.0, 25.0, 50.0, 75.0, 90.0, 95.0];

/// Percentile of sorted samples, interpolating linearly between ranks
pub fn percentile(sorted: &[usize], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let (a, b) = (sorted[lo] as f64, sorted[hi] as f64);
    Some(a + (b - a) * (rank - lo as f64))
}

/// Percentile summary of one sampled quantity
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub label: String,
    pub samples: usize,
    /// (percentile, value) pairs in `PERCENTILES` order
    pub percentiles: Vec<(f64, f64)>,
}

impl Distribution {
    pub fn from_samples(label: impl Into<String>, mut values: Vec<usize>) -> Self {
        values.sort_unstable();
        let percentiles = PERCENTILES
            .iter()
            .filter_map(|p| percentile(&values, *p).map(|v| (*p, v)))
            .collect();
        Self {
            label: label.into(),
            samples: values.len(),
            percentiles,
        }
    }

    /// Value at a reported percentile
    pub fn at(&self, p: f64) -> Option<f64> {
        self.percentiles
            .iter()
            .find(|(q, _)| (*q - p).abs() < f64::EPSILON)
            .map(|(_, v)| *v)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} samples)", self.label, self.samples)?;
        for (p, value) in &self.percentiles {
            writeln!(f, "{:>3}% {:.1}", p, value)?;
        }
        write!(f, "---------")
    }
}

/// Room counts of `samples` fixed-step carvings with a set worm count
pub fn sample_room_counts(
    rng: &mut StdRng,
    rows: usize,
    cols: usize,
    worms: usize,
    samples: usize,
) -> Vec<usize> {
    (0..samples)
        .map(|_| dig_dungeon(rng, rows, cols, &CarvePolicy::FixedSteps, Some(worms)).room_count())
        .collect()
}

/// Boss path lengths of `samples` full generations
pub fn sample_boss_distances(
    rng: &mut StdRng,
    generator: &DungeonGenerator,
    samples: usize,
) -> Result<Vec<usize>, GenerationError> {
    (0..samples)
        .map(|_| generator.generate_with_rng(rng).map(|d| d.boss_distance))
        .collect()
}

/// Room counts per worm count, then boss distances for the generator
pub fn analyze(
    rng: &mut StdRng,
    generator: &DungeonGenerator,
    rows: usize,
    cols: usize,
    samples: usize,
) -> Result<Vec<Distribution>, GenerationError> {
    let mut report = Vec::new();

    for worms in MIN_WORMS..=MAX_WORMS {
        let counts = sample_room_counts(rng, rows, cols, worms, samples);
        report.push(Distribution::from_samples(format!("Rooms, {} worms", worms), counts));
    }

    let distances = sample_boss_distances(rng, generator, samples)?;
    report.push(Distribution::from_samples("Boss path", distances));

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generation::{rng_from_seed, GeneratorConfig};

    #[test]
    fn test_percentile_interpolates() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(percentile(&values, 0.0), Some(1.0));
        assert_eq!(percentile(&values, 50.0), Some(3.0));
        assert_eq!(percentile(&values, 100.0), Some(5.0));
        assert_eq!(percentile(&values, 25.0), Some(2.0));
        assert_eq!(percentile(&[10, 20], 50.0), Some(15.0));
        assert_eq!(percentile(&[], 50.0), None);
    }

    #[test]
    fn test_distribution_sorts_samples() {
        let dist = Distribution::from_samples("test", vec![5, 1, 4, 2, 3]);
        assert_eq!(dist.samples, 5);
        assert_eq!(dist.percentiles.len(), PERCENTILES.len());
        assert_eq!(dist.at(50.0), Some(3.0));
        assert!(dist.to_string().starts_with("test (5 samples)"));
    }

    #[test]
    fn test_room_count_samples() {
        let mut rng = rng_from_seed(17);
        for worms in MIN_WORMS..=MAX_WORMS {
            let counts = sample_room_counts(&mut rng, 15, 15, worms, 30);
            assert_eq!(counts.len(), 30);
            assert!(counts.iter().all(|c| *c >= 2));
        }
    }

    #[test]
    fn test_analyze_report_shape() {
        let generator = DungeonGenerator::new(15, 15, GeneratorConfig::default()).unwrap();
        let mut rng = rng_from_seed(3);
        let report = analyze(&mut rng, &generator, 15, 15, 10).unwrap();
        assert_eq!(report.len(), 4);
        let boss = report.last().unwrap();
        assert!(boss.at(5.0).unwrap() >= 5.0);
    }
}
