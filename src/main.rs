//! Wormdig - Entry Point
//!
//! Generates a dungeon and prints it, or samples the generator and prints
//! percentile reports.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use wormdig::analysis::analyze;
use wormdig::data::{export_default_config, load_or_default};
use wormdig::render::{render_ascii, render_legend};
use wormdig::world::generation::{
    generate_dungeon_for_level, resolve_seed, rng_from_seed, CarvePolicy, DungeonGenerator,
    GeneratorConfig,
};
use wormdig::world::DungeonStats;

#[derive(Parser, Debug)]
#[command(name = "wormdig", version, about = "Worm-digging dungeon layout generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one dungeon and print it
    Generate {
        #[arg(long, default_value_t = 15)]
        rows: usize,
        #[arg(long, default_value_t = 15)]
        cols: usize,
        /// Seed for the random stream, random when omitted
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i64>,
        /// Scale the room target by level (round-robin carving)
        #[arg(long, conflicts_with_all = ["policy", "config", "target", "worms"])]
        level: Option<u32>,
        /// Override the configured carve policy
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
        /// Room target for round-robin carving, 20 when switching policy
        #[arg(long)]
        target: Option<usize>,
        /// Fixed worm count
        #[arg(long)]
        worms: Option<usize>,
        /// RON generator config
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the symbol legend and room counts
        #[arg(long)]
        legend: bool,
    },
    /// Sample the generator and print percentile reports
    Stats {
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        #[arg(long, default_value_t = 15)]
        rows: usize,
        #[arg(long, default_value_t = 15)]
        cols: usize,
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i64>,
    },
    /// Write the default generator config to a RON file
    ExportConfig { path: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    FixedSteps,
    RoundRobin,
}

/// Round-robin target used when `--policy` switches away from fixed steps
const DEFAULT_TARGET: usize = 20;

/// Layer command-line flags over the loaded config.
///
/// Switching policy resets the room band; an existing round-robin target is
/// kept unless `--target` replaces it.
fn apply_overrides(
    mut config: GeneratorConfig,
    policy: Option<PolicyArg>,
    target: Option<usize>,
    worms: Option<usize>,
) -> GeneratorConfig {
    if let Some(policy) = policy {
        let policy = match (policy, config.policy) {
            (PolicyArg::FixedSteps, _) => CarvePolicy::FixedSteps,
            (PolicyArg::RoundRobin, CarvePolicy::RoundRobin { target_rooms }) => {
                CarvePolicy::RoundRobin { target_rooms }
            }
            (PolicyArg::RoundRobin, CarvePolicy::FixedSteps) => CarvePolicy::RoundRobin {
                target_rooms: DEFAULT_TARGET,
            },
        };
        if policy.name() != config.policy.name() {
            config.room_band = policy.default_band();
        }
        config.policy = policy;
    }

    if let Some(target) = target {
        match &mut config.policy {
            CarvePolicy::RoundRobin { target_rooms } => *target_rooms = target,
            CarvePolicy::FixedSteps => {
                log::warn!("Ignoring --target {}: fixed-step carving has no room target", target)
            }
        }
    }

    if worms.is_some() {
        config.worms = worms;
    }
    config
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("Starting wormdig v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Generate {
            rows,
            cols,
            seed,
            level,
            policy,
            target,
            worms,
            config,
            legend,
        } => {
            let dungeon = match level {
                Some(level) => generate_dungeon_for_level(level, (rows, cols), seed)
                    .with_context(|| format!("Failed to generate level {} dungeon", level))?,
                None => {
                    let config = load_or_default(config.as_deref())
                        .context("Failed to load generator config")?;
                    let config = apply_overrides(config, policy, target, worms);
                    DungeonGenerator::new(rows, cols, config)
                        .and_then(|generator| generator.generate(seed))
                        .context("Failed to generate dungeon")?
                }
            };

            if let Some(seed) = dungeon.seed {
                println!("Seed: {}", seed);
            }
            print!("{}", render_ascii(&dungeon.grid));

            if legend {
                println!();
                print!("{}", render_legend());
                for (name, count) in DungeonStats::from_grid(&dungeon.grid).summary() {
                    println!("{}: {}", name, count);
                }
            }
        }
        Command::Stats {
            samples,
            rows,
            cols,
            seed,
        } => {
            let config = load_or_default(None).context("Failed to load generator config")?;
            let generator =
                DungeonGenerator::new(rows, cols, config).context("Invalid generator setup")?;
            let seed = resolve_seed(seed);
            println!("Seed: {}", seed);
            let mut rng = rng_from_seed(seed);

            let report = analyze(&mut rng, &generator, rows, cols, samples)
                .context("Sampling failed")?;
            for distribution in report {
                println!("{}", distribution);
            }
        }
        Command::ExportConfig { path } => {
            export_default_config(&path)
                .with_context(|| format!("Failed to export config to {}", path.display()))?;
            log::info!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}
