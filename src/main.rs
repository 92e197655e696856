#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use navalgrid::{
    init_logging, print_grid, render_json, Engine, Grid, GridConfig, OverlayPolicy,
    ShipDescriptor, BOARD_SIZE, MASK_SIZE, REFERENCE_FLEET, REFERENCE_STAMPS, SHIP_LENGTH,
};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Place ships and stamp effect shapes on a square grid", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Side length of the grid.
    #[arg(long, global = true, default_value_t = BOARD_SIZE)]
    size: usize,
    /// Length of every ship.
    #[arg(long, global = true, default_value_t = SHIP_LENGTH)]
    ship_length: usize,
    /// Side length of the effect masks (odd).
    #[arg(long, global = true, default_value_t = MASK_SIZE)]
    mask_size: usize,
    /// How stamps treat cells holding a ship.
    #[arg(long, global = true, value_enum, default_value_t = OverlayPolicy::Overwrite)]
    policy: OverlayPolicy,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Skip the effect stamps and show ships only.
    #[arg(long, global = true)]
    no_effects: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg(feature = "std")]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Place the four reference ships and stamp the reference shapes (default).
    Demo,
    /// Place ships at random free positions, then stamp the reference shapes.
    Random {
        #[arg(long, default_value_t = 4)]
        ships: usize,
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GridConfig::new(cli.size, cli.ship_length, cli.mask_size)
        .map_err(|e| anyhow::anyhow!(e))?;
    let engine = Engine::new(config);
    let mut grid = engine.grid();

    let ships = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let fleet: Vec<ShipDescriptor> = REFERENCE_FLEET
                .iter()
                .map(|s| engine.ship(s.row, s.col, s.orientation))
                .collect();
            engine
                .place_fleet(&mut grid, &fleet)
                .map_err(|e| anyhow::anyhow!("could not place {}: {}", fleet[e.index], e))?;
            fleet
        }
        Commands::Random { ships, seed } => {
            let mut rng = if let Some(s) = seed {
                info!("Using fixed seed: {} (board will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            engine
                .place_random_fleet(&mut grid, &mut rng, ships)
                .map_err(|e| anyhow::anyhow!(e))?
        }
    };
    info!("placed {} ships", ships.len());

    let stamps = if cli.no_effects {
        Vec::new()
    } else {
        apply_reference_stamps(&engine, &mut grid, cli.policy)?
    };

    match cli.format {
        OutputFormat::Text => print_grid(&grid),
        OutputFormat::Json => {
            let mut out = render_json(&grid);
            out["config"] = json!(engine.config());
            out["ships"] = json!(ships);
            out["stamps"] = json!(stamps);
            println!("{}", serde_json::to_string(&out)?);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn apply_reference_stamps(
    engine: &Engine,
    grid: &mut Grid,
    policy: OverlayPolicy,
) -> anyhow::Result<Vec<serde_json::Value>> {
    let mut applied = Vec::with_capacity(REFERENCE_STAMPS.len());
    for (shape, row, col) in REFERENCE_STAMPS {
        let mask = engine.mask(shape).map_err(|e| anyhow::anyhow!(e))?;
        let summary = grid.stamp_with_policy(&mask, row, col, policy);
        info!(
            "stamped {:?} at ({}, {}): {} marked, {} clipped",
            shape, row, col, summary.marked, summary.clipped
        );
        applied.push(json!({
            "shape": shape,
            "target": [row, col],
            "summary": summary,
        }));
    }
    Ok(applied)
}
