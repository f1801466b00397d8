use std::path::PathBuf;

use auto_drive::constants::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_RANDOM_STEPS, DEFAULT_RANDOM_VEHICLES,
};
use auto_drive::{simulate_multiple, simulate_single, RandomParams, Scenario, Stepper};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Autonomous vehicles on a grid, stepped in lockstep with collision detection
#[derive(Parser, Debug)]
#[command(name = "auto_drive")]
#[command(about = "Simulate autonomous vehicles on a bounded grid")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Drive a single vehicle and print its final pose
    Single {
        #[arg(long, env = "AUTO_DRIVE_WIDTH", default_value_t = DEFAULT_GRID_WIDTH)]
        width: i32,

        #[arg(long, env = "AUTO_DRIVE_HEIGHT", default_value_t = DEFAULT_GRID_HEIGHT)]
        height: i32,

        #[arg(long)]
        x: i32,

        #[arg(long)]
        y: i32,

        /// Starting heading: N, E, S or W
        #[arg(long)]
        heading: char,

        /// Command string made of F, L and R
        #[arg(long, default_value = "")]
        commands: String,
    },
    /// Run a fleet from a JSON scenario file
    Multi {
        #[arg(value_name = "SCENARIO")]
        scenario: PathBuf,

        /// Print the run summary after the result
        #[arg(long)]
        stats: bool,

        /// Keep the preview phase single-threaded
        #[arg(long, env = "AUTO_DRIVE_SEQUENTIAL")]
        sequential: bool,
    },
    /// Generate and run a random fleet
    Random {
        #[arg(long, default_value_t = DEFAULT_RANDOM_VEHICLES)]
        vehicles: usize,

        /// Longest command string per vehicle
        #[arg(long, default_value_t = DEFAULT_RANDOM_STEPS)]
        steps: usize,

        #[arg(long, env = "AUTO_DRIVE_WIDTH", default_value_t = DEFAULT_GRID_WIDTH)]
        width: i32,

        #[arg(long, env = "AUTO_DRIVE_HEIGHT", default_value_t = DEFAULT_GRID_HEIGHT)]
        height: i32,

        /// Seed for a reproducible fleet
        #[arg(long, env = "AUTO_DRIVE_SEED")]
        seed: Option<u64>,

        #[arg(long)]
        stats: bool,
    },
    /// Run the two bundled sample inputs
    Demo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Single {
            width,
            height,
            x,
            y,
            heading,
            commands,
        } => {
            let (x, y, heading) = simulate_single(width, height, x, y, heading, &commands)?;
            println!("{} {} {}", x, y, heading);
        }
        Commands::Multi {
            scenario,
            stats,
            sequential,
        } => {
            let scenario = Scenario::from_path(&scenario)?;
            info!(vehicles = scenario.vehicles.len(), "scenario loaded");
            let stepper = scenario.build()?.with_force_sequential(sequential);
            run_and_report(stepper, stats);
        }
        Commands::Random {
            vehicles,
            steps,
            width,
            height,
            seed,
            stats,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let params = RandomParams {
                width,
                height,
                vehicles,
                max_commands: steps,
            };
            let scenario = Scenario::random(&mut rng, params)?;
            info!("generated scenario:\n{}", scenario.to_json()?);
            run_and_report(scenario.build()?, stats);
        }
        Commands::Demo => run_demo()?,
    }

    Ok(())
}

fn run_and_report(mut stepper: Stepper, stats: bool) {
    let result = stepper.run();
    println!("{}", result);
    if stats {
        stepper.statistics().display();
    }
}

fn run_demo() -> anyhow::Result<()> {
    println!("Single Car Simulation Result:");
    let (x, y, heading) = simulate_single(10, 10, 1, 2, 'N', "FFRFFFRRLF")?;
    println!("{} {} {}", x, y, heading);

    println!("\nMultiple Car Simulation Result:");
    let cars = [
        ("A", (1, 2, 'N'), "FFRFFFFRRL"),
        ("B", (7, 8, 'W'), "FFLFFFFFFF"),
    ];
    println!("{}", simulate_multiple(10, 10, &cars)?);
    Ok(())
}
