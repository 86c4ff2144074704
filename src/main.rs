//! Command line runner for Game of Life sessions

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use game_of_life_session::{
    config::{CliOverrides, Settings},
    game_of_life::{load_systems, save_system, GameOfLifeRules, Grid},
    seed::SeedDescriptor,
    session::{GameStatus, ManualScheduler},
    session_from_settings,
    utils::{ColorOutput, GridFormatter},
};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life_session")]
#[command(about = "Conway's Game of Life session runner")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a game, run it for a number of steps and print its status
    Run(RunArgs),

    /// List the available initial states and speeds
    Presets {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,
    },

    /// Check incremental stepping against full-grid evaluation
    Verify {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Seed preset name (overrides config)
        #[arg(short, long)]
        seed: Option<String>,

        /// Number of generations to check
        #[arg(short = 'n', long, default_value_t = 200)]
        steps: usize,

        /// Random generator seed for `random` presets
        #[arg(long)]
        rng_seed: Option<u64>,
    },

    /// Create a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Seed preset name (overrides config)
    #[arg(short, long, conflicts_with = "algo")]
    seed: Option<String>,

    /// Seed algorithm name: constant, random or selection
    #[arg(short, long)]
    algo: Option<String>,

    /// Seed algorithm argument, e.g. 20 or [[1,0],[1,1],[1,2]]
    #[arg(long, requires = "algo")]
    arg: Option<String>,

    /// Grid width in cells (overrides config)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells (overrides config)
    #[arg(long)]
    height: Option<usize>,

    /// Speed preset name (overrides config)
    #[arg(long, conflicts_with = "period")]
    speed: Option<String>,

    /// Tick period in milliseconds
    #[arg(long)]
    period: Option<u64>,

    /// Number of steps to run (overrides config)
    #[arg(short = 'n', long)]
    steps: Option<usize>,

    /// Wait one period between steps
    #[arg(long)]
    realtime: bool,

    /// Render the grid after every step
    #[arg(long)]
    show: bool,

    /// Save the final state under this name
    #[arg(long)]
    save: Option<String>,

    /// Random generator seed for `random` initial states
    #[arg(long)]
    rng_seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Run(args) => run_command(args),
        Commands::Presets { config } => presets_command(config),
        Commands::Verify { config, seed, steps, rng_seed } => verify_command(config, seed, steps, rng_seed),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load settings from `config_path`, or defaults when it does not exist, and
/// append the systems saved in the output directory
fn load_settings(config_path: &Path) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!("Config file {} not found, using defaults", config_path.display()))
        );
        Settings::default()
    };

    for system in load_systems(&settings.output.save_directory)? {
        debug!("Loaded saved system {}", system.name);
        settings.upsert_seed(system);
    }

    Ok(settings)
}

fn run_command(args: RunArgs) -> Result<()> {
    let mut settings = load_settings(&args.config)?;
    settings.merge_with_cli(&CliOverrides {
        width: args.width,
        height: args.height,
        steps: args.steps,
        seed: args.seed.clone(),
        speed: args.speed.clone(),
        rng_seed: args.rng_seed,
        realtime: args.realtime,
    });
    settings.validate().context("Configuration validation failed")?;

    let descriptor = match args.algo {
        Some(ref algo) => SeedDescriptor::parse(algo, args.arg.as_deref())?,
        None => settings.default_seed()?.descriptor(),
    };
    let period = match args.period {
        Some(period) => period,
        None => settings.default_speed()?.period,
    };

    let scheduler = ManualScheduler::new();
    let host_view = scheduler.clone();
    let observer = |status: &GameStatus| println!("{}", GridFormatter::format_status(status));

    let mut session = session_from_settings(&settings, observer, scheduler)?;
    info!(
        "Grid {}x{}, seed {}, period {} ms",
        session.grid().width(),
        session.grid().height(),
        descriptor.name,
        period
    );

    session.create_game(&descriptor).context("Failed to create game")?;
    if args.show {
        println!("{}", GridFormatter::format_grid_compact(session.grid()));
    }

    session.start_game(period)?;
    let mut steps = 0;
    while host_view.is_active() && steps < settings.run.steps {
        if settings.run.realtime {
            std::thread::sleep(Duration::from_millis(period));
        }
        session.tick();
        steps += 1;

        if args.show {
            println!("{}", GridFormatter::format_grid_compact(session.grid()));
        }
    }
    session.stop_game();

    let status = session.status();
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Finished after {} steps: {} of {} cells alive (min {}, max {})",
            status.steps_count, status.lived_current, status.capacity, status.lived_min, status.lived_max
        ))
    );

    if let Some(ref name) = args.save {
        let saved = session.save_game()?;
        let path = save_system(&settings.output.save_directory, name, &saved)
            .with_context(|| format!("Failed to save system {}", name))?;
        println!("{}", ColorOutput::success(&format!("Saved {} to {}", name, path.display())));
    }

    Ok(())
}

fn presets_command(config_path: PathBuf) -> Result<()> {
    let settings = load_settings(&config_path)?;
    print!("{}", GridFormatter::format_presets(&settings.seeds, &settings.speeds));
    Ok(())
}

fn verify_command(config_path: PathBuf, seed: Option<String>, steps: usize, rng_seed: Option<u64>) -> Result<()> {
    let settings = load_settings(&config_path)?;
    let preset = match seed {
        Some(ref name) => settings.find_seed(name)?,
        None => settings.default_seed()?,
    };
    let algorithm = preset.descriptor().resolve()?;

    let (width, height) = settings.grid.dimensions()?;
    let mut grid = Grid::new(width, height)?;
    let mut rng = match rng_seed.or(settings.run.rng_seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let generator = algorithm.generator(&grid, &mut rng);
    grid.seed(generator);

    println!(
        "{}",
        ColorOutput::info(&format!("Verifying {} on a {}x{} grid for {} steps", preset.name, width, height, steps))
    );

    for step in 1..=steps {
        if let Some(index) = GameOfLifeRules::checked_step(&mut grid) {
            let [x, y] = grid.relative_coord(index);
            println!(
                "{}",
                ColorOutput::error(&format!("Step {}: cell ({}, {}) differs from full-grid evaluation", step, x, y))
            );
            anyhow::bail!("Incremental stepping diverged at step {}", step);
        }
    }

    println!(
        "{}",
        ColorOutput::success(&format!(
            "All {} steps match full-grid evaluation ({} cells alive)",
            steps,
            grid.status().alive_count
        ))
    );
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration..."));

    let config_dir = directory.join("config");
    let save_dir = directory.join("output/saves");

    for dir in [&config_dir, &save_dir] {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Example configuration: the glider gun on a wider board
    let examples_dir = config_dir.join("examples");
    let mut gun = Settings::default();
    gun.grid.width = Some(80);
    gun.grid.height = Some(30);
    gun.run.seed = Some("Gosper glider gun".to_string());
    gun.run.speed = Some("Fast".to_string());
    gun.to_file(&examples_dir.join("glider_gun.yaml"))?;
    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --config {}", config_path.display());

    Ok(())
}
