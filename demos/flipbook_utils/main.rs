//! Animation definition utility.
//!
//! Provides two subcommands:
//! - `inspect`: summarise every definition in a JSON or YAML file.
//! - `simulate`: play one definition at a fixed or jittered tick rate and log every
//!   trigger it emits.

use std::{
	fs,
	path::{Path, PathBuf},
	sync::{Arc, Mutex},
	time::Duration,
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use flipbook_rs::prelude::*;
use log::{info, warn};
use rand::{Rng, SeedableRng, rngs::SmallRng};

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Inspect(opts) => run_inspect(opts),
		Command::Simulate(opts) => run_simulate(opts),
	}
}

#[derive(Parser)]
#[command(name = "flipbook_utils")]
#[command(author = "flipbook-rs project")]
#[command(version)]
#[command(about = "Inspect and simulate sprite-sheet animation definitions", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Summarise the definitions stored in a file
	Inspect(InspectArgs),
	/// Play one definition and log its triggers
	Simulate(SimulateArgs),
}

#[derive(Args)]
struct InspectArgs {
	/// JSON or YAML file containing a list of definitions
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Also list every frame
	#[arg(short, long, default_value_t = false)]
	verbose: bool,
}

#[derive(Args)]
struct SimulateArgs {
	/// JSON or YAML file containing a list of definitions
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Name of the animation to play
	#[arg(short, long)]
	name: String,

	/// Ticks per second of the simulated game loop
	#[arg(long, default_value_t = 60.0)]
	tick_rate: f64,

	/// Total simulated time in milliseconds
	#[arg(short, long, value_name = "MS", default_value_t = 2000)]
	duration: u64,

	/// Random variation applied to every tick, as a fraction of the tick length
	#[arg(long, default_value_t = 0.0)]
	jitter: f64,

	/// Seed for the jitter generator
	#[arg(long, default_value_t = 0)]
	seed: u64,

	/// Playback speed multiplier
	#[arg(long, default_value_t = 1.0)]
	speed: f32,

	/// Frame to start from
	#[arg(long, default_value_t = 0)]
	start: usize,

	/// Force looping on
	#[arg(long = "loop", default_value_t = false)]
	force_loop: bool,

	/// Use the lenient playback limits
	#[arg(long, default_value_t = false)]
	lenient: bool,
}

fn load_library(path: &Path, config: PlaybackConfig) -> Result<AnimationLibrary> {
	let text = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
	let extension = path
		.extension()
		.and_then(|ext| ext.to_str())
		.map(str::to_ascii_lowercase)
		.unwrap_or_default();

	let definitions: Vec<AnimationDefinition> = match extension.as_str() {
		"json" => {
			serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))?
		}
		"yaml" | "yml" => {
			serde_yaml::from_str(&text).with_context(|| format!("Invalid YAML in {}", path.display()))?
		}
		other => bail!("Unsupported definition format '{}' (expected json, yaml or yml)", other),
	};

	let mut library = AnimationLibrary::with_config(config);
	for definition in definitions {
		if let Err(err) = definition.validate() {
			warn!("Skipping {}: {}", definition.name(), err);
			continue;
		}
		if definition.is_degenerate() {
			warn!("{} has no frame with a non-zero duration", definition.name());
		}
		if library.insert(definition).is_some() {
			warn!("Duplicate animation name in {}, keeping the last one", path.display());
		}
	}
	Ok(library)
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let library = load_library(&args.file, PlaybackConfig::default())?;
	if library.is_empty() {
		println!("No animations found in {}", args.file.display());
		return Ok(());
	}

	println!("File: {} ({} animations)", args.file.display(), library.len());
	for name in library.names() {
		let Some(definition) = library.get(name) else {
			continue;
		};
		println!("  {} - total {:?}", definition, definition.total_duration());
		if args.verbose {
			for (i, frame) in definition.frames().iter().enumerate() {
				println!("    [{:>3}] {}", i, frame);
			}
		}
	}
	Ok(())
}

fn run_simulate(args: SimulateArgs) -> Result<()> {
	if !(args.tick_rate.is_finite() && args.tick_rate > 0.0) {
		bail!("Tick rate must be positive, got {}", args.tick_rate);
	}
	if !(0.0..1.0).contains(&args.jitter) {
		bail!("Jitter must be within [0, 1), got {}", args.jitter);
	}

	let config = if args.lenient {
		PlaybackConfig::lenient()
	} else {
		PlaybackConfig::default()
	};
	let library = load_library(&args.file, config)?;
	let mut controller = library.controller(&args.name)?;
	controller.set_speed(args.speed)?;
	if args.force_loop {
		controller.set_looping(true);
	}

	let clock = Arc::new(Mutex::new(Duration::ZERO));
	let listener_clock = Arc::clone(&clock);
	controller.subscribe(move |controller, trigger| {
		let now = listener_clock.lock().map(|t| *t).unwrap_or_default();
		info!(
			"{:>8.1}ms  {:<18} frame #{} (index {})",
			now.as_secs_f64() * 1000.0,
			trigger,
			controller.internal_frame(),
			controller.current_frame()
		);
	});

	controller.play_from(args.start)?;
	info!("Playing {} from frame {}", controller.name(), args.start);

	let tick = 1.0 / args.tick_rate;
	let total = Duration::from_millis(args.duration);
	let mut rng = SmallRng::seed_from_u64(args.seed);
	let mut ticks = 0usize;

	while controller.is_animating() {
		let now = *clock.lock().map_err(|_| anyhow::anyhow!("clock poisoned"))?;
		if now >= total {
			break;
		}
		let variation = if args.jitter > 0.0 {
			rng.random_range(-args.jitter..args.jitter)
		} else {
			0.0
		};
		let elapsed = Duration::from_secs_f64(tick * (1.0 + variation));
		if let Ok(mut clock) = clock.lock() {
			*clock += elapsed;
		}
		controller.update(elapsed)?;
		ticks += 1;
	}

	info!(
		"Finished after {} ticks in state {} on frame {}",
		ticks,
		controller.state(),
		controller.current_frame()
	);
	Ok(())
}
