//! noisemap CLI - seeded fractal noise height maps.
//!
//! Builds a parameter bundle from a preset, an optional JSON file and
//! command-line overrides, generates the map and writes it to stdout.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, Level};

use noisemap::noise::{CoherentNoise, Perlin, Simplex};
use noisemap::terrain::{
    generate_with, observe_range, sample_raw_heights, NoiseMap, NoiseMapParams, RangeTracking,
};

/// Seeded fractal noise height map generator.
#[derive(Parser)]
#[command(name = "noisemap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a noise map and print it.
    Generate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output format.
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Decimal places for text output.
        #[arg(long, default_value = "3")]
        precision: usize,
    },

    /// Display the derived octave offsets and raw height range.
    Info {
        #[command(flatten)]
        params: ParamArgs,
    },
}

/// Parameter sources shared by every subcommand.
#[derive(clap::Args)]
struct ParamArgs {
    /// JSON parameters file; flags given on the command line take precedence.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Starting preset (ignored when --params is given).
    #[arg(long, default_value = "default")]
    preset: Preset,

    /// Map width in cells.
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i32>,

    /// Map height in cells.
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i32>,

    /// Random seed for reproducible generation.
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i32>,

    /// Cells per noise unit (non-positive values fall back to a tiny scale).
    #[arg(long, allow_negative_numbers = true)]
    scale: Option<f32>,

    /// Number of noise octaves.
    #[arg(long)]
    octaves: Option<u32>,

    /// Amplitude decay per octave (persistence).
    #[arg(long, allow_negative_numbers = true)]
    persistence: Option<f32>,

    /// Frequency multiplier per octave (lacunarity).
    #[arg(long, allow_negative_numbers = true)]
    lacunarity: Option<f32>,

    /// Horizontal sampling offset.
    #[arg(long, allow_negative_numbers = true)]
    offset_x: Option<f32>,

    /// Vertical sampling offset.
    #[arg(long, allow_negative_numbers = true)]
    offset_y: Option<f32>,

    /// How the normalization range is tracked.
    #[arg(long)]
    range_tracking: Option<Tracking>,

    /// Coherent noise primitive.
    #[arg(long, default_value = "perlin")]
    noise: NoiseKind,

    /// Clamp width, height and lacunarity into host-safe ranges first.
    #[arg(long)]
    sanitize: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// Balanced general-purpose terrain.
    Default,
    /// Broad landmasses with sharp coastal detail.
    Islands,
    /// Smooth, low-detail terrain.
    RollingHills,
}

#[derive(Clone, Copy, ValueEnum)]
enum Tracking {
    /// Classic visit-order minimum tracking.
    Reference,
    /// True global minimum and maximum.
    Global,
}

#[derive(Clone, Copy, ValueEnum)]
enum NoiseKind {
    /// Classic gradient-lattice Perlin noise.
    Perlin,
    /// SIMD simplex noise.
    Simplex,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Whitespace-separated rows.
    Text,
    /// JSON object with width, height and row-major values.
    Json,
}

impl From<Tracking> for RangeTracking {
    fn from(tracking: Tracking) -> Self {
        match tracking {
            Tracking::Reference => RangeTracking::Reference,
            Tracking::Global => RangeTracking::Global,
        }
    }
}

impl NoiseKind {
    fn primitive(self) -> Box<dyn CoherentNoise> {
        match self {
            NoiseKind::Perlin => Box::new(Perlin::default()),
            NoiseKind::Simplex => Box::new(Simplex::default()),
        }
    }
}

impl ParamArgs {
    fn resolve(&self) -> Result<NoiseMapParams> {
        let mut params = match &self.params {
            Some(path) => NoiseMapParams::from_json_file(path)
                .with_context(|| format!("failed to load parameters from {}", path.display()))?,
            None => match self.preset {
                Preset::Default => NoiseMapParams::default(),
                Preset::Islands => NoiseMapParams::islands(0),
                Preset::RollingHills => NoiseMapParams::rolling_hills(0),
            },
        };

        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(seed) = self.seed {
            params.noise.seed = seed;
        }
        if let Some(scale) = self.scale {
            params.noise.scale = scale;
        }
        if let Some(octaves) = self.octaves {
            params.noise.octaves = octaves;
        }
        if let Some(persistence) = self.persistence {
            params.noise.persistence = persistence;
        }
        if let Some(lacunarity) = self.lacunarity {
            params.noise.lacunarity = lacunarity;
        }
        if let Some(x) = self.offset_x {
            params.noise.offset.x = x;
        }
        if let Some(y) = self.offset_y {
            params.noise.offset.y = y;
        }
        if let Some(tracking) = self.range_tracking {
            params.range_tracking = tracking.into();
        }

        if self.sanitize {
            params = params.sanitized();
        }

        debug!(?params, "resolved parameters");
        Ok(params)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Generate {
            params,
            format,
            precision,
        } => run_generate(&params, format, precision),
        Commands::Info { params } => run_info(&params),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run_generate(args: &ParamArgs, format: OutputFormat, precision: usize) -> Result<()> {
    let params = args.resolve()?;
    let noise = args.noise.primitive();

    let start = Instant::now();
    let map = generate_with(&params, noise.as_ref())?;
    debug!(elapsed = ?start.elapsed(), "generation complete");

    match format {
        OutputFormat::Text => print!("{}", format_text(&map, precision)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&map)?),
    }

    Ok(())
}

fn run_info(args: &ParamArgs) -> Result<()> {
    let params = args.resolve()?;
    let noise = args.noise.primitive();

    println!("noisemap - parameter info");
    println!("=========================");
    println!("Map: {}x{}", params.width, params.height);
    println!("Seed: {}", params.noise.seed);
    println!(
        "Scale: {} (effective {})",
        params.noise.scale,
        params.noise.effective_scale()
    );
    println!("Octaves: {}", params.noise.octaves);
    println!("Persistence: {}", params.noise.persistence);
    println!("Lacunarity: {}", params.noise.lacunarity);
    println!("Offset: ({}, {})", params.noise.offset.x, params.noise.offset.y);

    println!("\nOctave offsets:");
    let mut frequency = 1.0f32;
    let mut amplitude = 1.0f32;
    for (i, offset) in params.noise.octave_offsets().iter().enumerate() {
        println!(
            "  [{}] offset ({:>10.3}, {:>10.3})  frequency {:<8.4} amplitude {:.4}",
            i, offset.x, offset.y, frequency, amplitude
        );
        frequency *= params.noise.lacunarity;
        amplitude *= params.noise.persistence;
    }

    let raw = sample_raw_heights(&params, noise.as_ref())?;
    let (min, max) = raw.height_range();
    let tracked = observe_range(&raw, params.range_tracking);
    println!("\nRaw heights: min {:.5}, max {:.5}", min, max);
    println!(
        "Normalization range ({:?}): min {:.5}, max {:.5}{}",
        params.range_tracking,
        tracked.min,
        tracked.max,
        if tracked.is_degenerate() { " (degenerate)" } else { "" }
    );
    println!("Center sample: {:.5}", raw.get(raw.width / 2, raw.height / 2));

    Ok(())
}

/// Formats the map as one whitespace-separated line per row.
fn format_text(map: &NoiseMap, precision: usize) -> String {
    let mut out = String::new();
    for row in map.rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{:.*}", precision, v)).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text() {
        let map = NoiseMap::from_values(2, 2, vec![0.0, 1.0, 0.25, 0.5]);
        assert_eq!(format_text(&map, 2), "0.00 1.00\n0.25 0.50\n");
    }

    #[test]
    fn test_cli_overrides_preset() {
        let cli = Cli::try_parse_from([
            "noisemap", "generate", "--preset", "islands", "--width", "8", "--seed", "-3",
            "--offset-x", "-1.5", "--range-tracking", "global",
        ])
        .unwrap();

        let Commands::Generate { params, .. } = cli.command else {
            panic!("expected generate");
        };
        let resolved = params.resolve().unwrap();
        assert_eq!(resolved.width, 8);
        assert_eq!(resolved.noise.seed, -3);
        assert_eq!(resolved.noise.offset.x, -1.5);
        assert_eq!(resolved.noise.octaves, NoiseMapParams::islands(0).noise.octaves);
        assert_eq!(resolved.range_tracking, RangeTracking::Global);
    }

    #[test]
    fn test_sanitize_flag() {
        let cli = Cli::try_parse_from(["noisemap", "info", "--width", "-4", "--sanitize"]).unwrap();
        let Commands::Info { params } = cli.command else {
            panic!("expected info");
        };
        assert_eq!(params.resolve().unwrap().width, 1);
    }
}
