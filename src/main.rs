use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use trackgen::{
    layout, GenerationRequest, GeneratorConfig, SharedCatalog, SpriteCatalog, TrackGenerator,
    TrackSource,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to trackgen.toml configuration file
    #[arg(short, long, default_value = "./trackgen.toml")]
    config: String,

    /// Path to the sprite atlas descriptor (JSON or YAML)
    #[arg(short, long, default_value = "./content/atlas.json")]
    atlas: String,

    /// Path to a layout description; takes precedence over --mode
    #[arg(short, long)]
    layout: Option<String>,

    /// Generation mode when no layout is given
    #[arg(short, long, value_enum, default_value_t = Mode::Random)]
    mode: Mode,

    /// Zone count override for random/straight modes
    #[arg(short, long)]
    num_zones: Option<usize>,

    /// Seed for the per-call random source; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the track descriptor here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override log level (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Random,
    Straight,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = args.log_level.as_deref().unwrap_or("info");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting trackgen v0.1.0");

    // Load configuration
    let config = GeneratorConfig::load_or_default(&args.config);
    info!("Configuration loaded from: {}", args.config);

    // Load the sprite atlas and publish it for the generation pipeline
    let shared = SharedCatalog::new();
    let catalog = SpriteCatalog::load_from_file(&args.atlas).await?;
    info!("Loaded sprite atlas with {} frame(s) from {}", catalog.len(), args.atlas);
    shared.install(catalog);

    let source = match &args.layout {
        Some(path) => {
            let specs = layout::load_layout_from_file(path).await?;
            info!("Loaded layout with {} zone group(s) from {}", specs.len(), path);
            TrackSource::Layout(specs)
        }
        None => {
            let num_zones = args.num_zones.unwrap_or(config.track.num_zones);
            match args.mode {
                Mode::Random => TrackSource::Random { num_zones },
                Mode::Straight => TrackSource::Straight { num_zones },
            }
        }
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Generation seed: {}", seed);

    let generator = TrackGenerator::new(shared, config);
    let descriptor = generator.generate(&GenerationRequest { source, seed })?;

    let json = serde_json::to_string_pretty(&descriptor)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Track descriptor written to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
