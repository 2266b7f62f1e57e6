//! Chakra overlay application: replays recorded landmark frames and emits
//! per-frame marker positions.

use anyhow::Result;
use chakra_overlay::{
    app::{AppConfig, ChakraApp},
    config::Config,
    source::FrameSource,
};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON-lines frame recording to replay (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Rendered video width in pixels
    #[arg(long)]
    width: Option<f32>,

    /// Rendered video height in pixels
    #[arg(long)]
    height: Option<f32>,

    /// Marker glyph size in pixels
    #[arg(long)]
    marker_size: Option<f32>,

    /// Disable the crown chakra (6 markers instead of 7)
    #[arg(long)]
    no_crown: bool,

    /// Mirror marker positions into the 3D scene output
    #[arg(long)]
    scene: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    example_config: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.example_config {
        print!("{}", chakra_overlay::config::EXAMPLE_CONFIG);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // Command-line flags override the configuration file
    if let Some(width) = args.width {
        config.display.width = width;
    }
    if let Some(height) = args.height {
        config.display.height = height;
    }
    if let Some(size) = args.marker_size {
        config.marker.size = size;
    }
    if args.no_crown {
        config.marker.crown_enabled = false;
    }
    if args.scene {
        config.scene.enabled = true;
    }

    let frame_source = match args.input {
        Some(path) => FrameSource::File(path.into()),
        None => FrameSource::Stdin,
    };
    info!("Starting chakra overlay");

    // Create and run application
    let mut app = ChakraApp::new(AppConfig {
        frame_source,
        config,
    })?;
    app.run()?;

    Ok(())
}
