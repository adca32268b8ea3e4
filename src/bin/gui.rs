use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use color_dropper::DropperConfig;
use color_dropper::gui_app::{LaunchOptions, run_iced_app};
use color_dropper::loader::ImageSource;
use color_dropper::logging;

#[derive(Parser, Debug)]
#[command(
    name = "color_dropper",
    about = "Pick colors from an image with a pixelated magnifier",
    version
)]
struct Cli {
    /// Image shown on start instead of the built-in palette
    #[arg(short = 'i', long = "image")]
    image: Option<PathBuf>,

    /// JSON file overriding magnifier and toast settings
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG is honoured)
    #[arg(long = "debug")]
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DropperConfig::load(path)?,
        None => DropperConfig::default(),
    };
    config.debug |= cli.debug;
    logging::init(config.debug);

    let initial_image = match cli.image {
        Some(path) => ImageSource::File(path),
        None => ImageSource::Builtin,
    };

    tracing::info!("starting color dropper");
    run_iced_app(LaunchOptions {
        config,
        initial_image,
    })?;
    Ok(())
}
