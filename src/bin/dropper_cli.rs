use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use color_dropper::loader::{ImageSource, load_image};
use color_dropper::sampler::PointerPosition;
use color_dropper::{DropperConfig, DropperState, logging};

#[derive(Parser, Debug)]
#[command(
    name = "dropper_cli",
    about = "Sample one pixel of an image and optionally export the magnifier",
    version
)]
struct Cli {
    /// Input image (defaults to the built-in palette)
    #[arg(short = 'i', long = "image")]
    image: Option<PathBuf>,

    /// Canvas-local x coordinate
    #[arg(short = 'x')]
    x: f32,

    /// Canvas-local y coordinate
    #[arg(short = 'y')]
    y: f32,

    /// Container size the canvas is fitted to, as WIDTHxHEIGHT
    #[arg(long = "container", value_parser = parse_size, default_value = "0x0")]
    container: (u32, u32),

    /// Write the pixelated magnifier inset to this PNG
    #[arg(short = 'm', long = "magnifier")]
    magnifier: Option<PathBuf>,

    /// JSON config file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    #[arg(long = "debug")]
    debug: bool,
}

fn parse_size(raw: &str) -> Result<(u32, u32), String> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {raw:?}"))?;
    let w = w.trim().parse::<u32>().map_err(|e| e.to_string())?;
    let h = h.trim().parse::<u32>().map_err(|e| e.to_string())?;
    Ok((w, h))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DropperConfig::load(path)?,
        None => DropperConfig::default(),
    };
    logging::init(config.debug || cli.debug);

    let source = match cli.image {
        Some(path) => ImageSource::File(path),
        None => ImageSource::Builtin,
    };
    let loaded = load_image(source).await?;

    let mut state = DropperState::new(config, cli.container);
    state.image_loaded(loaded.pixels);
    state.activate();

    let position = PointerPosition::new(cli.x, cli.y);
    let Some(scene) = state.pointer_moved(position) else {
        return Err("nothing to sample".into());
    };

    if let Some(out) = &cli.magnifier {
        let inset = scene.ops().iter().find_map(|op| match op {
            color_dropper::scene::DrawOp::Inset { pixels, .. } => Some(pixels.clone()),
            _ => None,
        });
        if let Some(inset) = inset {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            inset.save(out)?;
            println!("wrote {}", out.display());
        }
    }

    let (canvas_w, canvas_h) = state.canvas().size();
    let Some(color) = state.sampled() else {
        return Err("nothing to sample".into());
    };
    println!("canvas: {canvas_w}x{canvas_h}");
    println!("hex: {}", color.hex());
    println!("rgb: {}", color.css_rgb());
    Ok(())
}
