use std::path::PathBuf;
use std::process;

use clap::Parser;

use raycast::color::Color;
use raycast::canvas::PpmFormat;
use raycast::config::{ RenderOptions, render_to_file };

/// Raycasts a JSON scene of spheres, planes and lights into a PPM image.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Image width, in pixels
    width: usize,

    /// Image height, in pixels
    height: usize,

    /// Scene description (JSON array of camera/sphere/plane/light records)
    scene_file: PathBuf,

    /// Where to write the image
    output_file: PathBuf,

    /// Color of pixels that hit nothing, as r,g,b
    #[clap(long, default_value = "0,0,0")]
    background: Color,

    /// Image format: p6 (binary) or p3 (ASCII)
    #[clap(long, default_value = "p6")]
    format: PpmFormat,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let args = Args::parse();

    let mut options = RenderOptions::new(
        args.width, args.height, args.scene_file, args.output_file
    );
    options.background = args.background;
    options.format = args.format;

    if let Err(e) = render_to_file(&options) {
        log::debug!("{:?}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
