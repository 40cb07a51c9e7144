// main.rs
//
// Build a Möbius strip from the command line (or the defaults), print its
// surface area and edge length, and write the rendering / mesh exports.

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use mobius_strip::float_types::Real;
use mobius_strip::{MobiusParams, MobiusStrip};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mobius-strip", about = "Surface area and edge length of a Möbius strip", allow_negative_numbers = true)]
struct Cli {
    /// Radius of the center circle (R > 0) [default: 1.0]
    #[arg(long, short = 'R')]
    radius: Option<f64>,

    /// Full strip width (w > 0) [default: 0.2]
    #[arg(long, short = 'w')]
    width: Option<f64>,

    /// Samples along each parameter (n >= 2) [default: 200]
    #[arg(long, short = 'n')]
    resolution: Option<usize>,

    /// Samples across the strip, if different from --resolution
    #[arg(long)]
    resolution_v: Option<usize>,

    /// Output image path
    #[arg(long, short = 'o', default_value = "mobius_strip.png")]
    output: PathBuf,

    /// Skip writing the image
    #[arg(long)]
    no_render: bool,

    /// Also export the sampled mesh as STL (ASCII when the name ends in `ascii.stl`)
    #[arg(long)]
    stl: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 1000)]
    image_width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 700)]
    image_height: u32,
}

impl Cli {
    /// Flags layered over [`MobiusParams::default`].
    #[allow(clippy::unnecessary_cast)]
    fn params(&self) -> MobiusParams {
        let defaults = MobiusParams::default();
        let resolution = self.resolution.unwrap_or(defaults.resolution_u);
        MobiusParams {
            radius: self.radius.map_or(defaults.radius, |r| r as Real),
            width: self.width.map_or(defaults.width, |w| w as Real),
            resolution_u: resolution,
            resolution_v: self.resolution_v.unwrap_or(resolution),
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let params = cli.params();
    let strip = MobiusStrip::from_params(&params).context("invalid Möbius strip parameters")?;
    strip.log_summary();

    println!("Computed Properties:");
    println!("Surface Area: {:.5}", strip.surface_area());
    println!("Edge Length: {:.5}", strip.edge_length());

    if let Some(path) = &cli.stl {
        write_stl(&strip, path)?;
    }

    if !cli.no_render {
        write_image(&strip, cli)?;
    }
    Ok(())
}

#[cfg(feature = "stl-io")]
fn write_stl(strip: &MobiusStrip, path: &std::path::Path) -> anyhow::Result<()> {
    mobius_strip::io::write_stl_file(strip, "mobius_strip", path)
        .with_context(|| format!("failed to write STL to {}", path.display()))
}

#[cfg(not(feature = "stl-io"))]
fn write_stl(_strip: &MobiusStrip, path: &std::path::Path) -> anyhow::Result<()> {
    anyhow::bail!("cannot write {}: built without the `stl-io` feature", path.display())
}

#[cfg(feature = "image-io")]
fn write_image(strip: &MobiusStrip, cli: &Cli) -> anyhow::Result<()> {
    use mobius_strip::render::{RenderOptions, save_png};

    let opts = RenderOptions { width: cli.image_width, height: cli.image_height, ..RenderOptions::default() };
    save_png(strip.samples(), &cli.output, &opts)
        .with_context(|| format!("failed to write image to {}", cli.output.display()))
}

#[cfg(not(feature = "image-io"))]
fn write_image(_strip: &MobiusStrip, cli: &Cli) -> anyhow::Result<()> {
    log::warn!("built without the `image-io` feature, not writing {}", cli.output.display());
    Ok(())
}

fn main() {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();
    info!("starting with {:?}", cli.params());

    if let Err(err) = run(&cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_default_params() {
        let cli = Cli::parse_from(["mobius-strip"]);
        assert_eq!(cli.params(), MobiusParams::default());
        assert_eq!(cli.output, PathBuf::from("mobius_strip.png"));
        assert!(!cli.no_render);
        assert!(cli.stl.is_none());
    }

    #[test]
    fn resolution_v_layers_over_resolution() {
        let cli = Cli::parse_from(["mobius-strip", "-n", "31", "--resolution-v", "7"]);
        let params = cli.params();
        assert_eq!(params.resolution_u, 31);
        assert_eq!(params.resolution_v, 7);

        let params = Cli::parse_from(["mobius-strip", "-n", "31"]).params();
        assert_eq!(params.resolution_v, 31);

        let params = Cli::parse_from(["mobius-strip", "-R", "2.5", "-w", "0.5"]).params();
        assert_eq!(params.radius, 2.5);
        assert_eq!(params.width, 0.5);
        assert_eq!(params.resolution_u, MobiusParams::default().resolution_u);
    }

    #[test]
    fn invalid_parameters_fail_the_run() {
        for args in [
            ["mobius-strip", "-R", "0", "--no-render"],
            ["mobius-strip", "-w", "-1", "--no-render"],
            ["mobius-strip", "-n", "1", "--no-render"],
        ] {
            let err = run(&Cli::parse_from(args)).unwrap_err();
            assert!(
                err.chain().any(|cause| cause.to_string().contains("InvalidParameter")),
                "{args:?}: unexpected error {err:#}"
            );
        }
    }

    #[test]
    fn valid_run_without_outputs_succeeds() {
        assert!(run(&Cli::parse_from(["mobius-strip", "-n", "21", "--no-render"])).is_ok());
    }
}
