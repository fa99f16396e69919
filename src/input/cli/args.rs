use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::data::viewport::Bounds;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;
use crate::core::navigation::NavigationCommand;
use crate::input::cli::parsers::parse_bounds;
use crate::storage::render_parameters::RenderParameters;

#[derive(Debug, Parser)]
#[command(name = "mandelbrot_explorer")]
#[command(version, about = "Mandelbrot escape-time renderer and viewport navigator", long_about = None)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a viewport and write it as a PPM image
    Render(RenderArgs),
    /// Insert a parameter record into a store
    Store(StoreArgs),
}

/// Parameter overrides shared by both subcommands.
#[derive(Debug, Clone, Args)]
pub struct ParameterArgs {
    #[arg(long, value_name = "N")]
    pub width: Option<u32>,

    #[arg(long, value_name = "N")]
    pub height: Option<u32>,

    #[arg(long, value_name = "N")]
    pub max_iter: Option<u32>,

    /// Viewport bounds (real_min,real_max,imag_min,imag_max)
    #[arg(long, value_name = "R0,R1,I0,I1", value_parser = parse_bounds, allow_hyphen_values = true)]
    pub bounds: Option<Bounds>,
}

impl ParameterArgs {
    /// Fills in whatever was given on the command line over `base`.
    #[must_use]
    pub fn overlay(&self, base: RenderParameters) -> RenderParameters {
        RenderParameters {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            max_iter: self.max_iter.unwrap_or(base.max_iter),
            bounds: self.bounds.or(base.bounds),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub parameters: ParameterArgs,

    /// Navigation command, applied in order: zoom-in[=r0,r1,i0,i1], zoom-out,
    /// pan=left|right|up|down, reset, bounds=r0,r1,i0,i1
    #[arg(long = "nav", value_name = "CMD", allow_hyphen_values = true)]
    pub navigation: Vec<NavigationCommand>,

    /// Colour map: cool-warm or fire
    #[arg(long, value_name = "MAP", default_value = "cool-warm")]
    pub colour_map: ColourMapKind,

    /// Parameter store to read the latest record from
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Give up on an evaluation that runs longer than this
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    #[arg(short, long, value_name = "FILE", default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct StoreArgs {
    #[command(flatten)]
    pub parameters: ParameterArgs,

    #[arg(long, value_name = "FILE")]
    pub store: PathBuf,
}
