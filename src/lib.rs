mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use controllers::session::{ExplorerSession, SessionError};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, Deadline, NeverCancel};
pub use crate::core::actions::evaluate::evaluate::{
    EvaluateError, evaluate, evaluate_cancelable, evaluate_serial,
};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_grid::{EscapeGrid, EscapeGridError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::viewport::{Axis, Bounds, Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::escape_count;
pub use crate::core::fractals::mandelbrot::colour_maps::errors::ColourMapError;
pub use crate::core::fractals::mandelbrot::colour_maps::factory::colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_maps::kinds::{ColourMapKind, UnknownColourMap};
pub use crate::core::navigation::{
    NavigationCommand, NavigationError, NavigationSettings, Navigator, PanDirection,
};
pub use input::cli::args::{Cli, Command, ParameterArgs, RenderArgs, StoreArgs};
pub use input::cli::logging::init_logging;
pub use input::cli::parsers::{NavigationCommandParseError, parse_bounds};
pub use input::cli::run::{RunError, run};
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::{
    Clamped, ParameterStore, ParameterStoreError, RenderLimits, RenderLimitsError, RenderParameters,
    StoredParameters,
};
