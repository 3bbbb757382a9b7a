pub mod controllers;
pub mod core;
pub mod presenters;

pub use controllers::cli::args::{ArgsError, CliArgs, USAGE, parse_args};
pub use controllers::cli::file_render::FileRenderController;
pub use controllers::interactive::{
    InteractiveController, InteractiveControllerPresenterPort, RenderEvent, RenderRequest,
};
pub use controllers::session::{FractalSession, SessionError};
pub use crate::core::actions::render_frame::parallel_frame_renderer::{
    ParallelFrameRenderer, RenderStrategy,
};
pub use crate::core::actions::zoom::zoom_controller::{InteractionEvent, ZoomOutcome};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::fractal_config::{ConfigError, FractalConfig, PlaneBounds};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use presenters::file::ppm::PpmFilePresenter;
