use std::error::Error;
use std::fmt;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::actions::render_frame::parallel_frame_renderer::ParallelFrameRenderer;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_frame::RenderError;
use crate::core::actions::zoom::zoom_controller::{InteractionEvent, ZoomController, ZoomOutcome};
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::fractal_config::{ConfigError, FractalConfig};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::EscapeTimeKernel;
use crate::core::fractals::hsb_colour_map::HsbColourMap;

#[derive(Debug)]
pub enum SessionError {
    Config(ConfigError),
    Render(RenderError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<RenderError> for SessionError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

/// The operations a windowing host drives: render the current view, feed it
/// selection and undo input, and show the last frame that rendered
/// successfully.
///
/// Rendering blocks until every worker has finished, so the viewport only
/// ever changes between frames.
#[derive(Debug)]
pub struct FractalSession<Alg = EscapeTimeKernel, CMap = HsbColourMap> {
    zoom: ZoomController,
    algorithm: Alg,
    colour_map: CMap,
    renderer: ParallelFrameRenderer,
    last_frame: Option<PixelBuffer>,
}

impl FractalSession {
    /// Validates `config` and sets up a session at its initial bounds.
    pub fn new(config: FractalConfig) -> Result<Self, SessionError> {
        let viewport = config.viewport()?;
        let kernel = config.kernel()?;

        log::info!(
            "{} session: {}x{} pixels, {}",
            kernel.variant(),
            config.pixel_width,
            config.pixel_height,
            viewport.region()
        );

        Ok(Self::with_parts(viewport, kernel, HsbColourMap::new()))
    }

    /// Snapshot of the current view for a background render.
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            viewport: self.viewport(),
            kernel: self.algorithm,
            colour_map: self.colour_map,
        }
    }
}

impl<Alg, CMap> FractalSession<Alg, CMap>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    #[must_use]
    pub fn with_parts(viewport: Viewport, algorithm: Alg, colour_map: CMap) -> Self {
        Self {
            zoom: ZoomController::new(viewport),
            algorithm,
            colour_map,
            renderer: ParallelFrameRenderer::new(),
            last_frame: None,
        }
    }

    #[must_use]
    pub fn with_renderer(self, renderer: ParallelFrameRenderer) -> Self {
        Self { renderer, ..self }
    }

    pub fn viewport(&self) -> Viewport {
        self.zoom.viewport()
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    /// The most recent frame that rendered completely.
    pub fn last_frame(&self) -> Option<&PixelBuffer> {
        self.last_frame.as_ref()
    }

    /// Renders `viewport` without touching the session's state.
    pub fn render_viewport(&self, viewport: &Viewport) -> Result<PixelBuffer, RenderError> {
        self.renderer
            .render(viewport, &self.algorithm, &self.colour_map)
    }

    /// Renders the current viewport and keeps the result as the last frame.
    ///
    /// On failure the previous frame stays in place.
    pub fn render(&mut self) -> Result<&PixelBuffer, SessionError> {
        let viewport = self.viewport();

        match self.render_viewport(&viewport) {
            Ok(pixel_buffer) => Ok(&*self.last_frame.insert(pixel_buffer)),
            Err(err) => {
                log::error!("keeping previous frame: {}", err);
                Err(err.into())
            }
        }
    }

    pub fn handle(&mut self, event: InteractionEvent) -> ZoomOutcome {
        self.zoom.handle(event)
    }

    pub fn on_selection_start(&mut self, point: Complex) -> ZoomOutcome {
        self.zoom.begin_selection(point)
    }

    pub fn on_selection_drag(&mut self, point: Complex) -> ZoomOutcome {
        self.zoom.update_selection(point)
    }

    pub fn on_selection_commit(&mut self, point: Complex) -> ZoomOutcome {
        self.zoom.commit_selection(point)
    }

    pub fn on_undo_requested(&mut self) -> ZoomOutcome {
        self.zoom.request_undo()
    }

    /// Device-pixel form of [`Self::on_selection_start`].
    pub fn on_selection_start_at_pixel(&mut self, pixel: Point) -> ZoomOutcome {
        let point = self.viewport().pixel_to_plane(pixel);
        self.on_selection_start(point)
    }

    pub fn on_selection_drag_at_pixel(&mut self, pixel: Point) -> ZoomOutcome {
        let point = self.viewport().pixel_to_plane(pixel);
        self.on_selection_drag(point)
    }

    pub fn on_selection_commit_at_pixel(&mut self, pixel: Point) -> ZoomOutcome {
        let point = self.viewport().pixel_to_plane(pixel);
        self.on_selection_commit(point)
    }

    pub fn selection_preview(&self) -> Option<ComplexRect> {
        self.zoom.selection_preview()
    }

    /// The selection preview as fractional pixel corners `(min, max)`, for
    /// outlining it over the last frame.
    pub fn selection_preview_in_pixels(&self) -> Option<((f64, f64), (f64, f64))> {
        let viewport = self.viewport();

        self.selection_preview().map(|selection| {
            (
                viewport.plane_to_pixel(selection.min()),
                viewport.plane_to_pixel(selection.max()),
            )
        })
    }
}
