use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::column_tile::ColumnTile;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

/// Written for any pixel whose orbit or colour could not be computed.
pub const FALLBACK_COLOUR: Colour = Colour::BLACK;

#[derive(Debug)]
pub enum RenderError {
    /// A worker panicked; the frame is discarded.
    WorkerPanicked { tile: ColumnTile },
    Cancelled(Cancelled),
    PixelBuffer(PixelBufferError),
    ThreadPool(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerPanicked { tile } => write!(
                f,
                "render worker for columns {}..{} panicked",
                tile.start, tile.end
            ),
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::ThreadPool(message) => write!(f, "could not start render workers: {}", message),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
            Self::WorkerPanicked { .. } | Self::ThreadPool(_) => None,
        }
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<Cancelled> for RenderError {
    fn from(err: Cancelled) -> Self {
        Self::Cancelled(err)
    }
}

/// Fills the column-major `pixels` slice owned by `tile`.
///
/// Returns how many pixels fell back to [`FALLBACK_COLOUR`]. Checks the cancel
/// token before each column.
pub(crate) fn render_tile<Alg, CMap, C>(
    tile: ColumnTile,
    pixels: &mut [u8],
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<u64, Cancelled>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
    C: CancelToken,
{
    let height = viewport.pixel_rect().height();
    let mut faults = 0;

    for x in tile.columns() {
        if cancel.is_cancelled() {
            return Err(Cancelled);
        }

        let column_offset = (x - tile.start) as usize * height as usize;

        for y in 0..height {
            let point = viewport.fractional_pixel_to_plane(x as f64, y as f64);

            let colour = match algorithm.compute(point) {
                Ok(value) => colour_map.map(value).ok(),
                Err(_) => None,
            }
            .unwrap_or_else(|| {
                faults += 1;
                FALLBACK_COLOUR
            });

            let index = (column_offset + y as usize) * BYTES_PER_PIXEL;
            pixels[index] = colour.r;
            pixels[index + 1] = colour.g;
            pixels[index + 2] = colour.b;
        }
    }

    Ok(faults)
}

/// Single-threaded reference render of the whole viewport.
pub fn render_frame_serial<Alg, CMap>(
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelBuffer, RenderError>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    render_frame_serial_cancelable(viewport, algorithm, colour_map, &NeverCancel)
        .map(|(pixel_buffer, _)| pixel_buffer)
}

/// Like [`render_frame_serial`], also returning the fallback pixel count.
pub fn render_frame_serial_cancelable<Alg, CMap, C>(
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    cancel: &C,
) -> Result<(PixelBuffer, u64), RenderError>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
    C: CancelToken,
{
    let pixel_rect = viewport.pixel_rect();
    let tile = ColumnTile {
        start: 0,
        end: pixel_rect.width(),
    };
    let mut pixel_buffer = PixelBuffer::new(pixel_rect);

    let faults = {
        let mut slices = pixel_buffer.column_tiles_mut(&[tile])?;
        render_tile(tile, &mut *slices[0], viewport, algorithm, colour_map, cancel)?
    };

    Ok((pixel_buffer, faults))
}
