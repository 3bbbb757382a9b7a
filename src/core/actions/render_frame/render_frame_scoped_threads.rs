use std::num::NonZeroU32;
use std::thread;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_frame::{RenderError, render_tile};
use crate::core::data::column_tile::ColumnTile;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_column_tiles::calculate_column_tiles;

/// Renders the viewport with one scoped OS thread per column tile.
///
/// All workers are joined before this returns, even when one of them panics
/// or the frame is cancelled. Returns the buffer and the number of pixels that
/// fell back to the fallback colour.
pub fn render_frame_scoped_threads<Alg, CMap, C>(
    viewport: &Viewport,
    algorithm: &Alg,
    colour_map: &CMap,
    max_workers: NonZeroU32,
    cancel: &C,
) -> Result<(PixelBuffer, u64), RenderError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
    C: CancelToken,
{
    let pixel_rect = viewport.pixel_rect();
    let tiles = calculate_column_tiles(max_workers, pixel_rect);
    let mut pixel_buffer = PixelBuffer::new(pixel_rect);

    let outcomes: Vec<(ColumnTile, thread::Result<Result<u64, Cancelled>>)> = {
        let slices = pixel_buffer.column_tiles_mut(&tiles)?;

        thread::scope(|scope| {
            tiles
                .iter()
                .zip(slices)
                .map(|(&tile, pixels)| {
                    let handle = scope.spawn(move || {
                        render_tile(tile, pixels, viewport, algorithm, colour_map, cancel)
                    });
                    (tile, handle)
                })
                .collect::<Vec<_>>()
                .into_iter()
                .map(|(tile, handle)| (tile, handle.join()))
                .collect()
        })
    };

    let mut faults = 0;
    let mut cancelled = None;

    for (tile, outcome) in outcomes {
        match outcome {
            Err(_) => return Err(RenderError::WorkerPanicked { tile }),
            Ok(Err(c)) => cancelled = Some(c),
            Ok(Ok(tile_faults)) => faults += tile_faults,
        }
    }

    if let Some(c) = cancelled {
        return Err(RenderError::Cancelled(c));
    }

    Ok((pixel_buffer, faults))
}
