use rayon::prelude::*;
use std::num::NonZeroU32;
use std::panic::{self, AssertUnwindSafe};

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_frame::{RenderError, render_tile};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::util::calculate_column_tiles::calculate_column_tiles;

/// Renders the viewport on a rayon pool sized to `max_workers`.
///
/// The pool lives for this one frame, so the configured worker count is the
/// real degree of parallelism rather than whatever the global pool has. A
/// panicking tile is caught and reported as [`RenderError::WorkerPanicked`].
pub fn render_frame_rayon<Alg, CMap, C>(
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

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(tiles.len())
        .thread_name(|index| format!("render-worker-{}", index))
        .build()
        .map_err(|err| RenderError::ThreadPool(err.to_string()))?;

    let faults = {
        let slices = pixel_buffer.column_tiles_mut(&tiles)?;

        pool.install(|| {
            tiles
                .par_iter()
                .zip(slices)
                .map(|(&tile, pixels)| {
                    panic::catch_unwind(AssertUnwindSafe(|| {
                        render_tile(tile, pixels, viewport, algorithm, colour_map, cancel)
                    }))
                    .map_err(|_| RenderError::WorkerPanicked { tile })?
                    .map_err(RenderError::Cancelled)
                })
                .collect::<Result<Vec<u64>, RenderError>>()
        })?
        .into_iter()
        .sum()
    };

    Ok((pixel_buffer, faults))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::{CancelFlag, NeverCancel};
    use crate::core::actions::render_frame::render_frame::render_frame_serial;
    use crate::core::actions::render_frame::render_frame::test_support::*;
    use crate::core::data::column_tile::ColumnTile;

    fn workers(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_matches_serial_for_any_worker_count() {
        let viewport = test_viewport(29, 13);
        let algorithm = StubSuccessAlgorithm {};
        let colour_map = StubColourMap {};

        let expected = render_frame_serial(&viewport, &algorithm, &colour_map).unwrap();

        for n in [1, 2, 5, 29, 100] {
            let (pixel_buffer, faults) = render_frame_rayon(
                &viewport,
                &algorithm,
                &colour_map,
                workers(n),
                &NeverCancel,
            )
            .unwrap();

            assert_eq!(pixel_buffer, expected, "worker count {}", n);
            assert_eq!(faults, 0);
        }
    }

    #[test]
    fn test_fault_count_sums_over_tiles() {
        let viewport = test_viewport(6, 5);

        let (pixel_buffer, faults) = render_frame_rayon(
            &viewport,
            &StubFailureAlgorithm {},
            &StubColourMap {},
            workers(3),
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(faults, 30);
        assert!(pixel_buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_worker_panic_fails_the_frame() {
        let viewport = test_viewport(8, 4);

        let result = render_frame_rayon(
            &viewport,
            &StubPanicAlgorithm { real_limit: 0.5 },
            &StubColourMap {},
            workers(4),
            &NeverCancel,
        );

        assert!(matches!(
            result,
            Err(RenderError::WorkerPanicked {
                tile: ColumnTile { start: 6, end: 8 }
            })
        ));
    }

    #[test]
    fn test_cancelled_before_start_returns_cancelled() {
        let viewport = test_viewport(16, 16);
        let cancel = CancelFlag::new();
        cancel.cancel();

        let result = render_frame_rayon(
            &viewport,
            &StubSuccessAlgorithm {},
            &StubColourMap {},
            workers(2),
            &cancel,
        );

        assert!(matches!(result, Err(RenderError::Cancelled(_))));
    }
}
