use std::num::NonZeroU32;
use std::time::Instant;

use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_frame::render_frame::RenderError;
use crate::core::actions::render_frame::render_frame_rayon::render_frame_rayon;
use crate::core::actions::render_frame::render_frame_scoped_threads::render_frame_scoped_threads;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::util::available_workers::available_workers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    /// One OS thread per tile, spawned fresh for every frame.
    #[default]
    ScopedThreads,
    /// A rayon pool built for every frame with exactly `workers` threads.
    Rayon,
}

/// Renders whole frames by splitting them into column tiles, one per worker.
///
/// The worker count is fixed when the renderer is created; the effective
/// count for a frame is never more than the frame's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelFrameRenderer {
    workers: NonZeroU32,
    strategy: RenderStrategy,
}

impl Default for ParallelFrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelFrameRenderer {
    /// Uses one worker per available hardware thread.
    #[must_use]
    pub fn new() -> Self {
        Self::with_workers(available_workers())
    }

    #[must_use]
    pub fn with_workers(workers: NonZeroU32) -> Self {
        Self {
            workers,
            strategy: RenderStrategy::default(),
        }
    }

    #[must_use]
    pub fn with_strategy(self, strategy: RenderStrategy) -> Self {
        Self { strategy, ..self }
    }

    pub fn workers(&self) -> NonZeroU32 {
        self.workers
    }

    pub fn strategy(&self) -> RenderStrategy {
        self.strategy
    }

    pub fn render<Alg, CMap>(
        &self,
        viewport: &Viewport,
        algorithm: &Alg,
        colour_map: &CMap,
    ) -> Result<PixelBuffer, RenderError>
    where
        Alg: FractalAlgorithm + Sync,
        CMap: ColourMap<Alg::Success> + Sync,
    {
        self.render_cancelable(viewport, algorithm, colour_map, &NeverCancel)
    }

    /// Renders a frame, giving up between columns once `cancel` fires.
    ///
    /// Pixels whose value could not be computed are written in the fallback
    /// colour and reported as one warning per frame.
    pub fn render_cancelable<Alg, CMap, C>(
        &self,
        viewport: &Viewport,
        algorithm: &Alg,
        colour_map: &CMap,
        cancel: &C,
    ) -> Result<PixelBuffer, RenderError>
    where
        Alg: FractalAlgorithm + Sync,
        CMap: ColourMap<Alg::Success> + Sync,
        C: CancelToken,
    {
        let pixel_rect = viewport.pixel_rect();
        log::debug!(
            "rendering {}x{} frame of {} with {} workers ({:?}, colours: {})",
            pixel_rect.width(),
            pixel_rect.height(),
            viewport.region(),
            self.workers,
            self.strategy,
            colour_map.display_name()
        );

        let started = Instant::now();
        let (pixel_buffer, faults) = match self.strategy {
            RenderStrategy::ScopedThreads => render_frame_scoped_threads(
                viewport,
                algorithm,
                colour_map,
                self.workers,
                cancel,
            ),
            RenderStrategy::Rayon => {
                render_frame_rayon(viewport, algorithm, colour_map, self.workers, cancel)
            }
        }?;

        if faults > 0 {
            log::warn!(
                "{} of {} pixels could not be computed and were drawn in the fallback colour",
                faults,
                pixel_rect.size()
            );
        }

        log::info!(
            "rendered {}x{} frame in {:.1?}",
            pixel_rect.width(),
            pixel_rect.height(),
            started.elapsed()
        );

        Ok(pixel_buffer)
    }
}
