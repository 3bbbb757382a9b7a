use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::events::render_failure::RenderFailure;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_frame::parallel_frame_renderer::{
    ParallelFrameRenderer, RenderStrategy,
};
use crate::core::actions::render_frame::render_frame::RenderError;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    renderer: ParallelFrameRenderer,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

/// Renders the newest submitted request on a background thread.
///
/// Each request gets a generation number. Submitting a new request cancels
/// the frame in flight, and only frames whose generation is still current
/// reach the presenter. Cancelled frames publish nothing.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        Self::with_renderer(
            presenter_port,
            ParallelFrameRenderer::new().with_strategy(RenderStrategy::Rayon),
        )
    }

    pub fn with_renderer(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        renderer: ParallelFrameRenderer,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            renderer,
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name("interactive-render".into())
            .spawn(move || Self::worker_loop(&worker_shared));

        let worker = match worker {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::error!("could not start render thread: {}", err);
                None
            }
        };

        Self { shared, worker }
    }

    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = Self::render_request(&shared.renderer, &request, &cancel_token);
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                log::debug!("dropping superseded frame {}", job_generation);
                continue;
            }

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    viewport: request.viewport,
                    pixel_buffer,
                    render_duration,
                }),
                Err(RenderError::Cancelled(_)) => continue,
                Err(err) => {
                    log::error!("frame {} failed: {}", job_generation, err);

                    RenderEvent::Error(RenderFailure {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    fn render_request<C: CancelToken>(
        renderer: &ParallelFrameRenderer,
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<PixelBuffer, RenderError> {
        renderer.render_cancelable(
            &request.viewport,
            &request.kernel,
            &request.colour_map,
            cancel,
        )
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
