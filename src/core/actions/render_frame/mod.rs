pub mod parallel_frame_renderer;
pub mod ports;
#[allow(clippy::module_inception)]
pub mod render_frame;
pub mod render_frame_rayon;
pub mod render_frame_scoped_threads;
