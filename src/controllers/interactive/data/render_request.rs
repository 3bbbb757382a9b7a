use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::EscapeTimeKernel;
use crate::core::fractals::hsb_colour_map::HsbColourMap;

/// Everything needed to render one frame, captured when it was requested.
///
/// `PartialEq` lets a host skip submitting a request identical to the last one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub kernel: EscapeTimeKernel,
    pub colour_map: HsbColourMap,
}
