use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives finished frames and failures from the render worker thread.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
