use crate::controllers::interactive::events::render_event::RenderEvent;

/// Called from the render worker thread once per completed, non-stale request.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
