use crate::controllers::description::controller::Description;

/// Receives each description that is still current when it completes.
pub trait DescriptionPresenterPort: Send + Sync {
    fn present(&self, description: Description);
}
