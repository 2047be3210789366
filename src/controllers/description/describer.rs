use crate::controllers::description::errors::DescribeError;

pub const FALLBACK_DESCRIPTION: &str =
    "The complexity here is infinite. The deeper you go, the more patterns emerge from the chaos.";

/// Returned when a describer answers with nothing.
pub const UNINTERPRETABLE_DESCRIPTION: &str = "Unable to interpret view.";

pub trait ViewDescriber: Send + Sync {
    fn describe(&self, center_x: f64, center_y: f64, zoom: f64) -> Result<String, DescribeError>;
}

/// Describes a view without ever failing. No retries.
pub fn describe_view(describer: &dyn ViewDescriber, center_x: f64, center_y: f64, zoom: f64) -> String {
    match describer.describe(center_x, center_y, zoom) {
        Ok(text) if text.trim().is_empty() => UNINTERPRETABLE_DESCRIPTION.to_string(),
        Ok(text) => text,
        Err(err) => {
            log::warn!("{}; using fallback description", err);
            FALLBACK_DESCRIPTION.to_string()
        }
    }
}
