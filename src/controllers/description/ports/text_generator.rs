use crate::controllers::description::errors::DescribeError;

/// An external text-generation service: prompt in, free text out.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, DescribeError>;
}
