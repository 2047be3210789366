use crate::controllers::description::describer::ViewDescriber;
use crate::controllers::description::errors::DescribeError;
use crate::controllers::description::ports::text_generator::TextGenerator;

/// The tour-guide prompt sent to a text-generation service.
#[must_use]
pub fn describe_prompt(center_x: f64, center_y: f64, zoom: f64) -> String {
    format!(
        "You are a mathematical tour guide. The user is currently exploring the Mandelbrot set at these coordinates:\n\
         Real (X): {}\n\
         Imaginary (Y): {}\n\
         Zoom Scale: {} (smaller is deeper)\n\
         \n\
         Provide a poetic, brief (2-3 sentences) description of what a user might see in this fractal landscape.\n\
         Mention geometric terms like cardioids, bulbs, spirals, or filaments if appropriate.\n\
         Be engaging and scientific.",
        center_x, center_y, zoom
    )
}

/// Describes views by prompting a text generator.
pub struct PromptDescriber<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> PromptDescriber<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }
}

impl<G: TextGenerator> ViewDescriber for PromptDescriber<G> {
    fn describe(&self, center_x: f64, center_y: f64, zoom: f64) -> Result<String, DescribeError> {
        if !center_x.is_finite() || !center_y.is_finite() || !zoom.is_finite() {
            return Err(DescribeError::NonFiniteView);
        }
        self.generator
            .generate(&describe_prompt(center_x, center_y, zoom))
    }
}
