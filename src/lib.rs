mod controllers;
mod core;
mod presenters;
mod storage;

pub use controllers::cli::errors::CliError;
pub use controllers::cli::render_controller::CliRenderController;
pub use controllers::cli::render_options::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RenderOptions};
pub use controllers::description::describer::{
    FALLBACK_DESCRIPTION, UNINTERPRETABLE_DESCRIPTION, ViewDescriber, describe_view,
};
pub use controllers::description::errors::DescribeError;
pub use controllers::description::geometric::{GeometricDescriber, Region};
pub use controllers::description::ports::presenter_port::DescriptionPresenterPort;
pub use controllers::description::ports::text_generator::TextGenerator;
pub use controllers::description::prompt::{PromptDescriber, describe_prompt};
pub use controllers::description::{Description, DescriptionController};
pub use controllers::explorer::state::{CUSTOM_FORMULA_LABEL, ExplorerState};
pub use controllers::explorer::telemetry::Telemetry;
pub use controllers::interactive::InteractiveController;
pub use controllers::interactive::data::frame_data::FrameData;
pub use controllers::interactive::data::render_request::RenderRequest;
pub use controllers::interactive::errors::FrameError;
pub use controllers::interactive::events::render_event::RenderEvent;
pub use controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::renderer::errors::RenderError;
pub use controllers::renderer::fractal_renderer::{FractalRenderer, RenderSettings};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::formula::compiler::{FormulaCompiler, compile};
pub use crate::core::formula::errors::{EquationSide, FormulaError, ParseError};
pub use crate::core::formula::step::StepFunction;
pub use crate::core::fractals::escape_time::errors::ConfigError;
pub use crate::core::fractals::escape_time::fractal_config::{
    DEFAULT_MAX_ITERATIONS, FractalConfig, MAX_ITERATIONS_LIMIT,
};
pub use crate::core::fractals::presets::{
    Bookmark, EQUATION_PRESETS, EquationPreset, active_preset, bookmarks_for, find_preset,
};
pub use crate::core::palettes::errors::PaletteError;
pub use crate::core::palettes::kinds::PaletteKinds;
pub use crate::core::palettes::palette::Palette;
pub use presenters::file::ppm::PpmFilePresenter;
pub use storage::write_ppm::{save_ppm, write_ppm};
