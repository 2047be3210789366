use crate::controllers::cli::errors::CliError;
use crate::controllers::explorer::state::ExplorerState;
use crate::controllers::renderer::fractal_renderer::RenderSettings;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::presets::find_preset;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// What a single command-line render should produce.
///
/// Settings are applied in order: preset, custom equations, bookmark,
/// explicit centre and zoom, then iterations and palette.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub preset: Option<String>,
    pub real: Option<String>,
    pub imag: Option<String>,
    pub bookmark: Option<String>,
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
    pub zoom: Option<f64>,
    pub iterations: Option<u32>,
    pub palette: Option<String>,
    pub custom_palette: Vec<String>,
    pub parallel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            preset: None,
            real: None,
            imag: None,
            bookmark: None,
            center_x: None,
            center_y: None,
            zoom: None,
            iterations: None,
            palette: None,
            custom_palette: Vec::new(),
            parallel: false,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            parallel: self.parallel,
        }
    }

    pub fn build_state(&self) -> Result<ExplorerState, CliError> {
        let mut state = ExplorerState::new(self.width, self.height)?;

        if let Some(name) = &self.preset {
            let preset = find_preset(name).ok_or_else(|| CliError::UnknownPreset {
                name: name.clone(),
            })?;
            state.apply_preset(preset);
        }

        match (&self.real, &self.imag) {
            (Some(real), Some(imag)) => state.set_equations(real.as_str(), imag.as_str()),
            (None, None) => {}
            _ => return Err(CliError::IncompleteEquations),
        }

        if let Some(name) = &self.bookmark {
            let bookmark = state
                .bookmarks()
                .iter()
                .find(|bookmark| bookmark.name.eq_ignore_ascii_case(name.trim()))
                .ok_or_else(|| CliError::UnknownBookmark { name: name.clone() })?;
            state.jump_to_bookmark(bookmark)?;
        }

        if self.center_x.is_some() || self.center_y.is_some() || self.zoom.is_some() {
            let current = state.viewport();
            state.set_viewport(Viewport::new(
                self.center_x.unwrap_or(current.center_x()),
                self.center_y.unwrap_or(current.center_y()),
                self.zoom.unwrap_or(current.zoom()),
            )?);
        }

        if let Some(iterations) = self.iterations {
            state.set_max_iterations(iterations)?;
        }

        if let Some(name) = &self.palette {
            state.set_palette_by_name(name);
        }

        if !self.custom_palette.is_empty() {
            state.set_custom_palette(&self.custom_palette)?;
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::escape_time::errors::ConfigError;
    use crate::core::fractals::presets::{BURNING_SHIP, MANDELBROT};
    use crate::core::palettes::kinds::PaletteKinds;

    #[test]
    fn defaults_give_the_initial_mandelbrot_view() {
        let state = RenderOptions::default().build_state().unwrap();

        assert_eq!(state.viewport(), Viewport::INITIAL);
        assert_eq!((state.width(), state.height()), (800, 600));
        assert_eq!(state.active_preset(), Some(&MANDELBROT));
        assert!(!RenderOptions::default().render_settings().parallel);
    }

    #[test]
    fn preset_and_bookmark_select_the_view() {
        let options = RenderOptions {
            preset: Some("burning ship".to_string()),
            bookmark: Some("Masts".to_string()),
            ..RenderOptions::default()
        };

        let state = options.build_state().unwrap();

        assert_eq!(state.active_preset(), Some(&BURNING_SHIP));
        assert_eq!(state.viewport(), Viewport::new(-1.75, -0.03, 0.1).unwrap());
    }

    #[test]
    fn explicit_centre_overrides_bookmark() {
        let options = RenderOptions {
            bookmark: Some("Seahorse Valley".to_string()),
            center_x: Some(0.25),
            ..RenderOptions::default()
        };

        let viewport = options.build_state().unwrap().viewport();

        assert_eq!(viewport.center_x(), 0.25);
        assert_eq!(viewport.zoom(), 0.000001);
    }

    #[test]
    fn custom_equations_need_both_sides() {
        let options = RenderOptions {
            real: Some("x".to_string()),
            ..RenderOptions::default()
        };

        assert!(matches!(
            options.build_state(),
            Err(CliError::IncompleteEquations)
        ));
    }

    #[test]
    fn unknown_names_are_reported() {
        let preset = RenderOptions {
            preset: Some("Julia".to_string()),
            ..RenderOptions::default()
        };
        let bookmark = RenderOptions {
            bookmark: Some("Nowhere".to_string()),
            ..RenderOptions::default()
        };

        assert!(matches!(preset.build_state(), Err(CliError::UnknownPreset { .. })));
        assert!(matches!(bookmark.build_state(), Err(CliError::UnknownBookmark { .. })));
    }

    #[test]
    fn invalid_values_fail_before_rendering() {
        let zoom = RenderOptions {
            zoom: Some(0.0),
            ..RenderOptions::default()
        };
        let iterations = RenderOptions {
            iterations: Some(0),
            ..RenderOptions::default()
        };
        let palette = RenderOptions {
            custom_palette: vec!["#123456".to_string()],
            ..RenderOptions::default()
        };
        let frame = RenderOptions {
            width: 100_000,
            height: 100_000,
            ..RenderOptions::default()
        };

        assert!(matches!(zoom.build_state(), Err(CliError::Config(ConfigError::Viewport(_)))));
        assert!(matches!(
            iterations.build_state(),
            Err(CliError::Config(ConfigError::IterationsOutOfRange { .. }))
        ));
        assert!(matches!(palette.build_state(), Err(CliError::Config(ConfigError::Palette(_)))));
        assert!(matches!(frame.build_state(), Err(CliError::Config(ConfigError::FrameSize(_)))));
    }

    #[test]
    fn palette_name_falls_back_to_default() {
        let options = RenderOptions {
            palette: Some("Sunset".to_string()),
            ..RenderOptions::default()
        };

        assert_eq!(
            options.build_state().unwrap().config().palette_kind(),
            PaletteKinds::ElectricBlue
        );
    }
}
