use crate::core::formula::errors::{EquationSide, FormulaError};
use crate::core::formula::parser::parse;
use crate::core::formula::step::{StepFunction, lower};
use std::sync::Arc;

/// The text of both update rules, compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormulaSource {
    pub real: String,
    pub imag: String,
}

impl FormulaSource {
    pub fn new(real: impl Into<String>, imag: impl Into<String>) -> Self {
        Self {
            real: real.into(),
            imag: imag.into(),
        }
    }

    fn matches(&self, real: &str, imag: &str) -> bool {
        self.real == real && self.imag == imag
    }
}

/// Compiles a pair of update rules without caching.
pub fn compile(real: &str, imag: &str) -> Result<StepFunction, FormulaError> {
    let real_expr = parse(real).map_err(|error| FormulaError {
        side: EquationSide::Real,
        error,
    })?;
    let imag_expr = parse(imag).map_err(|error| FormulaError {
        side: EquationSide::Imaginary,
        error,
    })?;

    Ok(StepFunction::new(
        lower(real_expr.fold_constants()),
        lower(imag_expr.fold_constants()),
        real,
        imag,
    ))
}

/// Single-entry compile cache.
///
/// The last successfully compiled pair is reused while the text is unchanged,
/// and stays current when a later pair fails to compile. The last failing pair
/// is remembered too, so retrying the same bad text does not parse again.
#[derive(Debug, Default)]
pub struct FormulaCompiler {
    current: Option<(FormulaSource, Arc<StepFunction>)>,
    last_failure: Option<(FormulaSource, FormulaError)>,
    compilations: u64,
}

impl FormulaCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compile(&mut self, real: &str, imag: &str) -> Result<Arc<StepFunction>, FormulaError> {
        if let Some((source, step)) = &self.current {
            if source.matches(real, imag) {
                log::debug!("formula cache hit");
                return Ok(Arc::clone(step));
            }
        }

        if let Some((source, error)) = &self.last_failure {
            if source.matches(real, imag) {
                return Err(error.clone());
            }
        }

        self.compilations += 1;

        match compile(real, imag) {
            Ok(step) => {
                log::debug!("compiled formula real={:?} imag={:?}", real, imag);
                let step = Arc::new(step);
                self.current = Some((FormulaSource::new(real, imag), Arc::clone(&step)));
                self.last_failure = None;
                Ok(step)
            }
            Err(error) => {
                self.last_failure = Some((FormulaSource::new(real, imag), error.clone()));
                Err(error)
            }
        }
    }

    /// The last step that compiled successfully.
    pub fn current(&self) -> Option<Arc<StepFunction>> {
        self.current.as_ref().map(|(_, step)| Arc::clone(step))
    }

    /// How many times the parser actually ran.
    pub fn compilations(&self) -> u64 {
        self.compilations
    }
}
