use crate::core::data::complex::Complex;
use crate::core::formula::ast::{BinaryOp, Expr, Function, Variable};
use std::fmt;

/// The four values a formula can read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub x: f64,
    pub y: f64,
    pub x0: f64,
    pub y0: f64,
}

pub type Evaluator = Box<dyn Fn(&Inputs) -> f64 + Send + Sync>;

/// Turns a (folded) expression tree into nested closures.
pub fn lower(expr: Expr) -> Evaluator {
    match expr {
        Expr::Number(value) => Box::new(move |_| value),
        Expr::Var(Variable::X) => Box::new(|inputs| inputs.x),
        Expr::Var(Variable::Y) => Box::new(|inputs| inputs.y),
        Expr::Var(Variable::X0) => Box::new(|inputs| inputs.x0),
        Expr::Var(Variable::Y0) => Box::new(|inputs| inputs.y0),
        Expr::Neg(inner) => {
            let inner = lower(*inner);
            Box::new(move |inputs| -inner(inputs))
        }
        Expr::Binary { op, lhs, rhs } => lower_binary(op, lower(*lhs), lower(*rhs)),
        Expr::Call { function, args } => lower_call(function, args),
    }
}

fn lower_binary(op: BinaryOp, lhs: Evaluator, rhs: Evaluator) -> Evaluator {
    match op {
        BinaryOp::Add => Box::new(move |inputs| lhs(inputs) + rhs(inputs)),
        BinaryOp::Sub => Box::new(move |inputs| lhs(inputs) - rhs(inputs)),
        BinaryOp::Mul => Box::new(move |inputs| lhs(inputs) * rhs(inputs)),
        BinaryOp::Div => Box::new(move |inputs| lhs(inputs) / rhs(inputs)),
        BinaryOp::Pow => Box::new(move |inputs| lhs(inputs).powf(rhs(inputs))),
    }
}

fn lower_call(function: Function, args: Vec<Expr>) -> Evaluator {
    let mut lowered = args.into_iter().map(lower);

    match (lowered.next(), lowered.next()) {
        (Some(arg), None) => Box::new(move |inputs| function.apply_unary(arg(inputs))),
        (Some(lhs), Some(rhs)) => {
            Box::new(move |inputs| function.apply_binary(lhs(inputs), rhs(inputs)))
        }
        // arity is checked while parsing
        _ => Box::new(|_| f64::NAN),
    }
}

/// One compiled iteration step: `(z, c) -> z'` split into real and imaginary rules.
pub struct StepFunction {
    real: Evaluator,
    imag: Evaluator,
    real_source: String,
    imag_source: String,
}

impl StepFunction {
    pub(crate) fn new(real: Evaluator, imag: Evaluator, real_source: &str, imag_source: &str) -> Self {
        Self {
            real,
            imag,
            real_source: real_source.to_string(),
            imag_source: imag_source.to_string(),
        }
    }

    /// Both rules read the same `z`, so the update is simultaneous.
    #[inline]
    pub fn step(&self, z: Complex, c: Complex) -> Complex {
        let inputs = Inputs {
            x: z.real,
            y: z.imag,
            x0: c.real,
            y0: c.imag,
        };

        Complex {
            real: (self.real)(&inputs),
            imag: (self.imag)(&inputs),
        }
    }

    pub fn real_source(&self) -> &str {
        &self.real_source
    }

    pub fn imag_source(&self) -> &str {
        &self.imag_source
    }
}

impl fmt::Debug for StepFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepFunction")
            .field("real", &self.real_source)
            .field("imag", &self.imag_source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formula::parser::parse;

    fn lowered(source: &str) -> Evaluator {
        lower(parse(source).unwrap().fold_constants())
    }

    #[test]
    fn lowered_tree_matches_direct_evaluation() {
        let sources = [
            "x*x - y*y + x0",
            "abs(2*x*y) + y0",
            "-x^2 + atan2(y, x) / (1 + pi)",
            "min(x, y0) * max(y, x0) - floor(x) + ceil(y)",
            "sqrt(abs(x)) + exp(-y) + ln(2) + sinh(x0) * cosh(y0) - tanh(x)",
        ];
        let inputs = Inputs {
            x: 0.3,
            y: -1.7,
            x0: 0.25,
            y0: 0.5,
        };

        for source in sources {
            let expected = parse(source).unwrap().evaluate(0.3, -1.7, 0.25, 0.5);
            assert_eq!(lowered(source)(&inputs), expected, "{}", source);
        }
    }

    #[test]
    fn step_updates_both_parts_from_the_same_z() {
        let step = StepFunction::new(
            lowered("x*x - y*y + x0"),
            lowered("2*x*y + y0"),
            "x*x - y*y + x0",
            "2*x*y + y0",
        );

        let next = step.step(Complex::new(1.0, 2.0), Complex::new(0.5, -0.5));

        assert_eq!(next, Complex::new(1.0 - 4.0 + 0.5, 4.0 - 0.5));
    }

    #[test]
    fn debug_shows_sources() {
        let step = StepFunction::new(lowered("x"), lowered("y"), "x", "y");

        assert_eq!(
            format!("{:?}", step),
            "StepFunction { real: \"x\", imag: \"y\" }"
        );
    }
}
