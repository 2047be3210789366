#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    X,
    Y,
    X0,
    Y0,
}

impl Variable {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "x0" => Some(Self::X0),
            "y0" => Some(Self::Y0),
            _ => None,
        }
    }
}

pub fn constant_from_name(name: &str) -> Option<f64> {
    match name {
        "pi" | "PI" => Some(std::f64::consts::PI),
        "e" | "E" => Some(std::f64::consts::E),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

/// The allow-listed math functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Abs,
    Sqrt,
    Exp,
    Ln,
    Log,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Atan,
    Floor,
    Ceil,
    Pow,
    Min,
    Max,
    Atan2,
}

impl Function {
    pub const ALL: &'static [Self] = &[
        Self::Abs,
        Self::Sqrt,
        Self::Exp,
        Self::Ln,
        Self::Log,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Atan,
        Self::Floor,
        Self::Ceil,
        Self::Pow,
        Self::Min,
        Self::Max,
        Self::Atan2,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Atan => "atan",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Pow => "pow",
            Self::Min => "min",
            Self::Max => "max",
            Self::Atan2 => "atan2",
        }
    }

    pub const fn arity(self) -> usize {
        match self {
            Self::Pow | Self::Min | Self::Max | Self::Atan2 => 2,
            _ => 1,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|function| function.name() == name)
    }

    pub fn apply_unary(self, value: f64) -> f64 {
        match self {
            Self::Abs => value.abs(),
            Self::Sqrt => value.sqrt(),
            Self::Exp => value.exp(),
            // `log` is the natural logarithm, as in most scripting math libraries
            Self::Ln | Self::Log => value.ln(),
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Sinh => value.sinh(),
            Self::Cosh => value.cosh(),
            Self::Tanh => value.tanh(),
            Self::Atan => value.atan(),
            Self::Floor => value.floor(),
            Self::Ceil => value.ceil(),
            Self::Pow | Self::Min | Self::Max | Self::Atan2 => f64::NAN,
        }
    }

    pub fn apply_binary(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Pow => lhs.powf(rhs),
            Self::Min => lhs.min(rhs),
            Self::Max => lhs.max(rhs),
            Self::Atan2 => lhs.atan2(rhs),
            _ => f64::NAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Var(Variable),
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        function: Function,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Collapses every subtree that does not depend on an input into a number.
    #[must_use]
    pub fn fold_constants(self) -> Self {
        match self {
            Self::Number(_) | Self::Var(_) => self,
            Self::Neg(inner) => match inner.fold_constants() {
                Self::Number(value) => Self::Number(-value),
                folded => Self::Neg(Box::new(folded)),
            },
            Self::Binary { op, lhs, rhs } => {
                match (lhs.fold_constants(), rhs.fold_constants()) {
                    (Self::Number(a), Self::Number(b)) => Self::Number(op.apply(a, b)),
                    (lhs, rhs) => Self::Binary {
                        op,
                        lhs: Box::new(lhs),
                        rhs: Box::new(rhs),
                    },
                }
            }
            Self::Call { function, args } => {
                let args: Vec<Self> = args.into_iter().map(Self::fold_constants).collect();

                match args.as_slice() {
                    [Self::Number(a)] if function.arity() == 1 => {
                        Self::Number(function.apply_unary(*a))
                    }
                    [Self::Number(a), Self::Number(b)] if function.arity() == 2 => {
                        Self::Number(function.apply_binary(*a, *b))
                    }
                    _ => Self::Call { function, args },
                }
            }
        }
    }

    /// Evaluates the tree directly; used for folding checks and tests.
    pub fn evaluate(&self, x: f64, y: f64, x0: f64, y0: f64) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Var(Variable::X) => x,
            Self::Var(Variable::Y) => y,
            Self::Var(Variable::X0) => x0,
            Self::Var(Variable::Y0) => y0,
            Self::Neg(inner) => -inner.evaluate(x, y, x0, y0),
            Self::Binary { op, lhs, rhs } => {
                op.apply(lhs.evaluate(x, y, x0, y0), rhs.evaluate(x, y, x0, y0))
            }
            Self::Call { function, args } => match args.as_slice() {
                [a] => function.apply_unary(a.evaluate(x, y, x0, y0)),
                [a, b] => {
                    function.apply_binary(a.evaluate(x, y, x0, y0), b.evaluate(x, y, x0, y0))
                }
                _ => f64::NAN,
            },
        }
    }
}
