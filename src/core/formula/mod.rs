//! Formula compiler for user-supplied iteration rules.
//!
//! The real and imaginary update rules are parsed into an AST over the four
//! inputs `x`, `y`, `x0`, `y0` and an allow-listed set of math functions, then
//! lowered into a tree of closures. Nothing else is reachable from a formula.

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod step;
