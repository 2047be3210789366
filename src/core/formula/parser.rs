use crate::core::formula::ast::{BinaryOp, Expr, Function, Variable, constant_from_name};
use crate::core::formula::errors::ParseError;
use crate::core::formula::lexer::{Lexer, Spanned, Token};

const NAMESPACE_PREFIX: &str = "Math.";

/// Deepest tree the parser will build, and deepest it will recurse.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses one update rule into an expression tree.
///
/// Grammar, lowest precedence first:
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := unary (('*' | '/') unary)*
/// unary   := ('-' | '+') unary | power
/// power   := primary ('^' unary)?
/// primary := number | name | name '(' args ')' | '(' expr ')'
/// ```
///
/// `^` is right-associative and binds tighter than a leading minus, so
/// `-x^2` is `-(x^2)` and `2^-1` is `0.5`.
///
/// Nesting past [`MAX_NESTING_DEPTH`] is a [`ParseError::TooDeep`], which
/// keeps folding, lowering and evaluation of the tree within stack bounds.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(source)?;

    if parser.current.token == Token::End {
        return Err(ParseError::Empty);
    }

    let node = parser.expr()?;
    parser.expect_end()?;

    Ok(node.expr)
}

/// A parsed subtree and the height of its tree.
struct Node {
    expr: Expr,
    depth: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Self { expr, depth: 1 }
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Spanned,
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;

        Ok(Self {
            lexer,
            current,
            nesting: 0,
        })
    }

    fn advance(&mut self) -> Result<Spanned, ParseError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.current.token {
            Token::End => ParseError::UnexpectedEnd { expected },
            ref token => ParseError::UnexpectedToken {
                found: token.describe(),
                position: self.current.position,
            },
        }
    }

    fn too_deep(&self) -> ParseError {
        ParseError::TooDeep {
            limit: MAX_NESTING_DEPTH,
            position: self.current.position,
        }
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<(), ParseError> {
        if self.current.token != token {
            return Err(self.unexpected(expected));
        }
        self.advance()?;
        Ok(())
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        match self.current.token {
            Token::End => Ok(()),
            _ => Err(self.unexpected("an operator")),
        }
    }

    /// Runs one level of recursive descent, failing once the limit is hit.
    fn nested(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<Node, ParseError>,
    ) -> Result<Node, ParseError> {
        if self.nesting >= MAX_NESTING_DEPTH {
            return Err(self.too_deep());
        }

        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;

        result
    }

    fn branch(&self, expr: Expr, depth: usize) -> Result<Node, ParseError> {
        if depth > MAX_NESTING_DEPTH {
            return Err(self.too_deep());
        }

        Ok(Node { expr, depth })
    }

    fn binary(&self, op: BinaryOp, lhs: Node, rhs: Node) -> Result<Node, ParseError> {
        let depth = 1 + lhs.depth.max(rhs.depth);
        let expr = Expr::Binary {
            op,
            lhs: Box::new(lhs.expr),
            rhs: Box::new(rhs.expr),
        };

        self.branch(expr, depth)
    }

    fn expr(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.term()?;

        loop {
            let op = match self.current.token {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.advance()?;
            let rhs = self.term()?;
            lhs = self.binary(op, lhs, rhs)?;
        }
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.unary()?;

        loop {
            let op = match self.current.token {
                Token::Star => BinaryOp::Mul,
                Token::Slash => BinaryOp::Div,
                _ => return Ok(lhs),
            };
            self.advance()?;
            let rhs = self.unary()?;
            lhs = self.binary(op, lhs, rhs)?;
        }
    }

    fn unary(&mut self) -> Result<Node, ParseError> {
        match self.current.token {
            Token::Minus => {
                self.advance()?;
                let inner = self.nested(Self::unary)?;
                self.branch(Expr::Neg(Box::new(inner.expr)), inner.depth + 1)
            }
            Token::Plus => {
                self.advance()?;
                self.nested(Self::unary)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;

        if self.current.token != Token::Caret {
            return Ok(base);
        }
        self.advance()?;

        // recursing through `unary` makes `^` right-associative
        let exponent = self.nested(Self::unary)?;
        self.binary(BinaryOp::Pow, base, exponent)
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let Spanned { token, position } = self.current.clone();

        match token {
            Token::Number(value) => {
                self.advance()?;
                Ok(Node::leaf(Expr::Number(value)))
            }
            Token::LParen => {
                self.advance()?;
                let inner = self.nested(Self::expr)?;
                self.expect(Token::RParen, "')'")?;
                Ok(inner)
            }
            Token::Ident(name) => {
                self.advance()?;
                if self.current.token == Token::LParen {
                    self.nested(|parser| parser.call(&name, position))
                } else {
                    resolve_name(&name, position).map(Node::leaf)
                }
            }
            _ => Err(self.unexpected("a number, name or '('")),
        }
    }

    fn call(&mut self, name: &str, position: usize) -> Result<Node, ParseError> {
        let function = Function::from_name(strip_namespace(name)).ok_or_else(|| {
            ParseError::UnknownFunction {
                name: name.to_string(),
                position,
            }
        })?;

        self.expect(Token::LParen, "'('")?;

        let mut args = Vec::new();
        let mut depth = 0;
        if self.current.token != Token::RParen {
            loop {
                let arg = self.expr()?;
                depth = depth.max(arg.depth);
                args.push(arg.expr);
                if self.current.token != Token::Comma {
                    break;
                }
                self.advance()?;
            }
        }
        self.expect(Token::RParen, "')'")?;

        if args.len() != function.arity() {
            return Err(ParseError::WrongArgumentCount {
                function: function.name(),
                expected: function.arity(),
                found: args.len(),
                position,
            });
        }

        self.branch(Expr::Call { function, args }, depth + 1)
    }
}

fn strip_namespace(name: &str) -> &str {
    name.strip_prefix(NAMESPACE_PREFIX).unwrap_or(name)
}

fn resolve_name(name: &str, position: usize) -> Result<Expr, ParseError> {
    if let Some(variable) = Variable::from_name(name) {
        return Ok(Expr::Var(variable));
    }

    constant_from_name(strip_namespace(name))
        .map(Expr::Number)
        .ok_or_else(|| ParseError::UnknownVariable {
            name: name.to_string(),
            position,
        })
}
