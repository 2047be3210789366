use crate::core::formula::errors::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
    End,
}

impl Token {
    pub fn describe(&self) -> String {
        match self {
            Self::Number(value) => format!("number {}", value),
            Self::Ident(name) => format!("name '{}'", name),
            Self::Plus => "'+'".to_string(),
            Self::Minus => "'-'".to_string(),
            Self::Star => "'*'".to_string(),
            Self::Slash => "'/'".to_string(),
            Self::Caret => "'^'".to_string(),
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
            Self::Comma => "','".to_string(),
            Self::End => "end of expression".to_string(),
        }
    }
}

/// A token and the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.source[self.position..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.bump();
        }
    }

    fn number(&mut self, start: usize) -> Result<Token, ParseError> {
        self.eat_digits();

        if self.peek() == Some('.') {
            self.bump();
            self.eat_digits();
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let exponent_follows = match self.peek_second() {
                Some(ch) if ch.is_ascii_digit() => true,
                Some('+' | '-') => self.source[self.position..]
                    .chars()
                    .nth(2)
                    .is_some_and(|ch| ch.is_ascii_digit()),
                _ => false,
            };

            if exponent_follows {
                self.bump();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.bump();
                }
                self.eat_digits();
            }
        }

        let text = &self.source[start..self.position];

        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ParseError::InvalidNumber {
                text: text.to_string(),
                position: start,
            })
    }

    // identifiers may carry a dotted namespace, e.g. `Math.abs`
    fn ident(&mut self, start: usize) -> Token {
        while self
            .peek()
            .is_some_and(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '.')
        {
            self.bump();
        }

        Token::Ident(self.source[start..self.position].to_string())
    }

    pub fn next_token(&mut self) -> Result<Spanned, ParseError> {
        self.skip_whitespace();
        let position = self.position;

        let Some(ch) = self.peek() else {
            return Ok(Spanned {
                token: Token::End,
                position,
            });
        };

        let token = if ch.is_ascii_digit()
            || (ch == '.' && self.peek_second().is_some_and(|next| next.is_ascii_digit()))
        {
            self.number(position)?
        } else if ch.is_ascii_alphabetic() || ch == '_' {
            self.ident(position)
        } else {
            self.bump();
            match ch {
                '+' => Token::Plus,
                '-' => Token::Minus,
                '*' => Token::Star,
                '/' => Token::Slash,
                '^' => Token::Caret,
                '(' => Token::LParen,
                ')' => Token::RParen,
                ',' => Token::Comma,
                other => {
                    return Err(ParseError::UnexpectedCharacter {
                        character: other,
                        position,
                    });
                }
            }
        };

        Ok(Spanned { token, position })
    }
}
