//! Lexer for the phrase-description format.
//!
//! The lexer converts source text into a stream of tokens, each carrying
//! its byte offset so parse errors can point at the offending character.

use prattle_foundation::{Error, Result};

/// The kind of a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A clause tag or factor key.
    Ident(String),
    /// An unsigned integer weight.
    Int(u32),
    /// `=`
    Equals,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `->`
    Arrow,
    /// End of input.
    Eof,
}

/// One token with its byte offset into the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// Byte offset of the token's first character.
    pub offset: usize,
}

/// Lexer over phrase-description source text.
pub struct Lexer<'src> {
    source: &'src str,
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.position += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Returns the next token.
    ///
    /// # Errors
    ///
    /// Returns a parse error (with offset) on an unexpected character or an
    /// integer that overflows `u32`.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();
        let offset = self.position;

        let Some(c) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                offset,
            });
        };

        let kind = match c {
            '=' => {
                self.advance();
                TokenKind::Equals
            }
            '{' => {
                self.advance();
                TokenKind::LBrace
            }
            '}' => {
                self.advance();
                TokenKind::RBrace
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            '-' => {
                self.advance();
                if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::Arrow
                } else {
                    return Err(Error::parse("expected '>' after '-'", offset));
                }
            }
            c if c.is_ascii_digit() => self.scan_int(offset)?,
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_ident(),
            c => {
                return Err(Error::parse(format!("unexpected character '{c}'"), offset));
            }
        };

        Ok(Token { kind, offset })
    }

    fn scan_int(&mut self, offset: usize) -> Result<TokenKind> {
        let start = self.position;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let digits = &self.source[start..self.position];
        let value = digits
            .parse::<u32>()
            .map_err(|_| Error::parse(format!("weight '{digits}' is out of range"), offset))?;
        Ok(TokenKind::Int(value))
    }

    fn scan_ident(&mut self) -> TokenKind {
        let start = self.position;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }
        TokenKind::Ident(self.source[start..self.position].to_string())
    }
}
