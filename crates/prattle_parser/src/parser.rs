//! Recursive-descent parser for the phrase-description format.

use prattle_foundation::{Error, Result};
use prattle_grammar::{
    AnyWordClause, Clause, ConjunctionClause, DirectSpeechClause, NounClause, VerbClause,
};

use crate::fields::{CONJUNCTION_FIELDS, Field, NOUN_FIELDS, SPEECH_FIELDS, VERB_FIELDS};
use crate::lexer::{Lexer, Token, TokenKind};

/// Parses a phrase description into its clause list.
///
/// # Errors
///
/// Returns a parse error carrying the byte offset of the first offending
/// character. Parse errors are non-fatal by design; callers typically fall
/// back to their current or default description.
pub fn parse(source: &str) -> Result<Vec<Clause>> {
    Parser::new(source).parse_description()
}

struct Parser<'src> {
    lexer: Lexer<'src>,
    lookahead: Option<Token>,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
            lookahead: None,
        }
    }

    fn peek(&mut self) -> Result<&Token> {
        if self.lookahead.is_none() {
            self.lookahead = Some(self.lexer.next_token()?);
        }
        Ok(self.lookahead.as_ref().expect("lookahead was just filled"))
    }

    fn next(&mut self) -> Result<Token> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.lexer.next_token(),
        }
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<Token> {
        let token = self.next()?;
        if token.kind == *kind {
            Ok(token)
        } else {
            Err(Error::parse(format!("expected {what}"), token.offset))
        }
    }

    fn parse_description(&mut self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Eof => return Ok(clauses),
                TokenKind::Ident(tag) => {
                    clauses.push(self.parse_clause(&tag, token.offset)?);
                }
                _ => {
                    return Err(Error::parse("expected a clause tag", token.offset));
                }
            }
        }
    }

    fn parse_clause(&mut self, tag: &str, offset: usize) -> Result<Clause> {
        self.expect(&TokenKind::Equals, "'='")?;
        self.expect(&TokenKind::LBrace, "'{'")?;
        match tag {
            "Noun" => Ok(Clause::Noun(self.parse_body::<NounClause>(NOUN_FIELDS)?)),
            "Verb" => Ok(Clause::Verb(self.parse_body::<VerbClause>(VERB_FIELDS)?)),
            "Conjunction" => Ok(Clause::Conjunction(
                self.parse_body::<ConjunctionClause>(CONJUNCTION_FIELDS)?,
            )),
            "DirectSpeech" => Ok(Clause::DirectSpeech(
                self.parse_body::<DirectSpeechClause>(SPEECH_FIELDS)?,
            )),
            "AnyWord" => {
                self.parse_body::<AnyWordClause>(&[])?;
                Ok(Clause::AnyWord(AnyWordClause::default()))
            }
            _ => Err(Error::parse(format!("unknown clause tag '{tag}'"), offset)),
        }
    }

    /// Parses `key -> value` entries up to the closing brace, assigning
    /// each through the clause type's field table.
    fn parse_body<T: Default>(&mut self, fields: &[Field<T>]) -> Result<T> {
        let mut clause = T::default();
        let mut seen: Vec<&'static str> = Vec::new();
        loop {
            let token = self.next()?;
            let (key, key_offset) = match token.kind {
                TokenKind::RBrace => return Ok(clause),
                TokenKind::Ident(key) => (key, token.offset),
                _ => {
                    return Err(Error::parse("expected a factor key or '}'", token.offset));
                }
            };

            let field = fields
                .iter()
                .find(|field| field.name == key)
                .ok_or_else(|| Error::parse(format!("unknown factor key '{key}'"), key_offset))?;
            if seen.contains(&field.name) {
                return Err(Error::parse(
                    format!("duplicate factor key '{key}'"),
                    key_offset,
                ));
            }
            seen.push(field.name);

            self.expect(&TokenKind::Arrow, "'->'")?;
            let token = self.next()?;
            let TokenKind::Int(value) = token.kind else {
                return Err(Error::parse("expected a weight value", token.offset));
            };
            (field.set)(&mut clause, value);

            // A comma continues the body; the closing brace ends it, so a
            // trailing comma before '}' is fine.
            match &self.peek()?.kind {
                TokenKind::Comma => {
                    self.next()?;
                }
                TokenKind::RBrace => {}
                _ => {
                    let token = self.next()?;
                    return Err(Error::parse("expected ',' or '}'", token.offset));
                }
            }
        }
    }
}
