use std::{iter::Peekable, vec};

use crate::{logic::Formula, symbol::Symbol};

use super::{tokenize, ParseErr, ParseResult, Token, TokenKind};

/// Parses a formula in the textual syntax: `!` for negation, `&`, `|`,
/// `->` and `<->`/`<=>`, parentheses, alphanumeric identifiers.
pub fn parse_prop_formula(formula: &str) -> ParseResult<Formula> {
    PropParser::parse(formula)
}

pub struct PropParser {
    tokens: Peekable<vec::IntoIter<Token>>,
}

impl PropParser {
    pub fn parse(formula: &str) -> ParseResult<Formula> {
        let mut parser = PropParser {
            tokens: tokenize(formula)?.into_iter().peekable(),
        };
        if parser.tokens.peek().is_none() {
            return Err(ParseErr::EmptyFormula);
        }
        let node = parser.parse_equiv()?;
        match parser.tokens.next() {
            Some(t) => Err(ParseErr::Expected(
                "end of input".to_string(),
                format!("{} at position {}", t, t.src_pos),
            )),
            None => Ok(*node),
        }
    }

    fn parse_equiv(&mut self) -> ParseResult<Box<Formula>> {
        let mut stub = self.parse_impl()?;

        while self.next_is(TokenKind::Equiv) {
            self.bump()?;
            let right = self.parse_impl()?;
            stub = Box::new(Formula::Equiv(stub, right));
        }

        Ok(stub)
    }

    fn parse_impl(&mut self) -> ParseResult<Box<Formula>> {
        let mut stub = self.parse_or()?;

        while self.next_is(TokenKind::Impl) {
            self.bump()?;
            let right = self.parse_or()?;
            stub = Box::new(Formula::Impl(stub, right));
        }

        Ok(stub)
    }

    fn parse_or(&mut self) -> ParseResult<Box<Formula>> {
        let mut stub = self.parse_and()?;

        while self.next_is(TokenKind::Or) {
            self.bump()?;
            let right = self.parse_and()?;
            stub = Box::new(Formula::Or(stub, right));
        }

        Ok(stub)
    }

    fn parse_and(&mut self) -> ParseResult<Box<Formula>> {
        let mut stub = self.parse_not()?;

        while self.next_is(TokenKind::And) {
            self.bump()?;
            let right = self.parse_not()?;
            stub = Box::new(Formula::And(stub, right));
        }

        Ok(stub)
    }

    fn parse_not(&mut self) -> ParseResult<Box<Formula>> {
        if self.next_is(TokenKind::Not) {
            self.bump()?;
            Ok(Box::new(Formula::Not(self.parse_not()?)))
        } else {
            self.parse_paren()
        }
    }

    fn parse_paren(&mut self) -> ParseResult<Box<Formula>> {
        if self.next_is(TokenKind::LParen) {
            self.bump()?;
            let exp = self.parse_equiv()?;
            self.eat(TokenKind::RParen)?;
            Ok(exp)
        } else {
            self.parse_var()
        }
    }

    fn parse_var(&mut self) -> ParseResult<Box<Formula>> {
        match self.tokens.next() {
            Some(Token {
                kind: TokenKind::Ident,
                spelling,
                ..
            }) => Ok(Box::new(Formula::Var(Symbol::new(spelling)))),
            Some(t) => Err(ParseErr::Expected(
                "identifier".to_string(),
                format!("{} at position {}", t, t.src_pos),
            )),
            None => Err(ParseErr::Expected(
                "identifier".to_string(),
                "end of input".to_string(),
            )),
        }
    }

    fn next_is(&mut self, expected: TokenKind) -> bool {
        match self.tokens.peek() {
            Some(Token { kind, .. }) => *kind == expected,
            None => false,
        }
    }

    fn bump(&mut self) -> ParseResult<()> {
        match self.tokens.next() {
            Some(_) => Ok(()),
            None => Err(ParseErr::Expected(
                "token".to_string(),
                "end of input".to_string(),
            )),
        }
    }

    fn eat(&mut self, expected: TokenKind) -> ParseResult<()> {
        if self.next_is(expected) {
            self.bump()
        } else {
            Err(ParseErr::Expected(expected.to_string(), self.got_msg()))
        }
    }

    fn got_msg(&mut self) -> String {
        match self.tokens.peek() {
            Some(t) => format!("{} at position {}", t, t.src_pos),
            None => "end of input".to_string(),
        }
    }
}
