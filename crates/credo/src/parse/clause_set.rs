use std::{iter::Peekable, vec};

use crate::clause::{Clause, ClauseSet, Literal};

use super::{tokenize, ParseErr, ParseResult, Token, TokenKind};

/// Parses clause-set notation: clauses separated by `;`, literals
/// separated by `,`, `!` for negation. `a,b;!a` is {a ∨ b} ∧ {¬a}.
pub fn parse_clause_set(input: &str) -> ParseResult<ClauseSet> {
    ClauseSetParser::parse(input)
}

struct ClauseSetParser {
    tokens: Peekable<vec::IntoIter<Token>>,
}

impl ClauseSetParser {
    fn parse(input: &str) -> ParseResult<ClauseSet> {
        let mut parser = ClauseSetParser {
            tokens: tokenize(input)?.into_iter().peekable(),
        };
        if parser.tokens.peek().is_none() {
            return Err(ParseErr::EmptyFormula);
        }
        parser.parse_cs()
    }

    fn parse_cs(&mut self) -> ParseResult<ClauseSet> {
        let mut cs = vec![self.parse_c()?];

        while self.eat_if(TokenKind::Semi) && self.tokens.peek().is_some() {
            cs.push(self.parse_c()?);
        }

        match self.tokens.next() {
            Some(t) => Err(ParseErr::Expected(
                "end of input".to_string(),
                format!("{} at position {}", t, t.src_pos),
            )),
            None => Ok(ClauseSet::new(cs)),
        }
    }

    fn parse_c(&mut self) -> ParseResult<Clause> {
        let mut c = vec![self.parse_lit()?];

        while self.eat_if(TokenKind::Comma) {
            c.push(self.parse_lit()?)
        }

        Ok(Clause::new(c))
    }

    fn parse_lit(&mut self) -> ParseResult<Literal> {
        let negated = self.eat_if(TokenKind::Not);
        match self.tokens.next() {
            Some(Token {
                kind: TokenKind::Ident,
                spelling,
                ..
            }) => Ok(Literal::new(spelling, negated)),
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

    fn eat_if(&mut self, expected: TokenKind) -> bool {
        match self.tokens.peek() {
            Some(Token { kind, .. }) if *kind == expected => {
                self.tokens.next();
                true
            }
            _ => false,
        }
    }
}
