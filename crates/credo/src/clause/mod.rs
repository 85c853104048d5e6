use std::fmt;

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// A propositional variable with a polarity.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Literal {
    atom: Symbol,
    negated: bool,
}

impl Literal {
    pub fn new<S: Into<Symbol>>(atom: S, negated: bool) -> Self {
        Literal {
            atom: atom.into(),
            negated,
        }
    }

    pub fn pos<S: Into<Symbol>>(atom: S) -> Self {
        Literal::new(atom, false)
    }

    pub fn neg<S: Into<Symbol>>(atom: S) -> Self {
        Literal::new(atom, true)
    }

    pub fn atom(&self) -> &Symbol {
        &self.atom
    }

    pub fn negated(&self) -> bool {
        self.negated
    }

    /// The literal with flipped polarity. An involution.
    pub fn negate(&self) -> Literal {
        Literal {
            atom: self.atom.clone(),
            negated: !self.negated,
        }
    }

    /// True iff `other` is the same atom with the opposite polarity.
    pub fn complements(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.negated != other.negated
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", if self.negated { "¬" } else { "" }, self.atom)
    }
}

/// A disjunction of literals. Duplicate-free; literals keep insertion order.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Self {
        let mut c = Clause { literals: vec![] };
        for l in literals {
            c.add(l);
        }
        c
    }

    pub fn unit(lit: Literal) -> Self {
        Clause {
            literals: vec![lit],
        }
    }

    pub fn add(&mut self, lit: Literal) {
        if !self.contains(&lit) {
            self.literals.push(lit);
        }
    }

    pub fn contains(&self, lit: &Literal) -> bool {
        self.literals.contains(lit)
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Index of the first literal complementary to `lit`, if any.
    pub fn find_negation_of(&self, lit: &Literal) -> Option<usize> {
        self.literals.iter().position(|l| l.complements(lit))
    }
}

// Literal-set equality; order is irrelevant. Both sides are duplicate-free
// by construction, so equal length plus mutual containment suffices.
impl PartialEq for Clause {
    fn eq(&self, other: &Clause) -> bool {
        self.size() == other.size() && self.literals.iter().all(|l| other.contains(l))
    }
}

impl Eq for Clause {}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lits = String::new();

        for (i, l) in self.literals.iter().enumerate() {
            lits.push_str(&l.to_string());
            if i < self.size() - 1 {
                lits.push_str(" ∨ ");
            }
        }

        write!(f, "{{{}}}", lits)
    }
}

impl From<Clause> for Vec<Literal> {
    fn from(c: Clause) -> Self {
        c.literals
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;

    type IntoIter = std::slice::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

/// A conjunction of clauses with set semantics: no two structurally equal
/// members. Clauses keep insertion order so scans are deterministic.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ClauseSet {
    clauses: Vec<Clause>,
}

impl ClauseSet {
    pub fn new(clauses: Vec<Clause>) -> Self {
        let mut cs = ClauseSet { clauses: vec![] };
        cs.add_all(clauses);
        cs
    }

    pub fn add(&mut self, c: Clause) {
        if !self.contains(&c) {
            self.clauses.push(c);
        }
    }

    pub fn add_all(&mut self, cs: Vec<Clause>) {
        for c in cs {
            self.add(c);
        }
    }

    pub fn unite(&mut self, cs: &ClauseSet) {
        for c in cs.clauses.iter().cloned() {
            self.add(c)
        }
    }

    pub fn contains(&self, c: &Clause) -> bool {
        self.clauses.contains(c)
    }

    pub fn position(&self, c: &Clause) -> Option<usize> {
        self.clauses.iter().position(|member| member == c)
    }

    pub fn size(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn remove(&mut self, idx: usize) -> Clause {
        self.clauses.remove(idx)
    }
}

impl PartialEq for ClauseSet {
    fn eq(&self, other: &ClauseSet) -> bool {
        self.size() == other.size() && self.clauses.iter().all(|c| other.contains(c))
    }
}

impl Eq for ClauseSet {}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut clauses = String::new();

        for (i, c) in self.clauses.iter().enumerate() {
            clauses.push_str(&c.to_string());
            if i < self.size() - 1 {
                clauses.push_str(" ∧ ");
            }
        }

        write!(f, "{}", clauses)
    }
}

impl From<ClauseSet> for Vec<Clause> {
    fn from(cs: ClauseSet) -> Self {
        cs.clauses
    }
}

impl<'a> IntoIterator for &'a ClauseSet {
    type Item = &'a Clause;

    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}
