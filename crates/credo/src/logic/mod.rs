pub mod transform;

use std::fmt;

use crate::symbol::Symbol;

use self::transform::to_basic::ToBasicOps;
use self::transform::visitor::FormulaVisitor;

/// The surface syntax of a belief. Built by the parser, consumed by the
/// CNF transformation, never mutated.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Formula {
    Var(Symbol),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Impl(Box<Formula>, Box<Formula>),
    Equiv(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Rewrites implications and equivalences into ¬/∧/∨.
    pub fn to_basic_ops(&self) -> Self {
        ToBasicOps.visit(self)
    }

    pub fn negated(&self) -> Self {
        Formula::Not(self.clone().into())
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Var(s) => write!(f, "{}", s),
            Formula::Not(c) => write!(f, "¬{}", c),
            Formula::And(l, r) => write!(f, "({} ∧ {})", l, r),
            Formula::Or(l, r) => write!(f, "({} ∨ {})", l, r),
            Formula::Impl(l, r) => write!(f, "({} -> {})", l, r),
            Formula::Equiv(l, r) => write!(f, "({} <=> {})", l, r),
        }
    }
}
