use std::fmt;

use crate::{
    clause::{Clause, ClauseSet, Literal},
    logic::Formula,
    symbol::Symbol,
};

use super::visitor::FormulaVisitor;

/// Converts a formula into an equivalent clause set: implications and
/// equivalences are rewritten into basic operations, negations are pushed
/// down to the atoms, and disjunctions are distributed over conjunctions.
///
/// The result is duplicate-free on both levels, so converting a formula
/// that is already in clause form yields the same set again.
pub fn naive_cnf(formula: &Formula) -> Result<ClauseSet, FormulaConversionErr> {
    NaiveCNF.visit(formula)
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormulaConversionErr;

impl fmt::Display for FormulaConversionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The formula is too complex to be converted to CNF")
    }
}

struct NaiveCNF;

impl FormulaVisitor for NaiveCNF {
    type Ret = Result<ClauseSet, FormulaConversionErr>;

    fn visit_var(&mut self, atom: &Symbol) -> Self::Ret {
        let c = Clause::unit(Literal::pos(atom.clone()));
        Ok(ClauseSet::new(vec![c]))
    }

    fn visit_not(&mut self, child: &Formula) -> Self::Ret {
        match child {
            Formula::Var(s) => {
                let c = Clause::unit(Literal::neg(s.clone()));
                Ok(ClauseSet::new(vec![c]))
            }
            Formula::Not(c) => self.visit(c),
            Formula::And(l, r) => self.visit(&Formula::Or(
                Formula::Not(l.clone()).into(),
                Formula::Not(r.clone()).into(),
            )),
            Formula::Or(l, r) => self.visit(&Formula::And(
                Formula::Not(l.clone()).into(),
                Formula::Not(r.clone()).into(),
            )),
            Formula::Impl(l, r) => {
                self.visit(&Formula::And(l.clone(), Formula::Not(r.clone()).into()))
            }
            Formula::Equiv(l, r) => {
                let impl_1 = Formula::Impl(l.clone(), r.clone()).into();
                let impl_2 = Formula::Impl(r.clone(), l.clone()).into();

                self.visit(&Formula::Not(Formula::And(impl_1, impl_2).into()))
            }
        }
    }

    fn visit_and(&mut self, left: &Formula, right: &Formula) -> Self::Ret {
        let mut left = self.visit(left)?;
        let right = self.visit(right)?;
        left.unite(&right);
        Ok(left)
    }

    fn visit_or(&mut self, left: &Formula, right: &Formula) -> Self::Ret {
        let left: Vec<Clause> = self.visit(left)?.into();
        let right: Vec<Clause> = self.visit(right)?.into();

        if left.len() * right.len() > crate::CNF_BLOWUP_LIMIT as usize {
            Err(FormulaConversionErr)
        } else {
            let mut clauses = ClauseSet::default();
            for lc in &left {
                for rc in &right {
                    let mut literals: Vec<Literal> = lc.clone().into();
                    literals.append(&mut rc.clone().into());
                    clauses.add(Clause::new(literals));
                }
            }

            Ok(clauses)
        }
    }

    fn visit_impl(&mut self, left: &Formula, right: &Formula) -> Self::Ret {
        let n = Formula::Impl(left.clone().into(), right.clone().into()).to_basic_ops();
        self.visit(&n)
    }

    fn visit_equiv(&mut self, left: &Formula, right: &Formula) -> Self::Ret {
        let n = Formula::Equiv(left.clone().into(), right.clone().into()).to_basic_ops();
        self.visit(&n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_prop_formula;

    macro_rules! test_cnf {
        ($( $f:expr, $e:expr );*) => {{
            $(
                let formula = parse_prop_formula($f).expect($f);
                let cs = naive_cnf(&formula).expect($f);
                assert_eq!($e, cs.to_string(), "formula: {}", $f);
            )*
        }};
    }

    #[test]
    fn literals_and_units() {
        test_cnf!(
            "a", "{a}";
            "!a", "{¬a}";
            "!!a", "{a}";
            "!!!abc42", "{¬abc42}"
        );
    }

    #[test]
    fn connectives() {
        test_cnf!(
            "a & b", "{a} ∧ {b}";
            "a | b", "{a ∨ b}";
            "a -> b", "{¬a ∨ b}";
            "a & (a -> b)", "{a} ∧ {¬a ∨ b}";
            "(a & b) | c", "{a ∨ c} ∧ {b ∨ c}";
            "!(a | b)", "{¬a} ∧ {¬b}";
            "!(a & b)", "{¬a ∨ ¬b}";
            "!(a -> b)", "{a} ∧ {¬b}";
            "a <-> b", "{a ∨ ¬a} ∧ {a ∨ ¬b} ∧ {b ∨ ¬a} ∧ {b ∨ ¬b}"
        );
    }

    #[test]
    fn duplicates_collapse() {
        test_cnf!(
            "a & a", "{a}";
            "a | a", "{a}";
            "(a | b) & (b | a)", "{a ∨ b}"
        );
    }

    #[test]
    fn tautological_clause_is_kept() {
        test_cnf!("a | !a", "{a ∨ ¬a}");
    }

    #[test]
    fn conversion_is_idempotent() {
        for f in [
            "a & (a -> b)",
            "(a & b) | (c & d)",
            "!(a | (b & !c))",
            "a <-> b",
        ] {
            let formula = parse_prop_formula(f).unwrap();
            let cs = naive_cnf(&formula).unwrap();
            let rebuilt = clause_set_to_formula(&cs);
            assert_eq!(cs, naive_cnf(&rebuilt).unwrap(), "formula: {}", f);
        }
    }

    #[test]
    fn equivalent_to_source_formula() {
        for f in [
            "a",
            "!a",
            "a & b",
            "a | b",
            "a -> b",
            "a <-> b",
            "a & (a -> b)",
            "(a & b) | (c & !a)",
            "!(a | (b & !c))",
            "((a -> b) -> c) -> a",
            "!(a <-> (b | c))",
        ] {
            let formula = parse_prop_formula(f).unwrap();
            let cs = naive_cnf(&formula).unwrap();
            let atoms = atoms_of(&formula);

            for bits in 0..(1u32 << atoms.len()) {
                let assignment: Vec<(&str, bool)> = atoms
                    .iter()
                    .enumerate()
                    .map(|(i, a)| (a.as_str(), bits & (1 << i) != 0))
                    .collect();
                assert_eq!(
                    eval_formula(&formula, &assignment),
                    eval_clause_set(&cs, &assignment),
                    "formula: {}, assignment: {:?}",
                    f,
                    assignment
                );
            }
        }
    }

    #[test]
    fn distribution_blowup_is_rejected() {
        let big = |prefix: &str| {
            (0..101)
                .map(|i| format!("{}{}", prefix, i))
                .collect::<Vec<_>>()
                .join(" & ")
        };
        let f = format!("({}) | ({})", big("x"), big("y"));
        let formula = parse_prop_formula(&f).unwrap();
        assert_eq!(Err(FormulaConversionErr), naive_cnf(&formula));
    }

    fn atoms_of(f: &Formula) -> Vec<crate::symbol::Symbol> {
        fn walk(f: &Formula, acc: &mut Vec<crate::symbol::Symbol>) {
            match f {
                Formula::Var(s) => {
                    if !acc.contains(s) {
                        acc.push(s.clone());
                    }
                }
                Formula::Not(c) => walk(c, acc),
                Formula::And(l, r)
                | Formula::Or(l, r)
                | Formula::Impl(l, r)
                | Formula::Equiv(l, r) => {
                    walk(l, acc);
                    walk(r, acc);
                }
            }
        }
        let mut acc = vec![];
        walk(f, &mut acc);
        acc
    }

    fn eval_formula(f: &Formula, assignment: &[(&str, bool)]) -> bool {
        match f {
            Formula::Var(s) => {
                assignment
                    .iter()
                    .find(|(a, _)| *a == s.as_str())
                    .map(|(_, v)| *v)
                    .unwrap_or(false)
            }
            Formula::Not(c) => !eval_formula(c, assignment),
            Formula::And(l, r) => eval_formula(l, assignment) && eval_formula(r, assignment),
            Formula::Or(l, r) => eval_formula(l, assignment) || eval_formula(r, assignment),
            Formula::Impl(l, r) => !eval_formula(l, assignment) || eval_formula(r, assignment),
            Formula::Equiv(l, r) => eval_formula(l, assignment) == eval_formula(r, assignment),
        }
    }

    fn eval_clause_set(cs: &ClauseSet, assignment: &[(&str, bool)]) -> bool {
        cs.clauses().iter().all(|c| {
            c.literals().iter().any(|l| {
                let v = assignment
                    .iter()
                    .find(|(a, _)| *a == l.atom().as_str())
                    .map(|(_, v)| *v)
                    .unwrap_or(false);
                v != l.negated()
            })
        })
    }

    fn clause_set_to_formula(cs: &ClauseSet) -> Formula {
        let clause_to_formula = |c: &Clause| {
            let mut lits = c.literals().iter().map(|l| {
                let v = Formula::Var(l.atom().clone());
                if l.negated() {
                    Formula::Not(v.into())
                } else {
                    v
                }
            });
            let first = lits.next().expect("empty clause");
            lits.fold(first, |acc, l| Formula::Or(acc.into(), l.into()))
        };
        let mut clauses = cs.clauses().iter().map(clause_to_formula);
        let first = clauses.next().expect("empty clause set");
        clauses.fold(first, |acc, c| Formula::And(acc.into(), c.into()))
    }
}
