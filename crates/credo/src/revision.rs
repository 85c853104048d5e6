use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clause::{Clause, ClauseSet};
use crate::logic::transform::{naive_cnf, FormulaConversionErr};
use crate::logic::Formula;
use crate::parse::{parse_prop_formula, ParseErr};
use crate::resolution::{
    resolve_to_saturation, ResolutionStep, SaturationOutcome, SaturationResult,
};

/// The set of clauses the agent currently accepts. All transitions return
/// a new base; an existing base is never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BeliefBase {
    clauses: ClauseSet,
}

#[derive(Debug)]
pub enum RevisionErr {
    Parse(ParseErr),
    Conversion(FormulaConversionErr),
}

impl From<ParseErr> for RevisionErr {
    fn from(e: ParseErr) -> Self {
        Self::Parse(e)
    }
}

impl From<FormulaConversionErr> for RevisionErr {
    fn from(e: FormulaConversionErr) -> Self {
        Self::Conversion(e)
    }
}

impl fmt::Display for RevisionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevisionErr::Parse(e) => fmt::Display::fmt(e, f),
            RevisionErr::Conversion(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// Whether the base entails a queried formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entailment {
    Entailed,
    NotEntailed,
    /// The refutation run hit its step cap before settling the question.
    Undetermined,
}

/// How a formula was integrated into the base.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum RevisionOutcome {
    /// Every clause of the formula was already in the base.
    AlreadyBelieved,
    /// The base entailed the formula; its clauses were added outright.
    Expanded,
    /// The formula was not entailed. Clauses equal to its normalized
    /// negation were removed before its own clauses were added.
    Revised { removed: Vec<Clause> },
    /// Entailment could not be settled; the base is unchanged.
    Undetermined,
}

impl fmt::Display for RevisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevisionOutcome::AlreadyBelieved => {
                write!(f, "Already believed; the belief base is unchanged")
            }
            RevisionOutcome::Expanded => {
                write!(f, "Entailed by the current beliefs; added by expansion")
            }
            RevisionOutcome::Revised { removed } if removed.is_empty() => {
                write!(f, "Not entailed; added to the belief base")
            }
            RevisionOutcome::Revised { removed } => {
                let removed = removed
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Conflicted with {}; replaced by the new belief", removed)
            }
            RevisionOutcome::Undetermined => {
                write!(
                    f,
                    "Could not determine entailment; the belief base is unchanged"
                )
            }
        }
    }
}

/// The result of revising a base with a formula.
#[derive(Clone, Debug)]
pub struct Revision {
    pub base: BeliefBase,
    pub outcome: RevisionOutcome,
    pub trace: Vec<ResolutionStep>,
}

impl BeliefBase {
    pub fn new(clauses: ClauseSet) -> Self {
        BeliefBase { clauses }
    }

    /// Builds a base from seed text: one formula per line, blank lines
    /// and `#` comments ignored, all lines conjoined.
    pub fn from_seed(text: &str) -> Result<Self, RevisionErr> {
        let mut clauses = ClauseSet::default();

        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let formula = parse_prop_formula(line)?;
            clauses.unite(&naive_cnf(&formula)?);
        }

        Ok(BeliefBase { clauses })
    }

    pub fn clauses(&self) -> &ClauseSet {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// False iff saturating the base alone derives the empty clause.
    pub fn is_consistent(&self) -> bool {
        resolve_to_saturation(&self.clauses).outcome != SaturationOutcome::Refuted
    }

    /// Checks `base ⊨ formula` by refuting the base together with the
    /// normalized negation of the formula. The returned trace holds the
    /// executed resolution steps.
    pub fn entails(
        &self,
        formula: &Formula,
    ) -> Result<(Entailment, Vec<ResolutionStep>), RevisionErr> {
        let complement = naive_cnf(&formula.negated())?;
        let res = self.refute_with(&complement);

        let entailment = match res.outcome {
            SaturationOutcome::Refuted => Entailment::Entailed,
            SaturationOutcome::Saturated => Entailment::NotEntailed,
            SaturationOutcome::StepLimit => Entailment::Undetermined,
        };
        Ok((entailment, res.trace))
    }

    /// Integrates `formula`, preferring consistency over accumulation:
    /// a formula whose clauses are already present is a no-op, an
    /// entailed formula is added outright, and anything else displaces
    /// the clauses of its own negation before being added.
    pub fn revise(&self, formula: &Formula) -> Result<Revision, RevisionErr> {
        let incoming = naive_cnf(formula)?;

        if incoming.clauses().iter().all(|c| self.clauses.contains(c)) {
            log::debug!("{} is already in the base", formula);
            return Ok(Revision {
                base: self.clone(),
                outcome: RevisionOutcome::AlreadyBelieved,
                trace: vec![],
            });
        }

        let complement = naive_cnf(&formula.negated())?;
        let res = self.refute_with(&complement);

        match res.outcome {
            SaturationOutcome::Refuted => {
                log::debug!("{} is entailed, expanding", formula);
                let mut clauses = self.clauses.clone();
                clauses.unite(&incoming);
                Ok(Revision {
                    base: BeliefBase { clauses },
                    outcome: RevisionOutcome::Expanded,
                    trace: res.trace,
                })
            }
            SaturationOutcome::StepLimit => Ok(Revision {
                base: self.clone(),
                outcome: RevisionOutcome::Undetermined,
                trace: res.trace,
            }),
            SaturationOutcome::Saturated => {
                let mut clauses = self.clauses.clone();
                let mut removed = vec![];
                for c in complement.clauses() {
                    if let Some(idx) = clauses.position(c) {
                        removed.push(clauses.remove(idx));
                    }
                }
                log::debug!(
                    "{} is not entailed, removed {} conflicting clause(s)",
                    formula,
                    removed.len()
                );
                clauses.unite(&incoming);
                Ok(Revision {
                    base: BeliefBase { clauses },
                    outcome: RevisionOutcome::Revised { removed },
                    trace: res.trace,
                })
            }
        }
    }

    fn refute_with(&self, complement: &ClauseSet) -> SaturationResult {
        let mut test = self.clauses.clone();
        test.unite(complement);
        resolve_to_saturation(&test)
    }
}

impl fmt::Display for BeliefBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.clauses, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_clause_set;

    fn base(seed: &str) -> BeliefBase {
        BeliefBase::from_seed(seed).expect(seed)
    }

    #[test]
    fn seed_lines_are_conjoined() {
        let b = base("a\n\n# a comment\nb -> c\n");
        assert_eq!(parse_clause_set("a;!b,c").unwrap(), *b.clauses());
    }

    #[test]
    fn seed_rejects_malformed_lines() {
        assert!(BeliefBase::from_seed("a &&& b").is_err());
        assert!(BeliefBase::from_seed("a\n)b(").is_err());
    }

    #[test]
    fn empty_seed_is_empty_base() {
        assert!(base("").is_empty());
        assert!(base("# only comments\n").is_empty());
    }

    #[test]
    fn consistency_check() {
        assert!(base("a\nb").is_consistent());
        assert!(!base("a\n!a").is_consistent());
        assert!(BeliefBase::default().is_consistent());
    }

    #[test]
    fn entails_by_modus_ponens() {
        let b = base("a\na -> b");
        let f = parse_prop_formula("b").unwrap();
        let (e, trace) = b.entails(&f).unwrap();

        assert_eq!(Entailment::Entailed, e);
        assert!(!trace.is_empty());
    }

    #[test]
    fn does_not_entail_unrelated_atom() {
        let b = base("a\na -> b");
        let f = parse_prop_formula("c").unwrap();
        let (e, _) = b.entails(&f).unwrap();

        assert_eq!(Entailment::NotEntailed, e);
    }

    #[test]
    fn empty_base_entails_nothing_atomic() {
        let b = BeliefBase::default();
        let f = parse_prop_formula("p").unwrap();
        let (e, _) = b.entails(&f).unwrap();

        assert_eq!(Entailment::NotEntailed, e);
    }
}
