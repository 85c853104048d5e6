use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clause::{Clause, ClauseSet, Literal};
use crate::consts::RESOLUTION_STEP_LIMIT;

/// Why a saturation run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum SaturationOutcome {
    /// The empty clause was derived; the input set is unsatisfiable.
    Refuted,
    /// No pair of clauses yields a new resolvent.
    Saturated,
    /// The step cap was hit before either of the above.
    StepLimit,
}

/// One executed resolution step.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ResolutionStep {
    pub left: Clause,
    pub right: Clause,
    pub resolvent: Clause,
}

impl fmt::Display for ResolutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ⊗ {} → {}", self.left, self.right, self.resolvent)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SaturationResult {
    pub outcome: SaturationOutcome,
    pub clauses: ClauseSet,
    pub trace: Vec<ResolutionStep>,
}

pub fn resolve_to_saturation(initial: &ClauseSet) -> SaturationResult {
    resolve_with_limit(initial, RESOLUTION_STEP_LIMIT)
}

/// Resolves pairs of clauses until the empty clause appears, no pair
/// yields anything new, or `step_limit` steps have been executed.
///
/// Clause pairs are scanned in insertion order and a pair is resolved on
/// the first complementary literal pair only. A resolvent that is already
/// present is skipped; otherwise both parents are removed, the resolvent
/// is appended and the scan restarts. The working set shrinks by one
/// clause per step, so every run terminates.
pub fn resolve_with_limit(initial: &ClauseSet, step_limit: usize) -> SaturationResult {
    let mut clauses = initial.clone();
    let mut trace = vec![];

    if clauses.clauses().iter().any(Clause::is_empty) {
        return SaturationResult {
            outcome: SaturationOutcome::Refuted,
            clauses,
            trace,
        };
    }

    loop {
        if trace.len() >= step_limit {
            return SaturationResult {
                outcome: SaturationOutcome::StepLimit,
                clauses,
                trace,
            };
        }

        let Some((i, j, resolvent)) = next_step(&clauses) else {
            return SaturationResult {
                outcome: SaturationOutcome::Saturated,
                clauses,
                trace,
            };
        };

        let step = ResolutionStep {
            left: clauses.clauses()[i].clone(),
            right: clauses.clauses()[j].clone(),
            resolvent: resolvent.clone(),
        };
        log::trace!("{}", step);
        trace.push(step);

        let refuted = resolvent.is_empty();
        clauses.remove(j);
        clauses.remove(i);
        clauses.add(resolvent);

        if refuted {
            return SaturationResult {
                outcome: SaturationOutcome::Refuted,
                clauses,
                trace,
            };
        }
    }
}

/// First pair of clauses whose resolvent is empty or not yet in the set,
/// under the deterministic pair scan. A pair whose resolvent is already
/// present contributes nothing and is passed over.
fn next_step(set: &ClauseSet) -> Option<(usize, usize, Clause)> {
    let cs = set.clauses();

    for i in 0..cs.len() {
        for j in (i + 1)..cs.len() {
            if let Some((l1, l2)) = find_complementary(&cs[i], &cs[j]) {
                let resolvent = build_resolvent(&cs[i], &l1, &cs[j], &l2);
                if resolvent.is_empty() || !set.contains(&resolvent) {
                    return Some((i, j, resolvent));
                }
            }
        }
    }

    None
}

/// First literal of `c1` (in clause order) whose negation appears in
/// `c2`, paired with that negation.
pub fn find_complementary(c1: &Clause, c2: &Clause) -> Option<(Literal, Literal)> {
    for lit in c1 {
        if let Some(idx) = c2.find_negation_of(lit) {
            return Some((lit.clone(), c2.literals()[idx].clone()));
        }
    }

    None
}

pub fn build_resolvent(c1: &Clause, l1: &Literal, c2: &Clause, l2: &Literal) -> Clause {
    let literals = c1
        .literals()
        .iter()
        .filter(|l| *l != l1)
        .chain(c2.literals().iter().filter(|l| *l != l2))
        .cloned()
        .collect();
    Clause::new(literals)
}
