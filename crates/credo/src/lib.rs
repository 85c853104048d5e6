pub mod clause;
mod consts;
pub mod logic;
pub mod parse;
pub mod resolution;
pub mod revision;
pub mod symbol;

pub use consts::{CNF_BLOWUP_LIMIT, RESOLUTION_STEP_LIMIT};

pub use clause::{Clause, ClauseSet, Literal};
pub use logic::transform::{naive_cnf, FormulaConversionErr};
pub use logic::Formula;
pub use parse::{parse_clause_set, parse_prop_formula, ParseErr};
pub use resolution::{
    resolve_to_saturation, resolve_with_limit, ResolutionStep, SaturationOutcome, SaturationResult,
};
pub use revision::{BeliefBase, Entailment, Revision, RevisionErr, RevisionOutcome};
pub use symbol::Symbol;
