//! End-to-end revision behavior over small seeded belief bases.

use credo::{parse_clause_set, parse_prop_formula, BeliefBase, Entailment, RevisionOutcome};

fn base(seed: &str) -> BeliefBase {
    BeliefBase::from_seed(seed).expect(seed)
}

fn revise(b: &BeliefBase, formula: &str) -> credo::Revision {
    let f = parse_prop_formula(formula).expect(formula);
    b.revise(&f).expect(formula)
}

#[test]
fn entailed_formula_is_added_by_expansion() {
    let b = base("a & (a -> b)");
    let rev = revise(&b, "b");

    assert_eq!(RevisionOutcome::Expanded, rev.outcome);
    assert!(!rev.trace.is_empty());
    assert_eq!(
        parse_clause_set("a;!a,b;b").unwrap(),
        *rev.base.clauses()
    );
}

#[test]
fn contradicting_atom_displaces_its_complement() {
    let b = base("a");
    let rev = revise(&b, "!a");

    match &rev.outcome {
        RevisionOutcome::Revised { removed } => {
            assert_eq!(vec![parse_clause_set("a").unwrap().clauses()[0].clone()], *removed);
        }
        other => panic!("expected a revision, got {:?}", other),
    }
    assert_eq!(parse_clause_set("!a").unwrap(), *rev.base.clauses());
    assert!(rev.base.is_consistent());
}

#[test]
fn repeated_formula_is_a_noop() {
    let b = base("a | b");
    let rev = revise(&b, "a | b");

    assert_eq!(RevisionOutcome::AlreadyBelieved, rev.outcome);
    assert!(rev.trace.is_empty());
    assert_eq!(b, rev.base);
}

#[test]
fn empty_base_accepts_any_atom() {
    let b = BeliefBase::default();
    let rev = revise(&b, "p");

    assert_eq!(
        RevisionOutcome::Revised { removed: vec![] },
        rev.outcome
    );
    assert_eq!(parse_clause_set("p").unwrap(), *rev.base.clauses());
}

#[test]
fn expansion_is_idempotent() {
    let b = base("a & (a -> b)");
    let once = revise(&b, "b");
    let twice = revise(&once.base, "b");

    assert_eq!(RevisionOutcome::AlreadyBelieved, twice.outcome);
    assert_eq!(once.base, twice.base);
}

#[test]
fn entails_is_read_only() {
    let b = base("a & (a -> b)");
    let before = b.clone();

    let f = parse_prop_formula("b").unwrap();
    let (e, _) = b.entails(&f).unwrap();
    assert_eq!(Entailment::Entailed, e);

    let f = parse_prop_formula("c").unwrap();
    let (e, _) = b.entails(&f).unwrap();
    assert_eq!(Entailment::NotEntailed, e);

    assert_eq!(before, b);
}

#[test]
fn revising_compound_formula_unions_its_clauses() {
    let b = base("p");
    let rev = revise(&b, "q & (q -> r)");

    assert_eq!(
        parse_clause_set("p;q;!q,r").unwrap(),
        *rev.base.clauses()
    );
}

#[test]
fn inconsistent_seed_is_reported_not_repaired() {
    let b = base("a\n!a");
    assert!(!b.is_consistent());
    assert_eq!(parse_clause_set("a;!a").unwrap(), *b.clauses());
}
