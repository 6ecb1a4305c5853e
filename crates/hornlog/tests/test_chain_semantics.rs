//! End-to-end semantics of the forward-chaining engine

use hornlog::{
    forward_chain, unify, ChainConfig, ChainResult, ChainState, KnowledgeBase, Rule, Term,
};

fn animal_kb() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    kb.add_fact(Term::predicate("Animal", vec![Term::constant("Dog")]));
    kb.add_fact(Term::predicate("Animal", vec![Term::constant("Cat")]));
    kb.add_fact(Term::predicate(
        "Loves",
        vec![Term::constant("John"), Term::constant("Dog")],
    ));
    kb.add_fact(Term::predicate(
        "Owns",
        vec![Term::constant("John"), Term::constant("Dog")],
    ));
    kb.add_rule(Rule::new(
        vec![
            Term::predicate("Animal", vec![Term::var("x")]),
            Term::predicate("Loves", vec![Term::var("y"), Term::var("x")]),
        ],
        Term::predicate("Loves", vec![Term::var("x"), Term::var("y")]),
    ));
    kb.add_rule(Rule::new(
        vec![
            Term::predicate("Owns", vec![Term::var("x"), Term::var("y")]),
            Term::predicate("Animal", vec![Term::var("y")]),
        ],
        Term::predicate("KeepsAsPet", vec![Term::var("x"), Term::var("y")]),
    ));
    kb
}

#[test]
fn test_animal_ownership_scenario_proved() {
    let query = Term::predicate(
        "Loves",
        vec![Term::constant("Dog"), Term::constant("John")],
    );
    let result = forward_chain(animal_kb(), query, ChainConfig::default());
    assert!(matches!(result, ChainResult::Proved(_)));
}

#[test]
fn test_pet_query_needs_second_rule() {
    let query = Term::predicate(
        "KeepsAsPet",
        vec![Term::constant("John"), Term::constant("Dog")],
    );
    let result = forward_chain(animal_kb(), query, ChainConfig::default());
    assert!(matches!(result, ChainResult::Proved(_)));
}

#[test]
fn test_unprovable_query_is_not_derivable() {
    let query = Term::predicate(
        "KeepsAsPet",
        vec![Term::constant("John"), Term::constant("Cat")],
    );
    let result = forward_chain(animal_kb(), query, ChainConfig::default());
    assert_eq!(result, ChainResult::NotDerivable);
}

#[test]
fn test_cap_exhaustion_is_inconclusive_not_underivable() {
    // Ever-growing successor terms prevent a fixpoint; the cap must be
    // reported as Inconclusive, never as NotDerivable.
    let mut kb = KnowledgeBase::new();
    kb.add_fact(Term::predicate("Num", vec![Term::constant("Zero")]));
    kb.add_rule(Rule::new(
        vec![Term::predicate("Num", vec![Term::var("x")])],
        Term::predicate("Num", vec![Term::predicate("S", vec![Term::var("x")])]),
    ));

    let query = Term::predicate("Never", vec![Term::constant("Matches")]);
    let result = forward_chain(kb, query, ChainConfig { max_iterations: 3 });
    assert_eq!(result, ChainResult::Inconclusive);
}

#[test]
fn test_trace_matches_derived_facts() {
    let query = Term::predicate("NoSuch", vec![Term::constant("Thing")]);
    let mut state = ChainState::new(animal_kb(), query, ChainConfig::default());
    let initial_count = state.facts().len();
    let (result, trace) = state.run();

    assert_eq!(result, ChainResult::NotDerivable);
    // Monotone growth: everything traced is in the final fact set
    assert_eq!(state.facts().len(), initial_count + trace.len());
    for event in &trace {
        assert!(state.facts().contains(&event.fact));
        assert!(event.iteration >= 1);
    }
}

#[test]
fn test_derived_facts_feed_later_iterations() {
    // Chain of three rules; the last conclusion is only derivable from a
    // fact produced two iterations earlier.
    let mut kb = KnowledgeBase::new();
    kb.add_fact(Term::predicate("A", vec![Term::constant("C0")]));
    kb.add_rule(Rule::new(
        vec![Term::predicate("A", vec![Term::var("x")])],
        Term::predicate("B", vec![Term::var("x")]),
    ));
    kb.add_rule(Rule::new(
        vec![Term::predicate("B", vec![Term::var("x")])],
        Term::predicate("C", vec![Term::var("x")]),
    ));
    kb.add_rule(Rule::new(
        vec![Term::predicate("C", vec![Term::var("x")])],
        Term::predicate("D", vec![Term::var("x")]),
    ));

    let query = Term::predicate("D", vec![Term::constant("C0")]);
    let result = forward_chain(kb, query, ChainConfig::default());
    assert!(matches!(result, ChainResult::Proved(_)));
}

#[test]
fn test_proved_substitution_answers_open_query() {
    // Query Loves(Dog, z): the reported substitution must ground z
    let query = Term::predicate("Loves", vec![Term::constant("Dog"), Term::var("z")]);
    let result = forward_chain(animal_kb(), query.clone(), ChainConfig::default());

    match result {
        ChainResult::Proved(subst) => {
            let answer = query.resolve(&subst);
            assert!(answer.is_ground());
            // The answer must itself unify with the query
            assert!(unify(&answer, &query).is_ok());
        }
        other => panic!("Expected proof, got {:?}", other),
    }
}

#[test]
fn test_two_runs_are_independent() {
    // Standardization state is engine-owned; a second run over the same
    // rules behaves identically.
    let query = Term::predicate(
        "Loves",
        vec![Term::constant("Dog"), Term::constant("John")],
    );
    let first = forward_chain(animal_kb(), query.clone(), ChainConfig::default());
    let second = forward_chain(animal_kb(), query, ChainConfig::default());
    assert_eq!(first, second);
}
