//! Knowledge base: facts plus rules

use super::rule::Rule;
use super::term::Term;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A knowledge base of fact terms and implication rules
///
/// Facts accumulate monotonically: once added they are never removed or
/// rewritten, and duplicates (structural equality) are rejected. Insertion
/// order is preserved so inference runs replay deterministically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    facts: IndexSet<Term>,
    rules: Vec<Rule>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base
    pub fn new() -> Self {
        KnowledgeBase {
            facts: IndexSet::new(),
            rules: Vec::new(),
        }
    }

    /// Add a fact; returns false if it was already present
    pub fn add_fact(&mut self, fact: Term) -> bool {
        self.facts.insert(fact)
    }

    /// Add a rule
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Check whether a fact is present (structural equality)
    pub fn contains_fact(&self, fact: &Term) -> bool {
        self.facts.contains(fact)
    }

    /// The facts, in insertion order
    pub fn facts(&self) -> &IndexSet<Term> {
        &self.facts
    }

    /// The rules, in insertion order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of facts
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_facts_rejected() {
        let mut kb = KnowledgeBase::new();
        let fact = Term::predicate("Animal", vec![Term::constant("Dog")]);
        assert!(kb.add_fact(fact.clone()));
        assert!(!kb.add_fact(fact));
        assert_eq!(kb.fact_count(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut kb = KnowledgeBase::new();
        kb.add_fact(Term::predicate("Animal", vec![Term::constant("Dog")]));
        kb.add_fact(Term::predicate("Animal", vec![Term::constant("Cat")]));

        let names: Vec<String> = kb.facts().iter().map(|f| format!("{}", f)).collect();
        assert_eq!(names, vec!["Animal(Dog)", "Animal(Cat)"]);
    }
}
