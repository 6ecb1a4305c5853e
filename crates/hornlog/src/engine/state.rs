//! Forward-chaining state and algorithm
//!
//! Each iteration standardizes every rule apart with fresh variables,
//! enumerates all substitutions under which the rule's premises
//! simultaneously unify with known facts, and applies each substitution to
//! the rule's conclusion. New conclusions are collected and checked against
//! the query; the loop halts on the first proof, on a fixpoint (no new
//! facts), or when the iteration cap runs out.

use crate::fol::{KnowledgeBase, Rule, Substitution, Term, Variable};
use crate::unification::{unify, unify_with};
use indexmap::IndexSet;
use std::collections::HashMap;
use std::fmt;

/// Configuration for the forward-chaining loop
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Iteration cap; exhausting it is reported as `Inconclusive`, a
    /// resource-limit outcome distinct from logical non-derivability.
    pub max_iterations: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            max_iterations: 100,
        }
    }
}

/// Result of a forward-chaining run
///
/// None of these outcomes is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainResult {
    /// A new fact unified with the query; the substitution is the unifier
    Proved(Substitution),
    /// Fixpoint reached with no new facts; the query is not derivable
    NotDerivable,
    /// Iteration cap exhausted before a proof or a fixpoint
    Inconclusive,
}

impl ChainResult {
    pub fn is_proved(&self) -> bool {
        matches!(self, ChainResult::Proved(_))
    }
}

/// One derived fact, recorded in the inference trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredFact {
    /// Iteration in which the fact was derived (1-based)
    pub iteration: usize,
    /// Index of the producing rule in the knowledge base
    pub rule_index: usize,
    /// The derived fact
    pub fact: Term,
    /// The substitution that satisfied all of the rule's premises
    pub binding: Substitution,
}

impl fmt::Display for InferredFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[iter {}] {} (rule {}, {})",
            self.iteration, self.fact, self.rule_index, self.binding
        )
    }
}

/// Forward-chaining state for one inference run
///
/// Owns the growing fact set and the fresh-variable counter, so concurrent
/// or repeated runs never share standardization state.
pub struct ChainState {
    kb: KnowledgeBase,
    query: Term,
    config: ChainConfig,
    var_counter: usize,
    current_iteration: usize,
}

impl ChainState {
    /// Create a new run over a knowledge base and query
    pub fn new(kb: KnowledgeBase, query: Term, config: ChainConfig) -> Self {
        ChainState {
            kb,
            query,
            config,
            var_counter: 0,
            current_iteration: 0,
        }
    }

    /// The current fact set, including everything derived so far
    pub fn facts(&self) -> &IndexSet<Term> {
        self.kb.facts()
    }

    /// Number of iterations executed so far
    pub fn iterations(&self) -> usize {
        self.current_iteration
    }

    /// Run the loop to one of the three terminal outcomes
    ///
    /// Returns the outcome together with the trace of every fact derived
    /// along the way, in derivation order.
    pub fn run(&mut self) -> (ChainResult, Vec<InferredFact>) {
        let mut trace = Vec::new();

        loop {
            if self.current_iteration >= self.config.max_iterations {
                return (ChainResult::Inconclusive, trace);
            }
            self.current_iteration += 1;

            // Facts derived this iteration; deduplicated against both the
            // knowledge base and this batch, added to the KB only after
            // every rule has run against the old fact set.
            let mut new_facts: IndexSet<Term> = IndexSet::new();

            let rules: Vec<Rule> = self.kb.rules().to_vec();
            for (rule_index, rule) in rules.iter().enumerate() {
                let std_rule = self.standardize(rule);

                let mut substitutions = Vec::new();
                match_premises(
                    &std_rule.premises,
                    self.kb.facts(),
                    Substitution::new(),
                    &mut substitutions,
                );

                for theta in substitutions {
                    let inferred = std_rule.conclusion.resolve(&theta);
                    if self.kb.contains_fact(&inferred) || new_facts.contains(&inferred) {
                        continue;
                    }
                    new_facts.insert(inferred.clone());
                    trace.push(InferredFact {
                        iteration: self.current_iteration,
                        rule_index,
                        fact: inferred.clone(),
                        binding: theta,
                    });

                    if let Ok(answer) = unify(&inferred, &self.query) {
                        return (ChainResult::Proved(answer), trace);
                    }
                }
            }

            if new_facts.is_empty() {
                return (ChainResult::NotDerivable, trace);
            }
            for fact in new_facts {
                self.kb.add_fact(fact);
            }
        }
    }

    /// Produce a copy of a rule with every variable renamed to a fresh one
    ///
    /// Occurrences of the same variable within one rule map to the same
    /// fresh variable, so the rule's internal structure is preserved while
    /// no variable is ever shared across rule applications.
    fn standardize(&mut self, rule: &Rule) -> Rule {
        let mut mapping: HashMap<Variable, Variable> = HashMap::new();
        let premises = rule
            .premises
            .iter()
            .map(|p| self.rename(p, &mut mapping))
            .collect();
        let conclusion = self.rename(&rule.conclusion, &mut mapping);
        Rule::new(premises, conclusion)
    }

    fn rename(&mut self, term: &Term, mapping: &mut HashMap<Variable, Variable>) -> Term {
        match term {
            Term::Variable(v) => {
                let fresh = mapping
                    .entry(v.clone())
                    .or_insert_with(|| {
                        self.var_counter += 1;
                        Variable::new(format!("v{}", self.var_counter))
                    })
                    .clone();
                Term::Variable(fresh)
            }
            Term::Constant(_) => term.clone(),
            Term::Predicate(pred, args) => Term::Predicate(
                pred.clone(),
                args.iter().map(|arg| self.rename(arg, mapping)).collect(),
            ),
        }
    }
}

/// Enumerate every substitution under which all premises unify with facts
///
/// Premises are matched left to right: each fact that unifies with the
/// first premise extends the substitution, which is applied to the
/// remaining premises before recursing. Every complete match lands in
/// `out`; failed branches are simply abandoned.
fn match_premises(
    premises: &[Term],
    facts: &IndexSet<Term>,
    subst: Substitution,
    out: &mut Vec<Substitution>,
) {
    if premises.is_empty() {
        out.push(subst);
        return;
    }
    let first = &premises[0];
    let rest = &premises[1..];

    for fact in facts {
        if let Ok(theta) = unify_with(first, fact, subst.clone()) {
            let resolved_rest: Vec<Term> = rest.iter().map(|p| p.resolve(&theta)).collect();
            match_premises(&resolved_rest, facts, theta, out);
        }
    }
}
