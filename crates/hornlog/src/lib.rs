//! Hornlog: a forward-chaining inference engine for first-order logic
//!
//! This library provides a first-order term model, Robinson unification
//! with occurs check, and a forward-chaining engine that applies
//! implication rules to a growing fact set until a query is derived, a
//! fixpoint is reached, or the iteration cap runs out.

pub mod engine;
pub mod fol;
pub mod json;
pub mod parser;
pub mod unification;

// Re-export commonly used types from fol
pub use fol::{Constant, KnowledgeBase, PredicateSymbol, Rule, Substitution, Term, Variable};

// Re-export engine types
pub use engine::{forward_chain, ChainConfig, ChainResult, ChainState, InferredFact};

pub use unification::{occurs_check, unify, unify_with, UnificationError, UnificationResult};

pub use parser::{parse_kb, parse_rule, parse_statement, parse_term, KbDocument, Statement};
