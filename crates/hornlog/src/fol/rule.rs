//! Implication rules

use super::substitution::Substitution;
use super::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An implication rule: if all premises hold, the conclusion holds
///
/// Premises form a conjunction. Their order is fixed for deterministic
/// replay but does not affect which queries are derivable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub premises: Vec<Term>,
    pub conclusion: Term,
}

impl Rule {
    /// Create a new rule from premises and a conclusion
    pub fn new(premises: Vec<Term>, conclusion: Term) -> Self {
        Rule {
            premises,
            conclusion,
        }
    }

    /// Resolve every premise and the conclusion under a substitution
    pub fn resolve(&self, subst: &Substitution) -> Rule {
        Rule {
            premises: self.premises.iter().map(|p| p.resolve(subst)).collect(),
            conclusion: self.conclusion.resolve(subst),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, premise) in self.premises.iter().enumerate() {
            if i > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "{}", premise)?;
        }
        write!(f, " => {}", self.conclusion)
    }
}
