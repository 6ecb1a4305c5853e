//! Variable substitutions

use super::term::{Term, Variable};
use std::collections::HashMap;
use std::fmt;

/// A substitution mapping variables to terms
///
/// Bindings are only ever added during unification, never rewritten; a
/// variable bound to another variable is resolved by following the chain
/// until an unbound variable or a non-variable term is reached.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    map: HashMap<Variable, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: HashMap::new(),
        }
    }

    /// Add a variable -> term binding
    pub fn bind(&mut self, var: Variable, term: Term) {
        self.map.insert(var, term);
    }

    /// Get the term a variable is directly bound to, if any
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.map.get(var)
    }

    /// Check if a variable is bound
    pub fn contains(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    /// Check if this substitution has no bindings
    ///
    /// An empty substitution is still a success value for unification,
    /// distinct from failure.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Iterate over the bindings
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.map.iter()
    }
}

impl Term {
    /// Resolve this term to its most-bound form under a substitution
    ///
    /// Bound variables are chased through chains of bindings; predicate
    /// arguments are resolved recursively; constants and unbound variables
    /// are returned unchanged. Neither the term nor the substitution is
    /// mutated.
    pub fn resolve(&self, subst: &Substitution) -> Term {
        match self {
            Term::Variable(v) => match subst.get(v) {
                Some(bound) => bound.resolve(subst),
                None => self.clone(),
            },
            Term::Constant(_) => self.clone(),
            Term::Predicate(pred, args) => {
                let new_args = args.iter().map(|arg| arg.resolve(subst)).collect();
                Term::Predicate(pred.clone(), new_args)
            }
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} -> {}", var, term)?;
        }
        write!(f, "}}")
    }
}
