//! Most General Unifier (MGU) computation

use crate::fol::{Substitution, Term, Variable};

/// Result of a unification attempt
pub type UnificationResult = Result<Substitution, UnificationError>;

/// Errors that can occur during unification
///
/// Failure is a normal outcome of unification, not a fault; callers branch
/// on it the same way they branch on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnificationError {
    /// Occurs check failed - variable occurs in term
    OccursCheck(Variable, Term),
    /// Predicate names don't match
    PredicateClash(String, String),
    /// Arities don't match
    ArityMismatch(usize, usize),
    /// Constant symbols don't match
    ConstantClash(String, String),
    /// Constant-predicate clash
    ConstantPredicateClash(String, String),
}

/// Unify two terms, returning a most general unifier (MGU) if one exists
///
/// Success with no bindings is the empty substitution, which is distinct
/// from failure.
pub fn unify(term1: &Term, term2: &Term) -> UnificationResult {
    unify_with(term1, term2, Substitution::new())
}

/// Unify two terms under an existing substitution
///
/// The incoming substitution is extended, never rewritten: every binding it
/// holds is still present in the result. Argument pairs of matching
/// predicates are unified left to right, threading the substitution from
/// each pair into the next and failing on the first mismatch.
pub fn unify_with(term1: &Term, term2: &Term, subst: Substitution) -> UnificationResult {
    let t1 = term1.resolve(&subst);
    let t2 = term2.resolve(&subst);

    // Same term - nothing to do
    if t1 == t2 {
        return Ok(subst);
    }

    match (&t1, &t2) {
        // Variable cases
        (Term::Variable(v), t) | (t, Term::Variable(v)) => {
            if occurs_check(v, t, &subst) {
                Err(UnificationError::OccursCheck(v.clone(), t.clone()))
            } else {
                let mut extended = subst;
                extended.bind(v.clone(), t.clone());
                Ok(extended)
            }
        }

        // Constant clash
        (Term::Constant(c1), Term::Constant(c2)) => Err(UnificationError::ConstantClash(
            c1.name.clone(),
            c2.name.clone(),
        )),

        // Predicate terms
        (Term::Predicate(p1, args1), Term::Predicate(p2, args2)) => {
            if p1.name != p2.name {
                return Err(UnificationError::PredicateClash(
                    p1.name.clone(),
                    p2.name.clone(),
                ));
            }
            if args1.len() != args2.len() {
                return Err(UnificationError::ArityMismatch(args1.len(), args2.len()));
            }

            // Unify arguments pairwise
            let mut current = subst;
            for (arg1, arg2) in args1.iter().zip(args2.iter()) {
                current = unify_with(arg1, arg2, current)?;
            }
            Ok(current)
        }

        // Constant-Predicate clash
        (Term::Constant(c), Term::Predicate(p, _)) | (Term::Predicate(p, _), Term::Constant(c)) => {
            Err(UnificationError::ConstantPredicateClash(
                c.name.clone(),
                p.name.clone(),
            ))
        }
    }
}

/// Check if a variable occurs in a term (occurs check)
///
/// Follows bindings in the substitution when an inner variable is bound, so
/// a binding that would create a cyclic structure is caught even when the
/// cycle runs through earlier bindings. Must run before every new binding.
pub fn occurs_check(var: &Variable, term: &Term, subst: &Substitution) -> bool {
    match term {
        Term::Variable(v) => {
            if v == var {
                true
            } else if let Some(bound) = subst.get(v) {
                occurs_check(var, bound, subst)
            } else {
                false
            }
        }
        Term::Constant(_) => false,
        Term::Predicate(_, args) => args.iter().any(|arg| occurs_check(var, arg, subst)),
    }
}
