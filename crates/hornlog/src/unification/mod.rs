//! Unification algorithm for first-order terms

mod mgu;


pub use mgu::{occurs_check, unify, unify_with, UnificationError, UnificationResult};
