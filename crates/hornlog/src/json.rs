//! JSON serialization types for inference results

use crate::engine::{ChainResult, InferredFact};
use crate::fol::{Rule, Substitution, Term};
use serde::{Deserialize, Serialize};

/// JSON representation of a term
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TermJson {
    Variable { name: String },
    Constant { name: String },
    Predicate { name: String, args: Vec<TermJson> },
}

impl TermJson {
    pub fn from_term(term: &Term) -> Self {
        match term {
            Term::Variable(v) => TermJson::Variable {
                name: v.name.clone(),
            },
            Term::Constant(c) => TermJson::Constant {
                name: c.name.clone(),
            },
            Term::Predicate(pred, args) => TermJson::Predicate {
                name: pred.name.clone(),
                args: args.iter().map(TermJson::from_term).collect(),
            },
        }
    }
}

/// JSON representation of a single variable binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingJson {
    pub variable: String,
    pub term: TermJson,
}

/// JSON representation of a substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionJson {
    pub bindings: Vec<BindingJson>,
}

impl SubstitutionJson {
    pub fn from_substitution(subst: &Substitution) -> Self {
        let mut bindings: Vec<BindingJson> = subst
            .iter()
            .map(|(var, term)| BindingJson {
                variable: var.name.clone(),
                term: TermJson::from_term(term),
            })
            .collect();
        // HashMap iteration order is unstable; sort for reproducible output
        bindings.sort_by(|a, b| a.variable.cmp(&b.variable));
        SubstitutionJson { bindings }
    }
}

/// JSON representation of a rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleJson {
    pub premises: Vec<TermJson>,
    pub conclusion: TermJson,
}

impl RuleJson {
    pub fn from_rule(rule: &Rule) -> Self {
        RuleJson {
            premises: rule.premises.iter().map(TermJson::from_term).collect(),
            conclusion: TermJson::from_term(&rule.conclusion),
        }
    }
}

/// JSON representation of one inference-trace entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferredFactJson {
    pub iteration: usize,
    pub rule_index: usize,
    pub fact: TermJson,
    pub binding: SubstitutionJson,
}

impl InferredFactJson {
    pub fn from_inferred_fact(event: &InferredFact) -> Self {
        InferredFactJson {
            iteration: event.iteration,
            rule_index: event.rule_index,
            fact: TermJson::from_term(&event.fact),
            binding: SubstitutionJson::from_substitution(&event.binding),
        }
    }
}

/// JSON representation of a forward-chaining outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum ChainResultJson {
    Proved { substitution: SubstitutionJson },
    NotDerivable,
    Inconclusive,
}

impl ChainResultJson {
    pub fn from_result(result: &ChainResult) -> Self {
        match result {
            ChainResult::Proved(subst) => ChainResultJson::Proved {
                substitution: SubstitutionJson::from_substitution(subst),
            },
            ChainResult::NotDerivable => ChainResultJson::NotDerivable,
            ChainResult::Inconclusive => ChainResultJson::Inconclusive,
        }
    }
}

/// Full machine-readable report of one inference run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainReportJson {
    pub query: TermJson,
    pub result: ChainResultJson,
    pub trace: Vec<InferredFactJson>,
}

impl ChainReportJson {
    pub fn new(query: &Term, result: &ChainResult, trace: &[InferredFact]) -> Self {
        ChainReportJson {
            query: TermJson::from_term(query),
            result: ChainResultJson::from_result(result),
            trace: trace.iter().map(InferredFactJson::from_inferred_fact).collect(),
        }
    }
}
