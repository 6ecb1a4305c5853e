//! Forward-chaining inference over a knowledge base

mod state;

pub use state::{ChainConfig, ChainResult, ChainState, InferredFact};

use crate::fol::{KnowledgeBase, Term};

/// Run forward chaining on a knowledge base
///
/// Convenience wrapper that discards the inference trace; build a
/// [`ChainState`] directly to observe every derived fact.
pub fn forward_chain(kb: KnowledgeBase, query: Term, config: ChainConfig) -> ChainResult {
    let (result, _) = ChainState::new(kb, query, config).run();
    result
}
