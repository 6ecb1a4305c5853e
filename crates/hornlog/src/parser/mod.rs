//! Textual front end for terms, rules, and knowledge-base documents

mod kb;

pub use kb::{parse_kb, parse_rule, parse_statement, parse_term, KbDocument, Statement};
