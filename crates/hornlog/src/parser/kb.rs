//! Parser for the textual knowledge-base format
//!
//! Terms look like `Loves(John, x)`: leading-lowercase or `?`-prefixed
//! identifiers are variables, leading-uppercase identifiers are constants,
//! and an identifier followed by `(` is a predicate. Rules join premises
//! with `AND` or `∧` and end with `=> conclusion`. A knowledge-base
//! document is line-oriented: `%` and `#` open comments, a `?-` prefix
//! marks the query, lines containing `=>` are rules, and every other
//! nonempty line is a fact.
//!
//! Malformed input is rejected here; the core operates on well-formed
//! terms and rules only.

use crate::fol::{KnowledgeBase, Rule, Term};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0, satisfy},
    combinator::recognize,
    multi::separated_list0,
    sequence::{pair, tuple},
    IResult,
};

/// A single parsed statement: either a fact or a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Fact(Term),
    Rule(Rule),
}

/// A parsed knowledge-base document
#[derive(Debug, Clone, Default)]
pub struct KbDocument {
    pub kb: KnowledgeBase,
    pub query: Option<Term>,
}

/// Parse a single term such as `P(x, f(y), John)`
pub fn parse_term(input: &str) -> Result<Term, String> {
    let trimmed = input.trim();
    match term(trimmed) {
        Ok((rest, t)) if rest.trim().is_empty() => Ok(t),
        Ok((rest, _)) => Err(format!(
            "Unexpected trailing input '{}' after term in: {}",
            rest.trim(),
            trimmed
        )),
        Err(e) => Err(format!("Parse error in term: {:?}\nInput: {}", e, trimmed)),
    }
}

/// Parse a rule such as `Animal(x) AND Loves(y, x) => Loves(x, y)`
pub fn parse_rule(input: &str) -> Result<Rule, String> {
    let trimmed = input.trim();
    match rule(trimmed) {
        Ok((rest, r)) if rest.trim().is_empty() => Ok(r),
        Ok((rest, _)) => Err(format!(
            "Unexpected trailing input '{}' after rule in: {}",
            rest.trim(),
            trimmed
        )),
        Err(e) => Err(format!("Parse error in rule: {:?}\nInput: {}", e, trimmed)),
    }
}

/// Parse a statement: a rule if it contains `=>`, otherwise a fact
pub fn parse_statement(input: &str) -> Result<Statement, String> {
    if input.contains("=>") {
        parse_rule(input).map(Statement::Rule)
    } else {
        parse_term(input).map(Statement::Fact)
    }
}

/// Parse a whole knowledge-base document
pub fn parse_kb(input: &str) -> Result<KbDocument, String> {
    let mut doc = KbDocument::default();

    for (line_no, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('%') || line.starts_with('#') {
            continue;
        }

        let with_context = |e: String| format!("Line {}: {}", line_no + 1, e);

        if let Some(query_src) = line.strip_prefix("?-") {
            if doc.query.is_some() {
                return Err(format!("Line {}: duplicate query", line_no + 1));
            }
            doc.query = Some(parse_term(query_src).map_err(with_context)?);
            continue;
        }

        match parse_statement(line).map_err(with_context)? {
            Statement::Fact(fact) => {
                doc.kb.add_fact(fact);
            }
            Statement::Rule(rule) => doc.kb.add_rule(rule),
        }
    }

    Ok(doc)
}

fn ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parse an identifier (letters, digits, underscores)
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    take_while1(ident_char)(input)
}

/// Parse a variable name: leading lowercase, or a `?` prefix
fn parse_variable_name(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(char('?'), take_while1(ident_char))),
        recognize(pair(satisfy(|c| c.is_lowercase()), take_while(ident_char))),
    ))(input)
}

/// Parse a constant name: any identifier that is not a variable name
fn parse_constant_name(input: &str) -> IResult<&str, &str> {
    let (rest, name) = parse_identifier(input)?;
    match name.chars().next() {
        Some(c) if !c.is_lowercase() => Ok((rest, name)),
        _ => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Satisfy,
        ))),
    }
}

/// Parse a term
fn term(input: &str) -> IResult<&str, Term> {
    alt((predicate_term, variable_term, constant_term))(input)
}

/// Parse a predicate term: an identifier applied to a parenthesized list
fn predicate_term(input: &str) -> IResult<&str, Term> {
    let (input, name) = parse_identifier(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, args) =
        separated_list0(tuple((multispace0, char(','), multispace0)), term)(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, Term::predicate(name, args)))
}

/// Parse a variable term
fn variable_term(input: &str) -> IResult<&str, Term> {
    let (input, name) = parse_variable_name(input)?;
    Ok((input, Term::var(name)))
}

/// Parse a constant term
fn constant_term(input: &str) -> IResult<&str, Term> {
    let (input, name) = parse_constant_name(input)?;
    Ok((input, Term::constant(name)))
}

/// Parse the premise separator: ASCII `AND` or Unicode `∧`
fn conjunction(input: &str) -> IResult<&str, &str> {
    let (input, _) = multispace0(input)?;
    let (input, sep) = alt((tag("AND"), tag("∧")))(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, sep))
}

/// Parse a rule: premises joined by `AND`/`∧`, then `=>`, then a conclusion
fn rule(input: &str) -> IResult<&str, Rule> {
    let (input, first) = term(input)?;
    let mut premises = vec![first];

    let mut remaining = input;
    loop {
        match conjunction(remaining) {
            Ok((rest, _)) => {
                let (rest, premise) = term(rest)?;
                premises.push(premise);
                remaining = rest;
            }
            Err(_) => break,
        }
    }

    let (input, _) = multispace0(remaining)?;
    let (input, _) = tag("=>")(input)?;
    let (input, _) = multispace0(input)?;
    let (input, conclusion) = term(input)?;

    Ok((input, Rule::new(premises, conclusion)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constant() {
        assert_eq!(parse_term("John").unwrap(), Term::constant("John"));
    }

    #[test]
    fn test_parse_variable_lowercase() {
        assert_eq!(parse_term("x").unwrap(), Term::var("x"));
    }

    #[test]
    fn test_parse_variable_question_mark() {
        assert_eq!(parse_term("?who").unwrap(), Term::var("?who"));
    }

    #[test]
    fn test_parse_predicate() {
        assert_eq!(
            parse_term("Loves(John, x)").unwrap(),
            Term::predicate("Loves", vec![Term::constant("John"), Term::var("x")])
        );
    }

    #[test]
    fn test_parse_nested_predicate() {
        assert_eq!(
            parse_term("P(x, f(y))").unwrap(),
            Term::predicate(
                "P",
                vec![Term::var("x"), Term::predicate("f", vec![Term::var("y")])],
            )
        );
    }

    #[test]
    fn test_whitespace_tolerance() {
        assert_eq!(
            parse_term("  Loves( John ,   x )  ").unwrap(),
            Term::predicate("Loves", vec![Term::constant("John"), Term::var("x")])
        );
    }

    #[test]
    fn test_parse_rule_ascii_and() {
        let rule = parse_rule("Animal(x) AND Loves(y, x) => Loves(x, y)").unwrap();
        assert_eq!(rule.premises.len(), 2);
        assert_eq!(
            rule.conclusion,
            Term::predicate("Loves", vec![Term::var("x"), Term::var("y")])
        );
    }

    #[test]
    fn test_parse_rule_unicode_conjunction() {
        let rule = parse_rule("Owns(x, y) ∧ Animal(y) => KeepsAsPet(x, y)").unwrap();
        assert_eq!(rule.premises.len(), 2);
        assert_eq!(
            rule.premises[1],
            Term::predicate("Animal", vec![Term::var("y")])
        );
    }

    #[test]
    fn test_parse_rule_single_premise() {
        let rule = parse_rule("Human(x) => Mortal(x)").unwrap();
        assert_eq!(rule.premises.len(), 1);
    }

    #[test]
    fn test_statement_dispatch() {
        assert!(matches!(
            parse_statement("Animal(Dog)").unwrap(),
            Statement::Fact(_)
        ));
        assert!(matches!(
            parse_statement("Animal(x) => HasLegs(x)").unwrap(),
            Statement::Rule(_)
        ));
    }

    #[test]
    fn test_mismatched_parens_rejected() {
        assert!(parse_term("P(x, f(y)").is_err());
        assert!(parse_term("P x)").is_err());
    }

    #[test]
    fn test_trailing_garbage_rejected() {
        assert!(parse_term("P(x) extra").is_err());
    }

    #[test]
    fn test_parse_kb_document() {
        let src = "\
% animal-ownership example
Animal(Dog)
Animal(Cat)
Loves(John, Dog)
Owns(John, Dog)

# rules
Animal(x) AND Loves(y, x) => Loves(x, y)
Owns(x, y) ∧ Animal(y) => KeepsAsPet(x, y)

?- Loves(Dog, John)
";
        let doc = parse_kb(src).unwrap();
        assert_eq!(doc.kb.fact_count(), 4);
        assert_eq!(doc.kb.rules().len(), 2);
        assert_eq!(
            doc.query,
            Some(Term::predicate(
                "Loves",
                vec![Term::constant("Dog"), Term::constant("John")],
            ))
        );
    }

    #[test]
    fn test_parse_kb_duplicate_query_rejected() {
        let src = "?- P(x)\n?- Q(x)\n";
        assert!(parse_kb(src).is_err());
    }

    #[test]
    fn test_parse_kb_reports_line_number() {
        let err = parse_kb("Animal(Dog)\nP(x, f(y)\n").unwrap_err();
        assert!(err.starts_with("Line 2:"), "unexpected error: {}", err);
    }

    #[test]
    fn test_display_round_trip() {
        let original = Term::predicate(
            "Loves",
            vec![
                Term::constant("John"),
                Term::predicate("f", vec![Term::var("x")]),
            ],
        );
        let reparsed = parse_term(&format!("{}", original)).unwrap();
        assert_eq!(reparsed, original);
    }
}
