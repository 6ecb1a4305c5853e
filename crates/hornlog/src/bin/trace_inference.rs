//! Trace a forward-chaining run over a knowledge-base file

use hornlog::json::ChainReportJson;
use hornlog::{
    parse_kb, ChainConfig, ChainResult, ChainState, KnowledgeBase, Rule, Term,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut kb_file: Option<String> = None;
    let mut max_iterations: usize = ChainConfig::default().max_iterations;
    let mut json_output = false;

    // Parse command line options
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--max-iterations" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<usize>() {
                        Ok(n) => max_iterations = n,
                        Err(_) => {
                            eprintln!("Invalid value for --max-iterations: {}", args[i + 1]);
                            std::process::exit(1);
                        }
                    }
                    i += 1;
                }
            }
            "--json" => {
                json_output = true;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
            other => {
                kb_file = Some(other.to_string());
            }
        }
        i += 1;
    }

    // Load the knowledge base: from a file, or the built-in example
    let (kb, query) = match kb_file {
        Some(path) => {
            let content = match std::fs::read_to_string(&path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to read file {}: {}", path, e);
                    std::process::exit(1);
                }
            };
            let doc = match parse_kb(&content) {
                Ok(d) => d,
                Err(e) => {
                    eprintln!("Parse error: {}", e);
                    std::process::exit(1);
                }
            };
            let query = match doc.query {
                Some(q) => q,
                None => {
                    eprintln!("Knowledge base has no query line (?- ...)");
                    std::process::exit(1);
                }
            };
            (doc.kb, query)
        }
        None => animal_example(),
    };

    if !json_output {
        println!("=== Forward Chaining ===\n");
        println!("Query: {}\n", query);
        println!("Facts:");
        for fact in kb.facts() {
            println!("  {}", fact);
        }
        println!("\nRules:");
        for rule in kb.rules() {
            println!("  {}", rule);
        }
        println!();
    }

    let config = ChainConfig { max_iterations };
    let mut state = ChainState::new(kb, query.clone(), config);
    let (result, trace) = state.run();

    if json_output {
        let report = ChainReportJson::new(&query, &result, &trace);
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut last_iteration = 0;
    for event in &trace {
        if event.iteration != last_iteration {
            println!("Iteration {}:", event.iteration);
            last_iteration = event.iteration;
        }
        println!("  Inferred: {}  with {}", event.fact, event.binding);
    }
    if trace.is_empty() {
        println!("No new facts inferred.");
    }

    match result {
        ChainResult::Proved(subst) => {
            println!("\nQuery proved.");
            println!("Substitution: {}", subst);
        }
        ChainResult::NotDerivable => {
            println!("\nFixpoint reached. Query cannot be derived.");
        }
        ChainResult::Inconclusive => {
            println!(
                "\nIteration cap ({}) reached. Result inconclusive.",
                max_iterations
            );
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [kb_file] [options]", program);
    eprintln!("\nWith no kb_file, runs the built-in animal-ownership example.");
    eprintln!("\nKnowledge-base format (line-oriented):");
    eprintln!("  %, #            comment lines");
    eprintln!("  Animal(Dog)     fact");
    eprintln!("  A(x) AND B(x) => C(x)   rule ('∧' also accepted)");
    eprintln!("  ?- Loves(Dog, John)     query");
    eprintln!("\nOptions:");
    eprintln!("  --max-iterations <n>   Iteration cap (default: 100)");
    eprintln!("  --json                 Emit a machine-readable JSON report");
}

/// The built-in worked example: animal-ownership reasoning
fn animal_example() -> (KnowledgeBase, Term) {
    let mut kb = KnowledgeBase::new();
    kb.add_fact(Term::predicate("Animal", vec![Term::constant("Dog")]));
    kb.add_fact(Term::predicate("Animal", vec![Term::constant("Cat")]));
    kb.add_fact(Term::predicate(
        "Loves",
        vec![Term::constant("John"), Term::constant("Dog")],
    ));
    kb.add_fact(Term::predicate(
        "Owns",
        vec![Term::constant("John"), Term::constant("Dog")],
    ));

    // Animal(x) ∧ Loves(y, x) => Loves(x, y)
    kb.add_rule(Rule::new(
        vec![
            Term::predicate("Animal", vec![Term::var("x")]),
            Term::predicate("Loves", vec![Term::var("y"), Term::var("x")]),
        ],
        Term::predicate("Loves", vec![Term::var("x"), Term::var("y")]),
    ));
    // Owns(x, y) ∧ Animal(y) => KeepsAsPet(x, y)
    kb.add_rule(Rule::new(
        vec![
            Term::predicate("Owns", vec![Term::var("x"), Term::var("y")]),
            Term::predicate("Animal", vec![Term::var("y")]),
        ],
        Term::predicate("KeepsAsPet", vec![Term::var("x"), Term::var("y")]),
    ));

    let query = Term::predicate(
        "Loves",
        vec![Term::constant("Dog"), Term::constant("John")],
    );
    (kb, query)
}
