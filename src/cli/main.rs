use std::{fs::File, io::BufReader, path::Path};

use clap::Parser;

use args::{Args, Metric};
use formula_sim::{
    atomic::{EditDistance, ExactMatch, Memoized, TermSimilarity},
    builder::read_formula,
    config::Config,
    scorer::Scorer,
    structures::formula::WeightedFormula,
    types::err::{self},
};

mod args;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let first = load_formula(&args.first);
    let second = load_formula(&args.second);

    let config = args.config();
    if args.cache == 0 {
        println!("c Configuration error: {}", err::ConfigError::CacheCapacity);
        std::process::exit(2);
    }

    match args.metric {
        Metric::Exact => run(config, Memoized::new(ExactMatch, args.cache), &first, &second, args.trace),
        Metric::Levenshtein => run(config, Memoized::new(EditDistance, args.cache), &first, &second, args.trace),
    }
}

fn load_formula(path: &Path) -> WeightedFormula {
    println!("c Reading formula from {path:?}");

    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open {path:?}");
            std::process::exit(1);
        }
    };

    match read_formula(BufReader::new(&file)) {
        Ok(formula) => {
            println!("c {} clauses", formula.formula.size());
            formula
        }
        Err(e) => {
            println!("c Error reading {path:?}: {e}");
            std::process::exit(1);
        }
    }
}

fn run<S: TermSimilarity>(
    config: Config,
    similarity: Memoized<S>,
    first: &WeightedFormula,
    second: &WeightedFormula,
    show_trace: bool,
) {
    let mut scorer = match Scorer::from_config(config, similarity) {
        Ok(scorer) => scorer,
        Err(e) => {
            println!("c {e}");
            std::process::exit(2);
        }
    };

    let comparison = match scorer.compare(first, second) {
        Ok(comparison) => comparison,
        Err(e) => {
            println!("c {e}");
            std::process::exit(2);
        }
    };

    if comparison.correction != 0.0 {
        println!("c Correction {}", comparison.correction);
    }
    println!(
        "c Token cache: {} hits, {} misses",
        scorer.similarity().hits(),
        scorer.similarity().misses()
    );

    if show_trace {
        match serde_json::to_string_pretty(&comparison.trace) {
            Ok(json) => println!("{json}"),
            Err(e) => println!("c Failed to write trace: {e}"),
        }
    }

    println!("s {:.6}", comparison.score);
}
