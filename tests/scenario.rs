use formula_sim::{
    atomic::ExactMatch,
    procedures::formula::Comparison,
    scorer::Scorer,
    structures::{
        clause::Clause,
        formula::{Formula, WeightedFormula},
        literal::Literal,
        weights::Weights,
    },
    trace::{FormulaEntry, Level},
};

fn at_location(animal: &str) -> Clause {
    Clause::from(Literal::new("AtLocation", [animal, "Zoo"]))
}

fn teasing(first: &str, second: &str) -> Clause {
    Clause::from(Literal::new("Teasing", [first, second]))
}

fn animal_formula(teaser: &str, teased: &str) -> WeightedFormula {
    let weights = Weights::default()
        .with_clause(at_location("Dog"), 0.05)
        .with_clause(at_location("Monkey"), 0.05)
        .with_clause(teasing(teaser, teased), 0.9)
        .with_predicate("Teasing", 0.1)
        .with_predicate("AtLocation", 0.1)
        .with_constant("Dog", 0.35)
        .with_constant("Monkey", 0.35)
        .with_constant("Zoo", 0.1);

    let formula = Formula::from_iter([
        at_location("Dog"),
        at_location("Monkey"),
        teasing(teaser, teased),
    ]);

    WeightedFormula::new(formula, weights)
}

fn compare(first: &WeightedFormula, second: &WeightedFormula) -> Comparison {
    let mut scorer = Scorer::new(ExactMatch);
    scorer.compare(first, second).expect("Permissive comparison")
}

mod zoo {
    use super::*;

    #[test]
    fn swapped_teasing() {
        let first = animal_formula("Dog", "Monkey");
        let second = animal_formula("Monkey", "Dog");
        let comparison = compare(&first, &second);

        let weighted = comparison.trace.clauses(Level::ClauseWeighted);
        assert_eq!(weighted.len(), 3);

        let mut teasing_score = None;
        for entry in weighted {
            if entry.first == at_location("Dog") || entry.first == at_location("Monkey") {
                assert_eq!(entry.first, entry.second);
                assert!((entry.score - 1.0).abs() < 1e-12);
            } else {
                assert_eq!(entry.first, teasing("Dog", "Monkey"));
                assert_eq!(entry.second, teasing("Monkey", "Dog"));
                teasing_score = Some(entry.score);
            }
        }

        let teasing_score = teasing_score.expect("Teasing pair");
        assert!(0.0 < teasing_score && teasing_score < 1.0);

        // Predicates match with importance 0.01, arguments align at 0.2 with importance 0.49.
        assert!((teasing_score - 0.216).abs() < 1e-12);

        assert!(teasing_score < comparison.score && comparison.score < 1.0);
        assert!((comparison.score - (0.05 + 0.05 + 0.9 * 0.216)).abs() < 1e-12);

        // Weighted toward the teasing pair.
        assert!(comparison.score < 0.5);
    }

    #[test]
    fn formula_trace() {
        let first = animal_formula("Dog", "Monkey");
        let second = animal_formula("Monkey", "Dog");
        let comparison = compare(&first, &second);

        let entries = comparison.trace.formula();
        assert_eq!(entries.len(), 4);

        match &entries[0] {
            FormulaEntry::Total { a, b, c, score } => {
                assert_eq!((*a, *b, *c), (0.0, 0.0, 0.0));
                assert_eq!(*score, comparison.score);
            }
            _ => panic!("Expected the total first"),
        }

        for entry in &entries[1..] {
            match entry {
                FormulaEntry::Pair {
                    first,
                    second,
                    score,
                } if *first == teasing("Dog", "Monkey") => {
                    assert_eq!(*second, teasing("Monkey", "Dog"));
                    // The flat score, from a flat literal score of 0.6.
                    assert!((score - 0.6 / 1.4).abs() < 1e-12);
                }
                FormulaEntry::Pair { score, .. } => assert_eq!(*score, 1.0),
                _ => panic!("Expected a pair"),
            }
        }
    }

    #[test]
    fn flat_trace() {
        let first = animal_formula("Dog", "Monkey");
        let second = animal_formula("Monkey", "Dog");
        let comparison = compare(&first, &second);

        // The pair of AtLocation clauses is met twice, once each way round.
        assert_eq!(comparison.trace.len(Level::ClauseFlat), 8);
        assert_eq!(comparison.trace.len(Level::LiteralFlat), 8);
        assert_eq!(comparison.trace.len(Level::LiteralWeighted), 3);

        let teasing_entry = comparison
            .trace
            .literals(Level::LiteralFlat)
            .iter()
            .find(|entry| entry.first.predicate() == "Teasing" && entry.second.predicate() == "Teasing")
            .expect("Teasing literals");
        assert_eq!(teasing_entry.predicate, 1.0);
        assert!((teasing_entry.combined - 0.6).abs() < 1e-12);
    }

    #[test]
    fn symmetry() {
        let first = animal_formula("Dog", "Monkey");
        let second = animal_formula("Monkey", "Dog");

        let forward = compare(&first, &second);
        let backward = compare(&second, &first);
        assert!((forward.score - backward.score).abs() < 1e-12);
    }

    #[test]
    fn identity() {
        let formula = animal_formula("Dog", "Monkey");
        let comparison = compare(&formula, &formula);

        assert!((comparison.score - 1.0).abs() < 1e-12);
        for entry in comparison.trace.clauses(Level::ClauseWeighted) {
            assert!((entry.score - 1.0).abs() < 1e-12);
        }
        for entry in comparison.trace.literals(Level::LiteralWeighted) {
            if entry.first == entry.second {
                assert!((entry.combined - 1.0).abs() < 1e-12);
            }
        }
    }
}

mod trace_completeness {
    use super::*;

    fn disjoint(animals: [&str; 3], place: &str) -> WeightedFormula {
        let formula = Formula::from_iter(
            animals
                .iter()
                .map(|animal| Clause::from(Literal::new("AtLocation", [*animal, place]))),
        );
        WeightedFormula::new(formula, Weights::default())
    }

    #[test]
    fn three_by_three() {
        let first = disjoint(["Cat", "Dog", "Owl"], "Zoo");
        let second = disjoint(["Ant", "Bee", "Elk"], "Park");
        let comparison = compare(&first, &second);

        assert_eq!(comparison.trace.len(Level::ClauseFlat), 9);

        let weighted = comparison.trace.len(Level::ClauseWeighted);
        assert!((3..=6).contains(&weighted));
        assert_eq!(comparison.trace.len(Level::Formula), 1 + weighted);
    }

    #[test]
    fn fresh_trace_per_comparison() {
        let first = animal_formula("Dog", "Monkey");
        let second = animal_formula("Monkey", "Dog");

        let mut scorer = Scorer::new(ExactMatch);
        let once = scorer.compare(&first, &second).expect("Permissive comparison");
        let twice = scorer.compare(&first, &second).expect("Permissive comparison");

        for level in Level::ALL {
            assert_eq!(once.trace.len(level), twice.trace.len(level));
        }
        assert_eq!(once.score, twice.score);
    }
}

mod empty {
    use super::*;

    #[test]
    fn empty_formulas() {
        let empty = WeightedFormula::default();
        let some = animal_formula("Dog", "Monkey");

        assert_eq!(compare(&empty, &some).score, 0.0);
        assert_eq!(compare(&some, &empty).score, 0.0);
        assert_eq!(compare(&empty, &empty).score, 0.0);
    }

    #[test]
    fn empty_clause() {
        let weights = Weights::default().with_predicate("Teasing", 0.5).with_constant("Dog", 0.5);
        let first = WeightedFormula::new(Formula::from_iter([Clause::default()]), weights.clone());
        let second = WeightedFormula::new(Formula::from_iter([teasing("Dog", "Dog")]), weights);

        let comparison = compare(&first, &second);
        assert_eq!(comparison.score, 0.0);
    }
}
