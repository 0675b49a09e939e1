use formula_sim::{
    atomic::{ExactMatch, LookupTable},
    builder::read_formula,
    scorer::Scorer,
    structures::{clause::Clause, literal::Literal},
    types::err::{ErrorKind, ParseError},
};

const WEIGHTS: &str = "
c Shared weights of the zoo formulas.
p Teasing 0.1
p AtLocation 0.1
k Dog 0.35
k Monkey 0.35
k Zoo 0.1
";

fn zoo(teasing: &str) -> String {
    format!(
        "{WEIGHTS}
w 0.05 AtLocation(Dog, Zoo)
w 0.05 AtLocation(Monkey, Zoo)
w 0.9  {teasing}
"
    )
}

mod reading {
    use super::*;

    #[test]
    fn zoo_formula() {
        let weighted = read_formula(zoo("Teasing(Dog, Monkey)").as_bytes()).expect("Well formed");

        assert_eq!(weighted.formula.size(), 3);
        assert!((weighted.weights.budget() - 1.0).abs() < 1e-9);

        let teasing = Clause::from(Literal::new("Teasing", ["Dog", "Monkey"]));
        assert_eq!(weighted.weights.clause(&teasing), 0.9);
    }

    #[test]
    fn disjunctions() {
        let text = "AtLocation(Dog, Zoo) | AtLocation(Dog, Park)\nRaining\n";
        let weighted = read_formula(text.as_bytes()).expect("Well formed");

        assert_eq!(weighted.formula.size(), 2);

        let sizes = weighted.formula.clauses().map(|clause| clause.size()).collect::<Vec<_>>();
        assert!(sizes.contains(&1) && sizes.contains(&2));
    }

    #[test]
    fn errors() {
        match read_formula("p Teasing 0.1\nTeasing(Dog,\n".as_bytes()) {
            Err(ErrorKind::Parse(ParseError::Literal(2))) => {}
            other => panic!("Unexpected {other:?}"),
        }

        match read_formula("k Dog many\n".as_bytes()) {
            Err(ErrorKind::Parse(ParseError::Weight(1))) => {}
            other => panic!("Unexpected {other:?}"),
        }
    }
}

mod scoring {
    use super::*;

    #[test]
    fn swapped_arguments() {
        let first = read_formula(zoo("Teasing(Dog, Monkey)").as_bytes()).expect("Well formed");
        let second = read_formula(zoo("Teasing(Monkey, Dog)").as_bytes()).expect("Well formed");

        let mut scorer = Scorer::new(ExactMatch);
        let comparison = scorer.compare(&first, &second).expect("Balanced");

        assert_eq!(comparison.correction, 0.0);
        assert!((comparison.score - 0.2944).abs() < 1e-9);
    }

    #[test]
    fn surface_forms() {
        let first = read_formula("AtLocation(Dog, Zoo)\n".as_bytes()).expect("Well formed");
        let second = read_formula("at_location(dog, ZOO)\n".as_bytes()).expect("Well formed");

        let third = read_formula("atlocation(DOG, zoo)\n".as_bytes()).expect("Well formed");

        let mut scorer = Scorer::new(ExactMatch);

        // Camel case is not split into words.
        let comparison = scorer.flat_compare(&first, &second);
        assert!(comparison.score < 1.0);

        let comparison = scorer.flat_compare(&first, &third);
        assert_eq!(comparison.score, 1.0);
    }

    #[test]
    fn synonyms() {
        let mut table = LookupTable::default();
        table.insert("Dog", "Canine", 0.9);

        let mut scorer = Scorer::new(table);
        let dog: Literal = "IsHungry(Dog)".parse().expect("Well formed");
        let canine: Literal = "IsHungry(Canine)".parse().expect("Well formed");
        let cat: Literal = "IsHungry(Cat)".parse().expect("Well formed");

        let similar = scorer.literal_similarity(&dog, &canine);
        let dissimilar = scorer.literal_similarity(&dog, &cat);

        assert!((similar - 0.95).abs() < 1e-12);
        assert_eq!(dissimilar, 0.5);
    }
}
