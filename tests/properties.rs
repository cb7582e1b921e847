use proptest::prelude::*;

use tradeoff_engine::domain::analysis::{criterion_for, Evaluator, OptionScore, Ranker, WeightingEngine};
use tradeoff_engine::domain::foundation::{Criterion, CriterionScores, PriorityKey};
use tradeoff_engine::domain::knowledge::KnowledgeRegistry;
use tradeoff_engine::domain::options::{
    Budget, Category, Priorities, SkillLevel, TechnicalOption, Timeline, UserConstraints,
};
use tradeoff_engine::domain::recommendation::ConfidenceEstimator;

fn priorities() -> impl Strategy<Value = Priorities> {
    prop::array::uniform5(1i64..=5).prop_map(|values| {
        let mut priorities = Priorities::default();
        for (key, value) in PriorityKey::ALL.into_iter().zip(values) {
            priorities.set(key, value);
        }
        priorities
    })
}

fn criterion_scores() -> impl Strategy<Value = CriterionScores> {
    prop::array::uniform6(0.0f64..=100.0)
        .prop_map(|values| Criterion::ALL.into_iter().zip(values).collect())
}

fn constraints() -> impl Strategy<Value = UserConstraints> {
    (
        priorities(),
        prop_oneof![Just(Budget::Low), Just(Budget::Medium), Just(Budget::High)],
        prop_oneof![
            Just(Timeline::Immediate),
            Just(Timeline::Short),
            Just(Timeline::Medium),
            Just(Timeline::Long)
        ],
        prop_oneof![
            Just(SkillLevel::Junior),
            Just(SkillLevel::Intermediate),
            Just(SkillLevel::Senior)
        ],
    )
        .prop_map(|(priorities, budget, timeline, skill)| {
            UserConstraints::default()
                .with_priorities(priorities)
                .with_budget(budget)
                .with_timeline(timeline)
                .with_skill_level(skill)
        })
}

fn known_options() -> impl Strategy<Value = Vec<TechnicalOption>> {
    prop::sample::subsequence(
        vec![
            ("AWS", Category::Cloud),
            ("Azure", Category::Cloud),
            ("DigitalOcean", Category::Cloud),
            ("PostgreSQL", Category::Database),
            ("MongoDB", Category::Database),
            ("Express", Category::Backend),
        ],
        2..=3,
    )
    .prop_map(|picked| {
        picked
            .into_iter()
            .map(|(name, category)| TechnicalOption::new(name, category))
            .collect()
    })
}

proptest! {
    #[test]
    fn normalized_weights_sum_to_one(priorities in priorities()) {
        let normalized = WeightingEngine::normalize(&priorities);
        prop_assert!((normalized.sum() - 1.0).abs() < 1e-9);

        let emphasized = WeightingEngine::emphasize(&priorities);
        prop_assert!((emphasized.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn normalization_is_idempotent(priorities in priorities()) {
        let once = WeightingEngine::normalize(&priorities);
        let twice = once.normalized();
        for key in PriorityKey::ALL {
            prop_assert!((once.get(key) - twice.get(key)).abs() < 1e-12);
        }
    }

    #[test]
    fn weighted_score_stays_in_bounds(scores in criterion_scores(), priorities in priorities()) {
        let weighted = WeightingEngine::weighted_score(&scores, &priorities);
        prop_assert!(weighted > -1e-9 && weighted < 100.0 + 1e-9, "weighted score {}", weighted);
    }

    #[test]
    fn raising_a_criterion_never_lowers_the_total(
        scores in criterion_scores(),
        priorities in priorities(),
        index in 0usize..6,
        bump in 0.0f64..=50.0,
    ) {
        let criterion = Criterion::ALL[index];
        let mut raised = scores.clone();
        raised.adjust(criterion, bump);

        let before = WeightingEngine::weighted_score(&scores, &priorities);
        let after = WeightingEngine::weighted_score(&raised, &priorities);
        prop_assert!(after + 1e-9 >= before);
    }

    #[test]
    fn higher_priority_gets_at_least_as_much_weight(priorities in priorities(), index in 0usize..5) {
        let key = PriorityKey::ALL[index];
        let raised = priorities.with(key, (priorities.get(key) + 1).min(5));

        let before = WeightingEngine::emphasize(&priorities).get(key);
        let after = WeightingEngine::emphasize(&raised).get(key);
        prop_assert!(after + 1e-12 >= before);
    }

    #[test]
    fn raising_a_priority_never_hurts_the_option_that_leads_on_it(
        priorities in priorities(),
        index in 0usize..5,
        base in criterion_scores(),
        lead in 1.0f64..=40.0,
    ) {
        let key = PriorityKey::ALL[index];
        let criterion = criterion_for(key);

        // Two options identical except on the criterion behind `key`.
        let trailing = base.clone();
        let mut leading = base;
        leading.set(criterion, (trailing.get(criterion) + lead).min(100.0));
        let raised = priorities.with(key, (priorities.get(key) + 1).min(5));

        let margin = |p: &Priorities| {
            WeightingEngine::weighted_score(&leading, p) - WeightingEngine::weighted_score(&trailing, p)
        };
        prop_assert!(margin(&priorities) >= -1e-9);
        prop_assert!(margin(&raised) + 1e-9 >= margin(&priorities));
    }

    #[test]
    fn evaluation_is_bounded_and_totally_ranked(
        options in known_options(),
        constraints in constraints(),
    ) {
        let registry = KnowledgeRegistry::standard();
        let evaluator = Evaluator::new(&registry);
        let result = evaluator.evaluate(&options, &constraints, vec![]);

        prop_assert_eq!(result.scores.len(), options.len());
        prop_assert_eq!(result.rankings.len(), options.len());
        for score in &result.scores {
            prop_assert_eq!(score.criteria_scores.len(), 6);
            for (_, value) in score.criteria_scores.iter() {
                prop_assert!((0.0..=100.0).contains(&value));
            }
        }
        for (index, ranked) in result.rankings.iter().enumerate() {
            prop_assert_eq!(ranked.rank, index + 1);
        }
        for pair in result.rankings.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn evaluation_is_deterministic(options in known_options(), constraints in constraints()) {
        let registry = KnowledgeRegistry::standard();
        let evaluator = Evaluator::new(&registry);
        let first = evaluator.evaluate(&options, &constraints, vec![]);
        let second = evaluator.evaluate(&options, &constraints, vec![]);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn input_order_does_not_change_an_options_score(options in known_options(), constraints in constraints()) {
        let registry = KnowledgeRegistry::standard();
        let evaluator = Evaluator::new(&registry);
        let forward = evaluator.evaluate(&options, &constraints, vec![]);

        let mut reversed_options = options.clone();
        reversed_options.reverse();
        let reversed = evaluator.evaluate(&reversed_options, &constraints, vec![]);

        for score in &forward.scores {
            let other = reversed.score_for(&score.option.name).unwrap();
            prop_assert_eq!(&score.criteria_scores, &other.criteria_scores);
            prop_assert_eq!(score.weighted_score, other.weighted_score);
        }
    }

    #[test]
    fn confidence_stays_in_range(options in known_options(), constraints in constraints()) {
        let registry = KnowledgeRegistry::standard();
        let evaluator = Evaluator::new(&registry);
        let result = evaluator.evaluate(&options, &constraints, vec![]);
        let ranked = result.scores_by_rank();

        let confidence = ConfidenceEstimator::estimate(&ranked, &constraints.priorities);
        prop_assert!((0.1..=1.0).contains(&confidence.value));
    }

    #[test]
    fn ranking_never_loses_options(weights in prop::collection::vec(0.0f64..=100.0, 0..6)) {
        let scores: Vec<_> = weights
            .iter()
            .enumerate()
            .map(|(index, weighted)| OptionScore {
                option: TechnicalOption::new(format!("option-{}", index), Category::Unknown),
                criteria_scores: CriterionScores::uniform(*weighted),
                weighted_score: *weighted,
                normalized_score: weighted.round() as u8,
            })
            .collect();

        let rankings = Ranker::rank(&scores);
        prop_assert_eq!(rankings.len(), scores.len());
        for pair in rankings.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}

#[test]
fn equal_priorities_with_identical_options_tie() {
    let registry = KnowledgeRegistry::standard();
    let evaluator = Evaluator::new(&registry);
    let options = vec![
        TechnicalOption::new("First", Category::Unknown),
        TechnicalOption::new("Second", Category::Unknown),
    ];
    let result = evaluator.evaluate(&options, &UserConstraints::default(), vec![]);

    assert_eq!(result.scores[0].weighted_score, result.scores[1].weighted_score);
    assert_eq!(result.rankings[0].option.name, "First");
}
