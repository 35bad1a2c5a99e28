// Integration tests for round building, scoring, and the recency bias

use rand::rngs::StdRng;
use rand::SeedableRng;

use trigdrill::content::IdentityTable;
use trigdrill::game::{Game, Round, Tuning, Verdict};

fn three_item_table() -> IdentityTable {
    IdentityTable::new(vec![("A", "1"), ("B", "2"), ("C", "3")]).expect("table must validate")
}

fn round(prompt: &str, answer: &str, options: &[&str]) -> Round {
    Round {
        prompt: prompt.to_owned(),
        answer: answer.to_owned(),
        options: options.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_options_shape_holds_over_many_rounds() {
    let game = Game::new(
        IdentityTable::builtin().expect("built-in table must validate"),
        Tuning::default(),
    );
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let round = game.next_round(&mut rng);

        assert_eq!(round.options.len(), 3);
        assert_eq!(
            round
                .options
                .iter()
                .filter(|option| **option == round.answer)
                .count(),
            1,
            "correct answer must appear exactly once in {:?}",
            round.options
        );

        let distractors: Vec<&String> = round
            .options
            .iter()
            .filter(|option| **option != round.answer)
            .collect();
        assert_eq!(distractors.len(), 2);
        assert_ne!(distractors[0], distractors[1], "distractors must be distinct");
        for distractor in distractors {
            assert!(
                game.table().answer_pool().contains(distractor),
                "distractor {:?} not in the answer pool",
                distractor
            );
        }

        assert_eq!(
            game.table().answer_for(&round.prompt),
            Some(round.answer.as_str())
        );
    }
}

#[test]
fn test_correct_answer_scores_fixed_increment() {
    let mut game = Game::new(three_item_table(), Tuning::default());
    let round = round("A", "1", &["2", "1", "3"]);

    assert_eq!(game.judge(&round, 1), Verdict::Correct);
    assert_eq!(game.score(), 10);
    assert!(game.recency().is_empty());
}

#[test]
fn test_wrong_answer_leaves_score_and_records_miss() {
    let mut game = Game::new(three_item_table(), Tuning::default());
    let round = round("A", "1", &["2", "1", "3"]);

    assert_eq!(game.judge(&round, 0), Verdict::Wrong);
    assert_eq!(game.score(), 0);
    assert!(game.recency().contains("A"));
}

#[test]
fn test_three_correct_answers_score_thirty() {
    let mut game = Game::new(three_item_table(), Tuning::default());
    let round = round("A", "1", &["1", "2", "3"]);

    for _ in 0..3 {
        assert_eq!(game.judge(&round, 0), Verdict::Correct);
    }
    assert_eq!(game.score(), 30);
    assert!(game.recency().is_empty());
}

#[test]
fn test_score_is_monotonic() {
    let mut game = Game::new(
        IdentityTable::builtin().expect("built-in table must validate"),
        Tuning::default(),
    );
    let mut rng = StdRng::seed_from_u64(21);
    let mut previous = 0;

    for turn in 0..200 {
        let round = game.next_round(&mut rng);
        // Alternate deliberately right and deliberately wrong answers.
        let choice = if turn % 2 == 0 {
            round
                .options
                .iter()
                .position(|option| *option == round.answer)
                .expect("options always contain the answer")
        } else {
            round
                .options
                .iter()
                .position(|option| *option != round.answer)
                .expect("options always contain a distractor")
        };

        match game.judge(&round, choice) {
            Verdict::Correct => assert_eq!(game.score(), previous + 10),
            Verdict::Wrong => assert_eq!(game.score(), previous),
        }
        previous = game.score();
        assert!(game.recency().len() <= game.tuning().recency_cap);
    }
}

#[test]
fn test_missed_prompt_is_cleared_on_later_correct_answer() {
    let mut game = Game::new(three_item_table(), Tuning::default());

    game.judge(&round("A", "1", &["2", "1", "3"]), 0);
    assert!(game.recency().contains("A"));

    // The next selection may well arrive via the recency path; removal on a
    // correct answer must hold either way.
    let mut rng = StdRng::seed_from_u64(3);
    let reselected = (0..100)
        .map(|_| game.next_round(&mut rng))
        .find(|round| round.prompt == "A")
        .expect("a missed prompt should be reselected eventually");

    let choice = reselected
        .options
        .iter()
        .position(|option| *option == reselected.answer)
        .expect("options always contain the answer");
    assert_eq!(game.judge(&reselected, choice), Verdict::Correct);
    assert!(!game.recency().contains("A"));
    assert!(game.recency().is_empty());
}

#[test]
fn test_missing_same_prompt_repeatedly_keeps_one_entry() {
    let mut game = Game::new(three_item_table(), Tuning::default());
    let round = round("A", "1", &["2", "1", "3"]);

    for _ in 0..5 {
        game.judge(&round, 0);
    }
    assert_eq!(game.recency().entries(), ["A"]);
}

#[test]
fn test_sixth_distinct_miss_evicts_the_oldest() {
    let pairs: Vec<(String, String)> = (0..7)
        .map(|i| (format!("p{}", i), format!("a{}", i)))
        .collect();
    let table = IdentityTable::new(pairs).expect("table must validate");
    let mut game = Game::new(table, Tuning::default());

    for i in 0..6 {
        let prompt = format!("p{}", i);
        let answer = format!("a{}", i);
        // Answer with a distractor on purpose.
        let r = round(&prompt, &answer, &["not-it", &answer, "also-not"]);
        game.judge(&r, 0);
        assert!(game.recency().len() <= 5);
    }

    assert_eq!(game.recency().len(), 5);
    assert!(!game.recency().contains("p0"), "oldest miss must be evicted");
    assert_eq!(
        game.recency().entries(),
        ["p1", "p2", "p3", "p4", "p5"]
    );
}

#[test]
fn test_selection_with_empty_recency_draws_from_table() {
    let game = Game::new(three_item_table(), Tuning::default());
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let round = game.next_round(&mut rng);
        assert!(
            ["A", "B", "C"].contains(&round.prompt.as_str()),
            "unknown prompt {:?}",
            round.prompt
        );
    }
}

#[test]
fn test_recency_bias_reselects_missed_prompts() {
    let mut game = Game::new(
        IdentityTable::builtin().expect("built-in table must validate"),
        Tuning::default(),
    );
    let mut rng = StdRng::seed_from_u64(5);

    // Miss one specific prompt, then count how often it comes back across
    // many selections. With an 18-entry table, unbiased selection would
    // reselect it ~5% of the time; the 50% bias pushes it far above that.
    let missed = game.next_round(&mut rng);
    let wrong = missed
        .options
        .iter()
        .position(|option| *option != missed.answer)
        .expect("options always contain a distractor");
    game.judge(&missed, wrong);

    let reselections = (0..1000)
        .map(|_| game.next_round(&mut rng))
        .filter(|round| round.prompt == missed.prompt)
        .count();
    assert!(
        reselections > 300,
        "expected a strong bias toward the missed prompt, got {}/1000",
        reselections
    );
}
