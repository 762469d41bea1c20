//! End-to-end properties of the solver over real word lists

use wordle_eliminator::core::{Hint, Word};
use wordle_eliminator::solver::{
    ConstraintModel, GameVariant, SimilarityStrategy, SolveError, Solver, SolverConfig, Strategy,
    eliminate, is_consistent,
};
use wordle_eliminator::wordlists::{WORDS, loader::words_from_slice};

fn embedded() -> Vec<Word> {
    words_from_slice(WORDS)
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn solves_check_within_six() {
    let words = words_from_slice(&["salet", "check", "chick", "chuck", "thick", "crane"]);
    let solver = Solver::new(SimilarityStrategy, &words);

    let report = solver.solve_against(&word("check")).unwrap();

    assert!(report.is_solved());
    assert!(report.attempts() <= 6);
    assert_eq!(report.final_guess().unwrap().text(), "check");
    assert_eq!(report.rounds[0].guess.text(), "salet");
}

#[test]
fn embedded_list_never_runs_dry() {
    let words = embedded();
    let config = SolverConfig::default().with_variant(GameVariant::FreeForm);
    let solver = Solver::new(SimilarityStrategy, &words).with_config(config);

    let step = words.len() / 40;
    let mut total = 0;
    let mut games = 0_u32;
    for target in words.iter().step_by(step.max(1)) {
        let report = match solver.solve_against(target) {
            Ok(report) => report,
            Err(SolveError::NoCandidates { round, .. }) => {
                panic!("'{target}' eliminated by round {}", round + 1)
            }
            Err(e) => panic!("unexpected error for '{target}': {e}"),
        };
        assert!(report.is_solved());
        assert_eq!(report.final_guess(), Some(target));
        total += report.attempts();
        games += 1;
    }

    let mean = total as f64 / f64::from(games);
    assert!(mean <= 6.0, "mean attempts {mean} above six");
}

#[test]
fn heuristic_selection_is_deterministic() {
    let words = embedded();
    let history = vec![word("salet"), word("crane")];

    let first = SimilarityStrategy.select_guess(&words, &history).cloned();
    for _ in 0..5 {
        assert_eq!(SimilarityStrategy.select_guess(&words, &history).cloned(), first);
    }

    let solver = Solver::new(SimilarityStrategy, &words);
    let a = solver.solve_against(&word("robot")).unwrap();
    let b = solver.solve_against(&word("robot")).unwrap();
    assert_eq!(a.rounds, b.rounds);
}

#[test]
fn elimination_is_sound_and_shrinks() {
    let words = embedded();
    let solution = word("floor");
    let mut model = ConstraintModel::new();
    let mut candidates = words.clone();

    for guess in ["salet", "robot", "crane"] {
        let guess = word(guess);
        let hint = Hint::compute(&guess, &solution);
        model.update(&guess, &hint);

        let next = eliminate(&candidates, &guess, &model);
        assert!(next.len() <= candidates.len());
        assert!(next.contains(&solution));
        assert!(!next.contains(&guess));
        assert!(next.iter().all(|w| is_consistent(w, &model)));
        assert!(next.iter().all(|w| candidates.contains(w)));
        candidates = next;
    }
}
