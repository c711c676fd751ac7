use pretty_assertions::assert_eq;

use crate::solver::{NumbersSolver, SearchReport, SolveMode, Solution};
use crate::utils::{ChosenNumbers, Target};

fn run(target: i64, numbers: [i64; 6], mode: SolveMode) -> Option<SearchReport> {
    let target = Target::new(target).ok()?;
    let numbers = ChosenNumbers::new(numbers.to_vec()).ok()?;
    NumbersSolver::new().solve(target, &numbers, mode).ok()
}

fn rendered(report: &SearchReport) -> Vec<String> {
    report
        .solutions
        .iter()
        .map(|solution| solution.expression.to_string())
        .collect()
}

const EXHAUSTIVE_ATTEMPTS: u64 = 33_802_560;

#[test]
fn test_first_mode_reference_solution() {
    let report = run(500, [10, 5, 1, 2, 3, 4], SolveMode::First);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_eq!(report.attempts, 270_685);
        assert_eq!(report.solution_count(), 1);
        let first = report.first().map(|s| s.expression.to_string());
        assert_eq!(first.as_deref(), Some("(10 × (5 × ((1 + 4) × 2)))"));
        assert_eq!(report.first().map(|s| s.expression.evaluate()), Some(500));
    }
}

#[test]
fn test_first_mode_with_duplicate_numbers() {
    let report = run(593, [50, 100, 3, 1, 1, 8], SolveMode::First);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_eq!(report.attempts, 2_860_135);
        let first = report.first().map(|s| s.expression.to_string());
        assert_eq!(
            first.as_deref(),
            Some("(((50 + 100) × (3 + 1)) + (1 - 8))")
        );
    }
}

#[test]
fn test_first_mode_is_deterministic() {
    let a = run(500, [10, 5, 1, 2, 3, 4], SolveMode::First);
    let b = run(500, [10, 5, 1, 2, 3, 4], SolveMode::First);
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn test_target_zero_matches_invalid_division() {
    // 3 ÷ 7 is inexact and evaluates to the zero sentinel on the second attempt
    let report = run(0, [3, 7, 6, 2, 1, 7], SolveMode::First);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_eq!(report.attempts, 1);
        let first = report.first().map(|s| s.expression.to_string());
        assert_eq!(first.as_deref(), Some("(3 ÷ 7)"));
    }
}

#[test]
fn test_single_operator_solution_found_early() {
    // 10 × 5 is the very first attempt
    let report = run(50, [10, 5, 1, 2, 3, 4], SolveMode::First);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_eq!(report.attempts, 0);
        let first = report.first().map(|s| s.expression.to_string());
        assert_eq!(first.as_deref(), Some("(10 × 5)"));
    }
}

#[test]
fn test_no_solution_exhausts_every_combination() {
    let report = run(824, [3, 7, 6, 2, 1, 7], SolveMode::All);
    assert!(report.is_some());
    if let Some(report) = report {
        assert!(!report.is_solved());
        assert_eq!(report.solution_count(), 0);
        assert_eq!(report.attempts, EXHAUSTIVE_ATTEMPTS);
        assert!(report.most_intuitive().is_none());
    }
}

#[test]
fn test_first_mode_without_solution() {
    let report = run(824, [3, 7, 6, 2, 1, 7], SolveMode::First);
    assert!(report.is_some());
    if let Some(report) = report {
        assert!(report.first().is_none());
        assert_eq!(report.attempts, EXHAUSTIVE_ATTEMPTS);
    }
}

#[test]
fn test_all_mode_single_solution() {
    let report = run(507, [25, 100, 6, 10, 4, 5], SolveMode::All);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_eq!(report.attempts, EXHAUSTIVE_ATTEMPTS);
        assert_eq!(
            rendered(&report),
            vec!["(25 + (((100 × (6 × 4)) + 10) ÷ 5))"]
        );
    }
}

#[test]
fn test_all_mode_distinct_solutions_in_discovery_order() {
    let report = run(712, [25, 50, 3, 1, 6, 7], SolveMode::All);
    assert!(report.is_some());
    if let Some(report) = report {
        assert_eq!(report.attempts, EXHAUSTIVE_ATTEMPTS);
        assert_eq!(
            rendered(&report),
            vec![
                "(((50 × 7) + 6) × (3 - 1))",
                "((((25 × (50 + 7)) - 1) × 3) ÷ 6)",
                "((25 × 3) + ((50 - 1) × (6 + 7)))",
                "((25 × 3) - ((1 - 50) × (6 + 7)))",
            ]
        );
        for (i, a) in report.solutions.iter().enumerate() {
            assert_eq!(a.expression.evaluate(), 712);
            for b in report.solutions.iter().skip(i + 1) {
                assert!(!a.expression.is_equivalent_to(&b.expression));
            }
        }
    }
}

#[test]
fn test_most_intuitive_mode() {
    let mut announced: Vec<Solution> = Vec::new();
    let target = Target::new(719);
    let numbers = ChosenNumbers::new(vec![50, 100, 2, 7, 4, 3]);
    assert!(target.is_ok() && numbers.is_ok());

    if let (Ok(target), Ok(numbers)) = (target, numbers) {
        let report = NumbersSolver::new().solve_with(
            target,
            &numbers,
            SolveMode::MostIntuitive,
            |solution| announced.push(solution.clone()),
        );
        assert!(report.is_ok());

        if let Ok(report) = report {
            assert_eq!(report.attempts, EXHAUSTIVE_ATTEMPTS);
            assert_eq!(announced, report.solutions);
            assert_eq!(report.solution_count(), 22);

            let leading: Vec<(String, u32)> = report
                .solutions
                .iter()
                .take(5)
                .map(|s| (s.expression.to_string(), s.intuition_score))
                .collect();
            assert_eq!(
                leading,
                vec![
                    ("(((100 + 3) × 7) - 2)".to_string(), 120),
                    ("(50 + (((100 - 4) × 7) - 3))".to_string(), 160),
                    ("(50 - ((7 × (4 - 100)) + 3))".to_string(), 160),
                    ("(((100 + 3) × 7) + (2 - 4))".to_string(), 150),
                    ("(((100 + 3) × 7) - (4 ÷ 2))".to_string(), 180),
                ]
            );

            let best = report.most_intuitive();
            assert_eq!(
                best.map(|s| s.expression.to_string()).as_deref(),
                Some("(((100 + 3) × 7) - 2)")
            );
            assert_eq!(best.map(|s| s.intuition_score), Some(120));

            let scores: Vec<u32> = report.ranked().iter().map(|s| s.intuition_score).collect();
            assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }
}

#[test]
fn test_ranked_ties_keep_discovery_order() {
    let report = run(719, [50, 100, 2, 7, 4, 3], SolveMode::MostIntuitive);
    assert!(report.is_some());
    if let Some(report) = report {
        let ranked = report.ranked();
        let tied: Vec<String> = ranked
            .iter()
            .filter(|s| s.intuition_score == 160)
            .map(|s| s.expression.to_string())
            .collect();
        assert_eq!(
            tied,
            vec![
                "(50 + (((100 - 4) × 7) - 3))",
                "(50 - ((7 × (4 - 100)) + 3))",
            ]
        );
    }
}

#[test]
fn test_solve_mode_parsing() {
    assert_eq!("f".parse::<SolveMode>(), Ok(SolveMode::First));
    assert_eq!("a".parse::<SolveMode>(), Ok(SolveMode::All));
    assert_eq!("i".parse::<SolveMode>(), Ok(SolveMode::MostIntuitive));
    assert_eq!("intuitive".parse::<SolveMode>(), Ok(SolveMode::MostIntuitive));
    assert_eq!(" All ".parse::<SolveMode>(), Ok(SolveMode::All));
    assert!("y".parse::<SolveMode>().is_err());
    assert!(SolveMode::All.is_exhaustive());
    assert!(!SolveMode::First.is_exhaustive());
}
