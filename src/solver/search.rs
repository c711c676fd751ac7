use log::{debug, info, trace};

use crate::expression::Operator;
use crate::shapes::{Assigner, enumerate_shapes};
use crate::solver::constants::MAX_OPERATORS;
use crate::solver::errors::SolverError;
use crate::solver::mode::SolveMode;
use crate::solver::report::{SearchReport, Solution};
use crate::utils::{
    ChosenNumbers, Target, permutations_with_repetition, permutations_without_repetition,
};

/// Exhaustive search over every tree shape, number ordering and operator choice
pub struct NumbersSolver {}

impl NumbersSolver {
    pub fn new() -> Self {
        Self {}
    }

    /// Run the search without observing solutions as they are found
    ///
    /// # Errors
    ///
    /// See [`NumbersSolver::solve_with`].
    pub fn solve(
        &self,
        target: Target,
        numbers: &ChosenNumbers,
        mode: SolveMode,
    ) -> Result<SearchReport, SolverError> {
        self.solve_with(target, numbers, mode, |_| {})
    }

    /// Run the search, calling `on_solution` for each solution as soon as it is accepted.
    ///
    /// Trees grow from one operator up to five. For each size every number
    /// ordering is tried with every operator sequence in every shape; only the
    /// leading `size + 1` numbers of an ordering are placed, so shorter
    /// prefixes are revisited and counted again. Nothing is pruned.
    ///
    /// # Errors
    ///
    /// Returns an error only if a shape cannot be filled from the generated
    /// sequences, which validated input rules out.
    pub fn solve_with<F>(
        &self,
        target: Target,
        numbers: &ChosenNumbers,
        mode: SolveMode,
        mut on_solution: F,
    ) -> Result<SearchReport, SolverError>
    where
        F: FnMut(&Solution),
    {
        let target = target.value();
        info!(
            "Searching for {} from {:?} in {} mode",
            target,
            numbers.as_slice(),
            mode
        );

        let number_orderings = permutations_without_repetition(numbers.as_slice());
        let mut solutions: Vec<Solution> = Vec::new();
        let mut attempts: u64 = 0;

        for size in 1..=MAX_OPERATORS {
            let operator_sequences = permutations_with_repetition(&Operator::ALL, size);
            let mut assigners: Vec<Assigner> =
                enumerate_shapes(size).iter().map(Assigner::new).collect();

            debug!(
                "Trying {} shapes with {} operators ({} attempts so far)",
                assigners.len(),
                size,
                attempts
            );

            for ordering in &number_orderings {
                for operators in &operator_sequences {
                    for assigner in &mut assigners {
                        let value = assigner.assign(ordering, operators)?.evaluate();

                        if value == target {
                            trace!("Exact match: {}", assigner.tree());

                            if mode == SolveMode::First {
                                let solution = Solution::new(assigner.tree().clone());
                                info!("Solved after {} attempts: {}", attempts, solution.expression);
                                on_solution(&solution);
                                return Ok(SearchReport {
                                    mode,
                                    target,
                                    attempts,
                                    solutions: vec![solution],
                                });
                            }

                            let candidate = assigner.tree();
                            let is_new = !solutions
                                .iter()
                                .any(|accepted| accepted.expression.is_equivalent_to(candidate));
                            if is_new {
                                let solution = Solution::new(candidate.clone());
                                debug!(
                                    "Accepted solution #{}: {} [intuition score: {}]",
                                    solutions.len() + 1,
                                    solution.expression,
                                    solution.intuition_score
                                );
                                on_solution(&solution);
                                solutions.push(solution);
                            }
                        }

                        attempts += 1;
                        assigner.reset();
                    }
                }
            }
        }

        info!(
            "Search exhausted after {} attempts with {} distinct solutions",
            attempts,
            solutions.len()
        );

        Ok(SearchReport {
            mode,
            target,
            attempts,
            solutions,
        })
    }
}

impl Default for NumbersSolver {
    fn default() -> Self {
        Self::new()
    }
}
