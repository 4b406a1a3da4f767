use std::collections::HashSet;

use log::{debug, info};

use crate::iterator::ExpressionIterator;
use crate::utils::{generate_permutations, validate_numbers};

use super::config::SolverConfig;
use super::errors::SolverError;
use super::outcome::{ClosestTracker, Improvement, SearchOutcome, SearchReport};
use super::parallel;

/// Main solver for the Countdown numbers game
pub struct CountdownSolver {
    config: SolverConfig,
}

impl CountdownSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search for an expression over `numbers` equal to `target`
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::UtilsError`] if `numbers` is empty, and
    /// [`SolverError::NoUsableExpression`] if every tree over the numbers is
    /// filtered out. The latter only happens with negative or near-`i64::MAX`
    /// inputs; for non-negative numbers some tree always survives, since
    /// addition never goes negative.
    pub fn search(&self, target: i64, numbers: &[i64]) -> Result<SearchReport, SolverError> {
        self.search_with_progress(target, numbers, |_| {})
    }

    /// Same as [`search`](Self::search), calling `observer` on every strict
    /// improvement of the closest-so-far candidate.
    ///
    /// Sequential searches are deterministic: permutations are visited in
    /// Johnson-Trotter order, trees in [`ExpressionIterator`] order, and the
    /// first exact match wins.
    ///
    /// # Errors
    ///
    /// See [`search`](Self::search).
    pub fn search_with_progress<F>(
        &self,
        target: i64,
        numbers: &[i64],
        observer: F,
    ) -> Result<SearchReport, SolverError>
    where
        F: Fn(&Improvement<'_>) + Sync,
    {
        validate_numbers(numbers)?;

        info!("Searching for {} using numbers {:?}", target, numbers);
        let orderings = self.orderings(numbers);

        let report = if self.config.parallel {
            parallel::search(target, &orderings, &observer)?
        } else {
            search_sequential(target, &orderings, &observer)?
        };

        match &report.outcome {
            SearchOutcome::ExactMatch(expr) => info!(
                "Found exact match after {} expressions: {}",
                report.evaluated, expr
            ),
            SearchOutcome::Closest(closest) => info!(
                "No exact match after {} expressions, closest is {} = {}",
                report.evaluated, closest.expression, closest.value
            ),
        }
        Ok(report)
    }

    /// Orderings whose trees will be searched: every permutation, or with
    /// `use_subsets` every distinct permutation prefix.
    fn orderings(&self, numbers: &[i64]) -> Vec<Vec<i64>> {
        let permutations = generate_permutations(numbers);
        if !self.config.use_subsets {
            debug!("Searching {} permutations", permutations.len());
            return permutations;
        }

        let mut seen = HashSet::new();
        let mut orderings = Vec::new();
        for perm in &permutations {
            for len in 1..=perm.len() {
                if let Some(prefix) = perm.get(..len)
                    && seen.insert(prefix.to_vec())
                {
                    orderings.push(prefix.to_vec());
                }
            }
        }
        debug!(
            "Searching {} distinct prefixes of {} permutations",
            orderings.len(),
            permutations.len()
        );
        orderings
    }
}

impl Default for CountdownSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

fn search_sequential<F>(
    target: i64,
    orderings: &[Vec<i64>],
    observer: &F,
) -> Result<SearchReport, SolverError>
where
    F: Fn(&Improvement<'_>) + Sync,
{
    let mut tracker = ClosestTracker::new(target);
    let mut evaluated = 0u64;

    for ordering in orderings {
        debug!("Searching trees over {:?}", ordering);
        let mut trees = ExpressionIterator::new(ordering);
        while let Some((expr, value)) = trees.next_evaluated() {
            evaluated += 1;
            if value == target {
                return Ok(SearchReport {
                    outcome: SearchOutcome::ExactMatch(expr),
                    evaluated,
                });
            }
            tracker.offer(expr, value, observer);
        }
    }

    let closest = tracker
        .into_best()
        .ok_or(SolverError::NoUsableExpression)?;
    Ok(SearchReport {
        outcome: SearchOutcome::Closest(closest),
        evaluated,
    })
}
