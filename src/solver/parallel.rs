use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use log::debug;
use rayon::prelude::*;

use crate::iterator::ExpressionIterator;

use super::errors::SolverError;
use super::outcome::{ClosestTracker, Improvement, SearchOutcome, SearchReport};

/// Search orderings on the rayon pool.
///
/// Whichever worker first sees an exact match raises `found`; every worker
/// checks it before pulling the next tree. The closest candidate lives behind
/// a mutex, with `best_distance` mirroring it so most candidates are rejected
/// without taking the lock.
pub(crate) fn search<F>(
    target: i64,
    orderings: &[Vec<i64>],
    observer: &F,
) -> Result<SearchReport, SolverError>
where
    F: Fn(&Improvement<'_>) + Sync,
{
    let found = AtomicBool::new(false);
    let best_distance = AtomicU64::new(u64::MAX);
    let evaluated = AtomicU64::new(0);
    let tracker = Mutex::new(ClosestTracker::new(target));

    let exact = orderings.par_iter().find_map_any(|ordering| {
        let mut trees = ExpressionIterator::new(ordering);
        let mut local = 0u64;

        let result = loop {
            if found.load(Ordering::Relaxed) {
                break None;
            }
            let Some((expr, value)) = trees.next_evaluated() else {
                break None;
            };
            local += 1;

            if value == target {
                found.store(true, Ordering::Relaxed);
                break Some(expr);
            }

            let distance = value.abs_diff(target);
            if distance <= best_distance.load(Ordering::Relaxed) {
                let mut guard = tracker.lock().unwrap_or_else(PoisonError::into_inner);
                if guard.offer(expr, value, observer) {
                    best_distance.store(distance, Ordering::Relaxed);
                }
            }
        };

        evaluated.fetch_add(local, Ordering::Relaxed);
        result
    });

    let evaluated = evaluated.into_inner();
    debug!("Parallel search evaluated {} expressions", evaluated);

    let outcome = match exact {
        Some(expr) => SearchOutcome::ExactMatch(expr),
        None => {
            let closest = tracker
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner)
                .into_best()
                .ok_or(SolverError::NoUsableExpression)?;
            SearchOutcome::Closest(closest)
        }
    };
    Ok(SearchReport { outcome, evaluated })
}
