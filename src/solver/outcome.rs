use log::info;

use crate::expression::Expression;

/// Best non-exact candidate seen by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closest {
    pub expression: Expression,
    pub value: i64,
    /// Absolute difference between `value` and the target
    pub distance: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    ExactMatch(Expression),
    Closest(Closest),
}

impl SearchOutcome {
    pub fn is_exact(&self) -> bool {
        matches!(self, SearchOutcome::ExactMatch(_))
    }

    pub fn expression(&self) -> &Expression {
        match self {
            SearchOutcome::ExactMatch(expr) => expr,
            SearchOutcome::Closest(closest) => &closest.expression,
        }
    }
}

/// Result of a search together with how much work it took
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// Number of expression trees evaluated before the search stopped
    pub evaluated: u64,
}

/// Passed to the progress observer whenever the closest-so-far improves
#[derive(Debug, Clone, Copy)]
pub struct Improvement<'a> {
    pub expression: &'a Expression,
    pub value: i64,
    pub distance: u64,
}

/// Tracks the closest candidate; only a strictly smaller distance replaces it.
#[derive(Debug)]
pub(crate) struct ClosestTracker {
    target: i64,
    best: Option<Closest>,
}

impl ClosestTracker {
    pub(crate) fn new(target: i64) -> Self {
        Self { target, best: None }
    }

    pub(crate) fn distance_to(&self, value: i64) -> u64 {
        value.abs_diff(self.target)
    }

    pub(crate) fn offer<F>(&mut self, expression: Expression, value: i64, observer: &F) -> bool
    where
        F: Fn(&Improvement<'_>) + Sync,
    {
        let distance = self.distance_to(value);
        if self
            .best
            .as_ref()
            .is_some_and(|best| distance >= best.distance)
        {
            return false;
        }

        info!("Closest so far: {} = {} (off by {})", expression, value, distance);
        observer(&Improvement {
            expression: &expression,
            value,
            distance,
        });
        self.best = Some(Closest {
            expression,
            value,
            distance,
        });
        true
    }

    pub(crate) fn into_best(self) -> Option<Closest> {
        self.best
    }
}
