use log::debug;

use crate::expression::Expression;

use super::state::{Evaluated, GenerationState, SplitState};

/// Lazily yields every expression tree whose leaves, read left to right,
/// are exactly `numbers`.
///
/// Trees come out split point first (ascending), then left subtree, then
/// right subtree, then operator in [`Operator::ALL`](crate::Operator::ALL)
/// order. Operator nodes whose value is negative or whose division fails are
/// skipped. Memory use is bounded by the length of `numbers`, not by the
/// number of trees.
#[derive(Debug, Clone)]
pub struct ExpressionIterator<'a> {
    numbers: &'a [i64],
    state: GenerationState<'a>,
}

impl<'a> ExpressionIterator<'a> {
    pub fn new(numbers: &'a [i64]) -> Self {
        let state = match numbers {
            [] => GenerationState::Exhausted,
            [n] => GenerationState::Leaf(Some(*n)),
            _ => GenerationState::Split(Box::new(SplitState::new(numbers, 1))),
        };
        Self { numbers, state }
    }

    /// Like [`Iterator::next`], but also hands back the value computed while
    /// filtering so callers need not evaluate the tree again.
    pub fn next_evaluated(&mut self) -> Option<Evaluated> {
        loop {
            match &mut self.state {
                GenerationState::Leaf(slot) => {
                    let n = slot.take();
                    if n.is_none() {
                        self.state = GenerationState::Exhausted;
                    }
                    return n.map(|n| (Expression::Number(n), n));
                }
                GenerationState::Split(split_state) => {
                    if let Some(item) = split_state.advance() {
                        return Some(item);
                    }
                    let next_split = split_state.split + 1;
                    if next_split < self.numbers.len() {
                        **split_state = SplitState::new(self.numbers, next_split);
                    } else {
                        debug!("Exhausted trees over {:?}", self.numbers);
                        self.state = GenerationState::Exhausted;
                    }
                }
                GenerationState::Exhausted => return None,
            }
        }
    }
}

impl Iterator for ExpressionIterator<'_> {
    type Item = Expression;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_evaluated().map(|(expr, _)| expr)
    }
}
