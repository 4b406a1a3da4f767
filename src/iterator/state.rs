use log::trace;

use crate::expression::{Expression, Operator};

use super::core::ExpressionIterator;

/// An expression paired with its already-computed value
pub type Evaluated = (Expression, i64);

/// Progress through a single split point: `numbers[..split]` on the left,
/// `numbers[split..]` on the right.
#[derive(Debug, Clone)]
pub(crate) struct SplitState<'a> {
    pub(crate) split: usize,
    right_numbers: &'a [i64],
    lefts: ExpressionIterator<'a>,
    /// Built once a left tree exists, then rebuilt for each following left tree
    rights: Option<ExpressionIterator<'a>>,
    current_left: Option<Evaluated>,
    current_right: Option<Evaluated>,
    op_idx: usize,
}

impl<'a> SplitState<'a> {
    pub(crate) fn new(numbers: &'a [i64], split: usize) -> Self {
        let (left_numbers, right_numbers) = numbers.split_at(split);
        Self {
            split,
            right_numbers,
            lefts: ExpressionIterator::new(left_numbers),
            rights: None,
            current_left: None,
            current_right: None,
            op_idx: 0,
        }
    }

    /// Produce the next usable tree for this split, or `None` once every
    /// left/right/operator combination has been tried.
    pub(crate) fn advance(&mut self) -> Option<Evaluated> {
        loop {
            if let (Some((left, lv)), Some((right, rv))) = (&self.current_left, &self.current_right)
            {
                while let Some(&op) = Operator::ALL.get(self.op_idx) {
                    self.op_idx += 1;
                    match op.apply(*lv, *rv) {
                        Ok(value) if value >= 0 => {
                            // Each accepted operator deep-copies both subtrees
                            let expr = Expression::binary(op, left.clone(), right.clone());
                            return Some((expr, value));
                        }
                        Ok(value) => {
                            trace!("Rejected {} {} {} = {}", lv, op.symbol(), rv, value)
                        }
                        Err(e) => trace!("Rejected {} {} {}: {}", lv, op.symbol(), rv, e),
                    }
                }
            }

            self.op_idx = 0;
            if self.current_left.is_some() {
                self.current_right = self
                    .rights
                    .as_mut()
                    .and_then(ExpressionIterator::next_evaluated);
                if self.current_right.is_some() {
                    continue;
                }
            }

            // Right side exhausted: move to the next left tree and re-drive the right side
            self.current_left = Some(self.lefts.next_evaluated()?);
            self.rights = Some(ExpressionIterator::new(self.right_numbers));
            self.current_right = None;
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum GenerationState<'a> {
    Leaf(Option<i64>),
    Split(Box<SplitState<'a>>),
    Exhausted,
}
