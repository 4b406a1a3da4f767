use std::collections::HashMap;

use log::debug;

use crate::expression::Expression;

/// Check that `expr` equals `target` and uses each of `numbers` at most once
pub fn validate_solution(expr: &Expression, target: i64, numbers: &[i64]) -> bool {
    if expr.evaluate() != Ok(target) {
        debug!("{} does not evaluate to {}", expr, target);
        return false;
    }

    let mut available: HashMap<i64, usize> = HashMap::new();
    for &n in numbers {
        *available.entry(n).or_default() += 1;
    }
    for leaf in expr.leaves() {
        match available.get_mut(&leaf) {
            Some(count) if *count > 0 => *count -= 1,
            _ => {
                debug!("{} uses {} more often than {:?} allows", expr, leaf, numbers);
                return false;
            }
        }
    }
    true
}
