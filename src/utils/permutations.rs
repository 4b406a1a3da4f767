use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

impl Direction {
    fn flip(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Every ordering of the indices `0..n` in Steinhaus-Johnson-Trotter order.
///
/// Consecutive permutations differ by a single adjacent transposition. The
/// first permutation is the identity, and `n == 0` yields one empty permutation.
pub fn johnson_trotter(n: usize) -> Vec<Vec<usize>> {
    johnson_trotter_signed(n).0
}

/// [`johnson_trotter`] together with the sign of each permutation: `1` for
/// even, `-1` for odd. Signs alternate since each step is one transposition.
pub fn johnson_trotter_signed(n: usize) -> (Vec<Vec<usize>>, Vec<i8>) {
    let mut perm: Vec<usize> = (0..n).collect();
    let mut directions = vec![Direction::Left; n];
    let mut sign: i8 = 1;
    let mut result = vec![perm.clone()];
    let mut signs = vec![sign];

    loop {
        // Largest mobile element: one whose neighbour in its direction is smaller
        let mut mobile: Option<(usize, usize, usize)> = None;
        for (pos, &value) in perm.iter().enumerate() {
            let neighbour = match directions.get(value) {
                Some(Direction::Left) => pos.checked_sub(1),
                Some(Direction::Right) => Some(pos + 1).filter(|&p| p < n),
                None => None,
            };
            if let Some(to) = neighbour
                && perm.get(to).is_some_and(|&other| other < value)
                && mobile.is_none_or(|(best, _, _)| value > best)
            {
                mobile = Some((value, pos, to));
            }
        }

        let Some((value, from, to)) = mobile else {
            break;
        };

        perm.swap(from, to);
        for direction in directions.iter_mut().skip(value + 1) {
            *direction = direction.flip();
        }
        sign = -sign;
        result.push(perm.clone());
        signs.push(sign);
    }

    debug!("Generated {} index permutations of {}", result.len(), n);
    (result, signs)
}

/// Every ordering of `items`, materialised by mapping [`johnson_trotter`]
/// index permutations through the input.
///
/// Orderings are distinct by position; duplicate values in `items` produce
/// duplicate value sequences.
pub fn generate_permutations(items: &[i64]) -> Vec<Vec<i64>> {
    johnson_trotter(items.len())
        .into_iter()
        .map(|indices| {
            indices
                .into_iter()
                .filter_map(|i| items.get(i).copied())
                .collect()
        })
        .collect()
}
