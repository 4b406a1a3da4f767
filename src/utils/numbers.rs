use log::debug;
use rand::Rng;

/// Numbers dealt in a standard round
pub const NUMBERS_PER_ROUND: usize = 6;
/// At most this many large numbers are picked
pub const MAX_LARGE_NUMBERS: usize = 4;
pub const LARGE_NUMBERS: [i64; 4] = [25, 50, 75, 100];
pub const SMALL_NUMBER_RANGE: std::ops::RangeInclusive<i64> = 1..=9;
/// Targets are drawn from `0..TARGET_LIMIT`
pub const TARGET_LIMIT: i64 = 1000;

/// Deal six numbers the way the show does, except that small numbers are
/// drawn with replacement.
pub fn generate_numbers<R: Rng + ?Sized>(rng: &mut R) -> Vec<i64> {
    let large_count = rng.gen_range(0..=MAX_LARGE_NUMBERS);
    let mut numbers = Vec::with_capacity(NUMBERS_PER_ROUND);

    for _ in 0..large_count {
        let idx = rng.gen_range(0..LARGE_NUMBERS.len());
        numbers.extend(LARGE_NUMBERS.get(idx).copied());
    }
    for _ in large_count..NUMBERS_PER_ROUND {
        numbers.push(rng.gen_range(SMALL_NUMBER_RANGE));
    }

    debug!("Dealt {} large numbers: {:?}", large_count, numbers);
    numbers
}

pub fn generate_target<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(0..TARGET_LIMIT)
}
