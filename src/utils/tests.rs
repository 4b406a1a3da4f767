use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::utils::{
    LARGE_NUMBERS, NUMBERS_PER_ROUND, SMALL_NUMBER_RANGE, TARGET_LIMIT, UtilsError,
    generate_numbers, generate_permutations, generate_target, johnson_trotter, johnson_trotter_signed,
    validate_numbers,
};

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

#[test]
fn test_johnson_trotter_three() {
    let perms = johnson_trotter(3);
    let expected = vec![
        vec![0, 1, 2],
        vec![0, 2, 1],
        vec![2, 0, 1],
        vec![2, 1, 0],
        vec![1, 2, 0],
        vec![1, 0, 2],
    ];
    assert_eq!(perms, expected);
}

#[test]
fn test_johnson_trotter_adjacent_transpositions() {
    let perms = johnson_trotter(5);
    for pair in perms.windows(2) {
        if let [a, b] = pair {
            let diffs: Vec<usize> = (0..a.len()).filter(|&i| a.get(i) != b.get(i)).collect();
            assert_eq!(diffs.len(), 2, "{:?} -> {:?}", a, b);
            if let [i, j] = diffs.as_slice() {
                assert_eq!(i + 1, *j);
            }
        }
    }
}

#[test]
fn test_johnson_trotter_signs_match_parity() {
    fn parity(perm: &[usize]) -> i8 {
        let inversions = perm
            .iter()
            .enumerate()
            .flat_map(|(i, a)| perm.iter().skip(i + 1).filter(move |b| a > *b))
            .count();
        if inversions % 2 == 0 { 1 } else { -1 }
    }

    let (perms, signs) = johnson_trotter_signed(4);
    assert_eq!(perms, johnson_trotter(4));
    assert_eq!(signs.len(), perms.len());
    for (perm, sign) in perms.iter().zip(&signs) {
        assert_eq!(parity(perm), *sign, "{:?}", perm);
    }
    assert_eq!(signs.get(..4), Some(&[1, -1, 1, -1][..]));
}

#[test]
fn test_johnson_trotter_signed_empty() {
    assert_eq!(johnson_trotter_signed(0), (vec![Vec::new()], vec![1]));
}

#[test]
fn test_johnson_trotter_edge_cases() {
    assert_eq!(johnson_trotter(0), vec![Vec::<usize>::new()]);
    assert_eq!(johnson_trotter(1), vec![vec![0]]);
}

#[test]
fn test_permutation_count_and_distinctness() {
    for n in 1..=6 {
        let items: Vec<i64> = (1..=n as i64).map(|v| v * 10).collect();
        let perms = generate_permutations(&items);
        assert_eq!(perms.len(), factorial(n));

        let unique: HashSet<&Vec<i64>> = perms.iter().collect();
        assert_eq!(unique.len(), perms.len());

        let mut sorted_items = items.clone();
        sorted_items.sort_unstable();
        for perm in &perms {
            assert_eq!(perm.len(), n);
            let mut sorted = perm.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, sorted_items);
        }
    }
}

#[test]
fn test_permutations_first_is_input_order() {
    let items = [25, 50, 75, 100, 3, 6];
    let perms = generate_permutations(&items);
    assert_eq!(perms.first().map(Vec::as_slice), Some(&items[..]));
}

#[test]
fn test_permutations_keep_duplicate_sequences() {
    let perms = generate_permutations(&[2, 2]);
    assert_eq!(perms, vec![vec![2, 2], vec![2, 2]]);
}

#[test]
fn test_permutations_of_empty_and_single() {
    assert_eq!(generate_permutations(&[]), vec![Vec::<i64>::new()]);
    assert_eq!(generate_permutations(&[7]), vec![vec![7]]);
}

#[test]
fn test_generate_numbers_follows_round_rules() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let numbers = generate_numbers(&mut rng);
        assert_eq!(numbers.len(), NUMBERS_PER_ROUND);

        let large = numbers
            .iter()
            .take_while(|n| LARGE_NUMBERS.contains(n))
            .count();
        assert!(large <= 4);
        for n in numbers.iter().skip(large) {
            assert!(SMALL_NUMBER_RANGE.contains(n), "unexpected small number {}", n);
        }
    }
}

#[test]
fn test_generate_numbers_is_reproducible() {
    let a = generate_numbers(&mut StdRng::seed_from_u64(42));
    let b = generate_numbers(&mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn test_generate_target_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let target = generate_target(&mut rng);
        assert!((0..TARGET_LIMIT).contains(&target));
    }
}

#[test]
fn test_validate_numbers() {
    assert!(validate_numbers(&[1]).is_ok());
    assert!(validate_numbers(&[25, 50, 75, 100, 3, 6]).is_ok());
    assert_eq!(validate_numbers(&[]), Err(UtilsError::EmptyNumbers));
}
