use super::code;
use super::Operation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_values(len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random_range(-500..5000)).collect()
}

#[test]
fn test_filter_known_values() {
    // 2000 is not < 2000; 2500 and 3000 are above the limit
    let data = [2500, 10, 15, 2000, 3000, 20];
    assert_eq!(code::filter_values(&data), vec![10, 15, 20]);
}

#[test]
fn test_sort_known_values() {
    let data = [2500, 10, 15, 2000, 3000, 20];
    assert_eq!(code::sort_values(&data), vec![10, 15, 20, 2000, 2500, 3000]);
}

#[test]
fn test_empty_input() {
    for op in Operation::ALL {
        assert!(op.apply(&[]).is_empty(), "{} of empty input", op);
    }
}

#[test]
fn test_negative_values() {
    // -7 % 5 == -2 in Rust, 3 with floored modulo; neither is zero
    assert!(code::keeps(-10));
    assert!(!code::keeps(-7));
    assert!(code::keeps(0));
    assert!(code::keeps(1995));
    assert!(!code::keeps(2005));
}

#[test]
fn test_filter_matches_predicate() {
    let data = random_values(2048, 0x5eed);
    let expected: Vec<i64> = data
        .iter()
        .copied()
        .filter(|&x| x < 2000 && x % 5 == 0)
        .collect();
    assert_eq!(Operation::Filter.apply(&data), expected);
}

#[test]
fn test_sort_is_ordered_permutation() {
    let data = random_values(2048, 0xfeed);
    let sorted = Operation::Sort.apply(&data);

    assert_eq!(sorted.len(), data.len());
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let mut counts = std::collections::HashMap::new();
    for v in &data {
        *counts.entry(*v).or_insert(0i64) += 1;
    }
    for v in &sorted {
        *counts.get_mut(v).expect("sorted output has foreign value") -= 1;
    }
    assert!(counts.values().all(|&c| c == 0));
}

#[test]
fn test_operations_are_idempotent() {
    let data = random_values(512, 7);
    for op in Operation::ALL {
        assert_eq!(op.apply(&data), op.apply(&data), "{} is not pure", op);
    }
}

#[test]
fn test_operation_wire_names() {
    assert_eq!(serde_json::to_string(&Operation::Filter).unwrap(), "\"filter\"");
    let op: Operation = serde_json::from_str("\"sort\"").unwrap();
    assert_eq!(op, Operation::Sort);
}
