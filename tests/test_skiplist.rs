use classic_collections::skiplist::{SkipList, DEFAULT_MAX_LEVEL};
use rand::Rng;

const NUM_OF_OPERATIONS: usize = 10_000;

#[test]
fn int_test_skiplist() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut list = SkipList::with_seed(DEFAULT_MAX_LEVEL, [1, 1, 1, 1]);
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.gen_range(-500, 500);
        if rng.gen_range(0, 3) == 0 {
            let position = expected.iter().position(|&stored| stored == value);
            if let Some(index) = position {
                expected.remove(index);
            }
            assert_eq!(list.remove(value), position.is_some());
        } else {
            list.insert(value);
            expected.push(value);
        }
        assert_eq!(list.len(), expected.len());
    }

    expected.sort();
    assert_eq!(list.values(), expected);
    for value in -500..500 {
        assert_eq!(list.search(value), expected.contains(&value));
    }
}

#[test]
fn int_test_levels_are_sorted_subsequences() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let mut list = SkipList::with_seed(8, [2, 2, 2, 2]);
    for _ in 0..2_000 {
        list.insert(rng.gen_range(0, 10_000));
    }

    assert!(list.level() >= 1 && list.level() <= 8);
    let mut previous = list.level_values(0);
    for level in 1..list.max_level() {
        let values = list.level_values(level);
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(values.len() <= previous.len());
        assert!(values.iter().all(|value| previous.contains(value)));
        previous = values;
    }
}

#[test]
fn int_test_entries_respect_max_level() {
    let mut list = SkipList::with_seed(DEFAULT_MAX_LEVEL, [3, 3, 3, 3]);
    for value in 0..1_000 {
        list.insert(value);
    }
    let entries = list.to_vec();
    assert_eq!(entries.len(), 1_000);
    assert!(entries
        .iter()
        .all(|entry| entry.level >= 1 && entry.level <= DEFAULT_MAX_LEVEL));
    assert!(entries.windows(2).all(|pair| pair[0].value < pair[1].value));
}

#[test]
fn int_test_remove_all() {
    let mut list = SkipList::with_seed(DEFAULT_MAX_LEVEL, [4, 4, 4, 4]);
    for value in 0..500 {
        list.insert(value);
    }
    for value in (0..500).rev() {
        assert!(list.remove(value));
    }
    assert!(list.is_empty());
    for level in 0..list.max_level() {
        assert!(list.level_values(level).is_empty());
    }
}
