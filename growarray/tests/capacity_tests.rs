use growarray::{GrowArray, GrowArrayError, GrowthPolicy, MIN_CAPACITY};

fn assert_invariant<T>(array: &GrowArray<T>) {
    assert!(array.len() <= array.capacity());
    assert!(array.capacity() >= MIN_CAPACITY);
}

#[test]
fn test_invariant_holds_through_mixed_operations() {
    let mut array = GrowArray::new().unwrap();
    assert_invariant(&array);

    for i in 0..50 {
        array.push_back(i).unwrap();
        assert_invariant(&array);
    }
    for i in 0..20 {
        array.insert(i * 2, -1).unwrap();
        assert_invariant(&array);
    }
    while array.len() > 3 {
        array.remove(array.len() / 2);
        assert_invariant(&array);
    }
    array.clear();
    assert_invariant(&array);
}

#[test]
fn test_amortized_growth() {
    let mut array = GrowArray::new().unwrap();
    let n = 10_000;

    for i in 0..n {
        array.push_back(i).unwrap();
    }

    assert!(array.capacity() >= n);
    // 4 -> 8 -> ... -> 16384 is 12 doublings after the initial reservation
    assert_eq!(array.reallocations(), 13);
    assert_eq!(array.capacity(), 16384);
}

#[test]
fn test_grow_only_when_full() {
    let mut array = GrowArray::new().unwrap();

    for i in 0..4 {
        array.push_back(i).unwrap();
        assert_eq!(array.capacity(), 4);
    }
    array.push_back(4).unwrap();
    assert_eq!(array.capacity(), 8);
}

#[test]
fn test_shrink_only_at_quarter() {
    let mut array = GrowArray::from_values(0..16).unwrap();
    assert_eq!(array.capacity(), 16);

    array.reserve(32).unwrap();
    while array.len() > 9 {
        array.pop_back();
        assert_eq!(array.capacity(), 32);
    }
    array.pop_back(); // 8 of 32
    assert_eq!(array.capacity(), 16);
}

#[test]
fn test_no_oscillation_at_grow_edge() {
    let mut array = GrowArray::from_values(0..8).unwrap();
    assert_eq!(array.capacity(), 8);

    array.push_back(8).unwrap();
    assert_eq!(array.capacity(), 16);
    let reallocations = array.reallocations();

    for i in 0..10 {
        array.pop_back();
        array.push_back(i).unwrap();
    }
    assert_eq!(array.capacity(), 16);
    assert_eq!(array.reallocations(), reallocations);
}

#[test]
fn test_no_oscillation_at_shrink_edge() {
    let mut array = GrowArray::from_values(0..9).unwrap();
    assert_eq!(array.capacity(), 16);

    while array.len() > 4 {
        array.pop_back();
    }
    assert_eq!(array.capacity(), 8);
    let reallocations = array.reallocations();

    for i in 0..10 {
        array.push_back(i).unwrap();
        array.pop_back();
    }
    assert_eq!(array.capacity(), 8);
    assert_eq!(array.reallocations(), reallocations);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut array = GrowArray::from_values(0..100).unwrap();
    let capacity = array.capacity();

    array.clear();

    assert!(array.is_empty());
    assert_eq!(array.capacity(), capacity);
}

#[test]
fn test_custom_policy() {
    let policy = GrowthPolicy::new(3.0, 0.25, 2).unwrap();
    let mut array = GrowArray::with_policy(policy).unwrap();
    assert_eq!(array.capacity(), 2);

    for i in 0..3 {
        array.push_back(i).unwrap();
    }
    assert_eq!(array.capacity(), 6);

    for i in 3..7 {
        array.push_back(i).unwrap();
    }
    assert_eq!(array.capacity(), 18);

    while array.len() > 4 {
        array.pop_back();
    }
    // 4 of 18 is at or below the quarter line: 18 / 3
    assert_eq!(array.capacity(), 6);
    assert_eq!(array.policy(), &policy);
}

#[test]
fn test_append_reallocates_once() {
    let mut array = GrowArray::new().unwrap();
    let mut other = GrowArray::from_values(0..100).unwrap();
    let other_capacity = other.capacity();
    let before = array.reallocations();

    array.append(&mut other).unwrap();

    assert_eq!(array.reallocations(), before + 1);
    assert_eq!(array.capacity(), 128);
    assert_eq!(array.len(), 100);
    assert!(other.is_empty());
    assert_eq!(other.capacity(), other_capacity);
}

#[test]
fn test_extend_from_slice_reallocates_once() {
    let mut array = GrowArray::from_slice(&[1, 2, 3]).unwrap();
    let before = array.reallocations();

    array.extend_from_slice(&[0; 30]).unwrap();

    assert_eq!(array.reallocations(), before + 1);
    assert_eq!(array.capacity(), 64);
    assert_eq!(array.len(), 33);
}

#[test]
fn test_swap_exchanges_capacity_and_policy() {
    let policy = GrowthPolicy::with_growth_factor(1.5).unwrap();
    let mut first = GrowArray::with_policy(policy).unwrap();
    first.push_back(1).unwrap();
    let mut second = GrowArray::from_values(0..20).unwrap();

    first.swap(&mut second);

    assert_eq!(first.len(), 20);
    assert_eq!(first.capacity(), 32);
    assert_eq!(first.policy(), &GrowthPolicy::default());
    assert_eq!(second.len(), 1);
    assert_eq!(second.capacity(), 4);
    assert_eq!(second.policy(), &policy);
}

#[test]
fn test_failed_allocation_keeps_state() {
    let mut array = GrowArray::<u64>::from_values(0..5).unwrap();
    let reallocations = array.reallocations();

    let result = array.reserve(isize::MAX as usize / 8);

    assert!(matches!(result, Err(GrowArrayError::BadAlloc { .. })));
    assert_eq!(array.len(), 5);
    assert_eq!(array.capacity(), 8);
    assert_eq!(array.reallocations(), reallocations);
    assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4]);

    array.push_back(5).unwrap();
    assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(array.capacity(), 8);
}

#[test]
fn test_unaddressable_capacity_is_overflow() {
    let mut array = GrowArray::<u64>::from_values(0..3).unwrap();

    assert_eq!(
        array.reserve(usize::MAX),
        Err(GrowArrayError::Overflow {
            requested: usize::MAX
        })
    );
    assert_eq!(array.capacity(), 4);
    assert_eq!(array.as_slice(), &[0, 1, 2]);
}
