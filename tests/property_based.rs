//! Property-based tests for the offset-sum helper and the populate loop

use proptest::prelude::*;
use rellenar::fixed_array::{add_last_plus_offset, FixedArray, ARRAY_LEN};

fn populated() -> FixedArray {
    let mut a = FixedArray::new();
    for i in 0..ARRAY_LEN {
        a.set(i, i as i32).unwrap();
    }
    a
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_offset_sum_is_last_plus_offset(offset in -1_000_000i32..1_000_000) {
        // Property: helper returns exactly last + offset, for negative,
        // zero, and positive offsets (bounded to stay clear of i32 overflow)
        let a = populated();
        prop_assert_eq!(add_last_plus_offset(&a, offset), a.last() + offset);
    }

    #[test]
    fn prop_offset_sum_reads_only_the_last_element(last in -1_000i32..1_000, offset in -1_000i32..1_000) {
        // Property: elements 0..8 never influence the sum
        let mut a = populated();
        a.set(ARRAY_LEN - 1, last).unwrap();
        prop_assert_eq!(add_last_plus_offset(&a, offset), last + offset);
    }

    #[test]
    fn prop_out_of_bounds_access_always_fails(index in ARRAY_LEN..1_000usize) {
        // Property: any index >= 10 fails fast instead of reading memory
        let a = populated();
        prop_assert!(a.get(index).is_err());

        let mut a = a;
        prop_assert!(a.set(index, 0).is_err());
    }
}
