pub(crate) mod node_id;
pub(crate) mod operations;

use std::ops::{Bound, RangeBounds};

pub(crate) mod consts {
    // `2 * capacity` nodes must fit in `usize`.
    pub const MAX_LEN: usize = 1 << (usize::BITS - 2);
}

/// Converts `range` into a half-open `(start, end)` pair, panicking when it is out of `0..=len`.
pub(crate) fn to_bounds<R: RangeBounds<usize>>(range: R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    assert!(start <= end, "range start {start} is greater than range end {end}");
    assert!(end <= len, "range end {end} is out of bounds for length {len}");

    (start, end)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Algebras shared by unit tests.

    use crate::algebra::{Action, Monoid};

    /// `(sum, count)` pairs.
    pub(crate) struct CountedSum;

    impl Monoid for CountedSum {
        type Item = (i64, i64);

        fn identity(&self) -> (i64, i64) {
            (0, 0)
        }

        fn combine(&self, lhs: &(i64, i64), rhs: &(i64, i64)) -> (i64, i64) {
            (lhs.0 + rhs.0, lhs.1 + rhs.1)
        }
    }

    /// Adds a constant to every element.
    pub(crate) struct Add;

    impl Monoid for Add {
        type Item = i64;

        fn identity(&self) -> i64 {
            0
        }

        fn combine(&self, lhs: &i64, rhs: &i64) -> i64 {
            lhs + rhs
        }
    }

    impl Action<CountedSum> for Add {
        fn map(&self, f: &i64, x: &(i64, i64)) -> (i64, i64) {
            (x.0 + f * x.1, x.1)
        }
    }

    pub(crate) fn counted(values: impl IntoIterator<Item = i64>) -> Vec<(i64, i64)> {
        values.into_iter().map(|value| (value, 1)).collect()
    }
}
