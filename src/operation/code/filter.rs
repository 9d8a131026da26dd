/// Values must be strictly below this to be kept
pub const FILTER_LIMIT: i64 = 2000;
/// Kept values are multiples of this
pub const FILTER_DIVISOR: i64 = 5;

/// Filter predicate. `%` keeps the dividend's sign, so negative multiples
/// of five still compare equal to zero.
#[inline]
pub fn keeps(v: i64) -> bool {
    v < FILTER_LIMIT && v % FILTER_DIVISOR == 0
}

pub fn filter_values(data: &[i64]) -> Vec<i64> {
    data.iter().copied().filter(|&v| keeps(v)).collect()
}
