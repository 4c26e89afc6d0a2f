//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Floor a f64 and clamp it to the u64 range, returning 0 for NaN or negative values.
#[must_use]
pub fn floor_f64_to_u64(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    if value.is_infinite() {
        return u64::MAX;
    }
    cast::<f64, u64>(value.floor()).unwrap_or(u64::MAX)
}

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Convert a head count to f64.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Convert a level counter into an exponent for `powi`, saturating at `i32::MAX`.
#[must_use]
pub fn level_to_exponent(level: u32) -> i32 {
    i32::try_from(level).unwrap_or(i32::MAX)
}

/// Express `part` as a percentage of `whole`; a non-positive `whole` yields 0.
#[must_use]
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 || !whole.is_finite() {
        return 0.0;
    }
    (part / whole) * 100.0
}
