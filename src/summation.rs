//! Three alternative implementations of the sum of integers `1..=n`.
//!
//! All three return the same value for the same input; they differ only in
//! mechanism and cost. The closed form runs in constant time, the iterative
//! and recursive variants in linear time, with the recursive one also
//! consuming linear stack space.

/// Computes the sum via Gauss's closed-form formula `n * (n + 1) / 2`.
#[must_use]
#[expect(
    clippy::integer_division,
    reason = "n * (n + 1) is always even, so the division is exact"
)]
pub const fn sum_to_n_closed_form(n: u64) -> u64 {
    n * (n + 1) / 2
}

/// Computes the sum by accumulating over `1..=n`.
#[must_use]
pub fn sum_to_n_iterative(n: u64) -> u64 {
    (1..=n).sum()
}

/// Computes the sum by recursing on `n - 1`.
///
/// Consumes one stack frame per step; prefer the closed form for large `n`.
#[must_use]
pub const fn sum_to_n_recursive(n: u64) -> u64 {
    match n {
        0 => 0,
        _ => n + sum_to_n_recursive(n - 1),
    }
}
