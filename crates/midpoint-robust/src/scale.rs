// Copyright (c) 2025 Midpoint Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The Croux–Rousseeuw Sn robust scale estimator.
//!
//! Sn is the low median over i of the high median over j of
//! `|x_i - x_j|`, scaled by the consistency factor 1.1926 and a
//! finite-sample correction. Unlike the standard deviation it tolerates
//! up to half the sample being arbitrarily corrupted, and unlike the MAD
//! it needs no location estimate.
//!
//! [`sn`] runs in O(n log n): after sorting, each per-point high median is
//! found by a two-pointer binary search over the implicit matrix of
//! pairwise differences, never materializing the O(n²) entries.
//! [`sn_naive`] materializes each difference row and exists to
//! cross-validate the fast path.

/// High-median rank helper: the k-th smallest (1-based `n/2 + 1`) of a
/// difference row, used by the naive estimator.
fn high_median(values: &mut [f64]) -> f64 {
    let k = values.len() / 2;
    *values.select_nth_unstable_by(k, f64::total_cmp).1
}

/// Low median: rank `(n + 1) / 2` (1-based).
fn low_median(values: &mut [f64]) -> f64 {
    let k = (values.len() + 1) / 2 - 1;
    *values.select_nth_unstable_by(k, f64::total_cmp).1
}

/// Finite-sample bias correction. Tabulated for `n <= 9`; for larger odd
/// n the asymptotic formula applies, and even n needs no correction.
fn correction_factor(n: usize) -> f64 {
    match n {
        2 => 0.743,
        3 => 1.851,
        4 => 0.954,
        5 => 1.351,
        6 => 0.993,
        7 => 1.198,
        8 => 1.005,
        9 => 1.131,
        _ if n % 2 == 1 => n as f64 / (n as f64 - 0.9),
        _ => 1.0,
    }
}

/// Computes the Sn scale estimate of `values` in O(n log n).
///
/// Returns `0.0` for sequences of length zero or one. Input order is
/// irrelevant; the sample is copied and sorted internally.
///
/// # Examples
///
/// ```rust
/// # use midpoint_robust::scale::sn;
/// assert_eq!(sn(&[4.0, 4.0, 4.0, 4.0]), 0.0);
/// let spread = sn(&[1.0, 2.0, 4.0, 8.0]);
/// assert!((spread - 0.954 * 1.1926 * 3.0).abs() < 1e-12);
/// ```
pub fn sn(values: &[f64]) -> f64 {
    let n = values.len();
    if n <= 1 {
        return 0.0;
    }
    let mut y = values.to_vec();
    y.sort_by(f64::total_cmp);

    let mut a2 = vec![0.0; n];
    // The smallest point's differences grow monotonically to the right.
    a2[0] = y[n / 2] - y[0];

    // Left half: for point i (1-based), the row of differences splits into
    // a descending run A (points below i) and an ascending run B (points
    // above i). The high median is found by shrinking candidate rank
    // windows over both runs simultaneously.
    for i in 2..=n.div_ceil(2) {
        let n_a = i - 1;
        let n_b = n - i;
        let diff = n_b - n_a;
        let mut left_a = 1usize;
        let mut left_b = 1usize;
        let mut right_a = n_b;
        let a_min = diff / 2 + 1;
        let a_max = diff / 2 + n_a;

        while left_a < right_a {
            let length = right_a - left_a + 1;
            let even = 1 - length % 2;
            let half = (length - 1) / 2;
            let try_a = left_a + half;
            let try_b = left_b + half;
            if try_a < a_min {
                left_a = try_a + even;
            } else if try_a > a_max {
                right_a = try_a;
                left_b = try_b + even;
            } else {
                let med_a = y[i - 1] - y[i + a_min - try_a - 2];
                let med_b = y[try_b + i - 1] - y[i - 1];
                if med_a >= med_b {
                    right_a = try_a;
                    left_b = try_b + even;
                } else {
                    left_a = try_a + even;
                }
            }
        }

        if left_a > a_max {
            a2[i - 1] = y[left_b + i - 1] - y[i - 1];
        } else {
            let med_a = y[i - 1] - y[i + a_min - left_a - 2];
            let med_b = y[left_b + i - 1] - y[i - 1];
            a2[i - 1] = med_a.min(med_b);
        }
    }

    // Right half, mirrored: run A now ascends above i, run B descends
    // below it.
    for i in (n + 1) / 2 + 1..=n - 1 {
        let n_a = n - i;
        let n_b = i - 1;
        let diff = n_b - n_a;
        let mut left_a = 1usize;
        let mut left_b = 1usize;
        let mut right_a = n_b;
        let a_min = diff / 2 + 1;
        let a_max = diff / 2 + n_a;

        while left_a < right_a {
            let length = right_a - left_a + 1;
            let even = 1 - length % 2;
            let half = (length - 1) / 2;
            let try_a = left_a + half;
            let try_b = left_b + half;
            if try_a < a_min {
                left_a = try_a + even;
            } else if try_a > a_max {
                right_a = try_a;
                left_b = try_b + even;
            } else {
                let med_a = y[i + try_a - a_min] - y[i - 1];
                let med_b = y[i - 1] - y[i - try_b - 1];
                if med_a >= med_b {
                    right_a = try_a;
                    left_b = try_b + even;
                } else {
                    left_a = try_a + even;
                }
            }
        }

        if left_a > a_max {
            a2[i - 1] = y[i - 1] - y[i - left_b - 1];
        } else {
            let med_a = y[i + left_a - a_min] - y[i - 1];
            let med_b = y[i - 1] - y[i - left_b - 1];
            a2[i - 1] = med_a.min(med_b);
        }
    }

    a2[n - 1] = y[n - 1] - y[(n + 1) / 2 - 1];

    correction_factor(n) * 1.1926 * low_median(&mut a2)
}

/// O(n²) reference implementation of [`sn`].
///
/// Materializes each row of absolute differences and selects medians
/// directly. Kept for cross-validation of the selection-based fast path;
/// prefer [`sn`] for real workloads.
pub fn sn_naive(values: &[f64]) -> f64 {
    let n = values.len();
    if n <= 1 {
        return 0.0;
    }
    let mut a2 = vec![0.0; n];
    let mut row = vec![0.0; n];
    for i in 0..n {
        for (j, slot) in row.iter_mut().enumerate() {
            *slot = (values[i] - values[j]).abs();
        }
        a2[i] = high_median(&mut row);
    }
    correction_factor(n) * 1.1926 * low_median(&mut a2)
}
