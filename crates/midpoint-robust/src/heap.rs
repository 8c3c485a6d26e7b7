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

//! Descending heap sort for paired-row records.
//!
//! Rows are two-component records ordered by the larger absolute
//! component. A binary min-heap is built in place and the root repeatedly
//! swapped to the shrinking tail, leaving the slice in descending key
//! order. Used to process dominant rows first when conditioning
//! least-squares systems.

/// Sort key of a row: the larger absolute component.
#[inline]
fn row_key(row: &[f64; 2]) -> f64 {
    row[0].abs().max(row[1].abs())
}

fn sift_down(rows: &mut [[f64; 2]], mut root: usize, len: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= len {
            return;
        }
        if child + 1 < len && row_key(&rows[child + 1]) < row_key(&rows[child]) {
            child += 1;
        }
        if row_key(&rows[child]) < row_key(&rows[root]) {
            rows.swap(root, child);
            root = child;
        } else {
            return;
        }
    }
}

/// Sorts `rows` in place into descending order of `max(|row[0]|, |row[1]|)`.
///
/// Rows with equal keys keep no particular relative order. NaN components
/// are not supported; `max` over a NaN component poisons that row's key
/// ordering.
///
/// # Examples
///
/// ```rust
/// # use midpoint_robust::heap::sort_rows_by_max_abs_desc;
/// let mut rows = [[1.0, -4.0], [2.0, 0.5], [-9.0, 3.0]];
/// sort_rows_by_max_abs_desc(&mut rows);
/// assert_eq!(rows, [[-9.0, 3.0], [1.0, -4.0], [2.0, 0.5]]);
/// ```
pub fn sort_rows_by_max_abs_desc(rows: &mut [[f64; 2]]) {
    let n = rows.len();
    if n < 2 {
        return;
    }
    for start in (0..n / 2).rev() {
        sift_down(rows, start, n);
    }
    for end in (1..n).rev() {
        rows.swap(0, end);
        sift_down(rows, 0, end);
    }
}
