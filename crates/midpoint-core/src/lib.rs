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

//! # Midpoint Core
//!
//! Exact, branch-based round-to-nearest primitives over fixed-width
//! integers: rounded integer division (`divround`) and rounded
//! power-of-two right shift (`shiftround`), for every standard signed and
//! unsigned width (8/16/32/64 bit). These are building blocks for
//! fixed-point pipelines that need deterministic, overflow-safe rounding
//! without touching floating point.
//!
//! ## Modules
//!
//! - `num`: Integer foundations — the `SignBit` associated-constant trait,
//!   the two precomputed mask-table families (`num::masks`) that back the
//!   runtime-shift rounding test, and by-value operation traits
//!   (`DivRoundVal`, `CheckedDivRoundVal`, `ShiftRoundVal`) in
//!   `num::ops`.
//! - `round`: The `divround` and `shiftround` function families, one
//!   generic implementation per signedness plus eight concrete per-width
//!   entry points each.
//!
//! ## Semantics
//!
//! `divround` rounds half away from zero for both signed and unsigned
//! operands. `shiftround` rounds to nearest with one deliberate wrinkle:
//! an exact half remainder on a negative operand truncates (which, after
//! an arithmetic shift, is the value of larger magnitude). Both families
//! are pure, reentrant, and O(1); precondition violations in `divround`
//! recover to documented values instead of faulting.
//!
//! Signed right shifts in this crate rely on Rust's guarantee that `>>`
//! on signed primitives is arithmetic (sign-extending).
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod round;
