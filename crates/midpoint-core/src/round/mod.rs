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

//! # Rounding Function Families
//!
//! The two round-to-nearest families over fixed-width integers.
//!
//! ## Submodules
//!
//! - `divround`: Rounded integer division, half away from zero. One
//!   generic implementation per signedness plus the eight per-width entry
//!   points `divround_i8` … `divround_u64`. Divide-by-zero and
//!   most-negative ÷ −1 recover to documented values instead of faulting.
//! - `shiftround`: Rounded division by a power of two via right shift with
//!   a runtime shift amount, backed by the `num::masks` tables. Eight
//!   per-width entry points `shiftround_i8` … `shiftround_u64`. The shift
//!   range is a caller contract checked only in debug builds.
//!
//! All functions are pure, stateless, reentrant, and O(1).

pub mod divround;
pub mod shiftround;
