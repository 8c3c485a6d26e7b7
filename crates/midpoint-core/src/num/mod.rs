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

//! # Numeric Foundations
//!
//! Traits and constant data underpinning the rounding families.
//!
//! ## Submodules
//!
//! - `constants`: The `SignBit` associated-constant trait, implemented for
//!   all signed primitive integers, exposing the two's-complement pattern
//!   with only the top bit set.
//! - `masks`: The two precomputed mask-table families used by
//!   `shiftround` — cumulative remainder masks and single-bit half masks —
//!   together with the `ShiftRoundMasks` trait that exposes them to
//!   generic code.
//! - `ops`: By-value rounding operation traits (`DivRoundVal`,
//!   `CheckedDivRoundVal`, `ShiftRoundVal`) mirroring the inherent-method
//!   feel of primitive arithmetic.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod constants;
pub mod masks;
pub mod ops;
