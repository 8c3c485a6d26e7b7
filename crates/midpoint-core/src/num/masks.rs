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

//! # Shift Mask Tables
//!
//! Precomputed, compile-time mask tables backing the runtime-shift
//! rounding test in `round::shiftround`. Two distinct families exist and
//! must not be conflated:
//!
//! - *Remainder masks* (cumulative): `table[k] == (1 << (k + 1)) - 1`,
//!   isolating every operand bit strictly below the shift point for shift
//!   amount `k + 1`.
//! - *Half-bit masks* (single-bit): `table[k] == 1 << k`, isolating
//!   exactly the half-remainder bit for shift amount `k + 1`.
//!
//! Both families are indexed by `shift - 1`. Unsigned tables hold
//! `W - 1` entries (shifts `1..=W-1`); signed tables hold `W - 2` entries
//! because the top shift amount would collide with the sign-bit-aware tie
//! test. The `ShiftRoundMasks` trait exposes the tables and the valid
//! shift ceiling to generic code.

/// A trait for integer types with precomputed shift-rounding mask tables.
///
/// Both slices hold exactly `MAX_SHIFT` entries and are indexed by
/// `shift - 1`. The tables are immutable process-wide constants; reading
/// them concurrently requires no synchronization.
pub trait ShiftRoundMasks: Sized + 'static {
    /// Largest shift amount valid for `shiftround` on this type.
    const MAX_SHIFT: u8;

    /// Cumulative remainder masks: entry `k` has bits `0..=k` set.
    const REMAINDER_MASKS: &'static [Self];

    /// Single-bit half masks: entry `k` is `1 << k`.
    const HALF_BIT_MASKS: &'static [Self];
}

macro_rules! remainder_masks_for {
    ($(#[$meta:meta])* $name:ident, $t:ty, $len:expr) => {
        $(#[$meta])*
        pub const $name: [$t; $len] = {
            let mut table = [0; $len];
            let mut k = 0;
            while k < $len {
                table[k] = ((1 as $t) << (k + 1)) - 1;
                k += 1;
            }
            table
        };
    };
}

macro_rules! half_bit_masks_for {
    ($(#[$meta:meta])* $name:ident, $t:ty, $len:expr) => {
        $(#[$meta])*
        pub const $name: [$t; $len] = {
            let mut table = [0; $len];
            let mut k = 0;
            while k < $len {
                table[k] = (1 as $t) << k;
                k += 1;
            }
            table
        };
    };
}

remainder_masks_for!(
    /// Cumulative remainder masks for `i8`, shifts `1..=6`.
    REMAINDER_MASKS_I8, i8, 6
);
remainder_masks_for!(
    /// Cumulative remainder masks for `i16`, shifts `1..=14`.
    REMAINDER_MASKS_I16, i16, 14
);
remainder_masks_for!(
    /// Cumulative remainder masks for `i32`, shifts `1..=30`.
    REMAINDER_MASKS_I32, i32, 30
);
remainder_masks_for!(
    /// Cumulative remainder masks for `i64`, shifts `1..=62`.
    REMAINDER_MASKS_I64, i64, 62
);
remainder_masks_for!(
    /// Cumulative remainder masks for `u8`, shifts `1..=7`.
    REMAINDER_MASKS_U8, u8, 7
);
remainder_masks_for!(
    /// Cumulative remainder masks for `u16`, shifts `1..=15`.
    REMAINDER_MASKS_U16, u16, 15
);
remainder_masks_for!(
    /// Cumulative remainder masks for `u32`, shifts `1..=31`.
    REMAINDER_MASKS_U32, u32, 31
);
remainder_masks_for!(
    /// Cumulative remainder masks for `u64`, shifts `1..=63`.
    REMAINDER_MASKS_U64, u64, 63
);

half_bit_masks_for!(
    /// Single-bit half masks for `i8`, shifts `1..=6`.
    HALF_BIT_MASKS_I8, i8, 6
);
half_bit_masks_for!(
    /// Single-bit half masks for `i16`, shifts `1..=14`.
    HALF_BIT_MASKS_I16, i16, 14
);
half_bit_masks_for!(
    /// Single-bit half masks for `i32`, shifts `1..=30`.
    HALF_BIT_MASKS_I32, i32, 30
);
half_bit_masks_for!(
    /// Single-bit half masks for `i64`, shifts `1..=62`.
    HALF_BIT_MASKS_I64, i64, 62
);
half_bit_masks_for!(
    /// Single-bit half masks for `u8`, shifts `1..=7`.
    HALF_BIT_MASKS_U8, u8, 7
);
half_bit_masks_for!(
    /// Single-bit half masks for `u16`, shifts `1..=15`.
    HALF_BIT_MASKS_U16, u16, 15
);
half_bit_masks_for!(
    /// Single-bit half masks for `u32`, shifts `1..=31`.
    HALF_BIT_MASKS_U32, u32, 31
);
half_bit_masks_for!(
    /// Single-bit half masks for `u64`, shifts `1..=63`.
    HALF_BIT_MASKS_U64, u64, 63
);

macro_rules! shift_round_masks_impl {
    ($t:ty, $max_shift:expr, $remainder:ident, $half_bit:ident) => {
        impl ShiftRoundMasks for $t {
            const MAX_SHIFT: u8 = $max_shift;
            const REMAINDER_MASKS: &'static [Self] = &$remainder;
            const HALF_BIT_MASKS: &'static [Self] = &$half_bit;
        }
    };
}

shift_round_masks_impl!(i8, 6, REMAINDER_MASKS_I8, HALF_BIT_MASKS_I8);
shift_round_masks_impl!(i16, 14, REMAINDER_MASKS_I16, HALF_BIT_MASKS_I16);
shift_round_masks_impl!(i32, 30, REMAINDER_MASKS_I32, HALF_BIT_MASKS_I32);
shift_round_masks_impl!(i64, 62, REMAINDER_MASKS_I64, HALF_BIT_MASKS_I64);
shift_round_masks_impl!(u8, 7, REMAINDER_MASKS_U8, HALF_BIT_MASKS_U8);
shift_round_masks_impl!(u16, 15, REMAINDER_MASKS_U16, HALF_BIT_MASKS_U16);
shift_round_masks_impl!(u32, 31, REMAINDER_MASKS_U32, HALF_BIT_MASKS_U32);
shift_round_masks_impl!(u64, 63, REMAINDER_MASKS_U64, HALF_BIT_MASKS_U64);
