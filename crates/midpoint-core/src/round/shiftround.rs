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

//! Rounded division by a power of two with a runtime shift amount.

use crate::num::constants::SignBit;
use crate::num::masks::ShiftRoundMasks;
use num_traits::{PrimInt, Signed, Unsigned};

/// Computes `value / 2^shift` rounded to the nearest integer for signed
/// operands, with one deliberate wrinkle: an exact half remainder on a
/// negative value truncates instead of adding one. After an arithmetic
/// shift the truncated result is the value of larger magnitude, so
/// negative ties land away from zero, matching the positive-tie rule in
/// effect.
///
/// # Invariants
///
/// - `1 <= shift <= T::MAX_SHIFT` (bit width minus two). This is the
///   caller's contract, mirroring native shift semantics: it is checked by
///   `debug_assert!` in debug builds and unchecked in release builds.
///
/// # Examples
///
/// ```rust
/// # use midpoint_core::round::shiftround::shiftround_signed;
/// assert_eq!(shiftround_signed::<i32>(7, 1), 4); // 3.5 rounds up
/// assert_eq!(shiftround_signed::<i32>(-6, 2), -2); // -1.5 tie truncates
/// assert_eq!(shiftround_signed::<i32>(-5, 2), -1); // -1.25 rounds to -1
/// ```
pub fn shiftround_signed<T>(value: T, shift: u8) -> T
where
    T: PrimInt + Signed + SignBit + ShiftRoundMasks,
{
    debug_assert!(
        (1..=T::MAX_SHIFT).contains(&shift),
        "called `shiftround_signed` with shift {} outside 1..={}",
        shift,
        T::MAX_SHIFT
    );
    let k = (shift - 1) as usize;
    // SAFETY: the caller contract bounds shift to 1..=MAX_SHIFT and both
    // tables hold exactly MAX_SHIFT entries, so k is in bounds.
    let (mask, half) = unsafe {
        (
            *T::REMAINDER_MASKS.get_unchecked(k),
            *T::HALF_BIT_MASKS.get_unchecked(k),
        )
    };
    let shift = shift as usize;
    if value & (T::SIGN_BIT | mask) == T::SIGN_BIT | half {
        return value >> shift;
    }
    if (value & mask) >= half {
        (value >> shift) + T::one()
    } else {
        value >> shift
    }
}

/// Computes `value / 2^shift` rounded to the nearest integer for unsigned
/// operands, exact halves rounding up.
///
/// # Invariants
///
/// - `1 <= shift <= T::MAX_SHIFT` (bit width minus one). Caller contract;
///   checked by `debug_assert!` in debug builds only.
///
/// # Examples
///
/// ```rust
/// # use midpoint_core::round::shiftround::shiftround_unsigned;
/// assert_eq!(shiftround_unsigned::<u32>(6, 2), 2); // 1.5 rounds up
/// assert_eq!(shiftround_unsigned::<u32>(5, 2), 1); // 1.25 rounds down
/// ```
pub fn shiftround_unsigned<T>(value: T, shift: u8) -> T
where
    T: PrimInt + Unsigned + ShiftRoundMasks,
{
    debug_assert!(
        (1..=T::MAX_SHIFT).contains(&shift),
        "called `shiftround_unsigned` with shift {} outside 1..={}",
        shift,
        T::MAX_SHIFT
    );
    let k = (shift - 1) as usize;
    // SAFETY: the caller contract bounds shift to 1..=MAX_SHIFT and both
    // tables hold exactly MAX_SHIFT entries, so k is in bounds.
    let (mask, half) = unsafe {
        (
            *T::REMAINDER_MASKS.get_unchecked(k),
            *T::HALF_BIT_MASKS.get_unchecked(k),
        )
    };
    let shift = shift as usize;
    if (value & mask) >= half {
        (value >> shift) + T::one()
    } else {
        value >> shift
    }
}

macro_rules! shiftround_signed_fn {
    ($(#[$meta:meta])* $name:ident, $t:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(value: $t, shift: u8) -> $t {
            shiftround_signed::<$t>(value, shift)
        }
    };
}

macro_rules! shiftround_unsigned_fn {
    ($(#[$meta:meta])* $name:ident, $t:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(value: $t, shift: u8) -> $t {
            shiftround_unsigned::<$t>(value, shift)
        }
    };
}

shiftround_signed_fn!(
    /// Rounded `i8` right shift; valid shifts are `1..=6`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use midpoint_core::round::shiftround::shiftround_i8;
    /// assert_eq!(shiftround_i8(-6, 2), -2); // negative tie truncates
    /// assert_eq!(shiftround_i8(6, 2), 2); // positive tie rounds up
    /// ```
    shiftround_i8, i8
);
shiftround_signed_fn!(
    /// Rounded `i16` right shift; valid shifts are `1..=14`.
    shiftround_i16, i16
);
shiftround_signed_fn!(
    /// Rounded `i32` right shift; valid shifts are `1..=30`.
    shiftround_i32, i32
);
shiftround_signed_fn!(
    /// Rounded `i64` right shift; valid shifts are `1..=62`.
    shiftround_i64, i64
);

shiftround_unsigned_fn!(
    /// Rounded `u8` right shift; valid shifts are `1..=7`.
    shiftround_u8, u8
);
shiftround_unsigned_fn!(
    /// Rounded `u16` right shift; valid shifts are `1..=15`.
    shiftround_u16, u16
);
shiftround_unsigned_fn!(
    /// Rounded `u32` right shift; valid shifts are `1..=31`.
    shiftround_u32, u32
);
shiftround_unsigned_fn!(
    /// Rounded `u64` right shift; valid shifts are `1..=63`.
    shiftround_u64, u64
);
