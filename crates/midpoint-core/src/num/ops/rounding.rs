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

use crate::round::divround::{divround_signed, divround_unsigned};
use crate::round::shiftround::{shiftround_signed, shiftround_unsigned};

/// Round-to-nearest division by value (no references).
///
/// Mirrors the free `divround_*` functions: half away from zero, with
/// divide-by-zero returning `self` and `MIN / -1` returning the type
/// maximum.
///
/// # Examples
///
/// ```rust
/// # use midpoint_core::num::ops::rounding::DivRoundVal;
/// assert_eq!(5i32.div_round_val(2), 3);
/// assert_eq!((-5i32).div_round_val(2), -3);
/// assert_eq!(7u8.div_round_val(2), 4);
/// ```
pub trait DivRoundVal: Sized {
    /// Divides by value, rounding half away from zero.
    fn div_round_val(self, divisor: Self) -> Self;
}

/// Checked round-to-nearest division by value (no references).
///
/// Unlike [`DivRoundVal`], the two precondition violations surface as
/// `None` rather than recovering silently, in the style of the primitive
/// `checked_div`.
///
/// # Examples
///
/// ```rust
/// # use midpoint_core::num::ops::rounding::CheckedDivRoundVal;
/// assert_eq!(5i32.checked_div_round_val(2), Some(3));
/// assert_eq!(5i32.checked_div_round_val(0), None);
/// assert_eq!(i8::MIN.checked_div_round_val(-1), None);
/// ```
pub trait CheckedDivRoundVal: Sized {
    /// Divides by value rounding half away from zero, returning `None` on
    /// divide-by-zero or an unrepresentable quotient.
    fn checked_div_round_val(self, divisor: Self) -> Option<Self>;
}

/// Round-to-nearest power-of-two right shift by value (no references).
///
/// The shift-range contract of the free `shiftround_*` functions applies
/// unchanged.
///
/// # Examples
///
/// ```rust
/// # use midpoint_core::num::ops::rounding::ShiftRoundVal;
/// assert_eq!(6u32.shift_round_val(2), 2);
/// assert_eq!((-6i32).shift_round_val(2), -2);
/// ```
pub trait ShiftRoundVal: Sized {
    /// Divides by `2^shift`, rounding to nearest.
    fn shift_round_val(self, shift: u8) -> Self;
}

macro_rules! div_round_impl_val {
    ($t:ty, $f:path) => {
        impl DivRoundVal for $t {
            #[inline(always)]
            fn div_round_val(self, divisor: $t) -> $t {
                $f(self, divisor)
            }
        }
    };
}

div_round_impl_val!(i8, divround_signed::<i8>);
div_round_impl_val!(i16, divround_signed::<i16>);
div_round_impl_val!(i32, divround_signed::<i32>);
div_round_impl_val!(i64, divround_signed::<i64>);
div_round_impl_val!(u8, divround_unsigned::<u8>);
div_round_impl_val!(u16, divround_unsigned::<u16>);
div_round_impl_val!(u32, divround_unsigned::<u32>);
div_round_impl_val!(u64, divround_unsigned::<u64>);

macro_rules! checked_div_round_impl_signed {
    ($t:ty) => {
        impl CheckedDivRoundVal for $t {
            #[inline(always)]
            fn checked_div_round_val(self, divisor: $t) -> Option<$t> {
                if divisor == 0 || (self == <$t>::MIN && divisor == -1) {
                    None
                } else {
                    Some(divround_signed::<$t>(self, divisor))
                }
            }
        }
    };
}

macro_rules! checked_div_round_impl_unsigned {
    ($t:ty) => {
        impl CheckedDivRoundVal for $t {
            #[inline(always)]
            fn checked_div_round_val(self, divisor: $t) -> Option<$t> {
                if divisor == 0 {
                    None
                } else {
                    Some(divround_unsigned::<$t>(self, divisor))
                }
            }
        }
    };
}

checked_div_round_impl_signed!(i8);
checked_div_round_impl_signed!(i16);
checked_div_round_impl_signed!(i32);
checked_div_round_impl_signed!(i64);
checked_div_round_impl_unsigned!(u8);
checked_div_round_impl_unsigned!(u16);
checked_div_round_impl_unsigned!(u32);
checked_div_round_impl_unsigned!(u64);

macro_rules! shift_round_impl_val {
    ($t:ty, $f:path) => {
        impl ShiftRoundVal for $t {
            #[inline(always)]
            fn shift_round_val(self, shift: u8) -> $t {
                $f(self, shift)
            }
        }
    };
}

shift_round_impl_val!(i8, shiftround_signed::<i8>);
shift_round_impl_val!(i16, shiftround_signed::<i16>);
shift_round_impl_val!(i32, shiftround_signed::<i32>);
shift_round_impl_val!(i64, shiftround_signed::<i64>);
shift_round_impl_val!(u8, shiftround_unsigned::<u8>);
shift_round_impl_val!(u16, shiftround_unsigned::<u16>);
shift_round_impl_val!(u32, shiftround_unsigned::<u32>);
shift_round_impl_val!(u64, shiftround_unsigned::<u64>);
