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

//! Rounded integer division, half away from zero.

use crate::num::constants::SignBit;
use core::fmt::Debug;
use num_traits::{PrimInt, Signed, Unsigned};

/// Divides `dividend` by `divisor`, rounding the quotient to the nearest
/// integer with exact halves rounded away from zero.
///
/// Works for any signed primitive width. The computation uses only the
/// truncating quotient, the remainder, and a sign-aware half-divisor
/// threshold; no wider intermediate type is needed. `divisor >> 1` must
/// sign-extend, which Rust guarantees for signed primitives.
///
/// # Edge cases
///
/// - `divisor == 0`: returns `dividend` unchanged.
/// - `dividend == T::min_value() && divisor == -1`: the true quotient is
///   unrepresentable; returns `T::max_value()`.
///
/// With the `diagnostics` feature enabled, both cases also write a
/// message to stderr before returning.
///
/// # Examples
///
/// ```rust
/// # use midpoint_core::round::divround::divround_signed;
/// assert_eq!(divround_signed::<i32>(5, 2), 3); // 2.5 rounds up
/// assert_eq!(divround_signed::<i32>(-5, 2), -3); // -2.5 rounds down
/// assert_eq!(divround_signed::<i32>(5, -3), -2); // -1.67 rounds to -2
/// ```
pub fn divround_signed<T>(dividend: T, divisor: T) -> T
where
    T: PrimInt + Signed + SignBit + Debug,
{
    if divisor.is_zero() {
        #[cfg(feature = "diagnostics")]
        eprintln!(
            "divround: divisor is zero for dividend {:?}; returning the dividend unchanged",
            dividend
        );
        return dividend;
    }
    if dividend == T::min_value() && divisor == -T::one() {
        #[cfg(feature = "diagnostics")]
        eprintln!(
            "divround: {:?} / -1 overflows the positive range; returning {:?}",
            dividend,
            T::max_value()
        );
        return T::max_value();
    }

    let quotient = dividend / divisor;
    let remainder = dividend - quotient * divisor;

    // Threshold at half the divisor. Odd non-negative divisors need the
    // extra one so that a remainder of exactly ceil(divisor / 2) rounds.
    let mut div_half = divisor >> 1;
    if (divisor & (T::SIGN_BIT | T::one())) == T::one() {
        div_half = div_half + T::one();
    }

    if remainder < T::zero() {
        if div_half < T::zero() {
            if remainder <= div_half {
                return quotient + T::one();
            }
        } else if -remainder >= div_half {
            return quotient - T::one();
        }
    } else if div_half >= T::zero() {
        if remainder >= div_half {
            return quotient + T::one();
        }
    } else if -remainder <= div_half {
        return quotient - T::one();
    }
    quotient
}

/// Divides `dividend` by `divisor`, rounding the quotient to the nearest
/// integer with exact halves rounded up.
///
/// # Edge cases
///
/// - `divisor == 0`: returns `dividend` unchanged (with a stderr message
///   under the `diagnostics` feature).
///
/// # Examples
///
/// ```rust
/// # use midpoint_core::round::divround::divround_unsigned;
/// assert_eq!(divround_unsigned::<u8>(7, 2), 4); // 3.5 rounds up
/// assert_eq!(divround_unsigned::<u8>(5, 2), 3); // 2.5 rounds up
/// assert_eq!(divround_unsigned::<u8>(7, 3), 2); // 2.33 rounds down
/// ```
pub fn divround_unsigned<T>(dividend: T, divisor: T) -> T
where
    T: PrimInt + Unsigned + Debug,
{
    if divisor.is_zero() {
        #[cfg(feature = "diagnostics")]
        eprintln!(
            "divround: divisor is zero for dividend {:?}; returning the dividend unchanged",
            dividend
        );
        return dividend;
    }

    let quotient = dividend / divisor;
    let remainder = dividend - quotient * divisor;
    let half = (divisor >> 1) + (divisor & T::one());
    if remainder >= half {
        quotient + T::one()
    } else {
        quotient
    }
}

macro_rules! divround_signed_fn {
    ($(#[$meta:meta])* $name:ident, $t:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(dividend: $t, divisor: $t) -> $t {
            divround_signed::<$t>(dividend, divisor)
        }
    };
}

macro_rules! divround_unsigned_fn {
    ($(#[$meta:meta])* $name:ident, $t:ty) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(dividend: $t, divisor: $t) -> $t {
            divround_unsigned::<$t>(dividend, divisor)
        }
    };
}

divround_signed_fn!(
    /// Rounded `i8` division, half away from zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use midpoint_core::round::divround::divround_i8;
    /// assert_eq!(divround_i8(-7, 2), -4);
    /// assert_eq!(divround_i8(i8::MIN, -1), i8::MAX);
    /// assert_eq!(divround_i8(33, 0), 33);
    /// ```
    divround_i8, i8
);
divround_signed_fn!(
    /// Rounded `i16` division, half away from zero.
    divround_i16, i16
);
divround_signed_fn!(
    /// Rounded `i32` division, half away from zero.
    divround_i32, i32
);
divround_signed_fn!(
    /// Rounded `i64` division, half away from zero.
    divround_i64, i64
);

divround_unsigned_fn!(
    /// Rounded `u8` division, half rounds up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use midpoint_core::round::divround::divround_u8;
    /// assert_eq!(divround_u8(7, 2), 4);
    /// assert_eq!(divround_u8(5, 2), 3);
    /// ```
    divround_u8, u8
);
divround_unsigned_fn!(
    /// Rounded `u16` division, half rounds up.
    divround_u16, u16
);
divround_unsigned_fn!(
    /// Rounded `u32` division, half rounds up.
    divround_u32, u32
);
divround_unsigned_fn!(
    /// Rounded `u64` division, half rounds up.
    divround_u64, u64
);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Round-half-away-from-zero reference over i128, wide enough to hold
    /// every 64-bit quotient exactly.
    fn reference_divround(dividend: i128, divisor: i128) -> i128 {
        let quotient = dividend / divisor;
        let remainder = dividend % divisor;
        if remainder.abs() * 2 >= divisor.abs() {
            if (dividend < 0) == (divisor < 0) {
                quotient + 1
            } else {
                quotient - 1
            }
        } else {
            quotient
        }
    }

    #[test]
    fn test_divround_i8_exhaustive() {
        for dividend in i8::MIN..=i8::MAX {
            for divisor in i8::MIN..=i8::MAX {
                if divisor == 0 || (dividend == i8::MIN && divisor == -1) {
                    continue;
                }
                let expected = reference_divround(dividend as i128, divisor as i128);
                assert_eq!(
                    divround_i8(dividend, divisor) as i128,
                    expected,
                    "divround_i8({}, {})",
                    dividend,
                    divisor
                );
            }
        }
    }

    #[test]
    fn test_divround_u8_exhaustive() {
        for dividend in u8::MIN..=u8::MAX {
            for divisor in 1..=u8::MAX {
                let expected = reference_divround(dividend as i128, divisor as i128);
                assert_eq!(
                    divround_u8(dividend, divisor) as i128,
                    expected,
                    "divround_u8({}, {})",
                    dividend,
                    divisor
                );
            }
        }
    }

    #[test]
    fn test_divround_i16_sampled() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0001);
        for _ in 0..200_000 {
            let dividend = rng.random::<i16>();
            let divisor = rng.random::<i16>();
            if divisor == 0 || (dividend == i16::MIN && divisor == -1) {
                continue;
            }
            let expected = reference_divround(dividend as i128, divisor as i128);
            assert_eq!(divround_i16(dividend, divisor) as i128, expected);
        }
    }

    #[test]
    fn test_divround_u16_sampled() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0002);
        for _ in 0..200_000 {
            let dividend = rng.random::<u16>();
            let divisor = rng.random::<u16>();
            if divisor == 0 {
                continue;
            }
            let expected = reference_divround(dividend as i128, divisor as i128);
            assert_eq!(divround_u16(dividend, divisor) as i128, expected);
        }
    }

    #[test]
    fn test_divround_i32_sampled() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0003);
        for _ in 0..200_000 {
            let dividend = rng.random::<i32>();
            // Mix full-range and small divisors so rounded quotients are
            // exercised away from zero as well.
            let divisor = if rng.random::<bool>() {
                rng.random::<i32>()
            } else {
                rng.random_range(-1000..=1000)
            };
            if divisor == 0 || (dividend == i32::MIN && divisor == -1) {
                continue;
            }
            let expected = reference_divround(dividend as i128, divisor as i128);
            assert_eq!(divround_i32(dividend, divisor) as i128, expected);
        }
    }

    #[test]
    fn test_divround_u32_sampled() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0004);
        for _ in 0..200_000 {
            let dividend = rng.random::<u32>();
            let divisor = if rng.random::<bool>() {
                rng.random::<u32>()
            } else {
                rng.random_range(1..=1000)
            };
            if divisor == 0 {
                continue;
            }
            let expected = reference_divround(dividend as i128, divisor as i128);
            assert_eq!(divround_u32(dividend, divisor) as i128, expected);
        }
    }

    #[test]
    fn test_divround_i64_sampled() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0005);
        for _ in 0..200_000 {
            let dividend = rng.random::<i64>();
            let divisor = if rng.random::<bool>() {
                rng.random::<i64>()
            } else {
                rng.random_range(-1000..=1000)
            };
            if divisor == 0 || (dividend == i64::MIN && divisor == -1) {
                continue;
            }
            let expected = reference_divround(dividend as i128, divisor as i128);
            assert_eq!(divround_i64(dividend, divisor) as i128, expected);
        }
    }

    #[test]
    fn test_divround_u64_sampled() {
        let mut rng = StdRng::seed_from_u64(0x5EED_0006);
        for _ in 0..200_000 {
            let dividend = rng.random::<u64>();
            let divisor = if rng.random::<bool>() {
                rng.random::<u64>()
            } else {
                rng.random_range(1..=1000)
            };
            if divisor == 0 {
                continue;
            }
            let expected = reference_divround(dividend as i128, divisor as i128);
            assert_eq!(divround_u64(dividend, divisor) as i128, expected);
        }
    }

    #[test]
    fn test_divround_zero_divisor_returns_dividend() {
        assert_eq!(divround_i8(-77, 0), -77);
        assert_eq!(divround_i16(1234, 0), 1234);
        assert_eq!(divround_i32(-5_000_000, 0), -5_000_000);
        assert_eq!(divround_i64(i64::MIN, 0), i64::MIN);
        assert_eq!(divround_u8(77, 0), 77);
        assert_eq!(divround_u16(1234, 0), 1234);
        assert_eq!(divround_u32(5_000_000, 0), 5_000_000);
        assert_eq!(divround_u64(u64::MAX, 0), u64::MAX);
    }

    #[test]
    fn test_divround_min_over_minus_one_saturates() {
        assert_eq!(divround_i8(i8::MIN, -1), i8::MAX);
        assert_eq!(divround_i16(i16::MIN, -1), i16::MAX);
        assert_eq!(divround_i32(i32::MIN, -1), i32::MAX);
        assert_eq!(divround_i64(i64::MIN, -1), i64::MAX);
    }

    #[test]
    fn test_divround_half_literals() {
        assert_eq!(divround_u8(7, 2), 4);
        assert_eq!(divround_u8(5, 2), 3);
        assert_eq!(divround_i8(5, 2), 3);
        assert_eq!(divround_i8(-5, 2), -3);
        assert_eq!(divround_i8(5, -2), -3);
        assert_eq!(divround_i8(-5, -2), 3);
        assert_eq!(divround_i16(3, 2), 2);
        assert_eq!(divround_i16(-3, 2), -2);
    }

    #[test]
    fn test_divround_odd_divisors() {
        // Odd divisors never produce exact halves; nearest wins outright.
        assert_eq!(divround_i32(5, 3), 2);
        assert_eq!(divround_i32(4, 3), 1);
        assert_eq!(divround_i32(-5, 3), -2);
        assert_eq!(divround_i32(-4, 3), -1);
        assert_eq!(divround_i32(5, -3), -2);
        assert_eq!(divround_i32(-5, -3), 2);
        assert_eq!(divround_u32(5, 3), 2);
        assert_eq!(divround_u32(4, 3), 1);
    }

    #[test]
    fn test_divround_exact_quotients_unchanged() {
        for q in [-12i32, -1, 0, 1, 7, 1000] {
            for v in [-9i32, -2, -1, 1, 2, 9] {
                assert_eq!(divround_i32(q * v, v), q);
            }
        }
        for q in [0u32, 1, 7, 1000] {
            for v in [1u32, 2, 9] {
                assert_eq!(divround_u32(q * v, v), q);
            }
        }
    }

    #[test]
    fn test_divround_unity_divisors() {
        assert_eq!(divround_i64(i64::MAX, 1), i64::MAX);
        assert_eq!(divround_i64(i64::MIN, 1), i64::MIN);
        assert_eq!(divround_i64(i64::MAX, -1), -i64::MAX);
        assert_eq!(divround_u64(u64::MAX, 1), u64::MAX);
    }
}
