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

/// A trait for signed integer types exposing the two's-complement sign bit
/// as an associated constant.
///
/// `SIGN_BIT` is the bit pattern with only the most significant bit set,
/// i.e. the most negative representable value of the type. The rounding
/// families combine it with low-bit masks to classify odd divisors and
/// exact negative half remainders in a single bitwise test.
///
/// # Examples
///
/// ```rust
/// # use midpoint_core::num::constants::SignBit;
/// assert_eq!(i8::SIGN_BIT as u8, 0x80);
/// assert_eq!(i32::SIGN_BIT, i32::MIN);
/// ```
pub trait SignBit {
    /// The value with only the most significant bit set.
    const SIGN_BIT: Self;
}

macro_rules! impl_sign_bit_for {
    ($t:ty) => {
        impl SignBit for $t {
            const SIGN_BIT: Self = <$t>::MIN;
        }
    };
}

impl_sign_bit_for!(i8);
impl_sign_bit_for!(i16);
impl_sign_bit_for!(i32);
impl_sign_bit_for!(i64);
impl_sign_bit_for!(i128);
impl_sign_bit_for!(isize);
