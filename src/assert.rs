use num_complex::Complex32;

use crate::f32cmp::{equal_f32, same_value_f32, same_value_zero_f32};

/// Test whether two complex numbers are the same value, treating signed zeros as equal.
///
/// Both components are compared with SameValueZero: NaN equals NaN, and `+0` equals `-0`.
/// Infinities only match an infinity of the same sign.
///
/// ```
/// use c32_assert::{is_same_value_zero, Complex32};
///
/// assert!(is_same_value_zero(Complex32::new(5.0, 3.0), Complex32::new(5.0, 3.0)));
/// assert!(!is_same_value_zero(Complex32::new(-5.0, -3.0), Complex32::new(5.0, 3.0)));
/// assert!(is_same_value_zero(Complex32::new(f32::NAN, 3.0), Complex32::new(f32::NAN, 3.0)));
/// ```
#[inline]
pub fn is_same_value_zero(a: Complex32, b: Complex32) -> bool {
    let eq = same_value_zero_f32(a.re, b.re) && same_value_zero_f32(a.im, b.im);

    if has_nan(a) || has_nan(b) {
        log::trace!("same value zero with NaN: {} vs {} => {}", a, b, eq);
    }

    eq
}

/// Test whether two complex numbers are the same value. Unlike
/// [`is_same_value_zero`], `+0` and `-0` are different.
#[inline]
pub fn is_same_value(a: Complex32, b: Complex32) -> bool {
    same_value_f32(a.re, b.re) && same_value_f32(a.im, b.im)
}

/// Component wise IEEE-754 equality. Same as `a == b`.
#[inline]
pub fn is_equal(a: Complex32, b: Complex32) -> bool {
    equal_f32(a.re, b.re) && equal_f32(a.im, b.im)
}

#[inline(always)]
fn has_nan(z: Complex32) -> bool {
    z.re.is_nan() || z.im.is_nan()
}
