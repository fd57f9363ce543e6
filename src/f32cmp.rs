//! Equality rules for a single `f32` component.
//!
//! * equal - IEEE-754 `==`. NaN is never equal, `+0 == -0`.
//! * same value - NaN equals NaN, `+0 != -0`.
//! * same value zero - NaN equals NaN, `+0 == -0`.
//!

/// SameValueZero for one component.
#[inline]
pub fn same_value_zero_f32(x: f32, y: f32) -> bool {
    if x.is_nan() {
        return y.is_nan();
    }
    // y being NaN makes this false.
    x == y
}

/// SameValue for one component. Signed zeros are told apart.
#[inline]
pub fn same_value_f32(x: f32, y: f32) -> bool {
    if x == y {
        return x != 0.0 || x.is_sign_negative() == y.is_sign_negative();
    }
    x.is_nan() && y.is_nan()
}

#[inline]
pub fn equal_f32(x: f32, y: f32) -> bool {
    x == y
}
