// For tests we use std.
#![cfg_attr(not(test), no_std)]

mod assert;
mod f32cmp;
mod wrap;

pub use assert::{is_equal, is_same_value, is_same_value_zero};
pub use f32cmp::{equal_f32, same_value_f32, same_value_zero_f32};
pub use num_complex::Complex32;
pub use wrap::SameValueZero;
