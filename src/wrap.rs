use num_complex::Complex32;

use crate::assert::is_same_value_zero;
use crate::f32cmp::same_value_zero_f32;

/// Wrapper that makes `==` follow SameValueZero.
///
/// Implemented for `f32` and [`Complex32`]. SameValueZero is reflexive, so unlike
/// the bare float types the wrapper is also `Eq`.
#[derive(Debug, Clone, Copy)]
pub struct SameValueZero<T>(pub T);

impl PartialEq for SameValueZero<f32> {
    fn eq(&self, other: &Self) -> bool {
        same_value_zero_f32(self.0, other.0)
    }
}

impl PartialEq<f32> for SameValueZero<f32> {
    fn eq(&self, other: &f32) -> bool {
        same_value_zero_f32(self.0, *other)
    }
}

impl PartialEq<SameValueZero<f32>> for f32 {
    fn eq(&self, other: &SameValueZero<f32>) -> bool {
        same_value_zero_f32(*self, other.0)
    }
}

impl Eq for SameValueZero<f32> {}

impl PartialEq for SameValueZero<Complex32> {
    fn eq(&self, other: &Self) -> bool {
        is_same_value_zero(self.0, other.0)
    }
}

impl PartialEq<Complex32> for SameValueZero<Complex32> {
    fn eq(&self, other: &Complex32) -> bool {
        is_same_value_zero(self.0, *other)
    }
}

impl PartialEq<SameValueZero<Complex32>> for Complex32 {
    fn eq(&self, other: &SameValueZero<Complex32>) -> bool {
        is_same_value_zero(*self, other.0)
    }
}

impl Eq for SameValueZero<Complex32> {}

impl<T> From<T> for SameValueZero<T> {
    fn from(v: T) -> Self {
        SameValueZero(v)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SameValueZero<f32> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SameValueZero({=f32})", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SameValueZero<Complex32> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SameValueZero({=f32} + {=f32}i)", self.0.re, self.0.im)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const NAN: f32 = f32::NAN;

    #[test]
    fn test_wrap_f32() {
        assert_eq!(SameValueZero(NAN), NAN);
        assert_eq!(-0.0_f32, SameValueZero(0.0_f32));
        assert_eq!(SameValueZero(1.0_f32), SameValueZero(1.0_f32));
        assert_ne!(SameValueZero(1.0_f32), NAN);
        assert_ne!(SameValueZero(f32::INFINITY), f32::NEG_INFINITY);
    }

    #[test]
    fn test_wrap_complex() {
        let z = Complex32::new(NAN, 3.0);
        assert_eq!(SameValueZero(z), z);
        assert_eq!(z, SameValueZero(Complex32::new(NAN, 3.0)));
        assert_eq!(
            SameValueZero(Complex32::new(0.0, -0.0)),
            SameValueZero(Complex32::new(-0.0, 0.0))
        );
        assert_ne!(SameValueZero(Complex32::new(5.0, 3.0)), z);
    }

    #[test]
    fn test_wrap_contains() {
        let list = [1.0, NAN, -0.0].map(SameValueZero);
        assert!(list.contains(&SameValueZero(NAN)));
        assert!(list.contains(&SameValueZero(0.0)));
        assert!(!list.contains(&SameValueZero(2.0)));

        let list: [SameValueZero<Complex32>; 2] =
            [Complex32::new(NAN, 0.0).into(), Complex32::new(1.0, 2.0).into()];
        assert!(list.contains(&SameValueZero(Complex32::new(NAN, -0.0))));
        assert!(!list.contains(&SameValueZero(Complex32::new(NAN, 1.0))));
    }
}
