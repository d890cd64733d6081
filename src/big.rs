//! Extended precision complex numbers for the coefficient tableau.
//!
//! The binary floats come from [dashu_float]. Every value carries its own
//! precision, and an operation rounds to the larger precision of its operands,
//! so builds at different precisions never share any state.

use core::convert::TryFrom;
use dashu_float::round::mode::HalfEven;
use dashu_float::FBig;
use num_complex::Complex64;
use std::fmt;

/// Mantissa bits used when no precision is given
pub const DEFAULT_PRECISION: u32 = 256;

/// Binary float with per-value precision and round-half-to-even arithmetic
pub type BigFloat = FBig<HalfEven, 2>;

/// Lift a double to `precision` bits, `None` if it is not finite
pub fn lift(value: f64, precision: u32) -> Option<BigFloat> {
    let exact = BigFloat::try_from(value).ok()?;
    Some(exact.with_precision(precision as usize).value())
}

#[inline]
fn is_zero(x: &BigFloat) -> bool {
    x.repr().is_zero()
}

/// A complex number whose parts are [BigFloat]s.
///
/// The arithmetic is exposed as named methods taking references, so that no
/// intermediate value is cloned implicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigComplex {
    re: BigFloat,
    im: BigFloat,
}

impl BigComplex {
    #[inline]
    pub fn zero(precision: u32) -> Self {
        let zero = BigFloat::ZERO.with_precision(precision as usize).value();
        BigComplex { re: zero.clone(), im: zero }
    }

    #[inline]
    pub fn one(precision: u32) -> Self {
        let p = precision as usize;
        BigComplex { re: BigFloat::ONE.with_precision(p).value(), im: BigFloat::ZERO.with_precision(p).value() }
    }

    /// Lift a double precision complex number, `None` if any part is not finite
    pub fn from_complex(value: Complex64, precision: u32) -> Option<Self> {
        Some(BigComplex { re: lift(value.re, precision)?, im: lift(value.im, precision)? })
    }

    /// Round both parts to the nearest double
    #[inline]
    pub fn to_complex(&self) -> Complex64 {
        Complex64::new(self.re.to_f64().value(), self.im.to_f64().value())
    }

    #[inline]
    pub fn re(&self) -> &BigFloat {
        &self.re
    }

    #[inline]
    pub fn im(&self) -> &BigFloat {
        &self.im
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero(&self.re) && is_zero(&self.im)
    }

    #[inline]
    pub fn conj(&self) -> Self {
        BigComplex { re: self.re.clone(), im: -self.im.clone() }
    }

    pub fn add(&self, rhs: &Self) -> Self {
        BigComplex { re: &self.re + &rhs.re, im: &self.im + &rhs.im }
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        BigComplex { re: &self.re - &rhs.re, im: &self.im - &rhs.im }
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        BigComplex {
            re: &self.re * &rhs.re - &self.im * &rhs.im,
            im: &self.re * &rhs.im + &self.im * &rhs.re,
        }
    }

    /// Squared magnitude `re^2 + im^2`
    pub fn norm_sqr(&self) -> BigFloat {
        &self.re * &self.re + &self.im * &self.im
    }

    /// `conj(z) / |z|^2`, or `None` when `|z|^2` is zero
    pub fn checked_inverse(&self) -> Option<Self> {
        let d = self.norm_sqr();
        if is_zero(&d) {
            return None;
        }
        Some(BigComplex { re: &self.re / &d, im: -(&self.im / &d) })
    }

    /// The quotient `self / rhs`, or `None` when `rhs` is zero.
    ///
    /// It is evaluated as `self * conj(rhs) / |rhs|^2`, the same value as
    /// `self * rhs.checked_inverse()` with one rounding fewer, so that exact
    /// quotients like `z / z` come out exact.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        let d = rhs.norm_sqr();
        if is_zero(&d) {
            return None;
        }
        let n = self.mul(&rhs.conj());
        Some(BigComplex { re: &n.re / &d, im: &n.im / &d })
    }
}

impl fmt::Display for BigComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_complex(), f)
    }
}
