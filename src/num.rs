//! Complex arithmetic for the transform routines.
//!
//! [`Complex`] is an immutable value type: every operation returns a new
//! value. Division uses Smith's algorithm and [`Complex::abs`] uses a scaled
//! formula, so both stay finite where the naive textbook expressions would
//! overflow an intermediate. All float math goes through `libm`, keeping the
//! type usable without `std`.

use core::f32::consts::PI as PI32;

// Minimal float trait for the generic transforms (no_std, libm-backed)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f32(x: f32) -> Self;
    /// Lossy conversion from `usize`. Exact for every length a transform of
    /// this size could realistically have in memory.
    fn from_usize(x: usize) -> Self;
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn ln(self) -> Self;
    fn exp(self) -> Self;
    fn powf(self, exp: Self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn pi() -> Self;
    fn is_infinite(self) -> bool;
    fn infinity() -> Self;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x
    }
    fn from_usize(x: usize) -> Self {
        x as f32
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn ln(self) -> Self {
        libm::logf(self)
    }
    fn exp(self) -> Self {
        libm::expf(self)
    }
    fn powf(self, exp: Self) -> Self {
        libm::powf(self, exp)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2f(self, other)
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincosf(self)
    }
    fn pi() -> Self {
        PI32
    }
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
    fn infinity() -> Self {
        f32::INFINITY
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f32(x: f32) -> Self {
        x as f64
    }
    fn from_usize(x: usize) -> Self {
        x as f64
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn ln(self) -> Self {
        libm::log(self)
    }
    fn exp(self) -> Self {
        libm::exp(self)
    }
    fn powf(self, exp: Self) -> Self {
        libm::pow(self, exp)
    }
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
    fn infinity() -> Self {
        f64::INFINITY
    }
}

/// An immutable complex value. Equality is exact component-wise comparison;
/// it exists for the zero/one sentinel checks in [`Complex::powc`] and is
/// brittle for computed values.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    pub fn one() -> Self {
        Self {
            re: T::one(),
            im: T::zero(),
        }
    }
    /// The imaginary unit.
    pub fn i() -> Self {
        Self {
            re: T::zero(),
            im: T::one(),
        }
    }
    /// Unit complex number `exp(i*theta)` on the unit circle.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Smith's division: order the ratio by the larger component of the
    /// divisor so no intermediate exceeds the result's own magnitude range.
    /// Division by complex zero yields IEEE infinities/NaNs rather than an
    /// error.
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, other: Self) -> Self {
        if other.im.abs() < other.re.abs() {
            let ratio = other.im / other.re;
            let denom = other.re + other.im * ratio;
            Self {
                re: (self.re + self.im * ratio) / denom,
                im: (self.im - self.re * ratio) / denom,
            }
        } else {
            let ratio = other.re / other.im;
            let denom = other.im + other.re * ratio;
            Self {
                re: (self.re * ratio + self.im) / denom,
                im: (self.im * ratio - self.re) / denom,
            }
        }
    }

    /// Magnitude, computed by factoring out the larger component before the
    /// square root so `sqrt(re^2 + im^2)` never overflows an intermediate.
    /// Returns `+inf` if either component is infinite.
    pub fn abs(self) -> T {
        if self.re.is_infinite() || self.im.is_infinite() {
            return T::infinity();
        }
        let re = self.re.abs();
        let im = self.im.abs();
        if re > im {
            let ratio = im / re;
            re * (T::one() + ratio * ratio).sqrt()
        } else if im == T::zero() {
            // both components zero
            re
        } else {
            let ratio = re / im;
            im * (T::one() + ratio * ratio).sqrt()
        }
    }

    /// Complex-to-complex exponentiation via the polar identity
    /// `base^exp = exp(exp * log(base))`.
    ///
    /// The zero-exponent check short-circuits before any `log(0)` can be
    /// evaluated, so `x^0 == 1` for every `x` including zero, and
    /// `0^exp == 0` for nonzero `exp`.
    pub fn powc(self, exp: Self) -> Self {
        if exp == Self::zero() {
            return Self::one();
        }
        if self == Self::zero() {
            return Self::zero();
        }
        let rho = self.abs();
        let theta = self.im.atan2(self.re);
        let angle = exp.re * theta + exp.im * rho.ln();
        let scale = rho.powf(exp.re) * (-exp.im * theta).exp();
        Self {
            re: scale * angle.cos(),
            im: scale * angle.sin(),
        }
    }

    /// Exponentiation by a real power.
    pub fn powf(self, exp: T) -> Self {
        self.powc(Self::from(exp))
    }
}

impl<T: Float> From<T> for Complex<T> {
    /// A bare real value, imaginary part zero.
    fn from(re: T) -> Self {
        Self { re, im: T::zero() }
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Complex::<T>::add(self, other)
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Complex::<T>::sub(self, other)
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Complex::<T>::mul(self, other)
    }
}

impl<T: Float> core::ops::Div for Complex<T> {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        Complex::<T>::div(self, other)
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;


#[cfg(all(feature = "internal-tests", test))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn nonzero() -> impl Strategy<Value = Complex64> {
        (-1e6f64..1e6, -1e6f64..1e6)
            .prop_map(|(re, im)| Complex64::new(re, im))
            .prop_filter("nonzero", |c| c.abs() > 1e-6)
    }

    proptest! {
        #[test]
        fn div_mul_roundtrip(a in nonzero(), b in nonzero()) {
            let back = (a / b) * b;
            let scale = if a.abs() > 1.0 { a.abs() } else { 1.0 };
            prop_assert!((back.re - a.re).abs() / scale < 1e-9);
            prop_assert!((back.im - a.im).abs() / scale < 1e-9);
        }

        #[test]
        fn abs_matches_naive_in_safe_range(a in nonzero()) {
            let naive = (a.re * a.re + a.im * a.im).sqrt();
            prop_assert!((a.abs() - naive).abs() / naive < 1e-12);
        }
    }
}
