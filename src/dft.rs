//! Direct Discrete Fourier Transform, used as a correctness oracle.
//!
//! `X[k] = sum_n x[n] * exp(-2*pi*i*k*n/N)` by explicit summation, O(N^2).
//! Accepts any length, including non-powers-of-two the FFT path rejects.
//! Output is divided by `N/2`, the same deliberate convention as
//! [`crate::fft`], so the two transforms agree element-wise on shared
//! lengths.

use alloc::vec::Vec;

use crate::num::{Complex, Float};

/// Direct transform of `samples`, defined for any length >= 0.
///
/// Lengths 0 and 1 come back unchanged and unscaled, matching the FFT base
/// case. Intended for validation on small inputs, not production-size
/// signals.
pub fn dft_transform<T: Float>(samples: &[Complex<T>]) -> Vec<Complex<T>> {
    let n = samples.len();
    if n < 2 {
        return samples.to_vec();
    }
    let step = -(T::from_f32(2.0) * T::pi()) / T::from_usize(n);
    let norm = T::from_usize(n) / T::from_f32(2.0);
    let mut out = Vec::with_capacity(n);
    for k in 0..n {
        let mut acc = Complex::zero();
        for (i, &sample) in samples.iter().enumerate() {
            let angle = step * T::from_usize(k) * T::from_usize(i);
            acc = acc + sample * Complex::expi(angle);
        }
        out.push(Complex::new(acc.re / norm, acc.im / norm));
    }
    out
}
