//! Fast Fourier Transform (FFT) via recursive radix-2 decimation in
//! frequency (DIF).
//!
//! The transform splits the input into pointwise sum/difference halves,
//! recurses on each, and interleaves the results back, which yields
//! naturally-ordered output without a separate bit-reversal pass. Twiddle
//! tables come from a shared [`RotorCache`] so repeated transforms of the
//! same length never recompute them.
//!
//! Every output element is divided by `N/2`. That divisor is deliberate and
//! unconventional (not the textbook `1/N` or `1/sqrt(N)`); the reference
//! transform in [`crate::dft`] applies the same convention so the two are
//! directly comparable.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::num::{Complex, Float};
use crate::twiddle::RotorCache;

pub use crate::num::{Complex32, Complex64};

/// Errors reported by the FFT entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// The input length is neither 0, 1, nor a power of two. The radix-2
    /// recursion is undefined for such lengths, so they are rejected rather
    /// than silently misaligned.
    NonPowerOfTwoLength,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::NonPowerOfTwoLength => {
                write!(f, "input length must be a power of two")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Recursive decimation-in-frequency FFT engine.
///
/// The engine owns a shared [`RotorCache`]; cloning the `Arc` out via
/// [`DifFft::cache`] lets several engines (or threads) reuse the same rotor
/// tables. Transforms never mutate their input and touch no shared state
/// besides read-only rotor lookups, so `&DifFft` is safe to use from many
/// threads at once.
pub struct DifFft<T: Float> {
    rotors: Arc<RotorCache<T>>,
}

impl<T: Float> Default for DifFft<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DifFft<T> {
    pub fn new() -> Self {
        Self {
            rotors: Arc::new(RotorCache::new()),
        }
    }

    /// Build an engine around an existing cache so rotor tables are shared.
    pub fn with_cache(rotors: Arc<RotorCache<T>>) -> Self {
        Self { rotors }
    }

    /// Handle to the engine's rotor cache.
    pub fn cache(&self) -> Arc<RotorCache<T>> {
        Arc::clone(&self.rotors)
    }

    /// Transform `input` into frequency-domain coefficients in natural bin
    /// order, scaled by `N/2`.
    ///
    /// Lengths 0 and 1 are already their own transform and come back
    /// unchanged (and unscaled). Any other non-power-of-two length is
    /// rejected with [`FftError::NonPowerOfTwoLength`].
    pub fn transform(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        let n = input.len();
        let mut work = input.to_vec();
        if n < 2 {
            return Ok(work);
        }
        if !n.is_power_of_two() {
            return Err(FftError::NonPowerOfTwoLength);
        }
        decimate(&mut work, &self.rotors);
        let norm = T::from_usize(n / 2);
        for value in work.iter_mut() {
            *value = Complex::new(value.re / norm, value.im / norm);
        }
        Ok(work)
    }
}

/// One DIF stage: butterfly into sum/difference halves, recurse, interleave.
///
/// The interleave (`out[2i] = a[i]`, `out[2i+1] = b[i]`) is what makes the
/// output naturally ordered; the bit reversal is implicit in the recursive
/// split. Fresh half-buffers per level keep the recursion free of aliasing.
fn decimate<T: Float>(sample: &mut [Complex<T>], rotors: &RotorCache<T>) {
    if sample.len() < 2 {
        return;
    }
    let half = sample.len() / 2;
    let rotor = rotors.get_rotor(half);

    let mut sum_half = Vec::with_capacity(half);
    let mut diff_half = Vec::with_capacity(half);
    for i in 0..half {
        let a = sample[i];
        let b = sample[i + half];
        sum_half.push(a + b);
        diff_half.push((a - b) * rotor[i]);
    }

    decimate(&mut sum_half, rotors);
    decimate(&mut diff_half, rotors);

    for i in 0..half {
        sample[2 * i] = sum_half[i];
        sample[2 * i + 1] = diff_half[i];
    }
}

/// Process-wide convenience wrapper around [`DifFft::transform`] for `f64`
/// samples. Rotor tables are cached once per process, mirroring repeated
/// calls through a single engine.
#[cfg(feature = "std")]
pub fn fft_transform(samples: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
    static ROTORS: std::sync::OnceLock<Arc<RotorCache<f64>>> = std::sync::OnceLock::new();
    let rotors = Arc::clone(ROTORS.get_or_init(|| Arc::new(RotorCache::new())));
    DifFft::with_cache(rotors).transform(samples)
}


#[cfg(all(feature = "internal-tests", test))]
mod random_tests {
    use super::*;
    use crate::dft::dft_transform;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn agrees_with_reference_on_larger_lengths() {
        let mut rng = StdRng::seed_from_u64(5);
        let fft = DifFft::<f64>::new();
        for n in [64usize, 128] {
            let signal: Vec<Complex64> = (0..n)
                .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
                .collect();
            let fast = fft.transform(&signal).unwrap();
            let slow = dft_transform(&signal);
            for (a, b) in fast.iter().zip(slow.iter()) {
                assert!((a.re - b.re).abs() < 1e-9);
                assert!((a.im - b.im).abs() < 1e-9);
            }
        }
    }
}
