//! # difft - decimation-in-frequency spectral transforms
//!
//! A small spectral transform library: a recursive radix-2
//! decimation-in-frequency FFT, a brute-force DFT used as a correctness
//! oracle, and the complex arithmetic both depend on.
//!
//! ## Highlights
//!
//! - **Natural-order output**: the recursive split/interleave structure
//!   absorbs the bit reversal, no separate reordering pass.
//! - **Shared twiddle cache**: rotor tables are computed once per length
//!   and reused across calls and threads ([`RotorCache`]).
//! - **Overflow-aware arithmetic**: Smith's division and a scaled
//!   magnitude keep intermediates finite near the float range limits.
//! - **`no_std` + `alloc`**: float math goes through `libm`; the `std`
//!   feature (default) adds the thread-safe cache and the process-wide
//!   [`fft_transform`] wrapper.
//!
//! ## Normalization
//!
//! Both transforms divide every output element by `N/2`. This is not the
//! textbook `1/N` or `1/sqrt(N)` scaling; it is preserved deliberately so
//! FFT and DFT output stay directly comparable with existing consumers of
//! this convention.
//!
//! ## Cargo features
//!
//! - `std` (default): thread-safe rotor cache, `std::error::Error` impls,
//!   the process-wide [`fft_transform`] wrapper
//! - `internal-tests`: property-based test modules (`proptest`, `rand`)
//! - `verbose-logging`: `log::trace!` on rotor-cache misses
//!
//! ## Example
//!
//! ```
//! use difft::{Complex64, DifFft};
//!
//! let impulse = [
//!     Complex64::new(1.0, 0.0),
//!     Complex64::zero(),
//!     Complex64::zero(),
//!     Complex64::zero(),
//! ];
//! let fft = DifFft::<f64>::new();
//! let spectrum = fft.transform(&impulse)?;
//! // flat spectrum, scaled by N/2 = 2
//! assert!((spectrum[0].re - 0.5).abs() < 1e-12);
//! # Ok::<(), difft::FftError>(())
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0
//! - MIT license
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Complex value type and the float trait the transforms are generic over.
pub mod num;

/// Memoized twiddle-factor (rotor) tables shared across transforms.
pub mod twiddle;

/// Recursive radix-2 decimation-in-frequency FFT.
pub mod fft;

/// Direct O(N^2) reference DFT.
pub mod dft;

pub use dft::dft_transform;
pub use fft::{DifFft, FftError};
#[cfg(feature = "std")]
pub use fft::fft_transform;
pub use num::{Complex, Complex32, Complex64, Float};
pub use twiddle::RotorCache;
