use difft::Complex64;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// (a / b) * b must recover a for random nonzero operands.
#[test]
fn division_multiplication_roundtrip() {
    let mut rng = StdRng::seed_from_u64(97);
    for _ in 0..200 {
        let a = Complex64::new(rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3));
        let mut b = Complex64::new(rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3));
        if b.abs() < 1e-3 {
            b = Complex64::new(b.re + 1.0, b.im - 1.0);
        }
        let back = (a / b) * b;
        let scale = a.abs().max(1.0);
        assert!((back.re - a.re).abs() / scale < 1e-12);
        assert!((back.im - a.im).abs() / scale < 1e-12);
    }
}

#[test]
fn magnitude_matches_pythagoras() {
    let mut rng = StdRng::seed_from_u64(101);
    for _ in 0..200 {
        let c = Complex64::new(rng.gen_range(-1e6..1e6), rng.gen_range(-1e6..1e6));
        let naive = (c.re * c.re + c.im * c.im).sqrt();
        assert!((c.abs() - naive).abs() <= 1e-9 * naive.max(1.0));
    }
}

#[test]
fn power_conventions() {
    // x^0 == 1 for any x, including zero
    assert_eq!(Complex64::zero().powf(0.0), Complex64::one());
    assert_eq!(Complex64::new(-3.0, 7.0).powf(0.0), Complex64::one());
    // 0^k == 0 for nonzero k
    assert_eq!(Complex64::zero().powf(2.0), Complex64::zero());
    assert_eq!(
        Complex64::zero().powc(Complex64::new(0.5, -0.5)),
        Complex64::zero()
    );
}

#[test]
fn pow_agrees_with_square() {
    let mut rng = StdRng::seed_from_u64(103);
    for _ in 0..100 {
        let c = Complex64::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        if c.abs() < 1e-6 {
            continue;
        }
        let squared = c.powf(2.0);
        let manual = c * c;
        let scale = manual.abs().max(1.0);
        assert!((squared.re - manual.re).abs() / scale < 1e-9);
        assert!((squared.im - manual.im).abs() / scale < 1e-9);
    }
}
