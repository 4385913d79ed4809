use difft::{dft_transform, Complex64};

// A pure tone at bin 1 on a non-power-of-two length: all energy lands in
// that bin, scaled by N / (N/2) = 2.
#[test]
fn pure_tone_lands_in_its_bin() {
    let n = 6;
    let signal: Vec<Complex64> = (0..n)
        .map(|i| Complex64::expi(2.0 * std::f64::consts::PI * i as f64 / n as f64))
        .collect();
    let out = dft_transform(&signal);
    assert!((out[1].re - 2.0).abs() < 1e-12);
    assert!(out[1].im.abs() < 1e-12);
    for (k, c) in out.iter().enumerate() {
        if k != 1 {
            assert!(c.abs() < 1e-12, "bin {k} leaked: {:?}", c);
        }
    }
}

#[test]
fn odd_length_constant_signal() {
    let signal = vec![Complex64::new(3.0, 0.0); 7];
    let out = dft_transform(&signal);
    // unnormalized DC is 21; divided by 7/2
    assert!((out[0].re - 6.0).abs() < 1e-12);
    for c in &out[1..] {
        assert!(c.abs() < 1e-11);
    }
}

#[test]
fn base_cases_pass_through() {
    assert!(dft_transform::<f64>(&[]).is_empty());
    let single = [Complex64::new(-1.5, 0.25)];
    assert_eq!(dft_transform(&single), single.to_vec());
}

#[test]
fn dft_does_not_mutate_input() {
    let signal = vec![
        Complex64::new(1.0, 1.0),
        Complex64::new(2.0, -2.0),
        Complex64::new(3.0, 3.0),
    ];
    let snapshot = signal.clone();
    let _ = dft_transform(&signal);
    assert_eq!(signal, snapshot);
}
