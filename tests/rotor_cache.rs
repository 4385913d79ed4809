use std::sync::{Arc, Barrier};
use std::thread;

use difft::{Complex64, RotorCache};

// Same length, same cache: every request must observe one shared table.
#[test]
fn repeated_requests_are_idempotent() {
    let cache = RotorCache::<f64>::new();
    let first = cache.get_rotor(16);
    for _ in 0..4 {
        let again = cache.get_rotor(16);
        assert!(Arc::ptr_eq(&first, &again));
    }
    assert_eq!(cache.len(), 1);
}

// Separate caches still compute value-equal tables.
#[test]
fn tables_are_value_stable_across_caches() {
    let a = RotorCache::<f64>::new().get_rotor(8);
    let b = RotorCache::<f64>::new().get_rotor(8);
    assert_eq!(a.as_ref(), b.as_ref());
}

#[test]
fn rotor_entries_match_the_closed_form() {
    let cache = RotorCache::<f64>::new();
    let len = 32;
    let rotor = cache.get_rotor(len);
    for (i, w) in rotor.iter().enumerate() {
        let expected = Complex64::expi(-std::f64::consts::PI * i as f64 / len as f64);
        assert!((w.re - expected.re).abs() < 1e-12);
        assert!((w.im - expected.im).abs() < 1e-12);
        // rotors live on the unit circle
        assert!((w.abs() - 1.0).abs() < 1e-12);
    }
}

// Concurrent first requests for a cold length: the losers must observe the
// winner's table, never a second computation.
#[test]
fn concurrent_cold_requests_compute_once() {
    let cache = Arc::new(RotorCache::<f64>::new());
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache.get_rotor(64)
            })
        })
        .collect();

    let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for table in &tables[1..] {
        assert!(Arc::ptr_eq(&tables[0], table));
    }
    assert_eq!(cache.len(), 1);
}

// Distinct lengths get distinct entries; none of them evict the others.
#[test]
fn cache_only_grows() {
    let cache = RotorCache::<f64>::new();
    assert!(cache.is_empty());
    let four = cache.get_rotor(4);
    cache.get_rotor(8);
    cache.get_rotor(2);
    assert_eq!(cache.len(), 3);
    assert!(Arc::ptr_eq(&four, &cache.get_rotor(4)));
    assert_eq!(cache.len(), 3);
}
