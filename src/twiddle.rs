//! Shared twiddle-factor ("rotor") cache.
//!
//! The decimation step multiplies the difference half by the roots of unity
//! `rotor[i] = exp(-i*pi/L)^i` for a half-length `L`. Those tables are pure
//! functions of `L`, so a [`RotorCache`] computes each one once and hands out
//! shared `Arc` slices afterwards. Entries are never evicted or mutated; the
//! key space is bounded by the set of transform lengths the caller uses.

use alloc::sync::Arc;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::num::{Complex, Float};

type RotorTable<T> = Arc<[Complex<T>]>;

/// Memoized rotor tables keyed by half-length.
///
/// With `std` the map is guarded by an `RwLock` using double-checked
/// locking: lookups of cached lengths only take the read lock, and a miss
/// re-checks under the write lock so concurrent first requests for the same
/// length compute the table exactly once. Without `std` the cache is a
/// single-threaded `RefCell` with the same interface.
pub struct RotorCache<T: Float> {
    #[cfg(feature = "std")]
    table: std::sync::RwLock<HashMap<usize, RotorTable<T>>>,
    #[cfg(not(feature = "std"))]
    table: core::cell::RefCell<HashMap<usize, RotorTable<T>>>,
}

impl<T: Float> Default for RotorCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RotorCache<T> {
    pub fn new() -> Self {
        #[cfg(feature = "std")]
        {
            Self {
                table: std::sync::RwLock::new(HashMap::new()),
            }
        }
        #[cfg(not(feature = "std"))]
        {
            Self {
                table: core::cell::RefCell::new(HashMap::new()),
            }
        }
    }

    /// Rotor table for half-length `len`: `exp(-i*pi/len)^i` for
    /// `i in 0..len`. Every call with the same `len` returns the same
    /// shared, immutable table.
    #[cfg(feature = "std")]
    pub fn get_rotor(&self, len: usize) -> RotorTable<T> {
        {
            let table = read_guard(&self.table);
            if let Some(rotor) = table.get(&len) {
                return Arc::clone(rotor);
            }
        }
        let mut table = write_guard(&self.table);
        // another thread may have won the race while we waited
        if let Some(rotor) = table.get(&len) {
            return Arc::clone(rotor);
        }
        #[cfg(feature = "verbose-logging")]
        log::trace!("rotor cache miss, generating table for half-length {len}");
        let rotor = generate_rotor(len);
        table.insert(len, Arc::clone(&rotor));
        rotor
    }

    #[cfg(not(feature = "std"))]
    pub fn get_rotor(&self, len: usize) -> RotorTable<T> {
        let mut table = self.table.borrow_mut();
        if let Some(rotor) = table.get(&len) {
            return Arc::clone(rotor);
        }
        #[cfg(feature = "verbose-logging")]
        log::trace!("rotor cache miss, generating table for half-length {len}");
        let rotor = generate_rotor(len);
        table.insert(len, Arc::clone(&rotor));
        rotor
    }

    /// Number of distinct half-lengths cached so far.
    pub fn len(&self) -> usize {
        #[cfg(feature = "std")]
        {
            read_guard(&self.table).len()
        }
        #[cfg(not(feature = "std"))]
        {
            self.table.borrow().len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A poisoned lock cannot leave a half-built entry behind (tables are built
// before insertion), so recover the guard instead of propagating the panic.
#[cfg(feature = "std")]
fn read_guard<'a, T: Float>(
    lock: &'a std::sync::RwLock<HashMap<usize, RotorTable<T>>>,
) -> std::sync::RwLockReadGuard<'a, HashMap<usize, RotorTable<T>>> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(feature = "std")]
fn write_guard<'a, T: Float>(
    lock: &'a std::sync::RwLock<HashMap<usize, RotorTable<T>>>,
) -> std::sync::RwLockWriteGuard<'a, HashMap<usize, RotorTable<T>>> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn generate_rotor<T: Float>(len: usize) -> RotorTable<T> {
    let base = Complex::expi(-T::pi() / T::from_usize(len));
    let mut rotor = Vec::with_capacity(len);
    for i in 0..len {
        rotor.push(base.powf(T::from_usize(i)));
    }
    Arc::from(rotor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;

    #[test]
    fn rotor_values_are_roots_of_unity() {
        let cache = RotorCache::<f64>::new();
        let rotor = cache.get_rotor(4);
        assert_eq!(rotor.len(), 4);
        for (i, w) in rotor.iter().enumerate() {
            let expected = Complex64::expi(-core::f64::consts::PI * i as f64 / 4.0);
            assert!((w.re - expected.re).abs() < 1e-12);
            assert!((w.im - expected.im).abs() < 1e-12);
        }
    }

    #[test]
    fn repeated_requests_share_one_table() {
        let cache = RotorCache::<f64>::new();
        let first = cache.get_rotor(8);
        let second = cache.get_rotor(8);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }
}
