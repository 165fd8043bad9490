use std::fmt::{self, Display, Formatter};

/// The default multiplier for [`LinearHash`].
pub const DEFAULT_A: i32 = 1;
/// The default offset for [`LinearHash`].
pub const DEFAULT_B: i32 = 0;
/// The default modulus for [`LinearHash`], a large prime.
pub const DEFAULT_P: i32 = 1_000_000_007;

/// A universal-style hash function `h(key) = ((a * key + b) mod p) mod cap`.
///
/// With the default parameters (`a = 1`, `b = 0`) this reduces to `key mod p mod cap`, which
/// leaves small sequential keys in order rather than scrambling them. The parameters are part of
/// the persisted format, so a table loaded from disk hashes exactly like the one that saved it.
///
/// The parameters are 32-bit so they fit the binary header. All arithmetic is carried out in
/// `i64` with euclidean remainders, so negative keys land in a valid bucket instead of producing a
/// negative index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinearHash {
    pub(crate) a: i32,
    pub(crate) b: i32,
    pub(crate) p: i32,
}

impl LinearHash {
    /// Creates a new hash function with the provided parameters, or None if `p` isn't positive.
    pub const fn new(a: i32, b: i32, p: i32) -> Option<LinearHash> {
        if p <= 0 {
            return None;
        }

        Some(LinearHash { a, b, p })
    }

    /// Returns the multiplier `a`.
    pub const fn a(&self) -> i32 {
        self.a
    }

    /// Returns the offset `b`.
    pub const fn b(&self) -> i32 {
        self.b
    }

    /// Returns the modulus `p`.
    pub const fn p(&self) -> i32 {
        self.p
    }

    /// Computes the primary index of `key` for a table with capacity `cap`.
    ///
    /// # Panics
    /// Panics if `cap` is 0. Tables never have a capacity below [`MIN_CAP`](super::MIN_CAP).
    pub fn index(&self, key: i32, cap: usize) -> usize {
        // Two 32-bit factors plus a 32-bit offset can't overflow 64 bits.
        let mixed = self.a as i64 * key as i64 + self.b as i64;
        let reduced = mixed.rem_euclid(self.p as i64);
        (reduced as u64 % cap as u64) as usize
    }

    /// Computes the double-hashing step of `key` for a table with capacity `cap`. The step is
    /// always in `1..cap`.
    ///
    /// # Panics
    /// Panics if `cap` is less than 2.
    pub fn step(&self, key: i32, cap: usize) -> usize {
        1 + (key as i64).rem_euclid(cap as i64 - 1) as usize
    }

    /// Computes the index examined on the `attempt`th probe for `key`.
    pub fn probe(&self, key: i32, attempt: usize, cap: usize) -> usize {
        let start = self.index(key, cap) as u128;
        let step = self.step(key, cap) as u128;
        ((start + attempt as u128 * step) % cap as u128) as usize
    }
}

impl Default for LinearHash {
    fn default() -> Self {
        LinearHash {
            a: DEFAULT_A,
            b: DEFAULT_B,
            p: DEFAULT_P,
        }
    }
}

impl Display for LinearHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(({} * k + {}) mod {})", self.a, self.b, self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_modulo() {
        let hash = LinearHash::default();
        for key in 0..64 {
            assert_eq!(
                hash.index(key, 16), key as usize % 16,
                "The default parameters should reduce to key mod capacity for small keys."
            );
        }
    }

    #[test]
    fn test_negative_keys() {
        let hash = LinearHash::default();
        assert_eq!(
            hash.index(-1, 16), (DEFAULT_P as usize - 1) % 16,
            "Negative keys should wrap modulo p before being reduced to an index."
        );
        assert!(hash.step(-7, 16) >= 1 && hash.step(-7, 16) < 16);
        assert_eq!(
            hash.index(i32::MIN, 7),
            (i32::MIN as i64).rem_euclid(DEFAULT_P as i64) as usize % 7,
        );
    }

    #[test]
    fn test_probe_sequence() {
        let hash = LinearHash::default();
        // h1(4) = 0, h2(4) = 1 + 4 mod 3 = 2 at capacity 4.
        let seq: Vec<_> = (0..4).map(|i| hash.probe(4, i, 4)).collect();
        assert_eq!(seq, [0, 2, 0, 2], "Probes should advance by the step, wrapping at capacity.");
    }

    #[test]
    fn test_invalid_modulus() {
        assert!(LinearHash::new(1, 0, 0).is_none());
        assert!(LinearHash::new(1, 0, -3).is_none());
        assert_eq!(LinearHash::new(1, 0, DEFAULT_P), Some(LinearHash::default()));
    }
}
