//! Concrete groups used for demos, tests and benches.
//!
//! Each generator only produces an element set and an operation; validation
//! is done by [`Group`] like for any user supplied table.

use itertools::Itertools;

use crate::{AlgebraError, Group, Set};

/// Records the primes < 64.
const PRIME_BIT_MASK: u64 = 1 << 2
    | 1 << 3
    | 1 << 5
    | 1 << 7
    | 1 << 11
    | 1 << 13
    | 1 << 17
    | 1 << 19
    | 1 << 23
    | 1 << 29
    | 1 << 31
    | 1 << 37
    | 1 << 41
    | 1 << 43
    | 1 << 47
    | 1 << 53
    | 1 << 59
    | 1 << 61;

/// Checks whether `value` is prime by trial division.
///
/// Moduli of groups that can be tabulated are small, so this is never slow.
pub fn is_prime(value: u64) -> bool {
    if value < 64 {
        return (PRIME_BIT_MASK & (1 << value)) != 0;
    }
    if value & 1 == 0 {
        return false;
    }
    (3..)
        .step_by(2)
        .take_while(|d| d * d <= value)
        .all(|d| value % d != 0)
}

/// The additive group of integers modulo `n`.
///
/// # Errors
///
/// [`AlgebraError::NoIdentity`] for `n = 0`, whose element set is empty.
pub fn cyclic(n: u64) -> Result<Group<u64>, AlgebraError> {
    Group::from_fn((0..n).collect(), |a, b| (a + b) % n)
}

/// The multiplicative group of integers modulo a prime `p`.
///
/// # Errors
///
/// [`AlgebraError::NotPrime`] if `p` is not prime.
pub fn multiplicative(p: u64) -> Result<Group<u64>, AlgebraError> {
    if !is_prime(p) {
        return Err(AlgebraError::NotPrime { modulus: p });
    }
    Group::from_fn((1..p).collect(), |a, b| a * b % p)
}

/// An element of a dihedral group: a rotation `rᵏ` or a reflection `rᵏs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dihedral {
    /// Rotation by `k` steps.
    Rotation(u64),
    /// Reflection `rᵏs`.
    Reflection(u64),
}

/// The dihedral group of order `2n`, the symmetries of a regular `n`-gon.
///
/// Uses `s·r = r⁻¹·s` and `s² = e`.
///
/// # Errors
///
/// [`AlgebraError::NoIdentity`] for `n = 0`.
pub fn dihedral(n: u64) -> Result<Group<Dihedral>, AlgebraError> {
    use Dihedral::{Reflection, Rotation};

    let elements: Set<Dihedral> = (0..n).map(Rotation).chain((0..n).map(Reflection)).collect();
    Group::from_fn(elements, |a, b| match (*a, *b) {
        (Rotation(i), Rotation(j)) => Rotation((i + j) % n),
        (Rotation(i), Reflection(j)) => Reflection((i + j) % n),
        (Reflection(i), Rotation(j)) => Reflection((i + n - j) % n),
        (Reflection(i), Reflection(j)) => Rotation((i + n - j) % n),
    })
}

/// The symmetric group on `0..n`: all permutations, written as images of
/// `0..n`, under composition `(σ·τ)(i) = σ(τ(i))`.
///
/// The group has `n!` elements, so only small `n` are practical.
///
/// # Errors
///
/// Never.
pub fn symmetric(n: usize) -> Result<Group<Vec<usize>>, AlgebraError> {
    let elements: Set<Vec<usize>> = (0..n).permutations(n).collect();
    Group::from_fn(elements, |sigma, tau| tau.iter().map(|&i| sigma[i]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..100).filter(|&p| is_prime(p)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97]
        );
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
    }

    #[test]
    fn test_orders() {
        assert_eq!(cyclic(7).unwrap().order(), 7);
        assert_eq!(multiplicative(7).unwrap().order(), 6);
        assert_eq!(dihedral(4).unwrap().order(), 8);
        assert_eq!(symmetric(3).unwrap().order(), 6);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(matches!(cyclic(0), Err(AlgebraError::NoIdentity)));
        assert!(matches!(dihedral(0), Err(AlgebraError::NoIdentity)));
        assert!(matches!(multiplicative(8), Err(AlgebraError::NotPrime { modulus: 8 })));
    }

    #[test]
    fn test_identities() {
        assert_eq!(*cyclic(5).unwrap().identity(), 0);
        assert_eq!(*multiplicative(5).unwrap().identity(), 1);
        assert_eq!(*dihedral(5).unwrap().identity(), Dihedral::Rotation(0));
        assert_eq!(*symmetric(3).unwrap().identity(), vec![0, 1, 2]);
    }
}
