//! Axiom checks over a Cayley table of element indices.
//!
//! A table for `n` elements is a row-major `n × n` slice where
//! `table[a * n + b]` is the index of `a·b`. All scans here are read-only
//! and report the first counterexample in index order.

use crate::{AlgebraError, ClosureViolation, Element, Set};

/// Runs `probe` over `0..n` and returns the first hit in index order.
#[cfg(feature = "parallel")]
fn scan<T, F>(n: usize, probe: F) -> Option<T>
where
    T: Send,
    F: Fn(usize) -> Option<T> + Sync + Send,
{
    use rayon::prelude::*;
    (0..n).into_par_iter().find_map_first(probe)
}

/// Runs `probe` over `0..n` and returns the first hit in index order.
#[cfg(not(feature = "parallel"))]
fn scan<T, F>(n: usize, probe: F) -> Option<T>
where
    F: Fn(usize) -> Option<T>,
{
    (0..n).find_map(probe)
}

/// Builds the Cayley table of `elements` under `product`.
///
/// `product` returns `None` when the table has no entry for a pair.
pub(super) fn tabulate<E, F>(elements: &Set<E>, mut product: F) -> Result<Vec<usize>, AlgebraError>
where
    E: Element,
    F: FnMut(&E, &E) -> Option<E>,
{
    let n = elements.len();
    let mut table = Vec::with_capacity(n * n);
    for a in elements.iter() {
        for b in elements.iter() {
            let violation = |violation| AlgebraError::NotClosed {
                left: Box::new(a.clone()),
                right: Box::new(b.clone()),
                violation,
            };
            let c = product(a, b).ok_or_else(|| violation(ClosureViolation::Missing))?;
            let index = elements
                .position(&c)
                .ok_or_else(|| violation(ClosureViolation::OutsideSet))?;
            table.push(index);
        }
    }
    Ok(table)
}

/// Returns the first element absorbing on both sides.
pub(super) fn identity(n: usize, table: &[usize]) -> Option<usize> {
    scan(n, |e| {
        (0..n)
            .all(|x| table[e * n + x] == x && table[x * n + e] == x)
            .then_some(e)
    })
}

/// Returns the inverse of every element, or the first element without one.
///
/// Once `y` is found to be the inverse of `x`, `x` is recorded as the
/// inverse of `y` without searching again.
pub(super) fn inverses(n: usize, table: &[usize], identity: usize) -> Result<Vec<usize>, usize> {
    let mut inverses: Vec<Option<usize>> = vec![None; n];
    for x in 0..n {
        if inverses[x].is_some() {
            continue;
        }
        let y = (0..n).find(|&y| table[x * n + y] == identity).ok_or(x)?;
        inverses[x] = Some(y);
        if inverses[y].is_none() {
            inverses[y] = Some(x);
        }
    }
    Ok(inverses.into_iter().flatten().collect())
}

/// Returns the first triple `(a, b, c)` with `(a·b)·c != a·(b·c)`.
///
/// This is the dominant cost of validation: `n³` table lookups.
pub(super) fn non_associative(n: usize, table: &[usize]) -> Option<(usize, usize, usize)> {
    scan(n, |a| {
        for b in 0..n {
            let ab = table[a * n + b];
            for c in 0..n {
                if table[ab * n + c] != table[a * n + table[b * n + c]] {
                    return Some((a, b, c));
                }
            }
        }
        None
    })
}

/// Returns the first pair `(a, b)` with `a·b != b·a`.
pub(super) fn non_commuting(n: usize, table: &[usize]) -> Option<(usize, usize)> {
    scan(n, |a| {
        (a + 1..n)
            .find(|&b| table[a * n + b] != table[b * n + a])
            .map(|b| (a, b))
    })
}
