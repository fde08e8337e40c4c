//! Finite groups given by an element set and a product table.

use std::collections::HashMap;
use std::fmt;

use itertools::iproduct;
use log::{debug, trace};
use once_cell::sync::OnceCell;

use crate::{AlgebraError, ClosureViolation, Element, Set};

mod axioms;
mod compare;
mod subgroup;

pub use compare::Operand;

/// A finite group.
///
/// A `Group` can only be obtained through a constructor that checks, in
/// order, closure, identity, inverses and associativity, and stops at the
/// first violated axiom. After that the group is immutable; only the lazily
/// computed `abelian` flag is filled in later.
///
/// Elements are plain values. All products, inverses and derived structures
/// are computed through the group that owns the elements.
///
/// The identity is the first element found to absorb on both sides, and
/// inverses are the first partner found to multiply to it. For a valid group
/// both are unique, which the engine relies on without re-proving it.
#[derive(Clone)]
pub struct Group<E> {
    elements: Set<E>,
    /// Row-major Cayley table over positions in `elements`.
    table: Vec<usize>,
    identity: usize,
    inverses: Vec<usize>,
    abelian: OnceCell<bool>,
}

impl<E: Element> Group<E> {
    /// Creates a group from its elements and a product table.
    ///
    /// # Errors
    ///
    /// The first violated axiom, in this order:
    /// * [`AlgebraError::NotClosed`] if the table has an entry outside
    ///   `elements × elements`, a product outside `elements`, or misses a pair.
    /// * [`AlgebraError::NoIdentity`] if no element absorbs on both sides.
    /// * [`AlgebraError::NoInverse`] if some element has no inverse.
    /// * [`AlgebraError::NotAssociative`] if some triple does not associate.
    pub fn new(elements: Set<E>, products: &HashMap<(E, E), E>) -> Result<Self, AlgebraError> {
        for ((a, b), c) in products {
            if !elements.contains(a) || !elements.contains(b) {
                return Err(AlgebraError::NotClosed {
                    left: Box::new(a.clone()),
                    right: Box::new(b.clone()),
                    violation: ClosureViolation::Extraneous,
                });
            }
            if !elements.contains(c) {
                return Err(AlgebraError::NotClosed {
                    left: Box::new(a.clone()),
                    right: Box::new(b.clone()),
                    violation: ClosureViolation::OutsideSet,
                });
            }
        }
        let table = axioms::tabulate(&elements, |a, b| products.get(&(a.clone(), b.clone())).cloned())?;
        Self::from_table(elements, table)
    }

    /// Creates a group from its elements and the operation as a closure.
    ///
    /// # Errors
    ///
    /// Same as [`Group::new`]; a missing pair cannot occur.
    pub fn from_fn<F>(elements: Set<E>, op: F) -> Result<Self, AlgebraError>
    where
        F: Fn(&E, &E) -> E,
    {
        let table = axioms::tabulate(&elements, |a, b| Some(op(a, b)))?;
        Self::from_table(elements, table)
    }

    /// Runs the identity, inverse and associativity checks on a closed table.
    pub(crate) fn from_table(elements: Set<E>, table: Vec<usize>) -> Result<Self, AlgebraError> {
        let n = elements.len();
        debug_assert_eq!(table.len(), n * n);

        trace!("searching identity among {n} elements");
        let identity = axioms::identity(n, &table).ok_or(AlgebraError::NoIdentity)?;

        trace!("searching inverses");
        let inverses = axioms::inverses(n, &table, identity).map_err(|x| AlgebraError::NoInverse {
            element: Box::new(elements.at(x).clone()),
        })?;

        trace!("checking associativity of {} triples", n * n * n);
        if let Some((a, b, c)) = axioms::non_associative(n, &table) {
            return Err(AlgebraError::NotAssociative {
                a: Box::new(elements.at(a).clone()),
                b: Box::new(elements.at(b).clone()),
                c: Box::new(elements.at(c).clone()),
            });
        }

        debug!("validated group of order {n}");
        Ok(Self {
            elements,
            table,
            identity,
            inverses,
            abelian: OnceCell::new(),
        })
    }

    /// The underlying set.
    #[inline]
    pub fn elements(&self) -> &Set<E> {
        &self.elements
    }

    /// The order of the group, i.e. its number of elements.
    #[inline]
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// The identity element.
    #[inline]
    pub fn identity(&self) -> &E {
        self.elements.at(self.identity)
    }

    /// Returns `true` if `value` is an element of the group.
    #[inline]
    pub fn contains(&self, value: &E) -> bool {
        self.elements.contains(value)
    }

    /// Returns `a·b`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotMember`] if a factor is not in the group.
    pub fn mul(&self, a: &E, b: &E) -> Result<&E, AlgebraError> {
        let (a, b) = (self.index(a)?, self.index(b)?);
        Ok(self.elements.at(self.op(a, b)))
    }

    /// Returns the product of all `factors`, left to right.
    ///
    /// The empty product is the identity.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotMember`] if a factor is not in the group.
    pub fn product<'a, I>(&self, factors: I) -> Result<&E, AlgebraError>
    where
        I: IntoIterator<Item = &'a E>,
    {
        let mut acc = self.identity;
        for factor in factors {
            acc = self.op(acc, self.index(factor)?);
        }
        Ok(self.elements.at(acc))
    }

    /// Returns the inverse of `value`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotMember`] if `value` is not in the group.
    pub fn inverse(&self, value: &E) -> Result<&E, AlgebraError> {
        let x = self.index(value)?;
        Ok(self.elements.at(self.inverses[x]))
    }

    /// Returns the order of `value`: the least `k ≥ 1` with `value^k = e`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotMember`] if `value` is not in the group.
    pub fn element_order(&self, value: &E) -> Result<usize, AlgebraError> {
        let x = self.index(value)?;
        let mut power = x;
        let mut k = 1;
        // Lagrange bounds `k` by the order of the group.
        while power != self.identity && k < self.order() {
            power = self.op(power, x);
            k += 1;
        }
        debug_assert_eq!(power, self.identity);
        Ok(k)
    }

    /// Returns `true` if the operation commutes. Computed once, on first use.
    pub fn is_abelian(&self) -> bool {
        *self
            .abelian
            .get_or_init(|| axioms::non_commuting(self.order(), &self.table).is_none())
    }

    /// Iterates over the product table as `((a, b), a·b)`.
    pub fn products(&self) -> impl Iterator<Item = ((&E, &E), &E)> + '_ {
        let n = self.order();
        (0..n * n).map(move |k| {
            let (a, b) = (k / n, k % n);
            (
                (self.elements.at(a), self.elements.at(b)),
                self.elements.at(self.table[k]),
            )
        })
    }

    /// Returns the direct product `self × other` with the componentwise operation.
    ///
    /// # Errors
    ///
    /// Never for valid factors; the product is validated like any other group.
    pub fn direct_product<F: Element>(&self, other: &Group<F>) -> Result<Group<(E, F)>, AlgebraError> {
        let (n, m) = (self.order(), other.order());
        let elements: Set<(E, F)> = iproduct!(self.elements.iter(), other.elements.iter())
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect();
        // `(i, j)` sits at position `i * m + j`.
        let table = iproduct!(0..n * m, 0..n * m)
            .map(|(x, y)| self.op(x / m, y / m) * m + other.op(x % m, y % m))
            .collect();
        let product = Group::from_table(elements, table)?;
        debug!("built direct product of order {}", product.order());
        Ok(product)
    }

    /// Position of `value` in the element set.
    pub(crate) fn index(&self, value: &E) -> Result<usize, AlgebraError> {
        self.elements
            .position(value)
            .ok_or_else(|| AlgebraError::NotMember {
                element: Box::new(value.clone()),
            })
    }

    /// Product of two positions.
    #[inline]
    pub(crate) fn op(&self, a: usize, b: usize) -> usize {
        self.table[a * self.order() + b]
    }

    /// Inverse of a position.
    #[inline]
    pub(crate) fn inv(&self, a: usize) -> usize {
        self.inverses[a]
    }
}

impl<E: fmt::Debug> fmt::Debug for Group<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("elements", &self.elements)
            .field("identity", self.elements.at(self.identity))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn klein() -> Group<(bool, bool)> {
        let elements: Set<(bool, bool)> =
            iproduct!([false, true], [false, true]).collect();
        Group::from_fn(elements, |a, b| (a.0 ^ b.0, a.1 ^ b.1)).unwrap()
    }

    #[test]
    fn test_queries() {
        let g = klein();
        assert_eq!(g.order(), 4);
        assert_eq!(*g.identity(), (false, false));
        for x in g.elements() {
            assert_eq!(g.inverse(x).unwrap(), x);
            assert_eq!(g.mul(x, x).unwrap(), g.identity());
        }
        assert_eq!(g.element_order(&(true, false)).unwrap(), 2);
        assert_eq!(g.element_order(&(false, false)).unwrap(), 1);
        assert!(g.is_abelian());
        assert_eq!(g.products().count(), 16);
    }

    #[test]
    fn test_product_of_many() {
        let g = klein();
        let a = (true, false);
        let b = (false, true);
        assert_eq!(*g.product([&a, &b, &a]).unwrap(), b);
        assert_eq!(g.product(std::iter::empty()).unwrap(), g.identity());
        assert!(matches!(
            g.product([&a, &(true, true), &a]).map(|x| *x),
            Ok((true, true))
        ));
    }

    #[test]
    fn test_not_member() {
        let g = Group::from_fn(Set::from([0u32, 1]), |a, b| (a + b) % 2).unwrap();
        assert!(matches!(g.mul(&0, &2), Err(AlgebraError::NotMember { .. })));
        assert!(matches!(g.inverse(&5), Err(AlgebraError::NotMember { .. })));
        assert!(matches!(g.element_order(&5), Err(AlgebraError::NotMember { .. })));
    }

    #[test]
    fn test_extraneous_pair() {
        let elements = Set::from([0u32]);
        let products = HashMap::from([((0, 0), 0), ((0, 1), 0)]);
        assert!(matches!(
            Group::new(elements, &products),
            Err(AlgebraError::NotClosed {
                violation: ClosureViolation::Extraneous,
                ..
            })
        ));
    }

    #[test]
    fn test_direct_product() {
        let z2 = Group::from_fn(Set::from([0u32, 1]), |a, b| (a + b) % 2).unwrap();
        let z3 = Group::from_fn(Set::from([0u32, 1, 2]), |a, b| (a + b) % 3).unwrap();
        let z6 = z2.direct_product(&z3).unwrap();
        assert_eq!(z6.order(), 6);
        assert_eq!(*z6.identity(), (0, 0));
        assert_eq!(*z6.mul(&(1, 2), &(1, 2)).unwrap(), (0, 1));
        assert_eq!(z6.element_order(&(1, 1)).unwrap(), 6);
    }
}
