use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;
use itertools::Itertools;

/// A finite set of unique values.
///
/// `Set` is an immutable value type: equality and hash are defined by its
/// content only, and every operation that would add or remove an element
/// returns a new set instead. This makes sets usable as elements of other
/// sets, e.g. cosets in a quotient group or subsets in a powerset.
///
/// Iteration follows the order in which values were first inserted. The
/// order never affects equality.
#[derive(Clone)]
pub struct Set<E> {
    elements: IndexSet<E>,
}

impl<E> Set<E> {
    /// Creates the empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            elements: IndexSet::new(),
        }
    }

    /// Returns the cardinality of the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set has no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> indexmap::set::Iter<'_, E> {
        self.elements.iter()
    }

    /// Returns the element stored at `index`.
    #[inline]
    pub(crate) fn at(&self, index: usize) -> &E {
        &self.elements[index]
    }
}

impl<E: Hash + Eq> Set<E> {
    /// Returns `true` if `value` is in the set.
    #[inline]
    pub fn contains(&self, value: &E) -> bool {
        self.elements.contains(value)
    }

    /// Returns the position of `value` in iteration order.
    #[inline]
    pub(crate) fn position(&self, value: &E) -> Option<usize> {
        self.elements.get_index_of(value)
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[inline]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` and they differ.
    #[inline]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }
}

impl<E: Hash + Eq + Clone> Set<E> {
    /// Returns a new set with `value` added.
    pub fn with(&self, value: E) -> Self {
        let mut elements = self.elements.clone();
        elements.insert(value);
        Self { elements }
    }

    /// Returns a new set with `value` removed.
    pub fn without(&self, value: &E) -> Self {
        self.iter().filter(|e| *e != value).cloned().collect()
    }

    /// Returns `self ∪ other`.
    pub fn union(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Returns `self ∩ other`.
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter().filter(|e| other.contains(e)).cloned().collect()
    }

    /// Returns `self \ other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.iter().filter(|e| !other.contains(e)).cloned().collect()
    }

    /// Returns the union of all the given sets.
    pub fn unions<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        E: 'a,
    {
        sets.into_iter().flat_map(Set::iter).cloned().collect()
    }

    /// Returns the set of all subsets.
    ///
    /// The result has `2^n` elements, so this is only usable for very small sets.
    pub fn powerset(&self) -> Set<Set<E>> {
        self.iter().powerset().map(|subset| subset.into_iter().cloned().collect()).collect()
    }
}

impl<E: Hash + Eq + Clone> Set<Set<E>> {
    /// Checks whether this family of subsets of `universe` is a sigma algebra:
    /// it holds `∅` and `universe`, and is closed under complements and unions.
    ///
    /// On a finite universe closure under pairwise unions is enough.
    pub fn is_sigma_algebra(&self, universe: &Set<E>) -> bool {
        if !self.contains(&Set::new()) || !self.contains(universe) {
            return false;
        }
        if self.iter().any(|s| !s.is_subset(universe)) {
            return false;
        }
        if self.iter().any(|s| !self.contains(&universe.difference(s))) {
            return false;
        }
        self.iter()
            .tuple_combinations()
            .all(|(a, b)| self.contains(&a.union(b)))
    }
}

impl<E> Default for Set<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Hash + Eq> FromIterator<E> for Set<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<E: Hash + Eq, const N: usize> From<[E; N]> for Set<E> {
    #[inline]
    fn from(values: [E; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<E> IntoIterator for Set<E> {
    type Item = E;
    type IntoIter = indexmap::set::IntoIter<E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Set<E> {
    type Item = &'a E;
    type IntoIter = indexmap::set::Iter<'a, E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<E: Hash + Eq> PartialEq for Set<E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // `IndexSet` compares as a set, ignoring order.
        self.elements == other.elements
    }
}

impl<E: Hash + Eq> Eq for Set<E> {}

impl<E: Hash> Hash for Set<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Order independent: combine per-element digests with a commutative sum.
        let digest = self
            .elements
            .iter()
            .map(|e| {
                let mut hasher = DefaultHasher::new();
                e.hash(&mut hasher);
                hasher.finish()
            })
            .fold(0u64, u64::wrapping_add);
        state.write_usize(self.elements.len());
        state.write_u64(digest);
    }
}

impl<E: fmt::Debug> fmt::Debug for Set<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_from_iter_deduplicates() {
        let s: Set<u32> = [1, 2, 2, 3, 1].into_iter().collect();
        assert_eq!(s.len(), 3);
        assert!(s.contains(&2));
        assert!(!s.contains(&4));
    }

    #[test]
    fn test_eq_and_hash_ignore_order() {
        let a = Set::from([1, 2, 3]);
        let b = Set::from([3, 1, 2]);
        assert_eq!(a, b);

        let family: HashSet<Set<u32>> = [a, b].into_iter().collect();
        assert_eq!(family.len(), 1);
    }

    #[test]
    fn test_with_returns_new_set() {
        let a = Set::from([1, 2]);
        let b = a.with(3);
        assert_eq!(a.len(), 2);
        assert_eq!(b, Set::from([1, 2, 3]));
        assert_eq!(b.without(&1), Set::from([2, 3]));
    }

    #[test]
    fn test_set_algebra() {
        let a = Set::from([1, 2, 3]);
        let b = Set::from([3, 4]);
        assert_eq!(a.union(&b), Set::from([1, 2, 3, 4]));
        assert_eq!(a.intersection(&b), Set::from([3]));
        assert_eq!(a.difference(&b), Set::from([1, 2]));
        assert!(Set::from([1, 3]).is_subset(&a));
        assert!(Set::from([1, 3]).is_proper_subset(&a));
        assert!(!a.is_proper_subset(&a));
        assert!(a.is_superset(&Set::new()));
        assert_eq!(Set::unions([&a, &b, &Set::from([9])]).len(), 5);
    }

    #[test]
    fn test_powerset() {
        let s = Set::from(['a', 'b', 'c']);
        let p = s.powerset();
        assert_eq!(p.len(), 8);
        assert!(p.contains(&Set::new()));
        assert!(p.contains(&s));
        assert!(p.contains(&Set::from(['c', 'a'])));
        assert_eq!(Set::<u8>::new().powerset().len(), 1);
    }

    #[test]
    fn test_sigma_algebra() {
        let x = Set::from([1, 2, 3]);
        assert!(x.powerset().is_sigma_algebra(&x));

        let trivial = Set::from([Set::new(), x.clone()]);
        assert!(trivial.is_sigma_algebra(&x));

        let generated = Set::from([Set::new(), Set::from([1]), Set::from([2, 3]), x.clone()]);
        assert!(generated.is_sigma_algebra(&x));

        let no_complement = Set::from([Set::new(), Set::from([1]), x.clone()]);
        assert!(!no_complement.is_sigma_algebra(&x));
    }
}
