//! Equality and the subgroup order between groups.

use std::cmp::Ordering;

use super::Group;
use crate::{Element, Set};

/// The right-hand side of a subgroup comparison.
///
/// A bare [`Set`] carries no operation: as the smaller side it is compared
/// as a set, and as the larger side it must form a subgroup under the
/// operation of the group it is compared with.
#[derive(Debug)]
pub enum Operand<'a, E> {
    /// A group with its own product table.
    Group(&'a Group<E>),
    /// A plain set of elements.
    Set(&'a Set<E>),
}

impl<E> Clone for Operand<'_, E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Operand<'_, E> {}

impl<'a, E> From<&'a Group<E>> for Operand<'a, E> {
    #[inline]
    fn from(group: &'a Group<E>) -> Self {
        Operand::Group(group)
    }
}

impl<'a, E> From<&'a Set<E>> for Operand<'a, E> {
    #[inline]
    fn from(set: &'a Set<E>) -> Self {
        Operand::Set(set)
    }
}

impl<E: Element> Group<E> {
    /// Returns `true` if `self ≤ other`.
    ///
    /// Against a group: `self`'s elements are a subset of `other`'s and the
    /// two product tables agree on them. Against a set: `self`'s elements are
    /// contained in it.
    pub fn is_subgroup_of<'a>(&self, other: impl Into<Operand<'a, E>>) -> bool {
        match other.into() {
            Operand::Group(other) => {
                // Lagrange: the order of a subgroup divides the order of the group.
                other.order() % self.order() == 0
                    && self.elements.is_subset(&other.elements)
                    && self.agrees_with(other)
            }
            Operand::Set(set) => self.elements.is_subset(set),
        }
    }

    /// Returns `true` if `self < other`.
    pub fn is_proper_subgroup_of<'a>(&self, other: impl Into<Operand<'a, E>>) -> bool {
        let other = other.into();
        self.order() < operand_len(&other) && self.is_subgroup_of(other)
    }

    /// Returns `true` if `self ≥ other`.
    ///
    /// Against a group: `other ≤ self`. Against a set: the set is a subgroup
    /// of `self` under `self`'s operation.
    pub fn is_supergroup_of<'a>(&self, other: impl Into<Operand<'a, E>>) -> bool {
        match other.into() {
            Operand::Group(other) => other.is_subgroup_of(self),
            Operand::Set(set) => {
                !set.is_empty() && self.order() % set.len() == 0 && self.subgroup(set).is_ok()
            }
        }
    }

    /// Returns `true` if `self > other`.
    pub fn is_proper_supergroup_of<'a>(&self, other: impl Into<Operand<'a, E>>) -> bool {
        let other = other.into();
        operand_len(&other) < self.order() && self.is_supergroup_of(other)
    }

    /// Checks that `other` multiplies the elements of `self` the way `self` does.
    ///
    /// Every element of `self` must be in `other`.
    fn agrees_with(&self, other: &Group<E>) -> bool {
        let Ok(positions) = self
            .elements
            .iter()
            .map(|x| other.index(x))
            .collect::<Result<Vec<_>, _>>()
        else {
            return false;
        };
        let n = self.order();
        (0..n).all(|a| {
            (0..n).all(|b| {
                other.elements.at(other.op(positions[a], positions[b]))
                    == self.elements.at(self.op(a, b))
            })
        })
    }
}

fn operand_len<E>(operand: &Operand<'_, E>) -> usize {
    match operand {
        Operand::Group(group) => group.elements.len(),
        Operand::Set(set) => set.len(),
    }
}

impl<E: Element> PartialEq for Group<E> {
    /// Groups are equal if they have the same elements and the same products.
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements && self.agrees_with(other)
    }
}

impl<E: Element> Eq for Group<E> {}

impl<E: Element> PartialOrd for Group<E> {
    /// The subgroup order: `Less` for a proper subgroup, `None` for unrelated groups.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_subgroup_of(other) {
            Some(Ordering::Less)
        } else if other.is_subgroup_of(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}
