//! This module defines some errors that
//! may occur during the execution of the library.

use std::fmt::{self, Debug};

use thiserror::Error;

/// The way a product table fails to be closed over its element set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosureViolation {
    /// The table has no entry for a pair of elements.
    Missing,
    /// The table has an entry for a pair that is not in `elements × elements`.
    Extraneous,
    /// The product of a pair is not an element of the set.
    OutsideSet,
}

impl fmt::Display for ClosureViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosureViolation::Missing => write!(f, "has no product"),
            ClosureViolation::Extraneous => write!(f, "is not a pair of elements"),
            ClosureViolation::OutsideSet => write!(f, "has a product outside the set"),
        }
    }
}

/// Errors that may occur.
#[derive(Error, Debug)]
pub enum AlgebraError {
    /// Error that occurs when the product table is incomplete or leaves the element set.
    #[error("Not closed: the pair ({left:?}, {right:?}) {violation}!")]
    NotClosed {
        /// The left factor.
        left: Box<dyn Debug>,
        /// The right factor.
        right: Box<dyn Debug>,
        /// How the pair violates closure.
        violation: ClosureViolation,
    },
    /// Error that occurs when no element is absorbing on both sides.
    #[error("There is no identity element!")]
    NoIdentity,
    /// Error that occurs when a group element has no inverse.
    #[error("Value {element:?} has no inverse element!")]
    NoInverse {
        /// The element without inverse.
        element: Box<dyn Debug>,
    },
    /// Error that occurs when the operation is not associative.
    #[error("Not associative: ({a:?}·{b:?})·{c:?} != {a:?}·({b:?}·{c:?})")]
    NotAssociative {
        /// First factor.
        a: Box<dyn Debug>,
        /// Second factor.
        b: Box<dyn Debug>,
        /// Third factor.
        c: Box<dyn Debug>,
    },
    /// Error that occurs when the inverse of a non-bijective function is requested.
    #[error("The function is not a bijection and has no inverse!")]
    NotBijective,
    /// Error that occurs when a value is looked up outside a function's domain.
    #[error("Value {value:?} is not in the domain!")]
    NotInDomain {
        /// The stray value.
        value: Box<dyn Debug>,
    },
    /// Error that occurs when a value is looked up outside a function's codomain.
    #[error("Value {value:?} is not in the codomain!")]
    NotInCodomain {
        /// The stray value.
        value: Box<dyn Debug>,
    },
    /// Error that occurs when a domain value has no image.
    #[error("Value {value:?} of the domain does not get mapped!")]
    IncompleteMapping {
        /// The unmapped value.
        value: Box<dyn Debug>,
    },
    /// Error that occurs when a group function is built over sets that are not its groups.
    #[error("The {side} of the function is not the element set of the given group!")]
    TypeMismatch {
        /// `"domain"` or `"codomain"`.
        side: &'static str,
    },
    /// Error that occurs when a set is not contained in the group or set it should belong to.
    #[error("{subset:?} is not a subset of {superset:?}!")]
    NotSubset {
        /// The offending set.
        subset: Box<dyn Debug>,
        /// The set it should be contained in.
        superset: Box<dyn Debug>,
    },
    /// Error that occurs when cosets or a quotient are requested for a non-normal subgroup.
    #[error("{subgroup:?} is not a normal subgroup!")]
    NotNormal {
        /// Elements of the subgroup.
        subgroup: Box<dyn Debug>,
    },
    /// Error that occurs when a value is not an element of the group.
    #[error("Value {element:?} is not an element of the group!")]
    NotMember {
        /// The stray value.
        element: Box<dyn Debug>,
    },
    /// Error that occurs when a prime modulus is required.
    #[error("The modulus {modulus} is not prime!")]
    NotPrime {
        /// The modulus.
        modulus: u64,
    },
}
