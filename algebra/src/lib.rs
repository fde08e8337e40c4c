#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Finite algebraic structures.
//!
//! A [`Group`] is built from a [`Set`] of elements and a product table. The
//! group axioms are checked once, eagerly, and a value that exists is always
//! a valid group. Derived structures (subgroups, cosets, quotients, center,
//! commutator subgroup) and maps between groups ([`Function`],
//! [`GroupFunction`]) are built on top of it.

mod error;
mod function;
mod group;
mod group_function;
mod set;

pub mod samples;

pub use error::{AlgebraError, ClosureViolation};
pub use function::Function;
pub use group::{Group, Operand};
pub use group_function::GroupFunction;
pub use set::Set;

use std::fmt::Debug;
use std::hash::Hash;

/// A value that can be stored in a [`Set`] and used as an element of a [`Group`].
pub trait Element: Clone + Eq + Hash + Debug + 'static {}

impl<T> Element for T where T: Clone + Eq + Hash + Debug + 'static {}
