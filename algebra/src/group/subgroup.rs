//! Subgroups, cosets and quotients.

use log::debug;

use super::Group;
use crate::{AlgebraError, ClosureViolation, Element, Set};

impl<E: Element> Group<E> {
    /// Returns the subgroup on `subset`, with this group's operation restricted to it.
    ///
    /// # Errors
    ///
    /// * [`AlgebraError::NotSubset`] if `subset` is not contained in the group.
    /// * Any construction error of [`Group::new`] if the restriction is not a group.
    pub fn subgroup(&self, subset: &Set<E>) -> Result<Group<E>, AlgebraError> {
        if !subset.is_subset(&self.elements) {
            return Err(AlgebraError::NotSubset {
                subset: Box::new(subset.clone()),
                superset: Box::new(self.elements.clone()),
            });
        }
        let parent = subset
            .iter()
            .map(|x| self.index(x))
            .collect::<Result<Vec<_>, _>>()?;

        let mut table = Vec::with_capacity(parent.len() * parent.len());
        for &a in &parent {
            for &b in &parent {
                let product = self.elements.at(self.op(a, b));
                let index = subset.position(product).ok_or_else(|| AlgebraError::NotClosed {
                    left: Box::new(self.elements.at(a).clone()),
                    right: Box::new(self.elements.at(b).clone()),
                    violation: ClosureViolation::OutsideSet,
                })?;
                table.push(index);
            }
        }
        Group::from_table(subset.clone(), table)
    }

    /// Returns the smallest subgroup containing `generators`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotSubset`] if a generator is not in the group.
    pub fn generated_subgroup(&self, generators: &Set<E>) -> Result<Group<E>, AlgebraError> {
        if !generators.is_subset(&self.elements) {
            return Err(AlgebraError::NotSubset {
                subset: Box::new(generators.clone()),
                superset: Box::new(self.elements.clone()),
            });
        }
        let mut steps = generators
            .iter()
            .map(|x| self.index(x))
            .collect::<Result<Vec<_>, _>>()?;
        let inverses: Vec<usize> = steps.iter().map(|&x| self.inv(x)).collect();
        steps.extend(inverses);

        // Breadth-first closure of {e} under right multiplication by the steps.
        let mut reached = vec![false; self.order()];
        let mut members = vec![self.identity];
        reached[self.identity] = true;
        let mut cursor = 0;
        while let Some(&x) = members.get(cursor) {
            cursor += 1;
            for &s in &steps {
                let y = self.op(x, s);
                if !reached[y] {
                    reached[y] = true;
                    members.push(y);
                }
            }
        }

        let subset: Set<E> = members.into_iter().map(|x| self.elements.at(x).clone()).collect();
        self.subgroup(&subset)
    }

    /// Returns `true` if `subgroup` is invariant under conjugation.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotSubset`] if `subgroup` is not a subgroup of `self`.
    pub fn is_normal(&self, subgroup: &Group<E>) -> Result<bool, AlgebraError> {
        self.require_subgroup(subgroup)?;
        if self.is_abelian() {
            return Ok(true);
        }
        let members = subgroup
            .elements
            .iter()
            .map(|h| self.index(h))
            .collect::<Result<Vec<_>, _>>()?;
        let normal = (0..self.order()).all(|g| {
            members.iter().all(|&h| {
                let conjugate = self.op(self.op(g, h), self.inv(g));
                subgroup.contains(self.elements.at(conjugate))
            })
        });
        Ok(normal)
    }

    /// Returns the left coset `g·H`.
    ///
    /// # Errors
    ///
    /// * [`AlgebraError::NotSubset`] if `subgroup` is not a subgroup of `self`.
    /// * [`AlgebraError::NotMember`] if `g` is not in the group.
    pub fn left_coset(&self, g: &E, subgroup: &Group<E>) -> Result<Set<E>, AlgebraError> {
        self.require_subgroup(subgroup)?;
        let g = self.index(g)?;
        subgroup
            .elements
            .iter()
            .map(|h| {
                let h = self.index(h)?;
                Ok::<E, AlgebraError>(self.elements.at(self.op(g, h)).clone())
            })
            .collect()
    }

    /// Returns the right coset `H·g`.
    ///
    /// # Errors
    ///
    /// * [`AlgebraError::NotSubset`] if `subgroup` is not a subgroup of `self`.
    /// * [`AlgebraError::NotMember`] if `g` is not in the group.
    pub fn right_coset(&self, subgroup: &Group<E>, g: &E) -> Result<Set<E>, AlgebraError> {
        self.require_subgroup(subgroup)?;
        let g = self.index(g)?;
        subgroup
            .elements
            .iter()
            .map(|h| {
                let h = self.index(h)?;
                Ok::<E, AlgebraError>(self.elements.at(self.op(h, g)).clone())
            })
            .collect()
    }

    /// Returns the coset `gN = Ng` of a normal subgroup.
    ///
    /// # Errors
    ///
    /// * [`AlgebraError::NotNormal`] if `subgroup` is not normal.
    /// * Any error of [`Group::right_coset`].
    pub fn coset(&self, subgroup: &Group<E>, g: &E) -> Result<Set<E>, AlgebraError> {
        if !self.is_normal(subgroup)? {
            return Err(not_normal(subgroup));
        }
        self.right_coset(subgroup, g)
    }

    /// Returns the distinct right cosets of `subgroup`, which partition the group.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotSubset`] if `subgroup` is not a subgroup of `self`.
    pub fn cosets(&self, subgroup: &Group<E>) -> Result<Set<Set<E>>, AlgebraError> {
        let (cosets, _) = self.partition(subgroup)?;
        Ok(cosets.into_iter().collect())
    }

    /// Returns the quotient group `G/N`, whose elements are the cosets of `N`.
    ///
    /// # Errors
    ///
    /// * [`AlgebraError::NotSubset`] if `normal` is not a subgroup of `self`.
    /// * [`AlgebraError::NotNormal`] if `normal` is not normal.
    pub fn quotient(&self, normal: &Group<E>) -> Result<Group<Set<E>>, AlgebraError> {
        if !self.is_normal(normal)? {
            return Err(not_normal(normal));
        }
        let (cosets, class) = self.partition(normal)?;
        let k = cosets.len();

        // Normality makes the class of a·b independent of the representatives,
        // so each pair of cosets is multiplied once, through its first members.
        let representatives: Vec<usize> = cosets
            .iter()
            .map(|c| self.index(c.at(0)))
            .collect::<Result<_, _>>()?;
        let mut table = Vec::with_capacity(k * k);
        for &a in &representatives {
            for &b in &representatives {
                table.push(class[self.op(a, b)]);
            }
        }

        let quotient = Group::from_table(cosets.into_iter().collect(), table)?;
        debug!(
            "built quotient of order {} by a normal subgroup of order {}",
            quotient.order(),
            normal.order()
        );
        Ok(quotient)
    }

    /// Returns the center `{x : xy = yx for all y}`.
    ///
    /// # Errors
    ///
    /// Never for a valid group; the center is validated like any subgroup.
    pub fn center(&self) -> Result<Group<E>, AlgebraError> {
        let n = self.order();
        let center: Set<E> = (0..n)
            .filter(|&x| (0..n).all(|y| self.op(x, y) == self.op(y, x)))
            .map(|x| self.elements.at(x).clone())
            .collect();
        self.subgroup(&center)
    }

    /// Returns the commutator subgroup, generated by all `a⁻¹b⁻¹ab`.
    ///
    /// # Errors
    ///
    /// Never for a valid group.
    pub fn commutator_subgroup(&self) -> Result<Group<E>, AlgebraError> {
        let n = self.order();
        let commutators: Set<E> = (0..n)
            .flat_map(|a| (0..n).map(move |b| (a, b)))
            .map(|(a, b)| {
                let c = self.op(self.op(self.inv(a), self.inv(b)), self.op(a, b));
                self.elements.at(c).clone()
            })
            .collect();
        let derived = self.generated_subgroup(&commutators)?;
        debug!(
            "commutator subgroup of order {} from {} distinct commutators",
            derived.order(),
            commutators.len()
        );
        Ok(derived)
    }

    /// Returns the abelianization `G/[G, G]`.
    ///
    /// # Errors
    ///
    /// Never for a valid group.
    pub fn abelianization(&self) -> Result<Group<Set<E>>, AlgebraError> {
        self.quotient(&self.commutator_subgroup()?)
    }

    /// Splits the group into right cosets of `subgroup`.
    ///
    /// Returns the cosets in order of their first element, and for every
    /// element position the index of its coset.
    fn partition(&self, subgroup: &Group<E>) -> Result<(Vec<Set<E>>, Vec<usize>), AlgebraError> {
        self.require_subgroup(subgroup)?;
        let members = subgroup
            .elements
            .iter()
            .map(|h| self.index(h))
            .collect::<Result<Vec<_>, _>>()?;

        let mut class = vec![usize::MAX; self.order()];
        let mut cosets = Vec::with_capacity(self.order() / subgroup.order());
        for g in 0..self.order() {
            if class[g] != usize::MAX {
                continue;
            }
            // Start from `e·g = g` so that `g` is the first member of its coset.
            let coset: Set<E> = std::iter::once(g)
                .chain(members.iter().map(|&h| self.op(h, g)))
                .map(|x| {
                    class[x] = cosets.len();
                    self.elements.at(x).clone()
                })
                .collect();
            cosets.push(coset);
        }
        Ok((cosets, class))
    }

    fn require_subgroup(&self, subgroup: &Group<E>) -> Result<(), AlgebraError> {
        if subgroup.is_subgroup_of(self) {
            Ok(())
        } else {
            Err(AlgebraError::NotSubset {
                subset: Box::new(subgroup.elements.clone()),
                superset: Box::new(self.elements.clone()),
            })
        }
    }
}

fn not_normal<E: Element>(subgroup: &Group<E>) -> AlgebraError {
    AlgebraError::NotNormal {
        subgroup: Box::new(subgroup.elements.clone()),
    }
}
