use indexmap::IndexMap;

use crate::{AlgebraError, Element, Set};

/// A total mapping between two [`Set`]s.
///
/// Every element of the domain is mapped, and every image lies in the
/// codomain. Both facts are checked once, when the function is built.
#[derive(Clone, Debug)]
pub struct Function<A, B> {
    mapping: IndexMap<A, B>,
    domain: Set<A>,
    codomain: Set<B>,
    name: Option<String>,
}

impl<A: Element, B: Element> Function<A, B> {
    /// Creates a function from explicit `(value, image)` pairs.
    ///
    /// # Errors
    ///
    /// * [`AlgebraError::IncompleteMapping`] if some domain value is not mapped.
    /// * [`AlgebraError::NotInDomain`] if a mapped value is not in the domain.
    /// * [`AlgebraError::NotInCodomain`] if an image is not in the codomain.
    pub fn new<M>(mapping: M, domain: Set<A>, codomain: Set<B>) -> Result<Self, AlgebraError>
    where
        M: IntoIterator<Item = (A, B)>,
    {
        let mapping: IndexMap<A, B> = mapping.into_iter().collect();

        if let Some(value) = domain.iter().find(|x| !mapping.contains_key(*x)) {
            return Err(AlgebraError::IncompleteMapping {
                value: Box::new(value.clone()),
            });
        }
        for (key, value) in mapping.iter() {
            if !domain.contains(key) {
                return Err(AlgebraError::NotInDomain {
                    value: Box::new(key.clone()),
                });
            }
            if !codomain.contains(value) {
                return Err(AlgebraError::NotInCodomain {
                    value: Box::new(value.clone()),
                });
            }
        }

        Ok(Self {
            mapping,
            domain,
            codomain,
            name: None,
        })
    }

    /// Creates a function by evaluating `f` on every element of the domain.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotInCodomain`] if `f` leaves the codomain.
    pub fn from_fn<F>(domain: Set<A>, codomain: Set<B>, f: F) -> Result<Self, AlgebraError>
    where
        F: Fn(&A) -> B,
    {
        let mapping: Vec<(A, B)> = domain.iter().map(|x| (x.clone(), f(x))).collect();
        Self::new(mapping, domain, codomain)
    }

    /// Returns the function with the given name attached.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name of the function, if it has one.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The domain.
    #[inline]
    pub fn domain(&self) -> &Set<A> {
        &self.domain
    }

    /// The codomain.
    #[inline]
    pub fn codomain(&self) -> &Set<B> {
        &self.codomain
    }

    /// Iterates over the `(value, image)` pairs.
    #[inline]
    pub fn mapping(&self) -> impl Iterator<Item = (&A, &B)> {
        self.mapping.iter()
    }

    /// Returns the image of `value`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotInDomain`] if `value` is not in the domain.
    pub fn apply(&self, value: &A) -> Result<&B, AlgebraError> {
        self.mapping
            .get(value)
            .ok_or_else(|| AlgebraError::NotInDomain {
                value: Box::new(value.clone()),
            })
    }

    /// Returns the composition `self ∘ inner`, i.e. `x ↦ self(inner(x))`.
    ///
    /// The result has the domain of `inner` and the codomain of `self`. The
    /// caller is responsible for `inner`'s codomain matching `self`'s domain:
    /// values whose image under `inner` is not mapped by `self` are dropped,
    /// and the result then goes through [`Function::new`], which reports the
    /// first dropped value as [`AlgebraError::IncompleteMapping`].
    pub fn compose<C: Element>(&self, inner: &Function<C, A>) -> Result<Function<C, B>, AlgebraError> {
        let mapping: Vec<(C, B)> = inner
            .mapping
            .iter()
            .filter_map(|(k, v)| self.mapping.get(v).map(|image| (k.clone(), image.clone())))
            .collect();
        let composed = Function::new(mapping, inner.domain.clone(), self.codomain.clone())?;
        Ok(match (&self.name, &inner.name) {
            (Some(f), Some(g)) => composed.with_name(format!("{f}∘{g}")),
            _ => composed,
        })
    }

    /// Returns the inverse function.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotBijective`] if the function is not a bijection.
    pub fn inverse(&self) -> Result<Function<B, A>, AlgebraError> {
        if !self.is_bijective() {
            return Err(AlgebraError::NotBijective);
        }
        let mapping: Vec<(B, A)> = self
            .mapping
            .iter()
            .map(|(k, v)| (v.clone(), k.clone()))
            .collect();
        let inverse = Function::new(mapping, self.codomain.clone(), self.domain.clone())?;
        Ok(match &self.name {
            Some(f) => inverse.with_name(format!("{f}⁻¹")),
            None => inverse,
        })
    }

    /// Returns the preimage of a single value of the codomain.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotInCodomain`] if `value` is not in the codomain.
    pub fn fiber(&self, value: &B) -> Result<Set<A>, AlgebraError> {
        if !self.codomain.contains(value) {
            return Err(AlgebraError::NotInCodomain {
                value: Box::new(value.clone()),
            });
        }
        Ok(self
            .mapping
            .iter()
            .filter(|(_, v)| *v == value)
            .map(|(k, _)| k.clone())
            .collect())
    }

    /// Returns the preimage of a subset of the codomain.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotSubset`] if `subset` is not contained in the codomain.
    pub fn preimage(&self, subset: &Set<B>) -> Result<Set<A>, AlgebraError> {
        if !subset.is_subset(&self.codomain) {
            return Err(AlgebraError::NotSubset {
                subset: Box::new(subset.clone()),
                superset: Box::new(self.codomain.clone()),
            });
        }
        let fibers = subset
            .iter()
            .map(|v| self.fiber(v))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Set::unions(&fibers))
    }

    /// Returns the image of a subset of the domain.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotInDomain`] if some value of `subset` is not in the domain.
    pub fn image(&self, subset: &Set<A>) -> Result<Set<B>, AlgebraError> {
        subset.iter().map(|x| self.apply(x).cloned()).collect()
    }

    /// Returns `true` if no two values share an image.
    pub fn is_injective(&self) -> bool {
        let attained: Set<&B> = self.mapping.values().collect();
        attained.len() == self.mapping.len()
    }

    /// Returns `true` if every value of the codomain is attained.
    pub fn is_surjective(&self) -> bool {
        let attained: Set<&B> = self.mapping.values().collect();
        self.codomain.iter().all(|v| attained.contains(&v))
    }

    /// Returns `true` if the function is both injective and surjective.
    #[inline]
    pub fn is_bijective(&self) -> bool {
        self.is_injective() && self.is_surjective()
    }
}

impl<A: Element, B: Element> PartialEq for Function<A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.codomain == other.codomain
            && self.mapping.len() == other.mapping.len()
            && self
                .mapping
                .iter()
                .all(|(k, v)| other.mapping.get(k) == Some(v))
    }
}
