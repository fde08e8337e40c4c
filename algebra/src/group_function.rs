use log::debug;

use crate::{AlgebraError, Element, Function, Group, Set};

/// A [`Function`] whose domain and codomain are [`Group`]s.
#[derive(Clone, Debug)]
pub struct GroupFunction<A, B> {
    function: Function<A, B>,
    domain: Group<A>,
    codomain: Group<B>,
}

impl<A: Element, B: Element> GroupFunction<A, B> {
    /// Creates a group function from explicit `(value, image)` pairs.
    ///
    /// # Errors
    ///
    /// The errors of [`Function::new`] over the groups' element sets.
    pub fn new<M>(mapping: M, domain: Group<A>, codomain: Group<B>) -> Result<Self, AlgebraError>
    where
        M: IntoIterator<Item = (A, B)>,
    {
        let function = Function::new(mapping, domain.elements().clone(), codomain.elements().clone())?;
        Ok(Self {
            function,
            domain,
            codomain,
        })
    }

    /// Creates a group function by evaluating `f` on every element of `domain`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotInCodomain`] if `f` leaves the codomain.
    pub fn from_fn<F>(domain: Group<A>, codomain: Group<B>, f: F) -> Result<Self, AlgebraError>
    where
        F: Fn(&A) -> B,
    {
        let function = Function::from_fn(domain.elements().clone(), codomain.elements().clone(), f)?;
        Ok(Self {
            function,
            domain,
            codomain,
        })
    }

    /// Views a plain function as a function between two groups.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::TypeMismatch`] if the function's domain or codomain is
    /// not exactly the element set of the corresponding group.
    pub fn try_from_function(
        function: Function<A, B>,
        domain: Group<A>,
        codomain: Group<B>,
    ) -> Result<Self, AlgebraError> {
        if function.domain() != domain.elements() {
            return Err(AlgebraError::TypeMismatch { side: "domain" });
        }
        if function.codomain() != codomain.elements() {
            return Err(AlgebraError::TypeMismatch { side: "codomain" });
        }
        Ok(Self {
            function,
            domain,
            codomain,
        })
    }

    /// Returns the function with the given name attached.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.function = self.function.with_name(name);
        self
    }

    /// The underlying set function.
    #[inline]
    pub fn as_function(&self) -> &Function<A, B> {
        &self.function
    }

    /// The domain group.
    #[inline]
    pub fn domain(&self) -> &Group<A> {
        &self.domain
    }

    /// The codomain group.
    #[inline]
    pub fn codomain(&self) -> &Group<B> {
        &self.codomain
    }

    /// Returns the image of `value`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotInDomain`] if `value` is not in the domain.
    #[inline]
    pub fn apply(&self, value: &A) -> Result<&B, AlgebraError> {
        self.function.apply(value)
    }

    /// Returns the composition `self ∘ inner`.
    ///
    /// # Errors
    ///
    /// See [`Function::compose`].
    pub fn compose<C: Element>(&self, inner: &GroupFunction<C, A>) -> Result<GroupFunction<C, B>, AlgebraError> {
        Ok(GroupFunction {
            function: self.function.compose(&inner.function)?,
            domain: inner.domain.clone(),
            codomain: self.codomain.clone(),
        })
    }

    /// Returns the inverse group function.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NotBijective`] if the function is not a bijection.
    pub fn inverse(&self) -> Result<GroupFunction<B, A>, AlgebraError> {
        Ok(GroupFunction {
            function: self.function.inverse()?,
            domain: self.codomain.clone(),
            codomain: self.domain.clone(),
        })
    }

    /// Returns `true` if `f(a·b) = f(a)·f(b)` for all `a, b` in the domain.
    pub fn is_homomorphism(&self) -> bool {
        let n = self.domain.order();
        // Images by position, so the n² check only does table lookups.
        let positions: Result<Vec<usize>, _> = self
            .domain
            .elements()
            .iter()
            .map(|x| self.function.apply(x).and_then(|y| self.codomain.index(y)))
            .collect();
        let Ok(positions) = positions else {
            return false;
        };

        (0..n).all(|a| {
            (0..n).all(|b| {
                positions[self.domain.op(a, b)] == self.codomain.op(positions[a], positions[b])
            })
        })
    }

    /// Returns `true` if the function is a bijective homomorphism whose
    /// inverse is a homomorphism too.
    pub fn is_isomorphism(&self) -> bool {
        if !self.function.is_bijective() || !self.is_homomorphism() {
            return false;
        }
        self.inverse().is_ok_and(|inverse| inverse.is_homomorphism())
    }

    /// Returns the kernel `{x : f(x) = e}` as a subgroup of the domain.
    ///
    /// # Errors
    ///
    /// Never for a homomorphism, whose kernel is always a normal subgroup.
    /// For other functions the restriction may fail to be a group.
    pub fn kernel(&self) -> Result<Group<A>, AlgebraError> {
        let identity = self.codomain.identity();
        let kernel: Set<A> = self
            .function
            .mapping()
            .filter(|(_, image)| *image == identity)
            .map(|(x, _)| x.clone())
            .collect();
        let kernel = self.domain.subgroup(&kernel)?;
        debug!("kernel of order {}", kernel.order());
        Ok(kernel)
    }

    /// Returns the image of the domain as a subgroup of the codomain.
    ///
    /// # Errors
    ///
    /// Never for a homomorphism. For other functions the image may fail to be a group.
    pub fn image_group(&self) -> Result<Group<B>, AlgebraError> {
        let image = self.function.image(self.domain.elements())?;
        self.codomain.subgroup(&image)
    }
}

impl<A: Element, B: Element> PartialEq for GroupFunction<A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain && self.codomain == other.codomain && self.function == other.function
    }
}
