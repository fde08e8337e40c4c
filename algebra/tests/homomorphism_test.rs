use std::collections::HashMap;

use algebra::samples::{cyclic, dihedral, multiplicative, symmetric, Dihedral};
use algebra::{AlgebraError, Function, Group, GroupFunction, Set};
use itertools::Itertools;
use rand::{prelude::*, thread_rng};

#[test]
fn test_squaring_mod_five() {
    let m5 = multiplicative(5).unwrap();
    assert_eq!(m5.order(), 4);
    // Cyclic: 2 generates the whole group.
    assert_eq!(m5.element_order(&2).unwrap(), 4);
    assert_eq!(m5.generated_subgroup(&Set::from([2])).unwrap(), m5);

    let square = GroupFunction::from_fn(m5.clone(), m5.clone(), |x| x * x % 5).unwrap();
    assert!(square.is_homomorphism());
    assert!(!square.as_function().is_injective());
    assert!(!square.is_isomorphism());

    let kernel = square.kernel().unwrap();
    assert_eq!(*kernel.elements(), Set::from([1, 4]));
    assert!(m5.is_normal(&kernel).unwrap());
    assert_eq!(*square.image_group().unwrap().elements(), Set::from([1, 4]));
}

#[test]
fn test_identity_map_is_isomorphism() {
    let d4 = dihedral(4).unwrap();
    let identity = GroupFunction::from_fn(d4.clone(), d4.clone(), |x| *x).unwrap();
    assert!(identity.is_homomorphism());
    assert!(identity.is_isomorphism());

    let kernel = identity.kernel().unwrap();
    assert_eq!(kernel.order(), 1);
    assert_eq!(kernel.identity(), d4.identity());

    assert_eq!(identity.inverse().unwrap(), identity);
    assert_eq!(identity.compose(&identity).unwrap(), identity);
}

#[test]
fn test_non_homomorphism() {
    let z4 = cyclic(4).unwrap();
    let shift = GroupFunction::from_fn(z4.clone(), z4, |x| (x + 1) % 4).unwrap();
    assert!(shift.as_function().is_bijective());
    assert!(!shift.is_homomorphism());
    assert!(!shift.is_isomorphism());
    // {x : x + 1 = 0} = {3} is not a subgroup.
    assert!(shift.kernel().is_err());
}

#[test]
fn test_reduction_mod_four() {
    let z12 = cyclic(12).unwrap();
    let z4 = cyclic(4).unwrap();
    let reduce = GroupFunction::from_fn(z12.clone(), z4, |x| x % 4)
        .unwrap()
        .with_name("mod4");
    assert!(reduce.is_homomorphism());
    assert!(!reduce.is_isomorphism());

    let kernel = reduce.kernel().unwrap();
    assert_eq!(*kernel.elements(), Set::from([0, 4, 8]));

    // First isomorphism theorem: G / ker f ≅ im f.
    let quotient = z12.quotient(&kernel).unwrap();
    let image = reduce.image_group().unwrap();
    assert_eq!(quotient.order(), image.order());

    let induced = GroupFunction::from_fn(quotient, image, |coset| {
        let representative = coset.iter().next().unwrap();
        *reduce.apply(representative).unwrap()
    })
    .unwrap();
    assert!(induced.is_isomorphism());
}

#[test]
fn test_composition() {
    let z12 = cyclic(12).unwrap();
    let z6 = cyclic(6).unwrap();
    let z3 = cyclic(3).unwrap();
    let f = GroupFunction::from_fn(z12.clone(), z6.clone(), |x| x % 6)
        .unwrap()
        .with_name("f");
    let g = GroupFunction::from_fn(z6, z3.clone(), |x| x % 3)
        .unwrap()
        .with_name("g");

    let gf = g.compose(&f).unwrap();
    assert_eq!(gf.as_function().name(), Some("g∘f"));
    assert_eq!(gf.domain(), &z12);
    assert_eq!(gf.codomain(), &z3);
    assert!(gf.is_homomorphism());
    assert_eq!(gf.kernel().unwrap().order(), 4);
    assert_eq!(*gf.apply(&11).unwrap(), 2);
}

#[test]
fn test_type_mismatch() {
    let z4 = cyclic(4).unwrap();
    let z2 = cyclic(2).unwrap();
    let function = Function::from_fn(z4.elements().clone(), z2.elements().clone(), |x| x % 2).unwrap();

    let ok = GroupFunction::try_from_function(function.clone(), z4.clone(), z2.clone());
    assert!(ok.unwrap().is_homomorphism());

    assert!(matches!(
        GroupFunction::try_from_function(function.clone(), cyclic(3).unwrap(), z2),
        Err(AlgebraError::TypeMismatch { side: "domain" })
    ));
    assert!(matches!(
        GroupFunction::try_from_function(function, z4, cyclic(3).unwrap()),
        Err(AlgebraError::TypeMismatch { side: "codomain" })
    ));
}

#[test]
fn test_dihedral_and_symmetric_are_isomorphic() {
    use Dihedral::{Reflection, Rotation};

    let d3 = dihedral(3).unwrap();
    let s3 = symmetric(3).unwrap();

    let cycle = vec![1, 2, 0];
    let transposition = vec![0, 2, 1];
    let power = |k: u64| {
        s3.product(std::iter::repeat(&cycle).take(k as usize))
            .unwrap()
            .clone()
    };

    let f = GroupFunction::from_fn(d3.clone(), s3.clone(), |x| match *x {
        Rotation(k) => power(k),
        Reflection(k) => s3.mul(&power(k), &transposition).unwrap().clone(),
    })
    .unwrap();
    assert!(f.is_isomorphism());
    assert_eq!(f.kernel().unwrap().order(), 1);

    let back = f.inverse().unwrap();
    assert!(back.is_isomorphism());
    assert_eq!(*back.apply(&transposition).unwrap(), Reflection(0));
}

#[test]
fn test_random_relabeling_is_isomorphism() {
    let mut rng = thread_rng();
    let z6 = cyclic(6).unwrap();

    let mut labels: Vec<u64> = (100..106).collect();
    labels.shuffle(&mut rng);
    let relabel = |x: &u64| labels[*x as usize];

    let products: HashMap<(u64, u64), u64> = z6
        .products()
        .map(|((a, b), c)| ((relabel(a), relabel(b)), relabel(c)))
        .collect();
    let relabeled = Group::new(labels.iter().copied().collect(), &products).unwrap();
    assert_eq!(relabeled.order(), 6);
    assert!(relabeled.is_abelian());

    let f = GroupFunction::from_fn(z6, relabeled, relabel).unwrap();
    assert!(f.is_isomorphism());
    assert_eq!(*f.codomain().identity(), relabel(&0));
}

#[test]
fn test_non_isomorphic_groups_of_order_four() {
    let z4 = cyclic(4).unwrap();
    let klein = cyclic(2).unwrap().direct_product(&cyclic(2).unwrap()).unwrap();
    let elements: Vec<(u64, u64)> = klein.elements().iter().copied().collect();

    // No bijection ℤ/4 → ℤ/2 × ℤ/2 is a homomorphism.
    for permutation in (0..4usize).permutations(4) {
        let f = GroupFunction::new(
            (0..4u64).zip(permutation.iter().map(|&i| elements[i])),
            z4.clone(),
            klein.clone(),
        )
        .unwrap();
        assert!(f.as_function().is_bijective());
        assert!(!f.is_homomorphism());
    }
}
