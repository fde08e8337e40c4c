use algebra::samples::{dihedral, multiplicative, Dihedral};
use algebra::{AlgebraError, GroupFunction, Set};

fn main() -> Result<(), AlgebraError> {
    // The symmetries of a triangle.
    let d3 = dihedral(3)?;
    println!("D3 = {:?}", d3.elements());
    println!("abelian: {}", d3.is_abelian());
    println!("center: {:?}", d3.center()?.elements());

    // Rotations form a normal subgroup; the quotient has two cosets.
    let rotations = d3.commutator_subgroup()?;
    println!("[D3, D3] = {:?}", rotations.elements());
    let quotient = d3.quotient(&rotations)?;
    println!("D3 / [D3, D3] = {:?}", quotient.elements());

    // A reflection generates a subgroup that is not normal.
    let flip = d3.subgroup(&Set::from([Dihedral::Rotation(0), Dihedral::Reflection(0)]))?;
    println!("is {:?} normal: {}", flip.elements(), d3.is_normal(&flip)?);
    if let Err(err) = d3.quotient(&flip) {
        println!("{err}");
    }

    // Squaring in (ℤ/7ℤ)ˣ.
    let m7 = multiplicative(7)?;
    let square = GroupFunction::from_fn(m7.clone(), m7, |x| x * x % 7)?.with_name("sq");
    println!("sq is a homomorphism: {}", square.is_homomorphism());
    println!("ker sq = {:?}", square.kernel()?.elements());
    println!("im sq = {:?}", square.image_group()?.elements());

    Ok(())
}
