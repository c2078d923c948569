//! Generalized erosion.

use crate::element::StructuringElement;
use crate::error::MorphError;
use crate::image::Image;
use morpho_core::{Lattice, LatticeQuotient};
use morpho_space::SpaceError;

/// Erode `image` by `element`.
///
/// For each coordinate `p` of the image's space, the result holds the
/// meet over all shifts `s` of the element of
/// `subtract(image[p + s], element[s])`, computed in the quotient of
/// the two lattices. Shifts whose action lands outside the space are
/// skipped; a coordinate where every shift falls outside receives the
/// output lattice's `top`. Any other failure aborts the whole
/// operation.
///
/// Erosion is the adjoint of [`dilation`](crate::dilation): when the
/// lattice pairings satisfy `add(x, b) ≤ a` iff `x ≤ subtract(a, b)`,
/// dilating an eroded image never overshoots the original and eroding
/// a dilated one never undershoots it.
pub fn erosion<L, M>(
    image: &Image<L>,
    element: &StructuringElement<M>,
) -> Result<Image<L::Output>, MorphError>
where
    L: LatticeQuotient<M>,
    M: Lattice,
{
    let out_lattice = image.lattice().quotient(element.lattice())?;
    let seed = out_lattice.top();
    let mut output = Image::filled(image.space_handle(), out_lattice.clone(), seed.clone());

    let shifts = element.group().canonical_ordering();
    for point in image.space().canonical_ordering() {
        let mut acc = seed.clone();
        for shift in &shifts {
            let source = image.space().act(&point, shift);
            let level = match image.get(&source) {
                Ok(level) => level.clone(),
                Err(MorphError::Space(SpaceError::OutOfBounds { .. })) => continue,
                Err(err) => return Err(err),
            };
            let dominated = image.lattice().subtract(&level, element.get(shift)?)?;
            acc = out_lattice.meet(&acc, &dominated)?;
        }
        output.set(&point, acc)?;
    }
    Ok(output)
}
