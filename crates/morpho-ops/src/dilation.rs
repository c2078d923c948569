//! Generalized dilation.

use crate::element::StructuringElement;
use crate::error::MorphError;
use crate::image::Image;
use morpho_core::{Lattice, LatticeProduct};
use morpho_space::SpaceError;

/// Dilate `image` by `element`.
///
/// For each coordinate `p` of the image's space, the result holds the
/// join over all shifts `s` of the element of
/// `add(image[p + (-s)], element[s])`, computed in the product of the
/// two lattices. Shifts whose negated action lands outside the space
/// are skipped; a coordinate where every shift falls outside receives
/// the output lattice's `bot`. Any other failure aborts the whole
/// operation.
///
/// The output image lives on the same space as the input and on the
/// lattice [`product`](LatticeProduct::product) of the two operand
/// lattices.
pub fn dilation<L, M>(
    image: &Image<L>,
    element: &StructuringElement<M>,
) -> Result<Image<L::Output>, MorphError>
where
    L: LatticeProduct<M>,
    M: Lattice,
{
    let out_lattice = image.lattice().product(element.lattice())?;
    let seed = out_lattice.bot();
    let mut output = Image::filled(image.space_handle(), out_lattice.clone(), seed.clone());

    let shifts = element.group().canonical_ordering();
    for point in image.space().canonical_ordering() {
        let mut acc = seed.clone();
        for shift in &shifts {
            let source = image.space().act(&point, &element.group().negate(shift));
            let level = match image.get(&source) {
                Ok(level) => level.clone(),
                Err(MorphError::Space(SpaceError::OutOfBounds { .. })) => continue,
                Err(err) => return Err(err),
            };
            let combined = image.lattice().add(&level, element.get(shift)?)?;
            acc = out_lattice.join(&acc, &combined)?;
        }
        output.set(&point, acc)?;
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpho_core::{AxisIndices, Coord, LatticeError, Offset};
    use morpho_lattices::{BooleanLattice, DynLattice, DynLevel, RhythmLevel, RhythmicLattice};
    use morpho_space::{Circle, Group, Line, Space, SpaceError, Translations};
    use smallvec::{smallvec, SmallVec};
    use std::sync::Arc;

    fn line(n: u32) -> Arc<dyn Space> {
        Arc::new(Line::new(n).unwrap())
    }

    fn translations(n: u32) -> Arc<dyn Group> {
        Arc::new(Translations::new(n).unwrap())
    }

    fn bool_image(space: Arc<dyn Space>, data: Vec<bool>) -> Image<BooleanLattice> {
        let shape: Vec<usize> = space.axis_sizes().to_vec();
        Image::new(space, BooleanLattice, &shape, data).unwrap()
    }

    fn bool_element(group: Arc<dyn Group>, data: Vec<bool>) -> StructuringElement<BooleanLattice> {
        let shape: Vec<usize> = group.axis_sizes().to_vec();
        StructuringElement::new(group, BooleanLattice, &shape, data).unwrap()
    }

    /// A group whose two offsets both move away from the origin, so a
    /// short enough line leaves some coordinates with no in-bounds
    /// contribution at all.
    #[derive(Debug)]
    struct FarShifts;

    impl Group for FarShifts {
        fn ndim(&self) -> usize {
            1
        }
        fn shift_count(&self) -> usize {
            2
        }
        fn axis_sizes(&self) -> SmallVec<[usize; 4]> {
            smallvec![2]
        }
        fn canonical_ordering(&self) -> Vec<Offset> {
            vec![smallvec![5], smallvec![6]]
        }
        fn negate(&self, shift: &Offset) -> Offset {
            smallvec![-shift[0]]
        }
        fn resolve(&self, shift: &Offset) -> Result<AxisIndices, SpaceError> {
            match shift[0] {
                5 => Ok(smallvec![0]),
                6 => Ok(smallvec![1]),
                _ => Err(SpaceError::OutOfBounds {
                    coord: shift.clone(),
                    bounds: "shifts {5, 6}".to_string(),
                }),
            }
        }
        fn structure_eq(&self, other: &dyn Group) -> bool {
            other.downcast_ref::<FarShifts>().is_some()
        }
    }

    #[test]
    fn identity_element_preserves_image() {
        // Translations(1) holds only the zero shift.
        let img = bool_image(line(4), vec![false, true, true, false]);
        let se = bool_element(translations(1), vec![true]);
        let out = dilation(&img, &se).unwrap();
        assert_eq!(out.data(), img.data());
    }

    #[test]
    fn dilation_smears_forward() {
        // A true at position 1 with shifts {0, 1} lands at 1 and 2.
        let img = bool_image(line(4), vec![false, true, false, false]);
        let se = bool_element(translations(2), vec![true, true]);
        let out = dilation(&img, &se).unwrap();
        assert_eq!(out.data(), &[false, true, true, false]);
    }

    #[test]
    fn circle_dilation_wraps() {
        let img = bool_image(Arc::new(Circle::new(4).unwrap()), vec![false, false, false, true]);
        let se = bool_element(translations(2), vec![true, true]);
        let out = dilation(&img, &se).unwrap();
        // position 3 smears onto 0 around the seam
        assert_eq!(out.data(), &[true, false, false, true]);
    }

    #[test]
    fn out_of_reach_coordinates_get_bot() {
        // Both shifts look 5 or 6 cells back; on a 3-cell line every
        // lookup misses, so the result is uniformly bot.
        let img = bool_image(line(3), vec![true, true, true]);
        let shape: Vec<usize> = FarShifts.axis_sizes().to_vec();
        let se =
            StructuringElement::new(Arc::new(FarShifts), BooleanLattice, &shape, vec![true, true])
                .unwrap();
        let out = dilation(&img, &se).unwrap();
        assert_eq!(out.data(), &[false, false, false]);
    }

    #[test]
    fn single_point_space_uses_only_in_bounds_shifts() {
        // On a 1-cell line, shifts 1 and 2 always miss; the zero shift
        // alone decides the result and no error escapes.
        let img = bool_image(line(1), vec![true]);
        let se = bool_element(translations(3), vec![true, true, true]);
        let out = dilation(&img, &se).unwrap();
        assert_eq!(out.data(), &[true]);
    }

    #[test]
    fn boolean_by_rhythmic_gates() {
        let img = bool_image(line(3), vec![true, false, false]);
        let se = StructuringElement::new(
            translations(1),
            RhythmicLattice,
            &[1],
            vec![RhythmLevel::SoftOnset],
        )
        .unwrap();
        let out = dilation(&img, &se).unwrap();
        assert_eq!(
            out.data(),
            &[RhythmLevel::SoftOnset, RhythmLevel::Rest, RhythmLevel::Rest]
        );
    }

    #[test]
    fn unsupported_dyn_pairing_propagates() {
        let img = Image::new(
            line(2),
            DynLattice::rhythmic(),
            &[2],
            vec![
                DynLevel::Rhythm(RhythmLevel::Onset),
                DynLevel::Rhythm(RhythmLevel::Rest),
            ],
        )
        .unwrap();
        let se = StructuringElement::new(
            translations(1),
            DynLattice::rhythmic(),
            &[1],
            vec![DynLevel::Rhythm(RhythmLevel::Onset)],
        )
        .unwrap();
        let err = dilation(&img, &se).unwrap_err();
        assert!(matches!(
            err,
            MorphError::Lattice(LatticeError::UnsupportedCombination { .. })
        ));
    }

    #[test]
    fn point_sweep_matches_manual_union() {
        // Dilation of a boolean image is the union of shifted copies.
        let data = vec![true, false, false, true, false];
        let img = bool_image(line(5), data.clone());
        let se = bool_element(translations(3), vec![true, false, true]);
        let out = dilation(&img, &se).unwrap();
        let mut expected = vec![false; 5];
        for (i, &v) in data.iter().enumerate() {
            if v {
                for s in [0usize, 2] {
                    if i + s < 5 {
                        expected[i + s] = true;
                    }
                }
            }
        }
        assert_eq!(out.data(), expected.as_slice());
    }

    #[test]
    fn output_space_is_input_space() {
        let img = bool_image(line(3), vec![true, false, false]);
        let se = bool_element(translations(2), vec![true, true]);
        let out = dilation(&img, &se).unwrap();
        assert!(out.space().topology_eq(img.space()));
        let p: Coord = smallvec![2];
        assert!(out.get(&p).is_ok());
    }
}
