//! Axis orientations of a box.
//!
//! A box can be stood on any of its faces and turned, which permutes its
//! three dimensions. There are 6 such permutations; boxes with equal sides
//! have fewer distinct ones (3 for two equal sides, 1 for a cube).

use crate::candidate::Dims;

/// All 6 axis permutations of a box.
///
/// Ordered by which original axis ends up as the length:
/// - Permutations 0-1: length stays first
/// - Permutations 2-3: width becomes length
/// - Permutations 4-5: height becomes length
pub const ORIENTATIONS: [fn(Dims) -> Dims; 6] = [
    |(l, w, h)| (l, w, h), // identity
    |(l, w, h)| (l, h, w),
    |(l, w, h)| (w, l, h),
    |(l, w, h)| (w, h, l),
    |(l, w, h)| (h, l, w),
    |(l, w, h)| (h, w, l),
];

/// Generates all distinct orientations of a box, sorted.
pub fn all_orientations(dims: Dims) -> Vec<Dims> {
    let mut orientations: Vec<Dims> = ORIENTATIONS.iter().map(|orient| orient(dims)).collect();

    // remove duplicate orientations (equal sides produce duplicates)
    orientations.sort();
    orientations.dedup();
    orientations
}

/// Returns the smallest orientation, which is the ascending-sorted triple.
///
/// Two triples describe the same physical box exactly when their canonical
/// shapes are equal.
#[inline]
pub fn canonical_shape(dims: Dims) -> Dims {
    all_orientations(dims).first().copied().unwrap_or(dims)
}
