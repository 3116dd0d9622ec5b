//! Candidate box dimensions and their derived volumes.
//!
//! A candidate is an outer box of `length x width x height` units whose walls
//! are `shrink` units thick on every axis. The hollow inside it is the inner
//! box; the difference between the two volumes is the material in the walls.

use serde::Serialize;

/// Three box dimensions, in search units.
pub type Dims = (i64, i64, i64);

/// One evaluated triple that survived the feasibility check.
///
/// Derived volumes are computed once in [`Candidate::evaluate`] so ranking and
/// reporting never recompute them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub length: i64,
    pub width: i64,
    pub height: i64,
    /// Wall offset the volumes were computed with.
    pub shrink: i64,
    /// `length * width * height`.
    pub outer_volume: i64,
    /// Volume of the box after shrinking every axis.
    pub inner_volume: i64,
    /// `outer_volume - inner_volume`.
    pub material_used: i64,
}

impl Candidate {
    /// Evaluates a triple with the given wall offset.
    ///
    /// Returns `None` if any shrunk dimension is zero or negative: such a box
    /// has no hollow, even when two negative factors would multiply to a
    /// positive volume. Triples whose volumes do not fit in `i64` are also
    /// rejected.
    pub fn evaluate((length, width, height): Dims, shrink: i64) -> Option<Self> {
        let inner_length = length.checked_sub(shrink)?;
        let inner_width = width.checked_sub(shrink)?;
        let inner_height = height.checked_sub(shrink)?;
        if inner_length <= 0 || inner_width <= 0 || inner_height <= 0 {
            return None;
        }

        let outer_volume = length.checked_mul(width)?.checked_mul(height)?;
        let inner_volume = inner_length
            .checked_mul(inner_width)?
            .checked_mul(inner_height)?;

        Some(Self {
            length,
            width,
            height,
            shrink,
            outer_volume,
            // every outer dimension exceeds its inner one, so this stays positive
            inner_volume,
            material_used: outer_volume - inner_volume,
        })
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        (self.length, self.width, self.height)
    }

    /// Dimensions of the hollow.
    #[inline]
    pub fn inner_dims(&self) -> Dims {
        (
            self.length - self.shrink,
            self.width - self.shrink,
            self.height - self.shrink,
        )
    }

    /// Absolute distance between the material used and `target`.
    #[inline]
    pub fn deviation(&self, target: i64) -> u64 {
        self.material_used.abs_diff(target)
    }
}
