//! Exhaustive dimension search.
//!
//! Every ordered triple in the configured range is evaluated; there is no
//! pruning, so the optimum can never be missed. The default range is 40
//! values per axis, 64,000 triples in total.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use crate::candidate::{Candidate, Dims};
use crate::config::SearchConfig;
use crate::geometry::canonical_shape;

/// Finds every candidate whose material use is within tolerance of the target.
///
/// Each coordinate ranges independently over `range_min..range_max` (upper
/// bound exclusive), with `length` outermost and `height` innermost. Triples
/// whose shrunk dimensions are not all positive are skipped. The result is
/// ranked by [`rank`]; an empty range yields an empty result.
pub fn search(config: &SearchConfig) -> Vec<Candidate> {
    let range = config.range_min..config.range_max;
    // a negative tolerance accepts nothing
    let tolerance = u64::try_from(config.tolerance).ok();

    let mut solutions = Vec::new();
    let mut scanned = 0usize;
    let mut infeasible = 0usize;

    for length in range.clone() {
        for width in range.clone() {
            for height in range.clone() {
                scanned += 1;

                let Some(candidate) = Candidate::evaluate((length, width, height), config.shrink)
                else {
                    infeasible += 1;
                    continue;
                };

                let deviation = candidate.deviation(config.target);
                if tolerance.is_some_and(|tolerance| deviation <= tolerance) {
                    solutions.push(candidate);
                }
            }
        }
    }

    rank(&mut solutions);

    tracing::debug!(
        scanned,
        infeasible,
        accepted = solutions.len(),
        "dimension scan finished"
    );

    solutions
}

/// Orders candidates by descending inner volume.
///
/// The sort is stable and compares inner volume only, so candidates with
/// equal volume keep their scan order rather than being reordered by their
/// dimensions.
pub fn rank(solutions: &mut [Candidate]) {
    solutions.sort_by(by_inner_volume_desc);
}

#[inline]
fn by_inner_volume_desc(a: &Candidate, b: &Candidate) -> Ordering {
    b.inner_volume.cmp(&a.inner_volume)
}

/// Returns the best candidate of a ranked sequence, if there is one.
#[inline]
pub fn best(solutions: &[Candidate]) -> Option<&Candidate> {
    solutions.first()
}

/// Keeps only the first orientation of each box shape, preserving order.
///
/// On a ranked sequence this keeps the highest-ranked orientation, so a
/// top-N list shows N different boxes instead of permutations of one.
pub fn distinct_shapes(solutions: &[Candidate]) -> Vec<Candidate> {
    let mut seen_shapes: FxHashSet<Dims> = FxHashSet::default();

    solutions
        .iter()
        .filter(|candidate| seen_shapes.insert(canonical_shape(candidate.dims())))
        .copied()
        .collect()
}
