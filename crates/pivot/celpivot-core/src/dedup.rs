//! Cel deduplicator: the ordered set of distinct in-between cels in a range.

use crate::data::{FrameIndex, FrameRange};
use crate::error::HostError;
use crate::host::CelId;

/// Scan the interior frames of `range` in increasing order and collect the
/// distinct cels that differ from both boundary cels, in first-occurrence
/// order.
///
/// The resulting order fixes each cel's interpolation step later on, so it is
/// part of the contract, not an implementation detail. An empty result means
/// there is nothing to interpolate; callers treat that as a guard, not a
/// fault.
pub fn in_between_cels<F>(mut cel_at: F, range: FrameRange) -> Result<Vec<CelId>, HostError>
where
    F: FnMut(FrameIndex) -> Result<CelId, HostError>,
{
    let first = cel_at(range.first)?;
    let last = cel_at(range.last)?;

    let mut cels: Vec<CelId> = Vec::new();
    for f in range.interior() {
        let cur = cel_at(f)?;
        if cur != first && cur != last && !cels.contains(&cur) {
            cels.push(cur);
        }
    }
    Ok(cels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(cels: &[&str], first: FrameIndex, last: FrameIndex) -> Vec<CelId> {
        let lookup = |f: FrameIndex| Ok(cels[(f - 1) as usize].to_string());
        in_between_cels(lookup, FrameRange { first, last }).unwrap()
    }

    #[test]
    fn preserves_first_occurrence_order() {
        assert_eq!(scan(&["A", "C", "B", "C", "D"], 1, 5), vec!["C", "B"]);
    }

    #[test]
    fn excludes_boundary_cels_wherever_they_appear() {
        assert_eq!(scan(&["A", "D", "B", "A", "D"], 1, 5), vec!["B"]);
    }

    #[test]
    fn repeated_in_between_cel_listed_once() {
        assert_eq!(scan(&["A", "B", "C", "B", "D"], 1, 5), vec!["B", "C"]);
    }

    #[test]
    fn held_cel_yields_empty_set() {
        assert!(scan(&["X", "X", "X", "X", "X"], 1, 5).is_empty());
    }

    #[test]
    fn two_frame_range_has_no_in_betweens() {
        assert!(scan(&["A", "B"], 1, 2).is_empty());
    }
}
