use crate::naming::prefix_for;

use super::scan::UsedPrefixes;

/// Choose the index for the next project in a directory.
///
/// Holes in `0..=last_index` are reused first (projects that were deleted or
/// renamed away). Otherwise counting continues past `last_index`, skipping any
/// prefix a subdirectory already carries.
pub(crate) fn select_index(last_index: Option<u64>, used: &UsedPrefixes) -> u64 {
    let is_free = |i: &u64| !used.contains(&prefix_for(*i));

    let next = match last_index {
        Some(last) => {
            if let Some(hole) = (0..=last).find(is_free) {
                return hole;
            }
            last.saturating_add(1)
        }
        None => 0,
    };
    (next..).find(is_free).unwrap_or(next)
}
