//! Recency selection over the flat note sequence.

use std::cmp::Reverse;

use crate::note::Til;

/// Return the `n` most recently added notes, newest first.
///
/// `n` is clamped to the number of notes, so asking for more than exist
/// returns everything. The sort is stable: notes sharing a date (including
/// notes with no date, which order as oldest) keep their discovery order.
/// The caller's sequence is copied, never reordered in place.
#[must_use]
pub fn most_recent(tils: &[Til], n: usize) -> Vec<Til> {
    let mut sorted = tils.to_vec();
    sorted.sort_by_key(|til| Reverse(til.date_added));
    sorted.truncate(n);
    sorted
}
