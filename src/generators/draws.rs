//! Seeded draw helpers shared by every generation stage.
//!
//! The upstream service models selections as "draw an N-digit number, take it
//! modulo the candidate list length". Keeping that in one place guarantees
//! identical selection semantics across all stages.

use rand::Rng;
use time::{Duration, OffsetDateTime};

/// Seconds in the one-year window that "past" and "future" draws cover.
const DATE_SPREAD_SECS: i64 = 365 * 24 * 60 * 60;

/// Draws a 2-digit number (10..=99), matching a two-character numeric token
/// with no leading zero.
pub fn two_digit(rng: &mut impl Rng) -> u32 {
    rng.gen_range(10..100)
}

/// Draws a 5-digit number (10000..=99999).
pub fn five_digit(rng: &mut impl Rng) -> u32 {
    rng.gen_range(10_000..100_000)
}

/// Entity count for a stage: a 2-digit draw plus one.
///
/// The `+1` offset is what keeps every generated list non-empty, which the
/// index-modulo picks downstream rely on.
pub fn derived_count(rng: &mut impl Rng) -> usize {
    two_digit(rng) as usize + 1
}

/// Picks an element by a 5-digit draw taken modulo the list length.
///
/// Panics if `items` is empty. Callers derive their candidate lists from
/// [`derived_count`], which never yields zero.
pub fn pick_by_seeded_index<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    &items[five_digit(rng) as usize % items.len()]
}

/// A timestamp uniformly within the year before `now`.
pub fn past(rng: &mut impl Rng, now: OffsetDateTime) -> OffsetDateTime {
    now - Duration::seconds(rng.gen_range(1..=DATE_SPREAD_SECS))
}

/// A timestamp uniformly within the year after `now`.
pub fn future(rng: &mut impl Rng, now: OffsetDateTime) -> OffsetDateTime {
    now + Duration::seconds(rng.gen_range(1..=DATE_SPREAD_SECS))
}

/// A timestamp uniformly within `[from, to]`, inclusive on both ends.
///
/// Requires `from <= to`.
pub fn between(rng: &mut impl Rng, from: OffsetDateTime, to: OffsetDateTime) -> OffsetDateTime {
    let span = (to - from).whole_seconds();
    from + Duration::seconds(rng.gen_range(0..=span))
}
