//! Value ranking - most-recent-wins ordering by date qualifier.

use fact_base::{PointInTime, PropertyId, Qualifiers};
use tracing::debug;

/// A candidate value paired with its derived sort key.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedValue<T> {
    pub value: T,
    /// The date qualifier, or `None` when absent or unparseable.
    pub key: Option<PointInTime>,
}

/// Order candidates by their date qualifier, most recent first.
///
/// Absent and malformed qualifiers share the `None` key and rank after
/// every dated value. The sort is stable, so ties keep backend order.
pub fn rank_by_time<T>(
    candidates: Vec<(T, Qualifiers)>,
    qualifier: PropertyId,
) -> Vec<RankedValue<T>> {
    let mut ranked: Vec<RankedValue<T>> = candidates
        .into_iter()
        .map(|(value, qualifiers)| RankedValue {
            key: qualifiers.time_of(qualifier),
            value,
        })
        .collect();

    ranked.sort_by(|a, b| b.key.cmp(&a.key));
    debug!(candidates = ranked.len(), "ranked values by {qualifier}");
    ranked
}

/// The single winning value: head of the ranked order, everything else
/// discarded.
pub fn latest<T>(candidates: Vec<(T, Qualifiers)>, qualifier: PropertyId) -> Option<T> {
    rank_by_time(candidates, qualifier)
        .into_iter()
        .next()
        .map(|ranked| ranked.value)
}
