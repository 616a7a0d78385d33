use std::cmp::Ordering;

use piimask_core::Span;

/// Reduce detector output to a non-overlapping span set.
///
/// Candidates are visited by start, longest first, highest score first. A
/// candidate that overlaps spans already kept replaces them only when its
/// score is strictly higher than all of theirs; otherwise it is dropped.
/// The result is ordered by start.
pub fn resolve_overlaps(spans: Vec<Span>) -> Vec<Span> {
    let mut candidates = spans;
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.len().cmp(&a.len()))
            .then_with(|| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(Ordering::Equal)
            })
    });

    let mut kept: Vec<Span> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let best_rival = kept
            .iter()
            .filter(|span| span.overlaps(&candidate))
            .map(|span| span.confidence)
            .fold(None, |best: Option<f64>, score| {
                Some(best.map_or(score, |b| b.max(score)))
            });

        match best_rival {
            None => kept.push(candidate),
            Some(score) if candidate.confidence > score => {
                kept.retain(|span| !span.overlaps(&candidate));
                kept.push(candidate);
            }
            Some(_) => {}
        }
    }

    kept.sort_by_key(|span| span.start);
    kept
}
