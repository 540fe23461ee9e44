//! Trip assembly and fastest/cheapest selection.

use tracing::debug;

use crate::domain::{Point, Route, Trip};

/// Whether `candidate` should take the fastest title from `holder`.
///
/// Lower total time wins; equal time falls back to lower total cost.
fn is_faster(candidate: &Trip, holder: &Trip) -> bool {
    candidate.total_time() < holder.total_time()
        || (candidate.total_time() == holder.total_time()
            && candidate.total_cost() < holder.total_cost())
}

/// Whether `candidate` should take the cheapest title from `holder`.
///
/// Lower total cost wins; equal cost falls back to lower total time.
fn is_cheaper(candidate: &Trip, holder: &Trip) -> bool {
    candidate.total_cost() < holder.total_cost()
        || (candidate.total_cost() == holder.total_cost()
            && candidate.total_time() < holder.total_time())
}

/// Build trips from enumerated paths and mark the fastest and cheapest.
///
/// Paths are processed in the order given. Comparisons are strict, so when
/// two trips tie on both time and cost the earlier one keeps the title.
/// Paths that don't form a valid trip are dropped.
///
/// Returns all trips in input order. An empty input gives an empty result
/// with nothing marked.
pub fn select_trips(from: &Point, to: &Point, paths: Vec<Vec<Route>>) -> Vec<Trip> {
    let mut trips: Vec<Trip> = Vec::with_capacity(paths.len());
    let mut fastest: Option<usize> = None;
    let mut cheapest: Option<usize> = None;

    for routes in paths {
        let trip = match Trip::new(from.clone(), to.clone(), routes) {
            Ok(trip) => trip,
            Err(e) => {
                debug!(error = %e, "discarding path");
                continue;
            }
        };

        let index = trips.len();
        if fastest.is_none_or(|best| is_faster(&trip, &trips[best])) {
            fastest = Some(index);
        }
        if cheapest.is_none_or(|best| is_cheaper(&trip, &trips[best])) {
            cheapest = Some(index);
        }
        trips.push(trip);
    }

    if let Some(i) = fastest {
        trips[i].mark_fastest();
    }
    if let Some(i) = cheapest {
        trips[i].mark_cheapest();
    }

    trips
}
