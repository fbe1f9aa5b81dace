//! Cross-collection pager for the events listing path.
//!
//! One page of results is drawn from up to five independent per-category
//! collections. The pager runs two passes:
//!
//! 1. a counting pass summing per-collection counts for the pagination
//!    metadata, and
//! 2. a fetch walk that spends the page's skip/limit budget across the
//!    collections in their fixed walk order.
//!
//! The walk is order-dependent rather than globally date-aware: records
//! are only sorted by start date after gathering, so a record from a
//! later collection with an earlier start date can miss the current page
//! when an earlier collection's quota already absorbed the limit. That
//! behavior is part of the endpoint's published contract.
//!
//! The two passes issue separate counts, so a write landing between them
//! can skew `totalEvents` against the page contents. Reads are not
//! isolated against concurrent writes; the skew is accepted.

use crate::error::{EventError, EventResult};
use crate::models::{EventCategory, EventFilter, EventPage, EventSummary, Pagination};
use crate::store::EventStore;

/// Produce one page of events across the candidate collections.
///
/// `page` is 1-indexed and defaults upstream to 1; `limit` defaults to
/// 10. Neither is validated against an upper bound. A non-positive
/// `limit` yields no results (but still-correct metadata); a
/// non-positive `page` is treated as page 1.
pub async fn paginate(
    store: &EventStore,
    category: Option<EventCategory>,
    filter: &EventFilter,
    page: i64,
    limit: i64,
) -> EventResult<EventPage> {
    let candidates = store.candidates(category);

    // Counting pass, independent of the fetch walk below.
    let mut total_events: i64 = 0;
    for collection in &candidates {
        let count = collection
            .count(filter)
            .await
            .map_err(|e| EventError::Fetch(e.to_string()))?;
        total_events += count as i64;
    }

    let total_pages = if limit > 0 {
        (total_events + limit - 1) / limit
    } else {
        0
    };

    // Fetch walk. A non-positive page clamps to a zero skip.
    let mut current_skip: i64 = ((page - 1) * limit).max(0);
    let mut remaining_limit: i64 = limit;
    let mut gathered = Vec::new();

    for collection in &candidates {
        if remaining_limit <= 0 {
            break;
        }

        let collection_count = collection
            .count(filter)
            .await
            .map_err(|e| EventError::Fetch(e.to_string()))? as i64;

        if current_skip >= collection_count {
            // Entirely consumed by the skip budget; nothing fetched.
            current_skip -= collection_count;
            continue;
        }

        let fetched = collection
            .page(filter, current_skip as usize, remaining_limit as usize)
            .await
            .map_err(|e| EventError::Fetch(e.to_string()))?;

        remaining_limit -= fetched.len() as i64;
        current_skip = 0;
        gathered.extend(fetched);
    }

    // Per-collection order is by start date already; the global sort
    // re-establishes date order across collection boundaries. Stable, so
    // ties keep walk order.
    gathered.sort_by(|a, b| a.start_date.cmp(&b.start_date));

    let events: Vec<EventSummary> = gathered.into_iter().map(EventSummary::from).collect();

    Ok(EventPage {
        events,
        pagination: Pagination {
            page,
            limit,
            total_events,
            total_pages,
            has_more: page < total_pages,
        },
    })
}
