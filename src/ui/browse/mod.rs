//! Browse controller: search/filter/paginate over a fetched collection.
//!
//! The concrete usage is the country-guide browser, but the state machine
//! is generic over any [`ContentRecord`](crate::content::ContentRecord) —
//! each usage is a thin configuration (page size, facet thresholds) over
//! the same reducer.

mod intent;
mod reducer;
mod state;

pub use intent::BrowseIntent;
pub use reducer::BrowseReducer;
pub use state::{BrowseState, FacetBucket, FacetThresholds, FilterCriteria, PageView};
