use crate::content::ContentRecord;
use crate::ui::browse::state::FacetBucket;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BrowseIntent<R> {
    /// Fetch completed; replace the snapshot wholesale.
    Loaded { records: Vec<R> },
    /// Fetch failed; degrade to an empty snapshot. Indistinguishable from
    /// "no results" past this point.
    LoadFailed,
    SetSearch(String),
    SetFacet(FacetBucket),
    /// Out-of-range pages are clamped, not rejected.
    SetPage(usize),
    NextPage,
    PrevPage,
}

impl<R: ContentRecord> Intent for BrowseIntent<R> {}
