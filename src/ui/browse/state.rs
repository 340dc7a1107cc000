use crate::content::ContentRecord;
use crate::ui::mvi::UiState;

/// Facet thresholds over the record's numeric count.
///
/// `High` admits `count >= high`, `Medium` admits `medium <= count < high`,
/// `Low` admits `count < medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetThresholds {
    pub high: u32,
    pub medium: u32,
}

impl Default for FacetThresholds {
    fn default() -> Self {
        Self { high: 10, medium: 5 }
    }
}

/// Coarse grouping over the numeric facet, used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacetBucket {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl FacetBucket {
    pub fn admits(self, count: u32, thresholds: FacetThresholds) -> bool {
        match self {
            FacetBucket::All => true,
            FacetBucket::High => count >= thresholds.high,
            FacetBucket::Medium => count >= thresholds.medium && count < thresholds.high,
            FacetBucket::Low => count < thresholds.medium,
        }
    }

    /// Next bucket in display order (wraps back to All).
    pub fn cycled(self) -> Self {
        match self {
            FacetBucket::All => FacetBucket::High,
            FacetBucket::High => FacetBucket::Medium,
            FacetBucket::Medium => FacetBucket::Low,
            FacetBucket::Low => FacetBucket::All,
        }
    }

    pub fn label(self, thresholds: FacetThresholds) -> String {
        match self {
            FacetBucket::All => "All".to_string(),
            FacetBucket::High => format!("{}+ Universities", thresholds.high),
            FacetBucket::Medium => format!(
                "{}-{} Universities",
                thresholds.medium,
                thresholds.high.saturating_sub(1)
            ),
            FacetBucket::Low => format!("1-{} Universities", thresholds.medium.saturating_sub(1)),
        }
    }
}

/// User-mutable filter over the snapshot. Replacing it resets the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub facet: FacetBucket,
}

/// Derived view of the current page, recomputed from a fully-applied
/// snapshot + criteria pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, R> {
    pub visible: Vec<&'a R>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub is_loading: bool,
}

/// State of a filtered, paginated list over a fetched collection.
///
/// The snapshot is immutable once stored and replaced wholesale by a new
/// `Loaded` intent; all other transitions only touch criteria and page.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState<R> {
    records: Vec<R>,
    criteria: FilterCriteria,
    /// Current page, 1-based. Invariant: `page <= max(total_pages, 1)`.
    page: usize,
    page_size: usize,
    thresholds: FacetThresholds,
    is_loading: bool,
}

impl<R> Default for BrowseState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            criteria: FilterCriteria::default(),
            page: 1,
            page_size: 6,
            thresholds: FacetThresholds::default(),
            is_loading: true,
        }
    }
}

impl<R: ContentRecord> UiState for BrowseState<R> {}

impl<R: ContentRecord> BrowseState<R> {
    pub fn with_config(page_size: usize, thresholds: FacetThresholds) -> Self {
        Self {
            page_size: page_size.max(1),
            thresholds,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn thresholds(&self) -> FacetThresholds {
        self.thresholds
    }

    /// The unfiltered snapshot, in fetch order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size)
    }

    /// Derive the visible page.
    pub fn view(&self) -> PageView<'_, R> {
        let filtered = self.filtered();
        let filtered_count = filtered.len();
        let total_pages = filtered_count.div_ceil(self.page_size);
        let start = (self.page - 1) * self.page_size;
        let visible = filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();
        PageView {
            visible,
            page: self.page,
            total_pages,
            filtered_count,
            is_loading: self.is_loading,
        }
    }

    fn filtered(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|record| {
                record.matches_search(&self.criteria.search)
                    && self
                        .criteria
                        .facet
                        .admits(record.facet_count(), self.thresholds)
            })
            .collect()
    }

    // Transition helpers for the reducer. Consuming by value keeps each
    // intent an atomic replacement of the whole state.

    pub(super) fn loaded(mut self, records: Vec<R>) -> Self {
        self.records = records;
        self.page = 1;
        self.is_loading = false;
        self
    }

    pub(super) fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self.page = 1;
        self
    }

    pub(super) fn with_page(mut self, requested: usize) -> Self {
        let last = self.total_pages().max(1);
        self.page = requested.clamp(1, last);
        self
    }
}
