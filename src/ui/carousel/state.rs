use crate::content::ContentRecord;
use crate::ui::mvi::UiState;

/// Navigation direction for the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// State of a single-focus rotating presentation over a fetched collection.
///
/// Two pause flags are kept independent: `explicit_hold` tracks the
/// hover/focus gesture and persists until explicitly released;
/// `cooldown_active` is set by manual navigation and cleared when the
/// cooldown timer elapses. The carousel is paused while either is set.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState<R> {
    records: Vec<R>,
    /// Index of the record currently displayed. Invariant: zero when the
    /// snapshot is empty, otherwise `focused < records.len()`.
    focused: usize,
    explicit_hold: bool,
    cooldown_active: bool,
    is_loading: bool,
}

impl<R> Default for CarouselState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            focused: 0,
            explicit_hold: false,
            cooldown_active: false,
            is_loading: true,
        }
    }
}

impl<R: ContentRecord> UiState for CarouselState<R> {}

impl<R: ContentRecord> CarouselState<R> {
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// The record currently displayed, if any.
    pub fn current(&self) -> Option<&R> {
        self.records.get(self.focused)
    }

    pub fn is_paused(&self) -> bool {
        self.explicit_hold || self.cooldown_active
    }

    pub fn explicit_hold(&self) -> bool {
        self.explicit_hold
    }

    pub fn cooldown_active(&self) -> bool {
        self.cooldown_active
    }

    /// True while the auto-advance state machine is in `Running`: more
    /// than one record and no pause flag set.
    pub fn is_rotating(&self) -> bool {
        self.records.len() > 1 && !self.is_paused()
    }

    // Transition helpers for the reducer.

    pub(super) fn loaded(mut self, records: Vec<R>) -> Self {
        self.records = records;
        self.focused = 0;
        self.explicit_hold = false;
        self.cooldown_active = false;
        self.is_loading = false;
        self
    }

    pub(super) fn ticked(mut self) -> Self {
        if self.is_rotating() {
            self.focused = (self.focused + 1) % self.records.len();
        }
        self
    }

    pub(super) fn advanced(mut self, direction: Direction) -> Self {
        let len = self.records.len();
        if len == 0 {
            return self;
        }
        self.focused = match direction {
            Direction::Next => (self.focused + 1) % len,
            Direction::Prev => (self.focused + len - 1) % len,
        };
        self.cooldown_active = true;
        self
    }

    pub(super) fn jumped(mut self, index: usize) -> Self {
        let len = self.records.len();
        if len == 0 {
            return self;
        }
        self.focused = index % len;
        self.cooldown_active = true;
        self
    }

    pub(super) fn held(mut self, hold: bool) -> Self {
        self.explicit_hold = hold;
        self
    }

    pub(super) fn cooldown_elapsed(mut self) -> Self {
        self.cooldown_active = false;
        self
    }
}
