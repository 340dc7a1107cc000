use std::time::{Duration, Instant};

use crate::config::Config;
use crate::content::{CountryGuide, Testimonial};
use crate::ui::browse::{BrowseIntent, BrowseReducer, BrowseState, FacetThresholds};
use crate::ui::carousel::{CarouselIntent, CarouselReducer, CarouselState, Direction};
use crate::ui::mvi::Reducer;
use crate::ui::timers::{RotationClock, RotationSignal};

/// Which pane has keyboard focus.
///
/// Focusing the testimonial pane is the hover/focus gesture: it holds
/// rotation for as long as focus stays there.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Guides,
    Testimonials,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level UI state container.
///
/// Owns both list controllers and the carousel's timer resource for the
/// lifetime of the mount; every mutation goes through a pure reducer.
pub struct App {
    should_quit: bool,
    pane: Pane,
    browse: BrowseState<CountryGuide>,
    carousel: CarouselState<Testimonial>,
    clock: RotationClock,
    size: Option<(u16, u16)>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let thresholds = FacetThresholds {
            high: config.browse.high_threshold,
            medium: config.browse.medium_threshold,
        };
        Self {
            should_quit: false,
            pane: Pane::Guides,
            browse: BrowseState::with_config(config.browse.page_size, thresholds),
            carousel: CarouselState::default(),
            clock: RotationClock::new(
                Duration::from_secs(u64::from(config.carousel.interval_seconds)),
                Duration::from_secs(u64::from(config.carousel.cooldown_seconds)),
            ),
            size: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn browse(&self) -> &BrowseState<CountryGuide> {
        &self.browse
    }

    pub fn carousel(&self) -> &CarouselState<Testimonial> {
        &self.carousel
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    /// Drive the rotation clock. Each due deadline becomes a pure intent;
    /// stale signals against a paused or empty carousel are no-ops.
    pub fn on_tick(&mut self, now: Instant) {
        for signal in self.clock.poll(now) {
            match signal {
                RotationSignal::Advance => {
                    dispatch_mvi!(self, carousel, CarouselReducer<Testimonial>, CarouselIntent::Tick);
                }
                RotationSignal::CooldownOver => {
                    dispatch_mvi!(
                        self,
                        carousel,
                        CarouselReducer<Testimonial>,
                        CarouselIntent::CooldownElapsed
                    );
                }
            }
        }
    }

    /// Cancel all pending timers. Called once when the UI unmounts; no
    /// rotation signal can fire afterwards.
    pub fn teardown(&mut self) {
        self.clock.disarm();
    }

    // -- Fetch completions -------------------------------------------------

    pub fn guides_loaded(&mut self, records: Vec<CountryGuide>) {
        dispatch_mvi!(
            self,
            browse,
            BrowseReducer<CountryGuide>,
            BrowseIntent::Loaded { records }
        );
    }

    pub fn guides_failed(&mut self) {
        dispatch_mvi!(self, browse, BrowseReducer<CountryGuide>, BrowseIntent::LoadFailed);
    }

    pub fn testimonials_loaded(&mut self, records: Vec<Testimonial>, now: Instant) {
        dispatch_mvi!(
            self,
            carousel,
            CarouselReducer<Testimonial>,
            CarouselIntent::Loaded { records }
        );
        // Rotation starts only for collections with something to rotate.
        if self.carousel.is_rotating() {
            self.clock.arm(now);
        }
    }

    pub fn testimonials_failed(&mut self) {
        dispatch_mvi!(
            self,
            carousel,
            CarouselReducer<Testimonial>,
            CarouselIntent::LoadFailed
        );
    }

    // -- Browse intents ----------------------------------------------------

    pub fn search_push(&mut self, ch: char) {
        let mut search = self.browse.criteria().search.clone();
        search.push(ch);
        dispatch_mvi!(
            self,
            browse,
            BrowseReducer<CountryGuide>,
            BrowseIntent::SetSearch(search)
        );
    }

    pub fn search_pop(&mut self) {
        let mut search = self.browse.criteria().search.clone();
        search.pop();
        dispatch_mvi!(
            self,
            browse,
            BrowseReducer<CountryGuide>,
            BrowseIntent::SetSearch(search)
        );
    }

    pub fn search_clear(&mut self) {
        dispatch_mvi!(
            self,
            browse,
            BrowseReducer<CountryGuide>,
            BrowseIntent::SetSearch(String::new())
        );
    }

    pub fn cycle_facet(&mut self) {
        let facet = self.browse.criteria().facet.cycled();
        dispatch_mvi!(
            self,
            browse,
            BrowseReducer<CountryGuide>,
            BrowseIntent::SetFacet(facet)
        );
    }

    pub fn next_page(&mut self) {
        dispatch_mvi!(self, browse, BrowseReducer<CountryGuide>, BrowseIntent::NextPage);
    }

    pub fn prev_page(&mut self) {
        dispatch_mvi!(self, browse, BrowseReducer<CountryGuide>, BrowseIntent::PrevPage);
    }

    pub fn goto_page(&mut self, page: usize) {
        dispatch_mvi!(
            self,
            browse,
            BrowseReducer<CountryGuide>,
            BrowseIntent::SetPage(page)
        );
    }

    // -- Carousel intents --------------------------------------------------

    pub fn advance_carousel(&mut self, direction: Direction, now: Instant) {
        if self.carousel.len() < 2 {
            return;
        }
        dispatch_mvi!(
            self,
            carousel,
            CarouselReducer<Testimonial>,
            CarouselIntent::Advance(direction)
        );
        self.clock.begin_cooldown(now);
    }

    pub fn jump_carousel(&mut self, index: usize, now: Instant) {
        if self.carousel.is_empty() {
            return;
        }
        dispatch_mvi!(
            self,
            carousel,
            CarouselReducer<Testimonial>,
            CarouselIntent::JumpTo(index)
        );
        self.clock.begin_cooldown(now);
    }

    /// Move focus to the other pane. Focus on the testimonial pane holds
    /// rotation (the hover analog); leaving releases the hold.
    pub fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Guides => Pane::Testimonials,
            Pane::Testimonials => Pane::Guides,
        };
        let hold = self.pane == Pane::Testimonials;
        dispatch_mvi!(
            self,
            carousel,
            CarouselReducer<Testimonial>,
            CarouselIntent::Hold(hold)
        );
    }
}
