//! guidedesk: terminal browser for study-abroad country guides and
//! student reviews, fetched from a remote content API.
//!
//! The UI is built from two MVI list controllers — a filtered, paginated
//! guide browser and an auto-rotating testimonial carousel — over pure
//! reducers, with timers and fetches kept outside as intent producers.

pub mod config;
pub mod content;
pub mod logging;
pub mod ui;
