//! Carousel controller: single focused record with auto-rotation.
//!
//! The rotation state machine (`Running` while more than one record and no
//! pause flag, `Paused` otherwise) lives entirely in the pure reducer;
//! wall-clock deadlines are owned by
//! [`RotationClock`](crate::ui::timers::RotationClock) and arrive here as
//! `Tick` / `CooldownElapsed` intents.

mod intent;
mod reducer;
mod state;

pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::{CarouselState, Direction};
