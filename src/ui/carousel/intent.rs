use crate::content::ContentRecord;
use crate::ui::carousel::state::Direction;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CarouselIntent<R> {
    /// Fetch completed; replace the snapshot wholesale, focus index 0.
    Loaded { records: Vec<R> },
    /// Fetch failed; degrade to an empty snapshot.
    LoadFailed,
    /// Timer tick: advance focus by one while rotating. No-op when paused
    /// or with fewer than two records, so stale ticks are harmless.
    Tick,
    /// Manual navigation; wraps at both ends and starts the cooldown.
    Advance(Direction),
    /// Absolute jump (dot markers); same cooldown side effect.
    JumpTo(usize),
    /// Explicit pause/resume (hover/focus gesture). Independent of the
    /// cooldown; persists until explicitly released.
    Hold(bool),
    /// Cooldown timer fired; rotation resumes unless a hold is active.
    CooldownElapsed,
}

impl<R: ContentRecord> Intent for CarouselIntent<R> {}
