use std::marker::PhantomData;

use crate::content::ContentRecord;
use crate::ui::carousel::intent::CarouselIntent;
use crate::ui::carousel::state::CarouselState;
use crate::ui::mvi::Reducer;

pub struct CarouselReducer<R>(PhantomData<R>);

impl<R: ContentRecord> Reducer for CarouselReducer<R> {
    type State = CarouselState<R>;
    type Intent = CarouselIntent<R>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Loaded { records } => state.loaded(records),
            CarouselIntent::LoadFailed => state.loaded(Vec::new()),
            CarouselIntent::Tick => state.ticked(),
            CarouselIntent::Advance(direction) => state.advanced(direction),
            CarouselIntent::JumpTo(index) => state.jumped(index),
            CarouselIntent::Hold(hold) => state.held(hold),
            CarouselIntent::CooldownElapsed => state.cooldown_elapsed(),
        }
    }
}
