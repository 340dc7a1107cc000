use std::marker::PhantomData;

use crate::content::ContentRecord;
use crate::ui::browse::intent::BrowseIntent;
use crate::ui::browse::state::{BrowseState, FilterCriteria};
use crate::ui::mvi::Reducer;

pub struct BrowseReducer<R>(PhantomData<R>);

impl<R: ContentRecord> Reducer for BrowseReducer<R> {
    type State = BrowseState<R>;
    type Intent = BrowseIntent<R>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowseIntent::Loaded { records } => state.loaded(records),
            BrowseIntent::LoadFailed => state.loaded(Vec::new()),
            BrowseIntent::SetSearch(search) => {
                let facet = state.criteria().facet;
                state.with_criteria(FilterCriteria { search, facet })
            }
            BrowseIntent::SetFacet(facet) => {
                let search = state.criteria().search.clone();
                state.with_criteria(FilterCriteria { search, facet })
            }
            BrowseIntent::SetPage(n) => state.with_page(n),
            BrowseIntent::NextPage => {
                let next = state.page() + 1;
                state.with_page(next)
            }
            BrowseIntent::PrevPage => {
                let prev = state.page().saturating_sub(1).max(1);
                state.with_page(prev)
            }
        }
    }
}
