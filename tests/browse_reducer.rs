use guidedesk::content::{ContentRecord, CountryGuide};
use guidedesk::ui::browse::{
    BrowseIntent, BrowseReducer, BrowseState, FacetBucket, FacetThresholds,
};
use guidedesk::ui::mvi::Reducer;

fn guide(id: i64, name: &str, description: &str, university_count: u32) -> CountryGuide {
    CountryGuide {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        flag_image: None,
        university_count,
    }
}

fn sample_guides(n: usize) -> Vec<CountryGuide> {
    (0..n)
        .map(|i| {
            guide(
                i as i64,
                &format!("Country {}", i),
                &format!("Guide number {}", i),
                i as u32,
            )
        })
        .collect()
}

fn loaded_state(records: Vec<CountryGuide>) -> BrowseState<CountryGuide> {
    BrowseReducer::reduce(
        BrowseState::with_config(6, FacetThresholds::default()),
        BrowseIntent::Loaded { records },
    )
}

#[test]
fn loading_flag_clears_on_load() {
    let state = BrowseState::<CountryGuide>::with_config(6, FacetThresholds::default());
    assert!(state.is_loading());
    let state = BrowseReducer::reduce(state, BrowseIntent::Loaded { records: vec![] });
    assert!(!state.is_loading());
}

#[test]
fn load_failed_degrades_to_empty_without_error() {
    let state = BrowseState::<CountryGuide>::with_config(6, FacetThresholds::default());
    let state = BrowseReducer::reduce(state, BrowseIntent::LoadFailed);
    let view = state.view();
    assert!(!view.is_loading);
    assert!(view.visible.is_empty());
    assert_eq!(view.total_pages, 0);
}

#[test]
fn empty_criteria_shows_full_first_page_of_snapshot() {
    let records = sample_guides(10);
    let state = loaded_state(records.clone());
    let view = state.view();
    assert_eq!(view.page, 1);
    assert_eq!(view.visible.len(), 6);
    for (shown, original) in view.visible.iter().zip(records.iter()) {
        assert_eq!(shown.id, original.id);
    }
}

#[test]
fn eight_records_page_size_six_has_two_pages() {
    let state = loaded_state(sample_guides(8));
    assert_eq!(state.total_pages(), 2);
    let state = BrowseReducer::reduce(state, BrowseIntent::SetPage(2));
    let view = state.view();
    assert_eq!(view.page, 2);
    assert_eq!(view.visible.len(), 2);
}

#[test]
fn pages_partition_the_filtered_collection_in_order() {
    let records = sample_guides(20);
    let mut state = loaded_state(records.clone());

    let mut seen = Vec::new();
    for page in 1..=state.total_pages() {
        state = BrowseReducer::reduce(state, BrowseIntent::SetPage(page));
        let view = state.view();
        assert!(view.visible.len() <= state.page_size());
        seen.extend(view.visible.iter().map(|g| g.id));
    }

    let expected: Vec<i64> = records.iter().map(|g| g.id).collect();
    assert_eq!(seen, expected, "no overlap, no gaps, order preserved");
    assert_eq!(seen.len(), state.filtered_count());
}

#[test]
fn set_page_is_idempotent() {
    let state = loaded_state(sample_guides(20));
    let once = BrowseReducer::reduce(state.clone(), BrowseIntent::SetPage(3));
    let twice = BrowseReducer::reduce(once.clone(), BrowseIntent::SetPage(3));
    assert_eq!(once, twice);
}

#[test]
fn out_of_range_pages_are_clamped_not_rejected() {
    let state = loaded_state(sample_guides(8));
    let state = BrowseReducer::reduce(state, BrowseIntent::SetPage(99));
    assert_eq!(state.page(), 2);
    let state = BrowseReducer::reduce(state, BrowseIntent::SetPage(0));
    assert_eq!(state.page(), 1);
}

#[test]
fn prev_page_at_first_page_stays_put() {
    let state = loaded_state(sample_guides(8));
    let state = BrowseReducer::reduce(state, BrowseIntent::PrevPage);
    assert_eq!(state.page(), 1);
}

#[test]
fn next_page_at_last_page_stays_put() {
    let state = loaded_state(sample_guides(8));
    let state = BrowseReducer::reduce(state, BrowseIntent::SetPage(2));
    let state = BrowseReducer::reduce(state, BrowseIntent::NextPage);
    assert_eq!(state.page(), 2);
}

#[test]
fn set_search_resets_page_to_one() {
    for start_page in [1, 2, 3] {
        let state = loaded_state(sample_guides(20));
        let state = BrowseReducer::reduce(state, BrowseIntent::SetPage(start_page));
        let state =
            BrowseReducer::reduce(state, BrowseIntent::SetSearch("country".to_string()));
        assert_eq!(state.page(), 1);
    }
}

#[test]
fn set_facet_resets_page_to_one() {
    let state = loaded_state(sample_guides(20));
    let state = BrowseReducer::reduce(state, BrowseIntent::SetPage(2));
    let state = BrowseReducer::reduce(state, BrowseIntent::SetFacet(FacetBucket::High));
    assert_eq!(state.page(), 1);
}

#[test]
fn search_matches_name_and_description_case_insensitively() {
    let records = vec![
        guide(1, "Canada", "Cold but welcoming", 12),
        guide(2, "Ireland", "Great research programs", 4),
        guide(3, "Malta", "Sunny RESEARCH hub", 2),
    ];
    let state = loaded_state(records);

    let by_name = BrowseReducer::reduce(state.clone(), BrowseIntent::SetSearch("cAnAdA".into()));
    assert_eq!(by_name.filtered_count(), 1);

    let by_description =
        BrowseReducer::reduce(state.clone(), BrowseIntent::SetSearch("research".into()));
    assert_eq!(by_description.filtered_count(), 2);

    let no_match = BrowseReducer::reduce(state, BrowseIntent::SetSearch("atlantis".into()));
    assert_eq!(no_match.filtered_count(), 0);
    assert_eq!(no_match.total_pages(), 0);
}

#[test]
fn set_search_does_not_touch_the_snapshot() {
    let state = loaded_state(sample_guides(8));
    let state = BrowseReducer::reduce(state, BrowseIntent::SetSearch("nothing".into()));
    assert_eq!(state.records().len(), 8, "filtering never refetches");
    let state = BrowseReducer::reduce(state, BrowseIntent::SetSearch(String::new()));
    assert_eq!(state.filtered_count(), 8);
}

#[test]
fn facet_buckets_partition_by_university_count() {
    let records = vec![
        guide(1, "A", "", 12),
        guide(2, "B", "", 10),
        guide(3, "C", "", 9),
        guide(4, "D", "", 5),
        guide(5, "E", "", 4),
        guide(6, "F", "", 0),
    ];
    let state = loaded_state(records);

    let high = BrowseReducer::reduce(state.clone(), BrowseIntent::SetFacet(FacetBucket::High));
    assert_eq!(high.filtered_count(), 2);

    let medium =
        BrowseReducer::reduce(state.clone(), BrowseIntent::SetFacet(FacetBucket::Medium));
    assert_eq!(medium.filtered_count(), 2);

    let low = BrowseReducer::reduce(state.clone(), BrowseIntent::SetFacet(FacetBucket::Low));
    assert_eq!(low.filtered_count(), 2);

    let all = BrowseReducer::reduce(state, BrowseIntent::SetFacet(FacetBucket::All));
    assert_eq!(all.filtered_count(), 6);
}

#[test]
fn search_and_facet_combine_conjunctively() {
    let records = vec![
        guide(1, "Canada", "research", 12),
        guide(2, "Ireland", "research", 4),
    ];
    let state = loaded_state(records);
    let state = BrowseReducer::reduce(state, BrowseIntent::SetSearch("research".into()));
    let state = BrowseReducer::reduce(state, BrowseIntent::SetFacet(FacetBucket::High));
    assert_eq!(state.filtered_count(), 1);
    assert_eq!(state.view().visible[0].name, "Canada");
}

#[test]
fn visible_never_exceeds_page_size() {
    let state = loaded_state(sample_guides(50));
    for page in 0..12 {
        let state = BrowseReducer::reduce(state.clone(), BrowseIntent::SetPage(page));
        assert!(state.view().visible.len() <= state.page_size());
    }
}

#[test]
fn reload_replaces_snapshot_wholesale_and_resets_page() {
    let state = loaded_state(sample_guides(20));
    let state = BrowseReducer::reduce(state, BrowseIntent::SetPage(3));
    let state = BrowseReducer::reduce(
        state,
        BrowseIntent::Loaded {
            records: sample_guides(2),
        },
    );
    assert_eq!(state.page(), 1);
    assert_eq!(state.records().len(), 2);
}

#[test]
fn facet_cycle_wraps_through_all_buckets() {
    let mut bucket = FacetBucket::All;
    for expected in [
        FacetBucket::High,
        FacetBucket::Medium,
        FacetBucket::Low,
        FacetBucket::All,
    ] {
        bucket = bucket.cycled();
        assert_eq!(bucket, expected);
    }
}

#[test]
fn facet_labels_reflect_thresholds() {
    let thresholds = FacetThresholds { high: 10, medium: 5 };
    assert_eq!(FacetBucket::All.label(thresholds), "All");
    assert_eq!(FacetBucket::High.label(thresholds), "10+ Universities");
    assert_eq!(FacetBucket::Medium.label(thresholds), "5-9 Universities");
    assert_eq!(FacetBucket::Low.label(thresholds), "1-4 Universities");
}

#[test]
fn record_trait_exposes_facet_count() {
    let g = guide(1, "Canada", "x", 12);
    assert_eq!(g.facet_count(), 12);
    assert_eq!(g.record_id(), 1);
}
