use std::sync::Once;

use pretty_assertions::assert_eq;
use readmore_core::{update, AppState, Effect, Msg, SearchPhase, SearchResult, Tag};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(readmore_logging::initialize_for_tests);
}

fn toggle(state: AppState, tags: &[Tag]) -> AppState {
    tags.iter().fold(state, |state, &tag| update(state, Msg::TagToggled(tag)).0)
}

fn book(id: &str, title: &str) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        title: title.to_string(),
        ..SearchResult::default()
    }
}

#[test]
fn toggling_a_tag_twice_restores_the_selection() {
    init_logging();
    let base = toggle(AppState::new(), &[Tag::History]);
    for tag in Tag::ALL {
        let (once, _) = update(base.clone(), Msg::TagToggled(tag));
        assert_ne!(once.selection(), base.selection(), "tag {tag}");
        let (twice, _) = update(once, Msg::TagToggled(tag));
        assert_eq!(twice.selection(), base.selection(), "tag {tag}");
    }
}

#[test]
fn toggle_marks_dirty() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::TagToggled(Tag::Art));
    assert!(effects.is_empty());
    assert!(state.view().tags.iter().any(|t| t.tag == Tag::Art && t.selected));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn search_with_empty_selection_is_noop() {
    init_logging();
    let netted_to_empty = toggle(
        AppState::new(),
        &[Tag::Fiction, Tag::Poetry, Tag::Fiction, Tag::Poetry],
    );
    for mut state in [AppState::new(), netted_to_empty] {
        state.consume_dirty();
        let before = state.clone();

        let (mut next, effects) = update(state, Msg::SearchClicked);

        assert!(effects.is_empty());
        assert_eq!(next.phase(), SearchPhase::Idle);
        assert!(!next.consume_dirty());
        assert_eq!(next, before);
    }
}

#[test]
fn search_emits_query_joined_in_toggle_order() {
    init_logging();
    let state = toggle(
        AppState::new(),
        &[Tag::Science, Tag::Fiction, Tag::Mystery, Tag::Fiction, Tag::YoungAdult],
    );

    let (state, effects) = update(state, Msg::SearchClicked);

    assert_eq!(
        effects,
        vec![Effect::SearchBooks {
            query: "Science+subject:Mystery+subject:Young adult".to_string(),
        }]
    );
    assert!(state.is_loading());
}

#[test]
fn search_is_ignored_while_loading() {
    init_logging();
    let state = toggle(AppState::new(), &[Tag::Travel]);
    let (mut state, _) = update(state, Msg::SearchClicked);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::SearchClicked);

    assert!(effects.is_empty());
    assert!(state.is_loading());
    assert!(!state.consume_dirty());
    assert!(!state.view().search_enabled);
}

#[test]
fn loading_clears_on_success_and_replaces_results() {
    init_logging();
    let state = toggle(AppState::new(), &[Tag::Cooking]);
    assert!(!state.is_loading());
    let (state, _) = update(state, Msg::SearchClicked);
    assert!(state.is_loading());
    assert_eq!(state.view().search_label(), "Searching...");

    let (state, _) = update(state, Msg::SearchSucceeded(vec![book("x1", "T")]));

    assert!(!state.is_loading());
    assert_eq!(state.results(), &[book("x1", "T")]);
    assert_eq!(state.view().search_label(), "Search Books");

    let (state, _) = update(state, Msg::SearchClicked);
    let (state, _) = update(state, Msg::SearchSucceeded(Vec::new()));
    assert!(state.results().is_empty());
    assert!(!state.is_loading());
}

#[test]
fn failure_keeps_previous_results_and_clears_loading() {
    init_logging();
    let state = toggle(AppState::new(), &[Tag::Business]);
    let (state, _) = update(state, Msg::SearchClicked);
    let (state, _) = update(
        state,
        Msg::SearchSucceeded(vec![book("a", "First"), book("b", "Second")]),
    );
    let before = state.results().to_vec();

    let (state, _) = update(state, Msg::TagToggled(Tag::Art));
    let (state, _) = update(state, Msg::SearchClicked);
    assert!(state.is_loading());
    let (mut state, effects) = update(
        state,
        Msg::SearchFailed {
            reason: "network error".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.is_loading());
    assert_eq!(state.results(), before.as_slice());
    assert!(state.consume_dirty());
}

#[test]
fn tag_toggles_do_not_reset_results() {
    init_logging();
    let state = toggle(AppState::new(), &[Tag::Horror]);
    let (state, _) = update(state, Msg::SearchClicked);
    let (state, _) = update(state, Msg::SearchSucceeded(vec![book("h", "Dread")]));

    let state = toggle(state, &[Tag::Horror]);

    assert!(state.selection().is_empty());
    assert_eq!(state.results().len(), 1);
    assert!(!state.view().search_enabled);
}

#[test]
fn open_prefers_info_link_then_preview_link() {
    init_logging();
    let with_both = SearchResult {
        info_link: Some("https://info.example/1".to_string()),
        preview_link: Some("https://preview.example/1".to_string()),
        ..book("1", "Both")
    };
    let preview_only = SearchResult {
        preview_link: Some("https://preview.example/2".to_string()),
        ..book("2", "Preview")
    };
    let no_link = book("3", "None");

    let state = toggle(AppState::new(), &[Tag::Art]);
    let (state, _) = update(state, Msg::SearchClicked);
    let (state, _) = update(
        state,
        Msg::SearchSucceeded(vec![with_both, preview_only, no_link]),
    );

    let (state, effects) = update(state, Msg::OpenRequested { index: 0 });
    assert_eq!(
        effects,
        vec![Effect::OpenLink {
            url: "https://info.example/1".to_string()
        }]
    );
    let (state, effects) = update(state, Msg::OpenRequested { index: 1 });
    assert_eq!(
        effects,
        vec![Effect::OpenLink {
            url: "https://preview.example/2".to_string()
        }]
    );
    let (state, effects) = update(state, Msg::OpenRequested { index: 2 });
    assert!(effects.is_empty());
    let (_state, effects) = update(state, Msg::OpenRequested { index: 99 });
    assert!(effects.is_empty());
}

#[test]
fn open_skips_empty_links() {
    init_logging();
    let empty_info = SearchResult {
        info_link: Some(String::new()),
        preview_link: Some("https://preview.example/1".to_string()),
        ..book("1", "Empty info")
    };
    let all_empty = SearchResult {
        info_link: Some(String::new()),
        preview_link: Some(String::new()),
        ..book("2", "Empty both")
    };

    let state = toggle(AppState::new(), &[Tag::Poetry]);
    let (state, _) = update(state, Msg::SearchClicked);
    let (state, _) = update(state, Msg::SearchSucceeded(vec![empty_info, all_empty]));

    let (state, effects) = update(state, Msg::OpenRequested { index: 0 });
    assert_eq!(
        effects,
        vec![Effect::OpenLink {
            url: "https://preview.example/1".to_string()
        }]
    );
    let (_state, effects) = update(state, Msg::OpenRequested { index: 1 });
    assert!(effects.is_empty());
}

#[test]
fn open_out_of_range_leaves_state_untouched() {
    init_logging();
    let mut state = toggle(AppState::new(), &[Tag::Travel]);
    state.consume_dirty();
    let before = state.clone();

    let (mut state, effects) = update(state, Msg::OpenRequested { index: 5 });

    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
}
