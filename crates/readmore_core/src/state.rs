use crate::view_model::{AppViewModel, BookCardView, TagView};
use crate::{SearchResult, Selection, Tag};

/// Whether a search request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selection: Selection,
    results: Vec<SearchResult>,
    phase: SearchPhase,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.is_loading();
        AppViewModel {
            tags: Tag::ALL
                .iter()
                .map(|&tag| TagView {
                    tag,
                    label: tag.label(),
                    selected: self.selection.contains(tag),
                })
                .collect(),
            selected_count: self.selection.len(),
            loading,
            search_enabled: self.can_search(),
            cards: self.results.iter().map(BookCardView::from_result).collect(),
            show_empty_state: self.results.is_empty() && !loading,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// The search button is live only with a selection and nothing in flight.
    pub fn can_search(&self) -> bool {
        !self.selection.is_empty() && !self.is_loading()
    }

    /// Returns whether the state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn toggle_tag(&mut self, tag: Tag) {
        self.selection.toggle(tag);
        self.mark_dirty();
    }

    pub(crate) fn begin_search(&mut self) -> String {
        self.phase = SearchPhase::Loading;
        self.mark_dirty();
        self.selection.query()
    }

    pub(crate) fn finish_search(&mut self, results: Option<Vec<SearchResult>>) {
        if let Some(results) = results {
            self.results = results;
        }
        self.phase = SearchPhase::Idle;
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
