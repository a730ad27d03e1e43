use crate::{SearchResult, Tag};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked a tag in the selector.
    TagToggled(Tag),
    /// User clicked the search button.
    SearchClicked,
    /// Engine completed a search with a decoded item list.
    SearchSucceeded(Vec<SearchResult>),
    /// Engine gave up on a search (network, status, or decode failure).
    /// `reason` is informational; the app logs it and state ignores it.
    SearchFailed { reason: String },
    /// User activated the card at `index` in the result list.
    OpenRequested { index: usize },
}
