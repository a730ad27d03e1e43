use crate::book::non_empty;
use crate::{SearchResult, Tag};

/// Cover shown when a result has no thumbnail.
pub const PLACEHOLDER_COVER_URL: &str =
    "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?w=400&q=80";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const EMPTY_STATE_TEXT: &str = "Select categories and click search to find books";
pub const SEARCH_LABEL: &str = "Search Books";
pub const SEARCHING_LABEL: &str = "Searching...";
/// Descriptions longer than this many characters are cut with an ellipsis.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 180;

const ELLIPSIS: char = '…';

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub tags: Vec<TagView>,
    pub selected_count: usize,
    pub loading: bool,
    pub search_enabled: bool,
    pub cards: Vec<BookCardView>,
    pub show_empty_state: bool,
}

impl AppViewModel {
    pub fn search_label(&self) -> &'static str {
        if self.loading {
            SEARCHING_LABEL
        } else {
            SEARCH_LABEL
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView {
    pub tag: Tag,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCardView {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub cover_url: String,
    pub description: String,
    pub published_date: Option<String>,
    pub link: Option<String>,
}

impl BookCardView {
    /// Builds a card, falling back per field when the API omitted it.
    pub fn from_result(result: &SearchResult) -> Self {
        let authors = match result.authors.as_deref() {
            Some(authors) if !authors.is_empty() => authors.join(", "),
            _ => UNKNOWN_AUTHOR.to_string(),
        };
        let description = match result.description.as_deref() {
            Some(text) if !text.is_empty() => truncate_description(text),
            _ => NO_DESCRIPTION.to_string(),
        };
        Self {
            id: result.id.clone(),
            title: result.title.clone(),
            authors,
            cover_url: non_empty(result.thumbnail.as_deref())
                .unwrap_or(PLACEHOLDER_COVER_URL)
                .to_string(),
            description,
            published_date: result.published_date.clone(),
            link: result.link().map(ToOwned::to_owned),
        }
    }
}

/// Cuts `text` to [`DESCRIPTION_PREVIEW_CHARS`] characters, appending an ellipsis.
pub fn truncate_description(text: &str) -> String {
    let text = text.trim();
    match text.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        None => text.to_string(),
        Some((end, _)) => {
            let mut out = text[..end].trim_end().to_string();
            out.push(ELLIPSIS);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_description_kept_as_is() {
        assert_eq!(truncate_description("A short one."), "A short one.");
    }

    #[test]
    fn long_description_is_cut_on_char_boundary() {
        let text = "é".repeat(DESCRIPTION_PREVIEW_CHARS + 20);
        let preview = truncate_description(&text);
        assert!(preview.ends_with(ELLIPSIS));
        assert_eq!(preview.chars().count(), DESCRIPTION_PREVIEW_CHARS + 1);
    }

    #[test]
    fn description_of_exact_limit_is_not_cut() {
        let text = "a".repeat(DESCRIPTION_PREVIEW_CHARS);
        assert_eq!(truncate_description(&text), text);
    }
}
