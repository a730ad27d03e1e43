//! ReadMore core: pure state machine and view-model helpers.
mod book;
mod effect;
mod msg;
mod state;
mod tag;
mod update;
mod view_model;

pub use book::SearchResult;
pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, SearchPhase};
pub use tag::{Selection, Tag, SUBJECT_SEPARATOR};
pub use update::update;
pub use view_model::{
    truncate_description, AppViewModel, BookCardView, TagView, DESCRIPTION_PREVIEW_CHARS,
    EMPTY_STATE_TEXT, NO_DESCRIPTION, PLACEHOLDER_COVER_URL, SEARCHING_LABEL, SEARCH_LABEL,
    UNKNOWN_AUTHOR,
};
