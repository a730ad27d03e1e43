#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run one search; `query` is the subject terms joined by `+subject:`.
    SearchBooks { query: String },
    /// Open a result link in the system browser.
    OpenLink { url: String },
}
