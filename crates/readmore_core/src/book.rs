/// One book record returned by the search API.
///
/// Optional fields stay `None` when the API omits them; display fallbacks
/// are applied by the view-model, never here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub authors: Option<Vec<String>>,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub published_date: Option<String>,
    pub preview_link: Option<String>,
    pub info_link: Option<String>,
}

impl SearchResult {
    /// Outbound link for the card: info link first, then preview link.
    /// Empty strings count as missing.
    pub fn link(&self) -> Option<&str> {
        non_empty(self.info_link.as_deref()).or_else(|| non_empty(self.preview_link.as_deref()))
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
