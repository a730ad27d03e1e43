//! Wire types for the Google Books `volumes` endpoint.
//!
//! Only the fields the cards need are modelled; unknown fields are ignored.

use serde::Deserialize;

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct VolumesResponse {
    pub items: Option<Vec<Volume>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Volume {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: String,
    pub authors: Option<Vec<String>>,
    pub image_links: Option<ImageLinks>,
    pub description: Option<String>,
    pub published_date: Option<String>,
    pub preview_link: Option<String>,
    pub info_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

/// Decode a response body; a missing or null `items` is an empty result set.
pub fn decode_volumes(bytes: &[u8]) -> Result<Vec<Volume>, FetchError> {
    let response: VolumesResponse = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
    Ok(response.items.unwrap_or_default())
}
