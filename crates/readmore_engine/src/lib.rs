//! ReadMore engine: book search IO and effect execution.
mod engine;
mod fetch;
mod types;
mod volumes;

pub use engine::EngineHandle;
pub use fetch::{
    build_search_url, BookSearcher, ReqwestSearcher, SearchSettings, DEFAULT_ENDPOINT,
    MAX_RESULTS,
};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError};
pub use volumes::{decode_volumes, ImageLinks, Volume, VolumeInfo, VolumesResponse};
