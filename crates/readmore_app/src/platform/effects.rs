use readmore_core::{Effect, Msg, SearchResult};
use readmore_engine::{EngineEvent, EngineHandle, SearchSettings, Volume};
use readmore_logging::{readmore_info, readmore_warn};

pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub(crate) fn new(settings: SearchSettings) -> anyhow::Result<Self> {
        readmore_info!("search endpoint {}", settings.endpoint);
        let engine = EngineHandle::new(settings)?;
        Ok(Self { engine })
    }

    pub(crate) fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SearchBooks { query } => {
                    readmore_info!("SearchBooks query_len={} query={}", query.len(), query);
                    self.engine.search(query);
                }
                Effect::OpenLink { url } => {
                    readmore_info!("OpenLink url={}", url);
                    if let Err(err) = open::that_detached(&url) {
                        readmore_warn!("Failed to open browser for {}: {}", url, err);
                    }
                }
            }
        }
    }

    /// Drains finished searches and turns them into messages for `update`.
    pub(crate) fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { query, result } => match result {
            Ok(volumes) => {
                readmore_info!("Search {} returned {} items", query, volumes.len());
                Msg::SearchSucceeded(volumes.into_iter().map(map_volume).collect())
            }
            Err(err) => {
                readmore_warn!("Error fetching books for {}: {}", query, err);
                Msg::SearchFailed {
                    reason: err.to_string(),
                }
            }
        },
    }
}

fn map_volume(volume: Volume) -> SearchResult {
    let info = volume.volume_info;
    SearchResult {
        id: volume.id,
        title: info.title,
        authors: info.authors,
        thumbnail: info.image_links.and_then(|links| links.thumbnail),
        description: info.description,
        published_date: info.published_date,
        preview_link: info.preview_link,
        info_link: info.info_link,
    }
}
