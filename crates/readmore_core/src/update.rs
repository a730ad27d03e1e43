use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TagToggled(tag) => {
            state.toggle_tag(tag);
            Vec::new()
        }
        Msg::SearchClicked => {
            // Disabled button: no request, no loading change, nothing to redraw.
            if !state.can_search() {
                return (state, Vec::new());
            }
            let query = state.begin_search();
            vec![Effect::SearchBooks { query }]
        }
        Msg::SearchSucceeded(results) => {
            state.finish_search(Some(results));
            Vec::new()
        }
        Msg::SearchFailed { .. } => {
            // Failures are logged where they are caught; the previous
            // results stay on screen.
            state.finish_search(None);
            Vec::new()
        }
        Msg::OpenRequested { index } => state
            .results()
            .get(index)
            .and_then(|result| result.link())
            .map(|url| {
                vec![Effect::OpenLink {
                    url: url.to_string(),
                }]
            })
            .unwrap_or_default(),
    };

    (state, effects)
}
