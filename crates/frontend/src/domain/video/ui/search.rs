use contracts::video::{extract_video_id, VideoId, VideoIdError};
use leptos::prelude::*;
use thaw::*;

use crate::layout::{use_view_state, SharedViewState};
use crate::shared::config::{use_app_config, VideoConfig};

/// Select the video named by `input`. The state is left untouched when no id
/// can be found.
pub fn apply_search(
    state: SharedViewState,
    video: &VideoConfig,
    input: &str,
) -> Result<VideoId, VideoIdError> {
    let id = extract_video_id(input)?;
    state.select_video(&id, id.thumbnail_url(&video.thumbnail_template));
    Ok(id)
}

/// URL input that selects the video shown by the thumbnail area.
#[component]
pub fn VideoSearch() -> impl IntoView {
    let state = use_view_state();
    let video = use_app_config().video;
    let default_thumbnail = video.default_thumbnail.clone();

    let input = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let on_search = move |_: leptos::ev::MouseEvent| {
        match apply_search(state, &video, &input.get_untracked()) {
            Ok(id) => {
                log::info!("Selected video {}", id);
                error.set(None);
            }
            Err(e) => {
                log::warn!("Search rejected: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let on_clear = move |_: leptos::ev::MouseEvent| {
        input.set(String::new());
        error.set(None);
        state.clear(&default_thumbnail);
    };

    view! {
        <div class="video-search">
            <Input value=input placeholder="https://www.youtube.com/watch?v=..." />
            <Button appearance=ButtonAppearance::Primary on_click=on_search>
                "Show"
            </Button>
            <Button appearance=ButtonAppearance::Subtle on_click=on_clear>
                "Clear"
            </Button>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}
