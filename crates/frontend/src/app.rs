use leptos::prelude::*;
use leptos_meta::provide_meta_context;

use crate::domain::video::api::{provide_title_source, OEmbedTitleSource};
use crate::domain::video::ui::{ThumbnailView, VideoSearch};
use crate::layout::{provide_view_state, PageShell, SharedViewState};
use crate::shared::config::{provide_app_config, AppConfig};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    // Everything below reads these through context.
    provide_view_state(SharedViewState::new(&config.video.default_thumbnail));
    provide_title_source(OEmbedTitleSource::new(config.video.oembed_endpoint.clone()));
    provide_app_config(config.clone());

    view! {
        <PageShell page=config.page>
            <main class="ytsumup">
                <VideoSearch />
                <ThumbnailView />
            </main>
        </PageShell>
    }
}
