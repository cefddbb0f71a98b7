use leptos::prelude::*;

use super::{SummaryPanel, TitleView};
use crate::domain::video::branch::{
    ThumbnailBranch, PLACEHOLDER_ALT, PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH,
};
use crate::layout::use_view_state;

/// Thumbnail area driven by the shared view state.
///
/// With no video selected it shows the placeholder image and the (empty) id.
/// Otherwise it shows the image plus the title and summary of the video. The
/// title view is rebuilt only when the id changes.
#[component]
pub fn ThumbnailView() -> impl IntoView {
    let state = use_view_state();

    let branch = Memo::new(move |_| ThumbnailBranch::from_snapshot(&state.snapshot()));
    let selected = Memo::new(move |_| branch.with(|b| b.selected_id().map(str::to_string)));
    let src = move || branch.with(|b| b.src().to_string());

    view! {
        {move || match selected.get() {
            None => view! {
                <div class="thumbnail">
                    <img
                        src=src
                        width=PLACEHOLDER_WIDTH
                        height=PLACEHOLDER_HEIGHT
                        alt=PLACEHOLDER_ALT
                        class="thumbnail__image thumbnail__image--placeholder"
                    />
                    <h1>{state.id.get_untracked()}</h1>
                </div>
            }
            .into_any(),
            Some(id) => view! {
                <div class="thumbnail">
                    <img src=src alt="" class="thumbnail__image thumbnail__image--selected" />
                    <TitleView id=id.clone() />
                    <SummaryPanel id=id />
                </div>
            }
            .into_any(),
        }}
    }
}
