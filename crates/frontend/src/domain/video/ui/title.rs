use contracts::video::{VideoId, VideoTitle};
use leptos::prelude::*;
use std::sync::Arc;

use crate::domain::video::api::{use_title_source, TitleSource, TitleSourceHandle};
use crate::shared::load::{spawn_load, Load, LoadTracker, LOADING_TEXT};

/// What the title area shows for one load state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleLine {
    pub class: &'static str,
    pub text: String,
    pub author: Option<String>,
}

pub fn title_line(state: &Load<VideoTitle>) -> TitleLine {
    match state {
        Load::Idle | Load::Pending => TitleLine {
            class: "video-title__loading",
            text: LOADING_TEXT.to_string(),
            author: None,
        },
        Load::Resolved(title) => TitleLine {
            class: "video-title__text",
            text: title.title.clone(),
            author: title.author.clone(),
        },
        Load::Failed(e) => TitleLine {
            class: "video-title__error",
            text: format!("Could not load title: {}", e),
            author: None,
        },
    }
}

/// Start resolving the title of `id` into `tracker`.
pub fn load_title(
    tracker: RwSignal<LoadTracker<VideoTitle>>,
    source: Arc<dyn TitleSource + Send + Sync>,
    id: String,
) {
    spawn_load(tracker, async move {
        let id = VideoId::parse(&id).map_err(|e| e.to_string())?;
        source.fetch_title(&id).await
    });
}

/// Title of the selected video, resolved asynchronously on mount.
#[component]
pub fn TitleView(#[prop(into)] id: String) -> impl IntoView {
    let TitleSourceHandle(source) = use_title_source();
    let tracker = RwSignal::new(LoadTracker::<VideoTitle>::new());

    load_title(tracker, source, id);

    view! {
        <div class="video-title">
            {move || {
                let line = tracker.with(|t| title_line(t.state()));
                view! {
                    <p class=line.class>{line.text}</p>
                    {line.author.map(|a| view! { <p class="video-title__author">{a}</p> })}
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::load::{begin_load, finish_load};
    use any_spawner::Executor;
    use async_trait::async_trait;

    struct FixedTitles;

    #[async_trait(?Send)]
    impl TitleSource for FixedTitles {
        async fn fetch_title(&self, id: &VideoId) -> Result<VideoTitle, String> {
            match id.as_str() {
                "abc123" => Ok(VideoTitle {
                    title: "How to summarize".to_string(),
                    author: Some("Summary Channel".to_string()),
                }),
                other => Err(format!("Title lookup failed: 404 for {}", other)),
            }
        }
    }

    fn shown(tracker: RwSignal<LoadTracker<VideoTitle>>) -> TitleLine {
        tracker.with_untracked(|t| title_line(t.state()))
    }

    async fn until_settled(tracker: RwSignal<LoadTracker<VideoTitle>>) {
        for _ in 0..50 {
            if !tracker.with_untracked(|t| t.state().is_pending()) {
                return;
            }
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn test_title_line_per_state() {
        assert_eq!(
            title_line(&Load::Pending),
            TitleLine {
                class: "video-title__loading",
                text: "Loading...".to_string(),
                author: None,
            }
        );
        assert_eq!(title_line(&Load::Idle).text, LOADING_TEXT);

        let resolved = title_line(&Load::Resolved(VideoTitle {
            title: "How to summarize".to_string(),
            author: Some("Summary Channel".to_string()),
        }));
        assert_eq!(resolved.class, "video-title__text");
        assert_eq!(resolved.text, "How to summarize");
        assert_eq!(resolved.author.as_deref(), Some("Summary Channel"));

        let failed = title_line(&Load::Failed("Request failed: 500".to_string()));
        assert_eq!(failed.class, "video-title__error");
        assert_eq!(failed.text, "Could not load title: Request failed: 500");
    }

    #[tokio::test]
    async fn test_load_title_shows_loading_then_title() {
        let _ = Executor::init_tokio();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let tracker = RwSignal::new(LoadTracker::<VideoTitle>::new());
                load_title(tracker, Arc::new(FixedTitles), "abc123".to_string());
                assert_eq!(shown(tracker).text, "Loading...");

                until_settled(tracker).await;
                let line = shown(tracker);
                assert_eq!(line.text, "How to summarize");
                assert_eq!(line.author.as_deref(), Some("Summary Channel"));
            })
            .await;
    }

    #[tokio::test]
    async fn test_load_title_failure_replaces_loading() {
        let _ = Executor::init_tokio();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let tracker = RwSignal::new(LoadTracker::<VideoTitle>::new());
                load_title(tracker, Arc::new(FixedTitles), "missing".to_string());
                until_settled(tracker).await;
                assert_eq!(
                    shown(tracker).text,
                    "Could not load title: Title lookup failed: 404 for missing"
                );

                load_title(tracker, Arc::new(FixedTitles), "not valid".to_string());
                until_settled(tracker).await;
                assert_eq!(
                    shown(tracker).text,
                    "Could not load title: 'not valid' is not a valid video id"
                );
            })
            .await;
    }

    #[tokio::test]
    async fn test_result_for_previous_video_is_dropped() {
        let tracker = RwSignal::new(LoadTracker::<VideoTitle>::new());
        let stale = begin_load(tracker).unwrap();
        let current = begin_load(tracker).unwrap();

        let id = VideoId::parse("abc123").unwrap();
        assert!(!finish_load(tracker, stale, FixedTitles.fetch_title(&id)).await);
        assert_eq!(shown(tracker).text, LOADING_TEXT);

        let other = VideoId::parse("other").unwrap();
        assert!(finish_load(tracker, current, FixedTitles.fetch_title(&other)).await);
        assert!(matches!(tracker.get_untracked().state(), Load::Failed(_)));
    }
}
