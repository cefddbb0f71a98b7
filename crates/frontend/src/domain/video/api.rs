use async_trait::async_trait;
use contracts::summary::{ProcessVideoRequest, ProcessVideoResponse};
use contracts::video::{OEmbedResponse, VideoId, VideoTitle};
use gloo_net::http::Request;
use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;

/// Resolves the title of a video.
#[async_trait(?Send)]
pub trait TitleSource {
    async fn fetch_title(&self, id: &VideoId) -> Result<VideoTitle, String>;
}

/// Looks titles up through YouTube's public oEmbed endpoint.
#[derive(Debug, Clone)]
pub struct OEmbedTitleSource {
    endpoint: String,
}

impl OEmbedTitleSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn request_url(&self, id: &VideoId) -> String {
        format!(
            "{}?url={}&format=json",
            self.endpoint,
            urlencoding::encode(&id.watch_url())
        )
    }
}

#[async_trait(?Send)]
impl TitleSource for OEmbedTitleSource {
    async fn fetch_title(&self, id: &VideoId) -> Result<VideoTitle, String> {
        let response = Request::get(&self.request_url(id))
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.ok() {
            return Err(format!("Title lookup failed: {}", response.status()));
        }

        response
            .json::<OEmbedResponse>()
            .await
            .map(VideoTitle::from)
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

/// Context handle for the active [`TitleSource`].
#[derive(Clone)]
pub struct TitleSourceHandle(pub Arc<dyn TitleSource + Send + Sync>);

pub fn provide_title_source<S>(source: S)
where
    S: TitleSource + Send + Sync + 'static,
{
    provide_context(TitleSourceHandle(Arc::new(source)));
}

pub fn use_title_source() -> TitleSourceHandle {
    use_context::<TitleSourceHandle>().expect("TitleSource context not found")
}

/// Ask the summarizer API for a summary
pub async fn process_video(
    api: &ApiConfig,
    request: &ProcessVideoRequest,
) -> Result<ProcessVideoResponse, String> {
    let response = Request::post(&api_url(api, "/process_video"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Summary failed: {}", response.status()));
    }

    response
        .json::<ProcessVideoResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
