use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the identifiers YouTube hands out for regular videos.
pub const BARE_ID_LEN: usize = 11;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoIdError {
    #[error("no video id found in '{0}'")]
    NotFound(String),
    #[error("'{0}' is not a valid video id")]
    Invalid(String),
}

fn is_id_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Identifier of a YouTube video, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VideoId(String);

impl VideoId {
    pub fn parse(value: &str) -> Result<Self, VideoIdError> {
        if value.is_empty() || !value.chars().all(is_id_char) {
            return Err(VideoIdError::Invalid(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch page, the form the summarizer API expects.
    pub fn watch_url(&self) -> String {
        format!("{}{}", WATCH_URL, self.0)
    }

    /// Fill a thumbnail template such as
    /// `https://img.youtube.com/vi/{id}/hqdefault.jpg`.
    pub fn thumbnail_url(&self, template: &str) -> String {
        template.replace("{id}", &self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VideoId {
    type Error = VideoIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VideoId> for String {
    fn from(id: VideoId) -> Self {
        id.0
    }
}

/// Pull the video id out of user input.
///
/// Accepts a URL whose last `=` is followed by the id up to the end of the
/// string (`https://www.youtube.com/watch?v=abc123`), or a bare 11 character
/// id. Surrounding whitespace is ignored.
pub fn extract_video_id(input: &str) -> Result<VideoId, VideoIdError> {
    let input = input.trim();
    match input.rsplit_once('=') {
        Some((_, tail)) if !tail.is_empty() && tail.chars().all(is_id_char) => {
            Ok(VideoId(tail.to_string()))
        }
        Some(_) => Err(VideoIdError::NotFound(input.to_string())),
        None if input.chars().count() == BARE_ID_LEN => VideoId::parse(input)
            .map_err(|_| VideoIdError::NotFound(input.to_string())),
        None => Err(VideoIdError::NotFound(input.to_string())),
    }
}

/// Title shown under the thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoTitle {
    pub title: String,
    pub author: Option<String>,
}

/// Body of a YouTube oEmbed answer. Only the fields the UI reads.
#[derive(Debug, Clone, Deserialize)]
pub struct OEmbedResponse {
    pub title: String,
    #[serde(default)]
    pub author_name: Option<String>,
}

impl From<OEmbedResponse> for VideoTitle {
    fn from(response: OEmbedResponse) -> Self {
        Self {
            title: response.title,
            author: response.author_name.filter(|a| !a.is_empty()),
        }
    }
}
