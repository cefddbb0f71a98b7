use crate::layout::ViewSnapshot;

pub const PLACEHOLDER_ALT: &str = "Youtube Thumbnail";
pub const PLACEHOLDER_WIDTH: &str = "1000";
pub const PLACEHOLDER_HEIGHT: &str = "500";

/// What the thumbnail area shows for a given snapshot.
///
/// Both branches take the image from `thumbnail_url`, including the selected
/// one; the writer of the state is responsible for pointing it at the right
/// image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailBranch {
    /// Nothing selected. `caption` is the raw id, i.e. empty.
    Placeholder { src: String, caption: String },
    Selected { src: String, id: String },
}

impl ThumbnailBranch {
    pub fn from_snapshot(snapshot: &ViewSnapshot) -> Self {
        if snapshot.id.is_empty() {
            ThumbnailBranch::Placeholder {
                src: snapshot.thumbnail_url.clone(),
                caption: snapshot.id.clone(),
            }
        } else {
            ThumbnailBranch::Selected {
                src: snapshot.thumbnail_url.clone(),
                id: snapshot.id.clone(),
            }
        }
    }

    pub fn src(&self) -> &str {
        match self {
            ThumbnailBranch::Placeholder { src, .. } | ThumbnailBranch::Selected { src, .. } => src,
        }
    }

    /// Id the title view is keyed on, if any.
    pub fn selected_id(&self) -> Option<&str> {
        match self {
            ThumbnailBranch::Placeholder { .. } => None,
            ThumbnailBranch::Selected { id, .. } => Some(id),
        }
    }
}
