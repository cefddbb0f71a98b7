use contracts::video::VideoId;
use leptos::prelude::*;

/// Application-wide observable view state.
///
/// Created once in `App` and handed down through context. `id` is empty while
/// no video is selected. The two fields are independent; writers decide what
/// goes into `thumbnail_url`.
#[derive(Clone, Copy)]
pub struct SharedViewState {
    pub id: RwSignal<String>,
    pub thumbnail_url: RwSignal<String>,
}

/// Plain copy of [`SharedViewState`] at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub id: String,
    pub thumbnail_url: String,
}

impl SharedViewState {
    pub fn new(default_thumbnail: &str) -> Self {
        Self {
            id: RwSignal::new(String::new()),
            thumbnail_url: RwSignal::new(default_thumbnail.to_string()),
        }
    }

    pub fn id(&self) -> String {
        self.id.get()
    }

    pub fn thumbnail_url(&self) -> String {
        self.thumbnail_url.get()
    }

    pub fn set_id(&self, id: impl Into<String>) {
        self.id.set(id.into());
    }

    pub fn set_thumbnail_url(&self, url: impl Into<String>) {
        self.thumbnail_url.set(url.into());
    }

    /// Tracked read of both fields.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            id: self.id(),
            thumbnail_url: self.thumbnail_url(),
        }
    }

    pub fn snapshot_untracked(&self) -> ViewSnapshot {
        ViewSnapshot {
            id: self.id.get_untracked(),
            thumbnail_url: self.thumbnail_url.get_untracked(),
        }
    }

    pub fn select_video(&self, id: &VideoId, thumbnail_url: String) {
        log::debug!("select_video: id='{}', thumbnail='{}'", id, thumbnail_url);
        self.thumbnail_url.set(thumbnail_url);
        self.id.set(id.as_str().to_string());
    }

    pub fn clear(&self, default_thumbnail: &str) {
        log::debug!("clear selection");
        self.id.set(String::new());
        self.thumbnail_url.set(default_thumbnail.to_string());
    }
}

pub fn provide_view_state(state: SharedViewState) {
    provide_context(state);
}

/// Hook to access the shared view state
pub fn use_view_state() -> SharedViewState {
    use_context::<SharedViewState>().expect("SharedViewState context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_no_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let state = SharedViewState::new("default.png");
            assert_eq!(
                state.snapshot_untracked(),
                ViewSnapshot {
                    id: String::new(),
                    thumbnail_url: "default.png".to_string(),
                }
            );
        });
    }

    #[test]
    fn test_fields_are_independent() {
        let owner = Owner::new();
        owner.with(|| {
            let state = SharedViewState::new("default.png");
            state.set_id("abc123");
            assert_eq!(state.thumbnail_url.get_untracked(), "default.png");

            state.set_thumbnail_url("other.png");
            state.set_thumbnail_url("last.png");
            assert_eq!(state.id.get_untracked(), "abc123");
            assert_eq!(state.thumbnail_url.get_untracked(), "last.png");
        });
    }

    #[test]
    fn test_select_and_clear() {
        let owner = Owner::new();
        owner.with(|| {
            let state = SharedViewState::new("default.png");
            let id = VideoId::parse("abc123").unwrap();
            state.select_video(&id, "thumb.jpg".to_string());
            assert_eq!(state.snapshot_untracked().id, "abc123");
            assert_eq!(state.snapshot_untracked().thumbnail_url, "thumb.jpg");

            state.clear("default.png");
            assert_eq!(
                state.snapshot_untracked(),
                SharedViewState::new("default.png").snapshot_untracked()
            );
        });
    }

    #[test]
    fn test_context_injection() {
        let owner = Owner::new();
        owner.with(|| {
            provide_view_state(SharedViewState::new("default.png"));
            let state = use_view_state();
            state.set_id("xyz");
            assert_eq!(use_view_state().id.get_untracked(), "xyz");
        });
    }
}
