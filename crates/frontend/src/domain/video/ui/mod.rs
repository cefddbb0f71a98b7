pub mod search;
pub mod summary;
pub mod thumbnail;
pub mod title;

pub use search::VideoSearch;
pub use summary::SummaryPanel;
pub use thumbnail::ThumbnailView;
pub use title::TitleView;
