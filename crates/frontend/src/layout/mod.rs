pub mod page_shell;
pub mod view_state;

pub use page_shell::PageShell;
pub use view_state::{provide_view_state, use_view_state, SharedViewState, ViewSnapshot};
