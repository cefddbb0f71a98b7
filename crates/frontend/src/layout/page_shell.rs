use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::shared::config::PageConfig;

/// Font scope applied to every page.
pub const FONT_CLASS: &str = "font-inter";

/// Root wrapper for every page: document title and description plus the
/// global font scope.
#[component]
pub fn PageShell(page: PageConfig, children: Children) -> impl IntoView {
    view! {
        <Title text=page.title />
        <Meta name="description" content=page.description />
        <div class=format!("page-shell {}", FONT_CLASS)>
            {children()}
        </div>
    }
}
