pub mod api;
pub mod branch;
pub mod ui;
