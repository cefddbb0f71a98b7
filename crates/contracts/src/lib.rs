//! Data types shared between the YTSUMUP front-end and the summarizer API.

pub mod summary;
pub mod video;
