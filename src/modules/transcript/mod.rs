pub mod error;
pub mod fetcher;
pub mod model;
pub mod video_id;
