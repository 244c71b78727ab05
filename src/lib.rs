//! Scrapes video metadata from YouTube search and watch pages by reading the
//! `ytInitialData` blob embedded in the HTML.

pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod yt;

pub use client::YouTube;
pub use config::FetchConfig;
pub use error::{Error, Result};
pub use report::Report;
pub use yt::search::{SearchOptions, parse_search};
pub use yt::types::{BASE_URL, SearchResultItem, Thumbnail, VideoDetail};
pub use yt::videos::{parse_video_detail, validate_video_url};
