pub mod json;
pub mod search;
pub mod types;
pub mod videos;
