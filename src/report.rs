use std::fmt;

use serde::Serialize;

use crate::yt::types::{SearchResultItem, Thumbnail, VideoDetail};

/// Flat projection of either record kind, for printing or JSON output.
/// Fields that only a watch page carries are `None` for search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub channel: String,
    pub thumbnail_url: String,
    pub thumbnails: Vec<Thumbnail>,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub like_count: Option<String>,
    pub publish_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_date: Option<String>,
    pub views: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_views: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<String>,
    pub url_suffix: String,
    pub url: String,
}

impl From<&SearchResultItem> for Report {
    fn from(item: &SearchResultItem) -> Self {
        Self {
            id: item.id().to_owned(),
            title: item.title().to_owned(),
            channel: item.channel().to_owned(),
            thumbnail_url: item.thumbnail_url().to_owned(),
            thumbnails: item.thumbnails().to_vec(),
            duration: item.duration().to_owned(),
            publish_time: item.publish_time().to_owned(),
            views: item.views().to_owned(),
            url_suffix: item.url_suffix().to_owned(),
            url: item.url(),
            ..Default::default()
        }
    }
}

impl From<&VideoDetail> for Report {
    fn from(detail: &VideoDetail) -> Self {
        Self {
            id: detail.id().to_owned(),
            title: detail.title().to_owned(),
            description: Some(detail.description().to_owned()),
            channel: detail.channel().to_owned(),
            thumbnail_url: detail.thumbnail_url().to_owned(),
            thumbnails: detail.thumbnails().to_vec(),
            duration: detail.duration().to_owned(),
            like_count: Some(detail.like_count().to_owned()),
            publish_time: detail.publish_time().to_owned(),
            relative_date: Some(detail.relative_date().to_owned()),
            views: detail.views().to_owned(),
            short_views: Some(detail.short_views().to_owned()),
            subscriber_count: Some(detail.subscriber_count().to_owned()),
            url_suffix: detail.url_suffix().to_owned(),
            url: detail.url(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Title: {}", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "Description: {description}")?;
        }
        writeln!(f, "Channel: {}", self.channel)?;
        writeln!(f, "Thumbnail URL: {}", self.thumbnail_url)?;
        writeln!(f, "Duration: {}", self.duration)?;
        if let Some(likes) = &self.like_count {
            writeln!(f, "Like Count: {likes}")?;
        }
        writeln!(f, "Publish Time: {}", self.publish_time)?;
        if let Some(relative) = &self.relative_date {
            writeln!(f, "Relative Date: {relative}")?;
        }
        writeln!(f, "Views: {}", self.views)?;
        if let Some(short) = &self.short_views {
            writeln!(f, "Short View: {short}")?;
        }
        if let Some(subs) = &self.subscriber_count {
            writeln!(f, "Subscriber Count: {subs}")?;
        }
        writeln!(f, "URL Suffix: {}", self.url_suffix)?;
        write!(f, "URL: {}", self.url)
    }
}
