use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::json::{self, Lookup};
use super::types::{BASE_URL, PrimaryInfo, SearchResultItem, SecondaryInfo, VideoDetail};
use crate::error::{Error, Result};

// youtube.com hosts need a watch, embed or v/ path; only youtu.be takes a bare id.
static VIDEO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:https?://)?(?:",
        r"(?:www\.|m\.)?(?:youtube\.com|youtube-nocookie\.com)/(?:",
        r"(?:embed|v)/(?P<path>[A-Za-z0-9_-]+)(?:[?&#].*)?",
        r"|watch\?(?:[^#]*&)?v=(?P<query>[A-Za-z0-9_-]+)(?:[&#].*)?",
        r")",
        r"|youtu\.be/(?P<short>[A-Za-z0-9_-]+)(?:[?&#].*)?",
        r")$",
    ))
    .expect("video URL pattern is valid")
});

/// Checks a watch, embed, or short link and returns the video id it names.
pub fn validate_video_url(url: &str) -> Result<&str> {
    VIDEO_URL_RE
        .captures(url.trim())
        .and_then(|caps| {
            caps.name("path")
                .or_else(|| caps.name("query"))
                .or_else(|| caps.name("short"))
        })
        .map(|m| m.as_str())
        .ok_or_else(|| Error::InvalidUrl(url.to_owned()))
}

pub fn watch_url(video_id: &str) -> String {
    format!("{BASE_URL}/watch?v={video_id}")
}

/// Extracts the video record from a watch page.
pub fn parse_video_detail(html: &str) -> Result<VideoDetail> {
    let tree = json::initial_data(html)?;
    video_detail(&tree)
}

pub fn video_detail(tree: &Value) -> Result<VideoDetail> {
    let Some(watch) = tree.get_path(&["contents", "twoColumnWatchNextResults"]) else {
        log::warn!("watch page has no twoColumnWatchNextResults");
        return Err(Error::StructureNotFound("contents.twoColumnWatchNextResults"));
    };

    let mut primary = None;
    let mut secondary = None;
    for element in watch.get_array(&["results", "results", "contents"]) {
        if let Some(node) = element.get("videoPrimaryInfoRenderer") {
            primary = Some(PrimaryInfo::deserialize(node).map_err(Error::json_decode)?);
        }
        if let Some(node) = element.get("videoSecondaryInfoRenderer") {
            secondary = Some(SecondaryInfo::deserialize(node).map_err(Error::json_decode)?);
        }
    }

    let compact = watch
        .get_array(&["secondaryResults", "secondaryResults", "results"])
        .iter()
        .find_map(|element| element.get("compactVideoRenderer"))
        .map(SearchResultItem::deserialize)
        .transpose()
        .map_err(Error::json_decode)?;

    if compact.is_none() {
        log::debug!("watch page has no recommended video to take identifying fields from");
    }
    Ok(VideoDetail::new(primary, secondary, compact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepted_urls() {
        for (url, id) in [
            ("https://youtu.be/abc123", "abc123"),
            ("https://www.youtube.com/watch?v=abc123", "abc123"),
            ("https://youtu.be/1r8sEJTtwzE?si=jOvHjVawN-2cgQKi", "1r8sEJTtwzE"),
            ("http://m.youtube.com/watch?v=dQw4w9WgXcQ&t=10s", "dQw4w9WgXcQ"),
            ("youtube.com/embed/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
            ("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
            ("https://youtube.com/v/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
            ("https://www.youtube.com/watch?list=PLx&v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
            ("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ] {
            assert_eq!(validate_video_url(url).unwrap(), id, "{url}");
        }
    }

    #[test]
    fn rejected_urls() {
        for url in [
            "https://example.com/watch?v=abc123",
            "https://youtube.com/",
            "https://notyoutube.com/watch?v=abc123",
            "https://www.youtube.com/results?search_query=cats",
            "https://www.youtube.com/feed",
            "https://www.youtube.com/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?list=PLx&av=dQw4w9WgXcQ",
            "",
        ] {
            assert!(
                matches!(validate_video_url(url), Err(Error::InvalidUrl(_))),
                "{url}"
            );
        }
    }

    #[test]
    fn merges_three_sources() {
        let tree = json!({"contents": {"twoColumnWatchNextResults": {
            "results": {"results": {"contents": [
                {"videoPrimaryInfoRenderer": {
                    "title": {"runs": [{"text": "Detail Title"}]},
                    "viewCount": {"videoViewCountRenderer": {
                        "viewCount": {"simpleText": "1,234,567 views"},
                        "shortViewCount": {"simpleText": "1.2M views"}
                    }},
                    "videoActions": {"menuRenderer": {"topLevelButtons": [
                        {"segmentedLikeDislikeButtonViewModel": {"likeButtonViewModel": {"likeButtonViewModel": {
                            "toggleButtonViewModel": {"toggleButtonViewModel": {"defaultButtonViewModel": {
                                "buttonViewModel": {"title": "24K"}
                            }}}
                        }}}}
                    ]}},
                    "dateText": {"simpleText": "Mar 3, 2024"},
                    "relativeDateText": {"simpleText": "Premiered 3 days ago"}
                }},
                {"videoSecondaryInfoRenderer": {
                    "owner": {"videoOwnerRenderer": {
                        "title": {"runs": [{"text": "Channel"}]},
                        "subscriberCountText": {"simpleText": "1M subscribers"}
                    }},
                    "attributedDescription": {"content": "About this video"}
                }}
            ]}},
            "secondaryResults": {"secondaryResults": {"results": [
                {"continuationItemRenderer": {}},
                {"compactVideoRenderer": {"videoId": "xyz", "lengthText": {"simpleText": "4:01"},
                    "navigationEndpoint": {"commandMetadata": {"webCommandMetadata": {"url": "/watch?v=xyz"}}}}},
                {"compactVideoRenderer": {"videoId": "later"}}
            ]}}
        }}});

        let detail = video_detail(&tree).unwrap();
        assert_eq!(detail.title(), "Detail Title");
        assert_eq!(detail.id(), "xyz");
        assert_eq!(detail.duration(), "4:01");
        assert_eq!(detail.url(), "https://youtube.com/watch?v=xyz");
        assert_eq!(detail.views(), "1,234,567 views");
        assert_eq!(detail.short_views(), "1.2M views");
        assert_eq!(detail.like_count(), "24K");
        assert_eq!(detail.publish_time(), "Mar 3, 2024");
        assert_eq!(detail.relative_date(), "Premiered 3 days ago");
        assert_eq!(detail.channel(), "Channel");
        assert_eq!(detail.subscriber_count(), "1M subscribers");
        assert_eq!(detail.description(), "About this video");
    }

    #[test]
    fn later_renderer_replaces_earlier() {
        let tree = json!({"contents": {"twoColumnWatchNextResults": {"results": {"results": {"contents": [
            {"videoPrimaryInfoRenderer": {"title": {"runs": [{"text": "first"}]}}},
            {"itemSectionRenderer": {}},
            {"videoPrimaryInfoRenderer": {"title": {"runs": [{"text": "second"}]}}}
        ]}}}}});
        let detail = video_detail(&tree).unwrap();
        assert_eq!(detail.title(), "second");
        assert_eq!(detail.id(), "");
    }

    #[test]
    fn missing_secondary_results_is_fine() {
        let tree = json!({"contents": {"twoColumnWatchNextResults": {}}});
        let detail = video_detail(&tree).unwrap();
        assert_eq!(detail, VideoDetail::default());
    }

    #[test]
    fn missing_watch_results_fails() {
        let tree = json!({"contents": {"twoColumnSearchResultsRenderer": {}}});
        assert!(matches!(
            video_detail(&tree).unwrap_err(),
            Error::StructureNotFound("contents.twoColumnWatchNextResults")
        ));
    }

    #[test]
    fn malformed_primary_aborts() {
        let tree = json!({"contents": {"twoColumnWatchNextResults": {"results": {"results": {"contents": [
            {"videoPrimaryInfoRenderer": {"title": "not an object"}}
        ]}}}}});
        assert!(matches!(video_detail(&tree).unwrap_err(), Error::JsonParse { .. }));
    }

    #[test]
    fn detail_from_html() {
        let html = concat!(
            "<html><script>var ytInitialData = ",
            r#"{"contents":{"twoColumnWatchNextResults":{"results":{"results":{"contents":[{"videoPrimaryInfoRenderer":{"title":{"runs":[{"text":"Detail Title"}]}}}]}},"secondaryResults":{"secondaryResults":{"results":[{"compactVideoRenderer":{"videoId":"xyz"}}]}}}}}"#,
            ";</script></html>"
        );
        let detail = parse_video_detail(html).unwrap();
        assert_eq!(detail.title(), "Detail Title");
        assert_eq!(detail.id(), "xyz");
    }
}
