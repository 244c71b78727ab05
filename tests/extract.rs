use ytscrape::{BASE_URL, Error, Report, parse_search, parse_video_detail};

const SEARCH_HTML: &str = include_str!("fixtures/search.html");
const WATCH_HTML: &str = include_str!("fixtures/watch.html");

#[test]
fn parse_search_page() {
    let results = parse_search(SEARCH_HTML, 1).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), "testVideo1");
}

#[test]
fn search_page_all_results_in_order() {
    let results = parse_search(SEARCH_HTML, 0).unwrap();
    let ids: Vec<&str> = results.iter().map(|r| r.id()).collect();
    assert_eq!(ids, ["testVideo1", "testVideo2", "testVideo3"]);

    let third = &results[2];
    assert_eq!(third.title(), "Third result");
    assert_eq!(third.channel(), "Channel Three");
    assert_eq!(third.duration(), "1:02:03");
    assert_eq!(third.views(), "9,001 views");
    assert_eq!(third.publish_time(), "1 day ago");
    assert_eq!(third.url_suffix(), "/watch?v=testVideo3&pp=ygU");
    assert_eq!(third.url(), format!("{BASE_URL}/watch?v=testVideo3&pp=ygU"));
    assert_eq!(
        third.thumbnail_url(),
        "https://i.ytimg.com/vi/testVideo3/hq720.jpg?sqp=a"
    );
    let widths: Vec<u32> = third.thumbnails().iter().map(|t| t.width).collect();
    assert_eq!(widths, [360, 720]);
}

#[test]
fn search_limit_larger_than_results() {
    assert_eq!(parse_search(SEARCH_HTML, 2).unwrap().len(), 2);
    assert_eq!(parse_search(SEARCH_HTML, 50).unwrap().len(), 3);
}

#[test]
fn watch_page_used_as_search_is_structure_error() {
    assert!(matches!(
        parse_search(WATCH_HTML, 0).unwrap_err(),
        Error::StructureNotFound(_)
    ));
}

#[test]
fn parse_watch_page() {
    let detail = parse_video_detail(WATCH_HTML).unwrap();
    assert_eq!(detail.id(), "xyz");
    assert_eq!(detail.title(), "Detail Title");
    assert_eq!(detail.channel(), "Detail Channel");
    assert_eq!(detail.subscriber_count(), "2.5M subscribers");
    assert_eq!(
        detail.description(),
        "Line one\nLine two with a brace } and no terminator"
    );
    assert_eq!(detail.views(), "1,234,567 views");
    assert_eq!(detail.short_views(), "1.2M views");
    assert_eq!(detail.like_count(), "24K");
    assert_eq!(detail.publish_time(), "Mar 3, 2024");
    assert_eq!(detail.relative_date(), "Premiered 3 days ago");
    assert_eq!(detail.duration(), "4:01");
    assert_eq!(detail.url(), "https://youtube.com/watch?v=xyz");
    assert_eq!(
        detail.thumbnail_url(),
        "https://i.ytimg.com/vi/xyz/hqdefault.jpg"
    );
    assert_eq!(detail.compact().map(|c| c.channel()), Some("Other Channel"));

    let report = Report::from(&detail);
    assert_eq!(report.short_views.as_deref(), Some("1.2M views"));
    assert_eq!(report.title, detail.title());
}

#[test]
fn search_page_used_as_watch_is_structure_error() {
    assert!(matches!(
        parse_video_detail(SEARCH_HTML).unwrap_err(),
        Error::StructureNotFound(_)
    ));
}

#[test]
fn page_without_marker() {
    let html = "<html><head><title>Before you continue</title></head><body></body></html>";
    assert!(matches!(
        parse_search(html, 0).unwrap_err(),
        Error::MarkerNotFound
    ));
    assert!(matches!(
        parse_video_detail(html).unwrap_err(),
        Error::MarkerNotFound
    ));
}

#[test]
fn page_with_broken_json() {
    let html = r#"<script>var ytInitialData = {"contents": {"twoColumnSearchResultsRenderer": ]};</script>"#;
    assert!(matches!(
        parse_search(html, 0).unwrap_err(),
        Error::JsonParse { offset: Some(_), .. }
    ));
}

#[test]
fn string_containing_terminator_truncates_blob() {
    let html = r#"<script>var ytInitialData = {"contents":{"twoColumnSearchResultsRenderer":{"primaryContents":{"sectionListRenderer":{"contents":[{"itemSectionRenderer":{"contents":[{"videoRenderer":{"videoId":"a","title":{"runs":[{"text":"oops };"}]}}}]}}]}}}}};</script>"#;
    assert!(matches!(
        parse_search(html, 0).unwrap_err(),
        Error::JsonParse { .. }
    ));
}
