use serde::{Deserialize, Deserializer, Serialize};

/// Origin joined with the relative URL suffixes YouTube embeds in its renderers.
pub const BASE_URL: &str = "https://youtube.com";

// YouTube sends `null` for some absent nodes; read it as the empty value.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Thumbnail {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub width: u32,
    #[serde(deserialize_with = "null_default")]
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ThumbnailSet {
    #[serde(deserialize_with = "null_default")]
    thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct TextRun {
    #[serde(deserialize_with = "null_default")]
    text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct Runs {
    #[serde(deserialize_with = "null_default")]
    runs: Vec<TextRun>,
}

impl Runs {
    fn first(&self) -> &str {
        self.runs.first().map(|r| r.text.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimpleText {
    #[serde(deserialize_with = "null_default")]
    simple_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AccessibilityData {
    #[serde(deserialize_with = "null_default")]
    label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Accessibility {
    #[serde(deserialize_with = "null_default")]
    accessibility_data: AccessibilityData,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct Title {
    #[serde(deserialize_with = "null_default")]
    runs: Vec<TextRun>,
    #[serde(deserialize_with = "null_default")]
    accessibility: Accessibility,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LengthText {
    #[serde(deserialize_with = "null_default")]
    simple_text: String,
    #[serde(deserialize_with = "null_default")]
    accessibility: Accessibility,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WebCommandMetadata {
    #[serde(deserialize_with = "null_default")]
    url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CommandMetadata {
    #[serde(deserialize_with = "null_default")]
    web_command_metadata: WebCommandMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct NavigationEndpoint {
    #[serde(deserialize_with = "null_default")]
    command_metadata: CommandMetadata,
}

/// A `videoRenderer` from search results, or a `compactVideoRenderer` from the
/// watch page sidebar. Both share this shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResultItem {
    #[serde(deserialize_with = "null_default")]
    video_id: String,
    #[serde(deserialize_with = "null_default")]
    thumbnail: ThumbnailSet,
    #[serde(deserialize_with = "null_default")]
    title: Title,
    #[serde(deserialize_with = "null_default")]
    long_byline_text: Runs,
    #[serde(deserialize_with = "null_default")]
    published_time_text: SimpleText,
    #[serde(deserialize_with = "null_default")]
    length_text: LengthText,
    #[serde(deserialize_with = "null_default")]
    view_count_text: SimpleText,
    #[serde(deserialize_with = "null_default")]
    navigation_endpoint: NavigationEndpoint,
}

impl SearchResultItem {
    pub fn id(&self) -> &str {
        &self.video_id
    }

    pub fn title(&self) -> &str {
        self.title.runs.first().map(|r| r.text.as_str()).unwrap_or("")
    }

    pub fn title_label(&self) -> &str {
        &self.title.accessibility.accessibility_data.label
    }

    pub fn channel(&self) -> &str {
        self.long_byline_text.first()
    }

    pub fn views(&self) -> &str {
        &self.view_count_text.simple_text
    }

    pub fn duration(&self) -> &str {
        &self.length_text.simple_text
    }

    /// Spoken form of the duration, e.g. "3 minutes, 45 seconds".
    pub fn duration_label(&self) -> &str {
        &self.length_text.accessibility.accessibility_data.label
    }

    pub fn publish_time(&self) -> &str {
        &self.published_time_text.simple_text
    }

    pub fn url_suffix(&self) -> &str {
        &self.navigation_endpoint.command_metadata.web_command_metadata.url
    }

    pub fn url(&self) -> String {
        format!("{BASE_URL}{}", self.url_suffix())
    }

    /// First (lowest resolution) thumbnail.
    pub fn thumbnail_url(&self) -> &str {
        self.thumbnail
            .thumbnails
            .first()
            .map(|t| t.url.as_str())
            .unwrap_or("")
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnail.thumbnails
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VideoViewCountRenderer {
    #[serde(deserialize_with = "null_default")]
    view_count: SimpleText,
    #[serde(deserialize_with = "null_default")]
    short_view_count: SimpleText,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ViewCount {
    #[serde(deserialize_with = "null_default")]
    video_view_count_renderer: VideoViewCountRenderer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct ButtonViewModel {
    #[serde(deserialize_with = "null_default")]
    title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DefaultButtonViewModel {
    #[serde(deserialize_with = "null_default")]
    button_view_model: ButtonViewModel,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct InnerToggleButtonViewModel {
    #[serde(deserialize_with = "null_default")]
    default_button_view_model: DefaultButtonViewModel,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ToggleButtonViewModel {
    #[serde(deserialize_with = "null_default")]
    toggle_button_view_model: InnerToggleButtonViewModel,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct InnerLikeButtonViewModel {
    #[serde(deserialize_with = "null_default")]
    toggle_button_view_model: ToggleButtonViewModel,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LikeButtonViewModel {
    #[serde(deserialize_with = "null_default")]
    like_button_view_model: InnerLikeButtonViewModel,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SegmentedLikeDislikeButtonViewModel {
    #[serde(deserialize_with = "null_default")]
    like_button_view_model: LikeButtonViewModel,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TopLevelButton {
    #[serde(deserialize_with = "null_default")]
    segmented_like_dislike_button_view_model: SegmentedLikeDislikeButtonViewModel,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MenuRenderer {
    #[serde(deserialize_with = "null_default")]
    top_level_buttons: Vec<TopLevelButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VideoActions {
    #[serde(deserialize_with = "null_default")]
    menu_renderer: MenuRenderer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct PrimaryInfo {
    #[serde(deserialize_with = "null_default")]
    title: Title,
    #[serde(deserialize_with = "null_default")]
    view_count: ViewCount,
    #[serde(deserialize_with = "null_default")]
    video_actions: VideoActions,
    #[serde(deserialize_with = "null_default")]
    date_text: SimpleText,
    #[serde(deserialize_with = "null_default")]
    relative_date_text: SimpleText,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct VideoOwnerRenderer {
    #[serde(deserialize_with = "null_default")]
    title: Runs,
    #[serde(deserialize_with = "null_default")]
    subscriber_count_text: SimpleText,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Owner {
    #[serde(deserialize_with = "null_default")]
    video_owner_renderer: VideoOwnerRenderer,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct Description {
    #[serde(deserialize_with = "null_default")]
    content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SecondaryInfo {
    #[serde(deserialize_with = "null_default")]
    owner: Owner,
    #[serde(deserialize_with = "null_default")]
    attributed_description: Description,
}

/// Watch page record: primary and secondary info renderers plus the first
/// recommended video, which supplies id, thumbnails, duration and URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDetail {
    primary: Option<PrimaryInfo>,
    secondary: Option<SecondaryInfo>,
    compact: Option<SearchResultItem>,
}

impl VideoDetail {
    pub(crate) fn new(
        primary: Option<PrimaryInfo>,
        secondary: Option<SecondaryInfo>,
        compact: Option<SearchResultItem>,
    ) -> Self {
        Self {
            primary,
            secondary,
            compact,
        }
    }

    fn compact_field<'a>(&'a self, f: impl FnOnce(&'a SearchResultItem) -> &'a str) -> &'a str {
        self.compact.as_ref().map(f).unwrap_or("")
    }

    fn primary_field<'a>(&'a self, f: impl FnOnce(&'a PrimaryInfo) -> &'a str) -> &'a str {
        self.primary.as_ref().map(f).unwrap_or("")
    }

    fn secondary_field<'a>(&'a self, f: impl FnOnce(&'a SecondaryInfo) -> &'a str) -> &'a str {
        self.secondary.as_ref().map(f).unwrap_or("")
    }

    pub fn id(&self) -> &str {
        self.compact_field(SearchResultItem::id)
    }

    pub fn title(&self) -> &str {
        let primary = self.primary_field(|p| {
            p.title
                .runs
                .first()
                .map(|r| r.text.as_str())
                .unwrap_or("")
        });
        if !primary.is_empty() {
            return primary;
        }
        self.compact_field(SearchResultItem::title)
    }

    pub fn channel(&self) -> &str {
        self.secondary_field(|s| s.owner.video_owner_renderer.title.first())
    }

    pub fn subscriber_count(&self) -> &str {
        self.secondary_field(|s| &s.owner.video_owner_renderer.subscriber_count_text.simple_text)
    }

    pub fn description(&self) -> &str {
        self.secondary_field(|s| &s.attributed_description.content)
    }

    /// Exact count, e.g. "1,234,567 views".
    pub fn views(&self) -> &str {
        self.primary_field(|p| &p.view_count.video_view_count_renderer.view_count.simple_text)
    }

    /// Abbreviated count, e.g. "1.2M views".
    pub fn short_views(&self) -> &str {
        self.primary_field(|p| {
            &p.view_count
                .video_view_count_renderer
                .short_view_count
                .simple_text
        })
    }

    /// Absent when the page uses a like button variant without a title.
    pub fn like_count(&self) -> &str {
        self.primary_field(|p| {
            p.video_actions
                .menu_renderer
                .top_level_buttons
                .first()
                .map(|b| {
                    b.segmented_like_dislike_button_view_model
                        .like_button_view_model
                        .like_button_view_model
                        .toggle_button_view_model
                        .toggle_button_view_model
                        .default_button_view_model
                        .button_view_model
                        .title
                        .as_str()
                })
                .unwrap_or("")
        })
    }

    pub fn publish_time(&self) -> &str {
        self.primary_field(|p| &p.date_text.simple_text)
    }

    pub fn relative_date(&self) -> &str {
        self.primary_field(|p| &p.relative_date_text.simple_text)
    }

    pub fn duration(&self) -> &str {
        self.compact_field(SearchResultItem::duration)
    }

    pub fn url_suffix(&self) -> &str {
        self.compact_field(SearchResultItem::url_suffix)
    }

    pub fn url(&self) -> String {
        format!("{BASE_URL}{}", self.url_suffix())
    }

    pub fn thumbnail_url(&self) -> &str {
        self.compact_field(SearchResultItem::thumbnail_url)
    }

    pub fn thumbnails(&self) -> &[Thumbnail] {
        self.compact
            .as_ref()
            .map(SearchResultItem::thumbnails)
            .unwrap_or(&[])
    }

    /// The recommended video the identifying fields were taken from, if any.
    pub fn compact(&self) -> Option<&SearchResultItem> {
        self.compact.as_ref()
    }
}
