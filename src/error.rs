use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid YouTube video URL: {0}")]
    InvalidUrl(String),

    #[error("search terms are empty")]
    EmptySearchTerms,

    #[error("ytInitialData not found in page")]
    MarkerNotFound,

    #[error("failed to parse ytInitialData{}: {source}", .offset.map(|o| format!(" at byte {o}")).unwrap_or_default())]
    JsonParse {
        offset: Option<usize>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} not found")]
    StructureNotFound(&'static str),

    #[error("no videos found")]
    NoResultsFound,

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Parse failure over `text`, with the byte offset recovered from serde_json's
    /// line/column position.
    pub(crate) fn json_in(text: &str, source: serde_json::Error) -> Self {
        let offset = byte_offset(text, source.line(), source.column());
        Error::JsonParse { offset, source }
    }

    /// Decode failure on a subtree that has no position in the original text.
    pub(crate) fn json_decode(source: serde_json::Error) -> Self {
        Error::JsonParse {
            offset: None,
            source,
        }
    }
}

// serde_json reports 1-based lines and columns; line 0 means no position.
fn byte_offset(text: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut start = 0usize;
    for (idx, current) in text.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            let col = column.saturating_sub(1).min(current.len());
            return Some(start + col);
        }
        start += current.len();
    }
    None
}
