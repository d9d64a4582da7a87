use serde::{Deserialize, Serialize};

/// Which analysis a piece of user input should drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Decide from the input itself.
    #[default]
    Auto,
    /// Score the comments of a single video.
    Video,
    /// Search a topic and rank the matching videos.
    Topic,
}

/// Resolves the concrete mode for `input`.
///
/// Anything that looks like a video link is analyzed as a video even when
/// `Topic` was requested; otherwise the requested mode applies and `Auto`
/// falls back to a topic search. Never returns [`InputMode::Auto`].
#[must_use]
pub fn resolve_mode(input: &str, requested: InputMode) -> InputMode {
    let looks_like_link = input.contains("youtube.com") || input.contains("youtu.be");
    if requested == InputMode::Video || looks_like_link {
        InputMode::Video
    } else {
        InputMode::Topic
    }
}
