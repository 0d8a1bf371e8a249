//! Video Data Structure
//!
//! Represents a published video post: media URLs, caption, tags, and the
//! engagement bookkeeping (likes, saves, comments, counters).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::comment::Comment;

/// Represents a published video
///
/// `likes` and `saves` are membership lists of user ids: presence means the
/// user has liked/saved the video, and the reducer's toggle transitions keep
/// entries unique. Caption and tags are immutable after publication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    /// Unique video ID
    pub id: String,
    /// Media URL for playback
    pub url: String,
    /// Still-image URL or data URL shown in grids and previews
    pub cover_image: String,
    /// Caption text
    pub caption: String,
    /// Tag list; stored without any `#` sigil
    pub tags: Vec<String>,
    /// Id of the owning user
    pub user_id: String,
    /// Ids of users who liked this video
    pub likes: Vec<String>,
    /// Ids of users who saved this video
    pub saves: Vec<String>,
    /// Comments, newest first
    pub comments: Vec<Comment>,
    /// Share counter
    pub shares: u64,
    /// View counter
    pub views: u64,
}

impl Video {
    /// Create a fresh upload with a generated id and zeroed engagement
    pub fn new(
        user_id: impl Into<String>,
        url: impl Into<String>,
        cover_image: impl Into<String>,
        caption: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url: url.into(),
            cover_image: cover_image.into(),
            caption: caption.into(),
            tags,
            user_id: user_id.into(),
            likes: Vec::new(),
            saves: Vec::new(),
            comments: Vec::new(),
            shares: 0,
            views: 0,
        }
    }
}

/// Parse a free-form tag input into a tag list
///
/// Splits on commas and whitespace and drops empty segments, so
/// `"fun, outdoors  animation"` becomes `["fun", "outdoors", "animation"]`.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_video_starts_with_zeroed_engagement() {
        let video = Video::new("user1", "http://v.mp4", "http://c.jpg", "hi", vec![]);

        assert!(video.likes.is_empty());
        assert!(video.saves.is_empty());
        assert!(video.comments.is_empty());
        assert_eq!(video.shares, 0);
        assert_eq!(video.views, 0);
    }

    #[test]
    fn test_parse_tags_splits_on_commas_and_spaces() {
        assert_eq!(
            parse_tags("fun, outdoors  animation"),
            vec!["fun", "outdoors", "animation"]
        );
    }

    #[test]
    fn test_parse_tags_drops_empty_segments() {
        assert_eq!(parse_tags(" , ,, "), Vec::<String>::new());
        assert_eq!(parse_tags(""), Vec::<String>::new());
    }
}
