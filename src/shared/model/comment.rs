//! Comment Data Structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a comment on a video
///
/// Comments are immutable once created and are prepended to the owning
/// video's list (newest first).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Unique comment ID
    pub id: String,
    /// Id of the comment author
    pub user_id: String,
    /// Id of the video this comment belongs to
    pub video_id: String,
    /// Comment text
    pub text: String,
    /// When the comment was created
    pub timestamp: DateTime<Utc>,
    /// Nested replies. Declared for threading but never populated by any
    /// transition; kept so stored state round-trips.
    #[serde(default)]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Create a new comment with a generated id, stamped now
    pub fn new(
        user_id: impl Into<String>,
        video_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            video_id: video_id.into(),
            text: text.into(),
            timestamp: Utc::now(),
            replies: Vec::new(),
        }
    }
}
