//! Application State Value
//!
//! The whole client state is one serializable value. Transitions never mutate
//! a state in place; the reducer produces a structurally new value, and the
//! store serializes the complete value to the durable slot on every commit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::model::{Message, User, Video};

/// Top-level navigation destination
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// The video feed (default destination)
    #[default]
    Feed,
    Search,
    Create,
    Inbox,
    Profile,
}

/// The complete application state
///
/// `conversations` is keyed by the id of the non-self participant relative to
/// the session user; each bucket is ordered by arrival. `current_user` is a
/// denormalized copy of a record in `users` — the reducer resynchronizes it
/// after every user-collection mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppState {
    /// All known user accounts
    pub users: Vec<User>,
    /// All published videos, most recent first
    pub videos: Vec<Video>,
    /// Conversation buckets keyed by the other participant's id
    pub conversations: BTreeMap<String, Vec<Message>>,
    /// The signed-in user, if any
    pub current_user: Option<User>,
    /// The active screen
    pub current_page: Page,
    /// Profile-page target when viewing someone other than the session user.
    /// Cleared whenever navigation leaves the profile page.
    pub viewed_user: Option<User>,
    /// Deep-link target consumed once by the inbox screen
    pub active_chat_user_id: Option<String>,
}

impl AppState {
    /// Look up a user by id
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Look up a video by id
    pub fn video(&self, video_id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == video_id)
    }

    /// Id of the signed-in user, if any
    pub fn current_user_id(&self) -> Option<&str> {
        self.current_user.as_ref().map(|u| u.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_logged_out_on_feed() {
        let state = AppState::default();

        assert!(state.current_user.is_none());
        assert_eq!(state.current_page, Page::Feed);
        assert!(state.users.is_empty());
        assert!(state.conversations.is_empty());
    }

    #[test]
    fn test_lookups() {
        let mut state = AppState::default();
        state.users.push(User::new("ada", "a@b.c", "secret1", "Ada", "p", "b"));
        let id = state.users[0].id.clone();

        assert_eq!(state.user(&id).unwrap().username, "ada");
        assert!(state.user("missing").is_none());
        assert!(state.current_user_id().is_none());
    }
}
