//! Store Actions
//!
//! Every mutation of the application state is expressed as one of these
//! actions and routed through [`crate::store::reducer::reduce`]. Precondition
//! checks (credentials, uniqueness, form validation) happen before dispatch;
//! the reducer treats every action as already validated.

use crate::shared::model::{Comment, Message, User, Video};
use crate::store::state::Page;

/// A state transition request
#[derive(Debug, Clone)]
pub enum Action {
    /// Set the session user. Credential checking happens before dispatch.
    Login(User),
    /// Clear the session and return to the feed
    Logout,
    /// Append a new account to the user collection. Username/email
    /// uniqueness is the caller's responsibility.
    Register(User),
    /// Replace the stored record with the same id; no-op when absent
    UpdateUser(User),
    /// Prepend a new video (the feed is most-recent-first)
    AddVideo(Video),
    /// Flip `user_id`'s membership in the video's likes
    ToggleLike { video_id: String, user_id: String },
    /// Flip `user_id`'s membership in the video's saves
    ToggleSave { video_id: String, user_id: String },
    /// Prepend a comment to the video's list
    AddComment { video_id: String, comment: Comment },
    /// Flip the follow edge from `current_user_id` to `target_user_id`,
    /// updating both sides of the graph atomically
    ToggleFollow {
        target_user_id: String,
        current_user_id: String,
    },
    /// File a message into its conversation bucket
    SendMessage(Message),
    /// Switch the active screen
    SetPage(Page),
    /// Set the profile-page target and navigate to the profile screen
    SetViewedUser(Option<User>),
    /// Store (or clear) the inbox deep-link target
    SetActiveChatUser(Option<String>),
}
