//! Derived View Projections
//!
//! Read-only queries over a committed state. All of these are pure, allocate
//! at most a Vec of borrows, and are safe to recompute on every render —
//! nothing here mutates or caches.

use crate::shared::model::{Message, User, Video, ASSISTANT_USER_ID};
use crate::store::state::AppState;

/// The feed: the video collection in its stored, most-recent-first order.
/// There is no ranking or personalization.
pub fn feed(state: &AppState) -> &[Video] {
    &state.videos
}

/// Videos owned by `user_id`, in feed order
pub fn user_posts<'a>(state: &'a AppState, user_id: &str) -> Vec<&'a Video> {
    state.videos.iter().filter(|v| v.user_id == user_id).collect()
}

/// Videos saved by the profile being viewed — visible only when that profile
/// is the session user. Anyone else's profile shows no saved tab content.
pub fn saved_videos<'a>(state: &'a AppState, profile_user_id: &str) -> Vec<&'a Video> {
    match state.current_user_id() {
        Some(current) if current == profile_user_id => state
            .videos
            .iter()
            .filter(|v| v.saves.iter().any(|id| id == profile_user_id))
            .collect(),
        _ => Vec::new(),
    }
}

/// Total likes across all of `user_id`'s posts (profile header rollup)
pub fn total_likes(state: &AppState, user_id: &str) -> usize {
    state
        .videos
        .iter()
        .filter(|v| v.user_id == user_id)
        .map(|v| v.likes.len())
        .sum()
}

/// Users whose username contains `query` (case-insensitive substring),
/// excluding the session user. An empty query matches nothing. Collection
/// order is preserved.
pub fn search_users<'a>(state: &'a AppState, query: &str) -> Vec<&'a User> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    state
        .users
        .iter()
        .filter(|u| u.username.to_lowercase().contains(&needle))
        .filter(|u| state.current_user_id() != Some(u.id.as_str()))
        .collect()
}

/// Videos with a tag containing `query` (case-insensitive substring, with a
/// leading `#` stripped from the query). An empty query matches nothing.
pub fn search_videos<'a>(state: &'a AppState, query: &str) -> Vec<&'a Video> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.strip_prefix('#').unwrap_or(query).to_lowercase();
    state
        .videos
        .iter()
        .filter(|v| v.tags.iter().any(|tag| tag.to_lowercase().contains(&needle)))
        .collect()
}

/// Inbox conversation list: the assistant is always pinned first when its
/// account exists; every other non-self user appears only once it has at
/// least one stored message, in collection order (not recency order).
pub fn conversation_partners(state: &AppState) -> Vec<&User> {
    let mut partners = Vec::new();
    if let Some(assistant) = state.user(ASSISTANT_USER_ID) {
        partners.push(assistant);
    }
    for user in &state.users {
        if state.current_user_id() == Some(user.id.as_str()) || user.id == ASSISTANT_USER_ID {
            continue;
        }
        let has_messages = state
            .conversations
            .get(&user.id)
            .is_some_and(|bucket| !bucket.is_empty());
        if has_messages {
            partners.push(user);
        }
    }
    partners
}

/// All messages exchanged with `other_user_id`, ordered by arrival
pub fn conversation<'a>(state: &'a AppState, other_user_id: &str) -> &'a [Message] {
    state
        .conversations
        .get(other_user_id)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The newest message in the bucket keyed by `other_user_id` (inbox preview)
pub fn last_message<'a>(state: &'a AppState, other_user_id: &str) -> Option<&'a Message> {
    conversation(state, other_user_id).last()
}
