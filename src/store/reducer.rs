//! State Reducer
//!
//! `reduce` is the single entry point for every mutation: a total,
//! synchronous, side-effect-free function from (state, action) to a new
//! state. It never mutates its input and it never fails — precondition
//! checks live with the callers, not here.

use crate::shared::model::{Message, User};
use crate::store::action::Action;
use crate::store::state::{AppState, Page};

/// Compute the successor state for one action.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::Login(user) => {
            next.current_user = Some(user);
        }
        Action::Logout => {
            next.current_user = None;
            next.current_page = Page::Feed;
        }
        Action::Register(user) => {
            next.users.push(user);
        }
        Action::UpdateUser(user) => {
            if let Some(stored) = next.users.iter_mut().find(|u| u.id == user.id) {
                *stored = user;
                refresh_current_user(&mut next);
            }
        }
        Action::AddVideo(video) => {
            next.videos.insert(0, video);
        }
        Action::ToggleLike { video_id, user_id } => {
            if let Some(video) = next.videos.iter_mut().find(|v| v.id == video_id) {
                toggle_membership(&mut video.likes, &user_id);
            }
        }
        Action::ToggleSave { video_id, user_id } => {
            if let Some(video) = next.videos.iter_mut().find(|v| v.id == video_id) {
                toggle_membership(&mut video.saves, &user_id);
            }
        }
        Action::AddComment { video_id, comment } => {
            if let Some(video) = next.videos.iter_mut().find(|v| v.id == video_id) {
                video.comments.insert(0, comment);
            }
        }
        Action::ToggleFollow {
            target_user_id,
            current_user_id,
        } => {
            for user in &mut next.users {
                if user.id == current_user_id {
                    toggle_membership(&mut user.following, &target_user_id);
                }
                if user.id == target_user_id {
                    toggle_membership(&mut user.followers, &current_user_id);
                }
            }
            refresh_current_user(&mut next);
        }
        Action::SendMessage(message) => {
            let key = conversation_key(next.current_user.as_ref(), &message);
            next.conversations.entry(key).or_default().push(message);
        }
        Action::SetPage(page) => {
            next.current_page = page;
            if page != Page::Profile {
                next.viewed_user = None;
            }
        }
        Action::SetViewedUser(user) => {
            next.viewed_user = user;
            next.current_page = Page::Profile;
        }
        Action::SetActiveChatUser(user_id) => {
            next.active_chat_user_id = user_id;
        }
    }

    next
}

/// Conversation bucket for a message: the participant who is not the session
/// user. When the session user is neither participant, file under the
/// receiver.
pub fn conversation_key(current_user: Option<&User>, message: &Message) -> String {
    match current_user {
        Some(user) if message.sender_id == user.id => message.receiver_id.clone(),
        Some(user) if message.receiver_id == user.id => message.sender_id.clone(),
        _ => message.receiver_id.clone(),
    }
}

/// Flip membership: present becomes absent, absent becomes present. Entries
/// stay unique because removal precedes any insert.
fn toggle_membership(members: &mut Vec<String>, id: &str) {
    if let Some(pos) = members.iter().position(|m| m == id) {
        members.remove(pos);
    } else {
        members.push(id.to_string());
    }
}

/// Resync the session's denormalized user copy from the authoritative
/// collection. Called after every user-collection mutation so the copy can
/// never diverge. `viewed_user` is deliberately left alone: it is a transient
/// view target cleared on navigation.
fn refresh_current_user(state: &mut AppState) {
    if let Some(current) = &state.current_user {
        if let Some(fresh) = state.users.iter().find(|u| u.id == current.id) {
            state.current_user = Some(fresh.clone());
        }
    }
}
