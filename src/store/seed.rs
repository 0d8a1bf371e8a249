//! First-run seed data
//!
//! The fixed demo dataset written into an empty durable slot: three demo
//! creators plus the assistant account, three videos, and two seeded
//! conversations. Ids are stable readable strings so the demo content is easy
//! to refer to from tests.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};

use crate::shared::model::{Comment, Message, User, Video, ASSISTANT_USER_ID};
use crate::store::state::AppState;

/// Build the demo state for a first run. No user is signed in.
pub fn demo_state() -> AppState {
    AppState {
        users: demo_users(),
        videos: demo_videos(),
        conversations: demo_conversations(),
        ..AppState::default()
    }
}

fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "user1".into(),
            username: "creator_cat".into(),
            email: Some("cat@example.com".into()),
            password: Some("password123".into()),
            display_name: "Creative Cat".into(),
            profile_picture: "https://picsum.photos/id/1025/200/200".into(),
            bio: "Just a cat who loves to create cool videos! 🐾".into(),
            following: vec!["user2".into()],
            followers: vec!["user2".into()],
        },
        User {
            id: "user2".into(),
            username: "dance_doggo".into(),
            email: Some("dog@example.com".into()),
            password: Some("password123".into()),
            display_name: "Dancing Doggo".into(),
            profile_picture: "https://picsum.photos/id/237/200/200".into(),
            bio: "Following the rhythm of life. 🕺💃".into(),
            following: vec!["user1".into(), "user3".into()],
            followers: vec!["user1".into()],
        },
        User {
            id: "user3".into(),
            username: "foodie_fox".into(),
            email: Some("fox@example.com".into()),
            password: Some("password123".into()),
            display_name: "Foodie Fox".into(),
            profile_picture: "https://picsum.photos/id/40/200/200".into(),
            bio: "Exploring the world one bite at a time. 🦊🍕".into(),
            following: vec![],
            followers: vec!["user2".into()],
        },
        User {
            id: ASSISTANT_USER_ID.into(),
            username: "gemini".into(),
            email: None,
            password: None,
            display_name: "Gemini AI".into(),
            profile_picture: "https://www.gstatic.com/lamda/images/gemini_sparkle_v002_d6ebb193414a69e9b3a3d142d7b57b10.gif".into(),
            bio: "Your creative AI partner. Ask me anything!".into(),
            following: vec![],
            followers: vec![],
        },
    ]
}

fn demo_videos() -> Vec<Video> {
    let now = Utc::now();
    vec![
        Video {
            id: "vid1".into(),
            url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4".into(),
            cover_image:
                "https://storage.googleapis.com/gtv-videos-bucket/sample/images/ForBiggerFun.jpg"
                    .into(),
            caption: "Having some BIG fun out here! This was an amazing day.".into(),
            tags: vec!["fun".into(), "animation".into(), "outdoors".into()],
            user_id: "user1".into(),
            likes: vec!["user2".into(), "user3".into()],
            saves: vec!["user2".into()],
            comments: vec![
                Comment {
                    id: "c1".into(),
                    user_id: "user2".into(),
                    video_id: "vid1".into(),
                    text: "This looks so cool!".into(),
                    timestamp: now - Duration::milliseconds(100_000),
                    replies: vec![],
                },
                Comment {
                    id: "c2".into(),
                    user_id: "user3".into(),
                    video_id: "vid1".into(),
                    text: "Wow, incredible!".into(),
                    timestamp: now - Duration::milliseconds(50_000),
                    replies: vec![],
                },
            ],
            shares: 120,
            views: 15_234,
        },
        Video {
            id: "vid2".into(),
            url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4"
                .into(),
            cover_image:
                "https://storage.googleapis.com/gtv-videos-bucket/sample/images/ElephantsDream.jpg"
                    .into(),
            caption: "Diving into a dream world. What do you think this means?".into(),
            tags: vec!["dream".into(), "surreal".into(), "blender".into()],
            user_id: "user2".into(),
            likes: vec!["user1".into()],
            saves: vec![],
            comments: vec![Comment {
                id: "c3".into(),
                user_id: "user1".into(),
                video_id: "vid2".into(),
                text: "Mind-bending stuff!".into(),
                timestamp: now - Duration::milliseconds(80_000),
                replies: vec![],
            }],
            shares: 256,
            views: 22_890,
        },
        Video {
            id: "vid3".into(),
            url: "https://storage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4".into(),
            cover_image:
                "https://storage.googleapis.com/gtv-videos-bucket/sample/images/BigBuckBunny.jpg"
                    .into(),
            caption: "Just a chill day in the forest with some friends.".into(),
            tags: vec!["nature".into(), "bunny".into(), "animation".into()],
            user_id: "user1".into(),
            likes: vec!["user2".into(), "user3".into()],
            saves: vec!["user3".into()],
            comments: vec![],
            shares: 50,
            views: 8_000,
        },
    ]
}

fn demo_conversations() -> BTreeMap<String, Vec<Message>> {
    let now = Utc::now();
    let mut conversations = BTreeMap::new();
    conversations.insert(
        ASSISTANT_USER_ID.to_string(),
        vec![Message {
            id: "msg1".into(),
            sender_id: ASSISTANT_USER_ID.into(),
            receiver_id: String::new(),
            text: "Hello! I am Gemini, your AI assistant. How can I help you be creative today?"
                .into(),
            timestamp: now - Duration::milliseconds(200_000),
        }],
    );
    conversations.insert(
        "user2".to_string(),
        vec![Message {
            id: "msg2".into(),
            sender_id: "user2".into(),
            receiver_id: String::new(),
            text: "Hey! Loved your last video.".into(),
            timestamp: now - Duration::milliseconds(100_000),
        }],
    );
    conversations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_contents() {
        let state = demo_state();

        assert_eq!(state.users.len(), 4); // 3 demo creators + assistant
        assert_eq!(state.videos.len(), 3);
        assert_eq!(state.conversations.len(), 2);
        assert!(state.current_user.is_none());
    }

    #[test]
    fn test_seed_usernames_are_unique() {
        let state = demo_state();
        let mut names: Vec<&str> = state.users.iter().map(|u| u.username.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), state.users.len());
    }

    #[test]
    fn test_seed_follow_graph_is_symmetric() {
        let state = demo_state();
        for user in &state.users {
            for followed in &user.following {
                let other = state.user(followed).expect("dangling follow edge");
                assert!(
                    other.followers.contains(&user.id),
                    "{} follows {} but is not in their followers",
                    user.id,
                    other.id
                );
            }
            for follower in &user.followers {
                let other = state.user(follower).expect("dangling follower edge");
                assert!(other.following.contains(&user.id));
            }
        }
    }

    #[test]
    fn test_assistant_account_has_no_credentials() {
        let state = demo_state();
        let assistant = state.user(ASSISTANT_USER_ID).unwrap();
        assert!(assistant.email.is_none());
        assert!(assistant.password.is_none());
    }
}
