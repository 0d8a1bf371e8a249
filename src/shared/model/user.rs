//! User Data Structure
//!
//! Represents an account in the user collection, including its profile fields
//! and both sides of the follow graph.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a user account
///
/// Relationships are stored by id reference: `following` and `followers` hold
/// user ids, never embedded records. The reducer keeps the two sides of the
/// follow graph symmetric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique user ID
    pub id: String,
    /// Unique handle shown as `@username`
    pub username: String,
    /// Account email, unique when present (the assistant account has none)
    #[serde(default)]
    pub email: Option<String>,
    /// Plaintext password; credential checks compare this directly.
    /// Not intended for long-term storage.
    #[serde(default)]
    pub password: Option<String>,
    /// Display name shown on the profile header
    pub display_name: String,
    /// Profile picture URL
    pub profile_picture: String,
    /// Profile bio text
    pub bio: String,
    /// Ids of users this account follows
    pub following: Vec<String>,
    /// Ids of users following this account
    pub followers: Vec<String>,
}

impl User {
    /// Create a new account with a generated id and empty follow sets
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
        profile_picture: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            email: Some(email.into()),
            password: Some(password.into()),
            display_name: display_name.into(),
            profile_picture: profile_picture.into(),
            bio: bio.into(),
            following: Vec::new(),
            followers: Vec::new(),
        }
    }

    /// Whether this user follows `user_id`
    pub fn is_following(&self, user_id: &str) -> bool {
        self.following.iter().any(|id| id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_unique_id_and_empty_graph() {
        let a = User::new("ada", "ada@example.com", "hunter22", "Ada", "http://pic", "hi");
        let b = User::new("ada", "ada@example.com", "hunter22", "Ada", "http://pic", "hi");

        assert_ne!(a.id, b.id);
        assert!(a.following.is_empty());
        assert!(a.followers.is_empty());
    }

    #[test]
    fn test_is_following() {
        let mut user = User::new("ada", "ada@example.com", "hunter22", "Ada", "http://pic", "hi");
        user.following.push("other".to_string());

        assert!(user.is_following("other"));
        assert!(!user.is_following("stranger"));
    }
}
