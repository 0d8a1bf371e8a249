//! Shared Error Types
//!
//! Validation failures are surfaced inline to the user and never thrown
//! through the store: every check runs before an action is dispatched, so the
//! reducer itself cannot fail. The `Display` strings here are the exact
//! messages shown in the UI.

use thiserror::Error;

/// A pre-dispatch validation failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Login identifier/password pair matched no account
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// Username is not 3-20 characters of letters, numbers, and underscores
    #[error("Username must be 3-20 characters (letters, numbers, underscores).")]
    MalformedUsername,

    /// Email is not shaped like `local@domain.tld`
    #[error("Please enter a valid email address.")]
    MalformedEmail,

    /// Another account already holds this username
    #[error("Username is already taken.")]
    UsernameTaken,

    /// Another account already registered this email
    #[error("An account with this email already exists.")]
    EmailTaken,

    /// Password is shorter than six characters
    #[error("Password must be at least 6 characters long.")]
    ShortPassword,

    /// Display name is shorter than two characters after trimming
    #[error("Display name must be at least 2 characters long.")]
    ShortDisplayName,

    /// Terms of service were not accepted
    #[error("You must agree to the Terms of Service.")]
    TermsNotAccepted,
}
