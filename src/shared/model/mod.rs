//! Entity model
//!
//! Pure data declarations for the four entity kinds held by the store. Every
//! relationship is an id reference into the owning collection; nothing is
//! embedded twice except the session's denormalized current-user copy, which
//! the reducer keeps in sync.

pub mod comment;
pub mod message;
pub mod user;
pub mod video;

pub use comment::Comment;
pub use message::{Message, ASSISTANT_USER_ID};
pub use user::User;
pub use video::{parse_tags, Video};
