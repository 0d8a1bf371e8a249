//! Authentication and form validation
//!
//! All checks here run *before* an action is dispatched; the reducer never
//! validates. Credentials are compared in plaintext against the stored user
//! records — there is no hashing and no token layer in this client, by the
//! project's stated non-goals.

use uuid::Uuid;

use crate::shared::error::ValidationError;
use crate::shared::model::User;

/// Bio given to every freshly registered account
const NEW_USER_BIO: &str = "Welcome to Funguys!";

/// Minimum password length accepted at registration
const MIN_PASSWORD_LEN: usize = 6;

/// A registration form as submitted by the sign-up screen
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub agreed_to_terms: bool,
}

impl RegistrationForm {
    /// Build the account record for a validated form.
    pub fn into_user(self) -> User {
        let profile_picture = format!("https://picsum.photos/seed/{}/200/200", self.username);
        User {
            id: Uuid::new_v4().to_string(),
            username: self.username,
            email: Some(self.email),
            password: Some(self.password),
            display_name: self.display_name,
            profile_picture,
            bio: NEW_USER_BIO.to_string(),
            following: Vec::new(),
            followers: Vec::new(),
        }
    }
}

/// Find the account matching a login identifier (username or email) and
/// plaintext password. The assistant account stores no password and can
/// never match.
pub fn authenticate<'a>(users: &'a [User], identifier: &str, password: &str) -> Option<&'a User> {
    users.iter().find(|u| {
        (u.username == identifier || u.email.as_deref() == Some(identifier))
            && u.password.as_deref() == Some(password)
    })
}

/// Validate a registration form against the existing user collection.
///
/// Checks run in the order the sign-up screen reports them; the first
/// failure wins and nothing is mutated.
pub fn validate_registration(
    users: &[User],
    form: &RegistrationForm,
) -> Result<(), ValidationError> {
    if !is_valid_username(&form.username) {
        return Err(ValidationError::MalformedUsername);
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::MalformedEmail);
    }
    if users.iter().any(|u| u.username == form.username) {
        return Err(ValidationError::UsernameTaken);
    }
    if users.iter().any(|u| u.email.as_deref() == Some(form.email.as_str())) {
        return Err(ValidationError::EmailTaken);
    }
    if form.password.len() < MIN_PASSWORD_LEN {
        return Err(ValidationError::ShortPassword);
    }
    if form.display_name.trim().chars().count() < 2 {
        return Err(ValidationError::ShortDisplayName);
    }
    if !form.agreed_to_terms {
        return Err(ValidationError::TermsNotAccepted);
    }
    Ok(())
}

/// Validate an edited profile: the username must stay well-formed and must
/// not belong to any other account.
pub fn validate_profile_edit(users: &[User], updated: &User) -> Result<(), ValidationError> {
    if !is_valid_username(&updated.username) {
        return Err(ValidationError::MalformedUsername);
    }
    if users
        .iter()
        .any(|u| u.username == updated.username && u.id != updated.id)
    {
        return Err(ValidationError::UsernameTaken);
    }
    Ok(())
}

/// Usernames are 3-20 characters of ASCII letters, digits, and underscores.
fn is_valid_username(username: &str) -> bool {
    (3..=20).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Emails are `local@domain.tld`: one `@`, no whitespace, and a dot with
/// text on both sides in the domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
