//! Reducer-driven application store
//!
//! Control flow: UI events build an [`Action`] → [`AppStore::dispatch`] runs
//! the pure reducer → the complete new state is written to the durable slot →
//! projections recompute derived views for rendering. Every transition runs
//! synchronously to completion on one logical thread; nothing interleaves.
//!
//! Persistence failures are logged and absorbed: the store keeps serving its
//! in-memory state and never propagates a slot error to the UI.

pub mod action;
pub mod local_db;
pub mod projections;
pub mod reducer;
pub mod seed;
pub mod state;

use tracing::{error, info, warn};

use crate::auth::{self, RegistrationForm};
use crate::shared::config::StoreConfig;
use crate::shared::error::ValidationError;
use crate::shared::model::User;

pub use action::Action;
pub use local_db::{LocalStateDb, StoreError, STATE_SLOT_KEY};
pub use state::{AppState, Page};

/// The application store: the committed state value plus the durable slot.
pub struct AppStore {
    state: AppState,
    db: Option<LocalStateDb>,
}

impl AppStore {
    /// Open the durable slot and load the committed state.
    ///
    /// An absent or unreadable slot yields the fixed seed data set, persisted
    /// immediately. An unopenable database is logged and the store runs
    /// in-memory only — initialization itself cannot fail.
    pub async fn open(config: &StoreConfig) -> Self {
        let db = match LocalStateDb::open(config).await {
            Ok(db) => Some(db),
            Err(err) => {
                error!(error = %err, "could not open local state database; running in memory");
                None
            }
        };

        let mut store = Self {
            state: AppState::default(),
            db,
        };

        store.state = match &store.db {
            Some(db) => match db.load().await {
                Ok(Some(state)) => state,
                Ok(None) => {
                    info!("empty state slot; seeding demo data");
                    let seeded = seed::demo_state();
                    if let Err(err) = db.save(&seeded).await {
                        error!(error = %err, "could not persist seed state");
                    }
                    seeded
                }
                Err(err) => {
                    warn!(error = %err, "state slot unreadable; reseeding demo data");
                    let seeded = seed::demo_state();
                    if let Err(err) = db.save(&seeded).await {
                        error!(error = %err, "could not persist seed state");
                    }
                    seeded
                }
            },
            None => seed::demo_state(),
        };

        store
    }

    /// A store with seed data and no durable slot. For embedding and tests.
    pub fn in_memory() -> Self {
        Self {
            state: seed::demo_state(),
            db: None,
        }
    }

    /// The committed state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run one transition and persist the result.
    pub async fn dispatch(&mut self, action: Action) {
        self.state = reducer::reduce(&self.state, action);
        if let Some(db) = &self.db {
            if let Err(err) = db.save(&self.state).await {
                error!(error = %err, "could not persist application state");
            }
        }
    }

    /// Check credentials against the user collection and sign in.
    pub async fn login(&mut self, identifier: &str, password: &str) -> Result<User, ValidationError> {
        let user = auth::authenticate(&self.state.users, identifier, password)
            .cloned()
            .ok_or(ValidationError::InvalidCredentials)?;
        self.dispatch(Action::Login(user.clone())).await;
        Ok(user)
    }

    /// Validate a registration form, then register and sign in the new user.
    ///
    /// A rejected form leaves the state untouched — validation runs before
    /// any action is dispatched.
    pub async fn register(&mut self, form: RegistrationForm) -> Result<User, ValidationError> {
        auth::validate_registration(&self.state.users, &form)?;
        let user = form.into_user();
        self.dispatch(Action::Register(user.clone())).await;
        self.dispatch(Action::Login(user.clone())).await;
        Ok(user)
    }

    /// Validate an edited profile, then commit it.
    pub async fn update_profile(&mut self, updated: User) -> Result<(), ValidationError> {
        auth::validate_profile_edit(&self.state.users, &updated)?;
        self.dispatch(Action::UpdateUser(updated)).await;
        Ok(())
    }

    /// Sign out and return to the feed.
    pub async fn logout(&mut self) {
        self.dispatch(Action::Logout).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_login_with_username_or_email() {
        let mut store = AppStore::in_memory();

        let user = store.login("creator_cat", "password123").await.unwrap();
        assert_eq!(user.id, "user1");

        store.logout().await;
        let user = store.login("dog@example.com", "password123").await.unwrap();
        assert_eq!(user.id, "user2");
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let mut store = AppStore::in_memory();

        let err = store.login("creator_cat", "wrong").await.unwrap_err();
        assert_matches!(err, ValidationError::InvalidCredentials);
        assert!(store.state().current_user.is_none());
    }

    #[tokio::test]
    async fn test_register_signs_in_the_new_user() {
        let mut store = AppStore::in_memory();

        let form = RegistrationForm {
            username: "newbie_wolf".into(),
            email: "wolf@example.com".into(),
            password: "howl-at-dawn".into(),
            display_name: "Newbie Wolf".into(),
            agreed_to_terms: true,
        };
        let user = store.register(form).await.unwrap();

        assert_eq!(store.state().current_user_id(), Some(user.id.as_str()));
        assert!(store.state().user(&user.id).is_some());
    }

    #[tokio::test]
    async fn test_rejected_registration_leaves_state_identical() {
        let mut store = AppStore::in_memory();
        let before = store.state().clone();

        let form = RegistrationForm {
            username: "creator_cat".into(), // taken in seed data
            email: "new@example.com".into(),
            password: "long-enough".into(),
            display_name: "Copy Cat".into(),
            agreed_to_terms: true,
        };
        let err = store.register(form).await.unwrap_err();

        assert_matches!(err, ValidationError::UsernameTaken);
        assert_eq!(store.state(), &before);
    }

    #[tokio::test]
    async fn test_update_profile_rejects_taken_username() {
        let mut store = AppStore::in_memory();
        store.login("creator_cat", "password123").await.unwrap();

        let mut edited = store.state().user("user1").cloned().unwrap();
        edited.username = "dance_doggo".into();

        let err = store.update_profile(edited).await.unwrap_err();
        assert_matches!(err, ValidationError::UsernameTaken);
        assert_eq!(store.state().user("user1").unwrap().username, "creator_cat");
    }
}
