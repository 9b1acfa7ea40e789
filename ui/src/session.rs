//! Signed-in user: login, registration, logout and the persisted session.

use crate::notifications::Notifier;
use crate::state::{FavoritesState, SessionState};
use jiff::Timestamp;
use payloads::{
    APIClient, FavoriteRecipe, Identity, UserProfile, requests, responses,
    storage::{TOKEN_KEY, USER_KEY},
};
use std::rc::Rc;
use yewdux::prelude::*;

/// Fields to overwrite on the current identity. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub last_login: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
    /// Replaces the favorites collection.
    pub favorite_recipes: Option<Vec<FavoriteRecipe>>,
}

#[derive(Clone)]
pub struct SessionStore {
    client: APIClient,
    state: Dispatch<SessionState>,
    favorites: Dispatch<FavoritesState>,
    notifier: Notifier,
}

impl SessionStore {
    pub fn new(
        cx: &yewdux::Context,
        client: APIClient,
        notifier: Notifier,
    ) -> Self {
        Self {
            client,
            state: Dispatch::new(cx),
            favorites: Dispatch::new(cx),
            notifier,
        }
    }

    pub fn state(&self) -> Rc<SessionState> {
        self.state.get()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.get().user.clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.state.get().identity(&self.favorites.get())
    }

    pub fn has_identity(&self) -> bool {
        self.state.get().has_identity()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.get().is_loading()
    }

    /// Called once the client environment has mounted.
    pub fn mark_mounted(&self) {
        self.state.reduce_mut(|state| state.mounted = true);
    }

    /// Check a stored token against the API on startup.
    pub async fn restore_session(&self) {
        if self.client.storage().token().is_none() {
            tracing::debug!("no stored session");
            self.set_pending(false);
            return;
        }

        match self.client.get_profile().await {
            Ok(identity) => {
                tracing::debug!(user = %identity.id, "session restored");
                self.adopt(identity);
            }
            Err(e) => {
                tracing::warn!("Auth check failed: {e}");
                self.client.storage().purge_session();
                clear_session(&self.state, &self.favorites);
            }
        }
        self.set_pending(false);
    }

    pub async fn login(&self, email: &str, password: &str) -> bool {
        let credentials = requests::LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.set_pending(true);
        let result = self.client.login(&credentials).await;
        self.set_pending(false);

        match result {
            Ok(session) => {
                self.establish(session);
                self.notifier.success("Welcome back!");
                true
            }
            Err(e) => {
                tracing::warn!("Login failed: {e}");
                self.notifier.error(e.user_message("Login failed"));
                false
            }
        }
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> bool {
        let details = requests::CreateAccount {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        if let Some(message) =
            requests::validate_registration(&details).error_message()
        {
            self.notifier.error(message);
            return false;
        }

        self.set_pending(true);
        let result = self.client.register(&details).await;
        self.set_pending(false);

        match result {
            Ok(session) => {
                self.establish(session);
                self.notifier.success("Account created successfully!");
                true
            }
            Err(e) => {
                tracing::warn!("Registration failed: {e}");
                self.notifier.error(e.user_message("Registration failed"));
                false
            }
        }
    }

    pub fn logout(&self) {
        self.client.storage().purge_session();
        clear_session(&self.state, &self.favorites);
        self.notifier.success("Logged out successfully");
    }

    /// Shallow-merge `patch` into the current identity and persist it.
    /// Does nothing when no one is signed in.
    pub fn update_user(&self, patch: IdentityPatch) {
        if !self.has_identity() {
            return;
        }

        let IdentityPatch {
            name,
            email,
            last_login,
            created_at,
            favorite_recipes,
        } = patch;

        self.state.reduce_mut(move |state| {
            if let Some(user) = state.user.as_mut() {
                if let Some(name) = name {
                    user.name = name;
                }
                if let Some(email) = email {
                    user.email = email;
                }
                if last_login.is_some() {
                    user.last_login = last_login;
                }
                if created_at.is_some() {
                    user.created_at = created_at;
                }
            }
        });
        if let Some(favorites) = favorite_recipes {
            self.favorites
                .reduce_mut(move |state| state.favorites.set(favorites));
        }
        self.persist();
    }

    /// Rename the signed-in user on the server. Only the profile is taken
    /// from the response; the local favorites stay as they are.
    pub async fn update_profile(&self, name: &str) -> bool {
        if !self.has_identity() {
            self.notifier.error("Please login to update your profile");
            return false;
        }

        let details = requests::UpdateProfile {
            name: name.trim().to_string(),
        };
        match self.client.update_profile(&details).await {
            Ok(identity) => {
                let profile = identity.profile;
                self.state
                    .reduce_mut(move |state| state.user = Some(profile));
                self.persist();
                self.notifier.success("Profile updated");
                true
            }
            Err(e) => {
                tracing::warn!("Profile update failed: {e}");
                self.notifier
                    .error(e.user_message("Failed to update profile"));
                false
            }
        }
    }

    /// Write the joined identity under the `user` storage key.
    pub(crate) fn persist(&self) {
        let Some(identity) = self.identity() else {
            return;
        };
        match serde_json::to_string(&identity) {
            Ok(json) => self.client.storage().set(USER_KEY, &json),
            Err(e) => tracing::error!("Failed to serialize identity: {e}"),
        }
    }

    fn establish(&self, session: responses::AuthSession) {
        self.client.storage().set(TOKEN_KEY, &session.token);
        self.adopt(session.user);
    }

    /// Take over a server identity: the profile goes to the session, the
    /// favorites to the favorites collection.
    fn adopt(&self, identity: Identity) {
        let Identity {
            profile,
            favorite_recipes,
        } = identity;
        self.state
            .reduce_mut(move |state| state.user = Some(profile));
        self.favorites
            .reduce_mut(move |state| state.favorites.set(favorite_recipes));
        self.persist();
    }

    fn set_pending(&self, pending: bool) {
        self.state.reduce_mut(move |state| state.pending = pending);
    }
}

/// Drop the in-memory session. Storage is handled by the caller.
pub(crate) fn clear_session(
    session: &Dispatch<SessionState>,
    favorites: &Dispatch<FavoritesState>,
) {
    session.reduce_mut(|state| state.user = None);
    favorites.reduce_mut(|state| state.favorites.reset());
}
