//! Types shared between the recipe client and its remote API, plus the
//! client used to reach that API.

pub mod api_client;
pub mod requests;
pub mod responses;
pub mod storage;

pub use api_client::{APIClient, ClientError};
pub use responses::{
    Category, FavoriteRecipe, Identity, Recipe, RecipeDetails, UserProfile,
};
pub use storage::{MemoryStorage, SessionStorage};

use serde::{Deserialize, Serialize};

/// Identifier of a recipe in the catalog (e.g. `"52772"`).
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for RecipeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct UserId(pub String);

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
