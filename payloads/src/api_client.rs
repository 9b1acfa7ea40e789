use crate::{
    RecipeId, requests,
    responses::{self, FavoriteRecipe, Recipe},
    storage::SessionStorage,
};
use reqwest::{Method, StatusCode, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use std::rc::Rc;

/// An API client for interfacing with the recipe backend.
///
/// Every request carries the stored bearer token, if any. A 401 from any
/// endpoint removes the stored session and runs the unauthorized handler
/// before the error is returned to the caller.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    storage: Rc<dyn SessionStorage>,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl APIClient {
    pub fn new(
        address: impl Into<String>,
        storage: Rc<dyn SessionStorage>,
    ) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
            storage,
            on_unauthorized: None,
        }
    }

    /// Register the action run after a 401 has purged the stored session.
    pub fn on_unauthorized(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(handler));
        self
    }

    pub fn storage(&self) -> &Rc<dyn SessionStorage> {
        &self.storage
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let base = format!("{}/api/", self.address.trim_end_matches('/'));
        let mut url = Url::parse(&base).map_err(|e| {
            ClientError::InvalidAddress(format!("{}: {e}", self.address))
        })?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidAddress(self.address.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let url = self.format_url(segments)?;
        tracing::debug!(%method, %url, "api request");
        let request = self.inner_client.request(method, url);
        Ok(match self.storage.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!(
                url = %response.url(),
                "request unauthorized, clearing stored session"
            );
            self.storage.purge_session();
            if let Some(handler) = &self.on_unauthorized {
                handler();
            }
        }
        Ok(response)
    }

    async fn empty_get(
        &self,
        segments: &[&str],
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::GET, segments)?).await
    }

    async fn get_with_query(
        &self,
        segments: &[&str],
        query: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::GET, segments)?.query(query))
            .await
    }

    async fn post(
        &self,
        segments: &[&str],
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::POST, segments)?.json(body))
            .await
    }

    async fn empty_post(
        &self,
        segments: &[&str],
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::POST, segments)?).await
    }

    async fn put(
        &self,
        segments: &[&str],
        body: &impl Serialize,
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::PUT, segments)?.json(body))
            .await
    }

    async fn delete(
        &self,
        segments: &[&str],
    ) -> Result<reqwest::Response, ClientError> {
        self.send(self.request(Method::DELETE, segments)?).await
    }
}

/// Auth endpoints
impl APIClient {
    pub async fn register(
        &self,
        details: &requests::CreateAccount,
    ) -> Result<responses::AuthSession, ClientError> {
        let response = self.post(&["auth", "register"], details).await?;
        ok_body(response).await
    }

    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<responses::AuthSession, ClientError> {
        let response = self.post(&["auth", "login"], details).await?;
        ok_body(response).await
    }

    /// Get the profile of the user the stored token belongs to.
    pub async fn get_profile(
        &self,
    ) -> Result<responses::Identity, ClientError> {
        let response = self.empty_get(&["auth", "me"]).await?;
        ok_body::<UserBody>(response).await.map(|body| body.user)
    }

    pub async fn update_profile(
        &self,
        details: &requests::UpdateProfile,
    ) -> Result<responses::Identity, ClientError> {
        let response = self.put(&["auth", "profile"], details).await?;
        ok_body::<UserBody>(response).await.map(|body| body.user)
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post(&["auth", "logout"]).await?;
        ok_empty(response).await
    }
}

/// Recipe catalog endpoints
impl APIClient {
    pub async fn get_categories(
        &self,
    ) -> Result<Vec<responses::Category>, ClientError> {
        let response = self.empty_get(&["recipes", "categories"]).await?;
        ok_body::<CategoriesBody>(response)
            .await
            .map(|body| body.categories)
    }

    pub async fn get_recipes_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Recipe>, ClientError> {
        let response = self
            .empty_get(&["recipes", "by-category", category])
            .await?;
        ok_body::<RecipesBody>(response)
            .await
            .map(RecipesBody::into_recipes)
    }

    /// Search the catalog by name. A body without a recipe list is an
    /// empty result; a 404 is returned as an `APIError` for the caller to
    /// interpret.
    pub async fn search_recipes(
        &self,
        term: &str,
    ) -> Result<Vec<Recipe>, ClientError> {
        let response = self
            .get_with_query(&["recipes", "search"], &[("search", term)])
            .await?;
        ok_body::<RecipesBody>(response)
            .await
            .map(RecipesBody::into_recipes)
    }

    pub async fn get_recipe_details(
        &self,
        recipe_id: &RecipeId,
    ) -> Result<responses::RecipeDetails, ClientError> {
        let response = self
            .empty_get(&["recipes", "details", recipe_id.as_ref()])
            .await?;
        ok_body::<RecipeBody>(response).await.map(|body| body.recipe)
    }

    pub async fn get_random_recipe(
        &self,
    ) -> Result<responses::RecipeDetails, ClientError> {
        let response = self.empty_get(&["recipes", "random"]).await?;
        ok_body::<RecipeBody>(response).await.map(|body| body.recipe)
    }

    /// Featured recipes grouped by category name.
    pub async fn get_featured_recipes(
        &self,
    ) -> Result<HashMap<String, Vec<Recipe>>, ClientError> {
        let response = self.empty_get(&["recipes", "featured"]).await?;
        ok_body::<FeaturedBody>(response)
            .await
            .map(|body| body.featured)
    }
}

/// Favorites and user endpoints
impl APIClient {
    pub async fn get_favorites(
        &self,
    ) -> Result<Vec<FavoriteRecipe>, ClientError> {
        let response = self.empty_get(&["users", "favorites"]).await?;
        ok_body::<FavoritesBody>(response)
            .await
            .map(|body| body.favorites)
    }

    pub async fn add_to_favorites(
        &self,
        details: &requests::AddFavorite,
    ) -> Result<(), ClientError> {
        let response = self.post(&["users", "favorites"], details).await?;
        ok_empty(response).await
    }

    pub async fn remove_from_favorites(
        &self,
        recipe_id: &RecipeId,
    ) -> Result<(), ClientError> {
        let response = self
            .delete(&["users", "favorites", recipe_id.as_ref()])
            .await?;
        ok_empty(response).await
    }

    pub async fn check_favorite_status(
        &self,
        recipe_id: &RecipeId,
    ) -> Result<bool, ClientError> {
        let response = self
            .empty_get(&["users", "favorites", "check", recipe_id.as_ref()])
            .await?;
        ok_body::<responses::FavoriteStatus>(response)
            .await
            .map(|status| status.is_favorite)
    }

    pub async fn get_favorites_by_category(
        &self,
    ) -> Result<HashMap<String, Vec<FavoriteRecipe>>, ClientError> {
        let response = self
            .empty_get(&["users", "favorites", "by-category"])
            .await?;
        ok_body::<FavoritesByCategoryBody>(response)
            .await
            .map(|body| body.favorites_by_category)
    }

    pub async fn clear_all_favorites(&self) -> Result<(), ClientError> {
        let response = self.delete(&["users", "favorites"]).await?;
        ok_empty(response).await
    }

    pub async fn get_user_stats(
        &self,
    ) -> Result<responses::UserStats, ClientError> {
        let response = self.empty_get(&["users", "stats"]).await?;
        ok_body::<StatsBody>(response).await.map(|body| body.stats)
    }
}

/// The API answers either `{ "data": <resource> }` or the bare resource.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(inner) => inner,
        }
    }
}

#[derive(Deserialize)]
struct UserBody {
    user: responses::Identity,
}

#[derive(Deserialize)]
struct CategoriesBody {
    categories: Vec<responses::Category>,
}

#[derive(Deserialize)]
struct RecipesBody {
    #[serde(default)]
    recipes: Option<Vec<Recipe>>,
}

impl RecipesBody {
    fn into_recipes(self) -> Vec<Recipe> {
        self.recipes.unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct RecipeBody {
    recipe: responses::RecipeDetails,
}

#[derive(Deserialize)]
struct FeaturedBody {
    featured: HashMap<String, Vec<Recipe>>,
}

#[derive(Deserialize)]
struct FavoritesBody {
    favorites: Vec<FavoriteRecipe>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FavoritesByCategoryBody {
    #[serde(alias = "favorites")]
    favorites_by_category: HashMap<String, Vec<FavoriteRecipe>>,
}

#[derive(Deserialize)]
struct StatsBody {
    stats: responses::UserStats,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing the server's message
    /// or, failing that, the response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from the server.")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid API address {0}")]
    InvalidAddress(String),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// The server's message if it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::APIError(_, message) if !message.trim().is_empty() => {
                message.clone()
            }
            _ => fallback.to_string(),
        }
    }
}

fn api_error(status: StatusCode, text: String) -> ClientError {
    let message = serde_json::from_str::<responses::ErrorMessage>(&text)
        .map(|body| body.message)
        .unwrap_or(text);
    ClientError::APIError(status, message)
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(api_error(status, text));
    }
    let envelope: Envelope<T> = serde_json::from_str(&text)?;
    Ok(envelope.into_inner())
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status, response.text().await?));
    }
    Ok(())
}
