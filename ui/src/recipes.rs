//! Recipe catalog slots and the favorites mutation protocol.

use crate::notifications::Notifier;
use crate::session::SessionStore;
use crate::state::{
    FavoritesState, RecipeState, RequestTicket, Slot, reduce_with,
};
use jiff::Timestamp;
use payloads::{
    APIClient, ClientError, FavoriteRecipe, Recipe, RecipeId, requests,
};
use std::future::Future;
use std::rc::Rc;
use yewdux::prelude::*;

const NO_SEARCH_RESULTS: &str = "No recipes found for your search";

#[derive(Clone)]
pub struct RecipeStore {
    client: APIClient,
    state: Dispatch<RecipeState>,
    favorites: Dispatch<FavoritesState>,
    session: SessionStore,
    notifier: Notifier,
}

impl RecipeStore {
    pub fn new(
        cx: &yewdux::Context,
        client: APIClient,
        session: SessionStore,
        notifier: Notifier,
    ) -> Self {
        Self {
            client,
            state: Dispatch::new(cx),
            favorites: Dispatch::new(cx),
            session,
            notifier,
        }
    }

    pub fn state(&self) -> Rc<RecipeState> {
        self.state.get()
    }

    pub fn favorites(&self) -> Rc<FavoritesState> {
        self.favorites.get()
    }

    pub fn is_favorite(&self, recipe_id: &RecipeId) -> bool {
        self.favorites.get().is_favorite(recipe_id)
    }

    /// Issue `request` for the slot returned by `slot`, writing the result
    /// only if no newer request was issued in the meantime.
    async fn load_slot<T>(
        &self,
        slot: fn(&mut RecipeState) -> &mut Slot<T>,
        request: impl Future<Output = Result<T, ClientError>>,
        failure: &str,
    ) where
        T: Clone + 'static,
    {
        let ticket = reduce_with(&self.state, |state| slot(state).begin());
        match request.await {
            Ok(data) => {
                let applied = reduce_with(&self.state, move |state| {
                    slot(state).resolve(ticket, data)
                });
                if !applied {
                    tracing::debug!("discarding stale response");
                }
            }
            Err(e) => {
                tracing::error!("{failure}: {e}");
                let current = reduce_with(&self.state, move |state| {
                    slot(state).fail(ticket)
                });
                if current {
                    self.notifier.error(failure);
                }
            }
        }
    }

    pub async fn fetch_categories(&self) {
        self.load_slot(
            |state| &mut state.categories,
            self.client.get_categories(),
            "Failed to fetch categories",
        )
        .await;
    }

    /// Fetch one category's recipes, merged into the per-category map.
    pub async fn fetch_recipes_by_category(&self, category: &str) {
        let key = category.to_string();
        let ticket = reduce_with(&self.state, {
            let key = key.clone();
            move |state| state.recipes_by_category.begin(key)
        });

        match self.client.get_recipes_by_category(category).await {
            Ok(recipes) => {
                let applied = reduce_with(&self.state, move |state| {
                    state.recipes_by_category.resolve(key, ticket, recipes)
                });
                if !applied {
                    tracing::debug!(category, "discarding stale response");
                }
            }
            Err(e) => {
                tracing::error!("Recipes by category fetch error: {e}");
                let current = reduce_with(&self.state, move |state| {
                    state.recipes_by_category.fail(&key, ticket)
                });
                if current {
                    self.notifier
                        .error(format!("Failed to fetch {category} recipes"));
                }
            }
        }
    }

    /// Search the catalog. Zero matches, whether reported as an empty list
    /// or as a 404, leave the results empty rather than failed.
    pub async fn search_recipes(&self, term: &str) {
        let term = term.trim().to_string();
        let ticket = reduce_with(&self.state, {
            let term = term.clone();
            move |state| {
                state.search_term = Some(term);
                state.search_results.begin()
            }
        });

        match self.client.search_recipes(&term).await {
            Ok(recipes) => {
                let empty = recipes.is_empty();
                if self.resolve_search(ticket, recipes) && empty {
                    self.notifier.info(NO_SEARCH_RESULTS);
                }
            }
            Err(e) if e.is_not_found() => {
                if self.resolve_search(ticket, Vec::new()) {
                    self.notifier.info(NO_SEARCH_RESULTS);
                }
            }
            Err(e) => {
                tracing::error!("Search error: {e}");
                let current = reduce_with(&self.state, move |state| {
                    state.search_results.fail(ticket)
                });
                if current {
                    self.notifier.error("Search failed");
                }
            }
        }
    }

    fn resolve_search(&self, ticket: RequestTicket, recipes: Vec<Recipe>) -> bool {
        let applied = reduce_with(&self.state, move |state| {
            state.search_results.resolve(ticket, recipes)
        });
        if !applied {
            tracing::debug!("discarding stale search response");
        }
        applied
    }

    /// Load the full recipe into the single "currently viewed" slot.
    pub async fn fetch_recipe_details(&self, recipe_id: &RecipeId) {
        self.load_slot(
            |state| &mut state.selected_recipe,
            self.client.get_recipe_details(recipe_id),
            "Failed to fetch recipe details",
        )
        .await;
    }

    pub async fn fetch_random_recipe(&self) {
        self.load_slot(
            |state| &mut state.random_recipe,
            self.client.get_random_recipe(),
            "Failed to fetch random recipe",
        )
        .await;
    }

    pub async fn fetch_featured_recipes(&self) {
        let ticket = reduce_with(&self.state, |state| state.featured.begin());

        match self.client.get_featured_recipes().await {
            Ok(featured) => {
                let applied = reduce_with(&self.state, move |state| {
                    state.featured.merge(ticket, featured)
                });
                if !applied {
                    tracing::debug!("discarding stale featured response");
                }
            }
            Err(e) => {
                tracing::error!("Featured recipes fetch error: {e}");
                let current = reduce_with(&self.state, move |state| {
                    state.featured.fail(ticket)
                });
                if current {
                    self.notifier.error("Failed to fetch featured recipes");
                }
            }
        }
    }

    /// Replace the local favorites with the server's list.
    pub async fn fetch_favorites(&self) {
        if !self.session.has_identity() {
            return;
        }

        let ticket =
            reduce_with(&self.favorites, |state| state.favorites.begin());

        match self.client.get_favorites().await {
            Ok(favorites) => {
                let applied = reduce_with(&self.favorites, move |state| {
                    state.favorites.resolve(ticket, favorites)
                });
                if applied {
                    self.session.persist();
                } else {
                    tracing::debug!("discarding stale favorites response");
                }
            }
            Err(e) => {
                tracing::error!("Favorites fetch error: {e}");
                reduce_with(&self.favorites, move |state| {
                    state.favorites.fail(ticket)
                });
            }
        }
    }

    /// Accepts a catalog entry or a full recipe; a missing category is
    /// recorded as "Unknown".
    pub async fn add_to_favorites(
        &self,
        recipe: impl Into<requests::AddFavorite>,
    ) {
        if !self.session.has_identity() {
            self.notifier.error("Please login to add favorites");
            return;
        }

        let details: requests::AddFavorite = recipe.into();
        if let Err(e) = self.client.add_to_favorites(&details).await {
            tracing::warn!(recipe = %details.recipe_id, "add favorite failed: {e}");
            self.notifier
                .error(e.user_message("Failed to add to favorites"));
            return;
        }
        // The session may have ended while the request was in flight.
        if !self.session.has_identity() {
            return;
        }

        let favorite = FavoriteRecipe {
            recipe_id: details.recipe_id,
            recipe_name: details.recipe_name,
            recipe_image: details.recipe_image,
            category: details.category,
            added_at: Timestamp::now(),
        };
        self.favorites
            .reduce_mut(move |state| state.insert(favorite));
        self.session.persist();
        self.notifier.success("Added to favorites!");
    }

    pub async fn remove_from_favorites(&self, recipe_id: &RecipeId) {
        if !self.session.has_identity() {
            return;
        }

        if let Err(e) = self.client.remove_from_favorites(recipe_id).await {
            tracing::warn!(recipe = %recipe_id, "remove favorite failed: {e}");
            self.notifier
                .error(e.user_message("Failed to remove from favorites"));
            return;
        }
        if !self.session.has_identity() {
            return;
        }

        let recipe_id = recipe_id.clone();
        self.favorites
            .reduce_mut(move |state| state.remove(&recipe_id));
        self.session.persist();
        self.notifier.success("Removed from favorites");
    }

    pub async fn clear_all_favorites(&self) {
        if !self.session.has_identity() {
            return;
        }

        if let Err(e) = self.client.clear_all_favorites().await {
            tracing::warn!("clear favorites failed: {e}");
            self.notifier
                .error(e.user_message("Failed to clear favorites"));
            return;
        }
        if !self.session.has_identity() {
            return;
        }

        self.favorites
            .reduce_mut(|state| state.favorites.set(Vec::new()));
        self.session.persist();
        self.notifier.success("All favorites cleared");
    }
}
