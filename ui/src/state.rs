use payloads::{
    Category, FavoriteRecipe, Identity, Recipe, RecipeDetails, RecipeId,
    UserProfile,
};
use std::collections::HashMap;
use std::hash::Hash;
use yewdux::prelude::*;

/// Distinguishes "never fetched" from "fetched and empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotFetched
    }
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}

/// Sequence number handed out when a request for a slot is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// One piece of server-derived state with its own loading flag.
///
/// Every request takes a ticket from [`Slot::begin`]. Only the holder of the
/// most recent ticket may write the data or clear the loading flag, so a
/// slow response can never overwrite a newer one. Local writes
/// ([`Slot::set`], [`Slot::update`], [`Slot::reset`]) supersede every
/// outstanding ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T> {
    data: FetchState<T>,
    is_loading: bool,
    latest: u64,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            data: FetchState::NotFetched,
            is_loading: false,
            latest: 0,
        }
    }
}

impl<T> Slot<T> {
    pub fn data(&self) -> &FetchState<T> {
        &self.data
    }

    pub fn get(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        self.is_loading = true;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Store the response for `ticket`. Returns false, leaving the slot
    /// untouched, if a newer request has been issued since.
    pub fn resolve(&mut self, ticket: RequestTicket, data: T) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.data = FetchState::Fetched(data);
        self.is_loading = false;
        true
    }

    /// Record a failed request. Prior data is kept.
    pub fn fail(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.is_loading = false;
        true
    }

    pub fn set(&mut self, data: T) {
        self.supersede();
        self.data = FetchState::Fetched(data);
    }

    pub fn update(&mut self, f: impl FnOnce(&mut T))
    where
        T: Default,
    {
        self.supersede();
        match &mut self.data {
            FetchState::Fetched(data) => f(data),
            FetchState::NotFetched => {
                let mut data = T::default();
                f(&mut data);
                self.data = FetchState::Fetched(data);
            }
        }
    }

    pub fn reset(&mut self) {
        self.supersede();
        self.data = FetchState::NotFetched;
    }

    fn supersede(&mut self) {
        self.latest += 1;
        self.is_loading = false;
    }
}

impl<K: Eq + Hash, V> Slot<HashMap<K, V>> {
    /// Like [`Slot::resolve`], but merges the entries into what is already
    /// held instead of replacing it.
    pub fn merge(
        &mut self,
        ticket: RequestTicket,
        entries: HashMap<K, V>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match &mut self.data {
            FetchState::Fetched(existing) => existing.extend(entries),
            FetchState::NotFetched => {
                self.data = FetchState::Fetched(entries)
            }
        }
        self.is_loading = false;
        true
    }
}

/// A map of slots fenced per key: requests for different keys never
/// supersede each other.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedSlot<K: Eq + Hash, V> {
    entries: HashMap<K, V>,
    in_flight: HashMap<K, u64>,
    issued: u64,
}

impl<K: Eq + Hash, V> Default for KeyedSlot<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            in_flight: HashMap::new(),
            issued: 0,
        }
    }
}

impl<K: Eq + Hash, V> KeyedSlot<K, V> {
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn entries(&self) -> &HashMap<K, V> {
        &self.entries
    }

    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn is_loading_key(&self, key: &K) -> bool {
        self.in_flight.contains_key(key)
    }

    pub fn begin(&mut self, key: K) -> RequestTicket {
        self.issued += 1;
        self.in_flight.insert(key, self.issued);
        RequestTicket(self.issued)
    }

    pub fn resolve(&mut self, key: K, ticket: RequestTicket, value: V) -> bool {
        if self.in_flight.get(&key) != Some(&ticket.0) {
            return false;
        }
        self.in_flight.remove(&key);
        self.entries.insert(key, value);
        true
    }

    pub fn fail(&mut self, key: &K, ticket: RequestTicket) -> bool {
        if self.in_flight.get(key) != Some(&ticket.0) {
            return false;
        }
        self.in_flight.remove(key);
        true
    }}

/// Signed-in user (managed by `SessionStore`).
#[derive(Clone, PartialEq, Store)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    /// A session check, login or registration is in flight.
    pub pending: bool,
    /// The client finished its initial mount and has read local storage.
    pub mounted: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            pending: true,
            mounted: false,
        }
    }
}

impl SessionState {
    pub fn has_identity(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.pending || !self.mounted
    }

    /// The profile joined with the favorites collection.
    pub fn identity(&self, favorites: &FavoritesState) -> Option<Identity> {
        self.user.as_ref().map(|profile| Identity {
            profile: profile.clone(),
            favorite_recipes: favorites.list().to_vec(),
        })
    }
}

/// Recipe catalog slots (managed by `RecipeStore`).
#[derive(Default, Clone, PartialEq, Store)]
pub struct RecipeState {
    pub categories: Slot<Vec<Category>>,
    pub recipes_by_category: KeyedSlot<String, Vec<Recipe>>,
    pub search_term: Option<String>,
    pub search_results: Slot<Vec<Recipe>>,
    pub selected_recipe: Slot<RecipeDetails>,
    pub random_recipe: Slot<RecipeDetails>,
    pub featured: Slot<HashMap<String, Vec<Recipe>>>,
}

/// The user's favorites. This is the only copy held by the client; the
/// profile view joins it on read.
#[derive(Default, Clone, PartialEq, Store)]
pub struct FavoritesState {
    pub favorites: Slot<Vec<FavoriteRecipe>>,
}

impl FavoritesState {
    pub fn list(&self) -> &[FavoriteRecipe] {
        self.favorites.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_favorite(&self, recipe_id: &RecipeId) -> bool {
        self.list().iter().any(|f| &f.recipe_id == recipe_id)
    }

    pub fn is_loading(&self) -> bool {
        self.favorites.is_loading()
    }

    /// Put `favorite` first, dropping any older entry for the same recipe.
    pub fn insert(&mut self, favorite: FavoriteRecipe) {
        self.favorites.update(|list| {
            list.retain(|f| f.recipe_id != favorite.recipe_id);
            list.insert(0, favorite);
        });
    }

    pub fn remove(&mut self, recipe_id: &RecipeId) {
        self.favorites
            .update(|list| list.retain(|f| &f.recipe_id != recipe_id));
    }
}

/// Mutate a store and hand back a value computed during the mutation.
pub(crate) fn reduce_with<S, R>(
    dispatch: &Dispatch<S>,
    f: impl FnOnce(&mut S) -> R,
) -> R
where
    S: Store + Clone,
{
    let mut state = (*dispatch.get()).clone();
    let result = f(&mut state);
    dispatch.set(state);
    result
}
