use payloads::Recipe;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::hooks::use_stores;
use crate::state::{FavoritesState, SessionState};

#[derive(Properties, PartialEq)]
pub struct RecipeCardProps {
    pub recipe: Recipe,
}

/// Thumbnail card linking to the recipe, with a favorite toggle for
/// signed-in users.
#[function_component]
pub fn RecipeCard(props: &RecipeCardProps) -> Html {
    let stores = use_stores();
    let (session, _) = use_store::<SessionState>();
    let (favorites, _) = use_store::<FavoritesState>();
    let recipe = &props.recipe;
    let is_favorite = favorites.is_favorite(&recipe.id);

    let on_toggle = {
        let recipes = stores.recipes.clone();
        let recipe = recipe.clone();
        Callback::from(move |_: MouseEvent| {
            let recipes = recipes.clone();
            let recipe = recipe.clone();
            yew::platform::spawn_local(async move {
                if is_favorite {
                    recipes.remove_from_favorites(&recipe.id).await;
                } else {
                    recipes.add_to_favorites(&recipe).await;
                }
            });
        })
    };

    html! {
        <div class="rounded-lg border border-gray-200 dark:border-gray-700 overflow-hidden">
            <Link<Route> to={Route::Recipe { id: recipe.id.to_string() }}>
                <img src={recipe.thumbnail.clone()} alt={recipe.name.clone()} class="w-full h-40 object-cover" />
            </Link<Route>>
            <div class="p-3 flex items-start justify-between space-x-2">
                <div class="min-w-0">
                    <p class="text-sm font-medium truncate">{&recipe.name}</p>
                    <p class="text-xs text-gray-500 dark:text-gray-400">
                        {[recipe.category.as_deref(), recipe.area.as_deref()]
                            .into_iter()
                            .flatten()
                            .collect::<Vec<_>>()
                            .join(" · ")}
                    </p>
                </div>
                if session.is_authenticated() {
                    <button
                        onclick={on_toggle}
                        title={if is_favorite { "Remove from favorites" } else { "Add to favorites" }}
                        class="text-lg leading-none"
                    >
                        {if is_favorite { "♥" } else { "♡" }}
                    </button>
                }
            </div>
        </div>
    }
}

