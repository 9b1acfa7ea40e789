use payloads::RecipeId;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_stores;
use crate::state::{FavoritesState, RecipeState, SessionState};

#[derive(Properties, PartialEq)]
pub struct RecipePageProps {
    pub id: String,
}

#[function_component]
pub fn RecipePage(props: &RecipePageProps) -> Html {
    let stores = use_stores();
    let (state, _) = use_store::<RecipeState>();
    let (session, _) = use_store::<SessionState>();
    let (favorites, _) = use_store::<FavoritesState>();
    let recipe_id = RecipeId::from(props.id.as_str());

    {
        let recipes = stores.recipes.clone();
        use_effect_with(recipe_id.clone(), move |id| {
            let id = id.clone();
            yew::platform::spawn_local(async move {
                recipes.fetch_recipe_details(&id).await;
            });
        });
    }

    // The slot may still hold the previously viewed recipe.
    let Some(recipe) =
        state.selected_recipe.get().filter(|r| r.id == recipe_id)
    else {
        return if state.selected_recipe.is_loading() {
            html! { <p class="text-gray-600 dark:text-gray-400">{"Loading recipe..."}</p> }
        } else {
            html! { <p class="text-gray-600 dark:text-gray-400">{"Recipe not available."}</p> }
        };
    };

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
        <article class="space-y-6">
            <div class="flex items-start justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{&recipe.name}</h1>
                    <p class="text-gray-500">{format!("{} · {}", recipe.category, recipe.area)}</p>
                </div>
                if session.is_authenticated() {
                    <button onclick={on_toggle} class="px-3 py-1 rounded-md border text-sm">
                        {if is_favorite { "♥ Saved" } else { "♡ Save" }}
                    </button>
                }
            </div>
            <img src={recipe.image.clone()} alt={recipe.name.clone()} class="w-full max-w-xl rounded-lg" />
            if !recipe.tags.is_empty() {
                <p class="text-sm text-gray-500">{recipe.tags.join(", ")}</p>
            }
            <section>
                <h2 class="text-xl font-semibold mb-2">{"Ingredients"}</h2>
                <ul class="list-disc pl-6">
                    {for recipe.ingredients.iter().map(|i| html! {
                        <li>{format!("{} {}", i.measurement, i.name).trim().to_string()}</li>
                    })}
                </ul>
            </section>
            <section>
                <h2 class="text-xl font-semibold mb-2">{"Instructions"}</h2>
                {for recipe.instructions.lines().filter(|l| !l.trim().is_empty()).map(|line| html! {
                    <p class="mb-2">{line}</p>
                })}
            </section>
            <div class="flex space-x-4 text-sm underline">
                if let Some(url) = &recipe.youtube_url {
                    <a href={url.clone()} target="_blank" rel="noopener">{"Watch on YouTube"}</a>
                }
                if let Some(url) = &recipe.source_url {
                    <a href={url.clone()} target="_blank" rel="noopener">{"Original source"}</a>
                }
            </div>
        </article>
    }
}
