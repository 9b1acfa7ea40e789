use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::RequireAuth;
use crate::hooks::use_stores;
use crate::state::FavoritesState;
use crate::views::{self, FavoriteSort};
use payloads::FavoriteRecipe;

#[function_component]
pub fn FavoritesPage() -> Html {
    html! {
        <RequireAuth>
            <FavoritesList />
        </RequireAuth>
    }
}

#[function_component]
fn FavoritesList() -> Html {
    let stores = use_stores();
    let (state, _) = use_store::<FavoritesState>();
    let term = use_state(String::new);
    let sort = use_state(FavoriteSort::default);
    let grouped = use_state(|| false);

    {
        let recipes = stores.recipes.clone();
        use_effect_with((), move |_| {
            yew::platform::spawn_local(async move {
                recipes.fetch_favorites().await;
            });
        });
    }

    let on_term = {
        let term = term.clone();
        Callback::from(move |e: InputEvent| {
            term.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            sort.set(
                match e.target_unchecked_into::<HtmlSelectElement>().value().as_str() {
                    "name" => FavoriteSort::Name,
                    "category" => FavoriteSort::Category,
                    _ => FavoriteSort::Date,
                },
            );
        })
    };

    let on_group = {
        let grouped = grouped.clone();
        Callback::from(move |_: MouseEvent| grouped.set(!*grouped))
    };

    let on_clear = {
        let recipes = stores.recipes.clone();
        Callback::from(move |_: MouseEvent| {
            let recipes = recipes.clone();
            yew::platform::spawn_local(async move {
                recipes.clear_all_favorites().await;
            });
        })
    };

    let shown = views::filter_and_sort_favorites(state.list(), &term, *sort);

    let render_list = |favorites: &[FavoriteRecipe]| {
        html! {
            <ul class="divide-y divide-gray-200 dark:divide-gray-700">
                {for favorites.iter().map(|f| html! {
                    <FavoriteRow key={f.recipe_id.to_string()} favorite={f.clone()} />
                })}
            </ul>
        }
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"My favorites"}</h1>
                if !state.list().is_empty() {
                    <button onclick={on_clear} class="text-sm text-red-600 underline">
                        {"Clear all"}
                    </button>
                }
            </div>
            <div class="flex items-center space-x-3">
                <input
                    type="search"
                    value={(*term).clone()}
                    oninput={on_term}
                    placeholder="Search favorites"
                    class="flex-1 px-3 py-2 rounded-md border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800"
                />
                <select onchange={on_sort} class="px-3 py-2 rounded-md border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 text-sm">
                    <option value="date" selected={*sort == FavoriteSort::Date}>{"Recently added"}</option>
                    <option value="name" selected={*sort == FavoriteSort::Name}>{"Name"}</option>
                    <option value="category" selected={*sort == FavoriteSort::Category}>{"Category"}</option>
                </select>
                <button onclick={on_group} class="text-sm underline">
                    {if *grouped { "Ungroup" } else { "Group by category" }}
                </button>
            </div>
            if state.is_loading() && state.list().is_empty() {
                <p class="text-gray-600 dark:text-gray-400">{"Loading favorites..."}</p>
            } else if shown.is_empty() {
                <p class="text-gray-600 dark:text-gray-400">
                    {"No favorites yet. "}
                    <Link<Route> to={Route::Home} classes="underline">{"Find a recipe"}</Link<Route>>
                </p>
            } else if *grouped {
                {for views::group_by_category(&shown).into_iter().map(|(category, favorites)| html! {
                    <section key={category.clone()} class="space-y-2">
                        <h2 class="text-lg font-semibold">{format!("{category} ({})", favorites.len())}</h2>
                        {render_list(&favorites)}
                    </section>
                })}
            } else {
                {render_list(&shown)}
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FavoriteRowProps {
    favorite: FavoriteRecipe,
}

#[function_component]
fn FavoriteRow(props: &FavoriteRowProps) -> Html {
    let stores = use_stores();
    let favorite = &props.favorite;

    let on_remove = {
        let recipes = stores.recipes.clone();
        let recipe_id = favorite.recipe_id.clone();
        Callback::from(move |_: MouseEvent| {
            let recipes = recipes.clone();
            let recipe_id = recipe_id.clone();
            yew::platform::spawn_local(async move {
                recipes.remove_from_favorites(&recipe_id).await;
            });
        })
    };

    html! {
        <li class="flex items-center justify-between py-3">
            <Link<Route> to={Route::Recipe { id: favorite.recipe_id.to_string() }} classes="flex items-center space-x-3">
                <img src={favorite.recipe_image.clone()} alt={favorite.recipe_name.clone()} class="w-12 h-12 rounded object-cover" />
                <div>
                    <p class="font-medium">{&favorite.recipe_name}</p>
                    <p class="text-sm text-gray-500">
                        {format!("{} · added {}", favorite.category, favorite.added_at.strftime("%B %-d, %Y"))}
                    </p>
                </div>
            </Link<Route>>
            <button onclick={on_remove} class="text-sm text-red-600 underline">{"Remove"}</button>
        </li>
    }
}
