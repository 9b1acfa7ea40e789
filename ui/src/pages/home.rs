use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::RecipeCard;
use crate::hooks::use_stores;
use crate::state::RecipeState;
use crate::views::{self, SearchFilter};

const SELECT_CLASS: &str = "px-3 py-2 rounded-md border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 text-sm";

fn selected(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

#[function_component]
pub fn HomePage() -> Html {
    let stores = use_stores();
    let (state, _) = use_store::<RecipeState>();
    let query = use_state(String::new);
    let category_term = use_state(String::new);
    let filter = use_state(SearchFilter::default);

    {
        let recipes = stores.recipes.clone();
        use_effect_with((), move |_| {
            yew::platform::spawn_local(async move {
                if !recipes.state().categories.data().is_fetched() {
                    recipes.fetch_categories().await;
                }
                recipes.fetch_featured_recipes().await;
            });
        });
    }

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            query.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_search = {
        let recipes = stores.recipes.clone();
        let query = query.clone();
        let filter = filter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if query.trim().is_empty() {
                return;
            }
            filter.set(SearchFilter::default());
            let recipes = recipes.clone();
            let term = (*query).clone();
            yew::platform::spawn_local(async move {
                recipes.search_recipes(&term).await;
            });
        })
    };

    let on_category_facet = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            filter.set(SearchFilter {
                category: selected(value),
                ..(*filter).clone()
            });
        })
    };

    let on_area_facet = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            filter.set(SearchFilter {
                area: selected(value),
                ..(*filter).clone()
            });
        })
    };

    let on_category_term = {
        let category_term = category_term.clone();
        Callback::from(move |e: InputEvent| {
            category_term
                .set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_random = {
        let recipes = stores.recipes.clone();
        Callback::from(move |_: MouseEvent| {
            let recipes = recipes.clone();
            yew::platform::spawn_local(async move {
                recipes.fetch_random_recipe().await;
            });
        })
    };

    let search_section = match state.search_results.get() {
        _ if state.search_results.is_loading() => html! {
            <p class="text-gray-600 dark:text-gray-400">{"Searching..."}</p>
        },
        Some(results) if !results.is_empty() => {
            let shown = views::filter_search_results(results, &filter);
            html! {
                <div class="space-y-4">
                    <div class="flex space-x-3">
                        <select class={SELECT_CLASS} onchange={on_category_facet}>
                            <option value="" selected={filter.category.is_none()}>{"All categories"}</option>
                            {for views::unique_categories(results).into_iter().map(|c| html! {
                                <option selected={filter.category.as_deref() == Some(c.as_str())} value={c.clone()}>{c}</option>
                            })}
                        </select>
                        <select class={SELECT_CLASS} onchange={on_area_facet}>
                            <option value="" selected={filter.area.is_none()}>{"All areas"}</option>
                            {for views::unique_areas(results).into_iter().map(|a| html! {
                                <option selected={filter.area.as_deref() == Some(a.as_str())} value={a.clone()}>{a}</option>
                            })}
                        </select>
                    </div>
                    <p class="text-sm text-gray-500">{format!("{} of {} recipes", shown.len(), results.len())}</p>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        {for shown.into_iter().map(|r| html! {
                            <RecipeCard key={r.id.to_string()} recipe={r.clone()} />
                        })}
                    </div>
                </div>
            }
        }
        _ => html! {},
    };

    let mut featured: Vec<_> = state
        .featured
        .get()
        .map(|f| f.iter().collect())
        .unwrap_or_default();
    featured.sort_by(|a, b| a.0.cmp(b.0));

    let categories = state
        .categories
        .get()
        .map(|c| views::filter_categories(c, &category_term))
        .unwrap_or_default();

    html! {
        <div class="space-y-10">
            <section class="space-y-4">
                <form onsubmit={on_search} class="flex space-x-2">
                    <input
                        type="search"
                        value={(*query).clone()}
                        oninput={on_query_input}
                        placeholder="Search recipes"
                        class="flex-1 px-3 py-2 rounded-md border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800"
                    />
                    <button type="submit" class="px-4 py-2 rounded-md bg-gray-900 text-white dark:bg-gray-100 dark:text-gray-900">
                        {"Search"}
                    </button>
                </form>
                {search_section}
            </section>

            <section class="space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-xl font-semibold">{"Feeling lucky?"}</h2>
                    <button onclick={on_random} disabled={state.random_recipe.is_loading()} class="text-sm underline">
                        {"Surprise me"}
                    </button>
                </div>
                if let Some(recipe) = state.random_recipe.get() {
                    <Link<Route> to={Route::Recipe { id: recipe.id.to_string() }} classes="flex items-center space-x-4">
                        <img src={recipe.image.clone()} alt={recipe.name.clone()} class="w-24 h-24 rounded object-cover" />
                        <div>
                            <p class="font-medium">{&recipe.name}</p>
                            <p class="text-sm text-gray-500">{format!("{} · {}", recipe.category, recipe.area)}</p>
                        </div>
                    </Link<Route>>
                }
            </section>

            {for featured.into_iter().map(|(category, recipes)| html! {
                <section key={category.clone()} class="space-y-4">
                    <h2 class="text-xl font-semibold">{category}</h2>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        {for recipes.iter().map(|r| html! {
                            <RecipeCard key={r.id.to_string()} recipe={r.clone()} />
                        })}
                    </div>
                </section>
            })}

            <section class="space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-xl font-semibold">{"Categories"}</h2>
                    <input
                        type="search"
                        value={(*category_term).clone()}
                        oninput={on_category_term}
                        placeholder="Filter categories"
                        class="px-3 py-1 rounded-md border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 text-sm"
                    />
                </div>
                if state.categories.is_loading() && !state.categories.data().is_fetched() {
                    <p class="text-gray-600 dark:text-gray-400">{"Loading categories..."}</p>
                }
                <div class="grid grid-cols-2 md:grid-cols-6 gap-4">
                    {for categories.into_iter().map(|c| html! {
                        <Link<Route> key={c.id.clone()} to={Route::Category { name: c.name.clone() }} classes="text-center space-y-1">
                            <img src={c.thumbnail.clone()} alt={c.name.clone()} class="w-full rounded" />
                            <p class="text-sm font-medium">{&c.name}</p>
                        </Link<Route>>
                    })}
                </div>
            </section>
        </div>
    }
}
