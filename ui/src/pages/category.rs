use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::RecipeCard;
use crate::hooks::use_stores;
use crate::state::RecipeState;
use crate::views;

#[derive(Properties, PartialEq)]
pub struct CategoryPageProps {
    pub name: String,
}

#[function_component]
pub fn CategoryPage(props: &CategoryPageProps) -> Html {
    let stores = use_stores();
    let (state, _) = use_store::<RecipeState>();
    let term = use_state(String::new);

    {
        let recipes = stores.recipes.clone();
        use_effect_with(props.name.clone(), move |name| {
            let name = name.clone();
            yew::platform::spawn_local(async move {
                recipes.fetch_recipes_by_category(&name).await;
            });
        });
    }

    let on_term = {
        let term = term.clone();
        Callback::from(move |e: InputEvent| {
            term.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let key = props.name.clone();
    let shown = views::category_recipes(&state, &props.name, &term);
    let loading = state.recipes_by_category.is_loading_key(&key);

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{&props.name}</h1>
                <input
                    type="search"
                    value={(*term).clone()}
                    oninput={on_term}
                    placeholder="Filter recipes"
                    class="px-3 py-1 rounded-md border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 text-sm"
                />
            </div>
            if loading && state.recipes_by_category.get(&key).is_none() {
                <p class="text-gray-600 dark:text-gray-400">{"Loading recipes..."}</p>
            }
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {for shown.into_iter().map(|r| html! {
                    <RecipeCard key={r.id.to_string()} recipe={r.clone()} />
                })}
            </div>
        </div>
    }
}
