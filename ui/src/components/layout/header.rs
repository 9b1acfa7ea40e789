use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::hooks::use_logout;
use crate::state::{FavoritesState, SessionState};

#[function_component]
pub fn Header() -> Html {
    let (session, _) = use_store::<SessionState>();
    let (favorites, _) = use_store::<FavoritesState>();
    let on_logout = use_logout();

    let link_class = "text-sm text-gray-700 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white";

    html! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex-shrink-0">
                        <Link<Route> to={Route::Home} classes="text-xl font-semibold text-gray-900 dark:text-white">
                            {"Recipe Finder"}
                        </Link<Route>>
                    </div>
                    <nav class="flex items-center space-x-4">
                        if session.is_authenticated() {
                            <Link<Route> to={Route::Favorites} classes={link_class}>
                                {format!("Favorites ({})", favorites.list().len())}
                            </Link<Route>>
                            <Link<Route> to={Route::Profile} classes={link_class}>
                                {session.user.as_ref().map(|u| u.name.clone()).unwrap_or_default()}
                            </Link<Route>>
                            <button onclick={on_logout} class={link_class}>
                                {"Log out"}
                            </button>
                        } else if !session.is_loading() {
                            <Link<Route> to={Route::Login} classes={link_class}>
                                {"Sign in"}
                            </Link<Route>>
                        }
                    </nav>
                </div>
            </div>
        </header>
    }
}
