//! Recipe discovery client: session, catalog and favorites stores, and the
//! yew app that renders them.

use payloads::{APIClient, SessionStorage};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

mod components;
pub mod config;
pub mod contexts;
mod hooks;
mod logs;
pub mod navigation;
pub mod notifications;
mod pages;
pub mod recipes;
pub mod session;
pub mod state;
pub mod storage;
pub mod views;

pub use contexts::StoresContext;
pub use navigation::{BrowserNavigator, Navigator};
pub use notifications::{Notifier, Toast, ToastState, ToastType};
pub use recipes::RecipeStore;
pub use session::{IdentityPatch, SessionStore};
pub use state::{FavoritesState, FetchState, RecipeState, SessionState, Slot};
pub use storage::LocalStorage;

use contexts::StoresProvider;
use session::clear_session;

/// Every store of the app, sharing one API client and one yewdux context.
#[derive(Clone)]
pub struct Stores {
    pub client: APIClient,
    pub session: SessionStore,
    pub recipes: RecipeStore,
    pub notifier: Notifier,
}

impl Stores {
    /// Wire the stores to `cx`. A 401 from the API clears the in-memory
    /// session and favorites, then sends the user to the login page.
    pub fn new(
        cx: &yewdux::Context,
        address: impl Into<String>,
        storage: Rc<dyn SessionStorage>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        let notifier = Notifier::new(cx);
        let session_state = Dispatch::<SessionState>::new(cx);
        let favorites_state = Dispatch::<FavoritesState>::new(cx);

        let client = APIClient::new(address, storage).on_unauthorized(
            move || {
                clear_session(&session_state, &favorites_state);
                navigator.to_login();
            },
        );

        let session = SessionStore::new(cx, client.clone(), notifier.clone());
        let recipes = RecipeStore::new(
            cx,
            client.clone(),
            session.clone(),
            notifier.clone(),
        );

        Self {
            client,
            session,
            recipes,
            notifier,
        }
    }
}

/// Stores backed by `localStorage` and real page navigation.
pub fn browser_stores(cx: &yewdux::Context) -> Stores {
    Stores::new(
        cx,
        config::api_address(),
        Rc::new(LocalStorage),
        Rc::new(BrowserNavigator),
    )
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <YewduxRoot>
            <StoresProvider>
                <BrowserRouter>
                    <Shell />
                </BrowserRouter>
            </StoresProvider>
        </YewduxRoot>
    }
}

#[function_component]
fn Shell() -> Html {
    hooks::use_authentication();

    html! {
        <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
            <components::Header />
            <components::ToastContainer />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/category/:name")]
    Category { name: String },
    #[at("/recipe/:id")]
    Recipe { id: String },
    #[at("/favorites")]
    Favorites,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <pages::HomePage /> },
        Route::Login => html! { <pages::LoginPage /> },
        Route::Category { name } => {
            html! { <pages::CategoryPage name={name} /> }
        }
        Route::Recipe { id } => html! { <pages::RecipePage id={id} /> },
        Route::Favorites => html! { <pages::FavoritesPage /> },
        Route::Profile => html! { <pages::ProfilePage /> },
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
