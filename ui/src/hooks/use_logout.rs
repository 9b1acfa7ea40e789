use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

use super::use_stores;

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let stores = use_stores();
    let navigator = use_navigator().unwrap();

    Callback::from(move |_| {
        stores.session.logout();
        navigator.push(&Route::Login);
    })
}
