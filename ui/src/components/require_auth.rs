use payloads::UserProfile;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::hooks::use_require_auth;
use crate::state::SessionState;

/// Renders its children only for a signed-in user. Shows a spinner while
/// the stored session is checked, and a link to sign in otherwise.
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub render: Option<Callback<UserProfile, Html>>,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let (session, _) = use_store::<SessionState>();
    let user_profile = use_require_auth();

    let Some(profile) = user_profile else {
        if session.is_loading() {
            return html! {
                <div class="text-center py-8">
                    <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
                </div>
            };
        }
        return html! {
            <div class="text-center py-12">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Please "}
                    <Link<Route> to={Route::Login} classes="font-medium underline">
                        {"sign in"}
                    </Link<Route>>
                    {" to view this page."}
                </p>
            </div>
        };
    };

    if let Some(render) = &props.render {
        return render.emit(profile);
    }

    html! {
        <>
            {for props.children.iter()}
        </>
    }
}
