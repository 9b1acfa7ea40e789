use payloads::{UserProfile, responses::UserStats};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::RequireAuth;
use crate::hooks::use_stores;

#[function_component]
pub fn ProfilePage() -> Html {
    let render = Callback::from(|profile: UserProfile| {
        html! { <ProfileDetails profile={profile} /> }
    });

    html! { <RequireAuth render={render} /> }
}

#[derive(Properties, PartialEq)]
struct ProfileDetailsProps {
    profile: UserProfile,
}

#[function_component]
fn ProfileDetails(props: &ProfileDetailsProps) -> Html {
    let stores = use_stores();
    let stats = use_state(|| None::<UserStats>);
    let name_ref = use_node_ref();

    {
        let client = stores.client.clone();
        let stats = stats.clone();
        use_effect_with((), move |_| {
            yew::platform::spawn_local(async move {
                match client.get_user_stats().await {
                    Ok(fetched) => stats.set(Some(fetched)),
                    Err(e) => tracing::warn!("Failed to load stats: {e}"),
                }
            });
        });
    }

    let on_rename = {
        let session = stores.session.clone();
        let name_ref = name_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = name_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let name = input.value();
            if name.trim().is_empty() {
                return;
            }
            let session = session.clone();
            yew::platform::spawn_local(async move {
                session.update_profile(&name).await;
            });
        })
    };

    let profile = &props.profile;
    let date = |t: &Option<jiff::Timestamp>| {
        t.map(|t| t.strftime("%B %-d, %Y").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    };

    html! {
        <div class="max-w-xl space-y-8">
            <section class="space-y-1">
                <h1 class="text-2xl font-bold">{&profile.name}</h1>
                <p class="text-gray-500">{&profile.email}</p>
                <p class="text-sm text-gray-500">{format!("Member since {}", date(&profile.created_at))}</p>
            </section>

            <form onsubmit={on_rename} class="flex space-x-2">
                <input
                    ref={name_ref}
                    type="text"
                    value={profile.name.clone()}
                    class="flex-1 px-3 py-2 rounded-md border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800"
                />
                <button type="submit" class="px-4 py-2 rounded-md bg-gray-900 text-white dark:bg-gray-100 dark:text-gray-900">
                    {"Rename"}
                </button>
            </form>

            if let Some(stats) = &*stats {
                <section class="space-y-2">
                    <h2 class="text-lg font-semibold">
                        {format!("{} favorite recipes", stats.total_favorites)}
                    </h2>
                    <ul class="text-sm text-gray-600 dark:text-gray-400">
                        {for stats.favorites_by_category.iter().map(|(category, count)| html! {
                            <li key={category.clone()}>{format!("{category}: {count}")}</li>
                        })}
                    </ul>
                    <p class="text-sm text-gray-500">{format!("Last login {}", date(&stats.last_login))}</p>
                </section>
            }
        </div>
    }
}
