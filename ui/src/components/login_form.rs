use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_stores;

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    CreateAccount,
}

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub mode: AuthMode,
    pub on_success: Callback<()>,
}

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 \
    rounded-md shadow-sm bg-white dark:bg-neutral-700 text-neutral-900 dark:text-neutral-100 \
    focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500";

const LABEL_CLASS: &str =
    "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2";

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Sign-in and account creation. Failures surface as toasts from the
/// session store.
#[function_component]
pub fn LoginForm(props: &LoginFormProps) -> Html {
    let stores = use_stores();

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let is_loading = use_state(|| false);

    let on_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let is_loading = is_loading.clone();
        let on_success = props.on_success.clone();
        let mode = props.mode;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = input_value(&name_ref);
            let email = input_value(&email_ref);
            let password = input_value(&password_ref);

            let session = stores.session.clone();
            let is_loading = is_loading.clone();
            let on_success = on_success.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                let succeeded = match mode {
                    AuthMode::Login => session.login(&email, &password).await,
                    AuthMode::CreateAccount => {
                        session.register(&name, &email, &password).await
                    }
                };
                is_loading.set(false);
                if succeeded {
                    on_success.emit(());
                }
            });
        })
    };

    html! {
        <div class="max-w-md w-full bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
            <form onsubmit={on_submit} class="space-y-6">
                if props.mode == AuthMode::CreateAccount {
                    <div>
                        <label for="name" class={LABEL_CLASS}>{"Name"}</label>
                        <input
                            ref={name_ref}
                            type="text"
                            id="name"
                            autocomplete="name"
                            required={true}
                            class={INPUT_CLASS}
                            placeholder="Enter your name"
                        />
                    </div>
                }

                <div>
                    <label for="email" class={LABEL_CLASS}>{"Email"}</label>
                    <input
                        ref={email_ref}
                        type="email"
                        id="email"
                        autocomplete="email"
                        required={true}
                        class={INPUT_CLASS}
                        placeholder="Enter your email"
                    />
                </div>

                <div>
                    <label for="password" class={LABEL_CLASS}>{"Password"}</label>
                    <input
                        ref={password_ref}
                        type="password"
                        id="password"
                        autocomplete={if props.mode == AuthMode::CreateAccount { "new-password" } else { "current-password" }}
                        required={true}
                        class={INPUT_CLASS}
                        placeholder="Enter your password"
                    />
                </div>

                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {match (props.mode, *is_loading) {
                        (AuthMode::Login, true) => "Signing in...",
                        (AuthMode::Login, false) => "Sign in",
                        (AuthMode::CreateAccount, true) => "Creating account...",
                        (AuthMode::CreateAccount, false) => "Create account",
                    }}
                </button>
            </form>
        </div>
    }
}
