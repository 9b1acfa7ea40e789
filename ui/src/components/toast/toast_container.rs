use super::ToastItem;
use crate::notifications::ToastState;
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component]
pub fn ToastContainer() -> Html {
    let (state, _) = use_store::<ToastState>();

    if state.toasts.is_empty() {
        return html! {};
    }

    let mut toasts: Vec<_> = state.toasts.values().cloned().collect();
    toasts.sort_by_key(|toast| toast.id.to_string()); // Simple ordering by UUID string

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-3 max-w-sm w-full">
            {for toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            })}
        </div>
    }
}
