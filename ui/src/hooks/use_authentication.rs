use yew::prelude::*;

use super::use_stores;

/// Hook to mark the client mounted and check the stored session on startup
#[hook]
pub fn use_authentication() {
    let stores = use_stores();

    use_effect_with((), move |_| {
        stores.session.mark_mounted();
        let session = stores.session.clone();
        yew::platform::spawn_local(async move {
            session.restore_session().await;
        });
    });
}
