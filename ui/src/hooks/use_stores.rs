use yew::prelude::*;

use crate::contexts::StoresContext;

/// Store handles provided by the surrounding `StoresProvider`.
#[hook]
pub fn use_stores() -> StoresContext {
    use_context::<StoresContext>()
        .expect("use_stores must be used within a StoresProvider")
}
