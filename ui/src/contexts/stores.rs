use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

use crate::{Stores, browser_stores};

/// Shared handle to the one `Stores` of the app. Clones point at the same
/// stores and compare equal.
#[derive(Clone)]
pub struct StoresContext(Rc<Stores>);

impl StoresContext {
    pub fn new(stores: Stores) -> Self {
        Self(Rc::new(stores))
    }
}

impl PartialEq for StoresContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for StoresContext {
    type Target = Stores;

    fn deref(&self) -> &Stores {
        &self.0
    }
}

#[derive(Properties, PartialEq)]
pub struct StoresProviderProps {
    pub children: Children,
}

/// Builds the browser stores once and hands them to every descendant.
#[function_component]
pub fn StoresProvider(props: &StoresProviderProps) -> Html {
    let cx = use_context::<yewdux::Context>()
        .expect("StoresProvider must be used within a YewduxRoot");
    let stores = use_memo(cx, |cx| StoresContext::new(browser_stores(cx)));

    html! {
        <ContextProvider<StoresContext> context={(*stores).clone()}>
            {props.children.clone()}
        </ContextProvider<StoresContext>>
    }
}
