use web_sys::window;

pub const LOGIN_PATH: &str = "/login";

/// Leaves the current page when the session can no longer be used.
pub trait Navigator {
    fn to_login(&self);
}

/// Hard navigation through `window.location`, so that no component state
/// from the expired session survives.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn to_login(&self) {
        let Some(location) = window().map(|w| w.location()) else {
            return;
        };
        if location.pathname().is_ok_and(|path| path == LOGIN_PATH) {
            return;
        }
        if let Err(e) = location.set_href(LOGIN_PATH) {
            tracing::error!("Failed to redirect to login: {e:?}");
        }
    }
}
