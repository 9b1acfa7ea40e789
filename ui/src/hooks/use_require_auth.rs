use crate::state::SessionState;
use payloads::UserProfile;
use yew::prelude::*;
use yewdux::prelude::*;

/// Hook that requires authentication. Returns the user profile if signed in,
/// or None if signed out or still checking the stored session.
#[hook]
pub fn use_require_auth() -> Option<UserProfile> {
    let (state, _) = use_store::<SessionState>();

    if state.is_authenticated() {
        state.user.clone()
    } else {
        None
    }
}
