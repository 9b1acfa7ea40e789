pub mod mock;

use payloads::{
    APIClient, Identity, MemoryStorage, SessionStorage,
    storage::{TOKEN_KEY, USER_KEY},
};
use reqwest::StatusCode;
use std::cell::Cell;
use std::rc::Rc;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};
use ui::{
    FavoritesState, Navigator, RecipeState, SessionState, Stores, ToastState,
};
use wiremock::MockServer;
use yewdux::prelude::Dispatch;

/// The client stores wired to a fresh mock API, with their own yewdux
/// context so tests never share state.
pub struct TestApp {
    pub server: MockServer,
    pub storage: Rc<MemoryStorage>,
    pub navigator: Rc<RecordingNavigator>,
    pub cx: yewdux::Context,
    pub stores: Stores,
    pub client: APIClient,
}

/// Counts redirects to the login page instead of navigating.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: Cell<usize>,
}

impl RecordingNavigator {
    pub fn login_redirects(&self) -> usize {
        self.redirects.get()
    }
}

impl Navigator for RecordingNavigator {
    fn to_login(&self) {
        self.redirects.set(self.redirects.get() + 1);
    }
}

pub async fn spawn_app() -> TestApp {
    init_tracing();

    let server = MockServer::start().await;
    let storage = Rc::new(MemoryStorage::new());
    let navigator = Rc::new(RecordingNavigator::default());
    let cx = yewdux::Context::new();

    let stores = Stores::new(
        &cx,
        server.uri(),
        storage.clone(),
        navigator.clone(),
    );
    let client = stores.client.clone();

    TestApp {
        server,
        storage,
        navigator,
        cx,
        stores,
        client,
    }
}

/// A bare client against a fresh mock API, for exercising the facade
/// without any stores.
pub async fn spawn_client() -> (MockServer, Rc<MemoryStorage>, APIClient) {
    init_tracing();

    let server = MockServer::start().await;
    let storage = Rc::new(MemoryStorage::new());
    let client = APIClient::new(server.uri(), storage.clone());
    (server, storage, client)
}

pub fn init_tracing() {
    let _ = LogTracer::init();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_test_writer()
        .finish()
        .try_init();
}

/// Read-only views of the stores' state
impl TestApp {
    pub fn session_state(&self) -> Rc<SessionState> {
        Dispatch::<SessionState>::new(&self.cx).get()
    }

    pub fn recipe_state(&self) -> Rc<RecipeState> {
        Dispatch::<RecipeState>::new(&self.cx).get()
    }

    pub fn favorites_state(&self) -> Rc<FavoritesState> {
        Dispatch::<FavoritesState>::new(&self.cx).get()
    }

    pub fn toasts(&self) -> Rc<ToastState> {
        Dispatch::<ToastState>::new(&self.cx).get()
    }

    pub fn has_toast(&self, message: &str) -> bool {
        self.toasts().contains(message)
    }

    pub fn stored_token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// The identity persisted under the `user` key, if any.
    pub fn stored_identity(&self) -> Option<Identity> {
        let json = self.storage.get(USER_KEY)?;
        Some(
            serde_json::from_str(&json)
                .expect("stored user is not a valid identity"),
        )
    }

    pub fn favorite_ids(&self) -> Vec<String> {
        self.favorites_state()
            .list()
            .iter()
            .map(|f| f.recipe_id.to_string())
            .collect()
    }
}

/// Functions to put the client into a known state
///
/// Using anyhow::Result lets us get a backtrace from when the error was fist
/// converted to anyhow::Result. Run with RUST_BACKTRACE=1 to view.
impl TestApp {
    /// Log in as alice with the given favorites on her account.
    pub async fn login_alice(
        &self,
        favorites: Vec<payloads::FavoriteRecipe>,
    ) -> anyhow::Result<()> {
        let _guard = mock::mount_login(
            &self.server,
            mock::auth_body(mock::ALICE_TOKEN, &mock::alice_identity(favorites)),
        )
        .await;

        self.stores.session.mark_mounted();
        anyhow::ensure!(
            self.stores
                .session
                .login(mock::ALICE_EMAIL, mock::ALICE_PASSWORD)
                .await,
            "alice could not log in"
        );
        Ok(())
    }

    /// A token left behind by an earlier visit.
    pub fn store_token(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
    }
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
