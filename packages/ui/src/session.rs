//! Session and backend client contexts.

use api::HttpClient;
use dioxus::prelude::*;
use store::{AdmissionConfig, Session};

/// Token storage for the current platform: `localStorage` in the browser,
/// an in-memory map elsewhere.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type AppSession = Session<PlatformStore>;

/// Create the platform session using the configured token key.
pub fn make_session(config: &AdmissionConfig) -> AppSession {
    Session::with_key(PlatformStore::new(), config.session.token_key.clone())
}

/// The session provided by [`AdmissionProvider`].
pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

/// The backend client provided by [`AdmissionProvider`].
pub fn use_client() -> HttpClient {
    use_context::<HttpClient>()
}

/// Provides the session and backend client to every view below it.
#[component]
pub fn AdmissionProvider(config: AdmissionConfig, children: Element) -> Element {
    use_context_provider(|| make_session(&config));
    use_context_provider(|| HttpClient::from_config(&config));

    rsx! {
        {children}
    }
}
