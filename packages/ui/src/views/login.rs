//! Credential entry card.

use dioxus::prelude::*;

use crate::login::{submit_login, LoginForm};
use crate::session::{use_client, use_session};

/// Login page. Calls `on_authenticated` once a token is stored, or right away
/// when the session already holds one.
#[component]
pub fn LoginView(on_authenticated: EventHandler<()>) -> Element {
    let session = use_session();
    let client = use_client();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let already_signed_in = use_hook(|| {
        let signed_in = session.is_authenticated();
        if signed_in {
            on_authenticated.call(());
        }
        signed_in
    });

    if already_signed_in {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = LoginForm::new(username(), password());
        let client = client.clone();
        let session = session.clone();
        spawn(async move {
            match submit_login(&client, &session, &form).await {
                Ok(()) => on_authenticated.call(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "flex h-screen items-center justify-center bg-gray-900 px-4",
            div {
                class: "w-full max-w-md rounded-lg bg-gray-800 p-6 text-white",
                h1 { class: "mb-4 text-2xl font-bold", "Login" }

                if let Some(message) = error() {
                    div { class: "mb-4 rounded-md bg-red-500/10 p-4 text-red-500", "{message}" }
                }

                form {
                    onsubmit: onsubmit,
                    div {
                        class: "mb-4 space-y-2",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            class: "w-full rounded bg-gray-700 px-3 py-2 text-white",
                            r#type: "text",
                            placeholder: "Enter your username",
                            value: "{username}",
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }
                    div {
                        class: "mb-4 space-y-2",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            class: "w-full rounded bg-gray-700 px-3 py-2 text-white",
                            r#type: "password",
                            placeholder: "Enter your password",
                            value: "{password}",
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    button {
                        class: "w-full rounded bg-blue-600 py-2 hover:bg-blue-700",
                        r#type: "submit",
                        "Sign in"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{render_with_session, Tally};
    use store::{MemoryStore, Session};

    fn login_view() -> Element {
        let tally = use_context::<Tally>();
        rsx! {
            LoginView { on_authenticated: move |_| tally.redirect() }
        }
    }

    #[test]
    fn test_stored_token_skips_the_form() {
        let session = Session::new(MemoryStore::with_item("token", "abc123"));
        let (html, tally) = render_with_session(session, login_view);

        assert_eq!(tally.redirects(), 1);
        assert!(!html.contains("Sign in"));
        assert!(!html.contains("username"));
    }

    #[test]
    fn test_no_token_shows_the_form() {
        let session = Session::new(MemoryStore::new());
        let (html, tally) = render_with_session(session, login_view);

        assert_eq!(tally.redirects(), 0);
        assert!(html.contains("Sign in"));
        assert!(html.contains("Enter your username"));
    }
}
