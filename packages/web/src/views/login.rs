//! Login page route.

use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

/// Login page. Signed-in actors go straight to the dashboard.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_authenticated: move |_| {
                nav.push(Route::Admin {});
            },
        }
    }
}
