//! Session-gated applicants dashboard route.

use dioxus::prelude::*;
use ui::views::ApplicantsView;
use ui::SessionGate;

use crate::Route;

#[component]
pub fn Admin() -> Element {
    let nav = use_navigator();

    rsx! {
        SessionGate {
            on_denied: move |_| {
                nav.replace(Route::Login {});
            },
            ApplicantsView {
                on_logout: move |_| {
                    nav.push(Route::Login {});
                },
            }
        }
    }
}
