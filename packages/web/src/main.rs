use dioxus::prelude::*;

use store::AdmissionConfig;
use ui::AdmissionProvider;
use views::{Admin, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/admin")]
    Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded at build time; edit `admission.toml` to point at another backend.
const CONFIG_TOML: &str = include_str!("../admission.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> AdmissionConfig {
    match AdmissionConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Invalid {}, using defaults: {e}",
                AdmissionConfig::filename()
            );
            AdmissionConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AdmissionProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/admin`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Admin {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AdmissionConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config, AdmissionConfig::default());
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Root {}.to_string(), "/");
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::Admin {}.to_string(), "/admin");
    }
}
