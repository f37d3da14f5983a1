use dioxus::prelude::*;
use esg_client::{ platform, ClientConfig, Route, ThemeState };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(ClientConfig::from_env().log_level)
            .expect("console logger already initialised");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(ClientConfig::from_env);
    // Resolved and applied before the router renders the theme switch.
    let controller = use_signal(|| platform::controller(&config));
    let theme = use_context_provider(|| ThemeState::new(controller));

    rsx! {
        div {
            "data-theme": theme.theme().as_str(),
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Router::<Route> {}
        }
    }
}
