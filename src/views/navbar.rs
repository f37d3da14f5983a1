use dioxus::prelude::*;
use crate::charts::FIRST_HOUR;
use crate::nav::{ next_mobile_nav_display, MOBILE_NAV_ID };
use crate::platform;
use crate::routes::Route;
use crate::utils::ThemeState;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
fn AnchorLink(target: String, label: String) -> Element {
    let href = format!("#{}", target);

    rsx! {
        a {
            class: "navbar-link",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                platform::scroll_to_anchor(&target);
            },
            "{label}"
        }
    }
}

#[component]
fn ThemeSwitch(id: String) -> Element {
    let mut theme = use_context::<ThemeState>();

    rsx! {
        label {
            class: "theme-switch",
            r#for: "{id}",
            input {
                r#type: "checkbox",
                id: "{id}",
                checked: theme.is_dark(),
                onchange: move |evt: Event<FormData>| theme.switch(evt.checked()),
            }
            div { class: "slider round" }
        }
    }
}

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut mobile_display = use_signal(|| "none");

    use_effect(move || platform::install_docking());

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: "navbar",
                div {
                    class: "container",
                    ul {
                        class: "navbar-list",
                        li { class: "navbar-item", Link { class: "navbar-link", to: Route::Home, "Home" } }
                        li {
                            class: "navbar-item",
                            Link {
                                class: "navbar-link",
                                to: Route::Scoreboard { round: 1, hour: FIRST_HOUR },
                                "Scoreboard"
                            }
                        }
                        li {
                            class: "navbar-item",
                            AnchorLink { target: "rules", label: "Rules" }
                        }
                        li { class: "navbar-item theme-switch-wrapper", ThemeSwitch { id: "theme-checkbox" } }
                    }
                }
            }

            nav {
                class: "mobile-nav",
                button {
                    class: "mobile-nav-button",
                    onclick: move |_| {
                        let next = next_mobile_nav_display(mobile_display());
                        mobile_display.set(next);
                    },
                    "Menu"
                }
                div {
                    id: MOBILE_NAV_ID,
                    style: "display: {mobile_display}",
                    Link { class: "navbar-link", to: Route::Home, "Home" }
                    Link {
                        class: "navbar-link",
                        to: Route::Scoreboard { round: 1, hour: FIRST_HOUR },
                        "Scoreboard"
                    }
                    ThemeSwitch { id: "mobile-theme-checkbox" }
                }
            }
            Outlet::<Route> {}
        }
    }
}
