use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container",
            section {
                id: "about",
                h1 { "Electricity Strategy Game" }
                p { "Portfolios bid their generating units into an hourly market. Results are published on the scoreboard after every hour." }
            }
            section {
                id: "rules",
                h2 { "Rules" }
                p { "Bids clear from the cheapest unit up until demand is met. Every unit that clears is paid the price of the last unit needed." }
            }
        }
    }
}
