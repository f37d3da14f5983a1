use dioxus::prelude::*;
use crate::charts::{ ChartRoute, ScoreboardContext, HOURLY_CHART_ID, SUMMARY_CHART_ID };
use crate::configs::ClientConfig;
use crate::platform;
use crate::routes::Route;
use crate::utils::ThemeState;

#[component]
pub fn Scoreboard(round: u32, hour: u32) -> Element {
    let config = use_context::<ClientConfig>();
    let mut theme = use_context::<ThemeState>();

    use_effect(use_reactive!(|(round, hour)| {
        let refresher = platform::chart_refresher(&config);
        theme.attach_scoreboard(ScoreboardContext::new(refresher, ChartRoute::new(round, hour)));
    }));
    use_drop(move || theme.detach_scoreboard());

    let route = ChartRoute::new(round, hour);

    rsx! {
        div {
            class: "container scoreboard",
            h1 { "Scoreboard" }
            div {
                class: "hour-nav",
                if let Some(previous) = route.previous_hour() {
                    Link {
                        to: Route::Scoreboard { round: previous.round, hour: previous.hour },
                        "Previous hour"
                    }
                }
                span { class: "hour-label", "Day {round} hour {hour}" }
                if let Some(next) = route.next_hour() {
                    Link {
                        to: Route::Scoreboard { round: next.round, hour: next.hour },
                        "Next hour"
                    }
                }
            }
            div { id: HOURLY_CHART_ID, class: "chart" }
            div { id: SUMMARY_CHART_ID, class: "chart" }
        }
    }
}
