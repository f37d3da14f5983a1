use dioxus::prelude::*;
use crate::views::{ Home, Navbar, Scoreboard };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home,
    #[route("/scoreboard/:round/:hour")] Scoreboard {
        round: u32,
        hour: u32,
    },
}
