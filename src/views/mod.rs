mod home;
mod navbar;
mod scoreboard;

pub use home::Home;
pub use navbar::Navbar;
pub use scoreboard::Scoreboard;
