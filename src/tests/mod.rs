// Scenario tests that drive the controller and refresher through mocks.
mod common;
mod chart_refresh;
