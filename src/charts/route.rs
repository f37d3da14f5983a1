use std::fmt::{ Display, Formatter };
use std::str::FromStr;

use crate::error::ClientError;
use crate::theme::Theme;

pub const HOURLY_CHART_ID: &str = "hourly-chart";
pub const SUMMARY_CHART_ID: &str = "summary-chart";

/// Hours within a round are numbered from 1.
pub const FIRST_HOUR: u32 = 1;

/// Round and hour whose supply/demand chart the scoreboard shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartRoute {
    pub round: u32,
    pub hour: u32,
}

impl ChartRoute {
    pub fn new(round: u32, hour: u32) -> Self {
        Self { round, hour }
    }

    pub fn hourly_path(&self, theme: Theme) -> String {
        format!("/chart/hourly/r{}h{}?theme={}", self.round, self.hour, theme)
    }

    pub fn previous_hour(&self) -> Option<Self> {
        self.hour
            .checked_sub(1)
            .filter(|hour| *hour >= FIRST_HOUR)
            .map(|hour| Self::new(self.round, hour))
    }

    pub fn next_hour(&self) -> Option<Self> {
        self.hour.checked_add(1).map(|hour| Self::new(self.round, hour))
    }
}

pub fn summary_path(theme: Theme) -> String {
    format!("/chart/summary?theme={}", theme)
}

/// Same `"{round}/{hour}"` form the hour selector submits.
impl Display for ChartRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.round, self.hour)
    }
}

impl FromStr for ChartRoute {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (round, hour) = s
            .split_once('/')
            .ok_or_else(|| ClientError::InvalidRoute(format!("expected round/hour, got {:?}", s)))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| ClientError::InvalidRoute(format!("{:?}: {}", part, e)))
        };
        Ok(Self::new(parse(round)?, parse(hour)?))
    }
}
