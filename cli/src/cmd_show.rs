// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use weekplan_core::{Planner, Weekday};

use crate::day_view::{DayView, event_area_width};
use crate::util::today;

const DEFAULT_WIDTH: usize = 66;

/// Render the hour grid for one day, or the whole week.
#[derive(Debug, Clone, Copy)]
pub struct CmdShow {
    pub day: Option<Weekday>,
    pub week: bool,
    pub width: usize,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("s")
            .about("Show the day grid (defaults to today)")
            .arg(
                arg!([day] "Day of the week to show")
                    .value_parser(value_parser!(Weekday)),
            )
            .arg(arg!(-w --week "Show all seven days"))
            .arg(
                arg!(--width <COLS> "Total width of the grid in columns")
                    .value_parser(value_parser!(usize))
                    .default_value("66"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            day: matches.get_one::<Weekday>("day").copied(),
            week: matches.get_flag("week"),
            width: matches
                .get_one::<usize>("width")
                .copied()
                .unwrap_or(DEFAULT_WIDTH),
        }
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing day grid...");
        let config = planner.config();
        let view = DayView {
            start_hour: config.grid_start_hour,
            end_hour: config.grid_end_hour,
            width: event_area_width(self.width),
            color: colored::control::SHOULD_COLORIZE.should_colorize(),
        };

        if self.week {
            for day in Weekday::ALL {
                self.render_day(planner, &view, day)?;
                println!();
            }
        } else {
            let day = self.day.unwrap_or_else(today);
            self.render_day(planner, &view, day)?;
        }
        Ok(())
    }

    fn render_day(
        self,
        planner: &Planner,
        view: &DayView,
        day: Weekday,
    ) -> Result<(), Box<dyn Error>> {
        let (events, placements) = planner.day_layout(day)?;
        print!("{}", view.render(day, &events, &placements));
        Ok(())
    }
}

impl Default for CmdShow {
    fn default() -> Self {
        Self {
            day: None,
            week: false,
            width: DEFAULT_WIDTH,
        }
    }
}
