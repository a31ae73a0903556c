// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::Datelike;
use weekplan_core::{Planner, Weekday};

/// Today's day of the week in local time.
pub fn today() -> Weekday {
    match chrono::Local::now().weekday() {
        chrono::Weekday::Mon => Weekday::Monday,
        chrono::Weekday::Tue => Weekday::Tuesday,
        chrono::Weekday::Wed => Weekday::Wednesday,
        chrono::Weekday::Thu => Weekday::Thursday,
        chrono::Weekday::Fri => Weekday::Friday,
        chrono::Weekday::Sat => Weekday::Saturday,
        chrono::Weekday::Sun => Weekday::Sunday,
    }
}

pub fn format_hour(hour: u8) -> String {
    format!("{hour:02}:00")
}

/// Resolves a user-supplied event id, accepting a full uid or any unique
/// prefix of one.
pub fn resolve_uid(planner: &Planner, id: &str) -> Result<String, Box<dyn Error>> {
    if planner.get_event(id).is_some() {
        return Ok(id.to_string());
    }

    let mut matches = planner
        .events()
        .iter()
        .filter(|e| e.uid.starts_with(id))
        .map(|e| e.uid.clone());

    match (matches.next(), matches.next()) {
        (Some(uid), None) => Ok(uid),
        (Some(_), Some(_)) => Err(format!("Event id '{id}' is ambiguous").into()),
        (None, _) => Err(format!("No event found for id '{id}'").into()),
    }
}

/// Output format for list-style commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
