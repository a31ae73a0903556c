// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

/// Day of the week, Monday first. This is the only calendar notion the
/// planner knows about: events repeat weekly and carry no date.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Weekday {
    #[cfg_attr(feature = "clap", value(alias = "mon"))]
    Monday,
    #[cfg_attr(feature = "clap", value(alias = "tue"))]
    Tuesday,
    #[cfg_attr(feature = "clap", value(alias = "wed"))]
    Wednesday,
    #[cfg_attr(feature = "clap", value(alias = "thu"))]
    Thursday,
    #[cfg_attr(feature = "clap", value(alias = "fri"))]
    Friday,
    #[cfg_attr(feature = "clap", value(alias = "sat"))]
    Saturday,
    #[cfg_attr(feature = "clap", value(alias = "sun"))]
    Sunday,
}

impl Weekday {
    /// All days in display order, Monday through Sunday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Zero-based index with Monday = 0 and Sunday = 6.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The day for the given index, if it is within 0..=6.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mon" | "monday" => Ok(Weekday::Monday),
            "tue" | "tuesday" => Ok(Weekday::Tuesday),
            "wed" | "wednesday" => Ok(Weekday::Wednesday),
            "thu" | "thursday" => Ok(Weekday::Thursday),
            "fri" | "friday" => Ok(Weekday::Friday),
            "sat" | "saturday" => Ok(Weekday::Saturday),
            "sun" | "sunday" => Ok(Weekday::Sunday),
            other => Err(format!("Unknown weekday: {other}")),
        }
    }
}

/// A weekly event: a block of whole hours on one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// The unique identifier for the event.
    pub uid: String,

    /// The day of the week the event is on.
    pub day: Weekday,

    /// The hour of day at which the event begins.
    pub start_hour: u8,

    /// How many whole hours the event spans. Always at least 1.
    pub duration: u8,

    /// Free-form description shown in the grid.
    pub text: String,
}

impl Event {
    /// The hour of day at which the event ends (exclusive).
    pub fn end_hour(&self) -> u8 {
        self.start_hour + self.duration
    }
}

/// Draft for an event, used for creating new events. The edit view works
/// in terms of start and end hour; the duration is derived.
#[derive(Debug, Clone)]
pub struct EventDraft {
    /// The day of the week the event is on.
    pub day: Weekday,

    /// The hour of day at which the event begins.
    pub start_hour: u8,

    /// The hour of day at which the event ends (exclusive).
    pub end_hour: u8,

    /// Free-form description shown in the grid.
    pub text: String,
}

impl EventDraft {
    /// Converts the draft into an event with the given uid.
    pub(crate) fn into_event(self, uid: String) -> Event {
        Event {
            uid,
            day: self.day,
            start_hour: self.start_hour,
            duration: self.end_hour.saturating_sub(self.start_hour).max(1),
            text: self.text,
        }
    }
}

/// Patch for an event, allowing partial updates.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    /// The day of the week, if it should change.
    pub day: Option<Weekday>,

    /// The hour of day at which the event begins, if it should change.
    pub start_hour: Option<u8>,

    /// The hour of day at which the event ends (exclusive), if it should change.
    pub end_hour: Option<u8>,

    /// The description, if it should change.
    pub text: Option<String>,
}

impl EventPatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.day.is_none()
            && self.start_hour.is_none()
            && self.end_hour.is_none()
            && self.text.is_none()
    }

    /// The time window the event would occupy after applying this patch.
    pub(crate) fn window_for(&self, event: &Event) -> (u8, u8) {
        let start = self.start_hour.unwrap_or(event.start_hour);
        let end = self.end_hour.unwrap_or(event.end_hour());
        (start, end)
    }

    /// Applies the patch to a mutable event, modifying it in place.
    pub(crate) fn apply_to(&self, event: &mut Event) {
        if let Some(day) = self.day {
            event.day = day;
        }

        let (start, end) = self.window_for(event);
        event.start_hour = start;
        event.duration = end.saturating_sub(start).max(1);

        if let Some(text) = &self.text {
            event.text = text.clone();
        }
    }
}
