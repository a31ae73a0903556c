// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use weekplan_core::{EventDraft, EventPatch, Planner, Weekday};

use crate::event_formatter::EventFormatter;
use crate::util::{OutputFormat, format_hour, resolve_uid};

/// Add a new event, the "tap an empty cell" affordance of the grid.
#[derive(Debug, Clone)]
pub struct CmdAdd {
    pub day: Weekday,
    pub start: u8,
    pub end: Option<u8>,
    pub text: String,
}

impl CmdAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("a")
            .about("Add a new event")
            .arg(arg!(<day> "Day of the week").value_parser(value_parser!(Weekday)))
            .arg(arg!(<start> "Hour the event starts").value_parser(value_parser!(u8)))
            .arg(
                arg!(--end <HOUR> "Hour the event ends (defaults to one hour after start)")
                    .value_parser(value_parser!(u8)),
            )
            .arg(arg!(<text> ... "Event description").trailing_var_arg(true))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let text = matches
            .get_many::<String>("text")
            .ok_or("Event text is required")?
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self {
            day: *matches.get_one::<Weekday>("day").ok_or("Day is required")?,
            start: *matches.get_one::<u8>("start").ok_or("Start is required")?,
            end: matches.get_one::<u8>("end").copied(),
            text,
        })
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let draft = EventDraft {
            day: self.day,
            start_hour: self.start,
            // like a tapped cell, a bare start means a one hour block
            end_hour: self.end.unwrap_or(self.start + 1),
            text: self.text,
        };
        let event = planner.new_event(draft).await?;
        println!("{}", EventFormatter::new().format(&[event]));
        Ok(())
    }
}

/// Edit an existing event.
#[derive(Debug, Clone)]
pub struct CmdEdit {
    pub id: String,
    pub day: Option<Weekday>,
    pub start: Option<u8>,
    pub end: Option<u8>,
    pub text: Option<String>,
}

impl CmdEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("e")
            .about("Edit an event")
            .arg(arg!(<id> "The id of the event to edit (uid or unique prefix)"))
            .arg(arg!(--day <DAY> "Move the event to another day").value_parser(value_parser!(Weekday)))
            .arg(arg!(--start <HOUR> "New start hour").value_parser(value_parser!(u8)))
            .arg(arg!(--end <HOUR> "New end hour").value_parser(value_parser!(u8)))
            .arg(arg!(--text <TEXT> "New description"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: matches
                .get_one::<String>("id")
                .ok_or("Event id is required")?
                .clone(),
            day: matches.get_one::<Weekday>("day").copied(),
            start: matches.get_one::<u8>("start").copied(),
            end: matches.get_one::<u8>("end").copied(),
            text: matches.get_one::<String>("text").cloned(),
        })
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let patch = EventPatch {
            day: self.day,
            start_hour: self.start,
            end_hour: self.end,
            text: self.text,
        };
        if patch.is_empty() {
            return Err("Nothing to change".into());
        }

        let uid = resolve_uid(planner, &self.id)?;
        let event = planner.update_event(&uid, patch).await?;
        println!("{}", EventFormatter::new().format(&[event]));
        Ok(())
    }
}

/// Remove an event, asking for confirmation first.
#[derive(Debug, Clone)]
pub struct CmdRemove {
    pub id: String,
    pub yes: bool,
}

impl CmdRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove an event")
            .arg(arg!(<id> "The id of the event to remove (uid or unique prefix)"))
            .arg(arg!(-y --yes "Do not ask for confirmation"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: matches
                .get_one::<String>("id")
                .ok_or("Event id is required")?
                .clone(),
            yes: matches.get_flag("yes"),
        })
    }

    pub async fn run(self, planner: &mut Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "removing event...");
        let uid = resolve_uid(planner, &self.id)?;

        if !self.yes {
            let event = planner.get_event(&uid).ok_or("Event not found")?;
            if !confirm(&format!("Remove event '{}'?", event.text))? {
                return Ok(());
            }
        }

        let removed = planner.remove_event(&uid).await?;
        println!("Removed '{}'", removed.text);
        Ok(())
    }
}

/// Show the details view of one event.
#[derive(Debug, Clone)]
pub struct CmdDetail {
    pub id: String,
}

impl CmdDetail {
    pub const NAME: &str = "detail";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("d")
            .about("Show the details of an event")
            .arg(arg!(<id> "The id of the event to show (uid or unique prefix)"))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: matches
                .get_one::<String>("id")
                .ok_or("Event id is required")?
                .clone(),
        })
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        let uid = resolve_uid(planner, &self.id)?;
        let event = planner.get_event(&uid).ok_or("Event not found")?;

        println!("{}", event.text.bold());
        println!("{}  {}", "Day:".dimmed(), event.day);
        println!("{} {}", "Starts:".dimmed(), format_hour(event.start_hour));
        println!("{}   {}", "Ends:".dimmed(), format_hour(event.end_hour()));
        println!("{}    {}", "Id:".dimmed(), event.uid);
        Ok(())
    }
}

/// List all events of the week.
#[derive(Debug, Clone, Copy)]
pub struct CmdList {
    pub output_format: OutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List all events")
            .arg(
                arg!(--"output-format" <FORMAT> "Output format")
                    .value_parser(value_parser!(OutputFormat))
                    .default_value("table"),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: matches
                .get_one("output-format")
                .copied()
                .unwrap_or(OutputFormat::Table),
        }
    }

    pub fn run(self, planner: &Planner) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let mut events = planner.events().to_vec();
        events.sort_by_key(|e| (e.day, e.start_hour));

        let formatter = EventFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(&events));
        Ok(())
    }
}

fn confirm(question: &str) -> Result<bool, Box<dyn Error>> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    fn matches_for(args: &[&str]) -> ArgMatches {
        Command::new("test")
            .subcommand(CmdAdd::command())
            .subcommand(CmdEdit::command())
            .subcommand(CmdRemove::command())
            .try_get_matches_from(args)
            .unwrap()
    }

    #[test]
    fn add_joins_trailing_text() {
        let matches = matches_for(&["test", "add", "mon", "9", "coffee", "with", "anna"]);
        let sub = matches.subcommand_matches("add").unwrap();
        let cmd = CmdAdd::from(sub).unwrap();

        assert_eq!(cmd.day, Weekday::Monday);
        assert_eq!(cmd.start, 9);
        assert_eq!(cmd.end, None);
        assert_eq!(cmd.text, "coffee with anna");
    }

    #[test]
    fn add_accepts_explicit_end() {
        let matches = matches_for(&["test", "add", "fri", "14", "--end", "16", "workshop"]);
        let sub = matches.subcommand_matches("add").unwrap();
        let cmd = CmdAdd::from(sub).unwrap();
        assert_eq!(cmd.end, Some(16));
    }

    #[test]
    fn edit_collects_partial_fields() {
        let matches = matches_for(&["test", "edit", "abcd", "--start", "10", "--text", "renamed"]);
        let sub = matches.subcommand_matches("edit").unwrap();
        let cmd = CmdEdit::from(sub).unwrap();

        assert_eq!(cmd.id, "abcd");
        assert_eq!(cmd.start, Some(10));
        assert_eq!(cmd.end, None);
        assert_eq!(cmd.text.as_deref(), Some("renamed"));
    }

    #[test]
    fn remove_parses_confirmation_flag() {
        let matches = matches_for(&["test", "remove", "abcd", "--yes"]);
        let sub = matches.subcommand_matches("remove").unwrap();
        let cmd = CmdRemove::from(sub).unwrap();
        assert!(cmd.yes);
    }
}
