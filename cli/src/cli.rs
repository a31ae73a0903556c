// SPDX-FileCopyrightText: 2026 The weekplan authors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;

use weekplan_core::{APP_NAME, Planner};

use crate::cmd_event::{CmdAdd, CmdDetail, CmdEdit, CmdList, CmdRemove};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_show::CmdShow;
use crate::config::parse_config;

/// Run the weekplan command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

/// The weekplan commands
#[derive(Debug)]
pub enum Commands {
    Show(CmdShow),
    Add(CmdAdd),
    Edit(CmdEdit),
    Remove(CmdRemove),
    Detail(CmdDetail),
    List(CmdList),
    GenerateCompletion(CmdGenerateCompletion),
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Plan your week in a terminal hour grid.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to today's grid
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/weekplan/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/weekplan/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdShow::command())
            .subcommand(CmdAdd::command())
            .subcommand(CmdEdit::command())
            .subcommand(CmdRemove::command())
            .subcommand(CmdDetail::command())
            .subcommand(CmdList::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)),
            Some((CmdAdd::NAME, matches)) => Add(CmdAdd::from(matches)?),
            Some((CmdEdit::NAME, matches)) => Edit(CmdEdit::from(matches)?),
            Some((CmdRemove::NAME, matches)) => Remove(CmdRemove::from(matches)?),
            Some((CmdDetail::NAME, matches)) => Detail(CmdDetail::from(matches)?),
            Some((CmdList::NAME, matches)) => List(CmdList::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            Some((name, _)) => return Err(format!("Unknown subcommand: {name}").into()),
            None => Show(CmdShow::default()),
        };

        let config = matches.get_one::<PathBuf>("config").cloned();
        Ok(Self { config, command })
    }

    /// Execute the parsed command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        // completion needs no planner, and must not fail on a broken config
        if let Commands::GenerateCompletion(cmd) = &self.command {
            return cmd.run();
        }

        tracing::debug!("parsing configuration...");
        let config = parse_config(self.config).await?;
        let mut planner = Planner::new(config).await?;

        match self.command {
            Commands::Show(cmd) => cmd.run(&planner),
            Commands::Add(cmd) => cmd.run(&mut planner).await,
            Commands::Edit(cmd) => cmd.run(&mut planner).await,
            Commands::Remove(cmd) => cmd.run(&mut planner).await,
            Commands::Detail(cmd) => cmd.run(&planner),
            Commands::List(cmd) => cmd.run(&planner),
            Commands::GenerateCompletion(_) => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekplan_core::Weekday;

    #[test]
    fn no_subcommand_defaults_to_show() {
        let cli = Cli::try_parse_from(["weekplan"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show(CmdShow { day: None, .. })
        ));
    }

    #[test]
    fn show_accepts_day_and_week_flag() {
        let cli = Cli::try_parse_from(["weekplan", "show", "tuesday"]).unwrap();
        match cli.command {
            Commands::Show(cmd) => {
                assert_eq!(cmd.day, Some(Weekday::Tuesday));
                assert!(!cmd.week);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["weekplan", "show", "--week"]).unwrap();
        assert!(matches!(cli.command, Commands::Show(CmdShow { week: true, .. })));
    }

    #[test]
    fn config_flag_is_global_to_the_cli() {
        let cli = Cli::try_parse_from(["weekplan", "-c", "/tmp/wp.toml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/wp.toml")));
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn add_parses_through_the_toplevel() {
        let cli = Cli::try_parse_from(["weekplan", "add", "sat", "10", "football"]).unwrap();
        match cli.command {
            Commands::Add(cmd) => {
                assert_eq!(cmd.day, Weekday::Saturday);
                assert_eq!(cmd.start, 10);
                assert_eq!(cmd.text, "football");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["weekplan", "frobnicate"]).is_err());
    }
}
