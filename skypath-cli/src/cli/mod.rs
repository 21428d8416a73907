use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, ColorChoice, Command};

pub mod replot;
pub mod sweep;

mod workspace;
pub use workspace::Workspace;

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: Self::command().get_matches(),
        }
    }

    /// Command line interface definition
    pub fn command() -> Command {
        Command::new("skypath-cli")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Apparent sky path of Solar System bodies")
            .long_about(
                "skypath-cli samples the geocentric apparent position
of planets over a time window, and plots their path
in equatorial coordinates to reveal retrograde loops.",
            )
            .arg_required_else_help(true)
            .subcommand_required(true)
            .color(ColorChoice::Always)
            .next_help_heading("Production Environment")
            .arg(
                Arg::new("quiet")
                    .short('q')
                    .long("quiet")
                    .action(ArgAction::SetTrue)
                    .global(true)
                    .help("Do not open the rendered HTML plots automatically.
Traces are still driven by $RUST_LOG."),
            )
            .arg(
                Arg::new("workspace")
                    .short('w')
                    .long("workspace")
                    .value_name("FOLDER")
                    .value_parser(value_parser!(PathBuf))
                    .global(true)
                    .help("Define custom workspace location. $SKYPATH_WORKSPACE has precedence.
Defaults to ./WORKSPACE."),
            )
            .next_help_heading("Exclusive Opmodes: you can only run one at a time.")
            .subcommand(sweep::subcommand())
            .subcommand(replot::subcommand())
    }

    /// True when -q (quiet) option is active
    pub fn quiet(&self) -> bool {
        self.matches.get_flag("quiet")
    }

    /// Workspace location defined by User
    pub fn workspace(&self) -> Option<&PathBuf> {
        self.matches.get_one::<PathBuf>("workspace")
    }
}
