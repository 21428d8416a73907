// Replot opmode
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use skypath::prelude::Body;

pub fn subcommand() -> Command {
    Command::new("replot")
        .long_flag("replot")
        .arg_required_else_help(true)
        .about("Normalize and plot a previously exported raw position table (date,ra_hours,dec_deg)")
        .arg(
            Arg::new("filepath")
                .short('f')
                .long("fp")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set)
                .required(true)
                .help("Raw position table (CSV)."),
        )
        .arg(
            Arg::new("body")
                .short('b')
                .long("body")
                .value_name("BODY")
                .value_parser(value_parser!(Body))
                .action(ArgAction::Set)
                .help("Body described by this table. Names the output folder.
Otherwise, the parent folder name is used."),
        )
}
