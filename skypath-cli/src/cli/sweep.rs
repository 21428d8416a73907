// Sweep opmode
use std::{fs::read_to_string, path::PathBuf};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use skypath::prelude::{Body, EphemerisSource, SweepConfig};

use crate::Error;

pub fn subcommand() -> Command {
    Command::new("sweep")
        .long_flag("sweep")
        .about("Sample, resolve and plot the sky path of one or more bodies")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set)
                .conflicts_with("preset")
                .help("Load run definition from JSON configuration file.
Individual options below have precedence."),
        )
        .arg(
            Arg::new("preset")
                .short('p')
                .long("preset")
                .value_name("NAME")
                .action(ArgAction::Set)
                .help("Start from a preset run: \"mars\" (default) or \"jupiter\"."),
        )
        .next_help_heading("Run definition")
        .arg(
            Arg::new("body")
                .short('b')
                .long("body")
                .value_name("BODY")
                .value_parser(value_parser!(Body))
                .action(ArgAction::Append)
                .help("Body to resolve, for example \"mars\". Repeat to resolve several bodies."),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .value_name("DATE")
                .action(ArgAction::Set)
                .help("First sampled date, for example \"2024-06-01\"."),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .value_name("DATE")
                .action(ArgAction::Set)
                .help("End of the time window, excluded."),
        )
        .arg(
            Arg::new("step")
                .long("step")
                .value_name("DAYS")
                .value_parser(value_parser!(f64))
                .action(ArgAction::Set)
                .help("Sampling step, in days."),
        )
        .arg(
            Arg::new("ephemeris")
                .short('e')
                .long("ephemeris")
                .value_name("KERNEL")
                .value_parser(value_parser!(EphemerisSource))
                .action(ArgAction::Set)
                .help("Ephemeris dataset: \"de440s\" (default, downloaded and cached once)
or path to a local BSP kernel."),
        )
        .arg(
            Arg::new("skip-gaps")
                .long("skip-gaps")
                .action(ArgAction::SetTrue)
                .help("Drop the dates the ephemeris cannot resolve, instead of aborting."),
        )
}

/// Builds the [SweepConfig] described by User
pub fn config(matches: &ArgMatches) -> Result<SweepConfig, Error> {
    let mut cfg = if let Some(path) = matches.get_one::<PathBuf>("config") {
        let content = read_to_string(path)?;
        let cfg: SweepConfig = serde_json::from_str(&content)?;
        info!("loaded run definition \"{}\"", path.display());
        cfg
    } else if let Some(preset) = matches.get_one::<String>("preset") {
        SweepConfig::preset(preset)?
    } else {
        SweepConfig::default()
    };

    if let Some(bodies) = matches.get_many::<Body>("body") {
        cfg.bodies = bodies.copied().collect();
    }
    if let Some(start) = matches.get_one::<String>("start") {
        cfg.start = start.clone();
    }
    if let Some(end) = matches.get_one::<String>("end") {
        cfg.end = end.clone();
    }
    if let Some(step) = matches.get_one::<f64>("step") {
        cfg.step_days = *step;
    }
    if let Some(source) = matches.get_one::<EphemerisSource>("ephemeris") {
        cfg.ephemeris = source.clone();
    }
    if matches.get_flag("skip-gaps") {
        cfg.skip_gaps = true;
    }
    Ok(cfg)
}
