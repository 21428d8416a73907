//! Command line tool to sample and plot the apparent sky path
//! of Solar System bodies, revealing their retrograde loops.
//! Refer to README for command line arguments.

mod cli; // command line interface
mod fops;
mod plot;

use cli::{Cli, Workspace};
use skypath::prelude::{AlmanacEphemeris, ConfigError, EphemerisError, RangeError};

use env_logger::{Builder, Target};

#[macro_use]
extern crate log;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error")]
    StdioError(#[from] std::io::Error),
    #[error("csv error")]
    CsvError(#[from] csv::Error),
    #[error("invalid configuration file")]
    ConfigFileError(#[from] serde_json::Error),
    #[error("configuration error")]
    ConfigError(#[from] ConfigError),
    #[error("invalid sampling window")]
    RangeError(#[from] RangeError),
    #[error("ephemeris error")]
    EphemerisError(#[from] EphemerisError),
    #[error("sky path error")]
    SkyPathError(#[from] skypath::Error),
    #[error("invalid raw table \"{0}\"")]
    InvalidTable(String),
}

pub fn main() -> Result<(), Error> {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();
    let workspace = Workspace::new(&cli)?;

    /*
     * Exclusive opmodes
     */
    let products = match cli.matches.subcommand() {
        Some(("sweep", submatches)) => {
            let cfg = cli::sweep::config(submatches)?;
            fops::sweep(&workspace, &cfg, |source| {
                AlmanacEphemeris::new(source.clone())
            })?
        },
        Some(("replot", submatches)) => vec![fops::replot(&workspace, submatches)?],
        _ => Vec::new(),
    };

    if !cli.quiet() {
        for product in products.iter() {
            workspace.open_with_web_browser(product);
        }
    }
    Ok(())
}
