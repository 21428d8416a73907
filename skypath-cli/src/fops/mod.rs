//! Opmodes
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use skypath::prelude::{
    Body, BodyPosition, Ephemeris, EphemerisError, EphemerisSource, NormalizedRecord, Resolver,
    SweepConfig,
};

use crate::{cli::Workspace, plot::SkyPlot, Error};

pub mod csv;

/// Raw position table, per body folder
const RAW_TABLE: &str = "positions.csv";
/// Normalized table, per body folder
const NORMALIZED_TABLE: &str = "normalized.csv";
/// Rendered path, per body folder
const HTML_PLOT: &str = "skypath.html";

/// Resolves the sky path of each body described by [SweepConfig],
/// against the same [Ephemeris]. Returns the rendered plots.
/// The time window is validated before `load` deploys the ephemeris.
pub fn sweep<E, F>(workspace: &Workspace, cfg: &SweepConfig, load: F) -> Result<Vec<PathBuf>, Error>
where
    E: Ephemeris,
    F: FnOnce(&EphemerisSource) -> Result<E, EphemerisError>,
{
    let sampler = cfg.sampler()?;
    // one dataset for the whole run
    let ephemeris = load(&cfg.ephemeris)?;
    info!(
        "sampling {} - {} every {} day(s): {} points",
        sampler.start(),
        sampler.end(),
        sampler.step_days(),
        sampler.len()
    );

    let mut products = Vec::with_capacity(cfg.bodies.len());
    for body in cfg.bodies.iter() {
        let resolver = Resolver::new(&ephemeris, *body).with_policy(cfg.policy());
        let positions = resolver.resolve(sampler.iter())?;
        if positions.len() < sampler.len() {
            warn!(
                "{}: {} point(s) could not be resolved",
                body,
                sampler.len() - positions.len()
            );
        }
        products.push(render(workspace, *body, &positions)?);
    }
    Ok(products)
}

/// Generates all products of one body
fn render(workspace: &Workspace, body: Body, positions: &[BodyPosition]) -> Result<PathBuf, Error> {
    let dir = workspace.create_subdir(&body.to_string())?;

    let path = dir.join(RAW_TABLE);
    csv::write_positions(positions, &path)?;
    info!("\"{}\" has been generated", path.display());

    let records = positions
        .iter()
        .map(|position| position.normalize())
        .collect::<Vec<_>>();

    publish(&dir, &records)
}

/// Writes normalized table and plot into `dir`
fn publish(dir: &Path, records: &[NormalizedRecord]) -> Result<PathBuf, Error> {
    let path = dir.join(NORMALIZED_TABLE);
    csv::write_normalized(records, &path)?;
    info!("\"{}\" has been generated", path.display());

    let path = dir.join(HTML_PLOT);
    SkyPlot::new(records).write(&path)?;
    info!("\"{}\" has been generated", path.display());
    Ok(path)
}

/// Normalizes and plots a raw position table. Returns the rendered plot.
pub fn replot(workspace: &Workspace, matches: &ArgMatches) -> Result<PathBuf, Error> {
    let fp = matches
        .get_one::<PathBuf>("filepath")
        .ok_or_else(|| Error::InvalidTable("no file".to_string()))?;

    let positions = csv::read_positions(fp)?;
    if positions.is_empty() {
        return Err(Error::InvalidTable(fp.display().to_string()));
    }
    info!("\"{}\": {} positions", fp.display(), positions.len());

    let name = match matches.get_one::<Body>("body") {
        Some(body) => body.to_string(),
        None => fp
            .parent()
            .and_then(|parent| parent.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "replot".to_string()),
    };

    let records = positions
        .iter()
        .map(|position| position.normalize())
        .collect::<Vec<_>>();

    let dir = workspace.create_subdir(&name)?;
    publish(&dir, &records)
}
