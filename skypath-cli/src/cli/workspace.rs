//! Workspace definition and helper
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
    process::Command,
};

use crate::cli::Cli;

/// Workspace, where all products are generated
pub struct Workspace {
    /// Root Fullpath
    pub root: PathBuf,
}

impl Workspace {
    /// Builds a new workspace either
    ///  1. from $SKYPATH_WORKSPACE environment variable
    ///  2. from -w workspace CLI argument
    ///  3. or defaults to ./WORKSPACE
    pub fn new(cli: &Cli) -> std::io::Result<Self> {
        let root = match std::env::var("SKYPATH_WORKSPACE") {
            Ok(path) => PathBuf::from(path),
            _ => match cli.workspace() {
                Some(path) => path.clone(),
                None => PathBuf::from("WORKSPACE"),
            },
        };
        Self::from_path(root)
    }

    /// Builds a new workspace at `root`, creating it if need be
    pub fn from_path<P: AsRef<Path>>(root: P) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        create_dir_all(&root)?;
        info!("workspace is \"{}\"", root.display());
        Ok(Self { root })
    }

    /// Creates subdirectory within self, returns its fullpath
    pub fn create_subdir(&self, dir: &str) -> std::io::Result<PathBuf> {
        let fullpath = self.root.join(dir);
        create_dir_all(&fullpath)?;
        Ok(fullpath)
    }

    /// Opens given product with prefered web browser
    #[cfg(target_os = "linux")]
    pub fn open_with_web_browser(&self, path: &Path) {
        let fullpath = path.to_string_lossy().to_string();
        let web_browsers = vec!["firefox", "chromium"];
        for browser in web_browsers {
            let child = Command::new(browser).arg(fullpath.clone()).spawn();
            if child.is_ok() {
                return;
            }
        }
        warn!("no web browser found to open \"{}\"", fullpath);
    }

    /// Opens given product with prefered web browser
    #[cfg(target_os = "macos")]
    pub fn open_with_web_browser(&self, path: &Path) {
        let fullpath = path.to_string_lossy().to_string();
        if let Err(e) = Command::new("open").args(&[fullpath]).output() {
            warn!("open() failed, can't open HTML content automatically: {}", e);
        }
    }

    /// Opens given product with prefered web browser
    #[cfg(target_os = "windows")]
    pub fn open_with_web_browser(&self, path: &Path) {
        let fullpath = path.to_string_lossy().to_string();
        if let Err(e) = Command::new("cmd")
            .arg("/C")
            .arg(format!(r#"start {}"#, fullpath))
            .output()
        {
            warn!("failed to open generated HTML content: {}", e);
        }
    }

    /// Opens given product with prefered web browser
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    pub fn open_with_web_browser(&self, path: &Path) {
        info!("\"{}\" has been generated", path.display());
    }
}
