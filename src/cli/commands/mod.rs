pub mod check;
pub mod init;
pub mod keys;

use std::env;

use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    config::{ConfigLayer, Settings, load_config},
    core::LintTarget,
};

use super::args::CommonArgs;

/// Merge defaults, the config file and the command line into settings.
fn load_settings(common: &CommonArgs, cli: &ConfigLayer) -> Result<Settings> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd, common.config.as_deref())?;
    match &loaded.path {
        Some(path) => debug!(path = %path.display(), "loaded config file"),
        None => debug!("no config file found, using defaults"),
    }
    Ok(Settings::merge(&loaded.layer, cli))
}

fn target(settings: &Settings) -> LintTarget {
    LintTarget {
        project: settings.project.clone(),
        languages: settings.languages.clone(),
        ignore: settings.ignore.clone(),
    }
}
