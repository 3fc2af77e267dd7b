use anyhow::{Context, Result};
use serde::Serialize;

use super::{load_settings, target};
use crate::{
    cli::{args::KeysCommand, exit_status::ExitStatus},
    core::{LanguageSummary, Linter, data::Key},
};

#[derive(Serialize)]
struct KeysOutput {
    languages: Vec<LanguageSummary>,
    keys: Vec<Key>,
}

/// Print every language file and key as JSON.
pub fn keys(cmd: &KeysCommand) -> Result<ExitStatus> {
    let settings = load_settings(&cmd.common, &cmd.to_layer())?;
    let linter = Linter::new(settings.rules.clone());
    let input = linter.load(&target(&settings))?;

    let output = KeysOutput {
        languages: linter.languages(&input)?,
        keys: linter.keys(&input)?,
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize keys")?;
    println!("{}", json);

    Ok(ExitStatus::Success)
}
