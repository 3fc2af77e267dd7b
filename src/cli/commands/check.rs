use anyhow::Result;
use tracing::warn;

use super::{load_settings, target};
use crate::{
    cli::{
        args::{CheckCommand, OutputFormat},
        exit_status::ExitStatus,
        report,
    },
    core::Linter,
};

pub fn check(cmd: &CheckCommand) -> Result<ExitStatus> {
    let settings = load_settings(&cmd.common, &cmd.to_layer())?;
    if !settings.rules.any_enabled() {
        warn!("every rule is disabled, nothing to check");
    }

    let linter = Linter::new(settings.rules.clone()).fix_zombies_keys(settings.fix_zombies_keys);
    let result = linter.run(&target(&settings))?;

    match cmd.format {
        OutputFormat::Text => report::print(&result),
        OutputFormat::Json => report::print_json(&result)?,
    }

    Ok(ExitStatus::from_result(&result))
}
