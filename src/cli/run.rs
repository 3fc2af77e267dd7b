use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init, keys::keys},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler. Prints help when no command is given.
///
/// # Returns
/// - `Ok(ExitStatus)` once the command completed, whatever it found
/// - `Err` if the command could not run (missing path, invalid config, etc.)
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Check(cmd)) => check(&cmd),
        Some(Command::Keys(cmd)) => keys(&cmd),
        Some(Command::Init) => init(),
        None => Ok(ExitStatus::Success),
    }
}
