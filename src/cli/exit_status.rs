use std::process::ExitCode;

use crate::core::LintResult;

/// Exit status for CLI commands, following common conventions for linter tools.
///
/// - `Success` (0): Command completed successfully, the lint passed
/// - `Failure` (1): Command completed but found errors or too many warnings
/// - `Error` (2): Command failed (missing path, invalid config or JSON, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully, the lint passed.
    Success,
    /// Command completed but the lint failed.
    Failure,
    /// Command failed due to a fatal error.
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &LintResult) -> Self {
        if result.passed() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
