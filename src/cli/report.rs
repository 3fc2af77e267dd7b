//! Report formatting and printing.
//!
//! Text output is cargo-style: one block per diagnostic with a clickable
//! `path:line:col`, the source line with a caret when known, and a note.
//! JSON output serializes the whole result with per-rule counts.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::core::LintResult;
use crate::issues::{Diagnostic, Rule, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the result as text to stdout.
pub fn print(result: &LintResult) {
    report_to(result, &mut io::stdout().lock());
}

/// Print the result as text to a custom writer.
pub fn report_to<W: Write>(result: &LintResult, writer: &mut W) {
    let max_line_width = calculate_max_line_width(&result.diagnostics);

    for diagnostic in &result.diagnostics {
        print_diagnostic(diagnostic, writer, max_line_width);
    }

    print_fixed_files(&result.fixed_files, writer);
    print_summary(result, writer);
}

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W, max_line_width: usize) {
    let severity_str = match diagnostic.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        diagnostic.key,
        diagnostic.rule.to_string().dimmed().cyan()
    );

    match diagnostic.location {
        Some(loc) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                diagnostic.source_file,
                loc.line,
                loc.col
            );
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), diagnostic.source_file);
        }
    }

    if let (Some(loc), Some(source_line)) = (diagnostic.location, &diagnostic.source_line) {
        let caret_char = match diagnostic.severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            loc.line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // col is 1-based
        let prefix: String = source_line.chars().take(loc.col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(details) = diagnostic.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_fixed_files<W: Write>(fixed_files: &[String], writer: &mut W) {
    if fixed_files.is_empty() {
        return;
    }
    let _ = writeln!(
        writer,
        "{} zombie keys from {} file(s):",
        "Removed".green().bold(),
        fixed_files.len()
    );
    for path in fixed_files {
        let _ = writeln!(writer, "  - {}", path);
    }
    let _ = writeln!(writer);
}

fn print_summary<W: Write>(result: &LintResult, writer: &mut W) {
    let total_errors = result.error_count();
    let total_warnings = result.warning_count();
    let total_problems = total_errors + total_warnings;

    if total_problems == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No translation key problems found".green()
        );
        return;
    }

    let mark = if result.passed() {
        SUCCESS_MARK.green()
    } else {
        FAILURE_MARK.red()
    };
    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        mark,
        total_problems,
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );

    if total_warnings > 0 {
        let budget = format!(
            "warning budget: {} of {} allowed",
            total_warnings,
            result.max_count_warning()
        );
        if result.is_full_of_warning() {
            let _ = writeln!(writer, "  {} {}", budget.yellow(), "(exceeded)".red());
        } else {
            let _ = writeln!(writer, "  {}", budget);
        }
    }
}

fn calculate_max_line_width(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter_map(|d| d.location.map(|loc| loc.line))
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

// ============================================================
// JSON
// ============================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RuleCounts {
    zombie_keys: usize,
    keys_on_views: usize,
    misprint_keys: usize,
    empty_keys: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    errors: usize,
    warnings: usize,
    max_warning: usize,
    has_error: bool,
    is_full_of_warning: bool,
    passed: bool,
    counts: RuleCounts,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    diagnostics: &'a [Diagnostic],
    fixed_files: &'a [String],
    summary: JsonSummary,
}

fn json_report(result: &LintResult) -> JsonReport<'_> {
    JsonReport {
        diagnostics: &result.diagnostics,
        fixed_files: &result.fixed_files,
        summary: JsonSummary {
            errors: result.error_count(),
            warnings: result.warning_count(),
            max_warning: result.max_count_warning(),
            has_error: result.has_error(),
            is_full_of_warning: result.is_full_of_warning(),
            passed: result.passed(),
            counts: RuleCounts {
                zombie_keys: result.count(Rule::ZombieKeys),
                keys_on_views: result.count(Rule::KeysOnViews),
                misprint_keys: result.count(Rule::MisprintKeys),
                empty_keys: result.count(Rule::EmptyKeys),
            },
        },
    }
}

/// Print the result as pretty JSON to stdout.
pub fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(&json_report(result))
        .context("Failed to serialize lint result")?;
    println!("{}", json);
    Ok(())
}
