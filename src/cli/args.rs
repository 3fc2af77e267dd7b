//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Lint translation keys (the default workflow)
//! - `keys`: Print languages and keys as JSON
//! - `init`: Initialize a `.keylintrc.json` configuration file
//!
//! Every option left unset falls back to the config file, then to the
//! built-in defaults.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::config::{ConfigLayer, ErrorType, RulesLayer, ToggleRule, split_list};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Keys(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by the commands that read project files.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// View files: directory, file or glob (e.g. "./src/app/**/*.{html,ts}")
    #[arg(short, long)]
    pub project: Option<String>,

    /// Language files: directory, file or glob (e.g. "./src/assets/i18n/*.json")
    #[arg(short, long)]
    pub languages: Option<String>,

    /// Comma-separated paths or globs to leave out
    #[arg(short, long)]
    pub ignore: Option<String>,

    /// Config file to use instead of the nearest .keylintrc.json
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn to_layer(&self) -> ConfigLayer {
        ConfigLayer {
            project: self.project.clone(),
            languages: self.languages.clone(),
            ignore: self.ignore.as_deref().map(split_list),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Level for keys declared but never used on a view
    #[arg(short, long, value_enum)]
    pub zombie_keys: Option<ErrorType>,

    /// Level for view keys missing from language files
    #[arg(long, value_enum)]
    pub keys_on_views: Option<ErrorType>,

    /// Level for keys with empty values
    #[arg(long, value_enum)]
    pub empty_keys: Option<ErrorType>,

    /// Level for likely misprints of declared keys
    #[arg(long, value_enum)]
    pub misprint_keys: Option<ErrorType>,

    /// Also match declared key names literally in views
    #[arg(long, value_enum)]
    pub deep_search: Option<ToggleRule>,

    /// Minimum similarity (0..1) for a misprint suggestion
    #[arg(long)]
    pub misprint_coefficient: Option<f64>,

    /// Number of warnings tolerated before the check fails
    #[arg(long)]
    pub max_warning: Option<usize>,

    /// Comma-separated key patterns (case-insensitive regex) to ignore
    #[arg(long, value_delimiter = ',')]
    pub ignored_keys: Option<Vec<String>>,

    /// Comma-separated keys never reported or suggested as misprints
    #[arg(long, value_delimiter = ',')]
    pub ignored_misprint_keys: Option<Vec<String>>,

    /// Additional regex to find keys; the first capture group is the key.
    /// Can be specified multiple times
    #[arg(long = "custom-regexp")]
    pub custom_regexp: Option<Vec<String>>,

    /// Remove zombie keys from the language files
    #[arg(long)]
    pub fix_zombies_keys: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CheckCommand {
    /// The command-line configuration layer.
    pub fn to_layer(&self) -> ConfigLayer {
        ConfigLayer {
            fix_zombies_keys: self.fix_zombies_keys.then_some(true),
            rules: RulesLayer {
                zombie_keys: self.zombie_keys,
                keys_on_views: self.keys_on_views,
                misprint_keys: self.misprint_keys,
                empty_keys: self.empty_keys,
                max_warning: self.max_warning,
                deep_search: self.deep_search,
                misprint_coefficient: self.misprint_coefficient,
                ignored_keys: self.ignored_keys.clone(),
                ignored_misprint_keys: self.ignored_misprint_keys.clone(),
                custom_regexp_to_find_keys: self.custom_regexp.clone(),
            },
            ..self.common.to_layer()
        }
    }
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Also match declared key names literally in views
    #[arg(long, value_enum)]
    pub deep_search: Option<ToggleRule>,
}

impl KeysCommand {
    pub fn to_layer(&self) -> ConfigLayer {
        ConfigLayer {
            rules: RulesLayer {
                deep_search: self.deep_search,
                ..Default::default()
            },
            ..self.common.to_layer()
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation keys (zombie, absent, misprint and empty keys)
    Check(CheckCommand),
    /// Print language files and keys as JSON
    Keys(KeysCommand),
    /// Initialize a new .keylintrc.json configuration file
    Init,
}
