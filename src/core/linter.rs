//! Lint orchestration.
//!
//! [`Linter::run`] validates its inputs, resolves and reads the files, then
//! hands the in-memory content to [`Linter::lint`], which does the rest
//! without touching the filesystem (except for fix mode).

use tracing::{debug, info, warn};

use crate::{
    config::RuleConfig,
    core::{
        KeyRepository, LanguageSummary, LintError, LintResult,
        data::{Key, SourceFile, ViewFile},
        extract::{compile, compose_fragments},
        fix::{plan_fix, write_fixes},
        inventory::{list_keys, list_languages},
        result::{IgnoreFilter, aggregate},
        sources::{LANGUAGE_EXTENSIONS, VIEW_EXTENSIONS, read_sources, resolve_files},
        views::scan_view,
    },
    rules::{enabled_checkers, run_checkers},
};

/// Where to find the files of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintTarget {
    /// View files: a directory, file or glob.
    pub project: String,
    /// Language files: a directory, file or glob.
    pub languages: String,
    /// Paths or globs excluded from both.
    pub ignore: Vec<String>,
}

/// Already-read content of a run.
#[derive(Debug, Clone, Default)]
pub struct LintInput {
    pub languages: Vec<SourceFile>,
    pub views: Vec<SourceFile>,
}

#[derive(Debug, Clone)]
pub struct Linter {
    rules: RuleConfig,
    fix_zombies_keys: bool,
}

impl Linter {
    pub fn new(rules: RuleConfig) -> Self {
        Self {
            rules,
            fix_zombies_keys: false,
        }
    }

    /// Remove zombie keys from their language files after linting.
    pub fn fix_zombies_keys(mut self, enabled: bool) -> Self {
        self.fix_zombies_keys = enabled;
        self
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Validate `target` and the rules, then resolve and read every file.
    ///
    /// Fails before any I/O when a path is empty or the rules are invalid.
    pub fn load(&self, target: &LintTarget) -> Result<LintInput, LintError> {
        if target.project.trim().is_empty() {
            return Err(LintError::MissingPath { which: "project" });
        }
        if target.languages.trim().is_empty() {
            return Err(LintError::MissingPath { which: "languages" });
        }
        self.rules.validate()?;

        let language_paths =
            resolve_files(&target.languages, &target.ignore, LANGUAGE_EXTENSIONS)?;
        let view_paths = resolve_files(&target.project, &target.ignore, VIEW_EXTENSIONS)?;
        if language_paths.is_empty() {
            warn!(languages = %target.languages, "no language files found");
        }
        debug!(
            languages = language_paths.len(),
            views = view_paths.len(),
            "resolved input files"
        );

        Ok(LintInput {
            languages: read_sources(&language_paths)?,
            views: read_sources(&view_paths)?,
        })
    }

    pub fn run(&self, target: &LintTarget) -> Result<LintResult, LintError> {
        let input = self.load(target)?;
        self.lint(&input)
    }

    /// Run the enabled rules over `input` and aggregate the findings.
    pub fn lint(&self, input: &LintInput) -> Result<LintResult, LintError> {
        self.rules.validate()?;
        let ignore = IgnoreFilter::new(&self.rules.ignored_keys)?;

        let repository = KeyRepository::load(&input.languages)?;
        let views = self.scan_views(&repository, &input.views)?;

        let checkers = enabled_checkers(&self.rules);
        let diagnostics = run_checkers(&checkers, &repository, &views);
        let mut result = aggregate(diagnostics, &ignore, self.rules.max_warning);

        if self.fix_zombies_keys {
            let rewrites = plan_fix(&result.diagnostics, &input.languages)?;
            result.fixed_files = write_fixes(&rewrites)?;
        }

        info!(
            diagnostics = result.diagnostics.len(),
            errors = result.error_count(),
            warnings = result.warning_count(),
            fixed = result.fixed_files.len(),
            "lint finished"
        );
        Ok(result)
    }

    /// Language files with their keys.
    pub fn languages(&self, input: &LintInput) -> Result<Vec<LanguageSummary>, LintError> {
        let repository = KeyRepository::load(&input.languages)?;
        Ok(list_languages(&repository))
    }

    /// Every declared key with its values and the views using it.
    pub fn keys(&self, input: &LintInput) -> Result<Vec<Key>, LintError> {
        let repository = KeyRepository::load(&input.languages)?;
        let views = self.scan_views(&repository, &input.views)?;
        Ok(list_keys(&repository, &views))
    }

    fn scan_views(
        &self,
        repository: &KeyRepository,
        views: &[SourceFile],
    ) -> Result<Vec<ViewFile>, LintError> {
        let fragments = compose_fragments(
            &repository.key_names(),
            &self.rules.custom_regexp_to_find_keys,
            self.rules.deep_search.is_enabled(),
        );
        let pattern = compile(&fragments)?;
        debug!(fragments = pattern.fragment_count(), "compiled key pattern");

        Ok(views.iter().map(|view| scan_view(view, &pattern)).collect())
    }
}
