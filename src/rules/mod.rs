//! Rule implementations for keylint.
//!
//! Each rule is a pure function over the declared keys (the
//! [`KeyRepository`]) and the scanned views, plus its own configuration.
//! The [`Checker`] trait wraps those functions so the linter can run the
//! enabled rules uniformly and in a fixed order.
//!
//! ## Module Structure
//!
//! - `zombie`: Declared keys never referenced by a view
//! - `absent`: View keys missing from one or more language files
//! - `misprint`: Zombie/absent keys that closely resemble a declared key
//! - `empty`: Declared keys with empty values
//! - `similarity`: Normalized edit-distance similarity

pub mod absent;
pub mod empty;
pub mod misprint;
pub mod similarity;
pub mod zombie;

use std::collections::HashSet;

use enum_dispatch::enum_dispatch;

use crate::{
    config::RuleConfig,
    core::{KeyRepository, data::ViewFile},
    issues::{Diagnostic, Rule},
};

pub use absent::AbsentViewKeysRule;
pub use empty::EmptyKeysRule;
pub use misprint::MisprintRule;
pub use zombie::ZombieRule;

/// Inputs shared by every rule.
pub struct RuleContext<'a> {
    pub repository: &'a KeyRepository,
    pub views: &'a [ViewFile],
    /// Distinct keys referenced by any view.
    pub used_keys: &'a HashSet<String>,
    /// Diagnostics emitted by the rules that ran before this one.
    pub prior: &'a [Diagnostic],
}

#[enum_dispatch]
pub trait Checker {
    fn rule(&self) -> Rule;
    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic>;
}

#[enum_dispatch(Checker)]
#[derive(Debug, Clone)]
pub enum AnyChecker {
    ZombieRule,
    AbsentViewKeysRule,
    MisprintRule,
    EmptyKeysRule,
}

/// The enabled rules, in evaluation order. Disabled rules are left out.
pub fn enabled_checkers(config: &RuleConfig) -> Vec<AnyChecker> {
    let mut checkers: Vec<AnyChecker> = Vec::new();

    if let Some(severity) = config.zombie_keys.severity() {
        checkers.push(ZombieRule::new(severity).into());
    }
    if let Some(severity) = config.keys_on_views.severity() {
        checkers.push(AbsentViewKeysRule::new(severity).into());
    }
    if let Some(severity) = config.misprint_keys.severity() {
        checkers.push(
            MisprintRule::new(
                severity,
                config.misprint_coefficient,
                config.ignored_misprint_keys.clone(),
            )
            .into(),
        );
    }
    if let Some(severity) = config.empty_keys.severity() {
        checkers.push(EmptyKeysRule::new(severity).into());
    }

    checkers
}

/// Run `checkers` in order. Each rule sees the diagnostics of the rules
/// before it, which is how misprint detection finds its suspects.
pub fn run_checkers(
    checkers: &[AnyChecker],
    repository: &KeyRepository,
    views: &[ViewFile],
) -> Vec<Diagnostic> {
    let used_keys: HashSet<String> = views
        .iter()
        .flat_map(|view| view.key_names())
        .map(String::from)
        .collect();

    let mut diagnostics = Vec::new();
    for checker in checkers {
        let found = checker.check(&RuleContext {
            repository,
            views,
            used_keys: &used_keys,
            prior: &diagnostics,
        });
        tracing::debug!(rule = %checker.rule(), count = found.len(), "rule finished");
        diagnostics.extend(found);
    }
    diagnostics
}
