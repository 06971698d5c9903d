//! Target-context resolution.
//!
//! Decides which context the user wants from the three possible inputs, with a
//! fixed precedence: positional argument, then `--context` flag, then the
//! interactive prompt. The prompt itself is behind the [`ContextSelector`]
//! trait so the engine never depends on a concrete terminal UI.

use crate::contexts::ContextSet;
use crate::error::SwitchError;

/// What the user asked for, once precedence is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A concrete context name, already validated against the set.
    ExplicitTarget(String),
    /// No name was supplied; ask the human.
    Interactive,
}

/// Apply input precedence and validate any explicit name.
///
/// Empty strings count as unset, mirroring the path resolution rules.
pub fn resolve_target(
    positional: Option<&str>,
    flag: Option<&str>,
    set: &ContextSet,
) -> Result<Intent, SwitchError> {
    let explicit = positional
        .filter(|s| !s.is_empty())
        .or_else(|| flag.filter(|s| !s.is_empty()));

    match explicit {
        Some(name) => {
            if !set.contains(name) {
                return Err(SwitchError::UnknownContext {
                    name: name.to_string(),
                    available: set.names().to_vec(),
                });
            }
            Ok(Intent::ExplicitTarget(name.to_string()))
        }
        None => Ok(Intent::Interactive),
    }
}

/// Single-choice selection over an ordered list of context names.
///
/// Implemented by the inquire-backed prompt in `ui`; tests substitute a
/// scripted double.
pub trait ContextSelector {
    /// Pick exactly one option. `default` pre-positions the cursor on the
    /// current context when there is one.
    fn select_one(&self, options: &[String], default: Option<&str>)
    -> Result<String, SwitchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> ContextSet {
        ContextSet::new(
            vec!["dev".into(), "prod".into(), "staging".into()],
            Some("dev".into()),
        )
    }

    #[test]
    fn test_positional_wins_over_flag() {
        let intent = resolve_target(Some("prod"), Some("staging"), &sample_set()).unwrap();
        assert_eq!(intent, Intent::ExplicitTarget("prod".into()));
    }

    #[test]
    fn test_flag_used_when_no_positional() {
        let intent = resolve_target(None, Some("staging"), &sample_set()).unwrap();
        assert_eq!(intent, Intent::ExplicitTarget("staging".into()));
    }

    #[test]
    fn test_no_input_means_interactive() {
        let intent = resolve_target(None, None, &sample_set()).unwrap();
        assert_eq!(intent, Intent::Interactive);
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let intent = resolve_target(Some(""), Some(""), &sample_set()).unwrap();
        assert_eq!(intent, Intent::Interactive);
    }

    #[test]
    fn test_unknown_positional_fails() {
        let err = resolve_target(Some("nope"), None, &sample_set()).unwrap_err();
        match err {
            SwitchError::UnknownContext { name, available } => {
                assert_eq!(name, "nope");
                assert_eq!(available, vec!["dev", "prod", "staging"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_flag_fails() {
        let err = resolve_target(None, Some("nope"), &sample_set()).unwrap_err();
        assert!(matches!(err, SwitchError::UnknownContext { .. }));
    }

    #[test]
    fn test_selecting_current_context_is_valid() {
        // "already current" is the engine's call, not a resolution error
        let intent = resolve_target(Some("dev"), None, &sample_set()).unwrap();
        assert_eq!(intent, Intent::ExplicitTarget("dev".into()));
    }
}
