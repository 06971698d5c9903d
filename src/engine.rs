//! Context switching logic.
//!
//! This module implements the core mechanism of `kubesw`: loading the
//! kubeconfig, resolving the target context, and persisting the change.
//! The flow is strictly sequential: load -> empty-set guard -> resolve ->
//! no-op check -> mutate + save. The file on disk is only touched after a
//! target has been fully resolved, so an interrupted prompt leaves it intact.

use crate::error::SwitchError;
use crate::kubeconfig::Kubeconfig;
use crate::paths::Paths;
use crate::resolve::{ContextSelector, Intent, resolve_target};

/// Terminal outcome of a switch invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target was already the current context; nothing was written.
    AlreadyCurrent(String),
    /// The current-context pointer was repointed and persisted.
    Switched(String),
}

/// Switch the current context, resolving the target from the positional
/// argument, the `--context` flag, or `selector` (in that order).
pub fn switch_context(
    paths: &Paths,
    positional: Option<&str>,
    flag: Option<&str>,
    selector: &dyn ContextSelector,
) -> Result<Outcome, SwitchError> {
    let mut config = Kubeconfig::load(&paths.kubeconfig)?;
    let set = config.context_set();

    if set.is_empty() {
        return Err(SwitchError::EmptyContextSet(paths.kubeconfig.clone()));
    }

    let target = match resolve_target(positional, flag, &set)? {
        Intent::ExplicitTarget(name) => name,
        Intent::Interactive => selector.select_one(set.names(), set.current())?,
    };

    if set.current() == Some(target.as_str()) {
        return Ok(Outcome::AlreadyCurrent(target));
    }

    config.set_current_context(&target)?;
    config.save(&paths.kubeconfig)?;

    Ok(Outcome::Switched(target))
}

/// Read-only listing: sorted `(name, is_current)` pairs.
pub fn list_contexts(paths: &Paths) -> Result<Vec<(String, bool)>, SwitchError> {
    let config = Kubeconfig::load(&paths.kubeconfig)?;
    let set = config.context_set();

    if set.is_empty() {
        return Err(SwitchError::EmptyContextSet(paths.kubeconfig.clone()));
    }

    Ok(set
        .names()
        .iter()
        .map(|name| {
            let is_current = set.current() == Some(name.as_str());
            (name.clone(), is_current)
        })
        .collect())
}
