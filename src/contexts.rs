//! The in-memory view of available context names.

use crate::error::SwitchError;

/// Available context names plus the current-context pointer.
///
/// Names are kept sorted so prompts and listings are deterministic regardless
/// of the order contexts appear in the file.
#[derive(Debug, Clone)]
pub struct ContextSet {
    names: Vec<String>,
    current: Option<String>,
}

impl ContextSet {
    /// Build a set from raw names and a candidate current context. Names are
    /// sorted and deduped; a current pointer naming an absent context is
    /// dropped rather than treated as an error.
    pub fn new(mut names: Vec<String>, current: Option<String>) -> Self {
        names.sort();
        names.dedup();
        let current = current.filter(|c| names.iter().any(|n| n == c));
        Self { names, current }
    }

    /// Context names in lexicographic order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Repoint the current context within the existing names. Never inserts.
    pub fn set_current(&mut self, name: &str) -> Result<(), SwitchError> {
        if !self.contains(name) {
            return Err(SwitchError::UnknownContext {
                name: name.to_string(),
                available: self.names.clone(),
            });
        }
        self.current = Some(name.to_string());
        Ok(())
    }
}
