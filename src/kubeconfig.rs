//! Kubeconfig document model and persistence.
//!
//! Only the two parts the switcher cares about are typed: the `current-context`
//! scalar and the context list. Everything else in the document (clusters,
//! users, preferences, extensions, apiVersion/kind) is carried through a
//! flattened YAML mapping so a load/save cycle preserves it untouched.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::contexts::ContextSet;
use crate::error::SwitchError;

/// One entry of the top-level `contexts` list. The context body (cluster,
/// user, namespace, extensions) is opaque to the switcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedContext {
    pub name: String,
    pub context: serde_yaml::Value,
}

/// In-memory kubeconfig document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kubeconfig {
    #[serde(
        rename = "current-context",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub current_context: String,

    #[serde(default)]
    pub contexts: Vec<NamedContext>,

    /// All remaining top-level fields, round-tripped verbatim.
    #[serde(flatten)]
    rest: serde_yaml::Mapping,
}

impl Kubeconfig {
    /// Read and parse the kubeconfig at `path`.
    pub fn load(path: &Path) -> Result<Self, SwitchError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                SwitchError::ConfigNotFound(path.to_path_buf())
            } else {
                SwitchError::ConfigUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        serde_yaml::from_str(&content).map_err(|source| SwitchError::ConfigMalformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the document back to `path` atomically.
    ///
    /// The serialized document goes to a sibling temp file first and is then
    /// renamed over the original, so an interrupted write never leaves a
    /// truncated kubeconfig behind.
    pub fn save(&self, path: &Path) -> Result<(), SwitchError> {
        let content =
            serde_yaml::to_string(self).map_err(|source| SwitchError::SaveFailed {
                path: path.to_path_buf(),
                source: std::io::Error::other(source),
            })?;

        let temp_path = temp_sibling(path);
        let io_err = |source| SwitchError::SaveFailed {
            path: path.to_path_buf(),
            source,
        };
        fs::write(&temp_path, &content).map_err(io_err)?;
        fs::rename(&temp_path, path).map_err(io_err)
    }

    /// Extract the sorted context-name view of this document.
    ///
    /// A `current-context` naming a context that does not exist is tolerated
    /// and reported as no current context.
    pub fn context_set(&self) -> ContextSet {
        let names = self.contexts.iter().map(|c| c.name.clone()).collect();
        let current = if self.current_context.is_empty() {
            None
        } else {
            Some(self.current_context.clone())
        };
        ContextSet::new(names, current)
    }

    /// Repoint `current-context` at an existing context.
    pub fn set_current_context(&mut self, name: &str) -> Result<(), SwitchError> {
        let mut set = self.context_set();
        set.set_current(name)?;
        self.current_context = name.to_string();
        Ok(())
    }
}

/// Temp-file path for the atomic write: the full file name plus a `.tmp`
/// suffix, so `config.yaml` stages through `config.yaml.tmp` and never
/// collides with an unrelated sibling.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}
