//! Error taxonomy for the switch engine.
//!
//! Every failure a command can hit is a `SwitchError` variant, and every variant
//! maps to a stable exit code (loosely following BSD sysexits.h) so scripts can
//! branch on the failure kind without parsing messages.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the context-switch engine.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// No --kubeconfig flag, no KUBECONFIG env var, and the home directory
    /// could not be determined.
    #[error("could not determine home directory (set KUBECONFIG or pass --kubeconfig)")]
    HomeDirUnavailable,

    /// The kubeconfig file does not exist at the resolved path.
    #[error("kubeconfig not found: {0}")]
    ConfigNotFound(PathBuf),

    /// The kubeconfig file exists but could not be read.
    #[error("failed to read kubeconfig {path}: {source}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The kubeconfig file is not valid YAML or not a kubeconfig document.
    #[error("failed to parse kubeconfig {path}: {source}")]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The kubeconfig parsed but defines zero contexts.
    #[error("no contexts defined in {0}")]
    EmptyContextSet(PathBuf),

    /// The requested context name is not present in the kubeconfig.
    #[error("context '{name}' not found (available: {})", available.join(", "))]
    UnknownContext { name: String, available: Vec<String> },

    /// The interactive prompt was cancelled (Ctrl-C or ESC).
    #[error("prompt aborted")]
    PromptAborted,

    /// The interactive prompt failed for a reason other than cancellation.
    #[error("prompt failed: {0}")]
    PromptFailed(String),

    /// Writing the mutated kubeconfig back to disk failed. The original file is
    /// left untouched: the new document is written to a sibling temp file first.
    #[error("failed to write kubeconfig {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SwitchError {
    /// Process exit code for this failure kind.
    ///
    /// | code | meaning                          |
    /// |------|----------------------------------|
    /// | 65   | kubeconfig malformed             |
    /// | 66   | kubeconfig missing or unreadable |
    /// | 67   | unknown context name             |
    /// | 69   | empty context set                |
    /// | 70   | prompt failed                    |
    /// | 73   | save failed                      |
    /// | 78   | home directory unavailable       |
    /// | 130  | prompt aborted by the user       |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigMalformed { .. } => 65,
            Self::ConfigNotFound(_) | Self::ConfigUnreadable { .. } => 66,
            Self::UnknownContext { .. } => 67,
            Self::EmptyContextSet(_) => 69,
            Self::PromptFailed(_) => 70,
            Self::SaveFailed { .. } => 73,
            Self::HomeDirUnavailable => 78,
            Self::PromptAborted => 130,
        }
    }
}
