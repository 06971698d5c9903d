use directories::BaseDirs;
use std::path::{Path, PathBuf};

use crate::error::SwitchError;

/// Resolved filesystem locations used by kubesw
#[derive(Debug, Clone)]
pub struct Paths {
    /// The kubeconfig file all operations read and write
    pub kubeconfig: PathBuf,
}

impl Paths {
    /// Resolve the kubeconfig path from the real environment.
    ///
    /// Precedence: `--kubeconfig` flag > `KUBECONFIG` env var > `~/.kube/config`.
    pub fn discover(flag: Option<&str>) -> Result<Self, SwitchError> {
        let env = std::env::var("KUBECONFIG").ok();
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        let kubeconfig = resolve_kubeconfig(flag, env.as_deref(), home.as_deref())?;
        Ok(Self { kubeconfig })
    }
}

/// Pure precedence computation; empty strings count as unset.
///
/// Fails with `HomeDirUnavailable` only when the default location is needed and
/// no home directory exists.
pub fn resolve_kubeconfig(
    flag: Option<&str>,
    env: Option<&str>,
    home: Option<&Path>,
) -> Result<PathBuf, SwitchError> {
    if let Some(flag) = flag.filter(|s| !s.is_empty()) {
        return Ok(PathBuf::from(flag));
    }
    if let Some(env) = env.filter(|s| !s.is_empty()) {
        return Ok(PathBuf::from(env));
    }
    home.map(|home| home.join(".kube").join("config"))
        .ok_or(SwitchError::HomeDirUnavailable)
}
