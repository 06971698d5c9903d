//! High-level command orchestration for the CLI.
//!
//! This module contains the handler functions for each CLI command
//! (`list`, switch, `version`). It serves as the coordination layer between:
//! - `crate::paths` for kubeconfig location.
//! - `crate::engine` for the switch/list logic.
//! - `crate::ui` for output and the interactive prompt.
//!
//! Each function here corresponds to a command in `main.rs`.

use anstyle::AnsiColor;

use crate::engine::{Outcome, list_contexts, switch_context};
use crate::error::SwitchError;
use crate::paths::Paths;
use crate::resolve::ContextSelector;
use crate::ui::Ui;

/// Build-time application identity, injected into the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

pub const APP_INFO: AppInfo = AppInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

/// List all contexts, marking the current one
pub fn list(paths: &Paths, ui: &Ui) -> Result<(), SwitchError> {
    let contexts = list_contexts(paths)?;

    let mut table = ui.simple_table();
    for (name, is_current) in &contexts {
        let icon = if *is_current { ui.icon_current() } else { " " };
        let name_cell = if *is_current {
            ui.colored_cell(name, AnsiColor::Green)
        } else {
            ui.cell(name)
        };
        table.add_row(vec![ui.cell(icon), name_cell]);
    }

    ui.println(table.to_string());
    Ok(())
}

/// Switch the current context and report the outcome
pub fn switch(
    paths: &Paths,
    positional: Option<&str>,
    flag: Option<&str>,
    selector: &dyn ContextSelector,
    ui: &Ui,
) -> Result<(), SwitchError> {
    match switch_context(paths, positional, flag, selector)? {
        Outcome::Switched(name) => {
            ui.ok(format!("Switched to context '{}'", ui.bold(name)));
        }
        Outcome::AlreadyCurrent(name) => {
            ui.info(format!(
                "'{}' is already the current context",
                ui.bold(name)
            ));
        }
    }
    Ok(())
}

/// Print the version line
pub fn version(info: &AppInfo, ui: &Ui) {
    ui.println(format!("{} {}", info.name, info.version));
}
