//! UI module for kubesw - centralized styling, color detection, tables, prompts.
//!
//! # No-color detection (in priority order):
//! 1. `--no-color` CLI flag (highest priority)
//! 2. `NO_COLOR` environment variable (any value)
//! 3. `TERM=dumb` environment variable
//! 4. Non-TTY stdout (detected via anstream)

use anstream::{eprintln, println};
use anstyle::{AnsiColor, Color, Style};
use comfy_table::{Cell, ContentArrangement, Table, presets};
use inquire::{InquireError, Select};
use std::io::IsTerminal;

use crate::error::SwitchError;
use crate::resolve::ContextSelector;

/// Color mode for output
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Always emit ANSI colors
    Always,
    /// Emit colors only if TTY and not disabled
    #[default]
    Auto,
    /// Never emit ANSI colors
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(format!("invalid color mode: {}", s)),
        }
    }
}

/// UI context holding resolved display settings
#[derive(Debug, Clone)]
pub struct Ui {
    /// Whether colors are enabled
    pub color_enabled: bool,
    /// Whether status lines are suppressed (--quiet)
    pub quiet: bool,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(ColorMode::Auto, false, false)
    }
}

impl Ui {
    /// Create a new UI context with color mode detection.
    ///
    /// Priority:
    /// 1. `force_no_color` (from --no-color flag)
    /// 2. `NO_COLOR` env var
    /// 3. `TERM=dumb`
    /// 4. TTY detection (for Auto mode)
    pub fn new(mode: ColorMode, force_no_color: bool, quiet: bool) -> Self {
        let color_enabled = Self::resolve_color(mode, force_no_color);

        // Configure anstream's color choice globally
        if !color_enabled {
            anstream::ColorChoice::write_global(anstream::ColorChoice::Never);
        }

        Self {
            color_enabled,
            quiet,
        }
    }

    fn resolve_color(mode: ColorMode, force_no_color: bool) -> bool {
        // --no-color flag takes highest priority
        if force_no_color {
            return false;
        }

        // NO_COLOR env var (any value disables color)
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }

        // TERM=dumb disables color
        if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
            return false;
        }

        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    // -------------------------------------------------------------------------
    // Styled label helpers
    // -------------------------------------------------------------------------

    fn style_label(&self, color: AnsiColor) -> Style {
        if self.color_enabled {
            Style::new().fg_color(Some(Color::Ansi(color))).bold()
        } else {
            Style::new()
        }
    }

    /// Print OK label (green) with message to stdout
    pub fn ok(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        let label = self.style_label(AnsiColor::Green);
        println!("{label}OK{label:#} {}", msg.as_ref());
    }

    /// Print INFO label (cyan) with message to stdout
    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        let label = self.style_label(AnsiColor::Cyan);
        println!("{label}INFO{label:#} {}", msg.as_ref());
    }

    /// Print ERROR label (red) with message to stderr.
    /// Errors print even in quiet mode.
    pub fn err(&self, msg: impl AsRef<str>) {
        let label = self.style_label(AnsiColor::Red);
        eprintln!("{label}ERROR{label:#} {}", msg.as_ref());
    }

    /// Return a styled string (bold) - for inline use
    pub fn bold(&self, s: impl AsRef<str>) -> String {
        if self.color_enabled {
            let st = Style::new().bold();
            format!("{st}{}{st:#}", s.as_ref())
        } else {
            s.as_ref().to_string()
        }
    }

    pub fn icon_current(&self) -> &'static str {
        if self.color_enabled { "✓" } else { "*" }
    }

    // -------------------------------------------------------------------------
    // Tables (comfy-table)
    // -------------------------------------------------------------------------

    /// Create a simple table without borders (for lists)
    pub fn simple_table(&self) -> Table {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.load_preset(presets::NOTHING);
        table
    }

    /// Create a styled cell
    pub fn cell(&self, content: impl Into<String>) -> Cell {
        Cell::new(content.into())
    }

    /// Create a colored cell using comfy-table's native styling
    pub fn colored_cell(&self, content: impl Into<String>, color: AnsiColor) -> Cell {
        let cell = Cell::new(content.into());
        if self.color_enabled {
            cell.fg(ansi_to_comfy_color(color))
        } else {
            cell
        }
    }

    // -------------------------------------------------------------------------
    // Println helpers (using anstream for proper tty handling)
    // -------------------------------------------------------------------------

    /// Print a line to stdout (suppressed by --quiet)
    pub fn println(&self, msg: impl AsRef<str>) {
        if !self.quiet {
            println!("{}", msg.as_ref());
        }
    }
}

/// Interactive single-choice context prompt backed by inquire.
pub struct InquireSelector;

impl ContextSelector for InquireSelector {
    fn select_one(
        &self,
        options: &[String],
        default: Option<&str>,
    ) -> Result<String, SwitchError> {
        let starting_cursor = default
            .and_then(|d| options.iter().position(|o| o == d))
            .unwrap_or(0);

        Select::new("Choose a Kubernetes context:", options.to_vec())
            .with_starting_cursor(starting_cursor)
            .prompt()
            .map_err(|err| match err {
                InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                    SwitchError::PromptAborted
                }
                other => SwitchError::PromptFailed(other.to_string()),
            })
    }
}

// -----------------------------------------------------------------------------
// Helper: convert anstyle::AnsiColor to comfy_table::Color
// -----------------------------------------------------------------------------

fn ansi_to_comfy_color(color: AnsiColor) -> comfy_table::Color {
    match color {
        AnsiColor::Black => comfy_table::Color::Black,
        AnsiColor::Red => comfy_table::Color::Red,
        AnsiColor::Green => comfy_table::Color::Green,
        AnsiColor::Yellow => comfy_table::Color::Yellow,
        AnsiColor::Blue => comfy_table::Color::Blue,
        AnsiColor::Magenta => comfy_table::Color::Magenta,
        AnsiColor::Cyan => comfy_table::Color::Cyan,
        AnsiColor::White => comfy_table::Color::White,
        AnsiColor::BrightBlack => comfy_table::Color::DarkGrey,
        AnsiColor::BrightRed => comfy_table::Color::Red,
        AnsiColor::BrightGreen => comfy_table::Color::Green,
        AnsiColor::BrightYellow => comfy_table::Color::Yellow,
        AnsiColor::BrightBlue => comfy_table::Color::Blue,
        AnsiColor::BrightMagenta => comfy_table::Color::Magenta,
        AnsiColor::BrightCyan => comfy_table::Color::Cyan,
        AnsiColor::BrightWhite => comfy_table::Color::White,
    }
}
