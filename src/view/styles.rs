//! Line styling configuration.
//!
//! Distinct styles for the timestamp column, nicks, channel events and the
//! highlight marker.

use crate::model::LineKind;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== LineStyles =====

/// Styles used to draw log lines.
///
/// Without colors the highlight falls back to reverse video so it stays
/// visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyles {
    timestamp: Style,
    speech: Style,
    event: Style,
    highlight: Style,
    cursor: Style,
    status: Style,
}

impl LineStyles {
    /// Create styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                timestamp: Style::default().fg(Color::DarkGray),
                speech: Style::default(),
                event: Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                highlight: Style::default().bg(Color::Yellow).fg(Color::Black),
                cursor: Style::default().add_modifier(Modifier::BOLD),
                status: Style::default().bg(Color::DarkGray).fg(Color::White),
            }
        } else {
            Self {
                timestamp: Style::default(),
                speech: Style::default(),
                event: Style::default(),
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                cursor: Style::default().add_modifier(Modifier::BOLD),
                status: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }

    /// Style of the `HH:MM:SS` column.
    pub fn timestamp(&self) -> Style {
        self.timestamp
    }

    /// Style of a line body by kind.
    pub fn body(&self, kind: LineKind) -> Style {
        if kind.is_speech() {
            self.speech
        } else {
            self.event
        }
    }

    /// Patch applied to every highlighted line.
    pub fn highlight(&self) -> Style {
        self.highlight
    }

    /// Patch applied to the timestamp of the cursor line.
    pub fn cursor(&self) -> Style {
        self.cursor
    }

    /// Style of the header and status bars.
    pub fn status(&self) -> Style {
        self.status
    }
}

impl Default for LineStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
